//! Bouncing Boxes - colored boxes bouncing inside a bordered window
//!
//! Core modules:
//! - `sim`: Simulation (boxes, collision sweep, explosions, spawning)
//! - `scene`: Scene state machine (title screens, simulation) and its director
//! - `renderer`: CPU canvas, sprites and text
//! - `platform`: Native window, frame pacing and presentation
//! - `audio`: Sound effects and looping soundtrack
//! - `assets`: Explosion sprite and font cache

pub mod assets;
pub mod audio;
pub mod color;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::DemoError;
pub use platform::run;
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    use glam::IVec2;

    /// Side length of every box, in pixels
    pub const BOX_WIDTH: i32 = 40;

    /// Inclusive range a box's bounce budget is drawn from
    pub const MIN_BOUNCE_COUNT: u32 = 5;
    pub const MAX_BOUNCE_COUNT: u32 = 10;

    /// Per-axis speed range for a freshly spawned box (sign chosen separately)
    pub const MIN_AXIS_SPEED: i32 = 1;
    pub const MAX_AXIS_SPEED: i32 = 3;

    /// Id of the cue box, which never spends its bounce budget
    pub const CUE_BOX_ID: u32 = 0;
    /// Velocity the cue box is launched with after placement
    pub const CUE_BOX_VELOCITY: IVec2 = IVec2::new(10, 10);

    /// Ticks an explosion stays on screen
    pub const EXPLOSION_LIFE: i32 = 12;
    /// Ticks per explosion animation frame
    pub const EXPLOSION_ANIM_CYCLE: i32 = 3;

    /// Default frame rate for scenes that don't declare their own
    pub const DEFAULT_FRAME_RATE: u32 = 60;

    /// Give up placing boxes after this many rejected candidates
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
}
