//! Demo settings
//!
//! Built from defaults plus the command line. The only recognised argument is
//! `soff`, which turns sound off; there is no settings file.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRAME_RATE;

/// Command-line token that disables sound
pub const SOUND_OFF_FLAG: &str = "soff";

/// Name of the asset directory shipped next to the binary or the crate
pub const DATA_DIR_NAME: &str = "data";

/// Demo settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Play sound effects and soundtracks
    pub sound_on: bool,

    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,

    // === Simulation ===
    /// Number of boxes spawned for the bouncing scene
    pub num_boxes: usize,
    /// Frame rate of the bouncing scene
    pub frame_rate: u32,
    /// Minimum distance between a new box and every box already placed
    pub min_spawn_distance: f32,
    /// Margin kept between spawn coordinates and the window edges
    pub spawn_offset: i32,
    /// Seed for placement, colors, velocities and bounce budgets
    pub seed: u64,

    /// Directory holding the sprite, sounds and font
    pub data_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_on: true,

            window_width: 800,
            window_height: 800,
            title: "Bouncing Boxes".to_string(),

            num_boxes: 10,
            frame_rate: DEFAULT_FRAME_RATE,
            min_spawn_distance: 100.0,
            spawn_offset: 100,
            seed: 0,

            data_dir: default_data_dir(),
        }
    }
}

impl Settings {
    /// Settings for a run with the given arguments (program name excluded).
    ///
    /// `soff` anywhere in the list disables sound; everything else is ignored.
    /// The seed is drawn fresh so every run looks different.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sound_off = args.into_iter().any(|a| a.as_ref() == SOUND_OFF_FLAG);
        Self {
            sound_on: !sound_off,
            seed: rand::random(),
            ..Self::default()
        }
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// The `data` directory beside the executable if there is one, otherwise the
/// one in the crate root. Neither depends on the working directory.
fn default_data_dir() -> PathBuf {
    let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DATA_DIR_NAME)))
        .filter(|dir| dir.is_dir());
    beside_exe.unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_on_by_default() {
        let settings = Settings::from_args(Vec::<String>::new());
        assert!(settings.sound_on);
    }

    #[test]
    fn test_soff_anywhere_disables_sound() {
        assert!(!Settings::from_args(["soff"]).sound_on);
        assert!(!Settings::from_args(["foo", "soff", "bar"]).sound_on);
    }

    #[test]
    fn test_soff_must_match_exactly() {
        assert!(Settings::from_args(["--soff"]).sound_on);
        assert!(Settings::from_args(["SOFF"]).sound_on);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window_size(), (800, 800));
        assert_eq!(settings.num_boxes, 10);
        assert_eq!(settings.frame_rate, 60);
    }

    #[test]
    fn test_default_data_dir_holds_assets() {
        let dir = Settings::default().data_dir;
        assert!(dir.is_absolute(), "{} is relative", dir.display());
        for name in [crate::assets::EXPLOSION_IMAGE, crate::audio::BOUNCE_SOUND, crate::audio::REFLECT_SOUND] {
            assert!(dir.join(name).is_file(), "missing {}", name);
        }
    }
}
