//! Deterministic simulation module
//!
//! Box movement, collisions and explosion lifetimes live here. This module
//! stays pure and deterministic:
//! - Integer positions and velocities, one step per frame
//! - Seeded RNG only
//! - Stable iteration order (by box index)
//! - No rendering or platform dependencies; sounds are queued, not played

pub mod boxes;
pub mod explosion;
pub mod rect;
pub mod spawn;
pub mod tick;

pub use boxes::{BouncingBox, TERMINAL_COLOR};
pub use explosion::{Effects, Explosion};
pub use rect::Rect;
pub use spawn::BoxSpawner;
pub use tick::{StepReport, step};
