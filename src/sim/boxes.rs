//! The bouncing box entity
//!
//! A box moves by its integer velocity every frame. Wall contact reflects it
//! for free; box-on-box contact spends one unit of its bounce budget. Once the
//! budget is gone the next collision freezes it for good:
//!
//! ```text
//! Alive (budget > 0) --bounce--> Alive (budget - 1) ... --bounce--> Dead (frozen, white)
//! ```

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::audio::SoundEffect;
use crate::color::{self, Rgb};
use crate::consts::{BOX_WIDTH, CUE_BOX_ID};

/// Color a box takes once it has been spent
pub const TERMINAL_COLOR: Rgb = color::WHITE;

/// A square box bouncing around the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BouncingBox {
    id: u32,
    rect: Rect,
    velocity: IVec2,
    color: Rgb,
    bounce_count: u32,
    alive: bool,
}

impl BouncingBox {
    pub fn new(id: u32, left: i32, top: i32, color: Rgb, velocity: IVec2, bounce_count: u32) -> Self {
        Self {
            id,
            rect: Rect::new(left, top, BOX_WIDTH, BOX_WIDTH),
            velocity,
            color,
            bounce_count,
            alive: true,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn bounce_count(&self) -> u32 {
        self.bounce_count
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// The cue box bounces forever
    pub fn is_cue(&self) -> bool {
        self.id == CUE_BOX_ID
    }

    /// Reverse the velocity on every axis whose boundary the box has reached.
    ///
    /// Queues a reflect sound on every call, flip or not; a box sitting past
    /// a wall keeps sounding until it is back inside.
    pub fn reflect(&mut self, xmin: i32, xmax: i32, ymin: i32, ymax: i32, sounds: &mut Vec<SoundEffect>) {
        if self.rect.left <= xmin || self.rect.right() >= xmax {
            self.velocity.x = -self.velocity.x;
        }
        if self.rect.top <= ymin || self.rect.bottom() >= ymax {
            self.velocity.y = -self.velocity.y;
        }
        sounds.push(SoundEffect::Reflect);
    }

    /// Respond to a collision with another box.
    ///
    /// Returns `true` when the box has just been spent (or was already dead)
    /// and an explosion should be spawned on it.
    pub fn bounce(&mut self, sounds: &mut Vec<SoundEffect>) -> bool {
        if self.bounce_count > 0 && self.alive {
            if !self.is_cue() {
                self.bounce_count -= 1;
            }
            self.velocity = -self.velocity;
            sounds.push(SoundEffect::Bounce);
            false
        } else {
            self.stop();
            self.alive = false;
            self.color = TERMINAL_COLOR;
            true
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.rect.translate(self.velocity);
    }

    /// Euclidean distance from the box center to `(x, y)`
    pub fn distance_from(&self, x: i32, y: i32) -> f32 {
        let center = self.rect.center();
        let dx = (x - center.x) as f32;
        let dy = (y - center.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn too_close(&self, x: i32, y: i32, min_dist: f32) -> bool {
        self.distance_from(x, y) < min_dist
    }

    pub fn stop(&mut self) {
        self.velocity = IVec2::ZERO;
    }

    pub fn set_velocity(&mut self, velocity: IVec2) {
        self.velocity = velocity;
    }
}

impl fmt::Display for BouncingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Box({}, {}): Color({}, {}, {}), width = {}, velocity = ({}, {})",
            self.id,
            self.rect.left,
            self.rect.top,
            self.color.r,
            self.color.g,
            self.color.b,
            self.rect.width,
            self.velocity.x,
            self.velocity.y,
        )
    }
}
