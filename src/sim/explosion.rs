//! Explosion effects
//!
//! An explosion is spawned on a box the moment it is spent. It lives for a
//! fixed number of ticks, flickering between two sprite frames, and is then
//! dropped by the registry that owns it.

use glam::IVec2;

use super::boxes::BouncingBox;
use crate::consts::{EXPLOSION_ANIM_CYCLE, EXPLOSION_LIFE};

/// A short-lived explosion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explosion {
    center: IVec2,
    life: i32,
    frame: usize,
}

impl Explosion {
    /// Place a fresh explosion over `actor`
    pub fn new(actor: &BouncingBox) -> Self {
        Self {
            center: actor.rect().center(),
            life: EXPLOSION_LIFE,
            frame: 0,
        }
    }

    /// Advance one tick. Returns `false` once the explosion has burnt out.
    pub fn update(&mut self) -> bool {
        self.life -= 1;
        self.frame = ((self.life / EXPLOSION_ANIM_CYCLE) % 2) as usize;
        self.life > 0
    }

    /// Where the sprite is centered
    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn life(&self) -> i32 {
        self.life
    }

    /// Index of the sprite frame to draw (0 or 1)
    pub fn frame(&self) -> usize {
        self.frame
    }
}

/// Registry of active effects, shared by whoever spawns and draws them
#[derive(Debug, Default)]
pub struct Effects {
    explosions: Vec<Explosion>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an explosion on `actor`
    pub fn spawn(&mut self, actor: &BouncingBox) {
        log::debug!("Box {} exploded", actor.id());
        self.explosions.push(Explosion::new(actor));
    }

    /// Tick every explosion, dropping the ones that burnt out
    pub fn update(&mut self) {
        self.explosions.retain_mut(Explosion::update);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Explosion> {
        self.explosions.iter()
    }

    pub fn len(&self) -> usize {
        self.explosions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.explosions.is_empty()
    }

    pub fn clear(&mut self) {
        self.explosions.clear();
    }
}
