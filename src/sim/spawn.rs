//! Seeded box placement
//!
//! Boxes are placed one at a time by rejection sampling: a candidate spot is
//! redrawn while it sits too close to any box already placed.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::boxes::BouncingBox;
use crate::color::Rgb;
use crate::consts::*;
use crate::error::DemoError;

/// Produces the starting box layout from a seed
pub struct BoxSpawner {
    rng: Pcg32,
}

impl BoxSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn random_color(&mut self) -> Rgb {
        Rgb::new(self.rng.random(), self.rng.random(), self.rng.random())
    }

    /// Each axis in [-3, -1] ∪ [1, 3]
    pub fn random_velocity(&mut self) -> IVec2 {
        IVec2::new(self.random_axis_speed(), self.random_axis_speed())
    }

    fn random_axis_speed(&mut self) -> i32 {
        let speed = self.rng.random_range(MIN_AXIS_SPEED..=MAX_AXIS_SPEED);
        if self.rng.random_bool(0.5) { -speed } else { speed }
    }

    pub fn random_bounce_count(&mut self) -> u32 {
        self.rng.random_range(MIN_BOUNCE_COUNT..=MAX_BOUNCE_COUNT)
    }

    /// A point at least `offset` away from every window edge (bounds inclusive)
    pub fn random_coordinate(&mut self, width: i32, height: i32, offset: i32) -> IVec2 {
        IVec2::new(
            self.rng.random_range(offset..=width - offset),
            self.rng.random_range(offset..=height - offset),
        )
    }

    /// Build a box with a random color, velocity and budget at `(left, top)`
    pub fn make_box(&mut self, id: u32, left: i32, top: i32) -> BouncingBox {
        let color = self.random_color();
        let velocity = self.random_velocity();
        let bounce_count = self.random_bounce_count();
        BouncingBox::new(id, left, top, color, velocity, bounce_count)
    }

    /// Place `count` boxes so no box's top-left lands within `min_dist` of an
    /// earlier box's center. Box 0 is then launched as the cue box.
    pub fn spawn_boxes(
        &mut self,
        count: usize,
        (width, height): (i32, i32),
        offset: i32,
        min_dist: f32,
    ) -> Result<Vec<BouncingBox>, DemoError> {
        let mut boxes: Vec<BouncingBox> = Vec::with_capacity(count);

        for id in 0..count {
            let mut attempts = 0;
            let spot = loop {
                let candidate = self.random_coordinate(width, height, offset);
                if !boxes.iter().any(|b| b.too_close(candidate.x, candidate.y, min_dist)) {
                    break candidate;
                }
                attempts += 1;
                if attempts >= MAX_PLACEMENT_ATTEMPTS {
                    return Err(DemoError::Placement {
                        placed: boxes.len(),
                        requested: count,
                    });
                }
            };
            boxes.push(self.make_box(id as u32, spot.x, spot.y));
        }

        if let Some(cue) = boxes.first_mut() {
            cue.set_velocity(CUE_BOX_VELOCITY);
        }

        Ok(boxes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(seed: u64) -> Vec<BouncingBox> {
        BoxSpawner::new(seed)
            .spawn_boxes(10, (800, 800), 100, 100.0)
            .expect("placement")
    }

    #[test]
    fn test_velocity_ranges() {
        let mut spawner = BoxSpawner::new(7);
        for _ in 0..500 {
            let v = spawner.random_velocity();
            for axis in [v.x, v.y] {
                assert!((1..=3).contains(&axis.abs()), "axis speed {}", axis);
            }
        }
    }

    #[test]
    fn test_coordinates_respect_offset() {
        let mut spawner = BoxSpawner::new(11);
        for _ in 0..500 {
            let p = spawner.random_coordinate(800, 800, 100);
            assert!((100..=700).contains(&p.x));
            assert!((100..=700).contains(&p.y));
        }
    }

    #[test]
    fn test_spawn_layout() {
        let boxes = spawn(42);
        assert_eq!(boxes.len(), 10);

        for (i, b) in boxes.iter().enumerate() {
            assert_eq!(b.id(), i as u32);
            assert!(b.is_alive());
            assert!((MIN_BOUNCE_COUNT..=MAX_BOUNCE_COUNT).contains(&b.bounce_count()));
            if i > 0 {
                assert!((1..=3).contains(&b.velocity().x.abs()));
                assert!((1..=3).contains(&b.velocity().y.abs()));
            }
        }
        assert_eq!(boxes[0].velocity(), CUE_BOX_VELOCITY);
    }

    #[test]
    fn test_spawn_keeps_distance() {
        for seed in 0..20 {
            let boxes = spawn(seed);
            for (i, later) in boxes.iter().enumerate() {
                let spot = later.rect().top_left();
                for earlier in &boxes[..i] {
                    assert!(!earlier.too_close(spot.x, spot.y, 100.0));
                    assert_ne!(earlier.rect().top_left(), spot);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = spawn(1234);
        let b = spawn(1234);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.rect(), y.rect());
            assert_eq!(x.velocity(), y.velocity());
            assert_eq!(x.color(), y.color());
            assert_eq!(x.bounce_count(), y.bounce_count());
        }
    }

    #[test]
    fn test_impossible_layout_errors() {
        // A 1x1 spawn area can hold only one box
        let result = BoxSpawner::new(3).spawn_boxes(2, (200, 200), 100, 100.0);
        match result {
            Err(DemoError::Placement { placed, requested }) => {
                assert_eq!(placed, 1);
                assert_eq!(requested, 2);
            }
            other => panic!("expected placement error, got {:?}", other.map(|b| b.len())),
        }
    }
}
