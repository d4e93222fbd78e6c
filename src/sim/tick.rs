//! Per-frame simulation step
//!
//! Moves every box, then resolves collisions in one sweep over the boxes in
//! index order. A box outside the boundary is reflected and skips the pair
//! checks for this frame; a box inside it is tested against every later box.

use super::boxes::BouncingBox;
use super::explosion::Effects;
use super::rect::Rect;
use crate::audio::SoundEffect;

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Boxes reflected off the boundary
    pub reflections: usize,
    /// Overlapping box pairs found
    pub collisions: usize,
    /// Explosions spawned
    pub explosions: usize,
}

/// Advance the boxes by one frame inside `boundary`.
///
/// Pairs are visited in `(i, j)` order with `i < j`, and each box of an
/// overlapping pair bounces once. The order matters: a bounce can kill a box,
/// which changes how its later pairs resolve in the same sweep.
pub fn step(
    boxes: &mut [BouncingBox],
    boundary: &Rect,
    effects: &mut Effects,
    sounds: &mut Vec<SoundEffect>,
) -> StepReport {
    let mut report = StepReport::default();

    for b in boxes.iter_mut() {
        b.update();
    }

    for i in 0..boxes.len() {
        if !boundary.contains(boxes[i].rect()) {
            boxes[i].reflect(
                boundary.left,
                boundary.right(),
                boundary.top,
                boundary.bottom(),
                sounds,
            );
            report.reflections += 1;
            continue;
        }

        for j in (i + 1)..boxes.len() {
            let (head, tail) = boxes.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);

            if !a.rect().intersects(b.rect()) {
                continue;
            }
            report.collisions += 1;

            if a.bounce(sounds) {
                effects.spawn(a);
                report.explosions += 1;
            }
            if b.bounce(sounds) {
                effects.spawn(b);
                report.explosions += 1;
            }
        }
    }

    report
}
