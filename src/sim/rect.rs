//! Integer axis-aligned rectangles
//!
//! Edges follow the usual raster convention: `right` and `bottom` are one past
//! the last covered pixel, so a 40-wide rect at `left = 0` has `right = 40`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A `width`×`height` rect whose center is `center`
    pub fn centered_at(center: IVec2, width: i32, height: i32) -> Self {
        Self::new(center.x - width / 2, center.y - height / 2, width, height)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    #[inline]
    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.left, self.top)
    }

    /// Center point, rounded toward the top-left
    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.left + self.width / 2, self.top + self.height / 2)
    }

    /// Move in place
    #[inline]
    pub fn translate(&mut self, delta: IVec2) {
        self.left += delta.x;
        self.top += delta.y;
    }

    /// True when `other` lies entirely within `self`; shared edges count as inside
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when the two rects share at least one pixel; touching edges don't
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}
