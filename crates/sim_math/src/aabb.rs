//! Axis-aligned bounding boxes.
//!
//! An [`Aabb`] is anchored at its minimum (bottom-left) corner and extends by
//! `size` along +X and +Y. It is the shape every collider has in the
//! simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box described by its minimum corner and extents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Aabb {
    /// Bottom-left corner in world space.
    pub min: Vec2,
    /// Width and height. Expected to be non-negative.
    pub size: Vec2,
}

impl Aabb {
    /// Create a box from its bottom-left corner and extents.
    #[must_use]
    pub const fn from_corner(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// The top-right corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// The Y coordinate of the top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    ///
    /// ```text
    /// a.min.x < b.max.x && a.max.x > b.min.x &&
    /// a.min.y < b.max.y && a.max.y > b.min.y
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.cmplt(b_max).all() && a_max.cmpgt(other.min).all()
    }
}

/// Independent-axis range check: `|a.x - b.x| < range.x && |a.y - b.y| < range.y`.
#[must_use]
pub fn within_range(a: Vec2, b: Vec2, range: Vec2) -> bool {
    (a - b).abs().cmplt(range).all()
}
