//! The component value types.
//!
//! Each type is a small plain value stored independently per entity. Field
//! names follow the wire shape used by scenario files.

use serde::{Deserialize, Serialize};
use sim_math::{Aabb, Vec2};

/// World-space position. For colliders this is the bottom-left corner.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Rate of change of [`Position`], in world units per second.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Opaque presentation handle. The name of an image, not its pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sprite {
    pub image: String,
}

impl Sprite {
    #[must_use]
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }
}

/// Hit points. There is no floor: `hp` keeps going negative under damage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub hp: i32,
}

impl Health {
    #[must_use]
    pub const fn new(hp: i32) -> Self {
        Self { hp }
    }
}

/// A melee weapon: flat damage per hit plus a classification tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Weapon {
    pub damage: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Weapon {
    #[must_use]
    pub fn new(damage: i32, kind: impl Into<String>) -> Self {
        Self {
            damage,
            kind: kind.into(),
        }
    }
}

/// The special ability an [`Augmentation`] grants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AugmentationKind {
    Cloaking,
    JetBoost,
}

/// A toggled special ability. `active` is recomputed every frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Augmentation {
    #[serde(rename = "type")]
    pub kind: AugmentationKind,
    pub active: bool,
}

impl Augmentation {
    /// A new, inactive augmentation.
    #[must_use]
    pub const fn new(kind: AugmentationKind) -> Self {
        Self {
            kind,
            active: false,
        }
    }
}

/// Per-frame intent flags, overwritten by the input source every frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Input {
    pub right: bool,
    pub left: bool,
    pub jump: bool,
    pub augment: bool,
    pub attack: bool,
}

/// A depletable resource that gates augmentation use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnergyCore {
    pub amount: i32,
    pub max: i32,
}

impl EnergyCore {
    #[must_use]
    pub const fn new(amount: i32, max: i32) -> Self {
        Self { amount, max }
    }
}

/// Collider extents. The box is anchored at the entity's [`Position`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Collision {
    pub width: f32,
    pub height: f32,
}

impl Collision {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The collider's bounding box when placed at `position`.
    #[must_use]
    pub fn aabb_at(&self, position: Position) -> Aabb {
        Aabb::from_corner(position.to_vec2(), Vec2::new(self.width, self.height))
    }
}
