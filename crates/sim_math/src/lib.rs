//! # sim_math
//!
//! Math types for the simulation core. Re-exports [`glam`] for 2D vector math
//! and defines [`Aabb`], the bounding-box primitive used by collision.

pub mod aabb;

// Re-export glam types for convenience.
pub use glam::Vec2;

pub use aabb::{Aabb, within_range};
