//! Presentation query: what the renderer should draw this frame.
//!
//! This is the last step of every frame. It only reads the store; drawing is
//! left to whatever [`PresentationSink`](crate::PresentationSink) consumes
//! the records.

use std::fmt;

use serde::Serialize;
use sim_component::{ComponentKind, ComponentStore, Entity, QueryDescriptor};

use crate::error::SystemError;

/// One drawable entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub entity: Entity,
    pub image: String,
    /// X position rounded to the nearest integer.
    pub x: i64,
    /// Y position rounded to the nearest integer.
    pub y: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
}

impl fmt::Display for DisplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.image, self.x, self.y)?;
        if let Some(hp) = self.hp {
            write!(f, " HP: {hp}")?;
        }
        Ok(())
    }
}

/// Collects a [`DisplayRecord`] for every entity with a `Sprite`.
#[derive(Debug, Clone, Default)]
pub struct PresentationQuery;

impl PresentationQuery {
    pub const NAME: &'static str = "presentation";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn query(&self) -> QueryDescriptor {
        QueryDescriptor::new()
            .read(ComponentKind::Sprite)
            .read(ComponentKind::Position)
            .optional(ComponentKind::Health)
    }

    /// Build this frame's records in ascending entity order.
    ///
    /// # Errors
    ///
    /// Fails if a sprite-carrying entity has no `Position`.
    pub fn collect(&self, store: &ComponentStore) -> Result<Vec<DisplayRecord>, SystemError> {
        let mut records = Vec::with_capacity(store.sprites.len());
        for (&entity, sprite) in &store.sprites {
            let position = store.positions.require(entity, Self::NAME)?;
            records.push(DisplayRecord {
                entity,
                image: sprite.image.clone(),
                x: round_half_up(position.x),
                y: round_half_up(position.y),
                hp: store.healths.get(entity).map(|h| h.hp),
            });
        }
        Ok(records)
    }
}

/// Nearest integer, with exact halves going toward positive infinity
/// (`2.5 → 3`, `-2.5 → -2`).
fn round_half_up(v: f32) -> i64 {
    let floor = v.floor();
    let rounded = if v - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}
