//! Collision system: lands moving colliders on top of whatever they overlap.

use sim_component::{ComponentKind, ComponentStore, QueryDescriptor, Velocity};

use crate::context::SystemContext;
use crate::error::SystemError;
use crate::pipeline::System;

/// All-pairs AABB test over every entity with `Collision`.
///
/// For each ordered pair (A, B) in ascending ID order, an overlap stops A
/// (if it has a velocity) and snaps A onto B's top edge. B is never moved
/// and there is no horizontal separation, so the result depends on which
/// entity of a pair is A. Later pairs for the same A see A's snapped
/// position.
#[derive(Debug, Clone, Default)]
pub struct CollisionSystem;

impl CollisionSystem {
    pub const NAME: &'static str = "collision";

    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl System for CollisionSystem {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn query(&self) -> QueryDescriptor {
        QueryDescriptor::new()
            .read(ComponentKind::Collision)
            .write(ComponentKind::Position)
            .optional(ComponentKind::Velocity)
    }

    fn run(
        &mut self,
        store: &mut ComponentStore,
        _ctx: &SystemContext,
    ) -> Result<usize, SystemError> {
        let ComponentStore {
            positions,
            velocities,
            collisions,
            ..
        } = store;

        let candidates = positions.entities();
        let mut landings = 0;

        for (&a, collider_a) in collisions.iter() {
            for &b in &candidates {
                if a == b {
                    continue;
                }
                let Some(collider_b) = collisions.get(b) else {
                    continue;
                };

                let box_a = collider_a.aabb_at(*positions.require(a, Self::NAME)?);
                let box_b = collider_b.aabb_at(*positions.require(b, Self::NAME)?);
                if !box_a.overlaps(&box_b) {
                    continue;
                }

                if let Some(velocity) = velocities.get_mut(a) {
                    *velocity = Velocity::ZERO;
                    positions.require_mut(a, Self::NAME)?.y = box_b.top();
                    landings += 1;
                }
            }
        }

        Ok(landings)
    }
}
