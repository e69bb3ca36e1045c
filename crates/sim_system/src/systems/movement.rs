//! Movement system: integrates positions, then applies gravity.

use sim_component::{ComponentKind, ComponentStore, Position, QueryDescriptor};

use crate::config::SimConfig;
use crate::context::SystemContext;
use crate::error::SystemError;
use crate::pipeline::System;

/// Semi-implicit Euler step with a hard floor at `y = 0`.
///
/// Position advances with the velocity from before this frame's gravity, so
/// an entity at rest on the floor stays at rest.
#[derive(Debug, Clone)]
pub struct MovementSystem {
    gravity: f32,
}

impl MovementSystem {
    pub const NAME: &'static str = "movement";

    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self {
            gravity: config.gravity,
        }
    }
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn query(&self) -> QueryDescriptor {
        QueryDescriptor::new()
            .write(ComponentKind::Position)
            .optional(ComponentKind::Velocity)
    }

    fn run(
        &mut self,
        store: &mut ComponentStore,
        ctx: &SystemContext,
    ) -> Result<usize, SystemError> {
        let dt = ctx.dt as f32;
        let ComponentStore {
            positions,
            velocities,
            ..
        } = store;

        let mut moved = 0;
        for (&entity, position) in positions.iter_mut() {
            let Some(velocity) = velocities.get_mut(entity) else {
                continue;
            };

            *position = Position::from(position.to_vec2() + velocity.to_vec2() * dt);
            velocity.y -= self.gravity * dt;

            if position.y < 0.0 {
                position.y = 0.0;
                velocity.y = 0.0;
            }
            moved += 1;
        }

        Ok(moved)
    }
}
