//! Combat system: melee hits from attacking entities.

use sim_component::{ComponentKind, ComponentStore, QueryDescriptor};
use sim_math::{Vec2, within_range};
use tracing::info;

use crate::config::SimConfig;
use crate::context::SystemContext;
use crate::error::SystemError;
use crate::pipeline::System;

/// Every entity whose `Input.attack` is set hits every other entity with
/// `Health` inside its attack box.
///
/// Attackers and targets are visited in ascending ID order. A target can be
/// hit by several attackers in one frame and an attacker can hit several
/// targets. Hit points have no floor.
#[derive(Debug, Clone)]
pub struct CombatSystem {
    range: Vec2,
}

impl CombatSystem {
    pub const NAME: &'static str = "combat";

    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self {
            range: Vec2::new(config.attack_range_x, config.attack_range_y),
        }
    }
}

impl System for CombatSystem {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn query(&self) -> QueryDescriptor {
        QueryDescriptor::new()
            .read(ComponentKind::Input)
            .read(ComponentKind::Position)
            .read(ComponentKind::Weapon)
            .write(ComponentKind::Health)
    }

    fn run(
        &mut self,
        store: &mut ComponentStore,
        ctx: &SystemContext,
    ) -> Result<usize, SystemError> {
        let ComponentStore {
            inputs,
            positions,
            weapons,
            healths,
            ..
        } = store;

        let mut hits = 0;
        for (&attacker, input) in inputs.iter() {
            if !input.attack {
                continue;
            }
            let origin = positions.require(attacker, Self::NAME)?.to_vec2();
            let damage = weapons.require(attacker, Self::NAME)?.damage;

            for (&target, health) in healths.iter_mut() {
                if target == attacker {
                    continue;
                }
                let target_pos = positions.require(target, Self::NAME)?.to_vec2();
                if !within_range(origin, target_pos, self.range) {
                    continue;
                }

                // Unbounded below, but never wraps.
                health.hp = health.hp.saturating_sub(damage);
                hits += 1;
                info!(
                    frame_id = ctx.frame_id,
                    %attacker,
                    %target,
                    damage,
                    hp = health.hp,
                    "entity hit"
                );
            }
        }

        Ok(hits)
    }
}
