//! Input system: turns per-entity intent flags into motion and abilities.

use sim_component::{AugmentationKind, ComponentKind, ComponentStore, Input, QueryDescriptor};

use crate::config::SimConfig;
use crate::context::SystemContext;
use crate::error::SystemError;
use crate::pipeline::System;

/// Applies `Input` flags to `Velocity`, `Augmentation`, and `EnergyCore`.
///
/// Every entity with `Input` must also carry the other three.
#[derive(Debug, Clone)]
pub struct InputSystem {
    move_speed: f32,
    jump_speed: f32,
    jet_boost_speed: f32,
    augment_cost: i32,
}

impl InputSystem {
    pub const NAME: &'static str = "input";

    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self {
            move_speed: config.move_speed,
            jump_speed: config.jump_speed,
            jet_boost_speed: config.jet_boost_speed,
            augment_cost: config.augment_cost,
        }
    }

    fn horizontal_speed(&self, input: &Input) -> f32 {
        if input.right {
            self.move_speed
        } else if input.left {
            -self.move_speed
        } else {
            0.0
        }
    }
}

impl System for InputSystem {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn query(&self) -> QueryDescriptor {
        QueryDescriptor::new()
            .read(ComponentKind::Input)
            .write(ComponentKind::Velocity)
            .write(ComponentKind::Augmentation)
            .write(ComponentKind::EnergyCore)
    }

    fn run(
        &mut self,
        store: &mut ComponentStore,
        _ctx: &SystemContext,
    ) -> Result<usize, SystemError> {
        let ComponentStore {
            inputs,
            velocities,
            augmentations,
            energy_cores,
            ..
        } = store;

        let mut processed = 0;
        for (&entity, input) in inputs.iter() {
            let velocity = velocities.require_mut(entity, Self::NAME)?;
            let augmentation = augmentations.require_mut(entity, Self::NAME)?;
            let core = energy_cores.require_mut(entity, Self::NAME)?;

            velocity.x = self.horizontal_speed(input);

            // Grounded means a vertical speed of exactly zero.
            if input.jump && velocity.y == 0.0 {
                velocity.y = self.jump_speed;
            }

            if input.augment && core.amount >= self.augment_cost {
                augmentation.active = true;
                core.amount -= self.augment_cost;
                if augmentation.kind == AugmentationKind::JetBoost {
                    velocity.y = self.jet_boost_speed;
                }
            } else {
                augmentation.active = false;
            }

            processed += 1;
        }

        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use sim_component::{Augmentation, ComponentError, EnergyCore, Entity, Velocity};

    use super::*;
    use crate::systems::test_util::ctx;

    fn player(
        store: &mut ComponentStore,
        kind: AugmentationKind,
        energy: i32,
        input: Input,
    ) -> Entity {
        let e = Entity(0);
        store.insert(e, input);
        store.insert(e, Velocity::ZERO);
        store.insert(e, Augmentation::new(kind));
        store.insert(e, EnergyCore::new(energy, 100));
        e
    }

    fn run(store: &mut ComponentStore) -> Result<usize, SystemError> {
        InputSystem::new(&SimConfig::default()).run(store, &ctx(0.016))
    }

    #[test]
    fn test_right_takes_priority_over_left() {
        let mut store = ComponentStore::new();
        let input = Input {
            right: true,
            left: true,
            ..Input::default()
        };
        let e = player(&mut store, AugmentationKind::Cloaking, 0, input);
        run(&mut store).unwrap();
        assert_eq!(store.get::<Velocity>(e).unwrap().x, 5.0);

        store.insert(e, Input {
            left: true,
            ..Input::default()
        });
        run(&mut store).unwrap();
        assert_eq!(store.get::<Velocity>(e).unwrap().x, -5.0);

        store.insert(e, Input::default());
        run(&mut store).unwrap();
        assert_eq!(store.get::<Velocity>(e).unwrap().x, 0.0);
    }

    #[test]
    fn test_jump_only_when_exactly_grounded() {
        let mut store = ComponentStore::new();
        let input = Input {
            jump: true,
            ..Input::default()
        };
        let e = player(&mut store, AugmentationKind::Cloaking, 0, input);
        run(&mut store).unwrap();
        assert_eq!(store.get::<Velocity>(e).unwrap().y, 10.0);

        store.insert(e, Velocity::new(0.0, 0.0001));
        run(&mut store).unwrap();
        assert_eq!(store.get::<Velocity>(e).unwrap().y, 0.0001);
    }

    #[test]
    fn test_augment_with_insufficient_energy() {
        let mut store = ComponentStore::new();
        let input = Input {
            augment: true,
            ..Input::default()
        };
        let e = player(&mut store, AugmentationKind::Cloaking, 15, input);
        run(&mut store).unwrap();
        assert!(!store.get::<Augmentation>(e).unwrap().active);
        assert_eq!(store.get::<EnergyCore>(e).unwrap().amount, 15);
    }

    #[test]
    fn test_augment_with_exact_cost() {
        let mut store = ComponentStore::new();
        let input = Input {
            augment: true,
            ..Input::default()
        };
        let e = player(&mut store, AugmentationKind::Cloaking, 20, input);
        run(&mut store).unwrap();
        assert!(store.get::<Augmentation>(e).unwrap().active);
        assert_eq!(store.get::<EnergyCore>(e).unwrap().amount, 0);
        assert_eq!(store.get::<Velocity>(e).unwrap().y, 0.0);
    }

    #[test]
    fn test_jet_boost_overrides_jump() {
        let mut store = ComponentStore::new();
        let input = Input {
            jump: true,
            augment: true,
            ..Input::default()
        };
        let e = player(&mut store, AugmentationKind::JetBoost, 50, input);
        run(&mut store).unwrap();
        assert_eq!(store.get::<Velocity>(e).unwrap().y, 15.0);
        assert_eq!(store.get::<EnergyCore>(e).unwrap().amount, 30);
    }

    #[test]
    fn test_augmentation_deactivates_without_request() {
        let mut store = ComponentStore::new();
        let e = player(&mut store, AugmentationKind::Cloaking, 50, Input::default());
        store.insert(e, Augmentation {
            kind: AugmentationKind::Cloaking,
            active: true,
        });
        run(&mut store).unwrap();
        assert!(!store.get::<Augmentation>(e).unwrap().active);
        assert_eq!(store.get::<EnergyCore>(e).unwrap().amount, 50);
    }

    #[test]
    fn test_missing_energy_core_fails_fast() {
        let mut store = ComponentStore::new();
        let e = Entity(4);
        store.insert(e, Input::default());
        store.insert(e, Velocity::ZERO);
        store.insert(e, Augmentation::new(AugmentationKind::Cloaking));

        let err = run(&mut store).unwrap_err();
        assert_eq!(
            err,
            SystemError::Component(ComponentError::MissingComponent {
                system: "input",
                entity: e,
                kind: ComponentKind::EnergyCore,
            })
        );
    }
}
