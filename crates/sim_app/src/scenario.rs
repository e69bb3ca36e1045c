//! Initial entity sets.
//!
//! A scenario file is a JSON array of entities, each an array of
//! `{"kind": ..., "value": ...}` component pairs:
//!
//! ```json
//! [
//!   [{"kind": "Position", "value": {"x": 0, "y": 0}},
//!    {"kind": "Sprite", "value": {"image": "crate"}}]
//! ]
//! ```

use std::path::Path;

use sim_component::{
    Augmentation, AugmentationKind, Collision, ComponentError, ComponentValue, EnergyCore, Entity,
    Health, Input, Position, Sprite, Velocity, Weapon, World,
};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("entity #{index} in scenario: {source}")]
    Entity {
        index: usize,
        #[source]
        source: ComponentError,
    },
}

/// Entity lists, in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub entities: Vec<Vec<ComponentValue>>,
}

impl Scenario {
    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        Ok(Self {
            entities: serde_json::from_str(text)?,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Two players, an enemy knight, and the platform they stand over.
    pub fn demo() -> Self {
        let player = |x: f32,
                      image: &str,
                      hp: i32,
                      damage: i32,
                      weapon: &str,
                      augmentation: AugmentationKind|
         -> Vec<ComponentValue> {
            vec![
                Position::new(x, 0.0).into(),
                Velocity::ZERO.into(),
                Sprite::new(image).into(),
                Health::new(hp).into(),
                Weapon::new(damage, weapon).into(),
                Augmentation::new(augmentation).into(),
                Input::default().into(),
                EnergyCore::new(50, 100).into(),
            ]
        };

        Self {
            entities: vec![
                player(
                    0.0,
                    "neon_samurai",
                    100,
                    20,
                    "plasma_katana",
                    AugmentationKind::Cloaking,
                ),
                player(
                    50.0,
                    "cyber_brute",
                    120,
                    30,
                    "mech_mace",
                    AugmentationKind::JetBoost,
                ),
                vec![
                    Position::new(100.0, 0.0).into(),
                    Velocity::ZERO.into(),
                    Sprite::new("cyborg_knight").into(),
                    Health::new(80).into(),
                    Collision::new(20.0, 20.0).into(),
                ],
                vec![
                    Position::new(0.0, -10.0).into(),
                    Collision::new(200.0, 10.0).into(),
                ],
            ],
        }
    }

    /// Create every entity in order, returning their ids.
    pub fn spawn(self, world: &mut World) -> Result<Vec<Entity>, ScenarioError> {
        let mut spawned = Vec::with_capacity(self.entities.len());
        for (index, components) in self.entities.into_iter().enumerate() {
            let entity = world
                .create_entity(components)
                .map_err(|source| ScenarioError::Entity { index, source })?;
            spawned.push(entity);
        }
        info!(entities = spawned.len(), "scenario spawned");
        Ok(spawned)
    }
}

#[cfg(test)]
mod tests {
    use sim_component::ComponentKind;

    use super::*;

    #[test]
    fn test_demo_layout() {
        let mut world = World::new();
        let spawned = Scenario::demo().spawn(&mut world).unwrap();
        assert_eq!(spawned, vec![Entity(0), Entity(1), Entity(2), Entity(3)]);

        let store = world.store();
        assert_eq!(store.get::<Sprite>(Entity(0)).unwrap().image, "neon_samurai");
        assert_eq!(store.get::<Health>(Entity(1)).unwrap().hp, 120);
        assert_eq!(
            store.get::<Augmentation>(Entity(1)).unwrap().kind,
            AugmentationKind::JetBoost
        );
        assert!(store.contains::<Collision>(Entity(2)));
        assert!(!store.contains::<Sprite>(Entity(3)));
        assert_eq!(store.energy_cores.len(), 2);
    }

    #[test]
    fn test_parse_scenario_file() {
        let scenario = Scenario::from_json(
            r#"[
                [{"kind": "Position", "value": {"x": 1.5, "y": 2}},
                 {"kind": "Sprite", "value": {"image": "crate"}}],
                [{"kind": "Health", "value": {"hp": 10}}]
            ]"#,
        )
        .unwrap();
        assert_eq!(scenario.entities.len(), 2);
        assert_eq!(scenario.entities[0][0], Position::new(1.5, 2.0).into());
    }

    #[test]
    fn test_duplicate_kind_names_entity() {
        let scenario = Scenario {
            entities: vec![
                vec![Health::new(1).into()],
                vec![Health::new(1).into(), Health::new(2).into()],
            ],
        };
        let mut world = World::new();
        let err = scenario.spawn(&mut world).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Entity {
                index: 1,
                source: ComponentError::DuplicateComponent {
                    kind: ComponentKind::Health
                }
            }
        ));
        assert_eq!(world.entity_count(), 1);
    }

    #[test]
    fn test_malformed_scenario() {
        assert!(matches!(
            Scenario::from_json(r#"[[{"kind": "Mana", "value": {}}]]"#),
            Err(ScenarioError::Parse(_))
        ));
    }
}
