//! Per-kind component storage.
//!
//! The [`ComponentStore`] holds one [`ComponentMap`] per [`ComponentKind`](crate::ComponentKind).
//! Maps are ordered by [`Entity`], so every system iterates entities in
//! ascending ID order and results are reproducible run to run.
//!
//! Store fields are public so a system can borrow several maps mutably at
//! once by destructuring the store.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::component::{Component, ComponentValue};
use crate::components::{
    Augmentation, Collision, EnergyCore, Health, Input, Position, Sprite, Velocity, Weapon,
};
use crate::entity::Entity;
use crate::error::ComponentError;

/// An ordered `Entity → T` map for a single component kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentMap<T> {
    values: BTreeMap<Entity, T>,
}

impl<T> Default for ComponentMap<T> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<T: Component> ComponentMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `entity`, if present.
    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.values.get(&entity)
    }

    /// Returns a mutable reference to the value for `entity`, if present.
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.values.get_mut(&entity)
    }

    /// Returns the value for `entity`, or a [`ComponentError::MissingComponent`]
    /// naming `system`, the entity, and this map's kind.
    ///
    /// # Errors
    ///
    /// Fails when `entity` carries no value of this kind.
    pub fn require(&self, entity: Entity, system: &'static str) -> Result<&T, ComponentError> {
        self.values
            .get(&entity)
            .ok_or_else(|| missing::<T>(entity, system))
    }

    /// Mutable counterpart of [`require`](Self::require).
    ///
    /// # Errors
    ///
    /// Fails when `entity` carries no value of this kind.
    pub fn require_mut(
        &mut self,
        entity: Entity,
        system: &'static str,
    ) -> Result<&mut T, ComponentError> {
        self.values
            .get_mut(&entity)
            .ok_or_else(|| missing::<T>(entity, system))
    }

    /// Returns `true` if `entity` has a value of this kind.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.values.contains_key(&entity)
    }

    /// Insert or overwrite the value for `entity`, returning the old value.
    pub fn insert(&mut self, entity: Entity, value: T) -> Option<T> {
        self.values.insert(entity, value)
    }

    /// Entities holding this kind, in ascending order.
    #[must_use]
    pub fn entities(&self) -> Vec<Entity> {
        self.values.keys().copied().collect()
    }

    /// Iterate `(entity, value)` pairs in ascending entity order.
    pub fn iter(&self) -> btree_map::Iter<'_, Entity, T> {
        self.values.iter()
    }

    /// Mutably iterate `(entity, value)` pairs in ascending entity order.
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, Entity, T> {
        self.values.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn missing<T: Component>(entity: Entity, system: &'static str) -> ComponentError {
    ComponentError::MissingComponent {
        system,
        entity,
        kind: T::KIND,
    }
}

impl<'a, T> IntoIterator for &'a ComponentMap<T> {
    type Item = (&'a Entity, &'a T);
    type IntoIter = btree_map::Iter<'a, Entity, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Every component value in the simulation, one map per kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentStore {
    pub positions: ComponentMap<Position>,
    pub velocities: ComponentMap<Velocity>,
    pub sprites: ComponentMap<Sprite>,
    pub healths: ComponentMap<Health>,
    pub weapons: ComponentMap<Weapon>,
    pub augmentations: ComponentMap<Augmentation>,
    pub inputs: ComponentMap<Input>,
    pub energy_cores: ComponentMap<EnergyCore>,
    pub collisions: ComponentMap<Collision>,
}

impl ComponentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        T::storage(self).get(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        T::storage_mut(self).get_mut(entity)
    }

    /// See [`ComponentMap::require`].
    ///
    /// # Errors
    ///
    /// Fails when `entity` carries no `T`.
    pub fn require<T: Component>(
        &self,
        entity: Entity,
        system: &'static str,
    ) -> Result<&T, ComponentError> {
        T::storage(self).require(entity, system)
    }

    #[must_use]
    pub fn contains<T: Component>(&self, entity: Entity) -> bool {
        T::storage(self).contains(entity)
    }

    /// Insert or overwrite a typed value.
    pub fn insert<T: Component>(&mut self, entity: Entity, value: T) -> Option<T> {
        T::storage_mut(self).insert(entity, value)
    }

    /// Write a type-tagged value into the map for its kind.
    pub fn insert_value(&mut self, entity: Entity, value: ComponentValue) {
        match value {
            ComponentValue::Position(v) => {
                self.positions.insert(entity, v);
            }
            ComponentValue::Velocity(v) => {
                self.velocities.insert(entity, v);
            }
            ComponentValue::Sprite(v) => {
                self.sprites.insert(entity, v);
            }
            ComponentValue::Health(v) => {
                self.healths.insert(entity, v);
            }
            ComponentValue::Weapon(v) => {
                self.weapons.insert(entity, v);
            }
            ComponentValue::Augmentation(v) => {
                self.augmentations.insert(entity, v);
            }
            ComponentValue::Input(v) => {
                self.inputs.insert(entity, v);
            }
            ComponentValue::EnergyCore(v) => {
                self.energy_cores.insert(entity, v);
            }
            ComponentValue::Collision(v) => {
                self.collisions.insert(entity, v);
            }
        }
    }
}
