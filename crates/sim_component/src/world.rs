//! The entity registry.
//!
//! [`World`] owns the entity allocator, the live set, and the
//! [`ComponentStore`]. Entities come into existence only through
//! [`World::create_entity`], which writes every submitted component in one
//! step.

use std::collections::BTreeSet;

use tracing::debug;

use crate::component::{ComponentKind, ComponentValue};
use crate::entity::{Entity, EntityAllocator};
use crate::error::ComponentError;
use crate::storage::ComponentStore;

/// Entity registry plus component storage.
#[derive(Debug, Default)]
pub struct World {
    /// Entity ID allocator.
    allocator: EntityAllocator,
    /// Entities that currently exist.
    live: BTreeSet<Entity>,
    /// Every component value, keyed by entity.
    store: ComponentStore,
}

impl World {
    /// Create a new empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose a new entity from `(kind, value)` pairs.
    ///
    /// The list is validated before anything is touched: a list naming the
    /// same kind twice is rejected, no ID is consumed, and the store is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::DuplicateComponent`] for a repeated kind.
    pub fn create_entity(
        &mut self,
        components: Vec<ComponentValue>,
    ) -> Result<Entity, ComponentError> {
        let mut seen: BTreeSet<ComponentKind> = BTreeSet::new();
        for value in &components {
            let kind = value.kind();
            if !seen.insert(kind) {
                return Err(ComponentError::DuplicateComponent { kind });
            }
        }

        let entity = self.allocator.allocate();
        self.live.insert(entity);
        for value in components {
            self.store.insert_value(entity, value);
        }

        debug!(%entity, components = seen.len(), "entity created");
        Ok(entity)
    }

    /// Returns `true` if `entity` has been created.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.live.contains(&entity)
    }

    /// Live entities in ascending order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.live.iter().copied()
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.live.len()
    }

    /// Read access to every component.
    #[must_use]
    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    /// Write access to every component.
    pub fn store_mut(&mut self) -> &mut ComponentStore {
        &mut self.store
    }
}
