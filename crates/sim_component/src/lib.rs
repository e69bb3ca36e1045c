//! # sim_component
//!
//! The "E" and "C" in ECS: what an entity is, which component kinds exist,
//! and how component values are stored per kind.
//!
//! This crate provides:
//!
//! - [`Entity`] and [`EntityAllocator`]: monotonically increasing identifiers.
//! - [`Component`] trait and [`ComponentKind`]: the closed set of kinds.
//! - [`ComponentStore`]: one ordered `Entity → value` map per kind.
//! - [`World`]: the entity registry that composes entities into the store.
//! - [`QueryDescriptor`]: required and optional kinds a system declares.

pub mod component;
pub mod components;
pub mod entity;
pub mod error;
pub mod query;
pub mod storage;
pub mod world;

pub use component::{Component, ComponentKind, ComponentValue};
pub use components::{
    Augmentation, AugmentationKind, Collision, EnergyCore, Health, Input, Position, Sprite,
    Velocity, Weapon,
};
pub use entity::{Entity, EntityAllocator};
pub use error::ComponentError;
pub use query::QueryDescriptor;
pub use storage::{ComponentMap, ComponentStore};
pub use world::World;
