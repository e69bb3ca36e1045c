//! Core [`Component`] trait, the closed set of [`ComponentKind`]s, and the
//! type-tagged [`ComponentValue`] used for entity composition.
//!
//! Every kind has exactly one map in the [`ComponentStore`]. The trait ties a
//! Rust type to that map so systems can use typed accessors instead of
//! matching on kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::{
    Augmentation, Collision, EnergyCore, Health, Input, Position, Sprite, Velocity, Weapon,
};
use crate::storage::{ComponentMap, ComponentStore};

/// The kinds of component the store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Position,
    Velocity,
    Sprite,
    Health,
    Weapon,
    Augmentation,
    Input,
    EnergyCore,
    Collision,
}

impl ComponentKind {
    /// The human-readable name of the kind (e.g. `"EnergyCore"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "Position",
            Self::Velocity => "Velocity",
            Self::Sprite => "Sprite",
            Self::Health => "Health",
            Self::Weapon => "Weapon",
            Self::Augmentation => "Augmentation",
            Self::Input => "Input",
            Self::EnergyCore => "EnergyCore",
            Self::Collision => "Collision",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The component trait.
///
/// Implemented for each of the nine component value types. `storage` and
/// `storage_mut` select the map that holds values of this type.
pub trait Component: Clone + Send + Sync + 'static + Serialize + for<'de> Deserialize<'de> {
    /// The kind this type is stored under.
    const KIND: ComponentKind;

    /// The map holding every value of this type.
    fn storage(store: &ComponentStore) -> &ComponentMap<Self>;

    /// Mutable access to the map holding every value of this type.
    fn storage_mut(store: &mut ComponentStore) -> &mut ComponentMap<Self>;
}

/// A single `(kind, value)` pair, as submitted to entity composition.
///
/// Serialises adjacently tagged, e.g.
/// `{"kind": "Position", "value": {"x": 0.0, "y": 0.0}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ComponentValue {
    Position(Position),
    Velocity(Velocity),
    Sprite(Sprite),
    Health(Health),
    Weapon(Weapon),
    Augmentation(Augmentation),
    Input(Input),
    EnergyCore(EnergyCore),
    Collision(Collision),
}

impl ComponentValue {
    /// The kind of the carried value.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Position(_) => ComponentKind::Position,
            Self::Velocity(_) => ComponentKind::Velocity,
            Self::Sprite(_) => ComponentKind::Sprite,
            Self::Health(_) => ComponentKind::Health,
            Self::Weapon(_) => ComponentKind::Weapon,
            Self::Augmentation(_) => ComponentKind::Augmentation,
            Self::Input(_) => ComponentKind::Input,
            Self::EnergyCore(_) => ComponentKind::EnergyCore,
            Self::Collision(_) => ComponentKind::Collision,
        }
    }
}

/// Wires a component type to its kind, its store field, and its
/// [`ComponentValue`] variant.
macro_rules! impl_component {
    ($($ty:ident => $field:ident),* $(,)?) => {
        $(
            impl Component for $ty {
                const KIND: ComponentKind = ComponentKind::$ty;

                fn storage(store: &ComponentStore) -> &ComponentMap<Self> {
                    &store.$field
                }

                fn storage_mut(store: &mut ComponentStore) -> &mut ComponentMap<Self> {
                    &mut store.$field
                }
            }

            impl From<$ty> for ComponentValue {
                fn from(value: $ty) -> Self {
                    Self::$ty(value)
                }
            }
        )*
    };
}

impl_component! {
    Position => positions,
    Velocity => velocities,
    Sprite => sprites,
    Health => healths,
    Weapon => weapons,
    Augmentation => augmentations,
    Input => inputs,
    EnergyCore => energy_cores,
    Collision => collisions,
}
