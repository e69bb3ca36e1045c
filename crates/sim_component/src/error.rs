//! Component-layer error types.

use crate::component::ComponentKind;
use crate::entity::Entity;

/// Errors raised by component access and entity composition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentError {
    /// A system needed a component that the entity does not carry.
    ///
    /// This is a precondition violation, not an optional skip.
    #[error("{system} system: {entity} is missing required component {kind}")]
    MissingComponent {
        system: &'static str,
        entity: Entity,
        kind: ComponentKind,
    },

    /// An entity composition listed the same component kind twice.
    #[error("component {kind} listed more than once in entity composition")]
    DuplicateComponent { kind: ComponentKind },
}
