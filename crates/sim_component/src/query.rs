//! Query descriptors for system data access declarations.
//!
//! A [`QueryDescriptor`] declares which component kinds a system reads,
//! writes, and can do without. Required kinds (reads and writes) missing on a
//! processed entity are precondition violations; optional kinds are skips.
//! The pipeline logs every system's descriptor when it is registered.

use serde::{Deserialize, Serialize};

use crate::component::ComponentKind;

/// Describes the data access requirements of a system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// Component kinds the system reads immutably.
    pub reads: Vec<ComponentKind>,
    /// Component kinds the system writes.
    pub writes: Vec<ComponentKind>,
    /// Component kinds the system uses when present and skips when absent.
    pub optionals: Vec<ComponentKind>,
}

impl QueryDescriptor {
    /// Create a new empty query descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a read-only component requirement.
    #[must_use]
    pub fn read(mut self, kind: ComponentKind) -> Self {
        self.reads.push(kind);
        self
    }

    /// Add a mutable component requirement.
    #[must_use]
    pub fn write(mut self, kind: ComponentKind) -> Self {
        self.writes.push(kind);
        self
    }

    /// Add an optional component.
    #[must_use]
    pub fn optional(mut self, kind: ComponentKind) -> Self {
        self.optionals.push(kind);
        self
    }
}
