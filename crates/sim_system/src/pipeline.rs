//! The [`System`] trait and the fixed-order [`Pipeline`].
//!
//! The pipeline owns one instance of each system and runs them back to back
//! over the same store. There is no scheduling beyond that order: it is the
//! only synchronisation the systems need.

use std::fmt;

use sim_component::{ComponentStore, QueryDescriptor};
use tracing::debug;

use crate::config::SimConfig;
use crate::context::SystemContext;
use crate::error::SystemError;
use crate::systems::{
    CollisionSystem, CombatSystem, DisplayRecord, InputSystem, MovementSystem,
    PresentationQuery, ResourceSharingSystem,
};

/// A per-frame system.
pub trait System: fmt::Debug {
    /// Stable name used in logs and errors.
    fn name(&self) -> &'static str;

    /// The component kinds this system requires and the ones it can skip.
    fn query(&self) -> QueryDescriptor;

    /// Run once over the store. Returns how many entities were affected.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError`] when a processed entity lacks a required
    /// component.
    fn run(
        &mut self,
        store: &mut ComponentStore,
        ctx: &SystemContext,
    ) -> Result<usize, SystemError>;
}

/// What one pass of the pipeline produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    /// `(system name, entities affected)` in execution order.
    pub affected: Vec<(&'static str, usize)>,
    /// Display records from the presentation query.
    pub records: Vec<DisplayRecord>,
}

/// Input → Movement → Collision → Combat → Resource-Sharing → Presentation.
#[derive(Debug)]
pub struct Pipeline {
    systems: Vec<Box<dyn System>>,
    presentation: PresentationQuery,
}

impl Pipeline {
    /// Build the standard pipeline from the given tuning.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        let systems: Vec<Box<dyn System>> = vec![
            Box::new(InputSystem::new(config)),
            Box::new(MovementSystem::new(config)),
            Box::new(CollisionSystem::new()),
            Box::new(CombatSystem::new(config)),
            Box::new(ResourceSharingSystem::new(config)),
        ];

        for system in &systems {
            let query = system.query();
            debug!(
                system = system.name(),
                reads = ?query.reads,
                writes = ?query.writes,
                optionals = ?query.optionals,
                "system registered"
            );
        }

        Self {
            systems,
            presentation: PresentationQuery::new(),
        }
    }

    /// Run every system once, in order, then collect display records.
    ///
    /// Stops at the first failing system; writes made by earlier systems in
    /// the same frame are kept.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SystemError`].
    pub fn run_frame(
        &mut self,
        store: &mut ComponentStore,
        ctx: &SystemContext,
    ) -> Result<FrameOutput, SystemError> {
        let mut affected = Vec::with_capacity(self.systems.len());

        for system in &mut self.systems {
            let count = system.run(store, ctx)?;
            debug!(
                frame_id = ctx.frame_id,
                system = system.name(),
                affected = count,
                "system ran"
            );
            affected.push((system.name(), count));
        }

        let records = self.presentation.collect(store)?;
        Ok(FrameOutput { affected, records })
    }
}
