//! # sim_system
//!
//! The per-frame half of the simulation core.
//!
//! Each frame the [`FrameLoop`] measures `dt` from its [`Clock`], writes the
//! external input intents into `Input` components, and runs the [`Pipeline`]:
//!
//! 1. [`InputSystem`]: intents into velocity, jumps and augmentations.
//! 2. [`MovementSystem`]: integration, gravity and the ground clamp.
//! 3. [`CollisionSystem`]: one-sided AABB landing resolution.
//! 4. [`CombatSystem`]: melee range checks and damage.
//! 5. [`ResourceSharingSystem`]: the two-player energy swap.
//! 6. [`PresentationQuery`]: display records for the renderer.
//!
//! All systems run sequentially over one [`ComponentStore`]; a later system
//! always sees the writes of an earlier one.
//!
//! [`ComponentStore`]: sim_component::ComponentStore

pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod systems;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, ConfigError, FrameConfig, SimConfig};
pub use context::SystemContext;
pub use error::SystemError;
pub use frame::{FrameLoop, FrameReport, InputSource, NullInput, PresentationSink};
pub use pipeline::{FrameOutput, Pipeline, System};
pub use systems::{
    CollisionSystem, CombatSystem, DisplayRecord, InputSystem, MovementSystem,
    PresentationQuery, ResourceSharingSystem,
};
