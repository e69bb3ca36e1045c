//! Errors raised while running the pipeline.

use sim_component::ComponentError;

/// A failure inside a system.
///
/// Systems only fail on precondition violations: an entity that a system
/// processes lacks a component the system requires. The frame loop
/// additionally refuses to run at an unusable frame rate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SystemError {
    /// A required component was absent.
    #[error(transparent)]
    Component(#[from] ComponentError),

    /// The frame loop was configured with a rate it cannot keep.
    #[error("invalid frame rate {0}: must be finite and positive")]
    FrameRate(f64),
}
