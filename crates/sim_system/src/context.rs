//! Per-frame execution context provided to systems.

use std::time::Duration;

/// Frame metadata handed to every system in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemContext {
    /// The current frame number, starting at 1.
    pub frame_id: u64,
    /// Seconds elapsed since the previous frame.
    pub dt: f64,
    /// Wall-clock time of this frame, measured from the UNIX epoch.
    pub now: Duration,
}

impl SystemContext {
    /// Create a new context for a frame.
    #[must_use]
    pub fn new(frame_id: u64, dt: f64, now: Duration) -> Self {
        Self { frame_id, dt, now }
    }

    /// `now` in whole milliseconds.
    #[must_use]
    pub fn now_millis(&self) -> u128 {
        self.now.as_millis()
    }
}
