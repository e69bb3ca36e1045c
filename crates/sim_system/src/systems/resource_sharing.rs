//! Resource-sharing system: the co-op energy core swap.

use sim_component::{ComponentKind, ComponentStore, QueryDescriptor};
use tracing::{debug, warn};

use crate::config::SimConfig;
use crate::context::SystemContext;
use crate::error::SystemError;
use crate::pipeline::System;

/// Alternates energy between the first two `EnergyCore` holders.
///
/// The wall clock is cut into fixed windows. In even windows the lower-ID
/// holder gets `share_high` and the other `share_low`; in odd windows the
/// amounts swap. The write is unconditional and wins over any deduction the
/// input system made earlier in the frame. Holders beyond the second are
/// left alone. With fewer than two holders nothing is written; the first
/// such frame is logged at `warn`, repeats at `debug`.
#[derive(Debug, Clone)]
pub struct ResourceSharingSystem {
    window_ms: u64,
    high: i32,
    low: i32,
    /// Set while there are fewer than two holders.
    short: bool,
}

impl ResourceSharingSystem {
    pub const NAME: &'static str = "resource_sharing";

    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self {
            window_ms: config.share_window_ms.max(1),
            high: config.share_high,
            low: config.share_low,
            short: false,
        }
    }

    /// Index of the window containing `ctx.now`.
    #[must_use]
    pub fn window_index(&self, ctx: &SystemContext) -> u128 {
        ctx.now_millis() / u128::from(self.window_ms)
    }
}

impl System for ResourceSharingSystem {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn query(&self) -> QueryDescriptor {
        QueryDescriptor::new().write(ComponentKind::EnergyCore)
    }

    fn run(
        &mut self,
        store: &mut ComponentStore,
        ctx: &SystemContext,
    ) -> Result<usize, SystemError> {
        let mut holders = store.energy_cores.iter_mut();
        let (Some((_, first)), Some((_, second))) = (holders.next(), holders.next()) else {
            if self.short {
                debug!(frame_id = ctx.frame_id, "fewer than two energy cores, nothing to share");
            } else {
                warn!(frame_id = ctx.frame_id, "fewer than two energy cores, sharing suspended");
                self.short = true;
            }
            return Ok(0);
        };
        self.short = false;

        let window = self.window_index(ctx);
        let (first_amount, second_amount) = if window % 2 == 0 {
            (self.high, self.low)
        } else {
            (self.low, self.high)
        };
        first.amount = first_amount;
        second.amount = second_amount;

        Ok(2)
    }
}
