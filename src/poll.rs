//! Result Polling
//!
//! After a check is queued, results show up only when the external scraper
//! reports back, so the keyword list is re-fetched on a fixed timer.

use gloo_timers::callback::{Interval, Timeout};

use crate::config::{POLL_DURATION_MS, POLL_PERIOD_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPlan {
    pub period_ms: u32,
    pub duration_ms: u32,
}

impl Default for PollPlan {
    fn default() -> Self {
        Self {
            period_ms: POLL_PERIOD_MS,
            duration_ms: POLL_DURATION_MS,
        }
    }
}

impl PollPlan {
    /// Number of times the callback fires before the plan expires
    pub fn ticks(&self) -> u32 {
        if self.period_ms == 0 {
            return 0;
        }
        self.duration_ms / self.period_ms
    }
}

/// Run `on_tick` every `period_ms` until `duration_ms` has passed.
///
/// Each call owns its own interval; calling again while a poll is running
/// starts a second, independent one. Nothing stops a poll early.
pub fn start_polling(plan: PollPlan, mut on_tick: impl FnMut() + 'static) {
    tracing::info!(
        period_ms = plan.period_ms,
        duration_ms = plan.duration_ms,
        ticks = plan.ticks(),
        "polling for results"
    );
    let interval = Interval::new(plan.period_ms, move || {
        tracing::debug!("poll tick");
        on_tick();
    });
    Timeout::new(plan.duration_ms, move || {
        drop(interval);
        tracing::info!("polling finished");
    })
    .forget();
}
