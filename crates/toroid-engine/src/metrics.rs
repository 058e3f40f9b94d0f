//! Timing metrics for a bounded simulation run.
//!
//! [`RunMetrics`] accumulates per-step wall-clock times while a
//! [`SimulationRunner`](crate::SimulationRunner) advances a session.

use std::time::Duration;

/// Timing collected over one run.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Wall-clock time for the whole run, including timeout checks.
    pub total_us: u64,
    /// Sum of the individual step times.
    pub stepping_us: u64,
    /// Slowest single step.
    pub slowest_step_us: u64,
    /// Number of steps timed.
    pub steps: u64,
}

impl RunMetrics {
    /// Fold one step's duration into the totals.
    pub fn record_step(&mut self, elapsed: Duration) {
        let us = duration_us(elapsed);
        self.stepping_us = self.stepping_us.saturating_add(us);
        self.slowest_step_us = self.slowest_step_us.max(us);
        self.steps += 1;
    }

    /// Mean step time, or `None` if no step ran.
    pub fn mean_step_us(&self) -> Option<u64> {
        self.stepping_us.checked_div(self.steps)
    }
}

pub(crate) fn duration_us(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
