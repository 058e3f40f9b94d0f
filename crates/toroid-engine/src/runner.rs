//! Bounded multi-step runs of a single session.

use std::time::Instant;

use toroid_core::{SessionError, SessionId};
use toroid_lattice::Lattice;
use toroid_rule::RuleTable;

use crate::config::RunConfig;
use crate::entropy::EntropyTracker;
use crate::hash::lattice_fingerprint;
use crate::metrics::{duration_us, RunMetrics};
use crate::store::SessionStore;

/// Result of one [`SimulationRunner::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// The session's lattice before the first step.
    pub start: Lattice,
    /// The session's lattice after the last completed step.
    pub end: Lattice,
    /// Number of steps actually applied.
    pub steps_completed: u64,
    /// Whether `end` differs from `start`.
    pub changed: bool,
    /// Whether the run stopped because the timeout elapsed.
    pub timed_out: bool,
    /// Timing collected during the run.
    pub metrics: RunMetrics,
}

/// Drives repeated advances of one session under a wall-clock budget.
///
/// The timeout is checked before each step. A step that has started always
/// completes, and running out of time is reported in
/// [`RunOutcome::timed_out`] rather than as an error.
#[derive(Clone, Copy, Debug)]
pub struct SimulationRunner<'a> {
    store: &'a SessionStore,
}

impl<'a> SimulationRunner<'a> {
    /// A runner over `store`'s sessions.
    pub fn new(store: &'a SessionStore) -> Self {
        Self { store }
    }

    /// Advance session `id` up to `config.num_steps` times.
    pub fn run(
        &self,
        id: SessionId,
        rule: &RuleTable,
        config: &RunConfig,
    ) -> Result<RunOutcome, SessionError> {
        self.drive(id, rule, config, None)
    }

    /// Like [`run`](Self::run), also recording the start lattice and every
    /// produced lattice in `tracker`.
    pub fn run_tracked(
        &self,
        id: SessionId,
        rule: &RuleTable,
        config: &RunConfig,
        tracker: &mut EntropyTracker,
    ) -> Result<RunOutcome, SessionError> {
        self.drive(id, rule, config, Some(tracker))
    }

    fn drive(
        &self,
        id: SessionId,
        rule: &RuleTable,
        config: &RunConfig,
        mut tracker: Option<&mut EntropyTracker>,
    ) -> Result<RunOutcome, SessionError> {
        let started = Instant::now();
        let start = self.store.get(id)?;
        if let Some(t) = tracker.as_deref_mut() {
            t.observe(&start);
        }

        let mut metrics = RunMetrics::default();
        let mut end = start.clone();
        let mut steps_completed = 0;
        let mut timed_out = false;

        while steps_completed < config.num_steps {
            if started.elapsed() >= config.timeout {
                timed_out = true;
                tracing::debug!(
                    "session {} timed out after {} of {} steps",
                    id,
                    steps_completed,
                    config.num_steps
                );
                break;
            }
            let step_started = Instant::now();
            let advanced = self.store.advance(id, rule)?;
            metrics.record_step(step_started.elapsed());
            if let Some(t) = tracker.as_deref_mut() {
                t.observe(&advanced.lattice);
            }
            end = advanced.lattice;
            steps_completed += 1;
        }

        metrics.total_us = duration_us(started.elapsed());
        let changed = end != start;
        tracing::info!(
            "run of session {} finished: {} steps, changed={}, timed_out={}, fingerprint={:016x}",
            id,
            steps_completed,
            changed,
            timed_out,
            lattice_fingerprint(&end)
        );
        Ok(RunOutcome {
            start,
            end,
            steps_completed,
            changed,
            timed_out,
            metrics,
        })
    }
}
