//! The service operations.

use toroid_core::{Dims, SessionId, StepId};
use toroid_engine::{lattice_fingerprint, ConfigError, RunConfig, SessionStore, SimulationRunner};
use toroid_rule::RuleTable;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::messages::{
    EcaRule, InitializeLattice, LatticeInitialized, RunSimulation, SimulationResult, StepForward,
    Stepped,
};

/// Owns a session store and answers requests against it.
///
/// `ToroidService` is `Send + Sync`; share it behind an `Arc` and call it
/// from as many request threads as needed.
#[derive(Debug)]
pub struct ToroidService {
    config: ServiceConfig,
    store: SessionStore,
}

impl ToroidService {
    /// Validate `config` and create an empty service.
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = SessionStore::new(config.store.clone())?;
        Ok(Self { config, store })
    }

    /// The active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The backing session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Create a session and return its initial lattice.
    pub fn initialize_lattice(
        &self,
        request: &InitializeLattice,
    ) -> Result<LatticeInitialized, ServiceError> {
        let dims = Dims::new(request.x_max, request.y_max, request.z_max);
        let mode = request.mode.unwrap_or(self.config.default_mode);
        let seeding = request.seeding.unwrap_or(self.config.default_seeding);
        let (session_id, lattice) = self.store.create_session(dims, seeding, mode)?;
        Ok(LatticeInitialized {
            session_id,
            step: StepId(0),
            fingerprint: lattice_fingerprint(&lattice),
            lattice: lattice.to_nested(),
        })
    }

    /// Advance a session by one step.
    ///
    /// The rule is decoded before the session is touched, so a malformed
    /// encoding leaves the session unchanged.
    pub fn step_forward(&self, request: &StepForward) -> Result<Stepped, ServiceError> {
        let rule = RuleTable::from_bytes(&request.rule_bytes)?;
        let advanced = self.store.advance(request.session_id, &rule)?;
        Ok(Stepped {
            lattice: advanced.lattice.to_nested(),
            step: advanced.step,
        })
    }

    /// Encode elementary rule `rule_number` (0 to 255) as a 16-byte table.
    pub fn build_rule_from_eca_number(&self, rule_number: u32) -> Result<EcaRule, ServiceError> {
        let n = u8::try_from(rule_number).map_err(|_| {
            ServiceError::invalid_argument(format!(
                "elementary rule number must be in 0..=255, got {rule_number}"
            ))
        })?;
        Ok(EcaRule {
            rule_bytes: RuleTable::from_eca_number(n).to_bytes(),
        })
    }

    /// Create a session and advance it under a step count and timeout.
    ///
    /// All arguments are checked before the session is created: a bad rule
    /// encoding or timeout leaves nothing behind. Running out of time is
    /// not an error; the result reports how many steps completed.
    ///
    /// The session is closed before returning, whether or not the run
    /// succeeded, unless the request sets `keep_session`.
    pub fn run_simulation(
        &self,
        request: &RunSimulation,
    ) -> Result<SimulationResult, ServiceError> {
        let rule = RuleTable::from_bytes(&request.rule_bytes)
            .inspect_err(|e| tracing::debug!("rejected run_simulation: {}", e))?;
        let run = match request.timeout_seconds {
            Some(secs) => RunConfig::from_secs_f64(request.num_steps, secs)
                .inspect_err(|e| tracing::debug!("rejected run_simulation: {}", e))?,
            None => RunConfig::new(request.num_steps).with_timeout(self.config.default_timeout),
        };
        let dims = Dims::new(request.x_max, request.y_max, request.z_max);
        let mode = request.mode.unwrap_or(self.config.default_mode);
        let (session_id, _) = self
            .store
            .create_session(dims, self.config.default_seeding, mode)
            .inspect_err(|e| tracing::debug!("rejected run_simulation: {}", e))?;

        let outcome = SimulationRunner::new(&self.store).run(session_id, &rule, &run);
        let kept = request.keep_session && outcome.is_ok();
        if !kept && self.store.remove(session_id).is_ok() {
            tracing::debug!("closed run session {}", session_id);
        }
        let outcome = outcome?;

        Ok(SimulationResult {
            session_id: kept.then_some(session_id),
            start_lattice: outcome.start.to_nested(),
            end_lattice: outcome.end.to_nested(),
            state_changed: outcome.changed,
            steps_completed: outcome.steps_completed,
            timed_out: outcome.timed_out,
        })
    }

    /// Drop a session.
    pub fn close_session(&self, session_id: SessionId) -> Result<(), ServiceError> {
        self.store
            .remove(session_id)
            .inspect_err(|e| tracing::debug!("rejected close_session: {}", e))?;
        tracing::debug!("closed session {}", session_id);
        Ok(())
    }
}

impl Default for ToroidService {
    fn default() -> Self {
        Self {
            config: ServiceConfig::default(),
            store: SessionStore::default(),
        }
    }
}
