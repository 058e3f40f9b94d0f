//! Store and run configuration, validation, and error types.
//!
//! [`StoreConfig`] bounds what a [`SessionStore`](crate::SessionStore) will
//! allocate. [`RunConfig`] describes one bounded batch of steps for the
//! [`SimulationRunner`](crate::SimulationRunner).

use std::error::Error;
use std::fmt;
use std::time::Duration;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating a configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `max_cells` is zero, so no session could ever be created.
    ZeroMaxCells,
    /// A timeout given in seconds was negative, NaN or infinite.
    InvalidTimeout {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxCells => write!(f, "max_cells must be at least 1"),
            Self::InvalidTimeout { value } => {
                write!(f, "timeout must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── StoreConfig ────────────────────────────────────────────────────

/// Limits applied by a session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Largest lattice (in cells) a single session may allocate.
    /// Default: 2^27 cells (16 MiB of packed storage).
    pub max_cells: usize,
}

impl StoreConfig {
    /// Default per-session cell ceiling.
    pub const DEFAULT_MAX_CELLS: usize = 1 << 27;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cells == 0 {
            return Err(ConfigError::ZeroMaxCells);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_cells: Self::DEFAULT_MAX_CELLS,
        }
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// One bounded batch of steps.
///
/// The runner stops after `num_steps` advances or once `timeout` of wall
/// clock has elapsed, whichever comes first. The timeout is checked
/// before every step; a step already in progress always completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Upper bound on the number of advances.
    pub num_steps: u64,
    /// Wall-clock budget for the whole batch. Default: 3 seconds.
    pub timeout: Duration,
}

impl RunConfig {
    /// Budget used when the caller does not give one.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    /// Run up to `num_steps` advances under the default timeout.
    pub fn new(num_steps: u64) -> Self {
        Self {
            num_steps,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Replace the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from a timeout expressed in (possibly fractional) seconds.
    ///
    /// Rejects negative, NaN and infinite values, which would panic in
    /// `Duration::from_secs_f64`.
    pub fn from_secs_f64(num_steps: u64, timeout_secs: f64) -> Result<Self, ConfigError> {
        let timeout = Duration::try_from_secs_f64(timeout_secs)
            .map_err(|_| ConfigError::InvalidTimeout {
                value: timeout_secs,
            })?;
        Ok(Self { num_steps, timeout })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
