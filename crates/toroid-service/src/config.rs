//! Service-level defaults.

use std::time::Duration;

use toroid_core::NeighborMode;
use toroid_engine::{ConfigError, RunConfig, Seeding, StoreConfig};

/// Defaults applied when a request leaves a field unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Limits for the backing session store.
    pub store: StoreConfig,
    /// Neighbor mode for requests that do not name one. Default: three-axis.
    pub default_mode: NeighborMode,
    /// Budget for `run_simulation` when no timeout is given. Default: 3 s.
    pub default_timeout: Duration,
    /// How new sessions are populated. Default: a single center cell.
    pub default_seeding: Seeding,
}

impl ServiceConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            default_mode: NeighborMode::ThreeAxis,
            default_timeout: RunConfig::DEFAULT_TIMEOUT,
            default_seeding: Seeding::Center,
        }
    }
}
