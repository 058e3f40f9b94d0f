//! Step engine, session store and simulation runner for toroid.
//!
//! [`step()`] is the pure transition function from one lattice to the next.
//! [`SessionStore`] owns every live lattice and serializes advances per
//! session, and [`SimulationRunner`] drives repeated advances of one
//! session under a wall-clock budget.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod entropy;
pub mod hash;
pub mod metrics;
pub mod runner;
pub mod session;
pub mod step;
pub mod store;

pub use config::{ConfigError, RunConfig, StoreConfig};
pub use entropy::EntropyTracker;
pub use hash::lattice_fingerprint;
pub use metrics::RunMetrics;
pub use runner::{RunOutcome, SimulationRunner};
pub use session::{Advanced, Seeding, SessionSnapshot};
pub use step::step;
pub use store::SessionStore;
