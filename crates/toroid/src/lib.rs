//! Toroid: a three-dimensional toroidal cellular-automaton compute engine.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! toroid sub-crates. For most users, adding `toroid` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use toroid::prelude::*;
//!
//! // Rule 90 on a five-cell ring: the Sierpinski triangle, wrapped.
//! let store = SessionStore::default();
//! let (id, start) = store
//!     .create_session(Dims::new(5, 1, 1), Seeding::Center, NeighborMode::OneAxis)
//!     .unwrap();
//! assert_eq!(start.live_cells(), vec![(2, 0, 0)]);
//!
//! let rule = RuleTable::from_eca_number(90);
//! let advanced = store.advance(id, &rule).unwrap();
//! assert_eq!(advanced.step, StepId(1));
//! assert_eq!(advanced.lattice.live_cells(), vec![(1, 0, 0), (3, 0, 0)]);
//!
//! // A bounded run that is out of time before it starts.
//! let config = RunConfig::new(1_000_000).with_timeout(std::time::Duration::ZERO);
//! let outcome = SimulationRunner::new(&store).run(id, &rule, &config).unwrap();
//! assert_eq!(outcome.steps_completed, 0);
//! assert!(!outcome.changed);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `toroid-core` | IDs, dimensions, neighbor modes, errors, `EntropySource` |
//! | [`lattice`] | `toroid-lattice` | Bit-packed lattice, toroidal axis algebra, wire form |
//! | [`rule`] | `toroid-rule` | 128-entry rule tables and the elementary-rule embedding |
//! | [`engine`] | `toroid-engine` | Step function, session store, runner, statistics |
//! | [`service`] | `toroid-service` | Request/response operations and status codes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`toroid-core`).
pub use toroid_core as types;

/// The bit-packed lattice (`toroid-lattice`).
///
/// [`lattice::Lattice`] stores one bit per cell; [`lattice::Axis`] and
/// [`lattice::wrap_pred`]/[`lattice::wrap_succ`] give the toroidal
/// neighbor algebra.
pub use toroid_lattice as lattice;

/// Rule tables (`toroid-rule`).
///
/// [`rule::RuleTable`] maps each of the 128 neighborhood keys to a next
/// state; see [`rule::eca`] for elementary rule numbers.
pub use toroid_rule as rule;

/// Stepping, sessions, and runs (`toroid-engine`).
pub use toroid_engine as engine;

/// Transport-agnostic service surface (`toroid-service`).
///
/// [`service::ToroidService`] answers the four request types and reports
/// failures as [`service::ServiceError`] with a stable
/// [`service::ServiceStatus`].
pub use toroid_service as service;

/// Common imports for typical toroid usage.
///
/// ```rust
/// use toroid::prelude::*;
/// ```
///
/// This imports the most frequently used types: identifiers, dimensions,
/// the lattice and rule types, the store and runner, and their errors.
pub mod prelude {
    // Core types
    pub use toroid_core::{Dims, EntropySource, NeighborMode, SessionId, StepId};

    // Errors
    pub use toroid_core::{RuleError, SessionError};

    // Lattice and rules
    pub use toroid_lattice::{Lattice, WireLattice};
    pub use toroid_rule::{RuleKey, RuleTable};

    // Engine
    pub use toroid_engine::{
        step, EntropyTracker, RunConfig, RunOutcome, Seeding, SessionStore, SimulationRunner,
        StoreConfig,
    };

    // Service
    pub use toroid_service::{ServiceConfig, ServiceError, ServiceStatus, ToroidService};
}
