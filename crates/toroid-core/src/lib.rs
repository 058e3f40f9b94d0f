//! Core types and traits for the toroid cellular-automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the toroid workspace:
//! session and step identifiers, lattice dimensions, neighbor modes,
//! the entropy interface used for random seeding, and the error types
//! shared by every layer above.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod error;
pub mod id;
pub mod mode;
pub mod traits;

pub use dims::Dims;
pub use error::{RuleError, SessionError};
pub use id::{SessionId, StepId};
pub use mode::NeighborMode;
pub use traits::EntropySource;
