//! Request/response surface for the toroid cellular-automaton engine.
//!
//! [`ToroidService`] exposes the four remote operations (initialize a
//! lattice, step it forward, build a rule from an elementary rule number,
//! run a bounded simulation) over plain message structs. Every operation
//! returns `Result<_, ServiceError>`; [`Reply`] flattens that into the
//! status/message/body shape a transport layer serializes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod messages;
pub mod reply;
pub mod service;
pub mod status;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use messages::{
    EcaRule, InitializeLattice, LatticeInitialized, RunSimulation, SimulationResult, StepForward,
    Stepped,
};
pub use reply::Reply;
pub use service::ToroidService;
pub use status::ServiceStatus;
