//! Request and response messages.
//!
//! Lattices travel in nested wire form ([`WireLattice`], indexed
//! `[x][y][z]`) and rules as their 16-byte little-endian encoding.

use toroid_core::{NeighborMode, SessionId, StepId};
use toroid_engine::Seeding;
use toroid_lattice::WireLattice;
use toroid_rule::RULE_BYTES;

/// Create a new session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitializeLattice {
    /// Extent along X.
    pub x_max: usize,
    /// Extent along Y.
    pub y_max: usize,
    /// Extent along Z.
    pub z_max: usize,
    /// Neighbor mode; the service default when `None`.
    pub mode: Option<NeighborMode>,
    /// Initial population; the service default when `None`.
    pub seeding: Option<Seeding>,
}

/// Reply body for [`InitializeLattice`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeInitialized {
    /// ID of the new session.
    pub session_id: SessionId,
    /// Always step 0.
    pub step: StepId,
    /// The initial lattice.
    pub lattice: WireLattice,
    /// FNV-1a fingerprint of the initial lattice.
    pub fingerprint: u64,
}

/// Advance one session by one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepForward {
    /// Session to advance.
    pub session_id: SessionId,
    /// 16-byte rule encoding.
    pub rule_bytes: Vec<u8>,
}

/// Reply body for [`StepForward`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stepped {
    /// The lattice after the step.
    pub lattice: WireLattice,
    /// The session's step counter after the step.
    pub step: StepId,
}

/// Reply body for `build_rule_from_eca_number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcaRule {
    /// 16-byte rule encoding, ready to pass back in a [`StepForward`].
    pub rule_bytes: [u8; RULE_BYTES],
}

/// Create a session and run it for a bounded number of steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSimulation {
    /// Extent along X.
    pub x_max: usize,
    /// Extent along Y.
    pub y_max: usize,
    /// Extent along Z.
    pub z_max: usize,
    /// 16-byte rule encoding.
    pub rule_bytes: Vec<u8>,
    /// Upper bound on the number of steps.
    pub num_steps: u64,
    /// Wall-clock budget in seconds; the service default when `None`.
    pub timeout_seconds: Option<f64>,
    /// Neighbor mode; the service default when `None`.
    pub mode: Option<NeighborMode>,
    /// Keep the run's session open afterwards instead of closing it.
    pub keep_session: bool,
}

/// Reply body for [`RunSimulation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationResult {
    /// ID of the session the run created, if the request asked to keep it.
    pub session_id: Option<SessionId>,
    /// The lattice before the first step.
    pub start_lattice: WireLattice,
    /// The lattice after the last completed step.
    pub end_lattice: WireLattice,
    /// Whether the end lattice differs from the start lattice.
    pub state_changed: bool,
    /// Number of steps actually applied.
    pub steps_completed: u64,
    /// Whether the run stopped on its timeout.
    pub timed_out: bool,
}
