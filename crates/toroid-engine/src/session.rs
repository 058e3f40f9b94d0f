//! Session state and the values handed back to callers.

use toroid_core::{NeighborMode, SessionId, StepId};
use toroid_lattice::Lattice;

/// How a new session's lattice is populated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Seeding {
    /// A single live cell at the integer-division center `(x/2, y/2, z/2)`.
    #[default]
    Center,
    /// Every cell drawn independently from a ChaCha8 generator.
    ///
    /// `Some(seed)` makes the initial state reproducible; `None` seeds
    /// the generator from the thread-local RNG.
    Random {
        /// Optional fixed seed.
        seed: Option<u64>,
    },
}

/// One independent, addressable lattice.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) id: SessionId,
    pub(crate) lattice: Lattice,
    pub(crate) step: StepId,
    pub(crate) mode: NeighborMode,
}

impl Session {
    pub(crate) fn new(id: SessionId, lattice: Lattice, mode: NeighborMode) -> Self {
        Self {
            id,
            lattice,
            step: StepId(0),
            mode,
        }
    }

    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            step: self.step,
            mode: self.mode,
            lattice: self.lattice.clone(),
        }
    }
}

/// A consistent copy of a session's state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// The session's ID.
    pub id: SessionId,
    /// Number of advances applied so far.
    pub step: StepId,
    /// The session's fixed neighbor mode.
    pub mode: NeighborMode,
    /// The stored lattice.
    pub lattice: Lattice,
}

/// Result of one successful advance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advanced {
    /// The newly stored lattice.
    pub lattice: Lattice,
    /// The step counter after this advance.
    pub step: StepId,
}
