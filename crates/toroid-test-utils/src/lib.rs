//! Test utilities and reference oracles for toroid development.
//!
//! Provides a deterministic [`EntropySource`] ([`PatternSource`]), a
//! lattice builder for hand-written fixtures ([`lattice_with_cells`]) and
//! an independent 1D automaton ([`ReferenceEca`]) to check the engine's
//! one-axis embedding against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::ReferenceEca;

use toroid_core::{Dims, EntropySource};
use toroid_lattice::Lattice;

/// Build a lattice with exactly the listed cells alive.
///
/// Panics on zero extents or out-of-range coordinates; fixtures are
/// expected to be well formed.
pub fn lattice_with_cells(dims: Dims, live: &[(usize, usize, usize)]) -> Lattice {
    let mut lattice = Lattice::new(dims).expect("fixture dimensions must be valid");
    for &(x, y, z) in live {
        assert!(
            x < dims.x && y < dims.y && z < dims.z,
            "fixture cell ({x}, {y}, {z}) outside {dims}"
        );
        lattice.set(x, y, z, true);
    }
    lattice
}

/// Mock [`EntropySource`] that replays a fixed bit pattern, cycling
/// when it runs out.
///
/// Tracks how many bits were drawn so tests can assert that seeding
/// consumed exactly one draw per cell.
pub struct PatternSource {
    pattern: Vec<bool>,
    drawn: usize,
}

impl PatternSource {
    /// Panics if `pattern` is empty.
    pub fn new(pattern: Vec<bool>) -> Self {
        assert!(!pattern.is_empty(), "pattern must not be empty");
        Self { pattern, drawn: 0 }
    }

    /// A source that always yields `alive`.
    pub fn constant(alive: bool) -> Self {
        Self::new(vec![alive])
    }

    /// Number of bits drawn so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl EntropySource for PatternSource {
    fn next_cell(&mut self) -> bool {
        let bit = self.pattern[self.drawn % self.pattern.len()];
        self.drawn += 1;
        bit
    }
}
