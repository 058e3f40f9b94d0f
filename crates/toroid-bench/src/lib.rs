//! Benchmark profiles and utilities for the toroid engine.
//!
//! Provides pre-built lattices and rules for benchmarking and examples:
//!
//! - [`REFERENCE_DIMS`]: 32x32x32 cube (32K cells)
//! - [`STRESS_DIMS`]: 64x64x64 cube (~262K cells)
//! - [`random_lattice`]: deterministic random fill via seed
//! - [`parity_rule`]: a three-axis rule that keeps random states busy

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use toroid_core::{Dims, NeighborMode, SessionId};
use toroid_engine::{Seeding, SessionStore};
use toroid_lattice::Lattice;
use toroid_rule::RuleTable;

/// Reference cube: 32x32x32.
pub const REFERENCE_DIMS: Dims = Dims::new(32, 32, 32);

/// Stress cube: 64x64x64.
pub const STRESS_DIMS: Dims = Dims::new(64, 64, 64);

/// One-axis ring used for elementary-rule benchmarks.
pub const RING_DIMS: Dims = Dims::new(4096, 1, 1);

/// Fill a lattice of `dims` from a ChaCha8 stream seeded with `seed`.
pub fn random_lattice(dims: Dims, seed: u64) -> Lattice {
    let mut lattice = Lattice::new(dims).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    lattice.fill_from(&mut || rng.random::<bool>());
    lattice
}

/// Alive iff an odd number of the seven cells in the neighborhood are alive.
pub fn parity_rule() -> RuleTable {
    RuleTable::from_fn(|key| {
        let live = key.central() as u32
            + key.x_pair().count_ones()
            + key.y_pair().count_ones()
            + key.z_pair().count_ones();
        live % 2 == 1
    })
}

/// A store holding one randomly seeded three-axis session.
pub fn reference_store(dims: Dims, seed: u64) -> (SessionStore, SessionId) {
    let store = SessionStore::default();
    let (id, _) = store
        .create_session(
            dims,
            Seeding::Random { seed: Some(seed) },
            NeighborMode::ThreeAxis,
        )
        .unwrap();
    (store, id)
}
