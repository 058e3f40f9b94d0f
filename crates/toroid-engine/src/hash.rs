//! Lattice fingerprinting.
//!
//! FNV-1a over the dimensions and packed word storage. Fast and
//! deterministic across runs and platforms, but not collision resistant:
//! use it for change detection and cycle hints, never for security.

use toroid_lattice::Lattice;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// 64-bit fingerprint of a lattice's dimensions and cells.
///
/// Equal lattices always share a fingerprint. Dimensions are folded in
/// first, so lattices with identical word storage but different shapes
/// hash differently.
pub fn lattice_fingerprint(lattice: &Lattice) -> u64 {
    let dims = lattice.dims();
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, dims.x as u64);
    hash = fnv1a_u64(hash, dims.y as u64);
    hash = fnv1a_u64(hash, dims.z as u64);
    for &word in lattice.words() {
        hash = fnv1a_u64(hash, word);
    }
    hash
}
