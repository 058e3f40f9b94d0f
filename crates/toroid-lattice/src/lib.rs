//! Bit-packed lattice storage for toroid simulations.
//!
//! This crate defines [`Lattice`], a dense 3D boolean array packed one bit
//! per cell into `u64` words, along with the toroidal axis algebra used by
//! the step engine and the nested wire encoding used by the service layer.
//!
//! # Layout
//!
//! Cell `(x, y, z)` lives at flat index `x*Y*Z + y*Z + z`, bit `i % 64` of
//! word `i / 64`. Bits past the last cell in the final word are always
//! zero, so equality and population counts can work on whole words.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod lattice;
pub mod render;
pub mod wire;

pub use axis::{wrap_pred, wrap_succ, Axis};
pub use error::LatticeError;
pub use lattice::Lattice;
pub use wire::WireLattice;
