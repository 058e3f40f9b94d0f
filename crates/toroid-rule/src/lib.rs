//! Rule tables for toroid simulations.
//!
//! A rule is a 128-entry boolean lookup table addressed by a 7-bit
//! [`RuleKey`]: the central cell's state in bit 6 followed by three 2-bit
//! axis-pair codes for X, Y and Z. Each pair code packs the predecessor
//! and successor along one axis as `(pred << 1) | succ`.
//!
//! Tables can be built from a raw 128-bit value, from the 16-byte wire
//! encoding, from a classic elementary-CA rule number (see [`eca`]), or
//! drawn at random.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod eca;
pub mod key;
pub mod table;

pub use key::RuleKey;
pub use table::{RuleTable, RULE_BYTES};
