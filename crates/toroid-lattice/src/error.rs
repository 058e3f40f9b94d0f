//! Error types for lattice construction and decoding.

use std::fmt;

use toroid_core::{Dims, SessionError};

/// Errors arising from lattice construction or wire decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// At least one extent is zero.
    EmptyDimension {
        /// The offending dimensions.
        dims: Dims,
    },
    /// `x * y * z` does not fit in `usize`.
    CellCountOverflow {
        /// The offending dimensions.
        dims: Dims,
    },
    /// A nested wire lattice is not a rectangular cuboid.
    RaggedWire {
        /// What went wrong.
        reason: String,
    },
    /// A nested wire lattice holds a leaf other than 0 or 1.
    InvalidCellValue {
        /// The rejected leaf value.
        value: u8,
        /// Coordinate of the rejected leaf.
        at: (usize, usize, usize),
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { dims } => {
                write!(f, "lattice {dims} has a zero extent")
            }
            Self::CellCountOverflow { dims } => {
                write!(f, "lattice {dims} cell count overflows usize")
            }
            Self::RaggedWire { reason } => write!(f, "ragged wire lattice: {reason}"),
            Self::InvalidCellValue { value, at } => {
                write!(f, "cell {at:?} has value {value}, expected 0 or 1")
            }
        }
    }
}

impl std::error::Error for LatticeError {}

impl From<LatticeError> for SessionError {
    fn from(e: LatticeError) -> Self {
        let dims = match &e {
            LatticeError::EmptyDimension { dims } | LatticeError::CellCountOverflow { dims } => {
                *dims
            }
            LatticeError::RaggedWire { .. } | LatticeError::InvalidCellValue { .. } => {
                Dims::new(0, 0, 0)
            }
        };
        SessionError::InvalidDimensions {
            dims,
            mode: None,
            reason: e.to_string(),
        }
    }
}
