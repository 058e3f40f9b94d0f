//! Error types shared across the toroid workspace.
//!
//! Every recoverable failure is reported as one of these values and never
//! corrupts existing session state. Contract violations (out-of-range
//! coordinates, stepping with a rule built for the wrong neighbor mode)
//! are programming errors and are not represented here.

use std::error::Error;
use std::fmt;

use crate::dims::Dims;
use crate::id::SessionId;
use crate::mode::NeighborMode;

/// Errors from session creation and lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The requested dimensions were rejected before anything was allocated.
    InvalidDimensions {
        /// The offending dimensions.
        dims: Dims,
        /// The neighbor mode the dimensions were validated against, if the
        /// rejection was mode-specific.
        mode: Option<NeighborMode>,
        /// Human-readable description of the violated constraint.
        reason: String,
    },
    /// No live session has this ID.
    UnknownSession {
        /// The requested ID.
        id: SessionId,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { dims, mode, reason } => {
                write!(f, "invalid dimensions {dims}")?;
                if let Some(mode) = mode {
                    write!(f, " for {mode} mode")?;
                }
                write!(f, ": {reason}")
            }
            Self::UnknownSession { id } => write!(f, "unknown session {id}"),
        }
    }
}

impl Error for SessionError {}

/// Errors from decoding a rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The byte encoding was not exactly 16 bytes long.
    MalformedEncoding {
        /// Length of the rejected input.
        len: usize,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEncoding { len } => {
                write!(f, "rule encoding must be exactly 16 bytes, got {len}")
            }
        }
    }
}

impl Error for RuleError {}
