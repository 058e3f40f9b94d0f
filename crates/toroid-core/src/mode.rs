//! Neighbor modes.

use std::fmt;

/// Which axes contribute neighbor codes to the rule key.
///
/// The mode is chosen when a session is created and never changes for
/// the lifetime of that session. It is session state, not store state:
/// two sessions in the same store may use different modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeighborMode {
    /// Classic elementary-CA embedding: only the X axis pair is read,
    /// Y and Z pair codes are forced to 0.
    OneAxis,
    /// All three axis pairs are read from the real wraparound neighbors.
    ThreeAxis,
}

impl NeighborMode {
    /// Whether the Y and Z axis pairs are forced to 0.
    pub fn collapses_yz(self) -> bool {
        matches!(self, Self::OneAxis)
    }
}

impl fmt::Display for NeighborMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneAxis => write!(f, "one-axis"),
            Self::ThreeAxis => write!(f, "three-axis"),
        }
    }
}
