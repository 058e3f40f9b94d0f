//! Lattice dimensions.

use std::fmt;

/// Extents of a 3D lattice along the X, Y and Z axes.
///
/// `Dims` is a plain value; it does not validate itself. Constructors
/// that allocate storage (`Lattice::new`, `SessionStore::create_session`)
/// are responsible for rejecting zero or overflowing extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    /// Extent along X (slowest-varying in the flat index).
    pub x: usize,
    /// Extent along Y.
    pub y: usize,
    /// Extent along Z (fastest-varying in the flat index).
    pub z: usize,
}

impl Dims {
    /// Create a dimension triple.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Total number of cells, or `None` if `x * y * z` overflows `usize`.
    pub fn checked_cell_count(&self) -> Option<usize> {
        self.x.checked_mul(self.y)?.checked_mul(self.z)
    }

    /// Whether any extent is zero.
    pub fn has_zero_extent(&self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }

    /// Geometric center using integer division (lower index for even extents).
    pub fn center(&self) -> (usize, usize, usize) {
        (self.x / 2, self.y / 2, self.z / 2)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

impl From<(usize, usize, usize)> for Dims {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self { x, y, z }
    }
}
