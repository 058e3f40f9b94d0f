//! Toroidal axis algebra.
//!
//! Every axis wraps: the predecessor of coordinate `0` is `n - 1` and the
//! successor of `n - 1` is `0`. An axis of extent 1 is its own neighbor on
//! both sides.

use toroid_core::Dims;

use crate::lattice::Lattice;

/// One of the three lattice axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The slowest-varying axis of the flat index.
    X,
    /// The middle axis.
    Y,
    /// The fastest-varying axis of the flat index.
    Z,
}

impl Axis {
    /// All axes in key order (X pair occupies the highest pair bits).
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Extent of this axis in `dims`.
    pub fn extent(self, dims: Dims) -> usize {
        match self {
            Axis::X => dims.x,
            Axis::Y => dims.y,
            Axis::Z => dims.z,
        }
    }
}

/// Wraparound predecessor of `c` on an axis of extent `n`.
#[inline]
pub fn wrap_pred(c: usize, n: usize) -> usize {
    (c + n - 1) % n
}

/// Wraparound successor of `c` on an axis of extent `n`.
#[inline]
pub fn wrap_succ(c: usize, n: usize) -> usize {
    (c + 1) % n
}

impl Lattice {
    /// Predecessor and successor states of `(x, y, z)` along `axis`.
    pub fn neighbours_along(&self, x: usize, y: usize, z: usize, axis: Axis) -> (bool, bool) {
        let dims = self.dims();
        match axis {
            Axis::X => (
                self.get(wrap_pred(x, dims.x), y, z),
                self.get(wrap_succ(x, dims.x), y, z),
            ),
            Axis::Y => (
                self.get(x, wrap_pred(y, dims.y), z),
                self.get(x, wrap_succ(y, dims.y), z),
            ),
            Axis::Z => (
                self.get(x, y, wrap_pred(z, dims.z)),
                self.get(x, y, wrap_succ(z, dims.z)),
            ),
        }
    }

    /// Two-bit pair code `(pred << 1) | succ` of `(x, y, z)` along `axis`.
    #[inline]
    pub fn axis_pair(&self, x: usize, y: usize, z: usize, axis: Axis) -> u8 {
        let (pred, succ) = self.neighbours_along(x, y, z, axis);
        ((pred as u8) << 1) | succ as u8
    }
}
