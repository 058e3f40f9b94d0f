//! The bit-packed 3D lattice.

use toroid_core::{Dims, EntropySource};

use crate::error::LatticeError;

/// Bits per storage word.
pub(crate) const WORD_BITS: usize = u64::BITS as usize;

/// A dense 3D boolean array, one bit per cell.
///
/// Cells are addressed either by coordinate `(x, y, z)` or by flat index
/// (see [`pack`](Self::pack)). Coordinates and indices are the caller's
/// responsibility: out-of-range access is a contract violation and panics
/// rather than returning an error, as with slice indexing.
///
/// Equality compares dimensions first, then the raw word storage. Padding
/// bits past the last cell are kept at zero by every mutating method, so
/// two lattices with the same dimensions are equal exactly when every
/// cell agrees.
///
/// # Examples
///
/// ```
/// use toroid_core::Dims;
/// use toroid_lattice::Lattice;
///
/// let mut lattice = Lattice::new(Dims::new(4, 3, 2)).unwrap();
/// lattice.set(1, 2, 0, true);
/// assert!(lattice.get(1, 2, 0));
/// assert!(lattice.get_index(lattice.pack(1, 2, 0)));
/// assert_eq!(lattice.live_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lattice {
    dims: Dims,
    words: Vec<u64>,
}

impl Lattice {
    /// Allocate an all-dead lattice.
    ///
    /// Returns `Err(LatticeError::EmptyDimension)` if any extent is zero,
    /// or `Err(LatticeError::CellCountOverflow)` if `x * y * z` does not
    /// fit in `usize`.
    pub fn new(dims: Dims) -> Result<Self, LatticeError> {
        if dims.has_zero_extent() {
            return Err(LatticeError::EmptyDimension { dims });
        }
        let cells = dims
            .checked_cell_count()
            .ok_or(LatticeError::CellCountOverflow { dims })?;
        Ok(Self {
            dims,
            words: vec![0; cells.div_ceil(WORD_BITS)],
        })
    }

    /// An all-dead lattice with the same dimensions as `self`.
    pub fn dead_like(&self) -> Self {
        Self {
            dims: self.dims,
            words: vec![0; self.words.len()],
        }
    }

    /// Dimensions of this lattice.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        // Cannot overflow: checked at construction.
        self.dims.x * self.dims.y * self.dims.z
    }

    /// Raw word storage, least-significant bit first within each word.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Flat index of `(x, y, z)`: `x*Y*Z + y*Z + z`.
    #[inline]
    pub fn pack(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(
            x < self.dims.x && y < self.dims.y && z < self.dims.z,
            "coordinate ({x}, {y}, {z}) out of bounds for {}",
            self.dims
        );
        (x * self.dims.y + y) * self.dims.z + z
    }

    /// Inverse of [`pack`](Self::pack).
    #[inline]
    pub fn unpack(&self, index: usize) -> (usize, usize, usize) {
        debug_assert!(index < self.cell_count(), "index {index} out of bounds");
        let plane = self.dims.y * self.dims.z;
        let x = index / plane;
        let rem = index % plane;
        (x, rem / self.dims.z, rem % self.dims.z)
    }

    /// Read the cell at `(x, y, z)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        self.get_index(self.pack(x, y, z))
    }

    /// Write the cell at `(x, y, z)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, alive: bool) {
        let index = self.pack(x, y, z);
        self.set_index(index, alive);
    }

    /// Read the cell at a flat index.
    #[inline]
    pub fn get_index(&self, index: usize) -> bool {
        debug_assert!(index < self.cell_count(), "index {index} out of bounds");
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    /// Write the cell at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`. Writing a padding bit would break
    /// the equality invariant, so this bound is checked in release builds.
    #[inline]
    pub fn set_index(&mut self, index: usize, alive: bool) {
        assert!(
            index < self.cell_count(),
            "index {index} out of bounds for {} lattice",
            self.dims
        );
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if alive {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Whether every cell is dead.
    pub fn is_all_dead(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Overwrite every cell with a draw from `source`, in flat-index order.
    pub fn fill_from(&mut self, source: &mut dyn EntropySource) {
        for index in 0..self.cell_count() {
            self.set_index(index, source.next_cell());
        }
    }

    /// Cell states in canonical (flat-index) order.
    pub fn iter_cells(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.cell_count()).map(move |i| self.get_index(i))
    }

    /// Coordinates of every live cell, in canonical order.
    pub fn live_cells(&self) -> Vec<(usize, usize, usize)> {
        self.iter_cells()
            .enumerate()
            .filter(|&(_, alive)| alive)
            .map(|(i, _)| self.unpack(i))
            .collect()
    }
}
