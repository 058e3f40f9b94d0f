//! Nested wire encoding of a lattice.
//!
//! On the wire a lattice is a three-level structure indexed `[x][y][z]`
//! whose leaves are `0` or `1`. This is logically the same as visiting
//! every cell in canonical order and emitting `get(x, y, z)`.

use toroid_core::Dims;

use crate::error::LatticeError;
use crate::lattice::Lattice;

/// A lattice in nested wire form, indexed `[x][y][z]`.
pub type WireLattice = Vec<Vec<Vec<u8>>>;

impl Lattice {
    /// Encode this lattice in nested wire form.
    pub fn to_nested(&self) -> WireLattice {
        let dims = self.dims();
        (0..dims.x)
            .map(|x| {
                (0..dims.y)
                    .map(|y| (0..dims.z).map(|z| self.get(x, y, z) as u8).collect())
                    .collect()
            })
            .collect()
    }

    /// Decode a lattice from nested wire form.
    ///
    /// Dimensions are taken from the outer lengths. Every row must have the
    /// same length as the first one at its level, and every leaf must be
    /// `0` or `1`.
    pub fn from_nested(wire: &[Vec<Vec<u8>>]) -> Result<Self, LatticeError> {
        let nx = wire.len();
        let ny = wire.first().map_or(0, Vec::len);
        let nz = wire
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, Vec::len);
        let mut lattice = Lattice::new(Dims::new(nx, ny, nz))?;

        for (x, plane) in wire.iter().enumerate() {
            if plane.len() != ny {
                return Err(LatticeError::RaggedWire {
                    reason: format!("plane {x} has {} rows, expected {ny}", plane.len()),
                });
            }
            for (y, row) in plane.iter().enumerate() {
                if row.len() != nz {
                    return Err(LatticeError::RaggedWire {
                        reason: format!("row [{x}][{y}] has {} cells, expected {nz}", row.len()),
                    });
                }
                for (z, &value) in row.iter().enumerate() {
                    match value {
                        0 => {}
                        1 => lattice.set(x, y, z, true),
                        _ => {
                            return Err(LatticeError::InvalidCellValue {
                                value,
                                at: (x, y, z),
                            })
                        }
                    }
                }
            }
        }
        Ok(lattice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_nested_is_indexed_x_y_z() {
        let mut l = Lattice::new(Dims::new(2, 3, 4)).unwrap();
        l.set(1, 2, 3, true);
        let wire = l.to_nested();
        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0].len(), 3);
        assert_eq!(wire[0][0].len(), 4);
        assert_eq!(wire[1][2][3], 1);
        let total: usize = wire.iter().flatten().flatten().map(|&v| v as usize).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn nested_round_trip_preserves_lattice() {
        let mut l = Lattice::new(Dims::new(3, 2, 5)).unwrap();
        for &(x, y, z) in &[(0, 0, 0), (2, 1, 4), (1, 0, 2)] {
            l.set(x, y, z, true);
        }
        assert_eq!(Lattice::from_nested(&l.to_nested()).unwrap(), l);
    }

    #[test]
    fn from_nested_rejects_ragged_rows() {
        let wire = vec![vec![vec![0, 1], vec![0]]];
        assert!(matches!(
            Lattice::from_nested(&wire),
            Err(LatticeError::RaggedWire { .. })
        ));
    }

    #[test]
    fn from_nested_rejects_ragged_planes() {
        let wire = vec![vec![vec![0]], vec![vec![0], vec![1]]];
        assert!(matches!(
            Lattice::from_nested(&wire),
            Err(LatticeError::RaggedWire { .. })
        ));
    }

    #[test]
    fn from_nested_rejects_non_binary_leaf() {
        let wire = vec![vec![vec![0, 2]]];
        assert_eq!(
            Lattice::from_nested(&wire),
            Err(LatticeError::InvalidCellValue {
                value: 2,
                at: (0, 0, 1)
            })
        );
    }

    #[test]
    fn from_nested_rejects_empty() {
        assert!(matches!(
            Lattice::from_nested(&[]),
            Err(LatticeError::EmptyDimension { .. })
        ));
    }
}
