//! Text rendering of lattice slices for debugging.
//!
//! Each output line is one Y row. Within a line, every Z slice is printed
//! as its X run of `0`/`1` cells, and slices are separated by `",\t"`.

use std::fmt;

use crate::lattice::Lattice;

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.dims();
        for y in 0..dims.y {
            for z in 0..dims.z {
                for x in 0..dims.x {
                    write!(f, "{} ", self.get(x, y, z) as u8)?;
                }
                if z + 1 < dims.z {
                    write!(f, ",\t")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
