//! Core abstraction traits.

/// A source of independent random cell states.
///
/// This is the narrow interface through which random initial states are
/// produced. The engine never depends on a concrete generator: callers pass
/// `&mut dyn EntropySource`, and the engine draws exactly one bit per cell
/// in canonical (flat-index) order.
pub trait EntropySource {
    /// Draw the state of the next cell.
    fn next_cell(&mut self) -> bool;
}

impl<F: FnMut() -> bool> EntropySource for F {
    fn next_cell(&mut self) -> bool {
        self()
    }
}
