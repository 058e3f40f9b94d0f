//! Reference elementary cellular automaton.
//!
//! A deliberately naive 1D implementation over a `Vec<bool>` ring, written
//! straight from Wolfram's numbering and sharing no code with the engine.

/// Ring of cells evolving under one Wolfram rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceEca {
    rule: u8,
    cells: Vec<bool>,
}

impl ReferenceEca {
    /// All-dead ring of `width` cells.
    pub fn new(width: usize, rule: u8) -> Self {
        assert!(width > 0, "width must be positive");
        Self {
            rule,
            cells: vec![false; width],
        }
    }

    /// Ring with only cell `width / 2` alive.
    pub fn centered(width: usize, rule: u8) -> Self {
        let mut eca = Self::new(width, rule);
        eca.set(width / 2, true);
        eca
    }

    /// Set cell `i`. Panics if `i` is outside the ring.
    pub fn set(&mut self, i: usize, alive: bool) {
        self.cells[i] = alive;
    }

    /// Advance one generation with wraparound at both ends.
    pub fn step(&mut self) {
        let n = self.cells.len();
        let next = (0..n)
            .map(|i| {
                let left = self.cells[(i + n - 1) % n] as u8;
                let center = self.cells[i] as u8;
                let right = self.cells[(i + 1) % n] as u8;
                let pattern = left * 4 + center * 2 + right;
                self.rule & (1 << pattern) != 0
            })
            .collect();
        self.cells = next;
    }

    /// Current cell states, left to right.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}
