//! Shannon entropy over the sequence of visited lattice states.
//!
//! Every observed lattice is counted by exact value. The entropy of the
//! resulting frequency distribution is low for runs that settle into a
//! fixed point or short cycle and approaches `log2(observations)` for
//! runs that never revisit a state.

use indexmap::IndexMap;
use toroid_lattice::Lattice;

/// Frequency table of observed lattice states.
///
/// States are kept in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct EntropyTracker {
    counts: IndexMap<Lattice, u64>,
    observations: u64,
}

impl EntropyTracker {
    /// An empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `lattice`.
    pub fn observe(&mut self, lattice: &Lattice) {
        match self.counts.get_mut(lattice) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(lattice.clone(), 1);
            }
        }
        self.observations += 1;
    }

    /// Shannon entropy of the observed states, in bits.
    ///
    /// Zero when nothing has been observed or only one distinct state has.
    pub fn entropy(&self) -> f64 {
        if self.observations == 0 {
            return 0.0;
        }
        let total = self.observations as f64;
        self.counts
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }

    /// Total number of recorded observations.
    pub fn observations(&self) -> u64 {
        self.observations
    }

    /// Number of distinct states seen.
    pub fn distinct_states(&self) -> usize {
        self.counts.len()
    }

    /// How often `lattice` has been observed.
    pub fn count_of(&self, lattice: &Lattice) -> u64 {
        self.counts.get(lattice).copied().unwrap_or(0)
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        self.counts.clear();
        self.observations = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toroid_core::Dims;

    fn lattice_with(index: usize) -> Lattice {
        let mut l = Lattice::new(Dims::new(4, 2, 2)).unwrap();
        l.set_index(index, true);
        l
    }

    #[test]
    fn empty_tracker_has_zero_entropy() {
        let t = EntropyTracker::new();
        assert_eq!(t.entropy(), 0.0);
        assert_eq!(t.observations(), 0);
        assert_eq!(t.distinct_states(), 0);
    }

    #[test]
    fn repeated_state_has_zero_entropy() {
        let mut t = EntropyTracker::new();
        let l = lattice_with(3);
        for _ in 0..10 {
            t.observe(&l);
        }
        assert_eq!(t.entropy(), 0.0);
        assert_eq!(t.count_of(&l), 10);
        assert_eq!(t.distinct_states(), 1);
    }

    #[test]
    fn uniform_distinct_states_give_log2_n() {
        let mut t = EntropyTracker::new();
        for i in 0..8 {
            t.observe(&lattice_with(i));
        }
        assert!((t.entropy() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn skewed_distribution() {
        // p = {3/4, 1/4}: H = 0.811278...
        let mut t = EntropyTracker::new();
        for _ in 0..3 {
            t.observe(&lattice_with(0));
        }
        t.observe(&lattice_with(1));
        assert!((t.entropy() - 0.811_278_124_459_132_8).abs() < 1e-12);
    }

    #[test]
    fn reset_clears_counts() {
        let mut t = EntropyTracker::new();
        t.observe(&lattice_with(0));
        t.observe(&lattice_with(1));
        t.reset();
        assert_eq!(t.observations(), 0);
        assert_eq!(t.distinct_states(), 0);
        assert_eq!(t.entropy(), 0.0);
    }
}
