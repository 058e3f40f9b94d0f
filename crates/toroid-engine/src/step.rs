//! The synchronous toroidal update.
//!
//! Every cell of the next generation is computed from the previous
//! snapshot only: its own state plus one wraparound predecessor/successor
//! pair per axis. The output is written to a fresh lattice, so the order
//! in which cells are visited cannot affect the result.

use toroid_core::NeighborMode;
use toroid_lattice::{Axis, Lattice};
use toroid_rule::RuleTable;

/// Next state of the cell at `(x, y, z)`.
#[inline]
pub fn next_state(
    current: &Lattice,
    rule: RuleTable,
    mode: NeighborMode,
    x: usize,
    y: usize,
    z: usize,
) -> bool {
    let central = current.get(x, y, z);
    let x_pair = current.axis_pair(x, y, z, Axis::X);
    let (y_pair, z_pair) = if mode.collapses_yz() {
        (0, 0)
    } else {
        (
            current.axis_pair(x, y, z, Axis::Y),
            current.axis_pair(x, y, z, Axis::Z),
        )
    };
    rule.lives(central, x_pair, y_pair, z_pair)
}

/// Compute the next generation of `current` under `rule`.
///
/// Pure and deterministic: identical inputs give bit-identical outputs,
/// and `current` is never modified. The result has the same dimensions
/// as `current`.
///
/// Stepping a one-axis session with a rule meant for three axes (or the
/// reverse) is a caller error and is not detected.
pub fn step(current: &Lattice, rule: RuleTable, mode: NeighborMode) -> Lattice {
    let dims = current.dims();
    let mut next = current.dead_like();
    let mut index = 0;
    for x in 0..dims.x {
        for y in 0..dims.y {
            for z in 0..dims.z {
                if next_state(current, rule, mode, x, y, z) {
                    next.set_index(index, true);
                }
                index += 1;
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use toroid_core::Dims;
    use toroid_rule::RuleKey;
    use toroid_test_utils::{lattice_with_cells, ReferenceEca};

    fn row(lattice: &Lattice) -> Vec<bool> {
        (0..lattice.dims().x).map(|x| lattice.get(x, 0, 0)).collect()
    }

    #[test]
    fn rule_90_on_five_cells_matches_sierpinski() {
        let rule = RuleTable::from_eca_number(90);
        let mut lattice = lattice_with_cells(Dims::new(5, 1, 1), &[(2, 0, 0)]);

        lattice = step(&lattice, rule, NeighborMode::OneAxis);
        assert_eq!(row(&lattice), [false, true, false, true, false]);

        lattice = step(&lattice, rule, NeighborMode::OneAxis);
        assert_eq!(row(&lattice), [true, false, false, false, true]);

        // Generation 3 wraps: cells 0 and 4 are neighbours on the torus.
        lattice = step(&lattice, rule, NeighborMode::OneAxis);
        assert_eq!(row(&lattice), [true, true, false, true, true]);
    }

    #[test]
    fn one_axis_matches_reference_eca_for_many_generations() {
        for n in [30u8, 90, 110, 184] {
            let rule = RuleTable::from_eca_number(n);
            let mut lattice = lattice_with_cells(Dims::new(31, 1, 1), &[(15, 0, 0)]);
            let mut reference = ReferenceEca::centered(31, n);
            for generation in 0..40 {
                assert_eq!(row(&lattice), reference.cells(), "rule {n} gen {generation}");
                lattice = step(&lattice, rule, NeighborMode::OneAxis);
                reference.step();
            }
        }
    }

    #[test]
    fn one_axis_rows_evolve_independently() {
        // Every (y, z) row of a one-axis lattice is its own 1D automaton.
        let rule = RuleTable::from_eca_number(30);
        let start = lattice_with_cells(Dims::new(9, 2, 3), &[(4, 0, 0), (1, 1, 2)]);
        let next = step(&start, rule, NeighborMode::OneAxis);
        for y in 0..2 {
            for z in 0..3 {
                let mut reference = ReferenceEca::new(9, 30);
                for x in 0..9 {
                    reference.set(x, start.get(x, y, z));
                }
                reference.step();
                let got: Vec<bool> = (0..9).map(|x| next.get(x, y, z)).collect();
                assert_eq!(got, reference.cells(), "row y={y} z={z}");
            }
        }
    }

    #[test]
    fn all_dead_is_absorbing_when_key_zero_is_dead() {
        let rule = RuleTable::from_raw_bits(!1u128);
        let lattice = Lattice::new(Dims::new(5, 6, 7)).unwrap();
        for mode in [NeighborMode::OneAxis, NeighborMode::ThreeAxis] {
            assert!(step(&lattice, rule, mode).is_all_dead());
        }
    }

    #[test]
    fn key_zero_alive_fills_dead_lattice() {
        let rule = RuleTable::default().with_entry(RuleKey::new(false, 0, 0, 0), true);
        let lattice = Lattice::new(Dims::new(4, 4, 4)).unwrap();
        let next = step(&lattice, rule, NeighborMode::ThreeAxis);
        assert_eq!(next.live_count(), 64);
    }

    #[test]
    fn three_axis_reads_y_and_z_neighbours() {
        // Rule: alive iff the Y predecessor is alive.
        let rule = RuleTable::from_fn(|key| key.y_pair() & 0b10 != 0);
        let start = lattice_with_cells(Dims::new(5, 5, 5), &[(2, 2, 2)]);

        let next = step(&start, rule, NeighborMode::ThreeAxis);
        assert_eq!(next.live_cells(), vec![(2, 3, 2)]);

        // Under one-axis mode the Y pair is forced to 0, so nothing lives.
        let collapsed = step(&start, rule, NeighborMode::OneAxis);
        assert!(collapsed.is_all_dead());
    }

    #[test]
    fn three_axis_wraps_along_z() {
        // Alive iff the Z successor is alive: the pattern moves toward -Z.
        let rule = RuleTable::from_fn(|key| key.z_pair() & 0b01 != 0);
        let start = lattice_with_cells(Dims::new(5, 5, 5), &[(1, 1, 0)]);
        let next = step(&start, rule, NeighborMode::ThreeAxis);
        assert_eq!(next.live_cells(), vec![(1, 1, 4)]);
    }

    #[test]
    fn identity_rule_preserves_state() {
        let rule = RuleTable::from_fn(|key| key.central());
        let start = lattice_with_cells(Dims::new(5, 4, 6), &[(0, 0, 0), (4, 3, 5), (2, 1, 3)]);
        assert_eq!(step(&start, rule, NeighborMode::ThreeAxis), start);
    }

    #[test]
    fn step_does_not_modify_input() {
        let start = lattice_with_cells(Dims::new(5, 5, 5), &[(2, 2, 2)]);
        let before = start.clone();
        let _ = step(&start, RuleTable::from_raw_bits(u128::MAX), NeighborMode::ThreeAxis);
        assert_eq!(start, before);
    }

    proptest! {
        #[test]
        fn step_is_pure(
            bits in any::<u128>(),
            cells in proptest::collection::vec(any::<bool>(), 5 * 4 * 6),
            three_axis in any::<bool>(),
        ) {
            let mode = if three_axis { NeighborMode::ThreeAxis } else { NeighborMode::OneAxis };
            let rule = RuleTable::from_raw_bits(bits);
            let mut start = Lattice::new(Dims::new(5, 4, 6)).unwrap();
            for (i, &alive) in cells.iter().enumerate() {
                start.set_index(i, alive);
            }
            let a = step(&start, rule, mode);
            let b = step(&start, rule, mode);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.dims(), start.dims());
        }

        #[test]
        fn step_agrees_with_cellwise_next_state(
            bits in any::<u128>(),
            cells in proptest::collection::vec(any::<bool>(), 4 * 5 * 3),
        ) {
            let rule = RuleTable::from_raw_bits(bits);
            let mut start = Lattice::new(Dims::new(4, 5, 3)).unwrap();
            for (i, &alive) in cells.iter().enumerate() {
                start.set_index(i, alive);
            }
            let next = step(&start, rule, NeighborMode::ThreeAxis);
            for i in 0..start.cell_count() {
                let (x, y, z) = start.unpack(i);
                prop_assert_eq!(
                    next.get(x, y, z),
                    next_state(&start, rule, NeighborMode::ThreeAxis, x, y, z)
                );
            }
        }
    }
}
