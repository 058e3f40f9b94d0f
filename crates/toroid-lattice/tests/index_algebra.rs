use toroid_core::Dims;
use toroid_lattice::{Axis, Lattice};

#[test]
fn full_index_range_round_trips_for_odd_shapes() {
    for &(x, y, z) in &[(1, 1, 1), (7, 1, 1), (1, 9, 1), (1, 1, 65), (3, 5, 7), (4, 4, 4)] {
        let l = Lattice::new(Dims::new(x, y, z)).unwrap();
        for i in 0..l.cell_count() {
            let (cx, cy, cz) = l.unpack(i);
            assert_eq!(l.pack(cx, cy, cz), i, "dims {x}x{y}x{z}, index {i}");
        }
    }
}

#[test]
fn word_boundary_cells_are_independent() {
    let mut l = Lattice::new(Dims::new(1, 1, 130)).unwrap();
    l.set(0, 0, 63, true);
    l.set(0, 0, 64, true);
    l.set(0, 0, 129, true);
    assert_eq!(l.words().len(), 3);
    assert_eq!(l.words()[0], 1u64 << 63);
    assert_eq!(l.words()[1], 1u64);
    assert_eq!(l.words()[2], 0b10u64);
    l.set(0, 0, 64, false);
    assert!(l.get(0, 0, 63));
    assert!(!l.get(0, 0, 64));
    assert!(l.get(0, 0, 129));
}

#[test]
fn wire_encoding_matches_canonical_iteration() {
    let mut l = Lattice::new(Dims::new(3, 2, 4)).unwrap();
    for i in (0..l.cell_count()).step_by(3) {
        l.set_index(i, true);
    }
    let flattened: Vec<bool> = l
        .to_nested()
        .into_iter()
        .flatten()
        .flatten()
        .map(|v| v == 1)
        .collect();
    let canonical: Vec<bool> = l.iter_cells().collect();
    assert_eq!(flattened, canonical);
}

#[test]
fn axis_pairs_see_only_their_own_axis() {
    let mut l = Lattice::new(Dims::new(3, 3, 3)).unwrap();
    // Neighbours of the center along Y only.
    l.set(1, 0, 1, true);
    l.set(1, 2, 1, true);
    assert_eq!(l.axis_pair(1, 1, 1, Axis::Y), 0b11);
    assert_eq!(l.axis_pair(1, 1, 1, Axis::X), 0b00);
    assert_eq!(l.axis_pair(1, 1, 1, Axis::Z), 0b00);
}
