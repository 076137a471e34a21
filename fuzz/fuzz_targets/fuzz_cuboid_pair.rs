#![no_main]

use libfuzzer_sys::fuzz_target;

use pretty_assertions::assert_eq;

use cuboid_algebra::math::{Cuboid, Point};
use cuboid_algebra::set::Cuboids;

fuzz_target!(|input: (Cuboid, Cuboid, Point)| check(input));

fn check((a, b, p): (Cuboid, Cuboid, Point)) {
    let parts = a.intersect(b);
    let all: Cuboids = parts
        .only_a
        .iter()
        .chain(&parts.both)
        .chain(&parts.only_b)
        .copied()
        .collect();
    assert!(all.is_disjoint(), "{all:?}");
    assert_eq!(parts.both.len(), usize::from(a.overlaps(b)));
    assert!(parts.only_a.iter().all(|&piece| a.encloses(piece) && !piece.overlaps(b)));
    assert!(parts.only_b.iter().all(|&piece| b.encloses(piece) && !piece.overlaps(a)));

    // Counts can overflow for huge cuboids; only compare them when they don't.
    if let (Some(count_a), Some(count_b), Some(only_a), Some(both)) = (
        a.points_count(),
        b.points_count(),
        parts.only_a.points_count(),
        parts.both.points_count(),
    ) {
        assert_eq!(only_a + both, count_a);
        if let Some(only_b) = parts.only_b.points_count() {
            assert_eq!(only_b + both, count_b);
        }
    }

    let pieces = a.split_at(p);
    if a.contains(p) {
        assert!(pieces.is_disjoint());
        assert_eq!(pieces.iter().filter(|piece| piece.contains(p)).count(), 1);
        assert_eq!(pieces.combine().as_slice(), [a]);
    } else {
        assert!(pieces.is_empty());
    }
}
