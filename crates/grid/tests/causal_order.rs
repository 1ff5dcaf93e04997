//! Causal-order property tests for predecessor resolution.

use boreas_grid::{GridShape, NeighborhoodConfig, all_predecessors, point_predecessors};

/// Every predecessor index is strictly below its row, across shapes and radii.
#[test]
fn predecessors_strictly_precede() {
    let shapes = [(1, 1, 4, 4), (2, 3, 3, 3), (3, 1, 2, 5)];
    for &(a, b, c, d) in &shapes {
        let shape = GridShape::new(a, b, c, d).unwrap();
        for radius in 1..=3 {
            let config = NeighborhoodConfig::new(radius);
            let map = all_predecessors(&shape, &config).unwrap();
            for (row, set) in map.iter().enumerate() {
                for &p in set {
                    assert!(
                        p < row,
                        "shape {:?} radius {radius}: {p} does not precede {row}",
                        shape.as_tuple()
                    );
                }
            }
        }
    }
}

/// The strict-precedence invariant makes cycles impossible: following
/// predecessor links always decreases the index and terminates at a row
/// with an empty set.
#[test]
fn predecessor_chains_terminate() {
    let shape = GridShape::new(1, 2, 4, 4).unwrap();
    let config = NeighborhoodConfig::new(2);
    let map = all_predecessors(&shape, &config).unwrap();

    for start in 0..map.len() {
        let mut current = start;
        let mut steps = 0;
        while let Some(&next) = map.get(current).and_then(|s| s.last()) {
            assert!(next < current);
            current = next;
            steps += 1;
            assert!(steps <= map.len(), "chain from {start} did not terminate");
        }
        assert!(map.get(current).unwrap().is_empty());
    }
}

/// Predecessor sets are ascending and duplicate-free.
#[test]
fn predecessor_sets_are_canonical() {
    let shape = GridShape::new(2, 2, 4, 4).unwrap();
    let map = all_predecessors(&shape, &NeighborhoodConfig::new(2)).unwrap();
    for set in map.iter() {
        for pair in set.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}

/// The predecessor relation is not symmetric: an earlier point never lists a
/// later one, even though the later one lists it.
#[test]
fn relation_is_asymmetric() {
    let shape = GridShape::new(1, 1, 4, 4).unwrap();
    let config = NeighborhoodConfig::new(1).with_x_wrap(false).with_y_wrap(false);
    let map = all_predecessors(&shape, &config).unwrap();

    let row = 5; // point (0,0,1,1)
    let set = map.get(row).unwrap();
    assert!(!set.is_empty());
    for &p in set {
        let earlier = map.get(p).unwrap();
        assert!(!earlier.contains(&row));
    }
}

/// The per-point and whole-grid entry points agree.
#[test]
fn point_and_bulk_resolution_agree() {
    let shape = GridShape::new(2, 1, 3, 3).unwrap();
    let config = NeighborhoodConfig::new(1).with_y_wrap(false);
    let map = all_predecessors(&shape, &config).unwrap();
    for (j, point) in shape.points().enumerate() {
        let direct = point_predecessors(&shape, point, &config).unwrap();
        assert_eq!(map.get(j).unwrap(), direct.as_slice());
    }
}
