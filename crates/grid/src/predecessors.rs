//! Predecessor resolution: neighborhoods filtered to a fixed causal order.
//!
//! The causal order is the row-major flattened index itself. A candidate
//! neighbor is a predecessor of the target exactly when its flattened index
//! is strictly smaller, which fixes a topological order over grid points up
//! front and keeps the estimator's coefficient matrix unit lower-triangular
//! by construction.

use tracing::debug;

use crate::config::NeighborhoodConfig;
use crate::error::GridError;
use crate::neighborhood::{axis_indices, compute_bounds, enumerate_positions};
use crate::shape::{GridPoint, GridShape};

/// Predecessor sets for every state variable, indexed by flattened index.
///
/// Invariants, enforced at construction: set `j` contains only indices
/// strictly below `j`, ascending, without duplicates. The first point's set
/// is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    sets: Vec<Vec<usize>>,
}

impl PredecessorMap {
    /// Builds a map from raw per-row predecessor sets.
    ///
    /// Returns an error if any entry fails to precede its row. Entries are
    /// sorted and deduplicated.
    pub fn from_sets(sets: Vec<Vec<usize>>) -> Result<Self, GridError> {
        let mut sets = sets;
        for (row, set) in sets.iter_mut().enumerate() {
            for &index in set.iter() {
                if index >= row {
                    return Err(GridError::PredecessorOrder { row, index });
                }
            }
            set.sort_unstable();
            set.dedup();
        }
        Ok(Self { sets })
    }

    /// Number of state variables covered by the map.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the map covers no state variables.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Predecessor set of state variable `j`, or `None` if out of range.
    pub fn get(&self, j: usize) -> Option<&[usize]> {
        self.sets.get(j).map(Vec::as_slice)
    }

    /// Iterates over all predecessor sets in ascending row order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.sets.iter().map(Vec::as_slice)
    }

    /// Total number of predecessor entries across all rows.
    pub fn total_entries(&self) -> usize {
        self.sets.iter().map(Vec::len).sum()
    }
}

/// Resolves the predecessor set of a single point.
///
/// The neighborhood is the latitude/longitude patch of radius
/// `config.radius()` around the point within its own (layer, variable)
/// slab, with wrap or clamp boundary handling per axis. Of those neighbors,
/// only the ones preceding the point in the flattened ordering are kept.
/// The result is ascending and empty for the grid's first point.
///
/// # Errors
///
/// Fails with [`GridError::InvalidRadius`] for a zero radius and
/// [`GridError::PointOutOfBounds`] for a point outside the grid. No partial
/// set is ever returned.
///
/// # Example
///
/// ```
/// use boreas_grid::{GridPoint, GridShape, NeighborhoodConfig, point_predecessors};
///
/// let shape = GridShape::new(1, 1, 4, 4).unwrap();
/// let config = NeighborhoodConfig::new(1).with_x_wrap(false).with_y_wrap(false);
///
/// // The first point has no predecessors.
/// let first = point_predecessors(&shape, GridPoint::new(0, 0, 0, 0), &config).unwrap();
/// assert!(first.is_empty());
///
/// // An interior point keeps the neighbors above and to its left.
/// let preds = point_predecessors(&shape, GridPoint::new(0, 0, 2, 2), &config).unwrap();
/// assert_eq!(preds, vec![5, 6, 7, 9]);
/// ```
pub fn point_predecessors(
    shape: &GridShape,
    point: GridPoint,
    config: &NeighborhoodConfig,
) -> Result<Vec<usize>, GridError> {
    config.validate()?;
    if !shape.contains(point) {
        return Err(GridError::PointOutOfBounds {
            point: point.as_tuple(),
            shape: shape.as_tuple(),
        });
    }

    let bounds = compute_bounds(shape, point, config);
    let lat_indices = axis_indices(bounds.lat_min, bounds.lat_max, shape.lats(), config.y_wrap());
    let lon_indices = axis_indices(bounds.lon_min, bounds.lon_max, shape.lons(), config.x_wrap());

    let target = shape.flatten(point);
    let mut predecessors: Vec<usize> = enumerate_positions(point, &lat_indices, &lon_indices)
        .into_iter()
        .map(|p| shape.flatten(p))
        .filter(|&flat| flat < target)
        .collect();
    predecessors.sort_unstable();
    Ok(predecessors)
}

/// Resolves predecessor sets for every point of the grid, in ascending
/// flattened order.
///
/// # Errors
///
/// Fails with [`GridError::InvalidRadius`] for a zero radius; the shape is
/// valid by construction so no per-point failure can occur.
pub fn all_predecessors(
    shape: &GridShape,
    config: &NeighborhoodConfig,
) -> Result<PredecessorMap, GridError> {
    config.validate()?;

    let mut sets = Vec::with_capacity(shape.len());
    for point in shape.points() {
        sets.push(point_predecessors(shape, point, config)?);
    }
    let map = PredecessorMap::from_sets(sets)?;
    debug!(
        state_len = shape.len(),
        radius = config.radius(),
        entries = map.total_entries(),
        "resolved predecessor map"
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_wrap(radius: usize) -> NeighborhoodConfig {
        NeighborhoodConfig::new(radius)
            .with_x_wrap(false)
            .with_y_wrap(false)
    }

    #[test]
    fn first_point_has_no_predecessors() {
        let shape = GridShape::new(2, 2, 4, 4).unwrap();
        let preds =
            point_predecessors(&shape, GridPoint::new(0, 0, 0, 0), &no_wrap(1)).unwrap();
        assert!(preds.is_empty());
    }

    #[test]
    fn predecessors_strictly_precede_target() {
        let shape = GridShape::new(1, 2, 5, 5).unwrap();
        let config = NeighborhoodConfig::new(2);
        for point in shape.points() {
            let target = shape.flatten(point);
            let preds = point_predecessors(&shape, point, &config).unwrap();
            for &p in &preds {
                assert!(p < target, "predecessor {p} of {target} must precede it");
            }
        }
    }

    #[test]
    fn interior_point_chebyshev_one() {
        // Scenario from the design: shape (1,1,4,4), radius 1, no wrap.
        // Point (0,0,2,2) = flat 10. Neighbors within Chebyshev distance 1
        // that precede it: (1,1)=5, (1,2)=6, (1,3)=7, (2,1)=9.
        let shape = GridShape::new(1, 1, 4, 4).unwrap();
        let preds =
            point_predecessors(&shape, GridPoint::new(0, 0, 2, 2), &no_wrap(1)).unwrap();
        assert_eq!(preds, vec![5, 6, 7, 9]);
    }

    #[test]
    fn wrap_pulls_in_far_edge() {
        // With both axes cyclic, (0,0,0,0)'s neighborhood includes the last
        // row and column, but none of them precede flat index 0.
        let shape = GridShape::new(1, 1, 4, 4).unwrap();
        let config = NeighborhoodConfig::new(1);
        let preds = point_predecessors(&shape, GridPoint::new(0, 0, 0, 0), &config).unwrap();
        assert!(preds.is_empty());

        // Point (0,0,1,0) = flat 4: its wrapped lon neighborhood is
        // {3, 0, 1}, lat {0, 1, 2}; predecessors are flat {0, 1, 3}.
        let preds = point_predecessors(&shape, GridPoint::new(0, 0, 1, 0), &config).unwrap();
        assert_eq!(preds, vec![0, 1, 3]);
    }

    #[test]
    fn clamped_never_leaves_axis_range() {
        let shape = GridShape::new(1, 1, 3, 3).unwrap();
        for point in shape.points() {
            let preds = point_predecessors(&shape, point, &no_wrap(5)).unwrap();
            for &p in &preds {
                let q = shape.unflatten(p).unwrap();
                assert!(q.lat < 3 && q.lon < 3);
            }
        }
    }

    #[test]
    fn out_of_bounds_point_rejected() {
        let shape = GridShape::new(1, 1, 4, 4).unwrap();
        let result = point_predecessors(&shape, GridPoint::new(0, 0, 4, 0), &no_wrap(1));
        assert!(matches!(
            result,
            Err(GridError::PointOutOfBounds { .. })
        ));
    }

    #[test]
    fn zero_radius_rejected() {
        let shape = GridShape::new(1, 1, 4, 4).unwrap();
        let result =
            point_predecessors(&shape, GridPoint::new(0, 0, 0, 0), &no_wrap(0));
        assert!(matches!(result, Err(GridError::InvalidRadius { radius: 0 })));
    }

    #[test]
    fn all_predecessors_covers_grid_in_order() {
        let shape = GridShape::new(1, 1, 3, 4).unwrap();
        let config = NeighborhoodConfig::new(1);
        let map = all_predecessors(&shape, &config).unwrap();
        assert_eq!(map.len(), shape.len());
        for (j, point) in shape.points().enumerate() {
            let direct = point_predecessors(&shape, point, &config).unwrap();
            assert_eq!(map.get(j).unwrap(), direct.as_slice());
        }
    }

    #[test]
    fn map_rejects_non_preceding_entry() {
        let result = PredecessorMap::from_sets(vec![vec![], vec![0], vec![2]]);
        assert!(matches!(
            result,
            Err(GridError::PredecessorOrder { row: 2, index: 2 })
        ));
    }

    #[test]
    fn map_sorts_and_dedups() {
        let map = PredecessorMap::from_sets(vec![vec![], vec![0], vec![1, 0, 1]]).unwrap();
        assert_eq!(map.get(2).unwrap(), &[0, 1]);
        assert_eq!(map.total_entries(), 3);
    }
}
