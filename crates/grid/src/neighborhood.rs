//! Spatial neighborhood construction on the latitude/longitude plane.
//!
//! Bounds are computed in signed arithmetic so a radius larger than the
//! coordinate itself is representable. With wrapping disabled the span is
//! clamped to the axis; with wrapping enabled the raw span is kept and
//! reduced modulo the axis length when the index lists are materialized.
//!
//! **Not part of the public API.**

use crate::config::NeighborhoodConfig;
use crate::shape::{GridPoint, GridShape};

/// Inclusive latitude/longitude spans around a target point.
///
/// Values may lie outside `[0, len - 1]` when the corresponding axis wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LatLonBounds {
    pub(crate) lat_min: i64,
    pub(crate) lat_max: i64,
    pub(crate) lon_min: i64,
    pub(crate) lon_max: i64,
}

/// Computes the neighborhood spans for one point.
pub(crate) fn compute_bounds(
    shape: &GridShape,
    point: GridPoint,
    config: &NeighborhoodConfig,
) -> LatLonBounds {
    let r = config.radius() as i64;
    let lat = point.lat as i64;
    let lon = point.lon as i64;

    let (lat_min, lat_max) = if config.y_wrap() {
        (lat - r, lat + r)
    } else {
        ((lat - r).max(0), (lat + r).min(shape.lats() as i64 - 1))
    };
    let (lon_min, lon_max) = if config.x_wrap() {
        (lon - r, lon + r)
    } else {
        ((lon - r).max(0), (lon + r).min(shape.lons() as i64 - 1))
    };

    LatLonBounds {
        lat_min,
        lat_max,
        lon_min,
        lon_max,
    }
}

/// Materializes the sorted, duplicate-free index list for one axis span.
///
/// With `wrap` the raw span is reduced modulo `len`, so a span crossing the
/// edge contributes indices from both ends of the axis. A span covering the
/// whole axis at least once yields every index exactly once.
pub(crate) fn axis_indices(min: i64, max: i64, len: usize, wrap: bool) -> Vec<usize> {
    let len_i = len as i64;
    let mut indices: Vec<usize> = if wrap {
        (min..=max).map(|v| v.rem_euclid(len_i) as usize).collect()
    } else {
        (min..=max).map(|v| v as usize).collect()
    };
    indices.sort_unstable();
    indices.dedup();
    indices
}

/// Cartesian product of the target's fixed (layer, variable) pair with the
/// latitude × longitude neighborhood, excluding the target itself.
pub(crate) fn enumerate_positions(
    point: GridPoint,
    lat_indices: &[usize],
    lon_indices: &[usize],
) -> Vec<GridPoint> {
    let mut positions = Vec::with_capacity(lat_indices.len() * lon_indices.len());
    for &lat in lat_indices {
        for &lon in lon_indices {
            let candidate = GridPoint::new(point.layer, point.variable, lat, lon);
            if candidate != point {
                positions.push(candidate);
            }
        }
    }
    positions
}
