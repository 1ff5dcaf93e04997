//! 4D grid shape, points, and the row-major flattened index space.
//!
//! A state variable is addressed either by its (layer, variable, latitude,
//! longitude) coordinates or by a single flattened index. The mapping is
//! row-major over (layer, variable, lat, lon): longitude varies fastest,
//! layer slowest. Both the neighborhood resolver and the precision estimator
//! address ensemble columns through this one bijection.

use crate::error::GridError;

/// A single cell of the 4D state grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    /// Height layer (e.g. pressure level).
    pub layer: usize,
    /// Physical variable index.
    pub variable: usize,
    /// Latitude index.
    pub lat: usize,
    /// Longitude index.
    pub lon: usize,
}

impl GridPoint {
    /// Creates a new grid point.
    pub fn new(layer: usize, variable: usize, lat: usize, lon: usize) -> Self {
        Self {
            layer,
            variable,
            lat,
            lon,
        }
    }

    /// Returns the coordinates as a (layer, variable, lat, lon) tuple.
    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (self.layer, self.variable, self.lat, self.lon)
    }
}

/// Extents of the 4D state grid (layers, variables, latitudes, longitudes).
///
/// # Example
///
/// ```
/// use boreas_grid::{GridPoint, GridShape};
///
/// let shape = GridShape::new(2, 3, 4, 5).unwrap();
/// assert_eq!(shape.len(), 120);
///
/// let p = GridPoint::new(1, 2, 3, 4);
/// let flat = shape.flatten(p);
/// assert_eq!(shape.unflatten(flat).unwrap(), p);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    layers: usize,
    variables: usize,
    lats: usize,
    lons: usize,
}

impl GridShape {
    /// Creates a new grid shape.
    ///
    /// Returns an error if any axis has extent zero.
    pub fn new(
        layers: usize,
        variables: usize,
        lats: usize,
        lons: usize,
    ) -> Result<Self, GridError> {
        if layers == 0 {
            return Err(GridError::ZeroExtent { axis: "layer" });
        }
        if variables == 0 {
            return Err(GridError::ZeroExtent { axis: "variable" });
        }
        if lats == 0 {
            return Err(GridError::ZeroExtent { axis: "latitude" });
        }
        if lons == 0 {
            return Err(GridError::ZeroExtent { axis: "longitude" });
        }
        Ok(Self {
            layers,
            variables,
            lats,
            lons,
        })
    }

    /// Number of height layers.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Number of physical variables.
    pub fn variables(&self) -> usize {
        self.variables
    }

    /// Latitude extent.
    pub fn lats(&self) -> usize {
        self.lats
    }

    /// Longitude extent.
    pub fn lons(&self) -> usize {
        self.lons
    }

    /// Total number of state variables (product of the four extents).
    pub fn len(&self) -> usize {
        self.layers * self.variables * self.lats * self.lons
    }

    /// Always false: every axis has extent >= 1 by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true if the point lies within the grid.
    pub fn contains(&self, point: GridPoint) -> bool {
        point.layer < self.layers
            && point.variable < self.variables
            && point.lat < self.lats
            && point.lon < self.lons
    }

    /// Row-major flattened index of a point.
    ///
    /// Longitude varies fastest, then latitude, then variable, then layer.
    /// The caller must ensure the point lies within the grid; use
    /// [`GridShape::contains`] as the guard.
    pub fn flatten(&self, point: GridPoint) -> usize {
        ((point.layer * self.variables + point.variable) * self.lats + point.lat) * self.lons
            + point.lon
    }

    /// Inverse of [`GridShape::flatten`].
    ///
    /// Returns an error if the index is out of range.
    pub fn unflatten(&self, index: usize) -> Result<GridPoint, GridError> {
        if index >= self.len() {
            return Err(GridError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        let lon = index % self.lons;
        let rest = index / self.lons;
        let lat = rest % self.lats;
        let rest = rest / self.lats;
        let variable = rest % self.variables;
        let layer = rest / self.variables;
        Ok(GridPoint::new(layer, variable, lat, lon))
    }

    /// Iterates over all grid points in ascending flattened order.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        let shape = *self;
        (0..self.len()).map(move |index| {
            let lon = index % shape.lons;
            let rest = index / shape.lons;
            let lat = rest % shape.lats;
            let rest = rest / shape.lats;
            GridPoint::new(rest / shape.variables, rest % shape.variables, lat, lon)
        })
    }

    /// Returns the extents as a (layers, variables, lats, lons) tuple.
    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (self.layers, self.variables, self.lats, self.lons)
    }
}
