//! Error types for the boreas-grid crate.

/// Error type for all fallible operations in the boreas-grid crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GridError {
    /// Returned when a grid shape has an axis of extent zero.
    #[error("grid axis {axis} must have extent >= 1")]
    ZeroExtent {
        /// Name of the offending axis.
        axis: &'static str,
    },

    /// Returned when the localization radius is zero.
    #[error("radius must be >= 1, got {radius}")]
    InvalidRadius {
        /// The invalid radius value.
        radius: usize,
    },

    /// Returned when a point lies outside the grid.
    #[error("point {point:?} lies outside grid of shape {shape:?}")]
    PointOutOfBounds {
        /// The offending (layer, variable, lat, lon) coordinates.
        point: (usize, usize, usize, usize),
        /// The grid extents (layers, variables, lats, lons).
        shape: (usize, usize, usize, usize),
    },

    /// Returned when a flattened index exceeds the state length.
    #[error("flattened index {index} out of range for {len} state variables")]
    IndexOutOfBounds {
        /// The offending flattened index.
        index: usize,
        /// Number of state variables in the grid.
        len: usize,
    },

    /// Returned when a predecessor entry does not precede its row in the
    /// flattened ordering.
    #[error("predecessor {index} does not precede row {row}")]
    PredecessorOrder {
        /// Row whose predecessor set is invalid.
        row: usize,
        /// The offending predecessor index.
        index: usize,
    },
}
