//! Workspace-level error type.

use boreas_grid::GridError;
use boreas_precision::PrecisionError;

/// Error type aggregating the member crates' failures, plus the one check
/// only the facade can make: that the grid shape and the ensemble agree on
/// the number of state variables.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BoreasError {
    /// The grid shape does not match the ensemble's column count.
    #[error("grid shape implies {state_len} state variables, ensemble has {columns} columns")]
    ShapeMismatch {
        /// Product of the grid extents.
        state_len: usize,
        /// Number of ensemble columns.
        columns: usize,
    },

    /// A neighborhood-resolution failure.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// An estimation failure.
    #[error(transparent)]
    Precision(#[from] PrecisionError),
}
