//! Localized ensemble precision-matrix estimation.
//!
//! Boreas estimates a sparse precision (inverse covariance) matrix for a
//! high-dimensional atmospheric state from a small ensemble of realizations.
//! The state lives on a (layer, variable, latitude, longitude) grid; for
//! each state variable a ridge regression against its spatially-local
//! *predecessors* yields one row of a unit lower-triangular factor `T` and
//! one residual precision in a diagonal factor `D`, so that
//! `B⁻¹ = Tᵗ · D · T` is symmetric positive-definite by construction.
//!
//! | Crate | Concern |
//! |-------|---------|
//! | [`boreas_grid`] | flattened index space, neighborhoods, causal predecessor sets |
//! | [`boreas_precision`] | per-row ridge fits, factor assembly, memoized `B⁻¹` |
//! | [`boreas_sparse`] | (row, column, value) triplet matrices and their few operations |
//!
//! Ensemble acquisition, matrix persistence, and sparsity visualization are
//! external collaborators: this workspace consumes a plain
//! `ndarray::Array2<f64>` and produces plain triplet data.
//!
//! # Quick start
//!
//! ```
//! use boreas::{EstimatorConfig, GridShape, NeighborhoodConfig, estimate};
//! use ndarray::Array2;
//!
//! // 1 layer, 1 variable, 4x4 grid: 16 state variables, 20 ensemble members.
//! let shape = GridShape::new(1, 1, 4, 4).unwrap();
//! let ensemble = Array2::from_shape_fn((20, 16), |(s, j)| {
//!     ((s * 31 + j * 17) % 23) as f64 * 0.25 + ((s + j) % 3) as f64
//! });
//!
//! let est = estimate(
//!     &ensemble,
//!     &shape,
//!     &NeighborhoodConfig::new(1),
//!     EstimatorConfig::new(0.5),
//! )
//! .unwrap();
//!
//! let b_inv = est.precision_matrix().unwrap();
//! assert!(b_inv.is_symmetric(1e-10));
//! ```

mod error;

pub use error::BoreasError;

pub use boreas_grid::{
    GridError, GridPoint, GridShape, NeighborhoodConfig, PredecessorMap, all_predecessors,
    point_predecessors,
};
pub use boreas_precision::{EstimatorConfig, PrecisionError, PrecisionEstimator};
pub use boreas_sparse::{CooMatrix, SparseError};

use ndarray::Array2;
use tracing::info;

/// Resolves the predecessor map for `shape` and fits the precision
/// factorization in one step.
///
/// # Errors
///
/// Fails with [`BoreasError::ShapeMismatch`] if the grid shape and the
/// ensemble disagree on the number of state variables, and otherwise
/// propagates the member crates' validation and fitting errors.
pub fn estimate(
    ensemble: &Array2<f64>,
    shape: &GridShape,
    neighborhood: &NeighborhoodConfig,
    config: EstimatorConfig,
) -> Result<PrecisionEstimator, BoreasError> {
    if shape.len() != ensemble.ncols() {
        return Err(BoreasError::ShapeMismatch {
            state_len: shape.len(),
            columns: ensemble.ncols(),
        });
    }

    info!(
        shape = ?shape.as_tuple(),
        samples = ensemble.nrows(),
        radius = neighborhood.radius(),
        "estimating precision matrix"
    );
    let map = all_predecessors(shape, neighborhood)?;
    let estimator = PrecisionEstimator::fit(ensemble, &map, config)?;
    Ok(estimator)
}
