//! Error types for the boreas-precision crate.

/// Error type for all fallible operations in the boreas-precision crate.
///
/// Validation variants are detected synchronously before any numeric work
/// and are recoverable by correcting inputs. [`PrecisionError::SingularSystem`]
/// and [`PrecisionError::SingularResidual`] are numerical failures during a
/// fit; they abort the entire estimation, since no partially-built
/// factorization is considered valid.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PrecisionError {
    /// Returned when the ensemble matrix has no samples or no columns.
    #[error("ensemble matrix is empty: {samples} samples x {columns} columns")]
    EmptyEnsemble {
        /// Number of ensemble samples (rows).
        samples: usize,
        /// Number of state-variable columns.
        columns: usize,
    },

    /// Returned when the predecessor map does not cover one entry per
    /// ensemble column.
    #[error("predecessor map covers {map_len} variables, ensemble has {columns} columns")]
    PredecessorLengthMismatch {
        /// Number of rows in the predecessor map.
        map_len: usize,
        /// Number of ensemble columns.
        columns: usize,
    },

    /// Returned when the regularization strength is negative or non-finite.
    #[error("alpha must be finite and non-negative, got {alpha}")]
    InvalidAlpha {
        /// The invalid regularization strength.
        alpha: f64,
    },

    /// Returned when the variance floor is non-finite or non-positive.
    #[error("variance floor must be finite and positive, got {floor}")]
    InvalidVarianceFloor {
        /// The invalid floor value.
        floor: f64,
    },

    /// Returned when the row limit is zero.
    #[error("limit must be >= 1, got {limit}")]
    InvalidLimit {
        /// The invalid limit value.
        limit: usize,
    },

    /// Returned when the row limit exceeds the number of state variables.
    #[error("limit {limit} exceeds the {columns} available state variables")]
    LimitExceedsState {
        /// The requested limit.
        limit: usize,
        /// Number of ensemble columns.
        columns: usize,
    },

    /// Returned when the regularized normal equations cannot be factorized.
    ///
    /// With `alpha = 0` this indicates a rank-deficient predictor block;
    /// any positive `alpha` makes the system positive-definite.
    #[error("normal equations are singular for row {row}")]
    SingularSystem {
        /// The state variable whose regression failed.
        row: usize,
    },

    /// Returned when a regression residual has no usable variance.
    #[error("residual variance {variance} for row {row} is not strictly positive")]
    SingularResidual {
        /// The state variable whose residual degenerated.
        row: usize,
        /// The offending variance value.
        variance: f64,
    },

    /// A sparse-assembly failure surfaced through the estimator.
    #[error(transparent)]
    Sparse(#[from] boreas_sparse::SparseError),
}
