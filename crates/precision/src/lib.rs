//! Localized ridge-regression estimation of the sparse precision matrix.
//!
//! For each state variable `j` (in ascending flattened order) the estimator
//! regresses ensemble column `j` on its predecessor columns with ridge
//! regularization, records the negated coefficients in row `j` of a unit
//! lower-triangular factor `T` and the reciprocal residual variance in a
//! diagonal factor `D`, and exposes the combined precision matrix
//! `B⁻¹ = Tᵗ·D·T`. This is the "modified Cholesky via localized regression"
//! construction: the factorization is built one regression at a time instead
//! of by direct matrix decomposition.
//!
//! # Quick start
//!
//! ```
//! use boreas_grid::{GridShape, NeighborhoodConfig, all_predecessors};
//! use boreas_precision::{EstimatorConfig, PrecisionEstimator};
//! use ndarray::Array2;
//!
//! let shape = GridShape::new(1, 1, 3, 3).unwrap();
//! let map = all_predecessors(&shape, &NeighborhoodConfig::new(1)).unwrap();
//! let ensemble = Array2::from_shape_fn((12, 9), |(s, j)| {
//!     ((s * 13 + j * 7) % 17) as f64 * 0.5 + (j % 2) as f64
//! });
//!
//! let est = PrecisionEstimator::fit(&ensemble, &map, EstimatorConfig::new(0.5)).unwrap();
//! let b_inv = est.precision_matrix().unwrap();
//! assert!(b_inv.is_symmetric(1e-10));
//! ```
//!
//! # Architecture
//!
//! ```text
//! PrecisionEstimator::fit()
//!   ├─ validate config + dimensions
//!   ├─ per-row ridge fits        (ridge.rs — parallel fan-out, rayon)
//!   │    ├─ normal equations + Cholesky solve
//!   │    └─ residual variance    (population convention)
//!   ├─ ascending-order merge into T and D   (single fan-in point)
//!   └─ precision_matrix()        (Tᵗ·D·T, memoized)
//! ```

pub mod config;
pub mod error;
pub mod estimator;

pub(crate) mod ridge;

pub use config::EstimatorConfig;
pub use error::PrecisionError;
pub use estimator::PrecisionEstimator;
