//! The precision estimator: one ridge fit per state variable, assembled
//! into the sparse modified Cholesky factorization `B⁻¹ = Tᵗ·D·T`.

use std::sync::OnceLock;

use ndarray::Array2;
use rayon::prelude::*;
use tracing::{debug, info};

use boreas_grid::PredecessorMap;
use boreas_sparse::CooMatrix;
use boreas_stats::population_variance;

use crate::config::EstimatorConfig;
use crate::error::PrecisionError;
use crate::ridge::{residuals, ridge_coefficients};

/// Output of one per-row regression: the row index, the negated ridge
/// coefficients keyed by predecessor column, and the residual precision.
struct RowFit {
    row: usize,
    coefficients: Vec<(usize, f64)>,
    precision: f64,
}

/// Sparse factorized estimate of the precision matrix of a state ensemble.
///
/// Built once from an ensemble matrix (n_samples × n_state) and a
/// [`PredecessorMap`]; immutable afterward. `T` is unit lower-triangular
/// with `-beta` entries at predecessor columns, `D` is diagonal with the
/// reciprocal residual variances, and the combined precision matrix
/// `B⁻¹ = Tᵗ·D·T` is computed on first request and memoized.
///
/// Residual variances use the population convention (N denominator), so a
/// row with no predecessors gets exactly the reciprocal raw variance of its
/// ensemble column.
///
/// # Example
///
/// ```
/// use boreas_grid::PredecessorMap;
/// use boreas_precision::{EstimatorConfig, PrecisionEstimator};
/// use ndarray::Array2;
///
/// let ensemble = Array2::from_shape_fn((8, 3), |(s, j)| {
///     ((s * 5 + j * 3) % 7) as f64 + 0.5 * j as f64
/// });
/// let map = PredecessorMap::from_sets(vec![vec![], vec![0], vec![0, 1]]).unwrap();
///
/// let est = PrecisionEstimator::fit(&ensemble, &map, EstimatorConfig::new(0.1)).unwrap();
/// let (t, d) = est.decomposition();
/// assert!(t.is_lower_triangular());
/// assert_eq!(d.nnz(), 3);
/// ```
#[derive(Debug)]
pub struct PrecisionEstimator {
    n_state: usize,
    processed: usize,
    alpha: f64,
    coefficients: CooMatrix,
    residual_precisions: CooMatrix,
    diag: Vec<f64>,
    precision: OnceLock<CooMatrix>,
}

impl PrecisionEstimator {
    /// Fits the factorization from an ensemble and its predecessor map.
    ///
    /// Each state variable up to the configured limit is regressed on its
    /// predecessor columns across all ensemble samples. The per-row fits
    /// are independent and run in parallel; results are merged in ascending
    /// row order, so the assembly is deterministic.
    ///
    /// # Errors
    ///
    /// Validation failures (`EmptyEnsemble`, `PredecessorLengthMismatch`,
    /// `InvalidAlpha`, `InvalidLimit`, `LimitExceedsState`) are detected
    /// before any numeric work. A `SingularSystem` or `SingularResidual`
    /// during any row's fit aborts the whole estimation; no partial
    /// factorization is returned.
    pub fn fit(
        ensemble: &Array2<f64>,
        predecessors: &PredecessorMap,
        config: EstimatorConfig,
    ) -> Result<Self, PrecisionError> {
        config.validate()?;

        let samples = ensemble.nrows();
        let columns = ensemble.ncols();
        if samples == 0 || columns == 0 {
            return Err(PrecisionError::EmptyEnsemble { samples, columns });
        }
        if predecessors.len() != columns {
            return Err(PrecisionError::PredecessorLengthMismatch {
                map_len: predecessors.len(),
                columns,
            });
        }
        let limit = config.limit().unwrap_or(columns);
        if limit > columns {
            return Err(PrecisionError::LimitExceedsState { limit, columns });
        }

        let alpha = config.alpha();
        let floor = config.variance_floor();
        info!(
            rows = limit,
            state_len = columns,
            samples,
            alpha,
            "fitting precision factorization"
        );

        // Fan out the independent per-row regressions, fan in at this
        // single collect. The indexed parallel iterator preserves ascending
        // row order in the collected vector.
        let fits: Vec<RowFit> = (0..limit)
            .into_par_iter()
            .map(|row| {
                let preds = predecessors.get(row).unwrap_or(&[]);
                fit_row(ensemble, preds, row, alpha, floor)
            })
            .collect::<Result<Vec<_>, PrecisionError>>()?;

        let entries: usize = fits.iter().map(|f| f.coefficients.len() + 1).sum();
        let mut coefficients = CooMatrix::with_capacity(columns, columns, entries);
        let mut residual_precisions = CooMatrix::with_capacity(columns, columns, limit);
        let mut diag = vec![0.0; columns];
        for fit in fits {
            coefficients.push(fit.row, fit.row, 1.0)?;
            for (col, value) in fit.coefficients {
                coefficients.push(fit.row, col, value)?;
            }
            residual_precisions.push(fit.row, fit.row, fit.precision)?;
            diag[fit.row] = fit.precision;
        }
        coefficients.canonicalize();
        residual_precisions.canonicalize();
        debug!(
            t_nnz = coefficients.nnz(),
            d_nnz = residual_precisions.nnz(),
            "assembled factorization"
        );

        Ok(Self {
            n_state: columns,
            processed: limit,
            alpha,
            coefficients,
            residual_precisions,
            diag,
            precision: OnceLock::new(),
        })
    }

    /// Number of state variables (dimension of the factors).
    pub fn n_state(&self) -> usize {
        self.n_state
    }

    /// Number of leading state variables actually fitted.
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Ridge regularization strength used for the fit.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The two factors `(T, D)` of the modified Cholesky decomposition.
    pub fn decomposition(&self) -> (&CooMatrix, &CooMatrix) {
        (&self.coefficients, &self.residual_precisions)
    }

    /// The unit lower-triangular coefficient factor `T`.
    pub fn coefficient_matrix(&self) -> &CooMatrix {
        &self.coefficients
    }

    /// The diagonal residual-precision factor `D`.
    pub fn residual_precision_matrix(&self) -> &CooMatrix {
        &self.residual_precisions
    }

    /// The combined precision matrix `B⁻¹ = Tᵗ·D·T`.
    ///
    /// Computed on first call and memoized; `T` and `D` are immutable, so
    /// repeated calls return bit-identical data.
    pub fn precision_matrix(&self) -> Result<&CooMatrix, PrecisionError> {
        if let Some(matrix) = self.precision.get() {
            return Ok(matrix);
        }
        let scaled = self.coefficients.scale_rows(&self.diag)?;
        let product = self.coefficients.transpose().matmul(&scaled)?;
        Ok(self.precision.get_or_init(|| product))
    }
}

/// Regresses one state variable on its predecessor columns.
///
/// With no predecessors the residual is the raw column itself and no
/// regression is performed.
fn fit_row(
    ensemble: &Array2<f64>,
    preds: &[usize],
    row: usize,
    alpha: f64,
    floor: f64,
) -> Result<RowFit, PrecisionError> {
    let y = ensemble.column(row);

    let (coefficients, variance) = if preds.is_empty() {
        (Vec::new(), population_variance(&y.to_vec()))
    } else {
        let mut x = Array2::zeros((ensemble.nrows(), preds.len()));
        for (c, &p) in preds.iter().enumerate() {
            x.column_mut(c).assign(&ensemble.column(p));
        }
        let beta = ridge_coefficients(x.view(), y, alpha)
            .ok_or(PrecisionError::SingularSystem { row })?;
        let residual = residuals(x.view(), y, &beta);
        let coefficients = preds
            .iter()
            .zip(beta.iter())
            .map(|(&p, &b)| (p, -b))
            .collect();
        (coefficients, population_variance(&residual.to_vec()))
    };

    if !variance.is_finite() || variance <= 0.0 {
        return Err(PrecisionError::SingularResidual { row, variance });
    }
    Ok(RowFit {
        row,
        coefficients,
        precision: 1.0 / variance.max(floor),
    })
}
