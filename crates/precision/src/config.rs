//! Configuration for the precision estimator.

use crate::error::PrecisionError;

/// Configuration for a precision-matrix fit.
///
/// `alpha` is the ridge regularization strength. `alpha = 0` reduces each
/// per-row fit to ordinary least squares; any positive value keeps the
/// normal equations positive-definite even when a row has more predictors
/// than the ensemble has samples, which is the common regime.
///
/// # Example
///
/// ```
/// use boreas_precision::EstimatorConfig;
///
/// let config = EstimatorConfig::new(0.1).with_limit(100);
///
/// assert_eq!(config.alpha(), 0.1);
/// assert_eq!(config.limit(), Some(100));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    /// Ridge regularization strength.
    alpha: f64,
    /// Optional bound on how many leading state variables to process.
    limit: Option<usize>,
    /// Clamp for tiny positive residual variances.
    variance_floor: f64,
}

impl EstimatorConfig {
    /// Creates a new configuration with the given regularization strength.
    ///
    /// Defaults: no row limit, `variance_floor = 1e-12`.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            limit: None,
            variance_floor: 1e-12,
        }
    }

    /// Bounds the fit to the first `limit` state variables.
    ///
    /// Supports partial builds; the resulting factors still have full
    /// dimensions but carry entries only for the processed rows.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the clamp applied to tiny positive residual variances.
    pub fn with_variance_floor(mut self, floor: f64) -> Self {
        self.variance_floor = floor;
        self
    }

    /// Returns the ridge regularization strength.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the row limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the variance floor.
    pub fn variance_floor(&self) -> f64 {
        self.variance_floor
    }

    /// Validates this configuration.
    ///
    /// Returns an error if alpha is negative or non-finite, the floor is
    /// non-positive or non-finite, or the limit is zero. The limit's upper
    /// bound is checked against the ensemble at fit time.
    pub fn validate(&self) -> Result<(), PrecisionError> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(PrecisionError::InvalidAlpha { alpha: self.alpha });
        }
        if !self.variance_floor.is_finite() || self.variance_floor <= 0.0 {
            return Err(PrecisionError::InvalidVarianceFloor {
                floor: self.variance_floor,
            });
        }
        if self.limit == Some(0) {
            return Err(PrecisionError::InvalidLimit { limit: 0 });
        }
        Ok(())
    }
}

impl Default for EstimatorConfig {
    /// Matches the reference default of `alpha = 1`.
    fn default() -> Self {
        Self::new(1.0)
    }
}
