//! Scalar statistical helpers for the boreas precision estimator.
//!
//! Variance comes in two denominator conventions and the distinction matters
//! downstream: the residual precisions in the modified Cholesky factorization
//! use the population form (N denominator, matching `numpy.var`), so the
//! zero-predecessor boundary case reduces exactly to the raw variance of an
//! ensemble column.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance (N denominator). Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n == 0 {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / n as f64
}

/// Sample variance (N-1 denominator). Returns 0.0 if fewer than 2 elements.
pub fn sample_variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n as f64 - 1.0)
}

/// Sum of squared values, without mean removal.
pub fn sum_of_squares(data: &[f64]) -> f64 {
    data.iter().map(|&x| x * x).sum()
}
