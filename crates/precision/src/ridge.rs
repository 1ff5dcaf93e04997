//! Closed-form ridge regression on the normal equations.
//!
//! Solves `(XᵗX + alpha·I) beta = Xᵗy` through an in-place Cholesky
//! factorization. The regularized system is symmetric positive-definite for
//! any `alpha > 0`; at `alpha = 0` it degenerates to ordinary least squares
//! and the factorization fails exactly when the predictor block is
//! rank-deficient.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Fits ridge coefficients, or returns `None` if the normal equations are
/// not positive-definite.
pub(crate) fn ridge_coefficients(
    x: ArrayView2<'_, f64>,
    y: ArrayView1<'_, f64>,
    alpha: f64,
) -> Option<Array1<f64>> {
    let xt = x.t();
    let mut gram = xt.dot(&x);
    for i in 0..gram.nrows() {
        gram[[i, i]] += alpha;
    }
    let rhs = xt.dot(&y);
    cholesky_solve(gram, rhs)
}

/// Residual vector `y - X·beta`.
pub(crate) fn residuals(
    x: ArrayView2<'_, f64>,
    y: ArrayView1<'_, f64>,
    beta: &Array1<f64>,
) -> Array1<f64> {
    y.to_owned() - x.dot(beta)
}

/// Solves `a·x = b` for symmetric positive-definite `a`.
///
/// Factorizes `a = L·Lᵗ` in the lower triangle in place, then runs the two
/// triangular solves on `b`. Returns `None` on a non-positive or non-finite
/// pivot.
fn cholesky_solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Option<Array1<f64>> {
    let n = a.nrows();

    for j in 0..n {
        let mut pivot = a[[j, j]];
        for k in 0..j {
            pivot -= a[[j, k]] * a[[j, k]];
        }
        if !pivot.is_finite() || pivot <= 0.0 {
            return None;
        }
        let l_jj = pivot.sqrt();
        a[[j, j]] = l_jj;
        for i in (j + 1)..n {
            let mut s = a[[i, j]];
            for k in 0..j {
                s -= a[[i, k]] * a[[j, k]];
            }
            a[[i, j]] = s / l_jj;
        }
    }

    // Forward solve L·z = b.
    for i in 0..n {
        let mut s = b[i];
        for k in 0..i {
            s -= a[[i, k]] * b[k];
        }
        b[i] = s / a[[i, i]];
    }

    // Back solve Lᵗ·x = z.
    for i in (0..n).rev() {
        let mut s = b[i];
        for k in (i + 1)..n {
            s -= a[[k, i]] * b[k];
        }
        b[i] = s / a[[i, i]];
    }

    Some(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn cholesky_solves_spd_system() {
        let a = array![[4.0, 2.0], [2.0, 3.0]];
        let b = array![2.0, 5.0];
        let x = cholesky_solve(a.clone(), b.clone()).unwrap();
        let back = a.dot(&x);
        assert_abs_diff_eq!(back[0], b[0], epsilon = 1e-12);
        assert_abs_diff_eq!(back[1], b[1], epsilon = 1e-12);
    }

    #[test]
    fn cholesky_rejects_indefinite() {
        let a = array![[1.0, 2.0], [2.0, 1.0]]; // eigenvalues 3, -1
        assert!(cholesky_solve(a, array![1.0, 1.0]).is_none());
    }

    #[test]
    fn cholesky_rejects_singular() {
        let a = array![[1.0, 1.0], [1.0, 1.0]];
        assert!(cholesky_solve(a, array![1.0, 1.0]).is_none());
    }

    #[test]
    fn ridge_at_zero_alpha_is_ols() {
        // y = 2*x exactly; OLS recovers the slope.
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];
        let beta = ridge_coefficients(x.view(), y.view(), 0.0).unwrap();
        assert_abs_diff_eq!(beta[0], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn ridge_shrinks_toward_zero() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];
        let ols = ridge_coefficients(x.view(), y.view(), 0.0).unwrap();
        let shrunk = ridge_coefficients(x.view(), y.view(), 10.0).unwrap();
        assert!(shrunk[0] < ols[0]);
        assert!(shrunk[0] > 0.0);
    }

    #[test]
    fn ridge_closed_form_single_predictor() {
        // beta = (xᵗy) / (xᵗx + alpha)
        let x = array![[1.0], [-2.0], [3.0]];
        let y = array![0.5, 1.0, -2.0];
        let alpha = 0.7;
        let xty = 0.5 - 2.0 - 6.0;
        let xtx = 1.0 + 4.0 + 9.0;
        let beta = ridge_coefficients(x.view(), y.view(), alpha).unwrap();
        assert_abs_diff_eq!(beta[0], xty / (xtx + alpha), epsilon = 1e-12);
    }

    #[test]
    fn ridge_handles_more_predictors_than_samples() {
        // 2 samples, 3 predictors with two identical columns: singular at
        // alpha = 0, solvable above it.
        let x = array![[2.0, 2.0, 0.0], [0.0, 0.0, 2.0]];
        let y = array![1.0, 2.0];
        assert!(ridge_coefficients(x.view(), y.view(), 0.0).is_none());
        assert!(ridge_coefficients(x.view(), y.view(), 0.1).is_some());
    }

    #[test]
    fn residuals_match_definition() {
        let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let y = array![1.0, 2.0, 4.0];
        let beta = array![1.0, 2.0];
        let r = residuals(x.view(), y.view(), &beta);
        assert_abs_diff_eq!(r[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[2], 1.0, epsilon = 1e-12);
    }
}
