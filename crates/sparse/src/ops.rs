//! Structural and algebraic operations on COO matrices.

use crate::coo::CooMatrix;
use crate::error::SparseError;

impl CooMatrix {
    /// Transpose: swaps row and column indices.
    pub fn transpose(&self) -> CooMatrix {
        let mut out = CooMatrix::with_capacity(self.ncols(), self.nrows(), self.nnz());
        for (r, c, v) in self.triplets() {
            // Coordinates were validated on the way in.
            let _ = out.push(c, r, v);
        }
        out
    }

    /// Left-multiplies by a diagonal matrix: row `i` is scaled by `diag[i]`.
    ///
    /// Returns an error if `diag` does not have one entry per row.
    pub fn scale_rows(&self, diag: &[f64]) -> Result<CooMatrix, SparseError> {
        if diag.len() != self.nrows() {
            return Err(SparseError::ScaleLength {
                expected: self.nrows(),
                actual: diag.len(),
            });
        }
        let mut out = CooMatrix::with_capacity(self.nrows(), self.ncols(), self.nnz());
        for (r, c, v) in self.triplets() {
            let _ = out.push(r, c, diag[r] * v);
        }
        Ok(out)
    }

    /// Sparse matrix product `self * other`.
    ///
    /// Accumulates into an intermediate keyed by (row, col), so the result
    /// is already canonical: row-major sorted, duplicates summed, exact
    /// zeros dropped. Repeated calls on the same operands produce
    /// bit-identical results.
    pub fn matmul(&self, other: &CooMatrix) -> Result<CooMatrix, SparseError> {
        if self.ncols() != other.nrows() {
            return Err(SparseError::DimensionMismatch {
                left: (self.nrows(), self.ncols()),
                right: (other.nrows(), other.ncols()),
            });
        }

        // Index the right operand's entries by row for O(nnz_left * row_nnz)
        // accumulation.
        let mut by_row: Vec<Vec<(usize, f64)>> = vec![Vec::new(); other.nrows()];
        for (r, c, v) in other.triplets() {
            by_row[r].push((c, v));
        }

        let mut acc: std::collections::BTreeMap<(usize, usize), f64> =
            std::collections::BTreeMap::new();
        for (i, k, left) in self.triplets() {
            for &(j, right) in &by_row[k] {
                *acc.entry((i, j)).or_insert(0.0) += left * right;
            }
        }

        let mut out =
            CooMatrix::with_capacity(self.nrows(), other.ncols(), acc.len());
        for ((r, c), v) in acc {
            if v != 0.0 {
                let _ = out.push(r, c, v);
            }
        }
        Ok(out)
    }

    /// Returns true if every entry lies on or below the diagonal.
    pub fn is_lower_triangular(&self) -> bool {
        self.triplets().all(|(r, c, _)| c <= r)
    }

    /// Returns true if the matrix equals its transpose to within `tol`.
    ///
    /// Compares canonicalized entry lists, so duplicate storage does not
    /// affect the outcome.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        if self.nrows() != self.ncols() {
            return false;
        }
        let mut a = self.clone();
        a.canonicalize();
        let mut b = self.transpose();
        b.canonicalize();

        let mut lhs = a.triplets();
        let mut rhs = b.triplets();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return true,
                (Some((r1, c1, v1)), Some((r2, c2, v2))) => {
                    if r1 != r2 || c1 != c2 || (v1 - v2).abs() > tol {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn lower_unit() -> CooMatrix {
        // [[1, 0], [-0.5, 1]]
        CooMatrix::from_triplets(2, 2, vec![0, 1, 1], vec![0, 0, 1], vec![1.0, -0.5, 1.0])
            .unwrap()
    }

    #[test]
    fn transpose_swaps_coordinates() {
        let t = lower_unit().transpose();
        assert_abs_diff_eq!(t.get(0, 1), -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(t.get(1, 0), 0.0, epsilon = 1e-12);
        assert!(!t.is_lower_triangular());
    }

    #[test]
    fn scale_rows_applies_diagonal() {
        let scaled = lower_unit().scale_rows(&[2.0, 4.0]).unwrap();
        assert_abs_diff_eq!(scaled.get(0, 0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(scaled.get(1, 0), -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(scaled.get(1, 1), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn scale_rows_length_checked() {
        assert!(matches!(
            lower_unit().scale_rows(&[1.0]),
            Err(SparseError::ScaleLength {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn matmul_matches_dense() {
        let a = lower_unit();
        let b = CooMatrix::diagonal(&[3.0, 5.0]);
        let product = a.matmul(&b).unwrap();

        let dense = a.to_dense().dot(&b.to_dense());
        for r in 0..2 {
            for c in 0..2 {
                assert_abs_diff_eq!(product.get(r, c), dense[[r, c]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn matmul_dimension_checked() {
        let a = CooMatrix::new(2, 3);
        let b = CooMatrix::new(2, 2);
        assert!(matches!(
            a.matmul(&b),
            Err(SparseError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn matmul_result_is_canonical() {
        let a = lower_unit();
        let d = CooMatrix::diagonal(&[2.0, 2.0]);
        let p1 = a.transpose().matmul(&d.matmul(&a).unwrap()).unwrap();
        let p2 = a.transpose().matmul(&d.matmul(&a).unwrap()).unwrap();
        assert_eq!(p1, p2);

        let pattern = p1.pattern();
        let mut sorted = pattern.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(pattern, sorted);
    }

    #[test]
    fn symmetry_check() {
        let a = lower_unit();
        assert!(!a.is_symmetric(1e-12));

        // TᵗT is symmetric for any T.
        let sym = a.transpose().matmul(&a).unwrap();
        assert!(sym.is_symmetric(1e-12));
    }

    #[test]
    fn triangularity_check() {
        assert!(lower_unit().is_lower_triangular());
        let mut m = lower_unit();
        m.push(0, 1, 0.1).unwrap();
        assert!(!m.is_lower_triangular());
    }
}
