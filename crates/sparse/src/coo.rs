//! Coordinate-format sparse matrix storage.

use ndarray::Array2;

use crate::error::SparseError;

/// A sparse matrix stored as explicit (row, column, value) triplets.
///
/// The storage is append-only during assembly; [`CooMatrix::canonicalize`]
/// brings it to the canonical form (row-major sorted, duplicates summed,
/// explicit zeros dropped) that the output contracts rely on.
///
/// # Example
///
/// ```
/// use boreas_sparse::CooMatrix;
///
/// let mut m = CooMatrix::new(2, 2);
/// m.push(0, 0, 1.0).unwrap();
/// m.push(1, 0, -0.5).unwrap();
/// m.push(1, 1, 1.0).unwrap();
///
/// assert_eq!(m.nnz(), 3);
/// assert!(m.is_lower_triangular());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CooMatrix {
    nrows: usize,
    ncols: usize,
    rows: Vec<usize>,
    cols: Vec<usize>,
    values: Vec<f64>,
}

impl CooMatrix {
    /// Creates an empty matrix of the given dimensions.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self::with_capacity(nrows, ncols, 0)
    }

    /// Creates an empty matrix with room for `capacity` entries.
    pub fn with_capacity(nrows: usize, ncols: usize, capacity: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: Vec::with_capacity(capacity),
            cols: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Builds a matrix from parallel triplet arrays.
    ///
    /// Returns an error if the arrays disagree in length or any entry lies
    /// outside the matrix.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        rows: Vec<usize>,
        cols: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self, SparseError> {
        if rows.len() != cols.len() || rows.len() != values.len() {
            return Err(SparseError::TripletLengths {
                rows: rows.len(),
                cols: cols.len(),
                values: values.len(),
            });
        }
        for (&row, &col) in rows.iter().zip(&cols) {
            if row >= nrows || col >= ncols {
                return Err(SparseError::EntryOutOfBounds {
                    row,
                    col,
                    nrows,
                    ncols,
                });
            }
        }
        Ok(Self {
            nrows,
            ncols,
            rows,
            cols,
            values,
        })
    }

    /// Builds a square diagonal matrix from its diagonal values.
    pub fn diagonal(values: &[f64]) -> Self {
        let n = values.len();
        Self {
            nrows: n,
            ncols: n,
            rows: (0..n).collect(),
            cols: (0..n).collect(),
            values: values.to_vec(),
        }
    }

    /// Appends one entry.
    ///
    /// Returns an error if the coordinates lie outside the matrix.
    pub fn push(&mut self, row: usize, col: usize, value: f64) -> Result<(), SparseError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(SparseError::EntryOutOfBounds {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        self.rows.push(row);
        self.cols.push(col);
        self.values.push(value);
        Ok(())
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored entries (including any not-yet-summed duplicates).
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over stored (row, col, value) triplets.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows
            .iter()
            .zip(&self.cols)
            .zip(&self.values)
            .map(|((&r, &c), &v)| (r, c, v))
    }

    /// Occupancy pattern: the (row, col) positions of the stored entries,
    /// row-major sorted and deduplicated. This is the display contract for
    /// sparsity-structure consumers.
    pub fn pattern(&self) -> Vec<(usize, usize)> {
        let mut cells: Vec<(usize, usize)> =
            self.rows.iter().zip(&self.cols).map(|(&r, &c)| (r, c)).collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    /// Value at (row, col): the sum of all stored entries at that position,
    /// 0.0 if none. Linear in the number of entries.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.triplets()
            .filter(|&(r, c, _)| r == row && c == col)
            .map(|(_, _, v)| v)
            .sum()
    }

    /// Brings the storage to canonical form: entries sorted row-major,
    /// duplicates summed, exact zeros dropped.
    pub fn canonicalize(&mut self) {
        let mut entries: Vec<(usize, usize, f64)> = self.triplets().collect();
        entries.sort_unstable_by_key(|&(r, c, _)| (r, c));

        let mut merged: Vec<(usize, usize, f64)> = Vec::with_capacity(entries.len());
        for (r, c, v) in entries {
            match merged.last_mut() {
                Some(last) if last.0 == r && last.1 == c => last.2 += v,
                _ => merged.push((r, c, v)),
            }
        }

        self.rows.clear();
        self.cols.clear();
        self.values.clear();
        for (r, c, v) in merged {
            if v != 0.0 {
                self.rows.push(r);
                self.cols.push(c);
                self.values.push(v);
            }
        }
    }

    /// Converts to a dense `ndarray` array, summing duplicates.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.nrows, self.ncols));
        for (r, c, v) in self.triplets() {
            dense[[r, c]] += v;
        }
        dense
    }
}
