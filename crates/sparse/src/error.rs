//! Error types for the boreas-sparse crate.

/// Error type for all fallible operations in the boreas-sparse crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SparseError {
    /// Returned when an entry's coordinates lie outside the matrix.
    #[error("entry ({row}, {col}) lies outside a {nrows}x{ncols} matrix")]
    EntryOutOfBounds {
        /// Row index of the offending entry.
        row: usize,
        /// Column index of the offending entry.
        col: usize,
        /// Number of matrix rows.
        nrows: usize,
        /// Number of matrix columns.
        ncols: usize,
    },

    /// Returned when triplet arrays have inconsistent lengths.
    #[error("triplet arrays have mismatched lengths: {rows} rows, {cols} cols, {values} values")]
    TripletLengths {
        /// Length of the row-index array.
        rows: usize,
        /// Length of the column-index array.
        cols: usize,
        /// Length of the value array.
        values: usize,
    },

    /// Returned when matrix dimensions are incompatible for a product.
    #[error("cannot multiply {left:?} by {right:?}: inner dimensions differ")]
    DimensionMismatch {
        /// (rows, cols) of the left operand.
        left: (usize, usize),
        /// (rows, cols) of the right operand.
        right: (usize, usize),
    },

    /// Returned when a row-scaling vector does not match the row count.
    #[error("scale vector has length {actual}, expected {expected}")]
    ScaleLength {
        /// Required length (number of rows).
        expected: usize,
        /// Provided length.
        actual: usize,
    },
}
