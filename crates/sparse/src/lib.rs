//! Coordinate-format sparse matrices for the precision factorization.
//!
//! The estimator assembles its factors as explicit (row, column, value)
//! triplets and needs only a handful of operations on them: transpose,
//! diagonal scaling, one sparse product, and conversion to dense or to the
//! canonical triplet list the persistence and display collaborators consume.
//! Keeping the representation this plain decouples the estimator from any
//! particular compressed sparse format.
//!
//! # Quick start
//!
//! ```
//! use boreas_sparse::CooMatrix;
//!
//! let t = CooMatrix::from_triplets(
//!     2, 2,
//!     vec![0, 1, 1],
//!     vec![0, 0, 1],
//!     vec![1.0, -0.5, 1.0],
//! ).unwrap();
//! let d = CooMatrix::diagonal(&[2.0, 4.0]);
//!
//! // Tᵗ · D · T is symmetric by construction.
//! let b_inv = t.transpose().matmul(&d.matmul(&t).unwrap()).unwrap();
//! assert!(b_inv.is_symmetric(1e-12));
//! ```

pub mod coo;
pub mod error;

pub(crate) mod ops;

pub use coo::CooMatrix;
pub use error::SparseError;
