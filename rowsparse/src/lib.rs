//! rowsparse - Row-Oriented Sparse Matrices
//!
//! This library provides a generic sparse matrix stored as an array of
//! sparse rows, with element access, row/column extraction, transpose and
//! the core linear-algebra operators.
//!
//! ## Architecture
//!
//! - **rowsparse-core**: scalar contract, error taxonomy, access traits and
//!   text-literal parsing (no storage, `no_std`)
//! - **rowsparse**: the concrete row storage and arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use rowsparse::{MatrixOperations, SparseMatrixd};
//!
//! fn example() -> rowsparse::Result<()> {
//!     let a: SparseMatrixd = "{{1,2},{3,4}}".parse()?;
//!     let v = [1.0, 1.0];
//!
//!     assert_eq!((&a * &v[..])?, vec![3.0, 7.0]);
//!     assert_eq!(SparseMatrixd::quadratic(&a, &v)?, 10.0);
//!     assert_eq!(a.transpose().dense_row(0)?, vec![1.0, 3.0]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Threading
//!
//! Matrices carry no interior mutability. Shared references may be used
//! from many threads at once; mutation needs exclusive access.

pub use rowsparse_core::{
    // Core traits
    MatrixElement, MatrixOperations, SparseAccess,
    // Error handling
    Result, SparseError,
    // Text import
    MatrixStringFormat,
};

pub mod matrix;
mod ops;
pub mod row;

pub use matrix::{SparseMatrix, SparseMatrixd, SparseMatrixf};
pub use row::{SparseRow, SparseRowEntry};
