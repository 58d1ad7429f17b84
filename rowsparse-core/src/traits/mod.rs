//! Abstract interfaces for row-oriented sparse matrices
//!
//! This module defines the scalar contract and the read-only access traits.
//! Traits are pure interfaces; the default methods only compose other
//! trait methods.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use matrix::SparseAccess;
