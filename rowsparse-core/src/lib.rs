#![no_std]

//! rowsparse-core - Row-Oriented Sparse Matrix Definitions
//!
//! This crate provides the scalar contract, error taxonomy, access traits
//! and text-literal parsing shared by row-oriented sparse matrix
//! implementations. It holds no storage of its own.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
#[cfg(feature = "alloc")]
pub mod text;
pub mod traits;

pub use error::*;
#[cfg(feature = "alloc")]
pub use text::{parse_dense_literal, MatrixStringFormat};
pub use traits::*;
