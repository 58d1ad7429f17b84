//! Read-only matrix access traits
//!
//! These traits describe what any sparse matrix exposes regardless of how
//! its entries are stored.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;
use crate::error::{check_index, Result};

/// Core sparse matrix trait for format-agnostic access
pub trait SparseAccess {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get the stored entry at the specified position
    ///
    /// Returns `None` if nothing is stored there (an implicit zero) or if
    /// the position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries
    fn nnz(&self) -> usize;

    /// Get the value at the specified position, implicit zeros included
    ///
    /// Unlike [`SparseAccess::get_element`] this distinguishes an absent
    /// entry (the additive identity) from an invalid position.
    fn value(&self, row: usize, col: usize) -> Result<Self::Element> {
        let (rows, cols) = self.dimensions();
        check_index(row, rows)?;
        check_index(col, cols)?;
        Ok(self
            .get_element(row, col)
            .unwrap_or_else(<Self::Element as MatrixElement>::zero))
    }
}

/// Extension trait for dense row/column materialization (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseAccess {
    /// Materialize a full row, `cols` values long
    fn dense_row(&self, row: usize) -> Result<Vec<Self::Element>> {
        let (rows, cols) = self.dimensions();
        check_index(row, rows)?;
        (0..cols).map(|col| self.value(row, col)).collect()
    }

    /// Materialize a full column, `rows` values long
    fn dense_col(&self, col: usize) -> Result<Vec<Self::Element>> {
        let (rows, cols) = self.dimensions();
        check_index(col, cols)?;
        (0..rows).map(|row| self.value(row, col)).collect()
    }
}
