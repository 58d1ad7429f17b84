//! Row-oriented sparse matrix container
//!
//! Storage is one [`SparseRow`] per matrix row plus an explicit column
//! count. No dense `rows x cols` array is ever allocated.

use std::str::FromStr;

use rowsparse_core::{
    check_index, parse_dense_literal, MatrixElement, MatrixOperations, MatrixStringFormat,
    Result, SparseAccess, SparseError,
};

use crate::row::SparseRow;

/// Sparse matrix stored as an array of sparse rows
///
/// The row count is the length of the row array, so it cannot drift from
/// the storage. Every stored column index is below [`SparseMatrix::cols`].
#[derive(Debug, Clone)]
pub struct SparseMatrix<D> {
    data: Vec<SparseRow<D>>,
    cols: usize,
}

/// Single-precision sparse matrix
pub type SparseMatrixf = SparseMatrix<f32>;

/// Double-precision sparse matrix
pub type SparseMatrixd = SparseMatrix<f64>;

impl<D> Default for SparseMatrix<D> {
    /// The 0x0 matrix
    fn default() -> Self {
        Self {
            data: Vec::new(),
            cols: 0,
        }
    }
}

impl<D> SparseMatrix<D> {
    /// Create a `rows x cols` matrix with no stored entries
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: (0..rows).map(|_| SparseRow::new()).collect(),
            cols,
        }
    }

    /// Create an `n x n` matrix with no stored entries
    pub fn new_square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Move the contents out, leaving `self` as the empty 0x0 matrix
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `rows() == cols()`
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols
    }

    /// Borrow a row's sparse storage
    ///
    /// Entries are not ordered by column.
    pub fn sparse_row(&self, row: usize) -> Result<&SparseRow<D>> {
        self.data.get(row).ok_or(SparseError::OutOfRange)
    }

    /// All rows, in row order
    pub(crate) fn sparse_rows(&self) -> &[SparseRow<D>] {
        &self.data
    }

    /// Mutable row storage for operators assembling a fresh result
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut SparseRow<D> {
        &mut self.data[row]
    }

    /// Total number of stored entries
    pub fn nnz(&self) -> usize {
        self.data.iter().map(SparseRow::len).sum()
    }

    /// Append an entry without searching the row
    ///
    /// Only valid when `(row, col)` is known to be absent.
    fn insert(&mut self, row: usize, col: usize, val: D) {
        self.data[row].push(col, val);
    }
}

impl<D: MatrixElement> SparseMatrix<D> {
    /// Build a matrix from dense rows, leaving exact zeros implicit
    ///
    /// All rows must have the same length.
    pub fn from_dense<R: AsRef<[D]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return Err(SparseError::ShapeMismatch);
        }

        let mut matrix = Self::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            for (c, &val) in row.as_ref().iter().enumerate() {
                if !val.is_zero() {
                    matrix.insert(r, c, val);
                }
            }
        }
        Ok(matrix)
    }

    /// Parse a matrix from its textual representation
    pub fn from_text(text: &str, format: MatrixStringFormat) -> Result<Self> {
        match format {
            MatrixStringFormat::Mathematica => {
                let dense = parse_dense_literal(text)?;
                let rows: Vec<Vec<D>> = dense
                    .into_iter()
                    .map(|row| row.into_iter().map(D::from_f64).collect())
                    .collect();
                Self::from_dense(&rows)
            }
        }
    }

    /// Parse a matrix whose format is named by a string tag
    pub fn from_tagged_text(text: &str, tag: &str) -> Result<Self> {
        let format = tag.parse::<MatrixStringFormat>()?;
        Self::from_text(text, format)
    }

    /// Value at `(row, col)`, zero when nothing is stored
    ///
    /// Never inserts an entry.
    pub fn get(&self, row: usize, col: usize) -> Result<D> {
        check_index(col, self.cols)?;
        Ok(self.sparse_row(row)?.get(col))
    }

    /// Mutable access to `(row, col)`, inserting a zero entry if none exists
    ///
    /// Repeated calls for the same position reach the same entry, so a row
    /// never holds two entries for one column.
    pub fn entry_mut(&mut self, row: usize, col: usize) -> Result<&mut D> {
        check_index(row, self.rows())?;
        check_index(col, self.cols)?;
        Ok(self.data[row].entry_mut(col))
    }

    /// Store `val` at `(row, col)`, replacing any existing entry
    pub fn set(&mut self, row: usize, col: usize, val: D) -> Result<()> {
        *self.entry_mut(row, col)? = val;
        Ok(())
    }

    /// Iterate over stored `(row, col, value)` triples
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, D)> + '_ {
        self.data
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().map(move |(c, val)| (r, c, val)))
    }

    /// The main diagonal
    pub fn diagonal(&self) -> Result<Vec<D>> {
        if !self.is_square() {
            return Err(SparseError::NonSquareOperation);
        }
        Ok(self
            .data
            .iter()
            .enumerate()
            .map(|(i, row)| row.get(i))
            .collect())
    }

    /// Swap rows and columns, copying only stored entries
    pub fn transpose(&self) -> Self {
        let mut result = Self::new(self.cols, self.rows());
        for (r, c, val) in self.iter() {
            // (r, c) is unique in the source, so (c, r) is unique in the result
            result.insert(c, r, val);
        }
        result
    }

    /// Largest magnitude among stored entries, zero when none are stored
    pub fn max_magnitude(&self) -> D {
        self.data
            .iter()
            .map(SparseRow::max_magnitude)
            .fold(D::zero(), |best, m| if m > best { m } else { best })
    }
}

impl<D: MatrixElement> SparseAccess for SparseMatrix<D> {
    type Element = D;

    fn get_element(&self, row: usize, col: usize) -> Option<D> {
        if col >= self.cols {
            return None;
        }
        self.data.get(row)?.find(col).map(|entry| entry.val)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl<D: MatrixElement> MatrixOperations for SparseMatrix<D> {}

/// Matrices compare by value: implicit and stored zeros are equal and
/// storage order is ignored.
impl<D: MatrixElement> PartialEq for SparseMatrix<D> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self.iter().all(|(r, c, val)| other.data[r].get(c) == val)
            && other.iter().all(|(r, c, val)| self.data[r].get(c) == val)
    }
}

/// Parses the Mathematica literal format
impl<D: MatrixElement> FromStr for SparseMatrix<D> {
    type Err = SparseError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_text(text, MatrixStringFormat::Mathematica)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SparseMatrix<f64> {
        // [[1, 0, 2],
        //  [0, 0, 0],
        //  [0, -5, 0]]
        let mut m = SparseMatrix::new(3, 3);
        m.set(0, 0, 1.0).unwrap();
        m.set(0, 2, 2.0).unwrap();
        m.set(2, 1, -5.0).unwrap();
        m
    }

    #[test]
    fn test_new_has_no_entries() {
        let m: SparseMatrix<f64> = SparseMatrix::new(4, 7);
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 7);
        assert_eq!(m.nnz(), 0);
        assert!(!m.is_square());
        assert!(SparseMatrix::<f64>::new_square(3).is_square());
        assert!(SparseMatrix::<f64>::default().is_square());
    }

    #[test]
    fn test_get_returns_implicit_zero_without_inserting() {
        let m = sample();
        assert_eq!(m.get(1, 1), Ok(0.0));
        assert_eq!(m.get(2, 1), Ok(-5.0));
        assert_eq!(m.nnz(), 3);
    }

    #[test]
    fn test_set_twice_keeps_one_entry() {
        let mut m: SparseMatrix<i32> = SparseMatrix::new(2, 2);
        m.set(1, 0, 3).unwrap();
        m.set(1, 0, 8).unwrap();

        assert_eq!(m.sparse_row(1).unwrap().len(), 1);
        assert_eq!(m.get(1, 0), Ok(8));
    }

    #[test]
    fn test_entry_mut_accumulates_in_place() {
        let mut m: SparseMatrix<i32> = SparseMatrix::new(2, 2);
        *m.entry_mut(0, 1).unwrap() += 2;
        *m.entry_mut(0, 1).unwrap() += 3;
        assert_eq!(m.get(0, 1), Ok(5));
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_accessors_reject_out_of_range() {
        let mut m: SparseMatrix<f64> = SparseMatrix::new(2, 3);
        assert_eq!(m.get(2, 0), Err(SparseError::OutOfRange));
        assert_eq!(m.get(0, 3), Err(SparseError::OutOfRange));
        assert_eq!(m.set(0, 3, 1.0), Err(SparseError::OutOfRange));
        assert!(m.entry_mut(5, 0).is_err());
        assert!(m.sparse_row(2).is_err());
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_take_leaves_empty_matrix() {
        let mut source = sample();
        let moved = source.take();

        assert_eq!(moved.rows(), 3);
        assert_eq!(moved.get(0, 2), Ok(2.0));
        assert_eq!(source.rows(), 0);
        assert_eq!(source.cols(), 0);
        assert_eq!(source.nnz(), 0);

        // The moved-from matrix is reusable
        source = SparseMatrix::new(1, 1);
        source.set(0, 0, 4.0).unwrap();
        assert_eq!(source.get(0, 0), Ok(4.0));
    }

    #[test]
    fn test_clone_is_deep() {
        let original = sample();
        let mut copy = original.clone();
        copy.set(0, 0, 100.0).unwrap();
        assert_eq!(original.get(0, 0), Ok(1.0));
        assert_eq!(copy.get(0, 0), Ok(100.0));
    }

    #[test]
    fn test_dense_row_and_col() {
        let m = sample();
        assert_eq!(m.dense_row(0), Ok(vec![1.0, 0.0, 2.0]));
        assert_eq!(m.dense_row(1), Ok(vec![0.0, 0.0, 0.0]));
        assert_eq!(m.dense_col(1), Ok(vec![0.0, 0.0, -5.0]));
        assert_eq!(m.dense_col(3), Err(SparseError::OutOfRange));
        assert_eq!(m.nnz(), 3);
    }

    #[test]
    fn test_diagonal() {
        let m = sample();
        assert_eq!(m.diagonal(), Ok(vec![1.0, 0.0, 0.0]));

        let rect: SparseMatrix<f64> = SparseMatrix::new(2, 3);
        assert_eq!(rect.diagonal(), Err(SparseError::NonSquareOperation));
    }

    #[test]
    fn test_transpose_swaps_shape_and_entries() {
        let mut m: SparseMatrix<i32> = SparseMatrix::new(2, 3);
        m.set(0, 2, 7).unwrap();
        m.set(1, 0, -1).unwrap();

        let t = m.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.get(2, 0), Ok(7));
        assert_eq!(t.get(0, 1), Ok(-1));
        assert_eq!(t.nnz(), 2);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_max_magnitude() {
        assert_eq!(sample().max_magnitude(), 5.0);
        assert_eq!(SparseMatrix::<f64>::new(3, 3).max_magnitude(), 0.0);

        let mut negative: SparseMatrix<i64> = SparseMatrix::new(1, 2);
        negative.set(0, 1, -3).unwrap();
        assert_eq!(negative.max_magnitude(), 3);
    }

    #[test]
    fn test_equality_ignores_order_and_stored_zeros() {
        let mut a: SparseMatrix<i32> = SparseMatrix::new(2, 2);
        a.set(0, 0, 1).unwrap();
        a.set(0, 1, 2).unwrap();

        let mut b: SparseMatrix<i32> = SparseMatrix::new(2, 2);
        b.set(0, 1, 2).unwrap();
        b.set(0, 0, 1).unwrap();
        b.set(1, 1, 0).unwrap();
        assert_eq!(a, b);

        b.set(1, 0, 4).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, SparseMatrix::new(2, 3));
    }

    #[test]
    fn test_from_text() {
        let m: SparseMatrix<f64> =
            SparseMatrix::from_text("{{1,0},{0,2}}", MatrixStringFormat::Mathematica).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 2));
        assert_eq!(m.get(0, 0), Ok(1.0));
        assert_eq!(m.get(0, 1), Ok(0.0));
        assert_eq!(m.get(1, 0), Ok(0.0));
        assert_eq!(m.get(1, 1), Ok(2.0));
        assert_eq!(m.diagonal(), Ok(vec![1.0, 2.0]));
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_from_text_errors() {
        assert_eq!(
            SparseMatrix::<f64>::from_text("{{1,0},{0,}}", MatrixStringFormat::Mathematica),
            Err(SparseError::ParseError)
        );
        assert_eq!(
            SparseMatrix::<f64>::from_tagged_text("{{1}}", "csv"),
            Err(SparseError::UnsupportedFormat)
        );
        assert_eq!(
            SparseMatrix::<f64>::from_tagged_text("{{1}}", "mathematica").map(|m| m.nnz()),
            Ok(1)
        );
    }

    #[test]
    fn test_from_str_integer_elements() {
        let m: SparseMatrix<i32> = "{{1,2,0},{0,0,3}}".parse().unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m.dense_row(1), Ok(vec![0, 0, 3]));
    }

    #[test]
    fn test_from_dense_rejects_ragged_rows() {
        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            SparseMatrix::<f64>::from_dense(&ragged),
            Err(SparseError::ShapeMismatch)
        );

        let empty: [Vec<f64>; 0] = [];
        let m = SparseMatrix::<f64>::from_dense(&empty).unwrap();
        assert_eq!((m.rows(), m.cols()), (0, 0));
    }

    #[test]
    fn test_sparse_access_trait() {
        let m = sample();
        assert_eq!(m.dimensions(), (3, 3));
        assert_eq!(m.get_element(0, 2), Some(2.0));
        assert_eq!(m.get_element(1, 1), None);
        assert_eq!(m.get_element(9, 0), None);
        assert_eq!(m.value(1, 1), Ok(0.0));
        assert_eq!(SparseAccess::nnz(&m), 3);
    }
}
