//! Arithmetic on sparse matrices
//!
//! The named associated functions are the authoritative implementations;
//! the `+`, `-` and `*` operators on references forward to them. Every
//! operation validates shapes before touching any storage.

use std::ops::{Add, Mul, Sub};

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use rowsparse_core::{check_dimensions, MatrixElement, Result};

use crate::matrix::SparseMatrix;
use crate::row::{SparseRow, SparseRowEntry};

/// Accumulates contributions for one output row, keyed by column
///
/// Columns keep the order in which they were first touched. The buffers are
/// reused from row to row.
struct RowAccumulator<D> {
    slots: HashMap<usize, usize>,
    entries: Vec<SparseRowEntry<D>>,
}

impl<D: MatrixElement> RowAccumulator<D> {
    fn new() -> Self {
        Self {
            slots: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Load a row's entries as the starting values
    fn seed(&mut self, row: &SparseRow<D>) {
        for entry in row.entries() {
            self.slots.insert(entry.col, self.entries.len());
            self.entries.push(*entry);
        }
    }

    /// Fold `val` into the value at `col`, starting from zero if untouched
    fn combine<F>(&mut self, col: usize, val: D, op: F)
    where
        F: Fn(D, D) -> D,
    {
        match self.slots.entry(col) {
            Entry::Occupied(slot) => {
                let entry = &mut self.entries[*slot.get()];
                entry.val = op(entry.val, val);
            }
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(SparseRowEntry::new(col, op(D::zero(), val)));
            }
        }
    }

    /// Move the accumulated entries into an empty output row
    fn flush_into(&mut self, row: &mut SparseRow<D>) {
        self.slots.clear();
        for entry in self.entries.drain(..) {
            row.push(entry.col, entry.val);
        }
    }
}

impl<D: MatrixElement> SparseMatrix<D> {
    /// Entry-wise sum `A + B`
    pub fn add(a: &Self, b: &Self) -> Result<Self> {
        Self::merge(a, b, |acc, val| acc + val)
    }

    /// Entry-wise difference `A - B`
    pub fn subtract(a: &Self, b: &Self) -> Result<Self> {
        Self::merge(a, b, |acc, val| acc - val)
    }

    /// Merge the stored columns of both operands row by row
    ///
    /// A column stored in either operand is stored in the result. Exact
    /// cancellation leaves a stored zero.
    fn merge<F>(a: &Self, b: &Self, op: F) -> Result<Self>
    where
        F: Fn(D, D) -> D,
    {
        check_dimensions(a.rows(), b.rows())?;
        check_dimensions(a.cols(), b.cols())?;

        let mut result = Self::new(a.rows(), a.cols());
        let mut accumulator = RowAccumulator::new();
        let row_pairs = a.sparse_rows().iter().zip(b.sparse_rows());
        for (r, (lhs, rhs)) in row_pairs.enumerate() {
            accumulator.seed(lhs);
            for (col, val) in rhs.iter() {
                accumulator.combine(col, val, &op);
            }
            accumulator.flush_into(result.row_mut(r));
        }
        Ok(result)
    }

    /// Scale every stored entry by `factor`
    ///
    /// The sparsity pattern is unchanged: no entries are created, and a zero
    /// factor leaves stored zeros rather than removing entries.
    pub fn multiply_scalar(a: &Self, factor: D) -> Self {
        let mut result = a.clone();
        for r in 0..result.rows() {
            result.row_mut(r).scale(factor);
        }
        result
    }

    /// Matrix-vector product `A v`
    ///
    /// Only stored entries contribute; `v` must have `cols()` elements.
    pub fn multiply_vector(a: &Self, v: &[D]) -> Result<Vec<D>> {
        check_dimensions(v.len(), a.cols())?;

        Ok(a.sparse_rows()
            .iter()
            .map(|row| {
                row.iter()
                    .fold(D::zero(), |sum, (col, val)| sum + val * v[col])
            })
            .collect())
    }

    /// Matrix product `A B`
    ///
    /// For each stored `A(r, k)` the stored entries of row `k` of `B` are
    /// accumulated into output row `r`, so no dense row or column is built.
    pub fn multiply(a: &Self, b: &Self) -> Result<Self> {
        check_dimensions(a.cols(), b.rows())?;

        let mut result = Self::new(a.rows(), b.cols());
        let mut accumulator = RowAccumulator::new();
        for (r, row) in a.sparse_rows().iter().enumerate() {
            for (k, a_rk) in row.iter() {
                for (c, b_kc) in b.sparse_rows()[k].iter() {
                    accumulator.combine(c, a_rk * b_kc, |acc, val| acc + val);
                }
            }
            accumulator.flush_into(result.row_mut(r));
        }
        Ok(result)
    }

    /// The quadratic form `vᵗ A v`
    ///
    /// Requires `v` to match both the column count (for `A v`) and the row
    /// count (for the dot product).
    pub fn quadratic(a: &Self, v: &[D]) -> Result<D> {
        check_dimensions(a.rows(), v.len())?;
        let av = Self::multiply_vector(a, v)?;
        Ok(dot(v, &av))
    }
}

/// Dot product of two equal-length slices
fn dot<D: MatrixElement>(lhs: &[D], rhs: &[D]) -> D {
    lhs.iter()
        .zip(rhs)
        .fold(D::zero(), |sum, (&x, &y)| sum + x * y)
}

impl<D: MatrixElement> Add for &SparseMatrix<D> {
    type Output = Result<SparseMatrix<D>>;

    fn add(self, rhs: Self) -> Self::Output {
        SparseMatrix::add(self, rhs)
    }
}

impl<D: MatrixElement> Sub for &SparseMatrix<D> {
    type Output = Result<SparseMatrix<D>>;

    fn sub(self, rhs: Self) -> Self::Output {
        SparseMatrix::subtract(self, rhs)
    }
}

impl<D: MatrixElement> Mul for &SparseMatrix<D> {
    type Output = Result<SparseMatrix<D>>;

    fn mul(self, rhs: Self) -> Self::Output {
        SparseMatrix::multiply(self, rhs)
    }
}

impl<D: MatrixElement> Mul<&[D]> for &SparseMatrix<D> {
    type Output = Result<Vec<D>>;

    fn mul(self, rhs: &[D]) -> Self::Output {
        SparseMatrix::multiply_vector(self, rhs)
    }
}

impl<D: MatrixElement> Mul<&Vec<D>> for &SparseMatrix<D> {
    type Output = Result<Vec<D>>;

    fn mul(self, rhs: &Vec<D>) -> Self::Output {
        SparseMatrix::multiply_vector(self, rhs)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for &SparseMatrix<$t> {
                type Output = SparseMatrix<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    SparseMatrix::multiply_scalar(self, rhs)
                }
            }

            impl Mul<$t> for SparseMatrix<$t> {
                type Output = SparseMatrix<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    SparseMatrix::multiply_scalar(&self, rhs)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i32, i64);
