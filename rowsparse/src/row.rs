//! Sparse row storage
//!
//! A row is an unordered list of `(column, value)` entries holding at most
//! one entry per column. Columns without an entry are implicit zeros.

use rowsparse_core::MatrixElement;

/// A single stored `(column, value)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparseRowEntry<D> {
    /// Column index of this entry
    pub col: usize,
    /// Stored value
    pub val: D,
}

impl<D> SparseRowEntry<D> {
    /// Create a new entry
    pub const fn new(col: usize, val: D) -> Self {
        Self { col, val }
    }
}

/// One matrix row in sparse form
///
/// Entries are kept in insertion order, not column order. Lookups are a
/// linear scan, which is cheap while the row holds few entries.
#[derive(Debug, Clone)]
pub struct SparseRow<D> {
    entries: Vec<SparseRowEntry<D>>,
}

impl<D> Default for SparseRow<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> SparseRow<D> {
    /// Create an empty row
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stored entries, in no particular column order
    pub fn entries(&self) -> &[SparseRowEntry<D>] {
        &self.entries
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the row stores no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the stored entry for a column
    pub fn find(&self, col: usize) -> Option<&SparseRowEntry<D>> {
        self.entries.iter().find(|entry| entry.col == col)
    }

    /// Append an entry without searching for an existing one
    ///
    /// The caller guarantees `col` is not stored yet.
    pub(crate) fn push(&mut self, col: usize, val: D) {
        debug_assert!(self.find(col).is_none(), "duplicate column {col}");
        self.entries.push(SparseRowEntry::new(col, val));
    }
}

impl<D: MatrixElement> SparseRow<D> {
    /// Value at `col`, or zero when nothing is stored
    ///
    /// Never inserts.
    pub fn get(&self, col: usize) -> D {
        self.find(col).map_or_else(D::zero, |entry| entry.val)
    }

    /// Mutable access to the value at `col`, inserting a zero entry on a miss
    ///
    /// Repeated calls for the same column always reach the same entry.
    pub fn entry_mut(&mut self, col: usize) -> &mut D {
        let index = match self.entries.iter().position(|entry| entry.col == col) {
            Some(index) => index,
            None => {
                self.entries.push(SparseRowEntry::new(col, D::zero()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].val
    }

    /// Iterate over stored `(column, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, D)> + '_ {
        self.entries.iter().map(|entry| (entry.col, entry.val))
    }

    /// Multiply every stored value by `factor`, keeping the sparsity pattern
    pub(crate) fn scale(&mut self, factor: D) {
        for entry in &mut self.entries {
            entry.val = entry.val * factor;
        }
    }

    /// Largest stored magnitude, or zero for an empty row
    pub fn max_magnitude(&self) -> D {
        self.entries
            .iter()
            .map(|entry| entry.val.magnitude())
            .fold(D::zero(), |best, m| if m > best { m } else { best })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_does_not_insert() {
        let row: SparseRow<f64> = SparseRow::new();
        assert_eq!(row.get(3), 0.0);
        assert!(row.is_empty());
    }

    #[test]
    fn test_entry_mut_inserts_once() {
        let mut row: SparseRow<i32> = SparseRow::new();
        *row.entry_mut(2) = 5;
        *row.entry_mut(2) = 9;
        *row.entry_mut(0) += 1;

        assert_eq!(row.len(), 2);
        assert_eq!(row.get(2), 9);
        assert_eq!(row.get(0), 1);
        assert_eq!(row.get(1), 0);
    }

    #[test]
    fn test_entry_mut_read_leaves_zero_entry() {
        let mut row: SparseRow<f64> = SparseRow::new();
        let value = *row.entry_mut(4);
        assert_eq!(value, 0.0);
        assert_eq!(row.entries(), &[SparseRowEntry::new(4, 0.0)]);
    }

    #[test]
    fn test_scale_and_magnitude() {
        let mut row: SparseRow<f64> = SparseRow::new();
        row.push(0, 1.5);
        row.push(3, -4.0);
        assert_eq!(row.max_magnitude(), 4.0);

        row.scale(-2.0);
        assert_eq!(row.get(0), -3.0);
        assert_eq!(row.get(3), 8.0);
        assert_eq!(row.len(), 2);

        assert_eq!(SparseRow::<i64>::new().max_magnitude(), 0);
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut row: SparseRow<i32> = SparseRow::new();
        row.push(5, 1);
        row.push(1, 2);
        let pairs: Vec<_> = row.iter().collect();
        assert_eq!(pairs, vec![(5, 1), (1, 2)]);
    }
}
