//! Zero-suppressing sparse matrix storage
//!
//! Values live in a row-major nested map. A stored value is never zero and a
//! row that is present always holds at least one value. Both maps are ordered,
//! so iteration visits entries by ascending row and then ascending column.

use alloc::collections::btree_map::{self, BTreeMap};
use alloc::vec::Vec;

use crate::format::{Dimensions, Entry, MatrixDocument};
use crate::traits::{MatrixElement, SparseAccess};

/// Sparse matrix holding only non-zero values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    rows: usize,
    cols: usize,
    data: BTreeMap<usize, BTreeMap<usize, T>>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: BTreeMap::new(),
        }
    }

    /// Create a matrix from entries, applied in order
    ///
    /// A later entry for the same coordinate replaces an earlier one. A later
    /// zero entry clears the coordinate, so zero is never stored.
    /// Coordinates are not checked against `rows`/`cols`.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<T>>,
    {
        let mut matrix = Self::new(rows, cols);
        for entry in entries {
            matrix.store(entry.row, entry.col, entry.value);
        }
        matrix
    }

    /// Get the value at a position, zero if nothing is stored there
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data
            .get(&row)
            .and_then(|cols| cols.get(&col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Store a non-zero value
    ///
    /// Writing zero does nothing: it neither stores the zero nor clears a
    /// value already at that position.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            return;
        }
        self.data.entry(row).or_default().insert(col, value);
    }

    /// Store a value, clearing the position when the value is zero
    ///
    /// Used by construction and arithmetic so that a later zero or a result
    /// summing to zero leaves the position empty.
    pub(crate) fn store(&mut self, row: usize, col: usize, value: T) {
        if !value.is_zero() {
            self.data.entry(row).or_default().insert(col, value);
            return;
        }

        if let btree_map::Entry::Occupied(mut row_entry) = self.data.entry(row) {
            row_entry.get_mut().remove(&col);
            if row_entry.get().is_empty() {
                row_entry.remove();
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the declared dimensions
    pub fn shape(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    /// Get number of stored (non-zero) values
    pub fn nnz(&self) -> usize {
        self.data.values().map(BTreeMap::len).sum()
    }

    /// Whether no value is stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over stored values in (row, col) order
    pub fn iter(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.data.iter().flat_map(|(&row, cols)| {
            cols.iter()
                .map(move |(&col, &value)| Entry::new(row, col, value))
        })
    }

    /// Iterate over the stored (col, value) pairs of one row
    ///
    /// Empty when the row holds no values.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        self.data
            .get(&row)
            .into_iter()
            .flat_map(|cols| cols.iter().map(|(&col, &value)| (col, value)))
    }

    /// Collect the stored values as entries
    pub fn to_entries(&self) -> Vec<Entry<T>> {
        self.iter().collect()
    }

    /// Convert into a document with the same dimensions and stored entries
    pub fn to_document(&self) -> MatrixDocument<T> {
        MatrixDocument {
            dims: self.shape(),
            entries: self.to_entries(),
        }
    }
}

impl<T: MatrixElement> SparseAccess for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> T {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        self.shape().as_tuple()
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}
