//! Core matrix abstraction traits
//!
//! This module defines the read-only view that operations need from a
//! sparse matrix, independent of how it is stored.

use super::element::MatrixElement;

/// Read-only access to a sparse matrix
pub trait SparseAccess {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get the value at the specified position
    ///
    /// Positions that are not stored read as zero.
    fn get_element(&self, row: usize, col: usize) -> Self::Element;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}
