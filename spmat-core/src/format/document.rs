//! Whole-document reading
//!
//! The reader is all-or-nothing: the first malformed line aborts the read
//! and no partial document is returned.

use alloc::vec::Vec;

use super::constants::{COLS_PREFIX, ROWS_PREFIX};
use super::entry::{parse_entry, Entry};
use super::header::{parse_header_line, Dimensions};
use crate::error::{FormatIssue, Result};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;
use crate::validation::validate_entry_bounds;

/// Parsed contents of a matrix document, entries kept in file order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixDocument<T = i64> {
    pub dims: Dimensions,
    pub entries: Vec<Entry<T>>,
}

impl<T: MatrixElement> MatrixDocument<T> {
    /// Check every entry against the declared dimensions
    pub fn validate_bounds(&self) -> Result<()> {
        for entry in &self.entries {
            validate_entry_bounds(entry, self.dims)?;
        }
        Ok(())
    }

    /// Build the sparse matrix, dropping zero values
    pub fn into_matrix(self) -> SparseMatrix<T> {
        SparseMatrix::from_entries(self.dims.rows, self.dims.cols, self.entries)
    }
}

/// Read a complete document from text
///
/// Blank lines are skipped and every line is trimmed. The first two
/// remaining lines must be the `rows=` and `cols=` headers; every line after
/// them is an entry.
pub fn read_matrix<T: MatrixElement>(source: &str) -> Result<MatrixDocument<T>> {
    let mut lines = source.lines().map(str::trim).filter(|line| !line.is_empty());

    let rows_line = lines.next().ok_or(FormatIssue::MissingHeader)?;
    let rows = parse_header_line(rows_line, ROWS_PREFIX, FormatIssue::MissingRowsPrefix)?;

    let cols_line = lines.next().ok_or(FormatIssue::MissingHeader)?;
    let cols = parse_header_line(cols_line, COLS_PREFIX, FormatIssue::MissingColsPrefix)?;

    let entries = lines.map(parse_entry::<T>).collect::<Result<Vec<_>>>()?;

    Ok(MatrixDocument {
        dims: Dimensions::new(rows, cols),
        entries,
    })
}
