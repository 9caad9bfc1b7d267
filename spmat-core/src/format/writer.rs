//! Rendering matrices back to the text format
//!
//! Output is a valid document: the `rows=`/`cols=` header followed by one
//! entry per stored value in ascending (row, col) order.

use alloc::string::{String, ToString};
use core::fmt;

use super::constants::{COLS_PREFIX, ROWS_PREFIX};
use super::header::Dimensions;
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{ROWS_PREFIX}{}", self.rows)?;
        write!(f, "{COLS_PREFIX}{}", self.cols)
    }
}

impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.shape())?;
        for entry in self.iter() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Render a matrix as a text document
pub fn format_matrix<T: MatrixElement>(matrix: &SparseMatrix<T>) -> String {
    matrix.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{read_matrix, Entry};

    #[test]
    fn test_format_matrix() {
        let matrix = SparseMatrix::<i64>::from_entries(
            3,
            3,
            [Entry::new(2, 1, 3), Entry::new(0, 0, 5), Entry::new(1, 2, -10)],
        );

        assert_eq!(
            format_matrix(&matrix),
            "rows=3\ncols=3\n(0, 0, 5)\n(1, 2, -10)\n(2, 1, 3)\n"
        );
    }

    #[test]
    fn test_format_empty() {
        let matrix = SparseMatrix::<i64>::new(4, 2);
        assert_eq!(format_matrix(&matrix), "rows=4\ncols=2\n");
    }

    #[test]
    fn test_output_reads_back() {
        let source = "rows=3\ncols=4\n(2,3,9)\n(0,1,-1)\n(1,1,0)\n";
        let matrix = read_matrix::<i64>(source).unwrap().into_matrix();

        let again = read_matrix::<i64>(&format_matrix(&matrix)).unwrap();
        assert_eq!(again.dims, matrix.shape());
        assert_eq!(again.entries, matrix.to_entries());
    }
}
