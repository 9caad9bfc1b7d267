//! `rows=` / `cols=` header lines

use crate::error::FormatIssue;
use crate::validation::parse_count;

/// Declared size of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Get dimensions as (rows, cols)
    pub const fn as_tuple(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Parse a header line that must start with `prefix`
///
/// Returns `missing` when the prefix is absent and
/// [`FormatIssue::InvalidDimension`] when the count does not parse.
pub fn parse_header_line(
    line: &str,
    prefix: &str,
    missing: FormatIssue,
) -> Result<usize, FormatIssue> {
    let count = line.trim().strip_prefix(prefix).ok_or(missing)?;
    parse_count(count)
}
