//! Single `(row, col, value)` entries

use super::constants::{ENTRY_CLOSE, ENTRY_FIELD_COUNT, ENTRY_OPEN, FIELD_SEPARATOR};
use crate::error::{FormatIssue, Result};
use crate::traits::MatrixElement;
use crate::validation::{parse_index, parse_value};

/// One coordinate/value triple read from a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T = i64> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Entry<T> {
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}

/// Parse one entry line such as `(1, 2, -7)`
///
/// Surrounding whitespace is ignored. Each field follows the leading-integer
/// rule of [`crate::validation::parsing`].
pub fn parse_entry<T: MatrixElement>(text: &str) -> Result<Entry<T>> {
    let inner = text
        .trim()
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(FormatIssue::UnbracketedEntry)?;

    let mut fields = [""; ENTRY_FIELD_COUNT];
    let mut count = 0;
    for field in inner.split(FIELD_SEPARATOR) {
        if count == ENTRY_FIELD_COUNT {
            return Err(FormatIssue::WrongFieldCount.into());
        }
        fields[count] = field.trim();
        count += 1;
    }
    if count != ENTRY_FIELD_COUNT {
        return Err(FormatIssue::WrongFieldCount.into());
    }

    let [row, col, value] = fields;
    Ok(Entry {
        row: parse_index(row)?,
        col: parse_index(col)?,
        value: parse_value(value)?,
    })
}
