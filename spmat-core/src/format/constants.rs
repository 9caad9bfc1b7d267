//! Grammar tokens of the sparse matrix text format

/// Prefix of the first header line
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of the second header line
pub const COLS_PREFIX: &str = "cols=";

/// Opening delimiter of an entry
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry
pub const ENTRY_CLOSE: char = ')';

/// Separator between entry fields
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an entry: row, col, value
pub const ENTRY_FIELD_COUNT: usize = 3;
