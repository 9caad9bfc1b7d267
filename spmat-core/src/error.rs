//! Error types for sparse matrix parsing and arithmetic

/// Specific grammar violation found while reading a matrix document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Fewer than two non-empty lines, so no `rows=`/`cols=` header
    MissingHeader,
    /// First line does not start with `rows=`
    MissingRowsPrefix,
    /// Second line does not start with `cols=`
    MissingColsPrefix,
    /// Header count is not a non-negative integer
    InvalidDimension,
    /// Entry is not wrapped in `(` and `)`
    UnbracketedEntry,
    /// Entry does not have exactly three fields
    WrongFieldCount,
    /// Entry field has no leading integer
    InvalidField,
    /// Entry row or column is negative or too large for an index
    NegativeIndex,
    /// Entry value does not fit the element type
    ValueOutOfRange,
    /// Entry coordinate lies outside the declared dimensions
    EntryOutOfBounds,
}

impl core::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatIssue::MissingHeader => "missing rows/cols header",
            FormatIssue::MissingRowsPrefix => "first line must start with 'rows='",
            FormatIssue::MissingColsPrefix => "second line must start with 'cols='",
            FormatIssue::InvalidDimension => "dimension is not a non-negative integer",
            FormatIssue::UnbracketedEntry => "entry must be enclosed in parentheses",
            FormatIssue::WrongFieldCount => "entry must have exactly three fields",
            FormatIssue::InvalidField => "entry field is not an integer",
            FormatIssue::NegativeIndex => "entry index is not a valid coordinate",
            FormatIssue::ValueOutOfRange => "entry value is out of range",
            FormatIssue::EntryOutOfBounds => "entry lies outside the declared dimensions",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur while reading or combining sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Document violates the header or entry grammar
    InvalidFormat(FormatIssue),
    /// Operands of add/subtract have different shapes
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Left operand's column count differs from right operand's row count
    InnerDimensionMismatch { left_cols: usize, right_rows: usize },
    /// Operation selector is not one of `add`, `subtract`, `multiply`
    InvalidOperation,
    /// Accumulated value does not fit the element type
    ValueOverflow,
}

/// Broad classification of [`SpmatError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Dimension,
    Operation,
    Arithmetic,
}

impl SpmatError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::InvalidFormat(_) => ErrorCategory::Format,
            SpmatError::ShapeMismatch { .. } | SpmatError::InnerDimensionMismatch { .. } => {
                ErrorCategory::Dimension
            }
            SpmatError::InvalidOperation => ErrorCategory::Operation,
            SpmatError::ValueOverflow => ErrorCategory::Arithmetic,
        }
    }

    /// The grammar issue, if this is a format error
    pub const fn format_issue(&self) -> Option<FormatIssue> {
        match self {
            SpmatError::InvalidFormat(issue) => Some(*issue),
            _ => None,
        }
    }
}

impl From<FormatIssue> for SpmatError {
    fn from(issue: FormatIssue) -> Self {
        SpmatError::InvalidFormat(issue)
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::InvalidFormat(issue) => {
                write!(f, "Input file has wrong format: {issue}")
            }
            SpmatError::ShapeMismatch { left, right } => write!(
                f,
                "Matrices must have the same dimensions for addition and subtraction ({}x{} vs {}x{})",
                left.0, left.1, right.0, right.1
            ),
            SpmatError::InnerDimensionMismatch {
                left_cols,
                right_rows,
            } => write!(
                f,
                "Number of columns in the first matrix ({left_cols}) must equal number of rows in the second matrix ({right_rows}) for multiplication"
            ),
            SpmatError::InvalidOperation => {
                write!(f, "Invalid operation, expected one of: add, subtract, multiply")
            }
            SpmatError::ValueOverflow => write!(f, "Integer overflow in matrix arithmetic"),
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
