//! Text format definitions for sparse matrix documents
//!
//! A document is a `rows=`/`cols=` header followed by one `(row, col, value)`
//! entry per line. This module only works on strings; reading files is left
//! to the caller.

pub mod constants;
pub mod document;
pub mod entry;
pub mod header;
pub mod writer;

pub use document::{read_matrix, MatrixDocument};
pub use entry::{parse_entry, Entry};
pub use header::{parse_header_line, Dimensions};
pub use writer::format_matrix;
