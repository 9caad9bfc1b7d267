//! Error type for reading matrix files and running jobs

use std::path::PathBuf;

use spmat_core::SpmatError;
use thiserror::Error;

/// Errors from file access or from the matrix core
#[derive(Debug, Error)]
pub enum Error {
    /// A document could not be read or the output could not be written
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing to the output sink failed
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
    /// Format, dimension, operation or overflow error from the core
    #[error(transparent)]
    Matrix(#[from] SpmatError),
    #[cfg(feature = "serde")]
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The core error, if this is not an I/O failure
    pub fn matrix_error(&self) -> Option<&SpmatError> {
        match self {
            Error::Matrix(err) => Some(err),
            _ => None,
        }
    }

    /// Whether this error came from the file system or the output sink
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::Output(_))
    }
}

/// Result type for spmat operations
pub type Result<T> = std::result::Result<T, Error>;
