//! File access for matrix documents
//!
//! Documents are read whole into memory before parsing; nothing is kept
//! open once a read returns.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use spmat_core::{read_matrix, MatrixDocument, SparseMatrix};
use tracing::debug;

use crate::config::RunConfig;
use crate::error::{Error, Result};

/// A parsed matrix document together with the path it came from
#[derive(Debug, Clone)]
pub struct MatrixFile {
    pub path: PathBuf,
    pub document: MatrixDocument<i64>,
}

impl MatrixFile {
    /// Read and parse a document
    ///
    /// I/O failures are reported as [`Error::Io`] and grammar violations as
    /// [`Error::Matrix`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = read_text(&path)?;
        let document = read_matrix(&text)?;

        debug!(
            path = %path.display(),
            rows = document.dims.rows,
            cols = document.dims.cols,
            entries = document.entries.len(),
            "parsed matrix document"
        );

        Ok(Self { path, document })
    }

    /// Build the sparse matrix, checking entry bounds when configured
    pub fn into_matrix(self, config: &RunConfig) -> Result<SparseMatrix<i64>> {
        if config.strict_bounds() {
            self.document.validate_bounds()?;
        }
        Ok(self.document.into_matrix())
    }
}

/// Read a whole document as text
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a document and build its sparse matrix
pub fn read_matrix_file<P: AsRef<Path>>(path: P, config: &RunConfig) -> Result<SparseMatrix<i64>> {
    MatrixFile::open(path)?.into_matrix(config)
}

/// Write rendered output to a file, or to `sink` when no path is given
pub fn write_output<W: Write>(path: Option<&Path>, text: &str, sink: &mut W) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => {
            sink.write_all(text.as_bytes()).map_err(Error::Output)?;
            sink.flush().map_err(Error::Output)?;
        }
    }
    Ok(())
}
