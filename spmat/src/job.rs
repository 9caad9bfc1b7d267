//! Read two documents, combine them, render the result

use std::io::Write;
use std::path::{Path, PathBuf};

use spmat_core::{format_matrix, Operation, SparseMatrix};
use tracing::info;

use crate::config::{OutputFormat, RunConfig};
use crate::error::Result;
use crate::file_io::{read_matrix_file, write_output};

/// One arithmetic run over two matrix files
#[derive(Debug, Clone)]
pub struct Job {
    pub left: PathBuf,
    pub right: PathBuf,
    pub operation: Operation,
    pub config: RunConfig,
}

impl Job {
    pub fn new<L, R>(operation: Operation, left: L, right: R) -> Self
    where
        L: Into<PathBuf>,
        R: Into<PathBuf>,
    {
        Self {
            left: left.into(),
            right: right.into(),
            operation,
            config: RunConfig::default(),
        }
    }

    /// Replace the run configuration
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Read both operands and apply the operation
    ///
    /// Both documents are read completely before any arithmetic starts.
    pub fn run(&self) -> Result<SparseMatrix<i64>> {
        let left = read_matrix_file(&self.left, &self.config)?;
        let right = read_matrix_file(&self.right, &self.config)?;

        info!(
            operation = %self.operation,
            left = ?(left.rows(), left.cols()),
            right = ?(right.rows(), right.cols()),
            "applying operation"
        );

        let result = self.operation.apply(&left, &right)?;
        info!(
            rows = result.rows(),
            cols = result.cols(),
            nnz = result.nnz(),
            "operation complete"
        );
        Ok(result)
    }

    /// Render a result according to the configured output format
    pub fn render(&self, result: &SparseMatrix<i64>) -> Result<String> {
        match self.config.output() {
            OutputFormat::Text => {
                let body = format_matrix(result);
                if self.config.label() {
                    Ok(format!("{}\n{body}", label_line(self.operation)))
                } else {
                    Ok(body)
                }
            }
            #[cfg(feature = "serde")]
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&result.to_document())?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Run, render, and write to `output` or to `sink`
    pub fn execute<W: Write>(&self, output: Option<&Path>, sink: &mut W) -> Result<()> {
        let result = self.run()?;
        let text = self.render(&result)?;
        write_output(output, &text, sink)
    }
}

/// Descriptive line placed above text output
pub fn label_line(operation: Operation) -> String {
    format!("Result of {operation}:")
}
