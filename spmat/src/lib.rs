//! spmat - Sparse matrix documents on disk
//!
//! This crate reads sparse matrix text documents from files, runs
//! add/subtract/multiply through [`spmat_core`], and writes the rendered
//! result to a file or any [`std::io::Write`] sink.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{Job, Operation, RunConfig};
//!
//! fn example() -> spmat::Result<()> {
//!     let job = Job::new(Operation::Multiply, "a.txt", "b.txt")
//!         .with_config(RunConfig::default().with_strict_bounds(true));
//!     job.execute(None, &mut std::io::stdout())
//! }
//! ```

// Re-export core abstractions
pub use spmat_core::{
    add, format_matrix, multiply, read_matrix, subtract, Dimensions, Entry, ErrorCategory,
    FormatIssue, MatrixDocument, Operation, SparseMatrix, SpmatError,
};

pub mod config;
pub mod error;
pub mod file_io;
pub mod job;

pub use config::{OutputFormat, RunConfig};
pub use error::{Error, Result};
pub use file_io::{read_matrix_file, write_output, MatrixFile};
pub use job::Job;
