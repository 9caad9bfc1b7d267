#![no_std]

//! spmat-core - Sparse matrix text format and arithmetic
//!
//! This crate provides the text format definitions, the zero-suppressing
//! sparse matrix and its add/subtract/multiply operations. It performs no I/O.
//!
//! ```
//! use spmat_core::{read_matrix, Operation};
//!
//! let a = read_matrix::<i64>("rows=2\ncols=2\n(0,0,1)\n(1,1,1)").unwrap().into_matrix();
//! let b = read_matrix::<i64>("rows=2\ncols=2\n(0,1,7)").unwrap().into_matrix();
//!
//! let product = Operation::Multiply.apply(&a, &b).unwrap();
//! assert_eq!(product.to_string(), "rows=2\ncols=2\n(0, 1, 7)\n");
//! ```

extern crate alloc;

pub mod arithmetic;
pub mod error;
pub mod format;
pub mod matrix;
pub mod traits;
pub mod validation;

pub use arithmetic::{add, multiply, subtract, Operation};
pub use error::*;
pub use format::{format_matrix, parse_entry, read_matrix, Dimensions, Entry, MatrixDocument};
pub use matrix::SparseMatrix;
pub use traits::{MatrixElement, SparseAccess};
