//! Abstract interfaces for sparse matrices and their elements

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseAccess;
