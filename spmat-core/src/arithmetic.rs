//! Sparse matrix arithmetic
//!
//! Every operation checks operand dimensions first, then fills a fresh
//! result matrix and hands it back by value. Operands are never modified.
//! Values that cancel to zero are removed from the result.

use alloc::collections::BTreeMap;
use core::str::FromStr;

use crate::error::{Result, SpmatError};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;
use crate::validation::{check_inner_dimensions, check_same_shape};

/// Elementwise sum `left + right`
///
/// Fails with [`SpmatError::ShapeMismatch`] unless both operands have the
/// same dimensions.
pub fn add<T: MatrixElement>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    combine(left, right, T::checked_add)
}

/// Elementwise difference `left - right`
///
/// Fails with [`SpmatError::ShapeMismatch`] unless both operands have the
/// same dimensions.
pub fn subtract<T: MatrixElement>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    combine(left, right, T::checked_sub)
}

/// Copy `left` into the result, then fold every stored value of `right` in
fn combine<T, F>(left: &SparseMatrix<T>, right: &SparseMatrix<T>, op: F) -> Result<SparseMatrix<T>>
where
    T: MatrixElement,
    F: Fn(T, T) -> Option<T>,
{
    check_same_shape(left, right)?;

    let mut result = left.clone();
    for entry in right.iter() {
        let current = result.get(entry.row, entry.col);
        let value = op(current, entry.value).ok_or(SpmatError::ValueOverflow)?;
        result.store(entry.row, entry.col, value);
    }

    Ok(result)
}

/// Matrix product `left × right`
///
/// Only pairs of stored values meet: each `left[i, k]` is multiplied with
/// every stored `right[k, j]` and accumulated into `result[i, j]`. The result
/// is `left.rows() × right.cols()`.
///
/// Products are summed in [`MatrixElement::Wide`] and narrowed once per
/// result position, so only a final value that does not fit the element type
/// fails with [`SpmatError::ValueOverflow`]. For `i128`, which has no wider
/// type, a partial sum that overflows also fails.
///
/// Fails with [`SpmatError::InnerDimensionMismatch`] unless
/// `left.cols() == right.rows()`.
pub fn multiply<T: MatrixElement>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    check_inner_dimensions(left, right)?;

    let mut sums: BTreeMap<(usize, usize), T::Wide> = BTreeMap::new();
    for a in left.iter() {
        for (col, b) in right.row(a.col) {
            let product = a
                .value
                .widen()
                .checked_mul(b.widen())
                .ok_or(SpmatError::ValueOverflow)?;
            let sum = sums.entry((a.row, col)).or_insert_with(<T::Wide as MatrixElement>::zero);
            *sum = (*sum).checked_add(product).ok_or(SpmatError::ValueOverflow)?;
        }
    }

    let mut result: SparseMatrix<T> = SparseMatrix::new(left.rows(), right.cols());
    for ((row, col), sum) in sums {
        let value = T::narrow(sum).ok_or(SpmatError::ValueOverflow)?;
        result.store(row, col, value);
    }

    Ok(result)
}

/// Arithmetic operation selected by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All supported operations
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// The selector token for this operation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply this operation to two matrices
    pub fn apply<T: MatrixElement>(
        &self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => add(left, right),
            Operation::Subtract => subtract(left, right),
            Operation::Multiply => multiply(left, right),
        }
    }
}

impl FromStr for Operation {
    type Err = SpmatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            _ => Err(SpmatError::InvalidOperation),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
