//! Dimension and coordinate validation
//!
//! Shape checks run before any arithmetic starts so that a failed
//! operation never produces a partial result.

use crate::error::{FormatIssue, SpmatError};
use crate::format::{Dimensions, Entry};
use crate::traits::SparseAccess;

/// Validate that two operands can be added or subtracted
pub fn check_same_shape<A, B>(left: &A, right: &B) -> Result<(), SpmatError>
where
    A: SparseAccess + ?Sized,
    B: SparseAccess + ?Sized,
{
    let (left, right) = (left.dimensions(), right.dimensions());
    if left != right {
        return Err(SpmatError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Validate that two operands can be multiplied
pub fn check_inner_dimensions<A, B>(left: &A, right: &B) -> Result<(), SpmatError>
where
    A: SparseAccess + ?Sized,
    B: SparseAccess + ?Sized,
{
    let (_, left_cols) = left.dimensions();
    let (right_rows, _) = right.dimensions();
    if left_cols != right_rows {
        return Err(SpmatError::InnerDimensionMismatch {
            left_cols,
            right_rows,
        });
    }
    Ok(())
}

/// Validate that an entry lies inside the declared dimensions
pub fn validate_entry_bounds<T>(entry: &Entry<T>, dims: Dimensions) -> Result<(), FormatIssue> {
    if entry.row >= dims.rows || entry.col >= dims.cols {
        return Err(FormatIssue::EntryOutOfBounds);
    }
    Ok(())
}
