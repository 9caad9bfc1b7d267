//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as values in a sparse matrix.

use core::fmt::{Debug, Display};

/// Trait for integer types that can be stored as matrix elements
///
/// Arithmetic is checked: a `None` from any of the `checked_*` methods
/// means the result does not fit and the operation must fail.
pub trait MatrixElement: Copy + PartialEq + Debug + Display + Sized {
    /// Type used to accumulate products before narrowing back
    ///
    /// At least as wide as `Self`. `i128` accumulates in itself.
    type Wide: MatrixElement;

    /// The additive identity, never stored in a matrix
    fn zero() -> Self;

    /// Whether this value is exactly zero
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Parse a sign-and-digits string, `None` if it does not fit
    fn parse_integer(digits: &str) -> Option<Self>;

    fn widen(self) -> Self::Wide;

    /// Convert an accumulated value back, `None` if it does not fit
    fn narrow(wide: Self::Wide) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $wide:ty),*) => {
        $(
            impl MatrixElement for $ty {
                type Wide = $wide;

                fn zero() -> Self {
                    0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn parse_integer(digits: &str) -> Option<Self> {
                    digits.parse().ok()
                }

                fn widen(self) -> $wide {
                    <$wide>::from(self)
                }

                fn narrow(wide: $wide) -> Option<Self> {
                    <$ty>::try_from(wide).ok()
                }
            }
        )*
    };
}

impl_matrix_element!(i32 => i64, i64 => i128, i128 => i128);
