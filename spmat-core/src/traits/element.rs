//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

use core::fmt::{Debug, Display};
use core::ops::{Add, Mul, Sub};
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// Elements are exact integers: addition, subtraction and multiplication
/// must not lose information, so `add` followed by `subtract` restores the
/// left operand. All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared against zero
/// - Display/FromStr: Can be written to and parsed from the text format
pub trait MatrixElement:
    Copy
    + PartialEq
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// The additive identity, never stored in a matrix
    fn zero() -> Self;

    /// Check whether this value is the additive identity
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

macro_rules! impl_matrix_element {
    ($($ty:ty),*) => {
        $(
            impl MatrixElement for $ty {
                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

impl_matrix_element!(i32, i64, i128);
