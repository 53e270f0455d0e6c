//! Matrix arithmetic
//!
//! Every operation validates operand shapes first and returns a fresh
//! matrix; inputs are never mutated.

pub mod elementwise;
pub mod multiply;

pub use elementwise::{add, subtract};
pub use multiply::multiply;

use crate::error::Result;
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

/// Binary matrix operation selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixOp {
    Add,
    Subtract,
    Multiply,
}

impl MatrixOp {
    pub const ALL: [MatrixOp; 3] = [MatrixOp::Add, MatrixOp::Subtract, MatrixOp::Multiply];

    /// Map a menu selector (1=add, 2=subtract, 3=multiply)
    pub const fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(MatrixOp::Add),
            2 => Some(MatrixOp::Subtract),
            3 => Some(MatrixOp::Multiply),
            _ => None,
        }
    }

    pub const fn selector(&self) -> u8 {
        match self {
            MatrixOp::Add => 1,
            MatrixOp::Subtract => 2,
            MatrixOp::Multiply => 3,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            MatrixOp::Add => "add",
            MatrixOp::Subtract => "subtract",
            MatrixOp::Multiply => "multiply",
        }
    }

    /// Noun form used in error messages
    pub const fn noun(&self) -> &'static str {
        match self {
            MatrixOp::Add => "addition",
            MatrixOp::Subtract => "subtraction",
            MatrixOp::Multiply => "multiplication",
        }
    }

    /// Run the operation on `lhs` and `rhs`
    pub fn apply<T: MatrixElement>(
        &self,
        lhs: &SparseMatrix<T>,
        rhs: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            MatrixOp::Add => add(lhs, rhs),
            MatrixOp::Subtract => subtract(lhs, rhs),
            MatrixOp::Multiply => multiply(lhs, rhs),
        }
    }
}

impl core::fmt::Display for MatrixOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an operation name is not recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOp;

impl core::fmt::Display for UnknownOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("expected add, subtract, multiply or 1, 2, 3")
    }
}

impl core::error::Error for UnknownOp {}

impl core::str::FromStr for MatrixOp {
    type Err = UnknownOp;

    /// Accepts an operation name (case-insensitive) or its menu selector
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(selector) = s.parse::<u8>() {
            return MatrixOp::from_selector(selector).ok_or(UnknownOp);
        }
        MatrixOp::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownOp)
    }
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Elementwise sum, see [`elementwise::add`]
    pub fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    /// Elementwise difference, see [`elementwise::subtract`]
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        subtract(self, other)
    }

    /// Matrix product, see [`multiply::multiply`]
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_from_selector() {
        assert_eq!(MatrixOp::from_selector(1), Some(MatrixOp::Add));
        assert_eq!(MatrixOp::from_selector(2), Some(MatrixOp::Subtract));
        assert_eq!(MatrixOp::from_selector(3), Some(MatrixOp::Multiply));
        assert_eq!(MatrixOp::from_selector(0), None);
        assert_eq!(MatrixOp::from_selector(4), None);
        for op in MatrixOp::ALL {
            assert_eq!(MatrixOp::from_selector(op.selector()), Some(op));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("add".parse::<MatrixOp>(), Ok(MatrixOp::Add));
        assert_eq!("Subtract".parse::<MatrixOp>(), Ok(MatrixOp::Subtract));
        assert_eq!(" 3 ".parse::<MatrixOp>(), Ok(MatrixOp::Multiply));
        assert_eq!("divide".parse::<MatrixOp>(), Err(UnknownOp));
        assert_eq!("9".parse::<MatrixOp>(), Err(UnknownOp));
        assert_eq!("".parse::<MatrixOp>(), Err(UnknownOp));
    }

    #[test]
    fn test_apply_dispatch() {
        let a: SparseMatrix = SparseMatrix::from_entries(2, 2, vec![(0, 0, 1), (1, 1, 2)]).unwrap();
        let b: SparseMatrix = SparseMatrix::from_entries(2, 2, vec![(0, 0, 1), (1, 1, 1)]).unwrap();

        let sum = MatrixOp::Add.apply(&a, &b).unwrap();
        assert_eq!(sum, a.add(&b).unwrap());

        let diff = MatrixOp::Subtract.apply(&a, &b).unwrap();
        assert_eq!(diff, a.subtract(&b).unwrap());

        let product = MatrixOp::Multiply.apply(&a, &b).unwrap();
        assert_eq!(product, a.multiply(&b).unwrap());
    }
}
