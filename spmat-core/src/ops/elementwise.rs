//! Elementwise addition and subtraction
//!
//! Both operations walk the stored entries of each row only, so the cost is
//! O(nnz(lhs) + nnz(rhs)) regardless of the matrix shape.

use crate::error::{Result, SpmatError};
use crate::matrix::SparseMatrix;
use crate::ops::MatrixOp;
use crate::traits::MatrixElement;

/// Elementwise `lhs + rhs`
pub fn add<T: MatrixElement>(lhs: &SparseMatrix<T>, rhs: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    combine(lhs, rhs, MatrixOp::Add, |a, b| a + b)
}

/// Elementwise `lhs - rhs`
pub fn subtract<T: MatrixElement>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    combine(lhs, rhs, MatrixOp::Subtract, |a, b| a - b)
}

/// Copy `lhs`, then fold every nonzero of `rhs` into it with `op`
///
/// Positions present only in `rhs` see zero as the accumulated value. All
/// writes go through `set_value`, so results that cancel to zero are dropped.
fn combine<T, F>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
    kind: MatrixOp,
    op: F,
) -> Result<SparseMatrix<T>>
where
    T: MatrixElement,
    F: Fn(T, T) -> T,
{
    if lhs.shape() != rhs.shape() {
        return Err(SpmatError::DimensionMismatch {
            op: kind,
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }

    let mut result = SparseMatrix::new(lhs.nrows(), lhs.ncols());
    for (r, (left, right)) in lhs.rows.iter().zip(&rhs.rows).enumerate() {
        result.rows[r].clone_from(left);
        for (&c, &v) in right {
            let combined = op(result.get_value(r, c), v);
            result.set_value(r, c, combined);
        }
    }
    Ok(result)
}
