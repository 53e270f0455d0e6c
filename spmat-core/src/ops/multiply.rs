//! Sparse matrix product
//!
//! Row-by-row (Gustavson) product: every nonzero `lhs[r][c]` is paired with
//! the nonzeros of `rhs` row `c`, which the row-indexed storage already
//! exposes as the contraction index. Work is proportional to the number of
//! such pairs, never to `rows * cols * inner`.

use crate::error::{Result, SpmatError};
use crate::matrix::SparseMatrix;
use crate::ops::MatrixOp;
use crate::traits::MatrixElement;

/// Matrix product `lhs * rhs`
///
/// Requires `lhs.ncols() == rhs.nrows()`; the result is
/// `lhs.nrows() x rhs.ncols()`.
pub fn multiply<T: MatrixElement>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    if lhs.ncols() != rhs.nrows() {
        return Err(SpmatError::DimensionMismatch {
            op: MatrixOp::Multiply,
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }

    let mut result = SparseMatrix::new(lhs.nrows(), rhs.ncols());
    for (r, left) in lhs.rows.iter().enumerate() {
        for (&c, &v) in left {
            for (&k, &t) in &rhs.rows[c] {
                // Partial sums that cancel are removed by set_value
                let acc = result.get_value(r, k) + v * t;
                result.set_value(r, k, acc);
            }
        }
    }
    Ok(result)
}
