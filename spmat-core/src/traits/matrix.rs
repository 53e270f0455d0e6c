//! Core matrix access traits
//!
//! These traits describe read-only access to any sparse matrix holding
//! [`MatrixElement`] values, independent of how the nonzeros are stored.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Read-only view over a sparse matrix
pub trait MatrixView {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored).
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the matrix dimensions.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column operations
pub trait MatrixOperations: MatrixView {
    /// Get all non-zero `(col, value)` pairs in a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all non-zero `(row, value)` pairs in a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
