//! Row-indexed sparse matrix storage
//!
//! Each row owns a hash map from column index to a nonzero value. Zero is
//! never stored: writing zero removes the entry, so absence and zero are the
//! same thing and storage stays proportional to the nonzero count.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::{DecodeError, DecodeErrorKind};
use crate::traits::{MatrixElement, MatrixOperations, MatrixView};
use crate::validation::validate_position;

/// Matrix shape as (rows, cols)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl core::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

/// Sparse matrix over exact integer elements
///
/// The shape is fixed at construction. The only mutation is
/// [`SparseMatrix::set_value`]; `add`, `subtract` and `multiply` always
/// produce fresh matrices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "MatrixRecord<T>",
        try_from = "MatrixRecord<T>",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct SparseMatrix<T: MatrixElement = i64> {
    nrows: usize,
    ncols: usize,
    /// `rows[r][c]` = nonzero value at (`r`, `c`)
    pub(crate) rows: Vec<HashMap<usize, T>>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an all-zero matrix with the given shape
    pub fn new(nrows: usize, ncols: usize) -> Self {
        let mut rows = Vec::with_capacity(nrows);
        rows.resize_with(nrows, HashMap::new);
        Self { nrows, ncols, rows }
    }

    /// Like [`SparseMatrix::new`], but reports a row count too large to
    /// allocate instead of aborting
    pub fn try_new(nrows: usize, ncols: usize) -> Result<Self, TryReserveError> {
        let mut rows = Vec::new();
        rows.try_reserve_exact(nrows)?;
        rows.resize_with(nrows, HashMap::new);
        Ok(Self { nrows, ncols, rows })
    }

    /// Create a matrix and apply `(row, col, value)` entries in order
    ///
    /// Later entries for the same position overwrite earlier ones, and zero
    /// values delete. An entry outside the shape fails the whole build; the
    /// error's `line` is the 1-based position of that entry. A row count
    /// that cannot be allocated fails with `TooLarge` on line 0.
    pub fn from_entries<I>(nrows: usize, ncols: usize, entries: I) -> Result<Self, DecodeError>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::try_new(nrows, ncols)
            .map_err(|_| DecodeError::new(0, DecodeErrorKind::TooLarge))?;
        for (index, (row, col, value)) in entries.into_iter().enumerate() {
            matrix.try_set_value(row, col, value, index + 1)?;
        }
        Ok(matrix)
    }

    /// Bounds-checked `set_value` used while decoding
    pub(crate) fn try_set_value(
        &mut self,
        row: usize,
        col: usize,
        value: T,
        line: usize,
    ) -> Result<(), DecodeError> {
        validate_position(self.shape(), row, col, line)?;
        self.set_value(row, col, value);
        Ok(())
    }

    /// Store `value` at (`row`, `col`), or remove the entry if `value` is zero
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()` or `col >= ncols()`.
    pub fn set_value(&mut self, row: usize, col: usize, value: T) {
        self.assert_in_bounds(row, col);
        let entries = &mut self.rows[row];
        if value.is_zero() {
            entries.remove(&col);
        } else {
            entries.insert(col, value);
        }
    }

    /// Value at (`row`, `col`), zero when nothing is stored
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()` or `col >= ncols()`.
    pub fn get_value(&self, row: usize, col: usize) -> T {
        self.assert_in_bounds(row, col);
        self.rows[row].get(&col).copied().unwrap_or_else(T::zero)
    }

    #[inline]
    fn assert_in_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols
        );
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> Dimensions {
        Dimensions::new(self.nrows, self.ncols)
    }

    /// Number of stored (nonzero) entries
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(HashMap::len).sum()
    }

    /// Nonzero `(col, value)` pairs of one row, columns ascending
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()`.
    pub fn row(&self, row: usize) -> Vec<(usize, T)> {
        let mut entries: Vec<(usize, T)> = self.rows[row].iter().map(|(&c, &v)| (c, v)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }

    /// Every nonzero `(row, col, value)`, row-major with columns ascending
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.nrows).flat_map(move |r| self.row(r).into_iter().map(move |(c, v)| (r, c, v)))
    }

    /// Swap rows and columns into a fresh matrix
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.ncols, self.nrows);
        for (r, entries) in self.rows.iter().enumerate() {
            for (&c, &v) in entries {
                transposed.rows[c].insert(r, v);
            }
        }
        transposed
    }
}

impl<T: MatrixElement> MatrixView for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.assert_in_bounds(row, col);
        self.rows[row].get(&col).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        self.row(row_index)
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        assert!(
            col_index < self.ncols,
            "column {col_index} out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(r, entries)| entries.get(&col_index).map(|&v| (r, v)))
            .collect()
    }
}

/// Flat interchange form used by the `serde` feature
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixRecord<T> {
    rows: usize,
    cols: usize,
    entries: Vec<(usize, usize, T)>,
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> From<SparseMatrix<T>> for MatrixRecord<T> {
    fn from(matrix: SparseMatrix<T>) -> Self {
        Self {
            rows: matrix.nrows,
            cols: matrix.ncols,
            entries: matrix.entries().collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> TryFrom<MatrixRecord<T>> for SparseMatrix<T> {
    type Error = DecodeError;

    fn try_from(record: MatrixRecord<T>) -> Result<Self, Self::Error> {
        SparseMatrix::from_entries(record.rows, record.cols, record.entries)
    }
}
