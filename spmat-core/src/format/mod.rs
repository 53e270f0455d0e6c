//! Line-oriented text format for sparse matrices
//!
//! ```text
//! rows=<row_count>
//! cols=<col_count>
//! (<row>,<col>,<value>)
//! ...
//! ```
//!
//! Blank lines are ignored when reading. Entries are applied in order
//! through `set_value`, so a later entry for the same cell wins and an
//! explicit zero deletes. Any malformed line fails the whole decode.
//! Writing emits nonzeros only, row-major with columns ascending, so the
//! output is deterministic.
//!
//! This module is pure: callers own the files.

pub mod constants;
pub mod entry;
pub mod header;

use alloc::string::String;
use core::fmt::Write;

use crate::error::{DecodeError, DecodeErrorKind};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

pub use entry::{parse_entry, write_entry};
pub use header::{parse_cols, parse_rows, write_header};

enum DecoderState<T: MatrixElement> {
    ExpectRows,
    ExpectCols { rows: usize },
    Entries(SparseMatrix<T>),
}

/// Incremental decoder fed one line at a time
///
/// Lets file readers decode straight from a buffered reader without
/// holding the whole file in memory. Errors carry the line number the
/// caller passed in.
pub struct LineDecoder<T: MatrixElement = i64> {
    state: DecoderState<T>,
}

impl<T: MatrixElement> Default for LineDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MatrixElement> LineDecoder<T> {
    pub fn new() -> Self {
        Self {
            state: DecoderState::ExpectRows,
        }
    }

    /// Process one raw line (1-based `line_number`)
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn process_line(&mut self, line_number: usize, line: &str) -> Result<(), DecodeError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        let at = |kind| DecodeError::new(line_number, kind);

        match &mut self.state {
            DecoderState::ExpectRows => {
                let rows = parse_rows(line).map_err(at)?;
                self.state = DecoderState::ExpectCols { rows };
            }
            DecoderState::ExpectCols { rows } => {
                let rows = *rows;
                let cols = parse_cols(line).map_err(at)?;
                let matrix = SparseMatrix::try_new(rows, cols)
                    .map_err(|_| at(DecodeErrorKind::TooLarge))?;
                self.state = DecoderState::Entries(matrix);
            }
            DecoderState::Entries(matrix) => {
                let (row, col, value) = parse_entry(line).map_err(at)?;
                matrix.try_set_value(row, col, value, line_number)?;
            }
        }
        Ok(())
    }

    /// Finish decoding and return the matrix
    ///
    /// Fails with [`DecodeErrorKind::MissingHeader`] if either header line
    /// never arrived.
    pub fn finalize(self) -> Result<SparseMatrix<T>, DecodeError> {
        match self.state {
            DecoderState::Entries(matrix) => Ok(matrix),
            _ => Err(DecodeError::new(0, DecodeErrorKind::MissingHeader)),
        }
    }
}

/// Decode a complete text representation
pub fn decode<T: MatrixElement>(input: &str) -> Result<SparseMatrix<T>, DecodeError> {
    let mut decoder = LineDecoder::new();
    for (index, line) in input.lines().enumerate() {
        decoder.process_line(index + 1, line)?;
    }
    decoder.finalize()
}

/// Encode `matrix` into `out`
pub fn encode<T: MatrixElement, W: Write>(matrix: &SparseMatrix<T>, out: &mut W) -> core::fmt::Result {
    write_header(out, matrix.shape())?;
    for (row, col, value) in matrix.entries() {
        write_entry(out, row, col, value)?;
    }
    Ok(())
}

/// Encode `matrix` into a new string
pub fn to_text<T: MatrixElement>(matrix: &SparseMatrix<T>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = encode(matrix, &mut out);
    out
}

impl<T: MatrixElement> core::fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        encode(self, f)
    }
}

impl<T: MatrixElement> core::str::FromStr for SparseMatrix<T> {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MatrixView;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_decode_basic() {
        let m: SparseMatrix = decode("rows=2\ncols=3\n(0,0,1)\n(1,2,-4)\n").unwrap();
        assert_eq!(m.dimensions(), (2, 3));
        assert_eq!(m.get_value(0, 0), 1);
        assert_eq!(m.get_value(1, 2), -4);
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_decode_header_only() {
        let m: SparseMatrix = decode("rows=3\ncols=3\n").unwrap();
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_decode_ignores_blank_lines_and_padding() {
        let m: SparseMatrix = decode("\n  rows=2\r\n\ncols=2\n\n  (1,1,9)  \n\n").unwrap();
        assert_eq!(m.get_value(1, 1), 9);
    }

    #[test]
    fn test_decode_last_write_wins() {
        let m: SparseMatrix = decode("rows=2\ncols=2\n(0,0,5)\n(0,0,0)\n").unwrap();
        assert_eq!(m.get_value(0, 0), 0);
        assert_eq!(m.nnz(), 0);

        let m: SparseMatrix = decode("rows=2\ncols=2\n(0,1,5)\n(0,1,6)\n").unwrap();
        assert_eq!(m.get_value(0, 1), 6);
    }

    #[test]
    fn test_decode_wrong_arity_fails() {
        let err = decode::<i64>("rows=2\ncols=3\n(0,0,1)\n(1,2)\n").unwrap_err();
        assert_eq!(err, DecodeError::new(4, DecodeErrorKind::InvalidEntry));
    }

    #[test]
    fn test_decode_out_of_bounds_fails() {
        let err = decode::<i64>("rows=2\ncols=2\n(2,0,1)\n").unwrap_err();
        assert_eq!(err, DecodeError::new(3, DecodeErrorKind::RowOutOfBounds));

        let err = decode::<i64>("rows=2\ncols=2\n\n(0,2,1)\n").unwrap_err();
        assert_eq!(err, DecodeError::new(4, DecodeErrorKind::ColOutOfBounds));
    }

    #[test]
    fn test_decode_header_errors() {
        let err = decode::<i64>("cols=2\nrows=2\n").unwrap_err();
        assert_eq!(err, DecodeError::new(1, DecodeErrorKind::InvalidHeader));

        let err = decode::<i64>("rows=2\n(0,0,1)\n").unwrap_err();
        assert_eq!(err, DecodeError::new(2, DecodeErrorKind::InvalidHeader));

        let err = decode::<i64>("").unwrap_err();
        assert_eq!(err, DecodeError::new(0, DecodeErrorKind::MissingHeader));

        let err = decode::<i64>("rows=2\n\n").unwrap_err();
        assert_eq!(err, DecodeError::new(0, DecodeErrorKind::MissingHeader));
    }

    #[test]
    fn test_decode_huge_row_count_fails() {
        let err = decode::<i64>("rows=18446744073709551615\ncols=1\n").unwrap_err();
        assert_eq!(err, DecodeError::new(2, DecodeErrorKind::TooLarge));

        let err = decode::<i64>("rows=9223372036854775807\n\ncols=2\n(0,0,1)\n").unwrap_err();
        assert_eq!(err, DecodeError::new(3, DecodeErrorKind::TooLarge));
    }

    #[test]
    fn test_encode_sorted() {
        let mut m: SparseMatrix = SparseMatrix::new(3, 4);
        m.set_value(2, 1, 8);
        m.set_value(0, 3, 1);
        m.set_value(0, 0, -2);
        m.set_value(1, 2, 5);
        m.set_value(1, 2, 0);
        assert_eq!(to_text(&m), "rows=3\ncols=4\n(0,0,-2)\n(0,3,1)\n(2,1,8)\n");
        assert_eq!(m.to_string(), to_text(&m));
    }

    #[test]
    fn test_round_trip() {
        let m: SparseMatrix =
            SparseMatrix::from_entries(4, 4, vec![(3, 3, 1), (0, 2, -7), (2, 0, 11), (0, 1, 4)])
                .unwrap();
        let decoded: SparseMatrix = to_text(&m).parse().unwrap();
        assert_eq!(decoded, m);
        assert_eq!(
            decoded.entries().collect::<Vec<_>>(),
            m.entries().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_line_decoder_incremental() {
        let mut decoder = LineDecoder::<i32>::new();
        decoder.process_line(1, "rows=1").unwrap();
        decoder.process_line(2, "cols=2").unwrap();
        decoder.process_line(3, "(0,1,3)").unwrap();
        let m = decoder.finalize().unwrap();
        assert_eq!(m.get_value(0, 1), 3);
    }
}
