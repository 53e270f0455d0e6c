//! Header lines of the text matrix format
//!
//! A file starts with exactly two header lines, in this order:
//!
//! ```text
//! rows=<row_count>
//! cols=<col_count>
//! ```

use core::fmt::Write;

use super::constants::{COLS_KEY, HEADER_SEPARATOR, ROWS_KEY};
use crate::error::DecodeErrorKind;
use crate::matrix::Dimensions;
use crate::validation::parse_index;

/// Parse a `key=<n>` header line and return `n`
///
/// The key must match exactly and the value must be a non-negative
/// integer; anything else is [`DecodeErrorKind::InvalidHeader`].
pub fn parse_header_line(line: &str, key: &str) -> Result<usize, DecodeErrorKind> {
    let (found, value) = line
        .split_once(HEADER_SEPARATOR)
        .ok_or(DecodeErrorKind::InvalidHeader)?;
    if found != key {
        return Err(DecodeErrorKind::InvalidHeader);
    }
    parse_index(value).map_err(|_| DecodeErrorKind::InvalidHeader)
}

pub fn parse_rows(line: &str) -> Result<usize, DecodeErrorKind> {
    parse_header_line(line, ROWS_KEY)
}

pub fn parse_cols(line: &str) -> Result<usize, DecodeErrorKind> {
    parse_header_line(line, COLS_KEY)
}

/// Write both header lines, each terminated by `\n`
pub fn write_header<W: Write>(out: &mut W, shape: Dimensions) -> core::fmt::Result {
    writeln!(out, "{ROWS_KEY}{HEADER_SEPARATOR}{}", shape.rows)?;
    writeln!(out, "{COLS_KEY}{HEADER_SEPARATOR}{}", shape.cols)
}
