//! Entry lines of the text matrix format, `(<row>,<col>,<value>)`

use core::fmt::Write;

use super::constants::{ENTRY_CLOSE, ENTRY_OPEN, ENTRY_SEPARATOR};
use crate::error::DecodeErrorKind;
use crate::traits::MatrixElement;
use crate::validation::{parse_index, parse_value};

/// Parse an entry line into `(row, col, value)`
///
/// The line must be wrapped in parentheses and hold exactly three
/// comma-separated fields with no whitespace. A wrong shape is
/// [`DecodeErrorKind::InvalidEntry`]; a field that is not a number is
/// [`DecodeErrorKind::InvalidNumber`]. Bounds are not checked here.
pub fn parse_entry<T: MatrixElement>(line: &str) -> Result<(usize, usize, T), DecodeErrorKind> {
    let inner = line
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(DecodeErrorKind::InvalidEntry)?;

    let mut fields = inner.split(ENTRY_SEPARATOR);
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(DecodeErrorKind::InvalidEntry);
    };

    Ok((parse_index(row)?, parse_index(col)?, parse_value(value)?))
}

/// Write one entry line terminated by `\n`
pub fn write_entry<W: Write, T: MatrixElement>(
    out: &mut W,
    row: usize,
    col: usize,
    value: T,
) -> core::fmt::Result {
    writeln!(out, "{ENTRY_OPEN}{row}{ENTRY_SEPARATOR}{col}{ENTRY_SEPARATOR}{value}{ENTRY_CLOSE}")
}
