//! Index bounds validation against a declared shape

use crate::error::{DecodeError, DecodeErrorKind};
use crate::matrix::Dimensions;

/// Check that (`row`, `col`) addresses a cell of `shape`
///
/// Used while decoding, where an out-of-range entry is bad input rather
/// than a programming error. `line` is attached to the returned error.
pub const fn validate_position(
    shape: Dimensions,
    row: usize,
    col: usize,
    line: usize,
) -> Result<(), DecodeError> {
    if row >= shape.rows {
        return Err(DecodeError::new(line, DecodeErrorKind::RowOutOfBounds));
    }
    if col >= shape.cols {
        return Err(DecodeError::new(line, DecodeErrorKind::ColOutOfBounds));
    }
    Ok(())
}
