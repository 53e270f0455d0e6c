//! Parsing utilities for the text matrix format
//!
//! Pure functions over `&str`; callers attach line numbers to the
//! returned [`DecodeErrorKind`].

use crate::error::DecodeErrorKind;
use crate::traits::MatrixElement;

/// Parse a non-negative index or dimension
///
/// Only ASCII digits are accepted: no sign, no whitespace, no empty string.
pub fn parse_index(s: &str) -> Result<usize, DecodeErrorKind> {
    if s.is_empty() {
        return Err(DecodeErrorKind::InvalidNumber);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(DecodeErrorKind::InvalidNumber);
        }

        let digit = (byte - b'0') as usize;

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(DecodeErrorKind::InvalidNumber)?;
    }

    Ok(result)
}

/// Parse a signed element value
///
/// Delegates to the element's `FromStr`, which rejects surrounding
/// whitespace and values that do not fit the element type.
pub fn parse_value<T: MatrixElement>(s: &str) -> Result<T, DecodeErrorKind> {
    s.parse::<T>().map_err(|_| DecodeErrorKind::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Ok(0));
        assert_eq!(parse_index("123"), Ok(123));
        assert_eq!(parse_index("007"), Ok(7));

        // Invalid cases
        assert_eq!(parse_index(""), Err(DecodeErrorKind::InvalidNumber));
        assert_eq!(parse_index("abc"), Err(DecodeErrorKind::InvalidNumber));
        assert_eq!(parse_index("12a"), Err(DecodeErrorKind::InvalidNumber));
        assert_eq!(parse_index("-1"), Err(DecodeErrorKind::InvalidNumber));
        assert_eq!(parse_index("+1"), Err(DecodeErrorKind::InvalidNumber));
        assert_eq!(parse_index(" 1"), Err(DecodeErrorKind::InvalidNumber));
        assert_eq!(
            parse_index("99999999999999999999999999"),
            Err(DecodeErrorKind::InvalidNumber)
        );
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<i64>("42"), Ok(42));
        assert_eq!(parse_value::<i64>("-42"), Ok(-42));
        assert_eq!(parse_value::<i64>("0"), Ok(0));

        assert_eq!(parse_value::<i64>(""), Err(DecodeErrorKind::InvalidNumber));
        assert_eq!(parse_value::<i64>("4 2"), Err(DecodeErrorKind::InvalidNumber));
        assert_eq!(parse_value::<i64>("1.5"), Err(DecodeErrorKind::InvalidNumber));
        assert_eq!(parse_value::<i32>("3000000000"), Err(DecodeErrorKind::InvalidNumber));
    }
}
