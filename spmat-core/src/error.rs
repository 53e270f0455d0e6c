//! Error types for sparse matrix operations

use crate::matrix::Dimensions;
use crate::ops::MatrixOp;

/// Errors that can occur while combining or decoding matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        op: MatrixOp,
        lhs: Dimensions,
        rhs: Dimensions,
    },
    /// The text representation of a matrix could not be decoded
    Decode(DecodeError),
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "Matrix dimensions do not match for {}: {lhs} vs {rhs}",
                op.noun()
            ),
            SpmatError::Decode(err) => write!(f, "{err}"),
        }
    }
}

impl core::error::Error for SpmatError {}

impl From<DecodeError> for SpmatError {
    fn from(err: DecodeError) -> Self {
        SpmatError::Decode(err)
    }
}

/// What went wrong on a line of a matrix file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Input ended before the `rows=` / `cols=` header
    MissingHeader,
    /// Header line is not `rows=<n>` / `cols=<n>` in that order
    InvalidHeader,
    /// Entry line is not `(<row>,<col>,<value>)`
    InvalidEntry,
    /// A numeric field failed to parse
    InvalidNumber,
    /// Entry row is not below the declared row count
    RowOutOfBounds,
    /// Entry column is not below the declared column count
    ColOutOfBounds,
    /// Declared row count cannot be allocated
    TooLarge,
}

impl DecodeErrorKind {
    fn describe(&self) -> &'static str {
        match self {
            DecodeErrorKind::MissingHeader => "missing rows/cols header",
            DecodeErrorKind::InvalidHeader => "malformed header",
            DecodeErrorKind::InvalidEntry => "malformed entry",
            DecodeErrorKind::InvalidNumber => "invalid number",
            DecodeErrorKind::RowOutOfBounds => "row index out of bounds",
            DecodeErrorKind::ColOutOfBounds => "column index out of bounds",
            DecodeErrorKind::TooLarge => "matrix dimensions too large",
        }
    }
}

/// Decoding failure with the 1-based line it occurred on
///
/// `line` is 0 when the input ended before the line could be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    pub line: usize,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub const fn new(line: usize, kind: DecodeErrorKind) -> Self {
        Self { line, kind }
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.line == 0 {
            write!(f, "Decode error: {}", self.kind.describe())
        } else {
            write!(f, "Decode error on line {}: {}", self.line, self.kind.describe())
        }
    }
}

impl core::error::Error for DecodeError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
