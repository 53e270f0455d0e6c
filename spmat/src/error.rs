//! Error types for file and command line operations

use std::io;
use std::path::{Path, PathBuf};

use spmat_core::{DecodeError, SpmatError};
use thiserror::Error;

/// Result type for spmat operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be opened, read, written or renamed
    #[error("{action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A matrix file was read but its contents are malformed
    #[error("{} in '{}'", .error, .path.display())]
    Decode { path: PathBuf, error: DecodeError },

    /// Operands are incompatible
    #[error(transparent)]
    Matrix(#[from] SpmatError),

    /// Prompting on, or printing to, the terminal failed
    #[error("Terminal I/O failed: {0}")]
    Terminal(#[source] io::Error),

    #[cfg(feature = "serde")]
    #[error("Invalid JSON matrix in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        Error::Matrix(error.into())
    }
}

impl Error {
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Error::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn decode(path: &Path, error: DecodeError) -> Self {
        Error::Decode {
            path: path.to_path_buf(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::{DecodeErrorKind, Dimensions, MatrixOp};

    #[test]
    fn test_io_message() {
        let err = Error::io(
            "Failed to open",
            Path::new("a.txt"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "Failed to open 'a.txt': no such file");
    }

    #[test]
    fn test_decode_message() {
        let err = Error::decode(
            Path::new("m.txt"),
            DecodeError::new(3, DecodeErrorKind::InvalidEntry),
        );
        assert_eq!(err.to_string(), "Decode error on line 3: malformed entry in 'm.txt'");
    }

    #[test]
    fn test_matrix_message_is_transparent() {
        let err: Error = SpmatError::DimensionMismatch {
            op: MatrixOp::Add,
            lhs: Dimensions::new(2, 3),
            rhs: Dimensions::new(2, 2),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Matrix dimensions do not match for addition: 2x3 vs 2x2"
        );
    }
}
