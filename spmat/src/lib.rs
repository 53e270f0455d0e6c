//! SPMAT - Sparse integer matrix arithmetic over text files
//!
//! This library adds file access and an interactive driver on top of
//! `spmat-core`.
//!
//! ## Architecture
//!
//! - **spmat-core**: Matrix model, arithmetic and the text codec (no I/O)
//! - **spmat**: File reader/writer, result dump, and the command line driver
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{MatrixFile, SparseMatrix};
//!
//! fn example() -> spmat::Result<()> {
//!     let a: SparseMatrix = MatrixFile::read_matrix("a.txt")?;
//!     let b: SparseMatrix = MatrixFile::read_matrix("b.txt")?;
//!
//!     let product = a.multiply(&b)?;
//!     MatrixFile::write_matrix("product.txt", &product)?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use spmat_core::{
    // Matrix model and operations
    add, multiply, subtract, Dimensions, MatrixOp, SparseMatrix,
    // Core traits
    MatrixElement, MatrixOperations, MatrixView,
    // Format
    decode, encode, to_text, LineDecoder,
    // Errors
    DecodeError, DecodeErrorKind, SpmatError,
};

pub mod cli;
pub mod display;
pub mod error;
pub mod file_io;

pub use cli::{Outcome, RunConfig, Session};
pub use display::{render, show};
pub use error::{Error, Result};
pub use file_io::MatrixFile;
