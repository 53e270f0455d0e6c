#![no_std]

//! SPMAT Core - Sparse Integer Matrix Definitions
//!
//! This crate provides the sparse matrix model, its arithmetic, and the
//! text format codec. It performs no I/O; the `spmat` crate owns files and
//! the command line.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{decode, encode, to_text, LineDecoder};
pub use matrix::{Dimensions, SparseMatrix};
pub use ops::{add, multiply, subtract, MatrixOp, UnknownOp};
pub use traits::{MatrixElement, MatrixOperations, MatrixView};
