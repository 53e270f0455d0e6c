//! Abstract interfaces shared by the matrix implementation and its callers

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, MatrixView};
