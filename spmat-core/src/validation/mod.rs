//! Validation utilities for the text matrix format
//!
//! Pure functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::validate_position;
pub use parsing::{parse_index, parse_value};
