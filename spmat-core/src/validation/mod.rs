//! Line-level validation for the matrix text format
//!
//! Pure parsing functions with no I/O dependencies. Each function looks at a
//! single trimmed, non-blank line and either yields typed values or the
//! matching [`SpmatError`](crate::SpmatError).

pub mod parsing;

pub use parsing::{parse_dimension_line, parse_element_line, parse_integer};
