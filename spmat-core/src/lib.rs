#![no_std]

//! spmat core - integer sparse matrix definitions
//!
//! This crate provides the sparse matrix type, its arithmetic, the plain-text
//! format and the traits the calculator driver is built on. It performs no
//! I/O.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{parse_text, COLS_KEY, ROWS_KEY};
pub use matrix::{Coord, Iter, MatrixSummary, SparseMatrix};
pub use ops::{Operation, SubtractMode};
pub use traits::*;
