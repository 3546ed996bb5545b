//! Plain-text matrix format
//!
//! ```text
//! rows=<int>
//! cols=<int>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. They are trimmed and blank
//! lines are ignored anywhere in the document.
//! Element lines are applied with [`SparseMatrix::set_element`], so an
//! element outside the header shape grows the shape instead of failing.

use crate::validation::{parse_dimension_line, parse_element_line};
use crate::{Result, SparseMatrix, SpmatError};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

/// Header key for the row count
pub const ROWS_KEY: &str = "rows";
/// Header key for the column count
pub const COLS_KEY: &str = "cols";

/// Parse a matrix from its text form, also returning the header shape
///
/// The returned `(rows, cols)` is the shape declared by the header, before
/// any element line grew it.
pub fn parse_text(text: &str) -> Result<(SparseMatrix, (i64, i64))> {
    let lines: Vec<&str> = text
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(SpmatError::header(
            "expected `rows=<int>` and `cols=<int>` header lines",
        ));
    }

    let num_rows = parse_dimension_line(lines[0], ROWS_KEY)?;
    let num_cols = parse_dimension_line(lines[1], COLS_KEY)?;
    let mut matrix = SparseMatrix::new(num_rows, num_cols);

    for (index, line) in lines.iter().enumerate().skip(2) {
        let (row, col, value) = parse_element_line(line, index + 1)?;
        matrix.set_element(row, col, value);
    }

    Ok((matrix, (num_rows, num_cols)))
}

impl SparseMatrix {
    /// Parse a matrix from its text form
    pub fn from_text(text: &str) -> Result<Self> {
        parse_text(text).map(|(matrix, _)| matrix)
    }

    /// Render the matrix in its text form
    ///
    /// Entries are written in row-major order. There is no trailing newline.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{ROWS_KEY}={}\n{COLS_KEY}={}", self.num_rows(), self.num_cols())?;
        for (row, col, value) in self.entries_sorted() {
            write!(f, "\n({row}, {col}, {value})")?;
        }
        Ok(())
    }
}

impl FromStr for SparseMatrix {
    type Err = SpmatError;

    fn from_str(s: &str) -> Result<Self> {
        SparseMatrix::from_text(s)
    }
}
