//! Parsing utilities for matrix text lines
//!
//! This module parses the two header lines (`rows=<int>`, `cols=<int>`) and
//! the `(row, col, value)` element lines of the matrix text format.

use crate::{Result, SpmatError};
use alloc::format;
use alloc::string::ToString;

/// Parse a signed integer field, ignoring surrounding whitespace
pub fn parse_integer(field: &str) -> Option<i64> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    field.parse::<i64>().ok()
}

/// Parse a dimension header line of the form `<key>=<int>`
///
/// Only the segment between the first and second `=` is parsed; the text
/// before the first `=` is not checked against `key`, which is used only
/// in error messages.
pub fn parse_dimension_line(line: &str, key: &str) -> Result<i64> {
    let value = line
        .split('=')
        .nth(1)
        .ok_or_else(|| SpmatError::header(format!("expected `{key}=<int>`, found {line:?}")))?;

    parse_integer(value)
        .ok_or_else(|| SpmatError::header(format!("{key} value {:?} is not an integer", value.trim())))
}

/// Parse an element line of the form `(row, col, value)`
///
/// `line_number` is reported in errors and counts non-blank lines from 1.
/// Fields after the third are ignored.
pub fn parse_element_line(line: &str, line_number: usize) -> Result<(i64, i64, i64)> {
    let malformed = || SpmatError::MalformedElementLine {
        line_number,
        line: line.to_string(),
    };

    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let mut fields = inner.split(',');
    let mut next_field = || fields.next().and_then(parse_integer).ok_or_else(malformed);

    let row = next_field()?;
    let col = next_field()?;
    let value = next_field()?;

    Ok((row, col, value))
}
