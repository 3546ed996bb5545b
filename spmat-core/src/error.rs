//! Error types for sparse matrix operations

use alloc::string::String;

/// Errors that can occur while loading, combining or storing matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpmatError {
    /// Matrix file path does not resolve to a readable file
    FileNotFound { path: String },
    /// Any other failure while reading or writing a matrix file
    Io { path: String, message: String },
    /// The `rows=`/`cols=` header is missing or not an integer
    MalformedHeader { reason: String },
    /// A body line is not a parenthesised `(row, col, value)` triple
    MalformedElementLine { line_number: usize, line: String },
    /// Operand shapes are incompatible with the requested operation
    DimensionMismatch {
        operation: &'static str,
        lhs: (i64, i64),
        rhs: (i64, i64),
    },
    /// Operation selector outside of `A`, `B`, `C`
    InvalidOperationChoice { choice: String },
    /// An entry of the result does not fit in an `i64`
    ArithmeticOverflow { row: i64, col: i64 },
}

/// Coarse classification of [`SpmatError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Input could not be read at all
    Input,
    /// Input was read but is not in the matrix text format
    Format,
    /// Operand shapes do not agree
    Shape,
    /// Caller asked for something that does not exist
    Usage,
    /// Result values left the integer range
    Arithmetic,
}

impl SpmatError {
    /// Shorthand for a header failure
    pub fn header(reason: impl Into<String>) -> Self {
        SpmatError::MalformedHeader {
            reason: reason.into(),
        }
    }

    /// Category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::FileNotFound { .. } | SpmatError::Io { .. } => ErrorCategory::Input,
            SpmatError::MalformedHeader { .. } | SpmatError::MalformedElementLine { .. } => {
                ErrorCategory::Format
            }
            SpmatError::DimensionMismatch { .. } => ErrorCategory::Shape,
            SpmatError::InvalidOperationChoice { .. } => ErrorCategory::Usage,
            SpmatError::ArithmeticOverflow { .. } => ErrorCategory::Arithmetic,
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::FileNotFound { path } => write!(f, "File not found: {path}"),
            SpmatError::Io { path, message } => write!(f, "I/O error on {path}: {message}"),
            SpmatError::MalformedHeader { reason } => {
                write!(f, "Invalid matrix dimensions: {reason}")
            }
            SpmatError::MalformedElementLine { line_number, line } => {
                write!(f, "Invalid matrix element format on line {line_number}: {line}")
            }
            SpmatError::DimensionMismatch {
                operation,
                lhs,
                rhs,
            } => write!(
                f,
                "Cannot {operation} matrices of dimensions {}x{} and {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            SpmatError::InvalidOperationChoice { choice } => {
                write!(f, "Invalid option: {choice:?} (expected A, B or C)")
            }
            SpmatError::ArithmeticOverflow { row, col } => {
                write!(f, "Integer overflow computing entry ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
