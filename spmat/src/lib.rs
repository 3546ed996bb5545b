//! spmat - integer sparse matrix calculator
//!
//! Loads two matrices from plain-text files, adds, subtracts or multiplies
//! them, and writes the result back as text.
//!
//! ## Architecture
//!
//! - **spmat-core**: matrix type, arithmetic, text format and driver traits (no I/O)
//! - **spmat**: files, run configuration, the driver, console prompts and logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{read_matrix, write_matrix, Result};
//!
//! fn example() -> Result<()> {
//!     let a = read_matrix("a.txt")?;
//!     let b = read_matrix("b.txt")?;
//!     let product = a.multiply(&b)?;
//!     write_matrix("multiplication_output.txt", &product)?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use spmat_core::{
    // Matrix and arithmetic
    MatrixSummary, Operation, SparseMatrix, SubtractMode,
    // Driver traits
    MatrixSink, MatrixSource, OperationSelector,
    // Error handling
    ErrorCategory, Result, SpmatError,
};

pub mod config;
pub mod console;
pub mod driver;
pub mod file_io;
pub mod logging;

pub use config::RunConfig;
pub use console::{run_interactive, Console};
pub use driver::{exit_code, run, FileSink, RunReport};
pub use file_io::{read_matrix, write_matrix, MatrixFile};
