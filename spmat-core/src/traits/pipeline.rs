//! Source, selector and sink traits used by the calculator driver

use crate::{Operation, Result, SparseMatrix};
use alloc::format;
use alloc::string::String;

/// Something that can produce an operand matrix
pub trait MatrixSource {
    /// Short description for progress messages, such as a file path
    fn describe(&self) -> String;

    /// Produce the matrix
    ///
    /// Called once per run; failures abort the run.
    fn load(&self) -> Result<SparseMatrix>;
}

/// Something that decides which operation to run
pub trait OperationSelector {
    fn select_operation(&mut self) -> Result<Operation>;
}

/// Destination for the result of an operation
pub trait MatrixSink {
    /// Store `result` of `operation` and return a description of where it went
    fn store(&mut self, operation: Operation, result: &SparseMatrix) -> Result<String>;
}

impl MatrixSource for SparseMatrix {
    fn describe(&self) -> String {
        format!("in-memory {}x{} matrix", self.num_rows(), self.num_cols())
    }

    fn load(&self) -> Result<SparseMatrix> {
        Ok(self.clone())
    }
}

impl OperationSelector for Operation {
    fn select_operation(&mut self) -> Result<Operation> {
        Ok(*self)
    }
}
