//! Run configuration for the calculator

use spmat_core::{Operation, SubtractMode};
use std::path::{Path, PathBuf};

/// Suffix appended to the operation name to form the default output file
pub const OUTPUT_SUFFIX: &str = "_output.txt";

/// Where results go and how subtraction treats its operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory that receives `<operation>_output.txt`
    pub output_dir: PathBuf,
    /// Exact output file, overriding `output_dir`
    pub output_path: Option<PathBuf>,
    /// Key set visited by subtraction
    pub subtract_mode: SubtractMode,
}

impl RunConfig {
    /// Create config writing into `output_dir`
    pub fn with_output_dir<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Write the result to exactly `path`
    pub fn with_output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set subtraction semantics
    pub fn with_subtract_mode(mut self, mode: SubtractMode) -> Self {
        self.subtract_mode = mode;
        self
    }

    /// Output file for the result of `operation`
    pub fn output_path_for(&self, operation: Operation) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => self
                .output_dir
                .join(format!("{}{OUTPUT_SUFFIX}", operation.name())),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            output_path: None,
            subtract_mode: SubtractMode::KeyDriven,
        }
    }
}
