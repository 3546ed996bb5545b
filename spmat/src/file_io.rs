//! File I/O for matrix text files
//!
//! Reading and writing go through whole-file `std::fs` helpers, so the file
//! handle is closed on every path out of these functions, parse failures
//! included.

use spmat_core::{parse_text, MatrixSource, Result, SparseMatrix, SpmatError};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

fn io_error(path: &Path, err: io::Error) -> SpmatError {
    match err.kind() {
        io::ErrorKind::NotFound => SpmatError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => SpmatError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        },
    }
}

/// Load a matrix from a text file
///
/// Header errors are prefixed with the file path. The path is used as
/// given; `\` is not rewritten to `/`.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let (matrix, declared) = parse_text(&text).map_err(|err| match err {
        SpmatError::MalformedHeader { reason } => SpmatError::MalformedHeader {
            reason: format!("{}: {reason}", path.display()),
        },
        other => other,
    })?;

    if matrix.shape() != declared {
        warn!(
            path = %path.display(),
            "header declares {}x{} but elements extend the matrix to {}x{}",
            declared.0,
            declared.1,
            matrix.num_rows(),
            matrix.num_cols()
        );
    }
    debug!(
        path = %path.display(),
        rows = matrix.num_rows(),
        cols = matrix.num_cols(),
        nnz = matrix.nnz(),
        "read matrix"
    );

    Ok(matrix)
}

/// Write a matrix to a text file, replacing any existing file
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, matrix.to_text()).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), nnz = matrix.nnz(), "wrote matrix");
    Ok(())
}

/// Handle for a matrix text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFile {
    pub path: PathBuf,
}

impl MatrixFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the matrix stored in this file
    pub fn read(&self) -> Result<SparseMatrix> {
        read_matrix(&self.path)
    }

    /// Replace the file contents with `matrix`
    pub fn write(&self, matrix: &SparseMatrix) -> Result<()> {
        write_matrix(&self.path, matrix)
    }
}

impl MatrixSource for MatrixFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<SparseMatrix> {
        self.read()
    }
}
