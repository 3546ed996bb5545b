//! Calculator driver
//!
//! Wires an [`OperationSelector`], two [`MatrixSource`]s and a
//! [`MatrixSink`] together. User-facing progress lines go to a writer; the
//! driver itself never reads from the console.

use crate::config::RunConfig;
use crate::file_io::write_matrix;
use spmat_core::{
    ErrorCategory, MatrixSink, MatrixSource, MatrixSummary, Operation, OperationSelector, Result,
    SparseMatrix, SpmatError,
};
use std::io::Write;
use tracing::info;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub operation: Operation,
    pub lhs: MatrixSummary,
    pub rhs: MatrixSummary,
    pub result: MatrixSummary,
    /// Where the sink put the result
    pub destination: String,
}

/// Sink writing results to the file named by a [`RunConfig`]
#[derive(Debug, Clone, Default)]
pub struct FileSink {
    config: RunConfig,
}

impl FileSink {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }
}

impl MatrixSink for FileSink {
    fn store(&mut self, operation: Operation, result: &SparseMatrix) -> Result<String> {
        let path = self.config.output_path_for(operation);
        write_matrix(&path, result)?;
        Ok(path.display().to_string())
    }
}

fn say<W: Write>(out: &mut W, message: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{message}").map_err(|e| SpmatError::Io {
        path: "<console>".to_string(),
        message: e.to_string(),
    })
}

fn load_operand<W: Write>(
    source: &dyn MatrixSource,
    ordinal: &str,
    progress: &mut W,
) -> Result<SparseMatrix> {
    say(
        progress,
        format_args!("Loading {ordinal} matrix from {}...", source.describe()),
    )?;
    let matrix = source.load()?;
    say(
        progress,
        format_args!(
            "Loaded matrix of size {}x{} successfully",
            matrix.num_rows(),
            matrix.num_cols()
        ),
    )?;
    Ok(matrix)
}

/// Run one calculation
///
/// Selects the operation, loads both operands, applies the operation and
/// hands the result to `sink`. The first failure aborts the run and is
/// returned unchanged.
pub fn run<W: Write>(
    selector: &mut dyn OperationSelector,
    lhs: &dyn MatrixSource,
    rhs: &dyn MatrixSource,
    sink: &mut dyn MatrixSink,
    config: &RunConfig,
    progress: &mut W,
) -> Result<RunReport> {
    let operation = selector.select_operation()?;

    let lhs_matrix = load_operand(lhs, "first", progress)?;
    let rhs_matrix = load_operand(rhs, "second", progress)?;

    say(progress, format_args!("Performing {operation}..."))?;
    let result = operation.apply(&lhs_matrix, &rhs_matrix, config.subtract_mode)?;
    info!(
        operation = operation.method(),
        rows = result.num_rows(),
        cols = result.num_cols(),
        nnz = result.nnz(),
        "computed result"
    );

    let destination = sink.store(operation, &result)?;
    say(
        progress,
        format_args!("Operation completed successfully. Output saved to {destination}."),
    )?;

    Ok(RunReport {
        operation,
        lhs: lhs_matrix.summary(),
        rhs: rhs_matrix.summary(),
        result: result.summary(),
        destination,
    })
}

/// Process exit status for an error
pub fn exit_code(err: &SpmatError) -> u8 {
    match err.category() {
        ErrorCategory::Usage => 2,
        ErrorCategory::Input => 3,
        ErrorCategory::Format => 4,
        ErrorCategory::Shape => 5,
        ErrorCategory::Arithmetic => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Collect(Vec<(Operation, SparseMatrix)>);

    impl MatrixSink for Collect {
        fn store(&mut self, operation: Operation, result: &SparseMatrix) -> Result<String> {
            self.0.push((operation, result.clone()));
            Ok(format!("memory[{}]", self.0.len() - 1))
        }
    }

    fn sample_a() -> SparseMatrix {
        SparseMatrix::from_triples(2, 2, [(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)])
    }

    fn identity() -> SparseMatrix {
        SparseMatrix::from_triples(2, 2, [(0, 0, 1), (1, 1, 1)])
    }

    #[test]
    fn test_run_in_memory() {
        let mut sink = Collect::default();
        let mut progress = Vec::new();
        let report = run(
            &mut Operation::Add,
            &sample_a(),
            &identity(),
            &mut sink,
            &RunConfig::default(),
            &mut progress,
        )
        .unwrap();

        assert_eq!(report.operation, Operation::Add);
        assert_eq!(report.destination, "memory[0]");
        assert_eq!(report.result.nnz, 4);
        assert_eq!(
            sink.0[0].1.entries_sorted(),
            vec![(0, 0, 2), (0, 1, 2), (1, 0, 3), (1, 1, 5)]
        );

        let text = String::from_utf8(progress).unwrap();
        assert!(text.contains("Loading first matrix from in-memory 2x2 matrix..."));
        assert!(text.contains("Loaded matrix of size 2x2 successfully"));
        assert!(text.contains("Performing addition..."));
        assert!(text.ends_with("Operation completed successfully. Output saved to memory[0].\n"));
    }

    #[test]
    fn test_run_uses_configured_subtract_mode() {
        let mut sink = Collect::default();
        let config = RunConfig::default().with_subtract_mode(spmat_core::SubtractMode::Union);
        run(
            &mut Operation::Subtract,
            &sample_a(),
            &identity(),
            &mut sink,
            &config,
            &mut std::io::sink(),
        )
        .unwrap();
        assert_eq!(sink.0[0].1.nnz(), 4);
    }

    #[test]
    fn test_run_stops_at_first_error() {
        let mut sink = Collect::default();
        let err = run(
            &mut Operation::Add,
            &sample_a(),
            &SparseMatrix::new(3, 3),
            &mut sink,
            &RunConfig::default(),
            &mut std::io::sink(),
        )
        .unwrap_err();
        assert!(matches!(err, SpmatError::DimensionMismatch { .. }));
        assert_eq!(exit_code(&err), 5);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            exit_code(&SpmatError::InvalidOperationChoice {
                choice: "Z".into()
            }),
            2
        );
        assert_eq!(
            exit_code(&SpmatError::FileNotFound { path: "x".into() }),
            3
        );
        assert_eq!(exit_code(&SpmatError::header("bad")), 4);
        assert_eq!(
            exit_code(&SpmatError::ArithmeticOverflow { row: 0, col: 0 }),
            6
        );
    }
}
