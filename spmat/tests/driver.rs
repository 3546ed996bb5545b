use spmat::{
    run, run_interactive, Console, FileSink, MatrixFile, Operation, RunConfig, SpmatError,
    SubtractMode,
};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

const MATRIX_A: &str = "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n(1, 0, 3)\n(1, 1, 4)\n";
const IDENTITY: &str = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 1)\n";

fn write_inputs(dir: &Path) -> (MatrixFile, MatrixFile) {
    let a = dir.join("a.txt");
    let b = dir.join("b.txt");
    fs::write(&a, MATRIX_A).unwrap();
    fs::write(&b, IDENTITY).unwrap();
    (MatrixFile::new(a), MatrixFile::new(b))
}

fn run_files(operation: Operation, config: &RunConfig, dir: &Path) -> String {
    let (a, b) = write_inputs(dir);
    let mut selector = operation;
    let mut sink = FileSink::new(config.clone());
    let report = run(
        &mut selector,
        &a,
        &b,
        &mut sink,
        config,
        &mut std::io::sink(),
    )
    .unwrap();
    fs::read_to_string(report.destination).unwrap()
}

#[test]
fn test_addition_file() {
    let dir = tempdir().unwrap();
    let config = RunConfig::with_output_dir(dir.path());
    assert_eq!(
        run_files(Operation::Add, &config, dir.path()),
        "rows=2\ncols=2\n(0, 0, 2)\n(0, 1, 2)\n(1, 0, 3)\n(1, 1, 5)"
    );
    assert!(dir.path().join("addition_output.txt").exists());
}

#[test]
fn test_multiplication_by_identity_file() {
    let dir = tempdir().unwrap();
    let config = RunConfig::with_output_dir(dir.path());
    assert_eq!(
        run_files(Operation::Multiply, &config, dir.path()),
        MATRIX_A.trim_end()
    );
    assert!(dir.path().join("multiplication_output.txt").exists());
}

#[test]
fn test_subtraction_modes_file() {
    let dir = tempdir().unwrap();
    let config = RunConfig::with_output_dir(dir.path());
    assert_eq!(
        run_files(Operation::Subtract, &config, dir.path()),
        "rows=2\ncols=2\n(0, 0, 0)\n(1, 1, 3)"
    );

    let config = config
        .with_subtract_mode(SubtractMode::Union)
        .with_output_path(dir.path().join("union.txt"));
    assert_eq!(
        run_files(Operation::Subtract, &config, dir.path()),
        "rows=2\ncols=2\n(0, 0, 0)\n(0, 1, 2)\n(1, 0, 3)\n(1, 1, 3)"
    );
}

#[test]
fn test_interactive_session() {
    let dir = tempdir().unwrap();
    let (a, b) = write_inputs(dir.path());
    let input = format!("A\n{}\n{}\n", a.path.display(), b.path.display());

    let mut out = Vec::new();
    let mut console = Console::new(Cursor::new(input), &mut out);
    let report = run_interactive(&mut console, &RunConfig::with_output_dir(dir.path())).unwrap();
    assert_eq!(report.operation, Operation::Add);
    assert_eq!(report.lhs.nnz, 4);
    assert_eq!(report.rhs.nnz, 2);

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Enter path for the first matrix file: "));
    assert!(transcript.contains("Enter path for the second matrix file: "));
    assert!(transcript.contains(&format!("Loading first matrix from {}...", a.path.display())));
    assert!(transcript.contains(&format!("Loading second matrix from {}...", b.path.display())));
    assert!(transcript.contains("Performing addition..."));
    assert!(transcript.contains("Operation completed successfully."));
    assert!(dir.path().join("addition_output.txt").exists());
}

#[test]
fn test_interactive_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let input = format!("C\n{}\n{}\n", missing.display(), missing.display());

    let mut console = Console::new(Cursor::new(input), std::io::sink());
    let err = run_interactive(&mut console, &RunConfig::with_output_dir(dir.path())).unwrap_err();
    assert_eq!(
        err,
        SpmatError::FileNotFound {
            path: missing.display().to_string()
        }
    );
    assert!(!dir.path().join("multiplication_output.txt").exists());
}

#[test]
fn test_shape_mismatch_writes_nothing() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let c = dir.path().join("c.txt");
    fs::write(&a, MATRIX_A).unwrap();
    fs::write(&c, "rows=3\ncols=3\n(2, 2, 1)\n").unwrap();

    let config = RunConfig::with_output_dir(dir.path());
    let err = run(
        &mut Operation::Add,
        &MatrixFile::new(&a),
        &MatrixFile::new(&c),
        &mut FileSink::new(config.clone()),
        &config,
        &mut std::io::sink(),
    )
    .unwrap_err();
    assert!(matches!(err, SpmatError::DimensionMismatch { .. }));
    assert!(!dir.path().join("addition_output.txt").exists());
}
