use clap::{Args, Parser, Subcommand, ValueEnum};
use spmat::{
    driver, exit_code, logging::init_tracing, read_matrix, run_interactive, Console, FileSink,
    MatrixFile, Operation, Result, RunConfig, SpmatError, SubtractMode,
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "spmat - add, subtract or multiply integer sparse matrices stored as text")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for the operation and both input files (default)
    Interactive {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run one operation without prompting
    Run {
        /// A|B|C, add|subtract|multiply or addition|subtraction|multiplication
        #[arg(value_parser = parse_operation)]
        operation: Operation,

        /// First operand file (used as given, `\` is not rewritten to `/`)
        lhs: PathBuf,

        /// Second operand file
        rhs: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the shape and stored-entry count of a matrix file
    Info {
        /// Matrix file
        path: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Directory receiving `<operation>_output.txt`
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Exact output file (overrides --output-dir)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keys visited by subtraction
    #[arg(long, value_enum, default_value_t = SubtractArg::KeyDriven)]
    subtract_mode: SubtractArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum SubtractArg {
    /// Only the second operand's entries
    KeyDriven,
    /// Entries of either operand
    Union,
}

impl From<SubtractArg> for SubtractMode {
    fn from(arg: SubtractArg) -> Self {
        match arg {
            SubtractArg::KeyDriven => SubtractMode::KeyDriven,
            SubtractArg::Union => SubtractMode::Union,
        }
    }
}

impl OutputArgs {
    fn to_config(&self) -> RunConfig {
        let config =
            RunConfig::with_output_dir(&self.output_dir).with_subtract_mode(self.subtract_mode.into());
        match &self.output {
            Some(path) => config.with_output_path(path),
            None => config,
        }
    }
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            output: None,
            subtract_mode: SubtractArg::KeyDriven,
        }
    }
}

fn parse_operation(s: &str) -> std::result::Result<Operation, String> {
    s.parse().map_err(|e: SpmatError| e.to_string())
}

fn handle_interactive(output: &OutputArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    run_interactive(&mut console, &output.to_config())?;
    Ok(())
}

fn handle_run(operation: Operation, lhs: PathBuf, rhs: PathBuf, output: &OutputArgs) -> Result<()> {
    let config = output.to_config();
    let mut selector = operation;
    let mut sink = FileSink::new(config.clone());
    driver::run(
        &mut selector,
        &MatrixFile::new(lhs),
        &MatrixFile::new(rhs),
        &mut sink,
        &config,
        &mut std::io::stdout(),
    )?;
    Ok(())
}

fn handle_info(path: PathBuf, json: bool) -> Result<()> {
    let summary = read_matrix(&path)?.summary();

    if json {
        #[cfg(feature = "serde")]
        {
            let rendered = serde_json::to_string_pretty(&summary).map_err(|e| SpmatError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            println!("{rendered}");
            return Ok(());
        }
        #[cfg(not(feature = "serde"))]
        eprintln!("JSON output requires the 'serde' feature; printing plain text");
    }

    println!("Matrix: {}", path.display());
    println!("  Dimensions: {} x {}", summary.rows, summary.cols);
    println!("  Stored entries: {}", summary.nnz);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        None => handle_interactive(&OutputArgs::default()),
        Some(Commands::Interactive { output }) => handle_interactive(&output),
        Some(Commands::Run {
            operation,
            lhs,
            rhs,
            output,
        }) => handle_run(operation, lhs, rhs, &output),
        Some(Commands::Info { path, json }) => handle_info(path, json),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}
