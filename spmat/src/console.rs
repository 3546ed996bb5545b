//! Interactive console front end
//!
//! Presents the operation menu, reads the choice and two file paths, and
//! then hands over to [`driver::run`](crate::driver::run).

use crate::config::RunConfig;
use crate::driver::{self, FileSink, RunReport};
use crate::file_io::MatrixFile;
use spmat_core::{Operation, OperationSelector, Result, SpmatError};
use std::io::{BufRead, Write};

/// Prompting wrapper around an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

fn console_error(e: std::io::Error) -> SpmatError {
    SpmatError::Io {
        path: "<console>".to_string(),
        message: e.to_string(),
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line, without its line terminator
    ///
    /// End of input yields an empty answer.
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").map_err(console_error)?;
        self.output.flush().map_err(console_error)?;

        let mut line = String::new();
        self.input.read_line(&mut line).map_err(console_error)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "MATRIX Operations: ").map_err(console_error)?;
        for op in Operation::ALL {
            let name = op.name();
            let mut title = name[..1].to_uppercase();
            title.push_str(&name[1..]);
            writeln!(self.output, "({}) {title}", op.choice()).map_err(console_error)?;
        }
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

impl<R: BufRead, W: Write> OperationSelector for Console<R, W> {
    fn select_operation(&mut self) -> Result<Operation> {
        self.print_menu()?;
        let choice = self.prompt("Choose operation (A,B,C): ")?;
        Operation::from_choice(&choice)
    }
}

/// Run one interactive session: menu, choice, two paths, result file
///
/// The choice is validated before the paths are asked for.
pub fn run_interactive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &RunConfig,
) -> Result<RunReport> {
    let mut operation = console.select_operation()?;
    let first = MatrixFile::new(console.prompt("Enter path for the first matrix file: ")?);
    let second = MatrixFile::new(console.prompt("Enter path for the second matrix file: ")?);

    let mut sink = FileSink::new(config.clone());
    driver::run(
        &mut operation,
        &first,
        &second,
        &mut sink,
        config,
        console.output(),
    )
}
