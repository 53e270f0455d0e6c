//! Interactive driver: choose an operation, load two matrices, save the result
//!
//! The driver talks to the user through any `BufRead`/`Write` pair so it can
//! run against a terminal or against in-memory buffers in tests. Values
//! already supplied in [`RunConfig`] are not prompted for.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use spmat_core::{Dimensions, MatrixOp, SparseMatrix};
use tracing::info;

use crate::display::show;
use crate::error::{Error, Result};
use crate::file_io::MatrixFile;

const MENU: &str = "Select an operation:\n 1. Add\n 2. Subtract\n 3. Multiply";
const CHOICE_PROMPT: &str = "Your choice (1/2/3): ";
const LHS_PROMPT: &str = "Enter the first matrix file path: ";
const RHS_PROMPT: &str = "Enter the second matrix file path: ";
const OUTPUT_PROMPT: &str = "Enter filename to save result: ";

/// Answers known before the session starts
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub op: Option<MatrixOp>,
    pub lhs: Option<PathBuf>,
    pub rhs: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Print the result dump after saving
    pub show_result: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            op: None,
            lhs: None,
            rhs: None,
            output: None,
            show_result: true,
        }
    }
}

/// How a session ended when no error occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The result was written to `path`
    Saved {
        path: PathBuf,
        shape: Dimensions,
        nnz: usize,
    },
    /// The selector was not 1, 2 or 3; nothing was read or written
    InvalidChoice,
}

/// One prompt-and-compute session over an input/output pair
pub struct Session<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Run the session, printing any recoverable error as a single line
    ///
    /// Returns `None` when an error was reported.
    pub fn run_and_report(&mut self, config: &RunConfig) -> Option<Outcome> {
        match self.run(config) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                // Nothing more can be done if the terminal itself is gone
                let _ = writeln!(self.out, "An error occurred: {err}");
                None
            }
        }
    }

    /// Run the session and return the first error encountered
    pub fn run(&mut self, config: &RunConfig) -> Result<Outcome> {
        let op = match config.op {
            Some(op) => op,
            None => match self.choose_op()? {
                Some(op) => op,
                None => {
                    self.say("Invalid choice.")?;
                    return Ok(Outcome::InvalidChoice);
                }
            },
        };

        let lhs_path = self.path_or_prompt(config.lhs.as_deref(), LHS_PROMPT)?;
        let rhs_path = self.path_or_prompt(config.rhs.as_deref(), RHS_PROMPT)?;

        let lhs: SparseMatrix = MatrixFile::read_matrix(&lhs_path)?;
        let rhs: SparseMatrix = MatrixFile::read_matrix(&rhs_path)?;

        info!(%op, lhs = %lhs.shape(), rhs = %rhs.shape(), "applying operation");
        let result = op.apply(&lhs, &rhs)?;
        info!(shape = %result.shape(), nnz = result.nnz(), "operation complete");

        let output = self.path_or_prompt(config.output.as_deref(), OUTPUT_PROMPT)?;
        MatrixFile::write_matrix(&output, &result)?;

        self.say(&format!("Success: Results saved to '{}'.", output.display()))?;
        if config.show_result {
            self.say("\nResulting Matrix:")?;
            show(&result, &mut self.out).map_err(Error::Terminal)?;
        }

        Ok(Outcome::Saved {
            path: output,
            shape: result.shape(),
            nnz: result.nnz(),
        })
    }

    /// Show the menu and read a selector; `None` if it is not valid
    fn choose_op(&mut self) -> Result<Option<MatrixOp>> {
        self.say(MENU)?;
        let answer = self.prompt(CHOICE_PROMPT)?;
        Ok(answer.parse::<MatrixOp>().ok())
    }

    fn path_or_prompt(&mut self, given: Option<&Path>, message: &str) -> Result<PathBuf> {
        match given {
            Some(path) => Ok(path.to_path_buf()),
            None => self.prompt(message).map(PathBuf::from),
        }
    }

    /// Print `message` without a newline and read one trimmed answer
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.out, "{message}").map_err(Error::Terminal)?;
        self.out.flush().map_err(Error::Terminal)?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer).map_err(Error::Terminal)?;
        if read == 0 {
            return Err(Error::Terminal(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )));
        }
        Ok(answer.trim().to_string())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").map_err(Error::Terminal)
    }

    /// Give back the input and output handles
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.out)
    }
}
