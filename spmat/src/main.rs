//! spmat: add, subtract or multiply two sparse matrix files.
//!
//! Anything not given as a flag is asked for interactively.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use spmat::{MatrixOp, Outcome, RunConfig, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spmat",
    version,
    about = "Sparse matrix arithmetic on text matrix files",
    long_about = "Adds, subtracts or multiplies two matrices stored as\n\
                  rows=<n> / cols=<n> / (row,col,value) text files and saves the result."
)]
struct Cli {
    /// Operation: add, subtract, multiply (or 1, 2, 3)
    #[arg(long, value_parser = parse_op)]
    op: Option<MatrixOp>,

    /// First (left) matrix file
    #[arg(long)]
    lhs: Option<PathBuf>,

    /// Second (right) matrix file
    #[arg(long)]
    rhs: Option<PathBuf>,

    /// Where to save the result
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not print the resulting matrix
    #[arg(short, long)]
    quiet: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_op(s: &str) -> Result<MatrixOp, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("spmat v{}", env!("CARGO_PKG_VERSION"));

    let config = RunConfig {
        op: cli.op,
        lhs: cli.lhs,
        rhs: cli.rhs,
        output: cli.output,
        show_result: !cli.quiet,
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock());
    let code = match session.run_and_report(&config) {
        Some(Outcome::Saved { .. }) => ExitCode::SUCCESS,
        Some(Outcome::InvalidChoice) | None => ExitCode::FAILURE,
    };

    let (_, mut stdout) = session.into_parts();
    stdout.flush().context("Failed to flush stdout")?;
    Ok(code)
}
