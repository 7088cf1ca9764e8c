//! bumppr - dependency upgrade comparison table CLI
//!
//! Reads an outdated-dependency diff from a file or stdin, enriches it from
//! the project's installed node_modules tree, and prints a comparison table
//! (Markdown or boxed text).

use bumppr::cli::CliArgs;
use bumppr::diff::{parse_diff, DiffTuple};
use bumppr::error::DiffError;
use bumppr::{markdown_view, simple_view};
use clap::Parser;
use colored::Colorize;
use std::io::Read;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("bumppr v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
    }

    let diff = read_diff(&args)?;
    if diff.is_empty() {
        if args.verbose {
            eprintln!("{}", "Nothing to update".dimmed());
        }
        return Ok(ExitCode::SUCCESS);
    }

    if args.verbose {
        eprintln!("Comparing {} dependencies", diff.len());
    }

    let table = if args.markdown {
        markdown_view(&args.path, diff).await?
    } else {
        simple_view(&args.path, diff).await?
    };
    println!("{}", table);

    Ok(ExitCode::SUCCESS)
}

/// Reads the diff JSON from the configured source
fn read_diff(args: &CliArgs) -> Result<Vec<DiffTuple>, DiffError> {
    let content = match &args.input {
        Some(path) => std::fs::read_to_string(path).map_err(|e| DiffError::ReadError {
            path: path.clone(),
            source: e,
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| DiffError::StdinError { source: e })?;
            buf
        }
    };
    parse_diff(&content)
}
