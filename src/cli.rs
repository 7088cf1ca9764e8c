//! CLI argument parsing module for bumppr

use clap::Parser;
use std::path::PathBuf;

/// Dependency upgrade comparison tables for Node.js projects
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bumppr",
    version,
    about = "Renders upgrade comparison tables from an outdated-dependency diff"
)]
pub struct CliArgs {
    /// Project root directory containing package.json (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Read the version diff from this JSON file instead of stdin
    ///
    /// The diff is an array of [name, current, wanted, latest] tuples.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Render a Markdown table for a pull-request body (default: boxed text)
    #[arg(short, long)]
    pub markdown: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}
