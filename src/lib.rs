//! bumppr - dependency upgrade comparison tables for Node.js projects
//!
//! This library takes an outdated-dependency diff (name, current, wanted,
//! latest), enriches it with homepage and repository metadata from the
//! installed node_modules tree, and renders the result as a Markdown table
//! for pull-request bodies or a boxed text table for terminals.

pub mod cli;
pub mod diff;
pub mod domain;
pub mod enrich;
pub mod error;
pub mod giturl;
pub mod output;
pub mod tree;

use diff::DiffTuple;
use error::AppError;
use std::path::Path;
use tree::FsTreeReader;

/// Renders the Markdown projection of a diff against the tree under `dir`
pub async fn markdown_view(dir: &Path, diff: Vec<DiffTuple>) -> Result<String, AppError> {
    let (root, entries) = enrich::enrich(&FsTreeReader::new(), dir, diff).await?;
    Ok(output::to_markdown(&root, &entries))
}

/// Renders the boxed text projection of a diff against the tree under `dir`
pub async fn simple_view(dir: &Path, diff: Vec<DiffTuple>) -> Result<String, AppError> {
    let (root, entries) = enrich::enrich(&FsTreeReader::new(), dir, diff).await?;
    Ok(output::to_text_table(&root, &entries))
}
