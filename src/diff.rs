//! Version diff input parsing
//!
//! The upstream outdated-check supplies a JSON array of
//! `[name, current, wanted, latest]` string tuples. Order is preserved; it
//! becomes the table's row order.

use crate::error::DiffError;

/// One raw diff line: name, current, wanted, latest
pub type DiffTuple = (String, String, String, String);

/// Parses the diff JSON into tuples
pub fn parse_diff(content: &str) -> Result<Vec<DiffTuple>, DiffError> {
    serde_json::from_str(content).map_err(|e| DiffError::ParseError {
        message: e.to_string(),
    })
}
