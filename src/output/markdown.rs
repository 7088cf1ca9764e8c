//! Markdown table output
//!
//! Renders a GitHub-flavored Markdown table meant to be pasted verbatim into
//! a pull-request body. Cells link to the package homepage and to the
//! repository's compare/tree views when those URLs are known.

use super::{make_columns, Column};
use crate::domain::{CompareEntry, PackageManifest};

fn headers(columns: &[Column]) -> String {
    let names: Vec<&str> = columns.iter().map(|c| c.name()).collect();
    format!("| {} |", names.join(" | "))
}

fn layouts(columns: &[Column]) -> String {
    let tokens: Vec<&str> = columns.iter().map(|c| c.layout()).collect();
    format!("|{}|", tokens.join("|"))
}

fn rows(columns: &[Column], entries: &[CompareEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let cells: Vec<String> = columns.iter().map(|c| c.render(entry)).collect();
            format!("| {} |", cells.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the Markdown projection of a comparison batch
pub fn to_markdown(root: &PackageManifest, entries: &[CompareEntry]) -> String {
    let columns = make_columns(root, entries);
    format!(
        "## Updating Dependencies\n\n{}\n{}\n{}\n\nPowered by [{}]({})",
        headers(&columns),
        layouts(&columns),
        rows(&columns, entries),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_HOMEPAGE"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(json: &str) -> PackageManifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_to_markdown_simple() {
        let entries = vec![
            CompareEntry::new("classnames", "2.2.0", "2.2.0", "2.2.5"),
            CompareEntry::new("react", "15.0.0", "15.3.2", "15.3.2"),
            CompareEntry::new("fsevents", "1.0.0", "1.0.7", "1.0.14"),
        ];
        let root = manifest(
            r#"{
                "dependencies": { "classnames": "2.2.0" },
                "devDependencies": { "react": "^15.0.0" },
                "optionalDependencies": { "fsevents": "^1.0.0" }
            }"#,
        );

        let expected = format!(
            "## Updating Dependencies

| Name | Updating | Latest | dependencies | devDependencies | optionalDependencies |
|:---- |:--------:|:------:|:-:|:-:|:-:|
| classnames | v2.2.0 | v2.2.5 | * |   |   |
| react | v15.0.0...v15.3.2 | v15.3.2 |   | * |   |
| fsevents | v1.0.0...v1.0.7 | v1.0.14 |   |   | * |

Powered by [{}]({})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_HOMEPAGE"),
        );

        assert_eq!(to_markdown(&root, &entries), expected);
    }

    #[test]
    fn test_to_markdown_with_links() {
        let mut entry = CompareEntry::new("react", "15.0.0", "15.3.2", "15.3.2");
        entry.homepage = "https://facebook.github.io/react/".to_string();
        entry.repository = "https://github.com/facebook/react".to_string();

        let expected = format!(
            "## Updating Dependencies

| Name | Updating | Latest |
|:---- |:--------:|:------:|
| [react]({hp}) | [v15.0.0...v15.3.2]({repo}/compare/v15.0.0...v15.3.2) | [v15.3.2]({repo}/compare/v15.0.0...v15.3.2) |

Powered by [{name}]({home})",
            hp = entry.homepage,
            repo = entry.repository,
            name = env!("CARGO_PKG_NAME"),
            home = env!("CARGO_PKG_HOMEPAGE"),
        );

        assert_eq!(to_markdown(&manifest("{}"), &[entry]), expected);
    }

    #[test]
    fn test_to_markdown_empty_batch() {
        let output = to_markdown(&manifest("{}"), &[]);
        assert!(output.starts_with("## Updating Dependencies"));
        assert!(output.contains("| Name | Updating | Latest |"));
        assert!(output.contains("Powered by"));
    }
}
