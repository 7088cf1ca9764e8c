//! Integration tests for bumppr
//!
//! These tests verify:
//! - Enrichment against a real on-disk node_modules fixture
//! - Markdown and text rendering of enriched batches
//! - Repository URL resolution policies (url object, owner/repo shorthand)

use bumppr::domain::CompareEntry;
use bumppr::enrich::enrich;
use bumppr::output::{to_markdown, to_text_table};
use bumppr::tree::{FsTreeReader, TreeReader};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_package(dir: &Path, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("package.json"), content).unwrap();
}

fn tuple(name: &str, current: &str, wanted: &str, latest: &str) -> (String, String, String, String) {
    (
        name.to_string(),
        current.to_string(),
        wanted.to_string(),
        latest.to_string(),
    )
}

/// Project fixture matching the three-entry scenario: classnames under
/// dependencies, react under devDependencies, fsevents under
/// optionalDependencies, no metadata installed.
fn scenario_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_package(
        temp.path(),
        r#"{
            "name": "fixture",
            "dependencies": { "classnames": "2.2.0" },
            "devDependencies": { "react": "^15.0.0" },
            "optionalDependencies": { "fsevents": "^1.0.0" }
        }"#,
    );
    temp
}

fn scenario_diff() -> Vec<(String, String, String, String)> {
    vec![
        tuple("classnames", "2.2.0", "2.2.0", "2.2.5"),
        tuple("react", "15.0.0", "15.3.2", "15.3.2"),
        tuple("fsevents", "1.0.0", "1.0.7", "1.0.14"),
    ]
}

mod enrichment {
    use super::*;

    #[tokio::test]
    async fn test_enrich_from_installed_tree() {
        let temp = scenario_project();
        write_package(
            &temp.path().join("node_modules/react"),
            r#"{
                "name": "react",
                "homepage": "https://facebook.github.io/react/",
                "repository": { "url": "git+https://github.com/facebook/react.git" }
            }"#,
        );

        let (root, entries) = enrich(&FsTreeReader::new(), temp.path(), scenario_diff())
            .await
            .unwrap();

        assert_eq!(root.name, "fixture");
        let react = entries.iter().find(|e| e.name == "react").unwrap();
        assert_eq!(react.homepage, "https://facebook.github.io/react/");
        assert_eq!(react.repository, "https://github.com/facebook/react");

        // Not installed, so never enriched - still present for rendering
        let classnames = entries.iter().find(|e| e.name == "classnames").unwrap();
        assert!(classnames.homepage.is_empty());
        assert!(classnames.repository.is_empty());
    }

    #[tokio::test]
    async fn test_enrich_resolves_owner_repo_shorthand() {
        let temp = scenario_project();
        write_package(
            &temp.path().join("node_modules/classnames"),
            r#"{ "name": "classnames", "repository": "JedWatson/classnames" }"#,
        );

        let (_, entries) = enrich(&FsTreeReader::new(), temp.path(), scenario_diff())
            .await
            .unwrap();

        let classnames = entries.iter().find(|e| e.name == "classnames").unwrap();
        assert_eq!(
            classnames.repository,
            "https://github.com/JedWatson/classnames"
        );
    }

    #[tokio::test]
    async fn test_enrich_fails_without_root_manifest() {
        let temp = TempDir::new().unwrap();
        let result = enrich(&FsTreeReader::new(), temp.path(), scenario_diff()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_tree_reader_only_visits_tracked_packages() {
        let temp = scenario_project();
        write_package(
            &temp.path().join("node_modules/react"),
            r#"{ "name": "react" }"#,
        );
        write_package(
            &temp.path().join("node_modules/untracked"),
            r#"{ "name": "untracked" }"#,
        );

        let tracked = |name: &str| name == "react";
        let tree = FsTreeReader::new()
            .read(temp.path(), &tracked)
            .await
            .unwrap();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].name, "react");
    }
}

mod rendering {
    use super::*;

    #[tokio::test]
    async fn test_markdown_scenario_without_metadata() {
        let temp = scenario_project();
        let (root, entries) = enrich(&FsTreeReader::new(), temp.path(), scenario_diff())
            .await
            .unwrap();

        let output = to_markdown(&root, &entries);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "## Updating Dependencies");
        assert_eq!(
            lines[2],
            "| Name | Updating | Latest | dependencies | devDependencies | optionalDependencies |"
        );
        assert_eq!(lines[3], "|:---- |:--------:|:------:|:-:|:-:|:-:|");
        // Identical current/wanted collapses to a single version
        assert_eq!(lines[4], "| classnames | v2.2.0 | v2.2.5 | * |   |   |");
        assert_eq!(lines[5], "| react | v15.0.0...v15.3.2 | v15.3.2 |   | * |   |");
        assert_eq!(lines[6], "| fsevents | v1.0.0...v1.0.7 | v1.0.14 |   |   | * |");
        assert!(lines[8].starts_with("Powered by ["));
    }

    #[tokio::test]
    async fn test_markdown_scenario_with_metadata() {
        let temp = TempDir::new().unwrap();
        write_package(temp.path(), r#"{ "name": "fixture" }"#);
        write_package(
            &temp.path().join("node_modules/react"),
            r#"{
                "name": "react",
                "homepage": "https://facebook.github.io/react/",
                "repository": { "url": "git+https://github.com/facebook/react.git" }
            }"#,
        );

        let diff = vec![tuple("react", "15.0.0", "15.3.2", "15.3.2")];
        let (root, entries) = enrich(&FsTreeReader::new(), temp.path(), diff)
            .await
            .unwrap();

        let output = to_markdown(&root, &entries);
        // wanted == latest, so both cells share the same compare URL
        assert!(output.contains(
            "| [react](https://facebook.github.io/react/) \
             | [v15.0.0...v15.3.2](https://github.com/facebook/react/compare/v15.0.0...v15.3.2) \
             | [v15.3.2](https://github.com/facebook/react/compare/v15.0.0...v15.3.2) |"
        ));
    }

    #[tokio::test]
    async fn test_text_table_scenario() {
        let temp = scenario_project();
        let (root, entries) = enrich(&FsTreeReader::new(), temp.path(), scenario_diff())
            .await
            .unwrap();

        let output = to_text_table(&root, &entries);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 9);
        assert!(lines[0].chars().all(|c| c == '='));
        assert!(lines[8].chars().all(|c| c == '='));
        assert!(lines[2].chars().all(|c| c == '-'));
        assert!(lines[1].contains("optionalDependencies"));
        assert!(lines[3].contains("classnames"));
        assert!(lines[5].contains("v15.0.0...v15.3.2"));
        assert!(lines[7].contains("v1.0.14"));

        // Deterministic across renders
        assert_eq!(output, to_text_table(&root, &entries));
    }

    #[test]
    fn test_renderers_keep_insertion_order() {
        let entries = vec![
            CompareEntry::new("zzz", "1.0.0", "1.0.1", "1.0.1"),
            CompareEntry::new("aaa", "2.0.0", "2.0.1", "2.0.1"),
        ];
        let root = serde_json::from_str("{}").unwrap();

        let output = to_markdown(&root, &entries);
        let zzz = output.find("| zzz |").unwrap();
        let aaa = output.find("| aaa |").unwrap();
        assert!(zzz < aaa);
    }
}
