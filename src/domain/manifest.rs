//! package.json manifest model
//!
//! Handles the manifest fields the comparison pipeline reads:
//! - name and homepage
//! - repository (bare string shorthand or `{ "url": ... }` object)
//! - the five dependency categories

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Dependency categories a package.json may declare, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyCategory {
    Dependencies,
    DevDependencies,
    PeerDependencies,
    OptionalDependencies,
    BundledDependencies,
}

impl DependencyCategory {
    /// All categories, in the order category columns appear
    pub fn all() -> &'static [DependencyCategory] {
        &[
            DependencyCategory::Dependencies,
            DependencyCategory::DevDependencies,
            DependencyCategory::PeerDependencies,
            DependencyCategory::OptionalDependencies,
            DependencyCategory::BundledDependencies,
        ]
    }

    /// The manifest key for this category
    pub fn key(&self) -> &'static str {
        match self {
            DependencyCategory::Dependencies => "dependencies",
            DependencyCategory::DevDependencies => "devDependencies",
            DependencyCategory::PeerDependencies => "peerDependencies",
            DependencyCategory::OptionalDependencies => "optionalDependencies",
            DependencyCategory::BundledDependencies => "bundledDependencies",
        }
    }
}

impl fmt::Display for DependencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The `repository` field of a manifest
///
/// npm accepts either an object carrying a VCS URL or a bare
/// `"owner/repo"` shorthand string. Anything else is kept as an opaque
/// value so a single odd manifest never aborts the whole tree read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Detailed { url: String },
    Shorthand(String),
    Other(serde_json::Value),
}

/// Deserialized package.json, restricted to the fields the pipeline uses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub repository: Option<RepositoryField>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "optionalDependencies")]
    pub optional_dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "bundledDependencies")]
    pub bundled_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// The declared range map for a category
    pub fn category(&self, category: DependencyCategory) -> &BTreeMap<String, String> {
        match category {
            DependencyCategory::Dependencies => &self.dependencies,
            DependencyCategory::DevDependencies => &self.dev_dependencies,
            DependencyCategory::PeerDependencies => &self.peer_dependencies,
            DependencyCategory::OptionalDependencies => &self.optional_dependencies,
            DependencyCategory::BundledDependencies => &self.bundled_dependencies,
        }
    }

    /// True when the named package is declared under the given category
    pub fn declares(&self, category: DependencyCategory, name: &str) -> bool {
        self.category(category).contains_key(name)
    }
}
