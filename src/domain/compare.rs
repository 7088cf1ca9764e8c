//! Per-package comparison state
//!
//! A `CompareEntry` holds one dependency's current/wanted/latest versions
//! together with the homepage and repository URL discovered during
//! enrichment, and derives the version ranges and diff URLs used by the
//! table renderers.

use std::fmt;

/// Comparison state for a single dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareEntry {
    /// Package name (unique within a batch)
    pub name: String,
    /// Installed version
    pub current: String,
    /// Highest version satisfying the declared range
    pub wanted: String,
    /// Highest published version
    pub latest: String,
    /// Package homepage, empty until enrichment finds one
    pub homepage: String,
    /// Canonical HTTPS repository URL, empty until enrichment finds one
    pub repository: String,
}

impl CompareEntry {
    /// Creates an entry from a raw `[name, current, wanted, latest]` tuple
    pub fn new(
        name: impl Into<String>,
        current: impl Into<String>,
        wanted: impl Into<String>,
        latest: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            current: current.into(),
            wanted: wanted.into(),
            latest: latest.into(),
            homepage: String::new(),
            repository: String::new(),
        }
    }

    /// Version span from current to `to`
    ///
    /// Versions are compared as opaque strings, so `"1.0"` and `"1.0.0"`
    /// count as different versions.
    pub fn version_range(&self, to: &str) -> String {
        if self.current == to {
            format!("v{}", self.current)
        } else {
            format!("v{}...v{}", self.current, to)
        }
    }

    /// Span from current to the wanted version
    pub fn range_wanted(&self) -> String {
        self.version_range(&self.wanted)
    }

    /// Span from current to the latest version
    pub fn range_latest(&self) -> String {
        self.version_range(&self.latest)
    }

    /// Repository URL for browsing the change from current to `to`
    ///
    /// Empty when no repository is known. Points at the tagged tree when the
    /// versions are identical, at the compare view otherwise.
    pub fn diff_url(&self, to: &str) -> String {
        if self.repository.is_empty() {
            return String::new();
        }
        if self.current == to {
            format!("{}/tree/v{}", self.repository, self.current)
        } else {
            format!("{}/compare/{}", self.repository, self.version_range(to))
        }
    }

    /// Diff URL for the wanted version
    pub fn diff_wanted_url(&self) -> String {
        self.diff_url(&self.wanted)
    }

    /// Diff URL for the latest version
    pub fn diff_latest_url(&self) -> String {
        self.diff_url(&self.latest)
    }
}

impl fmt::Display for CompareEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.range_wanted())
    }
}
