//! Git repository URL normalization
//!
//! package.json manifests carry repository URLs in several VCS-flavored
//! shapes. This module reduces them to a canonical HTTPS URL suitable for
//! building `/compare/` and `/tree/` links:
//! - `git+https://host/owner/repo.git`
//! - `git://host/owner/repo.git`
//! - `git@host:owner/repo.git` (SSH)
//! - `https://host/owner/repo` (already canonical)
//!
//! Anything else yields `None`; the caller degrades to an unlinked cell.

use regex::Regex;
use std::sync::OnceLock;

/// SSH forms: ssh://git@host/owner/repo or git@host:owner/repo
fn ssh_pattern() -> &'static Regex {
    static SSH: OnceLock<Regex> = OnceLock::new();
    SSH.get_or_init(|| {
        Regex::new(r"^(?:git\+)?ssh://git@([^/:]+)[/:](.+)$|^git@([^:]+):(.+)$")
            .expect("ssh pattern is valid")
    })
}

/// Normalizes a manifest repository URL into a canonical HTTPS URL
pub fn normalize(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    if let Some(caps) = ssh_pattern().captures(url) {
        let host = caps.get(1).or_else(|| caps.get(3))?.as_str();
        let path = caps.get(2).or_else(|| caps.get(4))?.as_str();
        return Some(format!("https://{}/{}", host, strip_git_suffix(path)));
    }

    // Protocol forms: git+https, git+http, git, https, http
    for (prefix, scheme) in [
        ("git+https://", "https"),
        ("git+http://", "https"),
        ("git://", "https"),
        ("https://", "https"),
        ("http://", "http"),
    ] {
        if let Some(rest) = url.strip_prefix(prefix) {
            if rest.is_empty() {
                return None;
            }
            return Some(format!("{}://{}", scheme, strip_git_suffix(rest)));
        }
    }

    None
}

/// Expands the npm `"owner/repo"` shorthand into a GitHub URL
///
/// Only the exact two-segment form qualifies; URLs and nested paths are
/// rejected so that a malformed field never produces a bogus link.
pub fn from_shorthand(repository: &str) -> Option<String> {
    let parts: Vec<&str> = repository.split('/').collect();
    if parts.len() == 2 && parts.iter().all(|p| !p.is_empty()) && !repository.contains(':') {
        Some(format!("https://github.com/{}", repository))
    } else {
        None
    }
}

fn strip_git_suffix(path: &str) -> &str {
    path.strip_suffix(".git").unwrap_or(path).trim_end_matches('/')
}
