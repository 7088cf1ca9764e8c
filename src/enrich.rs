//! Metadata enrichment
//!
//! Turns the raw version diff into compare entries and back-fills each
//! entry's homepage and repository URL from the installed tree. One tree
//! read per invocation; entries keep the order the diff supplied them in.

use crate::domain::{CompareEntry, PackageManifest, RepositoryField};
use crate::error::TreeError;
use crate::giturl;
use crate::tree::TreeReader;
use std::path::Path;

/// Resolves a child manifest's repository field into a canonical HTTPS URL
///
/// `repository.url` wins when it normalizes; the bare `"owner/repo"`
/// shorthand is the fallback. Unresolvable fields leave the entry without
/// links, which is not an error.
fn resolve_repository(manifest: &PackageManifest) -> Option<String> {
    match manifest.repository.as_ref()? {
        RepositoryField::Detailed { url } => giturl::normalize(url),
        RepositoryField::Shorthand(shorthand) => giturl::from_shorthand(shorthand),
        RepositoryField::Other(_) => None,
    }
}

/// Enriches the diff entries from the tree under `dir`
///
/// Returns the root manifest and the enriched entries. Entries whose name
/// never shows up among the tree's children stay un-enriched. Tree reader
/// failures abort the whole pipeline.
pub async fn enrich<R: TreeReader>(
    reader: &R,
    dir: &Path,
    diff: Vec<(String, String, String, String)>,
) -> Result<(PackageManifest, Vec<CompareEntry>), TreeError> {
    let mut entries: Vec<CompareEntry> = diff
        .into_iter()
        .map(|(name, current, wanted, latest)| CompareEntry::new(name, current, wanted, latest))
        .collect();

    let tracked: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
    let resolver = move |name: &str| tracked.iter().any(|t| t.as_str() == name);
    let tree = reader.read(dir, &resolver).await?;

    for child in &tree.children {
        let Some(entry) = entries.iter_mut().find(|e| e.name == child.name) else {
            continue;
        };
        entry.homepage = child.homepage.clone();
        if let Some(repository) = resolve_repository(child) {
            entry.repository = repository;
        }
    }

    Ok((tree.root, entries))
}
