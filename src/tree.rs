//! Installed package tree reader
//!
//! Reads the project's root package.json and the manifests of installed
//! packages under node_modules. Traversal is one level deep (two for
//! `@scope` directories) and restricted to the names the caller resolves,
//! so a large tree costs one manifest read per tracked dependency.

use crate::domain::PackageManifest;
use crate::error::TreeError;
use async_trait::async_trait;
use std::path::Path;

/// Resolver deciding which installed packages the caller tracks
///
/// Receives the package name as derived from the directory layout and
/// returns true when the package should appear among the children.
pub type NameResolver<'a> = &'a (dyn Fn(&str) -> bool + Send + Sync);

/// A read of the installed dependency tree
#[derive(Debug, Clone)]
pub struct DependencyTree {
    /// The root project's manifest
    pub root: PackageManifest,
    /// Manifests of tracked installed packages
    pub children: Vec<PackageManifest>,
}

/// Reads a dependency tree from some backing store
#[async_trait]
pub trait TreeReader {
    /// Reads the tree rooted at `dir`, keeping only resolved children
    async fn read(&self, dir: &Path, resolver: NameResolver<'_>)
        -> Result<DependencyTree, TreeError>;
}

/// Tree reader backed by the local filesystem
pub struct FsTreeReader;

impl FsTreeReader {
    pub fn new() -> Self {
        Self
    }

    async fn read_manifest(path: &Path) -> Result<PackageManifest, TreeError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TreeError::read_error(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| TreeError::json_parse_error(path, e.to_string()))
    }

    /// Reads the manifest of one installed package if it is tracked
    async fn read_child(
        dir: &Path,
        name: &str,
        resolver: NameResolver<'_>,
    ) -> Result<Option<PackageManifest>, TreeError> {
        if !resolver(name) {
            return Ok(None);
        }
        let manifest_path = dir.join("package.json");
        if !manifest_path.is_file() {
            return Ok(None);
        }
        Self::read_manifest(&manifest_path).await.map(Some)
    }
}

impl Default for FsTreeReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TreeReader for FsTreeReader {
    async fn read(
        &self,
        dir: &Path,
        resolver: NameResolver<'_>,
    ) -> Result<DependencyTree, TreeError> {
        let root_path = dir.join("package.json");
        if !root_path.is_file() {
            return Err(TreeError::root_not_found(dir));
        }
        let root = Self::read_manifest(&root_path).await?;

        let mut children = Vec::new();
        let modules_dir = dir.join("node_modules");
        if !modules_dir.is_dir() {
            // Nothing installed yet; entries stay un-enriched.
            return Ok(DependencyTree { root, children });
        }

        let mut entries = tokio::fs::read_dir(&modules_dir)
            .await
            .map_err(|e| TreeError::read_error(&modules_dir, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| TreeError::read_error(&modules_dir, e))?
        {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let dir_name = entry.file_name().to_string_lossy().into_owned();
            if dir_name.starts_with('.') {
                continue;
            }

            if dir_name.starts_with('@') {
                // Scoped registry namespace; packages live one level down.
                let mut scoped = tokio::fs::read_dir(&path)
                    .await
                    .map_err(|e| TreeError::read_error(&path, e))?;
                while let Some(scoped_entry) = scoped
                    .next_entry()
                    .await
                    .map_err(|e| TreeError::read_error(&path, e))?
                {
                    let scoped_path = scoped_entry.path();
                    if !scoped_path.is_dir() {
                        continue;
                    }
                    let name =
                        format!("{}/{}", dir_name, scoped_entry.file_name().to_string_lossy());
                    if let Some(manifest) =
                        Self::read_child(&scoped_path, &name, resolver).await?
                    {
                        children.push(manifest);
                    }
                }
            } else if let Some(manifest) = Self::read_child(&path, &dir_name, resolver).await? {
                children.push(manifest);
            }
        }

        Ok(DependencyTree { root, children })
    }
}
