//! Core domain models
//!
//! This module contains the types shared across the pipeline:
//! - Per-package comparison entries
//! - The package.json manifest model and dependency categories

mod compare;
mod manifest;

pub use compare::CompareEntry;
pub use manifest::{DependencyCategory, PackageManifest, RepositoryField};
