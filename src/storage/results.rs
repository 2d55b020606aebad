//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::path::{Path, PathBuf};

use crate::storage::filesystem::DirectorySet;

/// Why the fallback path was chosen over the primary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    PrimaryMissing,
    /// Primary exists but the write probe was denied
    PrimaryNotWritable,
}

/// Outcome of choosing a storage root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub root: PathBuf,
    /// Whether data under `root` survives a container restart
    pub persistent: bool,
    pub fallback: Option<FallbackReason>,
    /// The primary candidate that was considered
    pub primary: PathBuf,
}

impl Resolution {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Result of a full setup run
#[derive(Debug, Clone)]
pub struct SetupResult {
    pub resolution: Resolution,
    pub directories: DirectorySet,
    pub manifest_path: PathBuf,
}
