//! Directory layout under the storage root
//!
//! The set of role directories is fixed. Creation is idempotent.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::StorageError;

/// Logical role of a storage subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageRole {
    /// Databases, application configuration, preferences
    AppData,
    /// User-uploaded files
    Uploads,
    Logs,
    /// Regenerable cached data
    Cache,
    /// Agent state between runs
    AgentMemory,
}

impl StorageRole {
    /// All roles, in manifest order
    pub const ALL: [StorageRole; 5] = [
        StorageRole::AppData,
        StorageRole::Uploads,
        StorageRole::Logs,
        StorageRole::Cache,
        StorageRole::AgentMemory,
    ];

    /// Directory name on disk, also used as the manifest label
    pub fn dir_name(self) -> &'static str {
        match self {
            StorageRole::AppData => "app_data",
            StorageRole::Uploads => "uploads",
            StorageRole::Logs => "logs",
            StorageRole::Cache => "cache",
            StorageRole::AgentMemory => "agent_memory",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StorageRole::AppData => "databases, configs",
            StorageRole::Uploads => "user-uploaded files",
            StorageRole::Logs => "application logs",
            StorageRole::Cache => "temporary cached data",
            StorageRole::AgentMemory => "agent memory/state",
        }
    }
}

/// Role directories rooted at a single storage root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySet {
    root: PathBuf,
    entries: Vec<(StorageRole, PathBuf)>,
}

impl DirectorySet {
    /// Compute the set for `root` without touching the filesystem
    pub fn under(root: &Path) -> Self {
        let entries = StorageRole::ALL
            .iter()
            .map(|role| (*role, root.join(role.dir_name())))
            .collect();
        Self {
            root: root.to_path_buf(),
            entries,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[(StorageRole, PathBuf)] {
        &self.entries
    }

    /// Path for a given role
    pub fn path(&self, role: StorageRole) -> &Path {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, p)| p.as_path())
            .unwrap_or(self.root.as_path())
    }

    /// Create every directory (and missing parents). Stops at the first failure.
    pub fn create_all(&self) -> Result<(), StorageError> {
        for (role, path) in &self.entries {
            fs::create_dir_all(path)
                .map_err(|e| StorageError::DirectoryCreation(path.clone(), e))?;
            debug!("Ensured {} directory at {}", role.dir_name(), path.display());
        }
        Ok(())
    }

    /// True if every directory in the set exists
    pub fn all_exist(&self) -> bool {
        self.entries.iter().all(|(_, p)| p.is_dir())
    }
}
