//! Plain-text manifest of the resolved storage layout
//!
//! One `label: value` pair per line: the storage root, the creation
//! timestamp, then one line per role directory. Human-readable only.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::StorageError;
use crate::storage::filesystem::DirectorySet;

/// Manifest file name at the top of the storage root
pub const MANIFEST_FILE: &str = "config.txt";

pub const ROOT_LABEL: &str = "Storage Base";
pub const CREATED_LABEL: &str = "Created";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct Manifest {
    pub root: PathBuf,
    pub created: DateTime<Local>,
    pub entries: Vec<(String, PathBuf)>,
}

impl Manifest {
    /// Build a manifest stamped with the current local time
    pub fn new(directories: &DirectorySet) -> Self {
        Self::at(directories, Local::now())
    }

    pub fn at(directories: &DirectorySet, created: DateTime<Local>) -> Self {
        let entries = directories
            .entries()
            .iter()
            .map(|(role, path)| (role.dir_name().to_string(), path.clone()))
            .collect();
        Self {
            root: directories.root().to_path_buf(),
            created,
            entries,
        }
    }

    /// Default manifest location for a storage root
    pub fn path_for(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}: {}\n", ROOT_LABEL, self.root.display());
        out.push_str(&format!(
            "{}: {}\n",
            CREATED_LABEL,
            self.created.format(TIMESTAMP_FORMAT)
        ));
        for (label, path) in &self.entries {
            out.push_str(&format!("{}: {}\n", label, path.display()));
        }
        out
    }

    /// Write the manifest, replacing any previous one at `path`
    pub fn write_to(&self, path: &Path) -> Result<(), StorageError> {
        fs::write(path, self.render())
            .map_err(|e| StorageError::ManifestWrite(path.to_path_buf(), e))
    }
}
