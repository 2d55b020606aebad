//! Storage operations
//!
//! Full setup run: resolve the root, create the role directories, write the
//! manifest. No rollback on failure.

use std::path::Path;

use log::info;

use crate::error::StorageError;
use crate::storage::filesystem::DirectorySet;
use crate::storage::manifest::Manifest;
use crate::storage::permissions::{MarkerFileProbe, WriteProbe};
use crate::storage::resolver::resolve_root_with;
use crate::storage::results::SetupResult;

/// Set up storage under the first usable of `primary` and `fallback`
pub fn setup_storage(primary: &Path, fallback: &Path) -> Result<SetupResult, StorageError> {
    setup_storage_with(primary, fallback, &MarkerFileProbe)
}

pub fn setup_storage_with<P: WriteProbe>(
    primary: &Path,
    fallback: &Path,
    probe: &P,
) -> Result<SetupResult, StorageError> {
    let resolution = resolve_root_with(primary, fallback, probe)?;

    let directories = DirectorySet::under(resolution.root());
    directories.create_all()?;

    let manifest_path = Manifest::path_for(resolution.root());
    Manifest::new(&directories).write_to(&manifest_path)?;

    info!(
        "Storage ready at {} (persistent: {}), manifest at {}",
        resolution.root().display(),
        resolution.persistent,
        manifest_path.display()
    );

    Ok(SetupResult {
        resolution,
        directories,
        manifest_path,
    })
}
