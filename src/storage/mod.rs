//! Storage location resolution
//!
//! Chooses a writable storage root, creates the role directories and
//! records the layout in a manifest.

pub mod filesystem;
pub mod manifest;
pub mod operations;
pub mod permissions;
pub mod resolver;
pub mod results;

pub use filesystem::{DirectorySet, StorageRole};
pub use manifest::{MANIFEST_FILE, Manifest};
pub use operations::{setup_storage, setup_storage_with};
pub use permissions::{MarkerFileProbe, WriteProbe};
pub use resolver::{resolve_root, resolve_root_with};
pub use results::{FallbackReason, Resolution, SetupResult};
