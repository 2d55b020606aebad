//! Storage root resolution
//!
//! Picks between a primary mount path and a fallback path. The decision is
//! returned as a [`Resolution`]; nothing here prints.

use std::io;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::StorageError;
use crate::storage::permissions::{MarkerFileProbe, WriteProbe};
use crate::storage::results::{FallbackReason, Resolution};

/// Resolve the storage root using the marker-file probe
pub fn resolve_root(primary: &Path, fallback: &Path) -> Result<Resolution, StorageError> {
    resolve_root_with(primary, fallback, &MarkerFileProbe)
}

/// Resolve the storage root with a caller-supplied probe.
///
/// A missing primary or a permission error from the probe selects the
/// fallback. Any other probe error is returned as [`StorageError::ProbeFailed`].
/// The fallback itself is not probed here; directory creation under it
/// surfaces any problem.
pub fn resolve_root_with<P: WriteProbe>(
    primary: &Path,
    fallback: &Path,
    probe: &P,
) -> Result<Resolution, StorageError> {
    let pick_fallback = |reason| Resolution {
        root: fallback.to_path_buf(),
        persistent: false,
        fallback: Some(reason),
        primary: primary.to_path_buf(),
    };

    if !primary.exists() {
        info!(
            "Primary path {} not found, using {}",
            primary.display(),
            fallback.display()
        );
        return Ok(pick_fallback(FallbackReason::PrimaryMissing));
    }

    match probe.probe(primary) {
        Ok(()) => {
            debug!("Write probe succeeded on {}", primary.display());
            Ok(Resolution {
                root: primary.to_path_buf(),
                persistent: true,
                fallback: None,
                primary: primary.to_path_buf(),
            })
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            warn!(
                "Primary path {} is not writable, using {}",
                primary.display(),
                fallback.display()
            );
            Ok(pick_fallback(FallbackReason::PrimaryNotWritable))
        }
        Err(e) => Err(StorageError::ProbeFailed(primary.to_path_buf(), e)),
    }
}
