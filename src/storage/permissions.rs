//! Write permission probing
//!
//! A probe creates a uniquely named marker file inside a directory and
//! removes it again. Success means the directory accepts writes.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

/// Prefix of the transient marker file created by [`MarkerFileProbe`]
pub const PROBE_PREFIX: &str = ".write_probe";

/// Checks whether a directory is writable
pub trait WriteProbe {
    fn probe(&self, dir: &Path) -> io::Result<()>;
}

/// Create-then-delete probe using a hidden marker file
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerFileProbe;

impl MarkerFileProbe {
    /// Marker path for this process, unique per call
    pub fn marker_path(dir: &Path) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        dir.join(format!("{}-{}-{}", PROBE_PREFIX, process::id(), nanos))
    }
}

impl WriteProbe for MarkerFileProbe {
    fn probe(&self, dir: &Path) -> io::Result<()> {
        let marker = Self::marker_path(dir);
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&marker)?;
        std::fs::remove_file(&marker)
    }
}
