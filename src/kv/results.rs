//! Volume store result types
//!
//! Defines records persisted by the store and structures returned by its operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// On-disk form of a saved key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredRecord {
    pub key: String,
    pub value: Value,
    /// Unix time in seconds, fractional
    pub timestamp: f64,
}

/// On-disk form of the startup counter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartupRecord {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub last_startup: f64,
}

/// Result of preparing the store directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareResult {
    /// Whether the volume path existed before this run
    pub volume_existed: bool,
}

/// Snapshot of the store contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// File names of `*.json` documents in the data directory, sorted
    pub files: Vec<String>,
    pub log_size: Option<u64>,
}
