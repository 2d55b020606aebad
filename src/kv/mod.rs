//! Key-value persistence over the filesystem
//!
//! One JSON document per key in the data directory, an append-only text
//! log, and a startup counter used to detect restarts.

pub mod results;
pub mod store;

pub use results::{Listing, PrepareResult, StartupRecord, StoredRecord};
pub use store::{StorePaths, VolumeStore, validate_key};
