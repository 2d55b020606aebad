//! Volume store operations
//!
//! Handles saving, loading and listing keyed JSON documents, the persistent
//! log file and the startup counter.

use chrono::Local;
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::StoreError;
use crate::kv::results::{Listing, PrepareResult, StartupRecord, StoredRecord};
use crate::storage::StorageRole;

pub const LOG_FILE_NAME: &str = "app.log";
pub const STARTUP_FILE_NAME: &str = "startup_count.json";

const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Locations used by a [`VolumeStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub volume_path: PathBuf,
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub log_file: PathBuf,
}

impl StorePaths {
    /// Standard layout under a volume path
    pub fn under(volume_path: &Path) -> Self {
        Self {
            volume_path: volume_path.to_path_buf(),
            data_dir: volume_path.join(StorageRole::AppData.dir_name()),
            upload_dir: volume_path.join(StorageRole::Uploads.dir_name()),
            log_file: volume_path.join(LOG_FILE_NAME),
        }
    }
}

/// Reject keys that would escape the data directory
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty()
        || key.contains('/')
        || key.contains('\\')
        || key.contains('\0')
        || key.contains("..")
    {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |e| StoreError::Io(path.to_path_buf(), e)
}

#[derive(Debug, Clone)]
pub struct VolumeStore {
    paths: StorePaths,
}

impl VolumeStore {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Create the volume, data and upload directories if missing
    pub fn prepare(&self) -> Result<PrepareResult, StoreError> {
        let volume_existed = self.paths.volume_path.exists();

        for dir in [
            &self.paths.volume_path,
            &self.paths.data_dir,
            &self.paths.upload_dir,
        ] {
            fs::create_dir_all(dir).map_err(io_err(dir))?;
        }

        info!(
            "Volume store ready at {} (pre-existing: {})",
            self.paths.volume_path.display(),
            volume_existed
        );
        Ok(PrepareResult { volume_existed })
    }

    /// Append a timestamped line to the log file
    pub fn write_log(&self, message: &str) -> Result<(), StoreError> {
        let path = &self.paths.log_file;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_err(path))?;

        let timestamp = Local::now().format(LOG_TIMESTAMP_FORMAT);
        writeln!(file, "[{}] {}", timestamp, message).map_err(io_err(path))?;
        debug!("Logged: {}", message);
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.paths.data_dir.join(format!("{key}.json"))
    }

    fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::Serialization(path.to_path_buf(), e))?;
        fs::write(path, body).map_err(io_err(path))
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
        let body = fs::read_to_string(path).map_err(io_err(path))?;
        serde_json::from_str(&body).map_err(|e| StoreError::Serialization(path.to_path_buf(), e))
    }

    /// Save `value` under `key`, replacing any previous value
    pub fn save(&self, key: &str, value: Value) -> Result<StoredRecord, StoreError> {
        validate_key(key)?;

        let record = StoredRecord {
            key: key.to_string(),
            value,
            timestamp: unix_now(),
        };
        Self::write_json(&self.key_path(key), &record)?;
        info!("Saved: {} = {}", key, record.value);

        self.write_log(&format!("Saved data: {key}"))?;
        Ok(record)
    }

    /// Load the value stored under `key`, `None` if never saved
    pub fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        validate_key(key)?;

        let path = self.key_path(key);
        if !path.exists() {
            debug!("Key not found: {}", key);
            return Ok(None);
        }

        let record: StoredRecord = Self::read_json(&path)?;
        Ok(Some(record.value))
    }

    /// JSON documents in the data directory and the log file size
    pub fn list(&self) -> Result<Listing, StoreError> {
        let mut listing = Listing::default();

        if self.paths.data_dir.is_dir() {
            let entries = fs::read_dir(&self.paths.data_dir).map_err(io_err(&self.paths.data_dir))?;
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                    listing
                        .files
                        .push(entry.file_name().to_string_lossy().to_string());
                }
            }
            listing.files.sort();
        }

        if let Ok(metadata) = fs::metadata(&self.paths.log_file) {
            listing.log_size = Some(metadata.len());
        }

        Ok(listing)
    }

    /// Increment and persist the startup counter. The first startup is 1.
    pub fn record_startup(&self) -> Result<u64, StoreError> {
        let path = self.paths.data_dir.join(STARTUP_FILE_NAME);

        let count = if path.exists() {
            let previous: StartupRecord = Self::read_json(&path)?;
            previous.count + 1
        } else {
            1
        };

        let record = StartupRecord {
            count,
            last_startup: unix_now(),
        };
        Self::write_json(&path, &record)?;
        info!("Recorded startup #{}", count);
        Ok(count)
    }
}
