//! Configuration management for volume-kit
//!
//! Layers, lowest to highest precedence: built-in defaults, an optional
//! `volkit.toml`, `VOLKIT_*` environment variables, then the platform
//! variables `PORT` and `RAILWAY_VOLUME_MOUNT_PATH`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::kv::StorePaths;
use crate::server::ServerConfig;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "volkit";

pub const DEFAULT_PRIMARY_PATH: &str = "/data";
pub const FALLBACK_DIR_NAME: &str = "persistent_data";

/// Complete toolkit configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    // ═══ STORAGE ═══
    /// Preferred mount point for persistent data
    pub primary_path: String,

    /// Used when the primary path is absent or not writable
    pub fallback_path: String,

    /// Root of the key-value demo store
    /// Environment: RAILWAY_VOLUME_MOUNT_PATH
    pub volume_path: String,

    // ═══ HTTP ═══
    pub bind_address: String,

    /// Environment: PORT
    pub port: u16,

    /// Seconds to wait for a request head before answering 408
    pub request_timeout_secs: u64,

    // ═══ HEARTBEAT ═══
    pub heartbeat_interval_secs: u64,
}

impl AppConfig {
    /// Load from `volkit.toml` (optional) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load using an explicit config file; a given file must exist
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let fallback = default_fallback_path().to_string_lossy().into_owned();

        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("primary_path", DEFAULT_PRIMARY_PATH)?
            .set_default("fallback_path", fallback.clone())?
            .set_default("volume_path", fallback)?
            .set_default("bind_address", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("request_timeout_secs", 10)?
            .set_default("heartbeat_interval_secs", 30)?
            .add_source(file_source)
            .add_source(Environment::with_prefix("VOLKIT").try_parsing(true))
            .set_override_option("port", std::env::var("PORT").ok())?
            .set_override_option(
                "volume_path",
                std::env::var("RAILWAY_VOLUME_MOUNT_PATH").ok(),
            )?
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.primary_path.is_empty() {
            return Err(ConfigError::Message("primary_path cannot be empty".into()));
        }

        if self.fallback_path.is_empty() {
            return Err(ConfigError::Message("fallback_path cannot be empty".into()));
        }

        if self.primary_path == self.fallback_path {
            return Err(ConfigError::Message(
                "primary_path and fallback_path must differ".into(),
            ));
        }

        if self.volume_path.is_empty() {
            return Err(ConfigError::Message("volume_path cannot be empty".into()));
        }

        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.heartbeat_interval_secs == 0 {
            return Err(ConfigError::Message(
                "heartbeat_interval_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    pub fn primary_path(&self) -> PathBuf {
        PathBuf::from(&self.primary_path)
    }

    pub fn fallback_path(&self) -> PathBuf {
        PathBuf::from(&self.fallback_path)
    }

    /// Paths used by the key-value demo store
    pub fn store_paths(&self) -> StorePaths {
        StorePaths::under(Path::new(&self.volume_path))
    }

    pub fn server(&self) -> ServerConfig {
        ServerConfig {
            bind_address: self.bind_address.clone(),
            port: self.port,
            timeout: self.request_timeout_secs,
        }
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval_secs)
    }
}

/// `$HOME/persistent_data`, or a relative `persistent_data` when HOME is unset
pub fn default_fallback_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(FALLBACK_DIR_NAME),
        _ => PathBuf::from(FALLBACK_DIR_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> AppConfig {
        AppConfig {
            primary_path: "/data".into(),
            fallback_path: "/home/u/persistent_data".into(),
            volume_path: "/home/u/persistent_data".into(),
            bind_address: "0.0.0.0".into(),
            port: 8080,
            request_timeout_secs: 10,
            heartbeat_interval_secs: 30,
        }
    }

    #[test]
    fn test_validation_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_same_paths() {
        let mut config = sample();
        config.fallback_path = config.primary_path.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_interval() {
        let mut config = sample();
        config.heartbeat_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "primary_path = \"/mnt/volume\"\nfallback_path = \"/tmp/fallback\"\nheartbeat_interval_secs = 5"
        )
        .unwrap();
        file.flush().unwrap();

        let config = AppConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.primary_path(), PathBuf::from("/mnt/volume"));
        assert_eq!(config.fallback_path(), PathBuf::from("/tmp/fallback"));
        assert_eq!(config.heartbeat_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = AppConfig::load_from(Some(Path::new("/nonexistent/volkit.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_store_paths_follow_volume_path() {
        let paths = sample().store_paths();
        assert_eq!(paths.data_dir, PathBuf::from("/home/u/persistent_data/app_data"));
        assert_eq!(paths.log_file, PathBuf::from("/home/u/persistent_data/app.log"));
    }
}
