//! Error types
//!
//! Defines domain-specific error types for each module of the toolkit.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Storage resolver errors
#[derive(Debug)]
pub enum StorageError {
    /// The write probe on the primary path failed for a reason other than permissions
    ProbeFailed(PathBuf, io::Error),
    DirectoryCreation(PathBuf, io::Error),
    ManifestWrite(PathBuf, io::Error),
}

impl StorageError {
    /// The underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            StorageError::ProbeFailed(_, e)
            | StorageError::DirectoryCreation(_, e)
            | StorageError::ManifestWrite(_, e) => e,
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ProbeFailed(p, e) => {
                write!(f, "Write probe failed on {}: {}", p.display(), e)
            }
            StorageError::DirectoryCreation(p, e) => {
                write!(f, "Failed to create directory {}: {}", p.display(), e)
            }
            StorageError::ManifestWrite(p, e) => {
                write!(f, "Failed to write manifest {}: {}", p.display(), e)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}

/// Volume store errors
#[derive(Debug)]
pub enum StoreError {
    InvalidKey(String),
    Io(PathBuf, io::Error),
    Serialization(PathBuf, serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidKey(k) => write!(f, "Invalid key: {:?}", k),
            StoreError::Io(p, e) => write!(f, "IO error on {}: {}", p.display(), e),
            StoreError::Serialization(p, e) => {
                write!(f, "Malformed JSON in {}: {}", p.display(), e)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// HTTP responder errors
#[derive(Debug)]
pub enum ServerError {
    BindFailed(String, io::Error),
    IoError(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::BindFailed(addr, e) => write!(f, "Failed to bind to {}: {}", addr, e),
            ServerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::IoError(error)
    }
}

/// General error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Storage(StorageError),
    Store(StoreError),
    Server(ServerError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Storage(e) => write!(f, "Storage error: {}", e),
            AppError::Store(e) => write!(f, "Store error: {}", e),
            AppError::Server(e) => write!(f, "Server error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        AppError::Storage(error)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        AppError::Store(error)
    }
}

impl From<ServerError> for AppError {
    fn from(error: ServerError) -> Self {
        AppError::Server(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}
