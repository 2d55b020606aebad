//! Error handlers
//!
//! Maps fatal errors to log output and process exit codes.

use crate::error::types::AppError;
use log::error;

/// Log a fatal error
pub fn handle_error(err: &AppError) {
    error!("{}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => 78,
        AppError::Storage(_) => 73,
        AppError::Store(_) => 74,
        AppError::Server(_) => 69,
        AppError::IoError(_) => 74,
    }
}
