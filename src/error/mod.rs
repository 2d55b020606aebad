//! Error handling
//!
//! Defines error types and handling for the toolkit.

pub mod handlers;
pub mod types;

pub use types::*;
