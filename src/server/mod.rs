//! HTTP responder
//!
//! Contains the listener loop and its configuration.

pub mod config;
pub mod core;

pub use config::ServerConfig;
pub use core::Server;
