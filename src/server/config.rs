//! Server configuration
//!
//! Listener settings for the HTTP responder.

use std::time::Duration;

/// Server configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// Seconds a client may take to send its request head
    pub timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            timeout: 10,
        }
    }
}

impl ServerConfig {
    /// Bind address and port as a socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn head_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
