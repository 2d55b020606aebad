//! Logging middleware
//!
//! Provides connection and access logging for the HTTP responder.

use log::{debug, info};
use std::net::SocketAddr;

use crate::protocol::{Request, Response};

/// Log an accepted connection
pub fn log_connection(peer: SocketAddr) {
    debug!("Connection from {}", peer);
}

/// Log a served request in a common-log-like form
pub fn log_request(peer: SocketAddr, request: Option<&Request>, response: &Response) {
    match request {
        Some(req) => info!(
            "{} \"{} {} {}\" {} {}",
            peer,
            req.method.as_str(),
            req.target,
            req.version,
            response.status,
            response.body.len()
        ),
        None => info!("{} \"-\" {} {}", peer, response.status, response.body.len()),
    }
}
