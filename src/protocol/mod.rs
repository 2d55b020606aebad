//! HTTP protocol implementation
//!
//! Handles request line parsing and response generation for the
//! single-page responder.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;

pub use commands::{Method, ParseError, Request};
pub use handlers::{HELLO_PAGE, handle_parse_error, handle_request};
pub use parser::parse_request_line;
pub use responses::Response;
