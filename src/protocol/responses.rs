//! HTTP response handling
//!
//! Defines status codes and response formatting.

/// Status codes used by the responder
pub const OK: u16 = 200;
pub const BAD_REQUEST: u16 = 400;
pub const REQUEST_TIMEOUT: u16 = 408;
pub const NOT_IMPLEMENTED: u16 = 501;

pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        OK => "OK",
        BAD_REQUEST => "Bad Request",
        REQUEST_TIMEOUT => "Request Timeout",
        NOT_IMPLEMENTED => "Not Implemented",
        _ => "Unknown",
    }
}

/// A complete response ready to be written to the socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    pub fn html(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body: body.into(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.into(),
        }
    }

    /// Serialize status line, headers and body
    pub fn to_bytes(&self) -> Vec<u8> {
        format_response(self.status, self.content_type, &self.body).into_bytes()
    }
}

/// Format an HTTP/1.1 response. The connection is always closed afterwards.
pub fn format_response(code: u16, content_type: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        code,
        reason_phrase(code),
        content_type,
        body.len(),
        body
    )
}
