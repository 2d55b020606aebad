//! HTTP request line parsing

use crate::protocol::commands::{Method, ParseError, Request};

/// Parse `METHOD SP target SP HTTP/x.y`
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parts = trimmed.split(' ');
    let (method, target, version) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(t), Some(v), None) if !m.is_empty() && !t.is_empty() => (m, t, v),
        _ => return Err(ParseError::MalformedRequestLine(trimmed.to_string())),
    };

    if !method.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ParseError::MalformedRequestLine(trimmed.to_string()));
    }

    if !version.starts_with("HTTP/1.") {
        return Err(ParseError::UnsupportedVersion(version.to_string()));
    }

    Ok(Request {
        method: Method::parse(method),
        target: target.to_string(),
        version: version.to_string(),
    })
}
