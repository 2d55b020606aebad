//! Request handling
//!
//! Every GET receives the same static page regardless of target.

use crate::protocol::commands::{Method, ParseError, Request};
use crate::protocol::responses::{BAD_REQUEST, NOT_IMPLEMENTED, OK, Response};

pub const HELLO_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Hello from Railway</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        }
        .container {
            background: white;
            padding: 50px;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            text-align: center;
        }
        h1 { color: #667eea; margin: 0; }
        p { color: #666; margin-top: 20px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>🚀 Hello World from Railway!</h1>
        <p>This is a REAL web server running on Railway</p>
        <p>Anyone with the URL can see this!</p>
    </div>
</body>
</html>
"#;

/// Build the response for a parsed request
pub fn handle_request(request: &Request) -> Response {
    match request.method {
        Method::Get => Response::html(OK, HELLO_PAGE),
        _ => Response::text(
            NOT_IMPLEMENTED,
            format!("Unsupported method ({})\n", request.method.as_str()),
        ),
    }
}

/// Response for a request head that could not be parsed
pub fn handle_parse_error(err: &ParseError) -> Response {
    let detail = match err {
        ParseError::Empty => "Empty request line".to_string(),
        ParseError::MalformedRequestLine(line) => format!("Bad request syntax ({line})"),
        ParseError::UnsupportedVersion(v) => format!("Bad request version ({v})"),
    };
    Response::text(BAD_REQUEST, format!("{detail}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::parser::parse_request_line;

    #[test]
    fn test_get_any_path_serves_page() {
        for line in ["GET / HTTP/1.1", "GET /anything?x=1 HTTP/1.0"] {
            let res = handle_request(&parse_request_line(line).unwrap());
            assert_eq!(res.status, OK);
            assert!(res.body.contains("Hello World from Railway!"));
        }
    }

    #[test]
    fn test_post_is_not_implemented() {
        let res = handle_request(&parse_request_line("POST / HTTP/1.1").unwrap());
        assert_eq!(res.status, NOT_IMPLEMENTED);
    }
}
