use log::{error, info, warn};
use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{Duration, timeout};

use crate::error::ServerError;
use crate::middleware::logging::{log_connection, log_request};
use crate::protocol::responses::REQUEST_TIMEOUT;
use crate::protocol::{
    ParseError, Request, Response, handle_parse_error, handle_request, parse_request_line,
};
use crate::server::config::ServerConfig;

/// Upper bound on request line plus headers
const MAX_HEAD_BYTES: usize = 8 * 1024;

pub struct Server {
    listener: TcpListener,
    config: ServerConfig,
}

impl Server {
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let addr = config.socket_addr();
        let listener = match TcpListener::bind(&addr).await {
            Ok(listener) => {
                info!("Server bound to {}", addr);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", addr, e);
                return Err(ServerError::BindFailed(addr, e));
            }
        };

        Ok(Self { listener, config })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Accept connections forever, one task per connection
    pub async fn start(self) {
        info!("Serving HTTP on {}", self.config.socket_addr());
        let head_timeout = self.config.head_timeout();

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    // Spawn a task for each connection so accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, addr, head_timeout).await {
                            warn!("Failed to handle connection {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

/// Reads one request head, writes one response, closes.
async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    head_timeout: Duration,
) -> Result<(), std::io::Error> {
    log_connection(peer);

    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half.take(MAX_HEAD_BYTES as u64 + 1));

    let head = match timeout(head_timeout, read_head(&mut reader)).await {
        Ok(head) => head?,
        Err(_) => {
            warn!("Timed out waiting for request head from {}", peer);
            let response = Response::text(REQUEST_TIMEOUT, "Request timed out\n");
            write_half.write_all(&response.to_bytes()).await?;
            write_half.shutdown().await?;
            log_request(peer, None, &response);
            return Ok(());
        }
    };

    let (request, response) = match head {
        Some(Ok(request)) => {
            let response = handle_request(&request);
            (Some(request), response)
        }
        Some(Err(e)) => (None, handle_parse_error(&e)),
        // Connection closed without sending anything
        None => return Ok(()),
    };

    write_half.write_all(&response.to_bytes()).await?;
    write_half.flush().await?;
    write_half.shutdown().await?;

    log_request(peer, request.as_ref(), &response);
    Ok(())
}

/// Returns `None` on immediate EOF. Headers after the request line are discarded.
///
/// Bytes are decoded lossily, so non-UTF-8 input reaches the parser instead
/// of failing the read.
async fn read_head<R>(
    reader: &mut R,
) -> Result<Option<Result<Request, ParseError>>, std::io::Error>
where
    R: AsyncBufReadExt + Unpin,
{
    let mut raw = Vec::new();
    let mut total = reader.read_until(b'\n', &mut raw).await?;
    if total == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&raw);
    if total > MAX_HEAD_BYTES || !line.ends_with('\n') {
        return Ok(Some(Err(ParseError::MalformedRequestLine(
            line.trim_end().chars().take(64).collect(),
        ))));
    }

    let request = parse_request_line(&line);

    let mut header = Vec::new();
    loop {
        header.clear();
        let n = reader.read_until(b'\n', &mut header).await?;
        total += n;
        if n == 0 || header == b"\r\n" || header == b"\n" {
            break;
        }
        if total > MAX_HEAD_BYTES {
            return Ok(Some(Err(ParseError::MalformedRequestLine(
                "request head too large".into(),
            ))));
        }
    }

    Ok(Some(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Method;

    #[tokio::test]
    async fn test_read_head_discards_headers() {
        let mut input: &[u8] = b"GET /x HTTP/1.1\r\nHost: a\r\nAccept: */*\r\n\r\nbody";
        let request = read_head(&mut input).await.unwrap().unwrap().unwrap();

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.target, "/x");
        assert_eq!(input, b"body");
    }

    #[tokio::test]
    async fn test_read_head_decodes_non_utf8_lossily() {
        let mut input: &[u8] = b"GET /caf\xe9 HTTP/1.1\r\nX-Raw: \xff\r\n\r\n";
        let request = read_head(&mut input).await.unwrap().unwrap().unwrap();

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.target, "/caf\u{FFFD}");

        let mut garbage: &[u8] = b"\xff\xfe\x00garbage\r\n\r\n";
        let result = read_head(&mut garbage).await.unwrap().unwrap();
        assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
    }

    #[tokio::test]
    async fn test_read_head_empty_connection() {
        let mut input: &[u8] = b"";
        assert!(read_head(&mut input).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_head_rejects_oversized_headers() {
        let mut raw = b"GET / HTTP/1.1\r\n".to_vec();
        while raw.len() <= MAX_HEAD_BYTES {
            raw.extend_from_slice(b"X-Filler: aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\r\n");
        }
        raw.extend_from_slice(b"\r\n");
        let mut input: &[u8] = &raw;

        let result = read_head(&mut input).await.unwrap().unwrap();
        assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
    }
}
