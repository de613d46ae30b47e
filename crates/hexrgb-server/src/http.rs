//! Minimal HTTP/1.1 framing: read one request head, write one response.
//!
//! Only what the routes need is parsed: method, path and query string.
//! Headers are skipped and request bodies are never read.

use std::time::Duration;

use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::query::Query;

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// A parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub query: Query,
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("connection closed before request head")]
    Closed,

    #[error("request head exceeds {0} bytes")]
    TooLarge(usize),

    #[error("timed out waiting for request head")]
    Timeout,

    #[error("malformed request: {0}")]
    Malformed(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read bytes until the end of the request head, then parse the request line.
pub async fn read_request<R>(
    reader: &mut R,
    max_bytes: usize,
    timeout: Duration,
) -> Result<Request, RequestError>
where
    R: AsyncRead + Unpin,
{
    let head = tokio::time::timeout(timeout, read_head(reader, max_bytes))
        .await
        .map_err(|_| RequestError::Timeout)??;
    parse_head(&head)
}

async fn read_head<R>(reader: &mut R, max_bytes: usize) -> Result<Vec<u8>, RequestError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Err(RequestError::Closed);
        }

        // Only rescan the tail that could contain a newly completed terminator.
        let scan_from = buf.len().saturating_sub(HEAD_TERMINATOR.len() - 1);
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = find(&buf[scan_from..], HEAD_TERMINATOR) {
            let head_len = scan_from + pos;
            if head_len > max_bytes {
                return Err(RequestError::TooLarge(max_bytes));
            }
            buf.truncate(head_len);
            return Ok(buf);
        }
        if buf.len() > max_bytes {
            return Err(RequestError::TooLarge(max_bytes));
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Parse the request line out of a request head (terminator excluded).
pub fn parse_head(head: &[u8]) -> Result<Request, RequestError> {
    let head = std::str::from_utf8(head).map_err(|_| RequestError::Malformed("not utf-8"))?;
    let line = head.lines().next().unwrap_or_default();

    let mut parts = line.split_whitespace();
    let method = parts.next().ok_or(RequestError::Malformed("missing method"))?;
    let target = parts.next().ok_or(RequestError::Malformed("missing target"))?;
    let version = parts.next().ok_or(RequestError::Malformed("missing version"))?;
    if parts.next().is_some() {
        return Err(RequestError::Malformed("too many request line fields"));
    }
    if !version.starts_with("HTTP/1.") {
        return Err(RequestError::Malformed("unsupported version"));
    }

    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, query),
        None => (target, ""),
    };
    if !path.starts_with('/') {
        return Err(RequestError::Malformed("target must be origin-form"));
    }

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        query: Query::parse(query),
    })
}

/// A complete response. Always sent with `Connection: close`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    /// Answering HEAD: headers describe `body`, but it is not sent.
    pub omit_body: bool,
}

impl Response {
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.into(),
            omit_body: false,
        }
    }

    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                content_type: "application/json; charset=utf-8",
                body,
                omit_body: false,
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response body");
                Self::text(500, "Internal Server Error")
            }
        }
    }

    /// Serialize status line, headers and body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            reason_phrase(self.status),
            self.content_type,
            self.body.len(),
        );
        let mut out = head.into_bytes();
        if !self.omit_body {
            out.extend_from_slice(self.body.as_bytes());
        }
        out
    }

    pub fn without_body(self) -> Self {
        Self {
            omit_body: true,
            ..self
        }
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        431 => "Request Header Fields Too Large",
        500 => "Internal Server Error",
        _ => "",
    }
}

pub async fn write_response<W>(writer: &mut W, response: &Response) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(&response.to_bytes()).await?;
    writer.flush().await
}
