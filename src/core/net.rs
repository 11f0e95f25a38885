// src/core/net.rs

// HTTP/1.0 GET over TCP for static files. No TLS, no redirects, no chunking
// (HTTP/1.0 makes the server close the connection after the body).

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::fetch::FetchError;

/// Parsed `http://host[:port]/path` target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTarget {
    pub host: String,
    pub port: u16,
    pub path: String,
}

pub fn parse_url(url: &str) -> Result<HttpTarget, FetchError> {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") {
        return Err(FetchError::UnsupportedScheme(s!(url)));
    }
    let rest = url
        .get("http://".len()..)
        .filter(|_| lower.starts_with("http://"))
        .ok_or_else(|| FetchError::BadUrl(s!(url)))?;

    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    let (host, port) = match authority.rsplit_once(':') {
        Some((h, p)) => (h, p.parse::<u16>().map_err(|_| FetchError::BadUrl(s!(url)))?),
        None => (authority, 80),
    };
    if host.is_empty() {
        return Err(FetchError::BadUrl(s!(url)));
    }

    Ok(HttpTarget { host: s!(host), port, path: encode_path(path) })
}

/// Percent-encode bytes that may not appear raw in a request line
/// (spaces, non-ASCII file names). Existing escapes are kept.
pub fn encode_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for b in path.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9'
            | b'-' | b'_' | b'.' | b'~' | b'/' | b'?' | b'=' | b'&' | b'%' | b'+' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

pub fn http_get(url: &str) -> Result<String, FetchError> {
    let target = parse_url(url)?;
    let io_err = |source| FetchError::Io { url: s!(url), source };
    let timeout = Some(Duration::from_secs(HTTP_TIMEOUT_SECS));

    let mut s = TcpStream::connect((target.host.as_str(), target.port)).map_err(io_err)?;
    s.set_read_timeout(timeout).map_err(io_err)?;
    s.set_write_timeout(timeout).map_err(io_err)?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        target.path, target.host, USER_AGENT
    );
    s.write_all(req.as_bytes()).map_err(io_err)?;
    s.flush().map_err(io_err)?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(io_err)?;

    split_response(url, &buf)
}

/// Check the status line and return the body (lossy UTF-8).
pub fn split_response(url: &str, buf: &[u8]) -> Result<String, FetchError> {
    let head_end = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or_else(|| FetchError::Malformed(s!(url)))?;
    let head = String::from_utf8_lossy(&buf[..head_end]);

    let status_line = head.lines().next().unwrap_or("");
    let status: u16 = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|c| c.parse().ok())
        .ok_or_else(|| FetchError::Malformed(s!(url)))?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Status { url: s!(url), status });
    }

    Ok(String::from_utf8_lossy(&buf[head_end + 4..]).into_owned())
}
