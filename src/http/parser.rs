use serde::Deserialize;

use crate::http::error::ParseError;
use crate::http::header::HeaderId;
use crate::http::message::{HeaderValues, Message, MessageType, StartLine};
use crate::http::request::{Method, RequestLine};
use crate::http::response::StatusLine;

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// What to do with a header line whose name is outside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HeaderPolicy {
    /// Abort the parse.
    #[serde(rename = "reject")]
    Strict,
    /// Drop the line and keep going. Lines without a colon still abort.
    #[serde(rename = "skip")]
    SkipUnknown,
}

/// Classifies a header block by its first bytes.
///
/// Anything starting with `HTTP/` is a response. Otherwise a first token
/// naming a known method makes it a request, and everything else is taken
/// as a version-less (HTTP/0.9 style) status line.
pub fn message_type(head: &str) -> MessageType {
    if head.is_empty() {
        return MessageType::Unknown;
    }
    if head.starts_with("HTTP/") {
        return MessageType::Response;
    }

    let first = head.split([' ', '\r', '\n']).next().unwrap_or_default();
    if Method::from_str(first).is_some() {
        MessageType::Request
    } else {
        MessageType::Response
    }
}

/// Parses `METHOD SP URI [SP HTTP-VERSION]`.
///
/// Runs of spaces separate tokens. A missing version is the HTTP/0.9 simple
/// request and is not an error.
pub fn parse_request_line(line: &str) -> Result<RequestLine<'_>, ParseError> {
    let mut parts = line.split(' ').filter(|part| !part.is_empty());

    let method_str = parts
        .next()
        .ok_or_else(|| ParseError::InvalidRequestLine(line.to_string()))?;
    let method = Method::from_str(method_str)
        .ok_or_else(|| ParseError::InvalidMethod(method_str.to_string()))?;

    let uri = parts
        .next()
        .ok_or_else(|| ParseError::InvalidRequestLine(line.to_string()))?;
    let version = parts.next();

    if parts.next().is_some() {
        return Err(ParseError::InvalidRequestLine(line.to_string()));
    }

    Ok(RequestLine {
        method,
        uri,
        version,
    })
}

/// Parses `HTTP-VERSION SP STATUS-CODE SP REASON-PHRASE`.
///
/// The reason phrase runs to the end of the line and may contain spaces.
pub fn parse_status_line(line: &str) -> Result<StatusLine<'_>, ParseError> {
    let invalid = || ParseError::InvalidStatusLine(line.to_string());
    let mut parts = line.splitn(3, ' ');

    let version = parts
        .next()
        .filter(|v| v.starts_with("HTTP/"))
        .ok_or_else(invalid)?;

    let code = parts
        .next()
        .filter(|c| !c.is_empty() && c.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|c| c.parse::<u16>().ok())
        .ok_or_else(invalid)?;

    let reason = parts.next().unwrap_or_default();

    Ok(StatusLine::new(version, code, reason))
}

/// Parses one `Name: value` line into its header id and trimmed value.
///
/// A trailing CRLF and whitespace ahead of the name are ignored. Unlike a lookup miss on [`HeaderId`], an
/// unrecognized name is an error here so that a message cannot silently lose
/// headers.
pub fn parse_header_line(raw: &str) -> Result<(HeaderId, &str), ParseError> {
    let line = raw.strip_suffix("\r\n").unwrap_or(raw);

    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| ParseError::MissingColon(line.to_string()))?;

    let name = name.trim_start();
    let id = HeaderId::from_name(name)
        .ok_or_else(|| ParseError::UnknownHeader(name.to_string()))?;

    Ok((id, value.trim()))
}

/// Parses a complete message, rejecting unrecognized headers.
///
/// See [`parse_message_with`].
pub fn parse_message(buf: &[u8]) -> Result<Message<'_>, ParseError> {
    parse_message_with(buf, HeaderPolicy::Strict)
}

/// Parses a message from `buf`.
///
/// The header block ends at the first CRLFCRLF. When a Content-Length header
/// is present the entity is exactly that many bytes following the block,
/// borrowed from `buf` without copying. Returns [`ParseError::Incomplete`]
/// while the terminator or declared body bytes have not arrived yet.
pub fn parse_message_with(buf: &[u8], policy: HeaderPolicy) -> Result<Message<'_>, ParseError> {
    let head_end = find_head_end(buf).ok_or(ParseError::Incomplete)?;
    let head = std::str::from_utf8(&buf[..head_end]).map_err(|_| ParseError::InvalidEncoding)?;
    let body = &buf[head_end + HEAD_TERMINATOR.len()..];

    let mut lines = head.split("\r\n");
    let first = lines.next().unwrap_or_default();

    let start = match message_type(head) {
        MessageType::Request => StartLine::Request(parse_request_line(first)?),
        MessageType::Response => StartLine::Status(parse_status_line(first)?),
        MessageType::Unknown => return Err(ParseError::EmptyMessage),
    };

    let mut headers = HeaderValues::new();
    for line in lines {
        match parse_header_line(line) {
            Ok((id, value)) => headers.set(id, value),
            Err(ParseError::UnknownHeader(name)) if policy == HeaderPolicy::SkipUnknown => {
                tracing::debug!(header = %name, "Skipping unrecognized header");
            }
            Err(e) => return Err(e),
        }
    }

    let entity = match headers.get(HeaderId::ContentLength) {
        Some(declared) => {
            let len = content_length(declared)
                .ok_or_else(|| ParseError::InvalidContentLength(declared.to_string()))?;
            if body.len() < len {
                return Err(ParseError::Incomplete);
            }
            Some(&body[..len])
        }
        None => None,
    };

    Ok(Message {
        start,
        headers,
        entity,
    })
}

/// Reads a Content-Length value: ASCII digits only, no sign.
pub(crate) fn content_length(value: &str) -> Option<usize> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEAD_TERMINATOR.len())
        .position(|w| w == HEAD_TERMINATOR)
}
