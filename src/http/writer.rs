//! Response serialization.
//!
//! Every unit comes as a pair: a `*_len` function that measures the exact
//! wire size and a `write_*` function that renders into a caller-provided
//! slice and returns the same count. Callers measure, size their buffer,
//! then write. Header lines are written as `Name:value` with no space after
//! the colon; the parser trims whitespace on read, so both forms round-trip.

use crate::http::error::WriteError;
use crate::http::header::HeaderId;
use crate::http::message::{HeaderValues, Message, StartLine};
use crate::http::parser::content_length;
use crate::http::response::StatusLine;

const CRLF: &[u8] = b"\r\n";

/// Bounds-checked cursor over the destination slice.
struct SliceWriter<'b> {
    buf: &'b mut [u8],
    pos: usize,
}

impl<'b> SliceWriter<'b> {
    fn new(buf: &'b mut [u8], needed: usize) -> Result<Self, WriteError> {
        if buf.len() < needed {
            return Err(WriteError::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        }
        Ok(Self { buf, pos: 0 })
    }

    fn put(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    fn rest(&mut self) -> &mut [u8] {
        &mut self.buf[self.pos..]
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }
}

fn decimal_len(n: u16) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

pub fn status_line_len(line: &StatusLine<'_>) -> usize {
    line.version.len() + 1 + decimal_len(line.code) + 1 + line.reason.len() + CRLF.len()
}

/// Writes `HTTP-VERSION SP CODE SP REASON CRLF`.
pub fn write_status_line(buf: &mut [u8], line: &StatusLine<'_>) -> Result<usize, WriteError> {
    let len = status_line_len(line);
    let mut w = SliceWriter::new(buf, len)?;

    w.put(line.version.as_bytes());
    w.put(b" ");
    w.put(line.code.to_string().as_bytes());
    w.put(b" ");
    w.put(line.reason.as_bytes());
    w.put(CRLF);

    Ok(len)
}

/// Wire size of one header line; zero when the value is absent.
pub fn header_line_len(id: HeaderId, value: Option<&str>) -> usize {
    match value {
        Some(value) => id.name().len() + 1 + value.len() + CRLF.len(),
        None => 0,
    }
}

/// Writes `Name:value CRLF`, or nothing when the value is absent.
pub fn write_header_line(
    buf: &mut [u8],
    id: HeaderId,
    value: Option<&str>,
) -> Result<usize, WriteError> {
    let len = header_line_len(id, value);
    let Some(value) = value else {
        return Ok(0);
    };

    let mut w = SliceWriter::new(buf, len)?;
    w.put(id.name().as_bytes());
    w.put(b":");
    w.put(value.as_bytes());
    w.put(CRLF);

    Ok(len)
}

pub fn header_block_len(headers: &HeaderValues<'_>) -> usize {
    HeaderId::ALL
        .into_iter()
        .map(|id| header_line_len(id, headers.get(id)))
        .sum()
}

/// Writes every present header in catalog order.
pub fn write_header_block(buf: &mut [u8], headers: &HeaderValues<'_>) -> Result<usize, WriteError> {
    let len = header_block_len(headers);
    let mut w = SliceWriter::new(buf, len)?;

    for (id, value) in headers.iter() {
        let n = write_header_line(w.rest(), id, Some(value))?;
        w.advance(n);
    }

    Ok(len)
}

/// Number of entity bytes a message serializes.
///
/// A message without an entity contributes nothing even when it declares a
/// Content-Length; that is how a head is sent ahead of a streamed body.
fn entity_len(msg: &Message<'_>) -> Result<usize, WriteError> {
    let Some(entity) = msg.entity else {
        return Ok(0);
    };

    let declared = msg
        .header(HeaderId::ContentLength)
        .ok_or(WriteError::MissingContentLength)?;
    let declared = content_length(declared)
        .ok_or_else(|| WriteError::InvalidContentLength(declared.to_string()))?;

    if declared != entity.len() {
        return Err(WriteError::EntityLengthMismatch {
            declared,
            actual: entity.len(),
        });
    }
    Ok(declared)
}

/// Exact wire size of a response: status line, headers, blank line, entity.
pub fn message_len(msg: &Message<'_>) -> Result<usize, WriteError> {
    let StartLine::Status(line) = &msg.start else {
        return Err(WriteError::UnsupportedMessageType);
    };

    Ok(status_line_len(line) + header_block_len(&msg.headers) + CRLF.len() + entity_len(msg)?)
}

/// Serializes a response into `buf` and returns the number of bytes written.
pub fn write_message(buf: &mut [u8], msg: &Message<'_>) -> Result<usize, WriteError> {
    let StartLine::Status(line) = &msg.start else {
        return Err(WriteError::UnsupportedMessageType);
    };
    let len = message_len(msg)?;
    let mut w = SliceWriter::new(buf, len)?;

    let n = write_status_line(w.rest(), line)?;
    w.advance(n);
    let n = write_header_block(w.rest(), &msg.headers)?;
    w.advance(n);
    w.put(CRLF);
    if let Some(entity) = msg.entity {
        w.put(entity);
    }

    Ok(len)
}

/// Measures, allocates and writes in one step.
pub fn serialize_message(msg: &Message<'_>) -> Result<Vec<u8>, WriteError> {
    let mut out = vec![0; message_len(msg)?];
    let n = write_message(&mut out, msg)?;
    out.truncate(n);
    Ok(out)
}
