//! File delivery as HTTP/1.0 responses.
//!
//! A file goes out either fully buffered (one serialized message, memory
//! proportional to the file) or streamed (head first, then the body in
//! [`STREAM_CHUNK_SIZE`] pieces). A file that cannot be opened gets the fixed
//! 404 response instead. Once a 200 head has started going out, failures are
//! reported to the caller and nothing else is sent.

use std::fs::{File, Metadata};
use std::io::{Read, Write};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::http::date;
use crate::http::error::{SendError, TransferError};
use crate::http::header::HeaderId;
use crate::http::message::Message;
use crate::http::mime;
use crate::http::response::{StatusCode, StatusLine};
use crate::http::transport::send_all;
use crate::http::writer::{message_len, serialize_message, write_message};

/// Body bytes per write in streamed mode.
pub const STREAM_CHUNK_SIZE: usize = 512;

pub const DEFAULT_SERVER_NAME: &str = "lantern/0.1";

/// The complete 404 response.
pub const NOT_FOUND_RESPONSE: &[u8] = b"HTTP/1.0 404 Not Found\r\n\r\n";

/// How a file body is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    #[default]
    Buffered,
    Streamed,
}

/// What went out on a successful dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// 200 response, `bytes` on the wire including the head.
    Sent { bytes: usize },
    /// The file could not be opened; the 404 response went out instead.
    NotFound { bytes: usize },
}

impl Delivery {
    pub fn bytes(&self) -> usize {
        match self {
            Delivery::Sent { bytes } | Delivery::NotFound { bytes } => *bytes,
        }
    }
}

/// Sends the fixed 404 response.
pub fn send_404<W: Write + ?Sized>(conn: &mut W) -> Result<usize, SendError> {
    send_all(conn, NOT_FOUND_RESPONSE)
}

fn aborted(already_sent: usize, err: SendError) -> TransferError {
    TransferError::Send {
        sent: already_sent + err.sent,
        source: err.source,
    }
}

/// Builds and sends 200 responses for files.
#[derive(Debug, Clone)]
pub struct FileResponder {
    server_name: String,
}

impl Default for FileResponder {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_NAME)
    }
}

impl FileResponder {
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
        }
    }

    /// Sends `path` using the given transfer mode.
    pub fn send<W: Write + ?Sized>(
        &self,
        mode: TransferMode,
        path: &Path,
        send_buf: &mut Vec<u8>,
        conn: &mut W,
    ) -> Result<Delivery, TransferError> {
        match mode {
            TransferMode::Buffered => self.send_buffered(path, send_buf, conn),
            TransferMode::Streamed => self.send_streamed(path, conn),
        }
    }

    /// Reads the whole file and sends it as a single message.
    ///
    /// The message is serialized into `send_buf`, which is resized to the
    /// exact message length. The buffer is reused across calls, so it must
    /// not be shared between concurrent dispatches.
    pub fn send_buffered<W: Write + ?Sized>(
        &self,
        path: &Path,
        send_buf: &mut Vec<u8>,
        conn: &mut W,
    ) -> Result<Delivery, TransferError> {
        let Some((mut file, meta)) = open_regular(path) else {
            return not_found(path, conn);
        };

        let mut content = Vec::with_capacity(usize::try_from(meta.len()).unwrap_or(0));
        file.read_to_end(&mut content)
            .map_err(|source| TransferError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut response = self.ok_response(path, &meta, content.len() as u64);
        response.entity = Some(&content);

        send_buf.clear();
        send_buf.resize(message_len(&response)?, 0);
        let len = write_message(send_buf, &response)?;

        let sent = send_all(conn, &send_buf[..len]).map_err(|e| aborted(0, e))?;
        info!(path = %path.display(), status = 200, bytes = sent, "200 Ok");
        Ok(Delivery::Sent { bytes: sent })
    }

    /// Sends the head, then the body in chunks of at most
    /// [`STREAM_CHUNK_SIZE`] bytes.
    ///
    /// Peak body memory is one chunk regardless of file size. The head also
    /// advertises `Connection:keep-alive`.
    pub fn send_streamed<W: Write + ?Sized>(
        &self,
        path: &Path,
        conn: &mut W,
    ) -> Result<Delivery, TransferError> {
        let Some((mut file, meta)) = open_regular(path) else {
            return not_found(path, conn);
        };

        let mut response = self.ok_response(path, &meta, meta.len());
        response.set_header(HeaderId::Connection, "keep-alive");
        let head = serialize_message(&response)?;

        let mut sent = send_all(conn, &head).map_err(|e| aborted(0, e))?;

        let mut chunk = [0u8; STREAM_CHUNK_SIZE];
        let mut remaining = meta.len();
        while remaining > 0 {
            let n = remaining.min(STREAM_CHUNK_SIZE as u64) as usize;
            if let Err(source) = file.read_exact(&mut chunk[..n]) {
                warn!(path = %path.display(), sent, error = %source, "File read failed mid-stream");
                return Err(TransferError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }

            let written = send_all(conn, &chunk[..n]).map_err(|e| aborted(sent, e))?;
            sent += written;
            remaining -= n as u64;
        }

        info!(path = %path.display(), status = 200, bytes = sent, "200 Ok (streamed)");
        Ok(Delivery::Sent { bytes: sent })
    }

    /// Sends the head a GET would get, without the body.
    pub fn send_head<W: Write + ?Sized>(
        &self,
        path: &Path,
        conn: &mut W,
    ) -> Result<Delivery, TransferError> {
        let Some((_, meta)) = open_regular(path) else {
            return not_found(path, conn);
        };

        let response = self.ok_response(path, &meta, meta.len());
        let head = serialize_message(&response)?;
        let sent = send_all(conn, &head).map_err(|e| aborted(0, e))?;

        info!(path = %path.display(), status = 200, bytes = sent, "200 Ok (head)");
        Ok(Delivery::Sent { bytes: sent })
    }

    /// 200 response head for a file, without an entity attached.
    fn ok_response<'a>(&'a self, path: &Path, meta: &Metadata, content_length: u64) -> Message<'a> {
        let mut response = Message::response(StatusLine::from_status(StatusCode::Ok));

        response.set_header(HeaderId::ContentLength, content_length.to_string());
        response.set_header(HeaderId::ContentType, mime::content_type_for(path));
        response.set_header(HeaderId::Date, date::now());
        response.set_header(HeaderId::Server, self.server_name.as_str());
        match meta.modified() {
            Ok(modified) => {
                response.set_header(HeaderId::LastModified, date::format_http_date(modified));
            }
            Err(e) => debug!(path = %path.display(), error = %e, "No modification time"),
        }

        response
    }
}

/// Opens `path` if it is a regular file.
fn open_regular(path: &Path) -> Option<(File, Metadata)> {
    let file = File::open(path).ok()?;
    let meta = file.metadata().ok()?;
    meta.is_file().then_some((file, meta))
}

fn not_found<W: Write + ?Sized>(path: &Path, conn: &mut W) -> Result<Delivery, TransferError> {
    info!(path = %path.display(), status = 404, "404 Not Found");
    let bytes = send_404(conn).map_err(|e| aborted(0, e))?;
    Ok(Delivery::NotFound { bytes })
}
