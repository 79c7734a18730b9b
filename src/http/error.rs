//! Error types for the HTTP codec and file transfer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Malformed or incomplete input handed to the parser.
///
/// A parse either yields a complete message or one of these; there is no
/// partially filled message.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No blank line terminating the header block yet, or fewer body bytes
    /// than Content-Length declares.
    #[error("incomplete message")]
    Incomplete,

    #[error("header block is not valid UTF-8")]
    InvalidEncoding,

    #[error("empty header block")]
    EmptyMessage,

    #[error("invalid request line: {0:?}")]
    InvalidRequestLine(String),

    #[error("unknown method: {0:?}")]
    InvalidMethod(String),

    #[error("invalid status line: {0:?}")]
    InvalidStatusLine(String),

    #[error("header line without ':': {0:?}")]
    MissingColon(String),

    #[error("unrecognized header: {0:?}")]
    UnknownHeader(String),

    #[error("invalid Content-Length: {0:?}")]
    InvalidContentLength(String),
}

/// Serialization failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WriteError {
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Only responses are serialized.
    #[error("request serialization is not supported")]
    UnsupportedMessageType,

    #[error("entity attached without a Content-Length header")]
    MissingContentLength,

    #[error("Content-Length {declared} does not match entity of {actual} bytes")]
    EntityLengthMismatch { declared: usize, actual: usize },

    #[error("invalid Content-Length: {0:?}")]
    InvalidContentLength(String),
}

/// A send that stopped before every byte went out.
///
/// `sent` is the number of bytes the connection accepted before the failure.
#[derive(Debug, Error)]
#[error("send failed after {sent} bytes: {source}")]
pub struct SendError {
    pub sent: usize,
    #[source]
    pub source: io::Error,
}

/// Failure while delivering a file as a response.
///
/// Once a 200 response has started there is no fallback; the client sees a
/// truncated response.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The connection failed. `sent` counts every byte of this response
    /// that went out, head included.
    #[error("transfer aborted after {sent} bytes: {source}")]
    Send {
        sent: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Encode(#[from] WriteError),
}

impl TransferError {
    /// Bytes delivered before the failure.
    pub fn bytes_sent(&self) -> usize {
        match self {
            TransferError::Send { sent, .. } => *sent,
            _ => 0,
        }
    }
}
