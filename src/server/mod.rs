//! Accept loop and per-connection request handling.
//!
//! Each accepted socket is served on a blocking worker: one request is read,
//! parsed and answered, then the connection closes (HTTP/1.0).

pub mod connection;
pub mod listener;

use std::path::{Path, PathBuf};
use std::time::Duration;

use percent_encoding::percent_decode_str;
use tracing::warn;
use url::Url;

use crate::config::Config;
use crate::http::parser::HeaderPolicy;
use crate::http::responder::{FileResponder, TransferMode};

/// Everything a connection needs to answer requests, shared read-only
/// between workers.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub index: String,
    pub transfer: TransferMode,
    pub header_policy: HeaderPolicy,
    pub recv_buffer_size: usize,
    pub io_timeout: Duration,
    pub responder: FileResponder,
}

impl Site {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            root: cfg.files.root.clone(),
            index: cfg.files.index.clone(),
            transfer: cfg.files.transfer,
            header_policy: cfg.http.unknown_headers,
            recv_buffer_size: cfg.server.recv_buffer_size,
            io_timeout: Duration::from_secs(cfg.server.io_timeout_secs),
            responder: FileResponder::new(cfg.files.server_name.clone()),
        }
    }

    /// Maps a request URI onto a file path under the document root.
    ///
    /// Dot segments are resolved and each segment is percent-decoded. Query
    /// and fragment are dropped, and a path ending in `/` gets the index file.
    /// Returns `None` for URIs that do not resolve to a path or that decode to
    /// a segment holding a separator or NUL. Symlinks are not followed here;
    /// see [`Site::within_root`].
    pub fn resolve(&self, uri: &str) -> Option<PathBuf> {
        let base = Url::parse("http://localhost/").ok()?;
        let url = base.join(uri).ok()?;

        let mut path = self.root.clone();
        for segment in url.path_segments()? {
            if segment.is_empty() {
                continue;
            }
            let decoded = percent_decode_str(segment).decode_utf8().ok()?;
            if decoded.contains(['/', '\\', '\0']) || decoded == "." || decoded == ".." {
                return None;
            }
            path.push(Path::new(decoded.as_ref()));
        }
        if url.path().ends_with('/') {
            path.push(&self.index);
        }

        Some(path)
    }

    /// Whether `path`, with symlinks resolved, exists inside the document root.
    pub fn within_root(&self, path: &Path) -> bool {
        let root = match self.root.canonicalize() {
            Ok(root) => root,
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "Document root not accessible");
                return false;
            }
        };

        let Ok(real) = path.canonicalize() else {
            return false;
        };
        if !real.starts_with(&root) {
            warn!(path = %path.display(), target = %real.display(), "Path escapes document root");
            return false;
        }
        true
    }
}
