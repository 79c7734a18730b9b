use std::io::{Read, Write};
use std::sync::Arc;

use bytes::BytesMut;
use tracing::{debug, info, warn};

use crate::http::error::ParseError;
use crate::http::parser::parse_message_with;
use crate::http::request::Method;
use crate::http::responder::{Delivery, send_404};
use crate::server::Site;

const READ_CHUNK: usize = 1024;

pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    send_buffer: Vec<u8>,
    site: Arc<Site>,
}

enum ConnectionState {
    Reading,
    Responding,
    Closed,
}

impl<S: Read + Write> Connection<S> {
    pub fn new(stream: S, site: Arc<Site>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(site.recv_buffer_size),
            send_buffer: Vec::new(),
            site,
        }
    }

    pub fn into_stream(self) -> S {
        self.stream
    }

    /// Serves a single request, then returns so the caller can close.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut state = ConnectionState::Reading;

        loop {
            state = match state {
                ConnectionState::Reading => {
                    if self.read_request()? {
                        ConnectionState::Responding
                    } else {
                        ConnectionState::Closed
                    }
                }

                ConnectionState::Responding => {
                    let delivery = self.respond()?;
                    debug!(bytes = delivery.bytes(), "Response complete");
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        self.stream.flush()?;
        Ok(())
    }

    /// Reads until the buffered bytes hold a complete message.
    ///
    /// Returns `false` if the peer closed before sending one.
    pub fn read_request(&mut self) -> anyhow::Result<bool> {
        loop {
            // Try parsing whatever we already have
            match parse_message_with(&self.buffer, self.site.header_policy) {
                Err(ParseError::Incomplete) => {}
                _ => return Ok(true),
            }

            if self.buffer.len() >= self.site.recv_buffer_size {
                anyhow::bail!(
                    "request exceeds receive buffer of {} bytes",
                    self.site.recv_buffer_size
                );
            }

            let mut temp = [0u8; READ_CHUNK];
            let want = READ_CHUNK.min(self.site.recv_buffer_size - self.buffer.len());
            let n = self.stream.read(&mut temp[..want])?;

            if n == 0 {
                // Client closed connection
                return Ok(false);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    fn respond(&mut self) -> anyhow::Result<Delivery> {
        let request = parse_message_with(&self.buffer, self.site.header_policy)
            .map_err(|e| anyhow::anyhow!("HTTP parse error: {}", e))?;

        let Some(line) = request.request_line() else {
            anyhow::bail!("expected a request, got a response");
        };

        let site = &self.site;
        let Some(path) = site.resolve(line.uri) else {
            warn!(uri = line.uri, "Unresolvable request URI");
            let bytes = send_404(&mut self.stream)?;
            return Ok(Delivery::NotFound { bytes });
        };

        if !site.within_root(&path) {
            info!(uri = line.uri, path = %path.display(), status = 404, "404 Not Found");
            let bytes = send_404(&mut self.stream)?;
            return Ok(Delivery::NotFound { bytes });
        }

        debug!(method = %line.method, uri = line.uri, path = %path.display(), "Dispatching request");

        let delivery = match line.method {
            Method::GET => site.responder.send(
                site.transfer,
                &path,
                &mut self.send_buffer,
                &mut self.stream,
            )?,
            Method::HEAD => site.responder.send_head(&path, &mut self.stream)?,
            Method::POST => {
                debug!(uri = line.uri, "No handler for POST");
                let bytes = send_404(&mut self.stream)?;
                Delivery::NotFound { bytes }
            }
        };

        Ok(delivery)
    }
}
