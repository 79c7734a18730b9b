//! In-memory connection doubles shared by the integration tests.
#![allow(dead_code)]

use std::io::{self, Read, Write};

/// Accepts everything and remembers the size of each write call.
#[derive(Default)]
pub struct RecordingWriter {
    pub data: Vec<u8>,
    pub writes: Vec<usize>,
}

impl Write for RecordingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        self.writes.push(buf.len());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts at most `per_call` bytes per write.
pub struct TrickleWriter {
    pub data: Vec<u8>,
    pub per_call: usize,
}

impl Write for TrickleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.per_call);
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts `limit` bytes in total, then fails every write.
pub struct FailingWriter {
    pub data: Vec<u8>,
    pub limit: usize,
}

impl FailingWriter {
    pub fn new(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            limit,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit - self.data.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer went away"));
        }
        let n = buf.len().min(room);
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Duplex stream: reads from a fixed request, records what is written.
pub struct MockStream {
    input: io::Cursor<Vec<u8>>,
    pub output: Vec<u8>,
}

impl MockStream {
    pub fn new(request: &[u8]) -> Self {
        Self {
            input: io::Cursor::new(request.to_vec()),
            output: Vec::new(),
        }
    }
}

impl Read for MockStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.input.read(buf)
    }
}

impl Write for MockStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Splits a serialized response into (head without the blank line, body).
pub fn split_response(bytes: &[u8]) -> (String, Vec<u8>) {
    let end = bytes
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("no header terminator");
    (
        String::from_utf8(bytes[..end].to_vec()).unwrap(),
        bytes[end + 4..].to_vec(),
    )
}
