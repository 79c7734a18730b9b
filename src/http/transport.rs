use std::io::{self, Write};

use crate::http::error::SendError;

/// Sends every byte of `buf` or fails.
///
/// Keeps writing the remainder until the connection has accepted all of it.
/// The first failed write ends the attempt; a write that accepts zero bytes
/// counts as a failure. The error carries how many bytes went out before it.
pub fn send_all<W: Write + ?Sized>(conn: &mut W, buf: &[u8]) -> Result<usize, SendError> {
    let mut sent = 0;

    while sent < buf.len() {
        match conn.write(&buf[sent..]) {
            Ok(0) => {
                return Err(SendError {
                    sent,
                    source: io::Error::new(
                        io::ErrorKind::WriteZero,
                        "connection closed while writing",
                    ),
                });
            }
            Ok(n) => sent += n,
            Err(source) => return Err(SendError { sent, source }),
        }
    }

    Ok(sent)
}
