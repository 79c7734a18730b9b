//! Lantern - HTTP/1.0 file server
//!
//! Wire codec for HTTP/1.0 messages, file delivery on top of it, and a small
//! server that ties both to TCP connections.

pub mod config;
pub mod http;
pub mod server;
