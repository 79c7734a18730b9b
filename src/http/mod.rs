//! HTTP/1.0 wire codec and file delivery.
//!
//! # Architecture
//!
//! - **`header`**: The closed catalog of recognized header names
//! - **`request`** / **`response`**: Request line, status line and status codes
//! - **`message`**: A message with its fixed header table and borrowed entity
//! - **`parser`**: Bytes to [`Message`](message::Message)
//! - **`writer`**: Response to bytes, measured before written
//! - **`transport`**: Send-all-or-fail over any `Write`
//! - **`responder`**: Files as 200 responses (buffered or streamed) and the 404 fallback
//! - **`mime`** / **`date`**: Content-Type lookup and HTTP timestamps
//!
//! # Response Dispatch
//!
//! ```text
//!        ┌─────────────┐
//!        │    Start    │
//!        └──────┬──────┘
//!               │ open file
//!        ┌──────┴───────────────┐
//!        ▼                      ▼
//!   ┌──────────┐        ┌──────────────┐
//!   │ Send 404 │        │ Build headers│
//!   └────┬─────┘        └──────┬───────┘
//!        │            ┌────────┴─────────┐
//!        │            ▼                  ▼
//!        │   ┌─────────────────┐  ┌───────────────┐
//!        │   │ Buffered:       │  │ Streamed:     │
//!        │   │ serialize whole │  │ send head,    │
//!        │   │ message, send   │  │ then chunks   │
//!        │   └────────┬────────┘  └───────┬───────┘
//!        └────────────┴─────┬─────────────┘
//!                           ▼
//!                        ┌──────┐
//!                        │ Done │
//!                        └──────┘
//! ```
//!
//! A failed send at any step ends the dispatch with an error. There is no
//! retry and no 404 once a 200 head has gone out.
//!
//! # Example
//!
//! ```
//! use lantern::http::header::HeaderId;
//! use lantern::http::parser::parse_message;
//!
//! let msg = parse_message(b"GET /index.html HTTP/1.0\r\nFrom: me@example.com\r\n\r\n").unwrap();
//! assert_eq!(msg.request_line().unwrap().uri, "/index.html");
//! assert_eq!(msg.header(HeaderId::From), Some("me@example.com"));
//! ```

pub mod date;
pub mod error;
pub mod header;
pub mod message;
pub mod mime;
pub mod parser;
pub mod request;
pub mod responder;
pub mod response;
pub mod transport;
pub mod writer;
