use std::borrow::Cow;

use crate::http::header::HeaderId;
use crate::http::request::RequestLine;
use crate::http::response::StatusLine;

/// Which kind of start line a message carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Request,
    Response,
    /// Nothing to classify (empty header block).
    Unknown,
}

/// Header table with exactly one slot per [`HeaderId`].
///
/// An empty slot means the header is not set. Iteration always follows
/// catalog order, independent of the order values were set in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderValues<'a> {
    slots: [Option<Cow<'a, str>>; HeaderId::COUNT],
}

impl<'a> HeaderValues<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: HeaderId) -> Option<&str> {
        self.slots[id.index()].as_deref()
    }

    /// Sets a header, replacing any previous value.
    pub fn set(&mut self, id: HeaderId, value: impl Into<Cow<'a, str>>) {
        let value = value.into();
        tracing::debug!(header = id.name(), value = %value, "Setting header");
        self.slots[id.index()] = Some(value);
    }

    pub fn remove(&mut self, id: HeaderId) -> Option<Cow<'a, str>> {
        self.slots[id.index()].take()
    }

    /// Number of headers currently set.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present headers in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (HeaderId, &str)> {
        HeaderId::ALL
            .into_iter()
            .filter_map(|id| self.get(id).map(|value| (id, value)))
    }
}

/// Request line or status line of a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartLine<'a> {
    Request(RequestLine<'a>),
    Status(StatusLine<'a>),
}

/// An HTTP/1.0 message: start line, header table and optional entity body.
///
/// The entity is a borrowed view. For a parsed message it points into the
/// receive buffer, so the message cannot outlive that buffer. For a response
/// being built it points at the caller's payload. The entity is only
/// meaningful together with a Content-Length header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<'a> {
    pub start: StartLine<'a>,
    pub headers: HeaderValues<'a>,
    pub entity: Option<&'a [u8]>,
}

impl<'a> Message<'a> {
    pub fn request(line: RequestLine<'a>) -> Self {
        Self {
            start: StartLine::Request(line),
            headers: HeaderValues::new(),
            entity: None,
        }
    }

    pub fn response(line: StatusLine<'a>) -> Self {
        Self {
            start: StartLine::Status(line),
            headers: HeaderValues::new(),
            entity: None,
        }
    }

    pub fn message_type(&self) -> MessageType {
        match self.start {
            StartLine::Request(_) => MessageType::Request,
            StartLine::Status(_) => MessageType::Response,
        }
    }

    pub fn request_line(&self) -> Option<&RequestLine<'a>> {
        match &self.start {
            StartLine::Request(line) => Some(line),
            StartLine::Status(_) => None,
        }
    }

    pub fn status_line(&self) -> Option<&StatusLine<'a>> {
        match &self.start {
            StartLine::Status(line) => Some(line),
            StartLine::Request(_) => None,
        }
    }

    pub fn header(&self, id: HeaderId) -> Option<&str> {
        self.headers.get(id)
    }

    pub fn set_header(&mut self, id: HeaderId, value: impl Into<Cow<'a, str>>) {
        self.headers.set(id, value);
    }

    /// Attaches an entity body and declares its length in Content-Length.
    pub fn with_entity(mut self, entity: &'a [u8]) -> Self {
        self.headers
            .set(HeaderId::ContentLength, entity.len().to_string());
        self.entity = Some(entity);
        self
    }
}
