use std::fmt;

/// Header names understood by the HTTP/1.0 codec.
///
/// The set is closed. Declaration order is the catalog order: it indexes the
/// header table of a [`Message`](crate::http::message::Message) and fixes the
/// order in which headers are written to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderId {
    // General headers
    Date,
    Pragma,
    Connection,
    // Entity headers
    Allow,
    ContentEncoding,
    ContentLength,
    ContentType,
    Expires,
    LastModified,
    // Request headers
    Authorization,
    From,
    IfModifiedSince,
    Referer,
    UserAgent,
    // Response headers
    Location,
    Server,
    WwwAuthenticate,
}

impl HeaderId {
    /// Number of recognized headers.
    pub const COUNT: usize = 17;

    /// Every recognized header in catalog order.
    pub const ALL: [HeaderId; HeaderId::COUNT] = [
        HeaderId::Date,
        HeaderId::Pragma,
        HeaderId::Connection,
        HeaderId::Allow,
        HeaderId::ContentEncoding,
        HeaderId::ContentLength,
        HeaderId::ContentType,
        HeaderId::Expires,
        HeaderId::LastModified,
        HeaderId::Authorization,
        HeaderId::From,
        HeaderId::IfModifiedSince,
        HeaderId::Referer,
        HeaderId::UserAgent,
        HeaderId::Location,
        HeaderId::Server,
        HeaderId::WwwAuthenticate,
    ];

    /// Returns the wire name of the header.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::header::HeaderId;
    /// assert_eq!(HeaderId::ContentLength.name(), "Content-Length");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            HeaderId::Date => "Date",
            HeaderId::Pragma => "Pragma",
            HeaderId::Connection => "Connection",
            HeaderId::Allow => "Allow",
            HeaderId::ContentEncoding => "Content-Encoding",
            HeaderId::ContentLength => "Content-Length",
            HeaderId::ContentType => "Content-Type",
            HeaderId::Expires => "Expires",
            HeaderId::LastModified => "Last-Modified",
            HeaderId::Authorization => "Authorization",
            HeaderId::From => "From",
            HeaderId::IfModifiedSince => "If-Modified-Since",
            HeaderId::Referer => "Referer",
            HeaderId::UserAgent => "User-Agent",
            HeaderId::Location => "Location",
            HeaderId::Server => "Server",
            HeaderId::WwwAuthenticate => "WWW-Authenticate",
        }
    }

    /// Looks up a header by its exact, case-sensitive wire name.
    ///
    /// Returns `None` for names outside the catalog. That is a lookup miss,
    /// not an error; callers decide whether it matters.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::header::HeaderId;
    /// assert_eq!(HeaderId::from_name("Server"), Some(HeaderId::Server));
    /// assert_eq!(HeaderId::from_name("server"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        HeaderId::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Slot of this header in a header table.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HeaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
