use std::borrow::Cow;

/// Protocol version written on every response this server builds.
pub const HTTP_VERSION: &str = "HTTP/1.0";

/// Status codes the server emits.
///
/// Parsed status lines keep whatever numeric code they carry; this enum only
/// covers what the server itself produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the reason phrase this server sends for the code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "Ok",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A status line: `HTTP-Version SP Status-Code SP Reason-Phrase`.
///
/// Fields are `Cow` so a parsed line can borrow from its buffer while a built
/// one holds static or owned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine<'a> {
    /// HTTP version (e.g. "HTTP/1.0")
    pub version: Cow<'a, str>,
    /// Numeric status code
    pub code: u16,
    /// Human readable reason phrase, may be empty
    pub reason: Cow<'a, str>,
}

impl<'a> StatusLine<'a> {
    pub fn new(
        version: impl Into<Cow<'a, str>>,
        code: u16,
        reason: impl Into<Cow<'a, str>>,
    ) -> Self {
        Self {
            version: version.into(),
            code,
            reason: reason.into(),
        }
    }

    /// Status line for one of the server's own status codes, on HTTP/1.0.
    pub fn from_status(status: StatusCode) -> StatusLine<'static> {
        StatusLine::new(HTTP_VERSION, status.as_u16(), status.reason_phrase())
    }
}
