use std::fmt;

/// HTTP request methods defined by HTTP/1.0.
///
/// Anything else is not a method this server understands; lookups return
/// `None` instead of a catch-all variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Submit data
    POST,
}

impl Method {
    /// Parses an HTTP method from its request-line token.
    ///
    /// # Arguments
    ///
    /// * `s` - Method token (case-sensitive)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the token matches a known method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("PUT"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            "POST" => Some(Method::POST),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed request line.
///
/// Borrows from the receive buffer it was parsed from. `version` is `None`
/// for an HTTP/0.9 simple request (`GET /path`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine<'a> {
    /// The HTTP method
    pub method: Method,
    /// The request URI exactly as sent (e.g. "/index.html")
    pub uri: &'a str,
    /// HTTP version token, if present (e.g. "HTTP/1.0")
    pub version: Option<&'a str>,
}

impl RequestLine<'_> {
    /// True for the legacy HTTP/0.9 form without a version token.
    pub fn is_simple(&self) -> bool {
        self.version.is_none()
    }
}
