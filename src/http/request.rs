use std::collections::HashMap;
use std::fmt;

/// HTTP request methods.
///
/// Only GET and POST are routed. Any other token on the request line is
/// carried through as [`Method::Other`] so the request can still be logged
/// and answered (with a 404) instead of being rejected at the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Submit data
    POST,
    /// Any method token this server does not recognize
    Other(String),
}

impl Method {
    /// Maps an HTTP method token (case-sensitive) to a `Method`.
    ///
    /// Total: unrecognized tokens become [`Method::Other`].
    ///
    /// # Example
    ///
    /// ```
    /// # use attic::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".to_string()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            _ => Method::Other(s.to_string()),
        }
    }

    /// The method token as it appeared on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Headers are parsed so the body can be delimited by `Content-Length`;
/// routing itself ignores them entirely.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, or an unrecognized token)
    pub method: Method,
    /// The request path as received on the wire (e.g., "/index.html")
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, names folded to canonical Title-Case
    pub headers: HashMap<String, String>,
    /// Request body, delimited by Content-Length
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Retrieves the Content-Length header value and parses it as a usize.
    ///
    /// Returns 0 if the header is missing or not a valid number.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}
