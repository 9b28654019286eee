/// HTTP request methods recognised by the server.
///
/// Only GET is ever served. POST and any other syntactically valid token
/// parse cleanly but are rejected with 400 before path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    OTHER,
}

impl Method {
    /// Classifies a raw method token.
    ///
    /// # Example
    ///
    /// ```
    /// # use statik::http::request::Method;
    /// assert_eq!(Method::from_token(b"GET"), Method::GET);
    /// assert_eq!(Method::from_token(b"DELETE"), Method::OTHER);
    /// ```
    pub fn from_token(token: &[u8]) -> Self {
        match token {
            b"GET" => Method::GET,
            b"POST" => Method::POST,
            _ => Method::OTHER,
        }
    }
}

/// A validated request line.
///
/// Immutable once constructed; exists only between a successful parse and
/// response dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// The request target, always beginning with `/`.
    pub target: String,
    /// Either `HTTP/1.0` or `HTTP/1.1`.
    pub version: String,
}
