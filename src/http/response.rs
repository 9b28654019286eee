/// HTTP status codes emitted by the server.
///
/// The full taxonomy is small by design:
/// - `Ok` (200): the target resolved to a regular file under the root
/// - `BadRequest` (400): malformed request, unsupported method, oversized
///   header block, or request timeout
/// - `NotFound` (404): the target is missing, a directory, or escapes the
///   document root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use statik::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Headers are not free-form: the wire format is always the status line,
/// `Content-Length`, then `Content-Type` on 200 responses only. Error
/// responses carry `Content-Length: 0` and no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    /// Present on 200 responses only.
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a 200 OK response carrying a file body.
    pub fn ok(body: Vec<u8>, content_type: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: Some(content_type),
            body,
        }
    }

    /// Creates an empty 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            content_type: None,
            body: Vec::new(),
        }
    }

    /// Creates an empty 404 Not Found response.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: None,
            body: Vec::new(),
        }
    }

    /// Exact byte length of the body, the value of `Content-Length`.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
