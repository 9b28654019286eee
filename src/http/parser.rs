use crate::http::request::{Method, RequestLine};

/// Why a buffered byte stream failed (or has not yet passed) request-line
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Valid so far, but the line is not finished. Not a terminal failure.
    Incomplete,
    /// Empty or non-token method, or the byte after it is not a single SP.
    InvalidMethod,
    /// Target missing, empty, or not beginning with `/`. A second
    /// consecutive SP after the method lands here.
    InvalidTarget,
    /// Version token is not exactly `HTTP/1.0` or `HTTP/1.1`.
    InvalidVersion,
    /// CR not followed by LF.
    InvalidLineEnding,
}

/// Parses the request line from the front of `buf`, strictly left-to-right,
/// rejecting at the first offending byte. No backtracking.
///
/// Grammar:
///
/// ```text
/// request-line := METHOD SP TARGET SP ("HTTP/1.0" | "HTTP/1.1") CRLF
/// ```
///
/// `Err(Incomplete)` means the bytes so far are a valid prefix and more are
/// needed; every other error is terminal. This makes the function usable
/// incrementally: callers re-run it as fragments arrive and can fail fast
/// the moment the stream can no longer become a well-formed request line.
///
/// On success returns the line and the number of bytes it consumed. Header
/// lines past the request line are accepted without validation.
pub fn parse_request_line(buf: &[u8]) -> Result<(RequestLine, usize), ParseError> {
    // METHOD: one or more token bytes, then exactly one SP.
    let mut i = 0;
    while i < buf.len() && is_token_byte(buf[i]) {
        i += 1;
    }
    if i == buf.len() {
        return Err(ParseError::Incomplete);
    }
    if i == 0 || buf[i] != b' ' {
        return Err(ParseError::InvalidMethod);
    }
    let method = Method::from_token(&buf[..i]);
    i += 1;

    // TARGET: begins with `/`, runs to the next SP. A second SP here means
    // an empty target; CR or LF here means the version is missing.
    if i == buf.len() {
        return Err(ParseError::Incomplete);
    }
    if buf[i] != b'/' {
        return Err(ParseError::InvalidTarget);
    }
    let target_start = i;
    while i < buf.len() && !matches!(buf[i], b' ' | b'\r' | b'\n') {
        i += 1;
    }
    if i == buf.len() {
        return Err(ParseError::Incomplete);
    }
    if buf[i] != b' ' {
        return Err(ParseError::InvalidVersion);
    }
    // Target bytes are arbitrary apart from SP/CR/LF; non-UTF-8 sequences
    // are grammar-valid and fall out as 404 during resolution.
    let target = String::from_utf8_lossy(&buf[target_start..i]).into_owned();
    i += 1;

    // VERSION + CRLF: byte-wise prefix match against the accepted literals,
    // so a split like "HTT" stays Incomplete while "HTTQ" fails now.
    let (version, version_len) = match_version(&buf[i..])?;

    let line = RequestLine {
        method,
        target,
        version: version.to_owned(),
    };
    Ok((line, i + version_len))
}

fn match_version(rest: &[u8]) -> Result<(&'static str, usize), ParseError> {
    const V10: &[u8] = b"HTTP/1.0\r\n";
    const V11: &[u8] = b"HTTP/1.1\r\n";

    if rest.starts_with(V10) {
        return Ok(("HTTP/1.0", V10.len()));
    }
    if rest.starts_with(V11) {
        return Ok(("HTTP/1.1", V11.len()));
    }
    if V10.starts_with(rest) || V11.starts_with(rest) {
        return Err(ParseError::Incomplete);
    }
    // A correct version token followed by a CR that is not part of a CRLF.
    if rest.starts_with(b"HTTP/1.0\r") || rest.starts_with(b"HTTP/1.1\r") {
        return Err(ParseError::InvalidLineEnding);
    }
    Err(ParseError::InvalidVersion)
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}
