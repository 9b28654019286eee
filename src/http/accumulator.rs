use bytes::BytesMut;

/// Outcome of feeding more bytes into a [`RequestBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// No header terminator yet; keep reading.
    Incomplete,
    /// Terminator found. `header_len` is the length of the header block,
    /// excluding the `\r\n\r\n` itself. Bytes past the terminator are
    /// ignored: no pipelining.
    Complete { header_len: usize },
    /// The buffer grew past the configured cap without a terminator.
    Overflow,
}

/// Buffers inbound bytes across partial reads until a full request head
/// (request line + header lines + empty line) is present.
///
/// Owned by exactly one connection and dropped with it. Correct for any
/// fragmentation of the input, down to one byte per read.
pub struct RequestBuffer {
    buf: BytesMut,
    max_bytes: usize,
    // Scan position for the terminator search, so each feed only looks at
    // new bytes (minus a 3-byte overlap for a split terminator).
    scanned: usize,
    terminator_at: Option<usize>,
}

impl RequestBuffer {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(1024),
            max_bytes,
            scanned: 0,
            terminator_at: None,
        }
    }

    /// Appends a chunk and reports whether the request head is complete.
    pub fn feed(&mut self, chunk: &[u8]) -> FeedOutcome {
        self.buf.extend_from_slice(chunk);

        if let Some(header_len) = self.terminator_at {
            return FeedOutcome::Complete { header_len };
        }

        let start = self.scanned.saturating_sub(3);
        if let Some(pos) = self.buf[start..].windows(4).position(|w| w == b"\r\n\r\n") {
            let header_len = start + pos;
            self.terminator_at = Some(header_len);
            return FeedOutcome::Complete { header_len };
        }
        self.scanned = self.buf.len();

        if self.buf.len() > self.max_bytes {
            return FeedOutcome::Overflow;
        }
        FeedOutcome::Incomplete
    }

    /// Everything buffered so far.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }
}
