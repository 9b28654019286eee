use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::Instant;
use tracing::debug;

use crate::config::{Limits, TimeoutPolicy};
use crate::http::accumulator::{FeedOutcome, RequestBuffer};
use crate::http::parser::{ParseError, parse_request_line};
use crate::http::request::Method;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::serve::files::StaticFiles;

/// One accepted client connection: read, classify, respond once, close.
pub struct Connection {
    stream: TcpStream,
    buffer: RequestBuffer,
    files: Arc<StaticFiles>,
    limits: Limits,
}

enum SessionState {
    Reading,
    Responding(Response),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, files: Arc<StaticFiles>, limits: Limits) -> Self {
        let buffer = RequestBuffer::new(limits.max_header_bytes);
        Self {
            stream,
            buffer,
            files,
            limits,
        }
    }

    /// Drives the session to completion. Every path through here writes
    /// exactly one response before the socket closes; the errors this
    /// returns are socket-level failures where no response could be
    /// delivered at all.
    pub async fn run(mut self) -> anyhow::Result<()> {
        // The deadline starts at accept. Under the default policy partial
        // progress does not extend it.
        let mut deadline = Instant::now() + self.limits.request_timeout;
        let mut state = SessionState::Reading;

        loop {
            state = match state {
                SessionState::Reading => {
                    let response = self.read_request(&mut deadline).await?;
                    SessionState::Responding(response)
                }

                SessionState::Responding(response) => {
                    ResponseWriter::new(&response)
                        .write_to_stream(&mut self.stream)
                        .await?;
                    self.stream.shutdown().await?;
                    SessionState::Closed
                }

                SessionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads socket fragments into the request buffer until the request is
    /// classified, then maps the classification to a response:
    ///
    /// - complete head → parse, resolve, 200/404 (or 400 on a bad line)
    /// - bytes that can no longer become a valid request line → 400 now,
    ///   without waiting for the header terminator
    /// - oversized head, EOF before the terminator, or deadline elapsed → 400
    async fn read_request(&mut self, deadline: &mut Instant) -> anyhow::Result<Response> {
        let mut chunk = [0u8; 1024];
        loop {
            let n = match tokio::time::timeout_at(*deadline, self.stream.read(&mut chunk)).await {
                Ok(read) => read?,
                Err(_) => {
                    debug!("deadline elapsed before a complete request head");
                    return Ok(Response::bad_request());
                }
            };

            if n == 0 {
                debug!("client closed the connection before a complete request head");
                return Ok(Response::bad_request());
            }

            if self.limits.timeout_policy == TimeoutPolicy::ResetOnData {
                *deadline = Instant::now() + self.limits.request_timeout;
            }

            match self.buffer.feed(&chunk[..n]) {
                FeedOutcome::Overflow => {
                    debug!("request head exceeded {} bytes", self.limits.max_header_bytes);
                    return Ok(Response::bad_request());
                }

                FeedOutcome::Complete { header_len } => {
                    debug!(header_len, "request head complete");
                    return Ok(self.dispatch().await);
                }

                FeedOutcome::Incomplete => {
                    // Fail fast on streams that can no longer become a
                    // well-formed request line.
                    match parse_request_line(self.buffer.bytes()) {
                        Ok(_) | Err(ParseError::Incomplete) => {}
                        Err(e) => {
                            debug!(error = ?e, "rejecting malformed request line early");
                            return Ok(Response::bad_request());
                        }
                    }
                }
            }
        }
    }

    async fn dispatch(&self) -> Response {
        let line = match parse_request_line(self.buffer.bytes()) {
            Ok((line, _consumed)) => line,
            Err(e) => {
                debug!(error = ?e, "malformed request line");
                return Response::bad_request();
            }
        };

        if line.method != Method::GET {
            debug!(method = ?line.method, "method not served");
            return Response::bad_request();
        }

        self.files.response_for(&line.target).await
    }
}
