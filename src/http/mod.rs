//! HTTP/1.0 protocol implementation.
//!
//! One request per connection, one response, then close. The layer is
//! organized into several submodules:
//!
//! - **`accumulator`**: buffers inbound bytes across partial reads until the
//!   request head is complete
//! - **`parser`**: strict, incremental request-line parser
//! - **`request`**: parsed request-line representation
//! - **`response`**: HTTP response representation
//! - **`writer`**: serializes and writes responses to the client
//! - **`connection`**: the per-connection session state machine
//!
//! # Session state machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← buffer fragments, watch the deadline
//!        └──────┬──────┘
//!               │ head complete / rejected / timed out
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← exactly one status line per connection
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! There is no keep-alive branch: HTTP/1.0 semantics, the server closes the
//! socket after the response.

pub mod accumulator;
pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
