//! Listening socket lifecycle and the accept loop.

pub mod listener;
