//! Statik - HTTP/1.0 static file server
//!
//! Core library for request parsing and static file delivery.

pub mod config;
pub mod http;
pub mod serve;
pub mod server;
