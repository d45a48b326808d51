//! Attic - Static File Server
//!
//! Core library for HTTP handling and static file serving.

pub mod access_log;
pub mod config;
pub mod http;
pub mod router;
pub mod server;
pub mod static_files;
