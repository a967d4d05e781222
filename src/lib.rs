//! Statica - Minimal HTTP/1.0 static file server
//!
//! Core library for request handling and file serving.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
