//! Resource initialization.
//!
//! This module provides functions to initialize the shared resources a client
//! needs:
//! - The HTTP client (timeouts, user agent, TLS backend)
//! - The logger (for applications embedding the crate)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::{init_logger, init_logger_with};
