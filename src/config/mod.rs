//! Client configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, parameter names, sentinels, limits)
//! - HTTP header constants
//! - The `Config` struct and logging enums

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
