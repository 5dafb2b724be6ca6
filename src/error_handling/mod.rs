//! Error handling.
//!
//! This module provides the error types returned by client operations and
//! initialization helpers. Every operation either fully succeeds or returns one
//! of these; no partial results are handed back.

mod types;

// Re-export public API
pub use types::{InitializationError, TrendsError};
