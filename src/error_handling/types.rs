//! Error type definitions.
//!
//! This module defines the errors returned by client operations and by the
//! initialization helpers.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::widgets::WidgetKind;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors returned by every public client operation.
///
/// Callers can tell local input-contract failures (`InvalidCategory`,
/// `InvalidWidgetType`, `InvalidRequest`) apart from remote failures
/// (`RequestFailed`, `Parse`) and from the caller's own cancellation or
/// deadline (`Cancelled`, `DeadlineExceeded`).
#[derive(Error, Debug)]
pub enum TrendsError {
    /// The endpoint URL could not be built.
    #[error("Failed to create request: {0}")]
    RequestCreation(#[from] url::ParseError),

    /// Network-level failure while performing the request.
    #[error("Failed to perform request: {0}")]
    Transport(#[source] ReqwestError),

    /// The service answered with a non-success status (after the throttle retry, if any).
    #[error("Failed to perform http request: code = {status}, status = {status_text}")]
    RequestFailed {
        /// Numeric HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// The sentinel-stripped body is not valid JSON or has an unexpected shape.
    #[error("Failed to parse json from {endpoint}: {source}")]
    Parse {
        /// Endpoint path the body came from
        endpoint: &'static str,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The category is not in the realtime trends category table.
    #[error("Invalid category param: {0}")]
    InvalidCategory(String),

    /// The widget cannot be consumed by the invoked operation.
    #[error("Invalid widget type: expected {expected}, got widget id {id:?}")]
    InvalidWidgetType {
        /// Widget kind the operation accepts
        expected: WidgetKind,
        /// Identifier of the widget that was passed in
        id: String,
    },

    /// An outbound request body could not be serialized.
    #[error("Invalid request param: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    /// The caller cancelled the operation.
    #[error("Request cancelled")]
    Cancelled,

    /// The caller's deadline passed before the operation finished.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,
}

impl TrendsError {
    /// Returns the HTTP status code carried by a `RequestFailed` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            TrendsError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the error comes from the caller's context rather than the service.
    pub fn is_context_error(&self) -> bool {
        matches!(self, TrendsError::Cancelled | TrendsError::DeadlineExceeded)
    }
}

impl From<ReqwestError> for TrendsError {
    fn from(err: ReqwestError) -> Self {
        TrendsError::Transport(err)
    }
}
