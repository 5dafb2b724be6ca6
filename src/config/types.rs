//! Configuration types.
//!
//! This module defines the library configuration struct and the logging enums
//! used by the logger initialization helpers.

use crate::config::constants::{
    DEFAULT_API_BASE, DEFAULT_COOKIE_GEO, DEFAULT_COOKIE_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, TCP_CONNECT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Client configuration.
///
/// Constructed programmatically; every field has a sensible default pointing at
/// the public service.
///
/// # Examples
///
/// ```no_run
/// use gtrends::{Config, TrendsClient};
///
/// let config = Config {
///     timeout_seconds: 10,
///     debug: true,
///     ..Default::default()
/// };
/// let client = TrendsClient::new(config).expect("client");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL every API endpoint path is appended to
    pub api_base: String,

    /// Page that hands out the session cookie (queried with `?geo=`)
    pub cookie_url: String,

    /// Geo used for cookie acquisition when a request has no `geo` parameter
    pub cookie_geo: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    pub connect_timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Initial state of the debug-logging toggle
    pub debug: bool,

    /// Log level used by `init_logger_with`
    pub log_level: LogLevel,

    /// Log format used by `init_logger_with`
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            cookie_url: DEFAULT_COOKIE_URL.to_string(),
            cookie_geo: DEFAULT_COOKIE_GEO.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            connect_timeout_seconds: TCP_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            debug: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Builds a config pointing both the API and the cookie page at `base`.
    ///
    /// Useful for tests against a local mock server: the API lives under
    /// `{base}/trends/api` and the cookie page at `{base}/`.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            api_base: format!("{}/trends/api", base),
            cookie_url: format!("{}/", base),
            ..Default::default()
        }
    }
}
