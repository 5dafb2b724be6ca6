//! HTTP client initialization.

use std::time::Duration;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used by the transport.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Overall and TCP connect timeouts from the config
/// - Rustls TLS backend (no native TLS)
///
/// Cookies are managed by the transport itself, so the client's cookie store
/// stays disabled.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}
