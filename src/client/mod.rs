//! The Trends API client.
//!
//! `TrendsClient` owns the HTTP connection pool, the session cookie, the debug
//! toggle and the two lookup-tree caches. It is `Send + Sync`; share it across
//! tasks behind an `Arc`.

mod cache;
mod explore;
mod trends;
mod widgets;

use log::debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error_handling::{InitializationError, TrendsError};
use crate::fetch::{endpoint_url, RequestContext, RequestParams, Transport};
use crate::initialization::init_client;
use crate::models::{CategoryTree, LocationTree};
use crate::parse::{decode, Endpoint};

use cache::LookupCache;

/// Async client for the Google Trends API.
///
/// # Examples
///
/// ```no_run
/// use gtrends::{Config, RequestContext, TrendsClient};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TrendsClient::new(Config::default())?;
/// let searches = client.daily(&RequestContext::new(), "EN", "US").await?;
/// for search in &searches {
///     println!("{} ({})", search.title.query, search.formatted_traffic);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TrendsClient {
    transport: Transport,
    api_base: String,
    categories: LookupCache<CategoryTree>,
    locations: LookupCache<LocationTree>,
}

impl TrendsClient {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let http = init_client(&config)?;
        Ok(Self::with_http_client(http, config))
    }

    /// Creates a client around an existing `reqwest::Client`.
    ///
    /// Timeouts and user agent set on `http` are used as-is; only the endpoint
    /// and cookie settings of `config` apply.
    pub fn with_http_client(http: reqwest::Client, config: Config) -> Self {
        Self {
            transport: Transport::new(http, &config),
            api_base: config.api_base,
            categories: LookupCache::default(),
            locations: LookupCache::default(),
        }
    }

    /// Turns verbose request logging on or off.
    ///
    /// When enabled, every request URL and response status is logged at `info`
    /// instead of `debug`.
    pub fn set_debug(&self, enabled: bool) {
        self.transport.set_debug(enabled);
    }

    /// Returns whether verbose request logging is enabled.
    pub fn debug(&self) -> bool {
        self.transport.debug_enabled()
    }

    fn url(&self, endpoint: Endpoint, params: &RequestParams) -> Result<Url, TrendsError> {
        endpoint_url(&self.api_base, endpoint.path(), params)
    }

    /// Issues the GET for `url` and decodes the body as `endpoint`'s payload.
    async fn fetch<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        endpoint: Endpoint,
        url: Url,
    ) -> Result<T, TrendsError> {
        let body = self.transport.get(ctx, url).await?;
        debug!("{} returned {} bytes", endpoint.path(), body.len());
        decode(endpoint, &body)
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
