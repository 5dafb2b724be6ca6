//! HTTP transport with session cookie handling and a single throttle retry.
//!
//! Each logical request walks a small state machine:
//!
//! ```text
//! NoCookie -> FetchingCookie -> Attempt(1) -> success
//!                                          -> Throttled -> RefetchingCookie -> Attempt(2) -> success | fail
//! ```
//!
//! The number of attempts is capped by `MAX_REQUEST_ATTEMPTS`.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, log, warn, Level};
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::StatusCode;
use tokio::sync::RwLock;
use url::Url;

use crate::config::{
    Config, ACCEPT_JSON, COOKIE_TIMEOUT, HTTP_STATUS_TOO_MANY_REQUESTS, MAX_REQUEST_ATTEMPTS,
};
use crate::error_handling::TrendsError;
use crate::fetch::context::RequestContext;
use crate::fetch::cookie::{cookie_url, extract_session_cookie, geo_of};

/// States of a single logical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestState {
    /// No cookie cached yet; acquire one before the first attempt.
    FetchingCookie,
    /// Issuing attempt `n` (1-based).
    Attempt(usize),
    /// Attempt `n` was throttled; refresh the cookie before retrying.
    RefetchingCookie(usize),
}

/// What to do with a response to attempt `attempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Retry,
    Fail,
}

fn classify(status: StatusCode, attempt: usize) -> Outcome {
    if status.is_success() {
        Outcome::Success
    } else if status.as_u16() == HTTP_STATUS_TOO_MANY_REQUESTS && attempt < MAX_REQUEST_ATTEMPTS {
        Outcome::Retry
    } else {
        Outcome::Fail
    }
}

/// Performs GET requests against the API, owning the shared session cookie.
#[derive(Debug)]
pub(crate) struct Transport {
    http: reqwest::Client,
    cookie_url: String,
    cookie_geo: String,
    cookie: RwLock<Option<String>>,
    debug: AtomicBool,
}

impl Transport {
    pub(crate) fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            cookie_url: config.cookie_url.clone(),
            cookie_geo: config.cookie_geo.clone(),
            cookie: RwLock::new(None),
            debug: AtomicBool::new(config.debug),
        }
    }

    pub(crate) fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub(crate) fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Debug mode promotes per-request logging from `debug` to `info`.
    fn trace_level(&self) -> Level {
        if self.debug_enabled() {
            Level::Info
        } else {
            Level::Debug
        }
    }

    /// Returns the cached session cookie, if any.
    pub(crate) async fn cookie(&self) -> Option<String> {
        self.cookie.read().await.clone()
    }

    /// Performs one logical GET and returns the raw body bytes.
    ///
    /// Aborts with `Cancelled` / `DeadlineExceeded` if `ctx` fires first.
    pub(crate) async fn get(&self, ctx: &RequestContext, url: Url) -> Result<Vec<u8>, TrendsError> {
        ctx.run(self.get_with_retry(url)).await
    }

    async fn get_with_retry(&self, url: Url) -> Result<Vec<u8>, TrendsError> {
        let geo = geo_of(&url).unwrap_or_else(|| self.cookie_geo.clone());

        let mut cookie = self.cookie().await.filter(|c| !c.is_empty());
        let mut state = if cookie.is_some() {
            RequestState::Attempt(1)
        } else {
            RequestState::FetchingCookie
        };

        loop {
            state = match state {
                RequestState::FetchingCookie => {
                    cookie = self.refresh_cookie(&geo).await?;
                    RequestState::Attempt(1)
                }
                RequestState::RefetchingCookie(attempt) => {
                    cookie = self.refresh_cookie(&geo).await?;
                    RequestState::Attempt(attempt + 1)
                }
                RequestState::Attempt(attempt) => {
                    log!(self.trace_level(), "Request (attempt {}): {}", attempt, url);

                    let mut request = self.http.get(url.clone()).header(ACCEPT, ACCEPT_JSON);
                    if let Some(ref value) = cookie {
                        request = request.header(COOKIE, value.as_str());
                    }
                    let response = request.send().await?;
                    let status = response.status();
                    log!(self.trace_level(), "Response: {} for {}", status, url);

                    match classify(status, attempt) {
                        Outcome::Success => {
                            let body = response.bytes().await?;
                            return Ok(body.to_vec());
                        }
                        Outcome::Retry => {
                            warn!(
                                "Throttled ({}) on {}, refreshing session cookie and retrying",
                                status,
                                url.path()
                            );
                            RequestState::RefetchingCookie(attempt)
                        }
                        Outcome::Fail => {
                            return Err(TrendsError::RequestFailed {
                                status: status.as_u16(),
                                status_text: status.canonical_reason().unwrap_or("").to_string(),
                            });
                        }
                    }
                }
            };
        }
    }

    /// Fetches a fresh session cookie for `geo` and caches it.
    ///
    /// The cookie is taken from `Set-Cookie` regardless of the response status.
    /// If none is handed out, the previously cached value (if any) is kept and returned.
    async fn refresh_cookie(&self, geo: &str) -> Result<Option<String>, TrendsError> {
        let url = cookie_url(&self.cookie_url, geo)?;
        log!(self.trace_level(), "Acquiring session cookie: {}", url);

        let response = self.http.get(url).timeout(COOKIE_TIMEOUT).send().await?;
        match extract_session_cookie(response.headers()) {
            Some(fresh) => {
                debug!("Received session cookie (status {})", response.status());
                let mut guard = self.cookie.write().await;
                *guard = Some(fresh.clone());
                Ok(Some(fresh))
            }
            None => {
                warn!(
                    "Cookie page returned {} without a session cookie",
                    response.status()
                );
                Ok(self.cookie().await)
            }
        }
    }
}
