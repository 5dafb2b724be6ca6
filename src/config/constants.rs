//! Configuration constants.
//!
//! This module defines the endpoint paths, query parameter names, base parameter
//! values, and response sentinels used when talking to the Trends API.

use std::time::Duration;

// Remote service
/// Base URL every API endpoint path is appended to
pub const DEFAULT_API_BASE: &str = "https://trends.google.com/trends/api";
/// Page that issues the `NID` session cookie (queried with `?geo=`)
pub const DEFAULT_COOKIE_URL: &str = "https://trends.google.com/";
/// Geo used for cookie acquisition when the request itself carries none
pub const DEFAULT_COOKIE_GEO: &str = "US";
/// Name prefix of the session cookie the service hands out
pub const SESSION_COOKIE_NAME: &str = "NID";

// Endpoint paths (relative to the API base)
pub const PATH_DAILY: &str = "/dailytrends";
pub const PATH_REALTIME: &str = "/realtimetrends";
pub const PATH_EXPLORE: &str = "/explore";
pub const PATH_CATEGORIES: &str = "/explore/pickers/category";
pub const PATH_LOCATIONS: &str = "/explore/pickers/geo";
pub const PATH_RELATED: &str = "/widgetdata/relatedsearches";
pub const PATH_INTEREST_OVER_TIME: &str = "/widgetdata/multiline";
pub const PATH_INTEREST_BY_LOCATION: &str = "/widgetdata/comparedgeo";
pub const PATH_AUTOCOMPLETE: &str = "/autocomplete";

// Query parameter names
pub const PARAM_HL: &str = "hl";
pub const PARAM_CAT: &str = "cat";
pub const PARAM_GEO: &str = "geo";
pub const PARAM_REQ: &str = "req";
pub const PARAM_TZ: &str = "tz";
pub const PARAM_TOKEN: &str = "token";

/// Base query parameters copied into every listing request.
///
/// `ri`/`rs` are the pagination hints the trends listings accept;
/// `fi`/`fs` are format flags.
pub const DEFAULT_PARAMS: &[(&str, &str)] = &[
    (PARAM_TZ, "0"),
    (PARAM_CAT, "all"),
    ("fi", "0"),
    ("fs", "0"),
    (PARAM_HL, "EN"),
    ("ri", "300"),
    ("rs", "20"),
];

/// Timezone offset sent with explore and widget requests
pub const DEFAULT_TZ: &str = "0";

/// Data mode requested from the compared-geo endpoint when several items are compared
pub const COMPARE_DATA_MODE: &str = "PERCENTAGES";

// Response sentinels
// The service prefixes every JSON body with a short non-JSON guard. Some endpoints
// append a trailing comma, others do not; these must match byte-for-byte.
/// Guard without the trailing comma
pub const SENTINEL_SHORT: &str = ")]}'";
/// Guard with the trailing comma
pub const SENTINEL_COMMA: &str = ")]}',";

// Timeouts
/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Timeout for the cookie acquisition round trip
pub const COOKIE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent string for HTTP requests.
///
/// The service is noticeably more willing to answer browser-like clients, so the
/// fallback mimics a current desktop Chrome build.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Retry strategy
/// Maximum number of attempts per logical request (initial attempt + one throttle retry)
pub const MAX_REQUEST_ATTEMPTS: usize = 2;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
