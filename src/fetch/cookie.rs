//! Session cookie extraction.

use reqwest::header::{HeaderMap, SET_COOKIE};
use url::Url;

use crate::config::{COOKIE_ATTRIBUTE_SEPARATOR, PARAM_GEO, SESSION_COOKIE_NAME};
use crate::error_handling::TrendsError;

/// Extracts the `name=value` pair of the session cookie from `Set-Cookie` headers.
///
/// Only a header starting with the session cookie name is considered; cookie
/// attributes (`expires`, `path`, ...) are dropped.
pub(crate) fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::trim_start)
        .find(|value| value.starts_with(SESSION_COOKIE_NAME))
        .and_then(|value| value.split(COOKIE_ATTRIBUTE_SEPARATOR).next())
        .map(|pair| pair.trim().to_string())
        .filter(|pair| !pair.is_empty())
}

/// Builds the cookie page URL for `geo`.
pub(crate) fn cookie_url(base: &str, geo: &str) -> Result<Url, TrendsError> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut().append_pair(PARAM_GEO, geo);
    Ok(url)
}

/// Returns the `geo` query parameter of `url`, if present and non-empty.
pub(crate) fn geo_of(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == PARAM_GEO)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
