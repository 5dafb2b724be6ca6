//! Query parameter assembly and endpoint URL building.
//!
//! `RequestParams` is an ordered, multi-valued parameter map. Every call starts
//! from its own copy of the base set, so per-call overrides (geo, locale,
//! category, token) never leak between concurrent calls.

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use crate::config::{DEFAULT_PARAMS, PARAM_GEO, PARAM_HL, PARAM_REQ};
use crate::error_handling::TrendsError;

/// Ordered multi-valued mapping from parameter name to values.
///
/// Keys are kept sorted so the encoded query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: BTreeMap<String, Vec<String>>,
}

impl RequestParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the base parameter set sent with every listing request.
    pub fn base() -> Self {
        let mut params = Self::new();
        for &(name, value) in DEFAULT_PARAMS {
            params.add(name, value);
        }
        params
    }

    /// Replaces all values of `name` with `value`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.to_string(), vec![value.into()]);
        self
    }

    /// Appends `value` to the values of `name`.
    pub fn add(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.values
            .entry(name.to_string())
            .or_default()
            .push(value.into());
        self
    }

    /// Returns the first value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Applies the per-call locale and geo. An empty geo leaves the set untouched.
    pub fn with_locale_and_geo(&mut self, hl: &str, geo: &str) -> &mut Self {
        self.set(PARAM_HL, hl);
        if !geo.is_empty() {
            self.set(PARAM_GEO, geo);
        }
        self
    }

    /// Serializes `body` to compact JSON and stores it under the `req` parameter.
    pub fn set_json_body<T: Serialize>(&mut self, body: &T) -> Result<&mut Self, TrendsError> {
        let json = serde_json::to_string(body).map_err(TrendsError::InvalidRequest)?;
        Ok(self.set(PARAM_REQ, json))
    }

    /// Form-encodes the parameters.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, values) in &self.values {
            for value in values {
                serializer.append_pair(name, value);
            }
        }
        serializer.finish()
    }
}

/// Builds `{api_base}{path}?{params}`.
pub(crate) fn endpoint_url(
    api_base: &str,
    path: &str,
    params: &RequestParams,
) -> Result<Url, TrendsError> {
    let mut url = Url::parse(&format!("{}{}", api_base.trim_end_matches('/'), path))?;
    let query = params.encode();
    url.set_query(if query.is_empty() { None } else { Some(&query) });
    Ok(url)
}
