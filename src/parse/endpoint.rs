use serde::de::DeserializeOwned;

use crate::config::{
    PATH_AUTOCOMPLETE, PATH_CATEGORIES, PATH_DAILY, PATH_EXPLORE, PATH_INTEREST_BY_LOCATION,
    PATH_INTEREST_OVER_TIME, PATH_LOCATIONS, PATH_REALTIME, PATH_RELATED, SENTINEL_COMMA,
    SENTINEL_SHORT,
};
use crate::error_handling::TrendsError;

use super::sentinel::strip_sentinel;

/// API endpoints, each with the guard prefix it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Daily,
    Realtime,
    Categories,
    Locations,
    Explore,
    InterestOverTime,
    InterestByLocation,
    Related,
    Autocomplete,
}

impl Endpoint {
    /// Path relative to the API base.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Daily => PATH_DAILY,
            Endpoint::Realtime => PATH_REALTIME,
            Endpoint::Categories => PATH_CATEGORIES,
            Endpoint::Locations => PATH_LOCATIONS,
            Endpoint::Explore => PATH_EXPLORE,
            Endpoint::InterestOverTime => PATH_INTEREST_OVER_TIME,
            Endpoint::InterestByLocation => PATH_INTEREST_BY_LOCATION,
            Endpoint::Related => PATH_RELATED,
            Endpoint::Autocomplete => PATH_AUTOCOMPLETE,
        }
    }

    /// Exact guard prefix the service puts in front of this endpoint's JSON.
    pub fn sentinel(self) -> &'static str {
        match self {
            Endpoint::Realtime | Endpoint::Categories | Endpoint::Locations | Endpoint::Explore => {
                SENTINEL_SHORT
            }
            Endpoint::Daily
            | Endpoint::InterestOverTime
            | Endpoint::InterestByLocation
            | Endpoint::Related
            | Endpoint::Autocomplete => SENTINEL_COMMA,
        }
    }
}

/// Strips the endpoint's sentinel from `body` and decodes the remainder as `T`.
///
/// # Errors
///
/// Returns `TrendsError::Parse` if the stripped body is not valid JSON or does
/// not match the shape of `T`.
pub fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: &[u8]) -> Result<T, TrendsError> {
    let json = strip_sentinel(endpoint.sentinel(), body);
    serde_json::from_slice(&json).map_err(|source| TrendsError::Parse {
        endpoint: endpoint.path(),
        source,
    })
}
