//! Terminal result records for widget follow-up calls and autocomplete.

use serde::{Deserialize, Serialize};

/// One point of an interest-over-time series.
///
/// `value`, `has_data` and `formatted_value` hold one entry per compared keyword.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timeline {
    /// Unix timestamp (seconds) as a string
    pub time: String,
    pub formatted_time: String,
    pub formatted_axis_time: String,
    pub value: Vec<i64>,
    pub has_data: Vec<bool>,
    pub formatted_value: Vec<String>,
    /// True for the trailing, still incomplete period
    pub is_partial: bool,
}

/// Interest for one location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoMap {
    pub geo_code: String,
    pub geo_name: String,
    pub value: Vec<i64>,
    pub formatted_value: Vec<String>,
    pub max_value_index: i64,
    pub has_data: Vec<bool>,
}

/// Related query or topic.
///
/// Query widgets fill `query`; topic widgets fill `topic`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankedKeyword {
    pub query: String,
    pub topic: KeywordTopic,
    pub value: i64,
    pub formatted_value: String,
    pub has_data: bool,
    pub link: String,
}

/// Knowledge-graph topic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTopic {
    /// Knowledge-graph id, e.g. `/m/09gbxjr`
    pub mid: String,
    pub title: String,
    /// Topic type, e.g. `Programming language`
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MultilineOut {
    default: Multiline,
}

#[derive(Debug, Deserialize)]
struct Multiline {
    #[serde(rename = "timelineData", default)]
    timeline_data: Vec<Timeline>,
}

impl MultilineOut {
    pub(crate) fn into_timeline(self) -> Vec<Timeline> {
        self.default.timeline_data
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeoOut {
    default: GeoData,
}

#[derive(Debug, Deserialize)]
struct GeoData {
    #[serde(rename = "geoMapData", default)]
    geo_map_data: Vec<GeoMap>,
}

impl GeoOut {
    pub(crate) fn into_geo_map(self) -> Vec<GeoMap> {
        self.default.geo_map_data
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelatedOut {
    default: RelatedList,
}

#[derive(Debug, Deserialize)]
struct RelatedList {
    #[serde(rename = "rankedList", default)]
    ranked: Vec<RankedList>,
}

#[derive(Debug, Deserialize)]
struct RankedList {
    #[serde(rename = "rankedKeyword", default)]
    keywords: Vec<RankedKeyword>,
}

impl RelatedOut {
    /// Flattens the ranked lists ("top" then "rising") into one sequence.
    pub(crate) fn into_keywords(self) -> Vec<RankedKeyword> {
        self.default
            .ranked
            .into_iter()
            .flat_map(|list| list.keywords)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchOut {
    default: SearchTopics,
}

#[derive(Debug, Deserialize)]
struct SearchTopics {
    #[serde(default)]
    topics: Vec<KeywordTopic>,
}

impl SearchOut {
    pub(crate) fn into_topics(self) -> Vec<KeywordTopic> {
        self.default.topics
    }
}
