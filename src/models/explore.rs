//! Explore request, lookup trees, and the sub-request embedded in widgets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keyword comparison query sent to the explore endpoint.
///
/// # Examples
///
/// ```
/// use gtrends::{ComparisonItem, ExploreRequest};
///
/// let request = ExploreRequest {
///     comparison_items: vec![ComparisonItem::new("Golang", "today 12-m")],
///     category: 31, // Programming
///     property: String::new(),
/// };
/// assert_eq!(request.comparison_items.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExploreRequest {
    /// Items compared side by side
    #[serde(rename = "comparisonItem")]
    pub comparison_items: Vec<ComparisonItem>,
    /// Explore category id (see `TrendsClient::explore_categories`), 0 for all
    pub category: i64,
    /// Search property filter: empty (web), `images`, `news`, `froogle` or `youtube`
    pub property: String,
}

impl ExploreRequest {
    /// Returns a copy with legacy `+`-separated time ranges rewritten to use spaces.
    ///
    /// `"today+12-m"` becomes `"today 12-m"`.
    pub fn normalized(&self) -> Self {
        let mut request = self.clone();
        for item in &mut request.comparison_items {
            item.time = item.time.replace('+', " ");
        }
        request
    }
}

/// One keyword + geo + time-range unit within an explore request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonItem {
    /// Search term or topic mid
    pub keyword: String,
    /// Location code; empty means worldwide and is omitted from the request
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub geo: String,
    /// Time-range expression, e.g. `today 12-m` or `now 7-d`
    pub time: String,
    /// Request hourly or finer resolution for explicit time ranges
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub granular_time_resolution: bool,
    /// Explicit range start (RFC 3339), used with granular resolution
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    /// Explicit range end (RFC 3339), used with granular resolution
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_time: String,
}

impl ComparisonItem {
    /// Creates a worldwide item for `keyword` over `time`.
    pub fn new(keyword: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            time: time.into(),
            ..Default::default()
        }
    }

    /// Restricts the item to `geo`.
    pub fn with_geo(mut self, geo: impl Into<String>) -> Self {
        self.geo = geo.into();
        self
    }
}

/// Node of the explore category tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTree {
    pub name: String,
    pub id: i64,
    #[serde(default)]
    pub children: Vec<CategoryTree>,
}

/// Node of the explore location tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTree {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub children: Vec<LocationTree>,
}

impl CategoryTree {
    /// Depth-first search for the node with `id`.
    pub fn find(&self, id: i64) -> Option<&CategoryTree> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

impl LocationTree {
    /// Depth-first search for the node with code `id`.
    pub fn find(&self, id: &str) -> Option<&LocationTree> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Sub-request embedded in an explore widget and replayed on the follow-up call.
///
/// Known fields are typed; anything else the service sends is kept in `extra`
/// so it goes back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction: Option<WidgetComparisonItem>,
    #[serde(
        rename = "comparisonItem",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub comparison_items: Option<Vec<WidgetComparisonItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_options: Option<RequestOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trendiness_settings: Option<BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_country_code: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WidgetRequest {
    /// Number of comparison items the sub-request covers.
    pub fn comparison_count(&self) -> usize {
        self.comparison_items.as_ref().map_or(0, Vec::len)
    }
}

/// Per-item restriction inside a widget sub-request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetComparisonItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex_keywords_restriction: Option<KeywordsRestriction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_time_range_for_explore_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeywordsRestriction {
    #[serde(default)]
    pub keyword: Vec<KeywordRestriction>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeywordRestriction {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestOptions {
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub backend: String,
    #[serde(default)]
    pub category: i64,
}
