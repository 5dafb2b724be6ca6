use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterMacro};

/// Widget type tag carried as the prefix of a widget id.
///
/// Displays as the wire prefix, e.g. `TIMESERIES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIterMacro)]
pub enum WidgetKind {
    /// Interest over time, consumed by `interest_over_time`
    #[strum(serialize = "TIMESERIES")]
    Timeseries,
    /// Interest by location, consumed by `interest_by_location`
    #[strum(serialize = "GEO_MAP")]
    GeoMap,
    /// Related queries, consumed by `related`
    #[strum(serialize = "RELATED_QUERIES")]
    RelatedQueries,
    /// Related topics, consumed by `related`
    #[strum(serialize = "RELATED_TOPICS")]
    RelatedTopics,
}

impl WidgetKind {
    /// Id prefix identifying this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            WidgetKind::Timeseries => "TIMESERIES",
            WidgetKind::GeoMap => "GEO_MAP",
            WidgetKind::RelatedQueries => "RELATED_QUERIES",
            WidgetKind::RelatedTopics => "RELATED_TOPICS",
        }
    }

    /// Resolves the kind from a widget id such as `RELATED_QUERIES_1`.
    ///
    /// Returns `None` for ids the client has no operation for.
    pub fn from_id(id: &str) -> Option<Self> {
        WidgetKind::iter().find(|kind| id.starts_with(kind.prefix()))
    }
}

/// Parses the comparison-group index after the last `_` of a widget id.
///
/// `GEO_MAP_2` yields `Some(2)`; `TIMESERIES` and `GEO_MAP` yield `None`.
pub(crate) fn group_of(id: &str) -> Option<usize> {
    let (_, suffix) = id.rsplit_once('_')?;
    suffix.parse().ok()
}
