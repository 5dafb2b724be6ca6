//! Local input checks performed before any request is issued.
//!
//! This module provides:
//! - The static realtime trends category table
//! - Category validation for `realtime`
//! - Widget kind validation for the widget follow-up calls

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error_handling::TrendsError;
use crate::widgets::{ExploreWidget, WidgetKind};

/// Realtime trends categories: short code to description.
static TRENDS_CATEGORIES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("all", "all"),
        ("b", "business"),
        ("h", "main news"),
        ("m", "health"),
        ("t", "science and technics"),
        ("e", "entertainment"),
        ("s", "sport"),
    ])
});

/// Returns the category codes accepted by `realtime`, with their descriptions.
///
/// # Examples
///
/// ```
/// let categories = gtrends::trends_categories();
/// assert_eq!(categories.get("s"), Some(&"sport"));
/// ```
pub fn trends_categories() -> &'static BTreeMap<&'static str, &'static str> {
    &TRENDS_CATEGORIES
}

/// Checks `cat` against the realtime category table.
///
/// # Errors
///
/// Returns `TrendsError::InvalidCategory` for unknown codes.
pub fn validate_category(cat: &str) -> Result<(), TrendsError> {
    if TRENDS_CATEGORIES.contains_key(cat) {
        Ok(())
    } else {
        Err(TrendsError::InvalidCategory(cat.to_string()))
    }
}

/// Checks that `widget` is of one of the `accepted` kinds.
///
/// The first accepted kind is reported in the error.
pub(crate) fn validate_widget(
    widget: &ExploreWidget,
    accepted: &[WidgetKind],
) -> Result<(), TrendsError> {
    match widget.kind() {
        Some(kind) if accepted.contains(&kind) => Ok(()),
        _ => Err(TrendsError::InvalidWidgetType {
            expected: accepted.first().copied().unwrap_or(WidgetKind::Timeseries),
            id: widget.id().to_string(),
        }),
    }
}
