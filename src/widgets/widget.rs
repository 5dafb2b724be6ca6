use serde::{Deserialize, Serialize};

use crate::models::WidgetRequest;

use super::kind::{group_of, WidgetKind};

/// Descriptor returned by `explore`, consumed by one follow-up operation.
///
/// Widgets are read-only: the follow-up call replays the embedded
/// [`WidgetRequest`] and bearer token exactly as received. The widget kind and
/// comparison-group index are parsed from the id once, at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawWidget")]
pub struct ExploreWidget {
    token: String,
    #[serde(rename = "type")]
    widget_type: String,
    title: String,
    id: String,
    request: WidgetRequest,
    #[serde(skip_serializing)]
    kind: Option<WidgetKind>,
    #[serde(skip_serializing)]
    group: Option<usize>,
}

#[derive(Deserialize)]
struct RawWidget {
    #[serde(default)]
    token: String,
    #[serde(rename = "type", default)]
    widget_type: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    id: String,
    #[serde(default)]
    request: WidgetRequest,
}

impl From<RawWidget> for ExploreWidget {
    fn from(raw: RawWidget) -> Self {
        let kind = WidgetKind::from_id(&raw.id);
        let group = group_of(&raw.id);
        Self {
            token: raw.token,
            widget_type: raw.widget_type,
            title: raw.title,
            id: raw.id,
            request: raw.request,
            kind,
            group,
        }
    }
}

impl ExploreWidget {
    /// Bearer token for the follow-up call.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Chart type the web UI renders, e.g. `fe_line_chart`.
    pub fn widget_type(&self) -> &str {
        &self.widget_type
    }

    /// Display title of the widget.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw id, e.g. `RELATED_TOPICS_0`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Embedded sub-request replayed on the follow-up call.
    pub fn request(&self) -> &WidgetRequest {
        &self.request
    }

    /// Kind parsed from the id prefix, `None` for unknown widgets.
    pub fn kind(&self) -> Option<WidgetKind> {
        self.kind
    }

    /// Comparison-group index, `None` for the aggregate widgets.
    pub fn group(&self) -> Option<usize> {
        self.group
    }
}

/// Explore response payload.
#[derive(Debug, Deserialize)]
pub(crate) struct ExploreOut {
    #[serde(default)]
    widgets: Vec<ExploreWidget>,
}

impl ExploreOut {
    pub(crate) fn into_widgets(self) -> ExploreWidgets {
        ExploreWidgets(self.widgets)
    }
}

/// Ordered widget sequence returned by `explore`.
///
/// The composition of the sequence is decided by the service; these helpers
/// only reorder and filter it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExploreWidgets(Vec<ExploreWidget>);

impl ExploreWidgets {
    /// Orders widgets by comparison-group index.
    ///
    /// Widgets without an index (the aggregates) come first. The sort is stable,
    /// so the service's order within a group is kept.
    pub fn sort(&mut self) {
        self.0.sort_by_key(ExploreWidget::group);
    }

    /// Widgets of comparison group `index`, skipping the aggregate widgets.
    pub fn by_group(&self, index: usize) -> Vec<&ExploreWidget> {
        self.0
            .iter()
            .filter(|widget| widget.group == Some(index))
            .collect()
    }

    /// Widgets of type `kind`, as tagged by their id.
    pub fn by_kind(&self, kind: WidgetKind) -> Vec<&ExploreWidget> {
        self.0
            .iter()
            .filter(|widget| widget.kind == Some(kind))
            .collect()
    }

    /// Number of widgets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the service returned no widgets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the widgets in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExploreWidget> {
        self.0.iter()
    }

    /// Widget at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ExploreWidget> {
        self.0.get(index)
    }

    /// Unwraps into the underlying widgets.
    pub fn into_vec(self) -> Vec<ExploreWidget> {
        self.0
    }
}

impl std::ops::Index<usize> for ExploreWidgets {
    type Output = ExploreWidget;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ExploreWidgets {
    type Item = ExploreWidget;
    type IntoIter = std::vec::IntoIter<ExploreWidget>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExploreWidgets {
    type Item = &'a ExploreWidget;
    type IntoIter = std::slice::Iter<'a, ExploreWidget>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<ExploreWidget>> for ExploreWidgets {
    fn from(widgets: Vec<ExploreWidget>) -> Self {
        Self(widgets)
    }
}
