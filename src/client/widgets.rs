//! Widget follow-up calls.

use serde::Serialize;

use crate::config::{COMPARE_DATA_MODE, DEFAULT_TZ, PARAM_HL, PARAM_TOKEN, PARAM_TZ};
use crate::error_handling::TrendsError;
use crate::fetch::{RequestContext, RequestParams};
use crate::models::{GeoMap, GeoOut, MultilineOut, RankedKeyword, RelatedOut, Timeline};
use crate::parse::Endpoint;
use crate::validation::validate_widget;
use crate::widgets::{ExploreWidget, WidgetKind};

use super::TrendsClient;

/// Parameters replaying `request` with the widget's bearer token.
fn widget_params<T: Serialize>(
    widget: &ExploreWidget,
    request: &T,
    hl: &str,
) -> Result<RequestParams, TrendsError> {
    let mut params = RequestParams::new();
    params
        .set(PARAM_TZ, DEFAULT_TZ)
        .set(PARAM_HL, hl)
        .set(PARAM_TOKEN, widget.token())
        .set_json_body(request)?;
    Ok(params)
}

impl TrendsClient {
    /// Returns interest over time for a `TIMESERIES` widget.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWidgetType` before any request if `widget` is not a
    /// timeseries widget.
    pub async fn interest_over_time(
        &self,
        ctx: &RequestContext,
        widget: &ExploreWidget,
        hl: &str,
    ) -> Result<Vec<Timeline>, TrendsError> {
        validate_widget(widget, &[WidgetKind::Timeseries])?;

        let params = widget_params(widget, widget.request(), hl)?;
        let url = self.url(Endpoint::InterestOverTime, &params)?;
        let out: MultilineOut = self.fetch(ctx, Endpoint::InterestOverTime, url).await?;
        Ok(out.into_timeline())
    }

    /// Returns interest by location for a `GEO_MAP` widget.
    ///
    /// When the widget compares more than one item the values come back as
    /// percentages of the total.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWidgetType` before any request if `widget` is not a geo
    /// map widget.
    pub async fn interest_by_location(
        &self,
        ctx: &RequestContext,
        widget: &ExploreWidget,
        hl: &str,
    ) -> Result<Vec<GeoMap>, TrendsError> {
        validate_widget(widget, &[WidgetKind::GeoMap])?;

        let mut request = widget.request().clone();
        if request.comparison_count() > 1 {
            request.data_mode = Some(COMPARE_DATA_MODE.to_string());
        }

        let params = widget_params(widget, &request, hl)?;
        let url = self.url(Endpoint::InterestByLocation, &params)?;
        let out: GeoOut = self.fetch(ctx, Endpoint::InterestByLocation, url).await?;
        Ok(out.into_geo_map())
    }

    /// Returns related queries or topics for a `RELATED_QUERIES` or
    /// `RELATED_TOPICS` widget.
    ///
    /// The service's ranked lists (top, then rising) are flattened into one
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWidgetType` before any request for any other widget.
    pub async fn related(
        &self,
        ctx: &RequestContext,
        widget: &ExploreWidget,
        hl: &str,
    ) -> Result<Vec<RankedKeyword>, TrendsError> {
        validate_widget(
            widget,
            &[WidgetKind::RelatedQueries, WidgetKind::RelatedTopics],
        )?;

        let params = widget_params(widget, widget.request(), hl)?;
        let url = self.url(Endpoint::Related, &params)?;
        let out: RelatedOut = self.fetch(ctx, Endpoint::Related, url).await?;
        Ok(out.into_keywords())
    }
}
