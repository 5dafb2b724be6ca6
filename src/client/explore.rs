//! Explore: lookup trees, widget discovery and autocomplete.

use std::sync::Arc;

use log::{debug, info};

use crate::config::{DEFAULT_TZ, PARAM_HL, PARAM_TZ};
use crate::error_handling::TrendsError;
use crate::fetch::{RequestContext, RequestParams};
use crate::models::{CategoryTree, ExploreRequest, KeywordTopic, LocationTree, SearchOut};
use crate::parse::Endpoint;
use crate::widgets::{ExploreOut, ExploreWidgets};

use super::TrendsClient;

impl TrendsClient {
    /// Returns the explore category tree.
    ///
    /// The tree is fetched on first use and then served from memory for the
    /// lifetime of the client. A failed fetch is not cached.
    pub async fn explore_categories(
        &self,
        ctx: &RequestContext,
    ) -> Result<Arc<CategoryTree>, TrendsError> {
        let url = self.url(Endpoint::Categories, &RequestParams::base())?;
        self.categories
            .get_or_fetch(|| async move {
                info!("Fetching explore category tree");
                self.fetch::<CategoryTree>(ctx, Endpoint::Categories, url)
                    .await
            })
            .await
    }

    /// Returns the explore location tree, cached like
    /// [`explore_categories`](Self::explore_categories).
    pub async fn explore_locations(
        &self,
        ctx: &RequestContext,
    ) -> Result<Arc<LocationTree>, TrendsError> {
        let url = self.url(Endpoint::Locations, &RequestParams::base())?;
        self.locations
            .get_or_fetch(|| async move {
                info!("Fetching explore location tree");
                self.fetch::<LocationTree>(ctx, Endpoint::Locations, url)
                    .await
            })
            .await
    }

    /// Runs a keyword comparison and returns the widgets describing it.
    ///
    /// Time ranges written with `+` separators are normalized to spaces before
    /// the request is sent. The returned widgets are in service order; use
    /// [`ExploreWidgets::sort`] to group them by comparison item.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the request cannot be serialized, plus the
    /// usual remote and context errors.
    pub async fn explore(
        &self,
        ctx: &RequestContext,
        request: &ExploreRequest,
        hl: &str,
    ) -> Result<ExploreWidgets, TrendsError> {
        let mut params = RequestParams::new();
        params
            .set(PARAM_TZ, DEFAULT_TZ)
            .set(PARAM_HL, hl)
            .set_json_body(&request.normalized())?;

        let url = self.url(Endpoint::Explore, &params)?;
        let out: ExploreOut = self.fetch(ctx, Endpoint::Explore, url).await?;
        let widgets = out.into_widgets();
        debug!(
            "Explore for {} items returned {} widgets",
            request.comparison_items.len(),
            widgets.len()
        );
        Ok(widgets)
    }

    /// Returns autocomplete topic suggestions for `text`.
    ///
    /// `text` is sent as a single escaped path segment.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        text: &str,
        hl: &str,
    ) -> Result<Vec<KeywordTopic>, TrendsError> {
        let mut params = RequestParams::new();
        params.set(PARAM_TZ, DEFAULT_TZ).set(PARAM_HL, hl);

        let mut url = self.url(Endpoint::Autocomplete, &params)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(text);

        let out: SearchOut = self.fetch(ctx, Endpoint::Autocomplete, url).await?;
        Ok(out.into_topics())
    }
}
