//! Daily and realtime trending listings.

use log::debug;

use crate::config::PARAM_CAT;
use crate::error_handling::TrendsError;
use crate::fetch::{RequestContext, RequestParams};
use crate::models::{DailyOut, RealtimeOut, TrendingSearch, TrendingStory};
use crate::parse::Endpoint;
use crate::validation::validate_category;

use super::TrendsClient;

impl TrendsClient {
    /// Returns today's trending searches for `geo`, in locale `hl`.
    ///
    /// Searches from all returned days are flattened into one sequence, newest
    /// day first. An empty `geo` is left out of the request.
    ///
    /// # Errors
    ///
    /// Returns `RequestFailed`, `Parse`, `Transport` or a context error.
    pub async fn daily(
        &self,
        ctx: &RequestContext,
        hl: &str,
        geo: &str,
    ) -> Result<Vec<TrendingSearch>, TrendsError> {
        let mut params = RequestParams::base();
        params.with_locale_and_geo(hl, geo);

        let url = self.url(Endpoint::Daily, &params)?;
        let out: DailyOut = self.fetch(ctx, Endpoint::Daily, url).await?;
        let searches = out.into_searches();
        debug!("Daily trends for {:?}: {} searches", geo, searches.len());
        Ok(searches)
    }

    /// Returns realtime trending stories for `geo` in category `cat`.
    ///
    /// `cat` must be a key of [`trends_categories`](crate::trends_categories).
    ///
    /// # Errors
    ///
    /// Returns `InvalidCategory` without contacting the service if `cat` is
    /// unknown; otherwise the same errors as [`daily`](Self::daily).
    pub async fn realtime(
        &self,
        ctx: &RequestContext,
        hl: &str,
        geo: &str,
        cat: &str,
    ) -> Result<Vec<TrendingStory>, TrendsError> {
        validate_category(cat)?;

        let mut params = RequestParams::base();
        params.with_locale_and_geo(hl, geo).set(PARAM_CAT, cat);

        let url = self.url(Endpoint::Realtime, &params)?;
        let out: RealtimeOut = self.fetch(ctx, Endpoint::Realtime, url).await?;
        Ok(out.into_stories())
    }
}
