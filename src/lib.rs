//! gtrends library: an async client for the unofficial Google Trends API
//!
//! This library retrieves daily and realtime trending searches, runs "explore"
//! keyword comparisons and follows the returned widgets to interest over time,
//! interest by location and related searches. It also exposes the explore
//! category and location trees and autocomplete suggestions.
//!
//! # Example
//!
//! ```no_run
//! use gtrends::{ComparisonItem, Config, ExploreRequest, RequestContext, TrendsClient, WidgetKind};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TrendsClient::new(Config::default())?;
//! let ctx = RequestContext::new().with_timeout(Duration::from_secs(30));
//!
//! let request = ExploreRequest {
//!     comparison_items: vec![ComparisonItem::new("Golang", "today 12-m").with_geo("US")],
//!     category: 31,
//!     property: String::new(),
//! };
//! let widgets = client.explore(&ctx, &request, "EN").await?;
//! let timeseries = widgets.by_kind(WidgetKind::Timeseries);
//! let timeline = client.interest_over_time(&ctx, timeseries[0], "EN").await?;
//! println!("{} points", timeline.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod client;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod parse;
mod validation;
mod widgets;

// Re-export public API
pub use client::TrendsClient;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, TrendsError};
pub use fetch::{RequestContext, RequestParams};
pub use models::{
    CategoryTree, ComparisonItem, ExploreRequest, GeoMap, KeywordRestriction, KeywordTopic,
    KeywordsRestriction, LocationTree, RankedKeyword, RequestOptions, SearchArticle, SearchImage,
    SearchTitle, Timeline, TrendingArticle, TrendingSearch, TrendingStory, WidgetComparisonItem,
    WidgetRequest,
};
pub use validation::{trends_categories, validate_category};
pub use widgets::{ExploreWidget, ExploreWidgets, WidgetKind};
