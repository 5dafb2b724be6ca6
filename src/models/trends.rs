//! Daily and realtime trend records.

use serde::{Deserialize, Serialize};

/// One trending search from the daily listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendingSearch {
    /// Search query that is trending
    pub title: SearchTitle,
    /// Approximate traffic, as displayed (e.g. `"200K+"`)
    pub formatted_traffic: String,
    /// Lead image for the search, if any
    pub image: Option<SearchImage>,
    /// News articles associated with the search
    pub articles: Vec<SearchArticle>,
}

/// Title of a trending search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchTitle {
    /// The query string
    pub query: String,
}

/// Image metadata attached to searches, articles and stories.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchImage {
    /// Article the image belongs to
    pub news_url: String,
    /// Publisher of the image
    pub source: String,
    /// Image location
    pub image_url: String,
}

/// News article attached to a daily trending search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchArticle {
    pub title: String,
    pub time_ago: String,
    pub source: String,
    pub image: Option<SearchImage>,
    pub url: String,
    pub snippet: String,
}

/// One story from the realtime listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingStory {
    /// Story title (comma-separated entity names)
    pub title: String,
    /// Lead image for the story, if any
    pub image: Option<SearchImage>,
    /// Articles making up the story
    pub articles: Vec<TrendingArticle>,
}

/// Article attached to a realtime story.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingArticle {
    #[serde(rename = "articleTitle")]
    pub title: String,
    pub url: String,
    pub source: String,
    pub time: String,
    pub snippet: String,
}

/// Daily listing payload: searches bucketed per day.
#[derive(Debug, Deserialize)]
pub(crate) struct DailyOut {
    default: DailyDays,
}

#[derive(Debug, Deserialize)]
struct DailyDays {
    #[serde(rename = "trendingSearchesDays", default)]
    days: Vec<DailyDay>,
}

#[derive(Debug, Deserialize)]
struct DailyDay {
    #[serde(rename = "trendingSearches", default)]
    searches: Vec<TrendingSearch>,
}

impl DailyOut {
    /// Flattens the per-day buckets into one sequence, newest day first.
    pub(crate) fn into_searches(self) -> Vec<TrendingSearch> {
        self.default
            .days
            .into_iter()
            .flat_map(|day| day.searches)
            .collect()
    }
}

/// Realtime listing payload.
#[derive(Debug, Deserialize)]
pub(crate) struct RealtimeOut {
    #[serde(rename = "storySummaries")]
    story_summaries: StorySummaries,
}

#[derive(Debug, Deserialize)]
struct StorySummaries {
    #[serde(rename = "trendingStories", default)]
    trending_stories: Vec<TrendingStory>,
}

impl RealtimeOut {
    pub(crate) fn into_stories(self) -> Vec<TrendingStory> {
        self.story_summaries.trending_stories
    }
}
