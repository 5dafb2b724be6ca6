//! End-to-end tests against the real Google Trends service.
//!
//! All tests are `#[ignore]`d: they need network access and the service
//! throttles aggressively. Run with `cargo test --test live_api -- --ignored`.

use std::time::Duration;

use gtrends::{ComparisonItem, Config, ExploreRequest, RequestContext, TrendsClient, WidgetKind};

const CAT_PROGRAMMING: i64 = 31;

fn ctx() -> RequestContext {
    RequestContext::new().with_timeout(Duration::from_secs(60))
}

fn client() -> TrendsClient {
    let _ = gtrends::initialization::init_logger_with(
        log::LevelFilter::Info,
        gtrends::LogFormat::Plain,
    );
    let client = TrendsClient::new(Config::default()).expect("Failed to build client");
    client.set_debug(true);
    client
}

#[tokio::test]
#[ignore]
async fn test_live_daily() {
    let searches = client().daily(&ctx(), "EN", "US").await.unwrap();
    assert!(!searches.is_empty());
    assert!(searches.iter().all(|s| !s.title.query.is_empty()));
}

#[tokio::test]
#[ignore]
async fn test_live_realtime() {
    let stories = client().realtime(&ctx(), "EN", "US", "all").await.unwrap();
    assert!(!stories.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_live_lookups() {
    let client = client();
    let categories = client.explore_categories(&ctx()).await.unwrap();
    assert!(categories.find(CAT_PROGRAMMING).is_some());
    let locations = client.explore_locations(&ctx()).await.unwrap();
    assert!(locations.find("US").is_some());
}

#[tokio::test]
#[ignore]
async fn test_live_explore_single_keyword() {
    let client = client();
    let request = ExploreRequest {
        comparison_items: vec![ComparisonItem::new("Golang", "today 12-m").with_geo("US")],
        category: CAT_PROGRAMMING,
        property: String::new(),
    };
    let widgets = client.explore(&ctx(), &request, "EN").await.unwrap();
    assert_eq!(widgets.len(), 4);

    let timeseries = widgets.by_kind(WidgetKind::Timeseries)[0];
    let timeline = client
        .interest_over_time(&ctx(), timeseries, "EN")
        .await
        .unwrap();
    assert!(!timeline.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_live_explore_groups() {
    let client = client();
    let request = ExploreRequest {
        comparison_items: ["Golang", "Python", "Java"]
            .into_iter()
            .map(|keyword| ComparisonItem::new(keyword, "today 12-m").with_geo("US"))
            .collect(),
        category: CAT_PROGRAMMING,
        property: String::new(),
    };
    let mut widgets = client.explore(&ctx(), &request, "EN").await.unwrap();
    widgets.sort();
    assert_eq!(widgets.by_group(0).len(), 3);
    assert_eq!(widgets.by_kind(WidgetKind::RelatedQueries).len(), 3);
}

#[tokio::test]
#[ignore]
async fn test_live_search() {
    let topics = client().search(&ctx(), "Golang", "EN").await.unwrap();
    assert!(topics.iter().any(|t| t.mid == "/m/09gbxjr"));
}
