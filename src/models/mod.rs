//! Wire records returned by (and sent to) the Trends API.

mod explore;
mod results;
mod trends;

pub use explore::{
    CategoryTree, ComparisonItem, ExploreRequest, KeywordRestriction, KeywordsRestriction,
    LocationTree, RequestOptions, WidgetComparisonItem, WidgetRequest,
};
pub use results::{GeoMap, KeywordTopic, RankedKeyword, Timeline};
pub use trends::{
    SearchArticle, SearchImage, SearchTitle, TrendingArticle, TrendingSearch, TrendingStory,
};

pub(crate) use results::{GeoOut, MultilineOut, RelatedOut, SearchOut};
pub(crate) use trends::{DailyOut, RealtimeOut};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_rewrites_plus_separators() {
        let request = ExploreRequest {
            comparison_items: vec![
                ComparisonItem::new("Python", "today+12-m"),
                ComparisonItem::new("Golang", "today 12-m"),
            ],
            category: 31,
            property: String::new(),
        };
        let normalized = request.normalized();
        assert_eq!(normalized.comparison_items[0].time, "today 12-m");
        assert_eq!(normalized.comparison_items[1].time, "today 12-m");
        // the caller's request is untouched
        assert_eq!(request.comparison_items[0].time, "today+12-m");
    }

    #[test]
    fn test_comparison_item_omits_empty_optionals() {
        let json = serde_json::to_value(ComparisonItem::new("Golang", "today 12-m")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"keyword": "Golang", "time": "today 12-m"})
        );
    }

    #[test]
    fn test_comparison_item_with_explicit_range() {
        let item = ComparisonItem {
            keyword: "Golang".to_string(),
            geo: "US".to_string(),
            time: "2021-09-05T09\\:16\\:00 2021-09-06T09\\:16\\:00".to_string(),
            granular_time_resolution: true,
            start_time: "2021-09-05T09:16:00.000Z".to_string(),
            end_time: "2021-09-06T09:16:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["geo"], "US");
        assert_eq!(json["granularTimeResolution"], true);
        assert_eq!(json["startTime"], "2021-09-05T09:16:00.000Z");
        assert_eq!(json["endTime"], "2021-09-06T09:16:00.000Z");
    }

    #[test]
    fn test_explore_request_wire_names() {
        let request = ExploreRequest {
            comparison_items: vec![ComparisonItem::new("Golang", "today 12-m").with_geo("US")],
            category: 31,
            property: "news".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"comparisonItem":[{"keyword":"Golang","geo":"US","time":"today 12-m"}],"category":31,"property":"news"}"#
        );
    }

    #[test]
    fn test_category_tree_requires_name_and_id() {
        let ok: Result<CategoryTree, _> =
            serde_json::from_str(r#"{"name":"All categories","id":0,"children":[{"name":"Arts","id":3}]}"#);
        let tree = ok.unwrap();
        assert_eq!(tree.children[0].name, "Arts");
        assert!(tree.children[0].children.is_empty());

        let missing_id: Result<CategoryTree, _> = serde_json::from_str(r#"{"name":"Arts"}"#);
        assert!(missing_id.is_err());
    }

    #[test]
    fn test_tree_find() {
        let tree: CategoryTree = serde_json::from_str(
            r#"{"name":"All","id":0,"children":[{"name":"Computers","id":5,"children":[{"name":"Programming","id":31}]}]}"#,
        )
        .unwrap();
        assert_eq!(tree.find(31).map(|c| c.name.as_str()), Some("Programming"));
        assert!(tree.find(999).is_none());

        let locations: LocationTree = serde_json::from_str(
            r#"{"name":"Worldwide","id":"","children":[{"name":"United States","id":"US","children":[{"name":"Texas","id":"US-TX"}]}]}"#,
        )
        .unwrap();
        assert_eq!(locations.find("US-TX").map(|l| l.name.as_str()), Some("Texas"));
    }

    #[test]
    fn test_widget_request_keeps_unknown_fields() {
        let source = serde_json::json!({
            "time": "2023-01-01 2024-01-01",
            "resolution": "WEEK",
            "locale": "en-US",
            "comparisonItem": [{
                "geo": {},
                "complexKeywordsRestriction": {"keyword": [{"type": "BROAD", "value": "Golang"}]}
            }],
            "requestOptions": {"property": "", "backend": "IZG", "category": 31},
            "userConfig": {"userType": "USER_TYPE_LEGIT_USER"}
        });
        let request: WidgetRequest = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(request.comparison_count(), 1);
        assert_eq!(request.request_options.as_ref().unwrap().category, 31);
        assert!(request.extra.contains_key("userConfig"));
        assert_eq!(serde_json::to_value(&request).unwrap(), source);
    }
}
