// Parse module tests.

use super::*;
use crate::error_handling::TrendsError;
use crate::models::{
    CategoryTree, DailyOut, GeoOut, LocationTree, MultilineOut, RealtimeOut, RelatedOut,
    SearchOut,
};
use crate::widgets::{ExploreOut, WidgetKind};
use serde_json::Value;

fn fixture(name: &str) -> Vec<u8> {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}

/// Source JSON of a fixture, with its guard removed by hand.
fn source_json(name: &str, sentinel: &str) -> Value {
    let raw = String::from_utf8(fixture(name)).unwrap();
    let body = raw.strip_prefix(sentinel).unwrap();
    serde_json::from_str(body).unwrap()
}

fn is_default(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_i64() == Some(0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.values().all(is_default),
    }
}

/// Every field the record declares must equal the source value; fields the
/// source omits must have decoded to their default.
fn assert_decoded_matches(decoded: &Value, source: &Value, path: &str) {
    match (decoded, source) {
        (Value::Object(decoded), Value::Object(source)) => {
            for (key, value) in decoded {
                let at = format!("{path}.{key}");
                match source.get(key) {
                    Some(original) => assert_decoded_matches(value, original, &at),
                    None => assert!(is_default(value), "{at} not in source but decoded {value}"),
                }
            }
        }
        (Value::Array(decoded), Value::Array(source)) => {
            assert_eq!(decoded.len(), source.len(), "length mismatch at {path}");
            for (i, (d, s)) in decoded.iter().zip(source).enumerate() {
                assert_decoded_matches(d, s, &format!("{path}[{i}]"));
            }
        }
        (decoded, source) => assert_eq!(decoded, source, "value mismatch at {path}"),
    }
}

#[test]
fn test_strip_short_sentinel() {
    let body = b")]}'\n{\"a\":1}";
    assert_eq!(&*strip_sentinel(")]}'", body), b"\n{\"a\":1}");
}

#[test]
fn test_strip_comma_sentinel() {
    let body = b")]}',\n{\"a\":1}";
    assert_eq!(&*strip_sentinel(")]}',", body), b"\n{\"a\":1}");
}

#[test]
fn test_short_sentinel_leaves_comma_behind() {
    // wrong variant for a comma endpoint: the comma survives and breaks the JSON
    let body = b")]}',{\"a\":1}";
    let stripped = strip_sentinel(")]}'", body);
    assert_eq!(&*stripped, b",{\"a\":1}");
    assert!(serde_json::from_slice::<Value>(&stripped).is_err());
}

#[test]
fn test_strip_only_first_occurrence() {
    let body = b")]}'{\"text\":\")]}'\"}";
    let stripped = strip_sentinel(")]}'", body);
    assert_eq!(&*stripped, b"{\"text\":\")]}'\"}");
    let value: Value = serde_json::from_slice(&stripped).unwrap();
    assert_eq!(value["text"], ")]}'");
}

#[test]
fn test_strip_first_occurrence_not_at_start() {
    let body = b"  )]}',[1]";
    assert_eq!(&*strip_sentinel(")]}',", body), b"  [1]");
}

#[test]
fn test_strip_without_sentinel_is_noop() {
    let body = b"{\"a\":1}";
    assert!(matches!(strip_sentinel(")]}'", body), std::borrow::Cow::Borrowed(_)));
    assert_eq!(&*strip_sentinel(")]}'", body), body);
    assert_eq!(&*strip_sentinel("", body), body);
    assert_eq!(&*strip_sentinel(")]}'", b")]"), b")]");
}

#[test]
fn test_endpoint_sentinels() {
    for endpoint in [
        Endpoint::Realtime,
        Endpoint::Categories,
        Endpoint::Locations,
        Endpoint::Explore,
    ] {
        assert_eq!(endpoint.sentinel(), ")]}'", "{endpoint:?}");
    }
    for endpoint in [
        Endpoint::Daily,
        Endpoint::InterestOverTime,
        Endpoint::InterestByLocation,
        Endpoint::Related,
        Endpoint::Autocomplete,
    ] {
        assert_eq!(endpoint.sentinel(), ")]}',", "{endpoint:?}");
    }
}

#[test]
fn test_decode_error_names_endpoint() {
    let err = decode::<Value>(Endpoint::Daily, b")]}',not json").unwrap_err();
    match err {
        TrendsError::Parse { endpoint, .. } => assert_eq!(endpoint, "/dailytrends"),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn test_decode_rejects_wrong_shape() {
    // valid JSON, but `default` must be an object
    let err = decode::<DailyOut>(Endpoint::Daily, b")]}',{\"default\":\"oops\"}").unwrap_err();
    assert!(matches!(err, TrendsError::Parse { .. }));
}

#[test]
fn test_decode_null_image() {
    let body = br#")]}',{"default":{"trendingSearchesDays":[{"trendingSearches":[{"title":{"query":"Golang"},"image":null,"articles":[]}]}]}}"#;
    let searches = decode::<DailyOut>(Endpoint::Daily, body).unwrap().into_searches();
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].title.query, "Golang");
    assert!(searches[0].image.is_none());

    let body = br#")]}'{"storySummaries":{"trendingStories":[{"title":"Golang","image":null}]}}"#;
    let stories = decode::<RealtimeOut>(Endpoint::Realtime, body).unwrap().into_stories();
    assert_eq!(stories.len(), 1);
    assert!(stories[0].image.is_none());
}

#[test]
fn test_decode_daily_fixture() {
    let out: DailyOut = decode(Endpoint::Daily, &fixture("daily.json")).unwrap();
    let searches = out.into_searches();
    assert_eq!(searches.len(), 3);
    assert!(searches.iter().all(|s| !s.title.query.is_empty()));
    assert_eq!(searches[0].title.query, "Golden Globes");
    assert_eq!(searches[2].title.query, "Sarah's Oil");
    assert_eq!(searches[0].articles.len(), 2);
    assert!(searches[0].articles[1].image.is_none());

    let source = source_json("daily.json", ")]}',");
    let days = source["default"]["trendingSearchesDays"].as_array().unwrap();
    let flat: Vec<Value> = days
        .iter()
        .flat_map(|day| day["trendingSearches"].as_array().unwrap().clone())
        .collect();
    assert_decoded_matches(
        &serde_json::to_value(&searches).unwrap(),
        &Value::Array(flat),
        "daily",
    );
}

#[test]
fn test_decode_realtime_fixture() {
    let out: RealtimeOut = decode(Endpoint::Realtime, &fixture("realtime.json")).unwrap();
    let stories = out.into_stories();
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[1].articles[0].title, "Storm brings heavy snow to the east coast");

    let source = source_json("realtime.json", ")]}'");
    assert_decoded_matches(
        &serde_json::to_value(&stories).unwrap(),
        &source["storySummaries"]["trendingStories"],
        "realtime",
    );
}

#[test]
fn test_decode_category_tree_fixture() {
    let tree: CategoryTree = decode(Endpoint::Categories, &fixture("categories.json")).unwrap();
    assert_eq!(tree.name, "All categories");
    assert_eq!(tree.find(31).unwrap().children.len(), 2);

    let source = source_json("categories.json", ")]}'");
    assert_decoded_matches(&serde_json::to_value(&tree).unwrap(), &source, "categories");
}

#[test]
fn test_decode_location_tree_fixture() {
    let tree: LocationTree = decode(Endpoint::Locations, &fixture("locations.json")).unwrap();
    assert_eq!(tree.find("US-TX").unwrap().children[0].name, "Austin TX");

    let source = source_json("locations.json", ")]}'");
    assert_decoded_matches(&serde_json::to_value(&tree).unwrap(), &source, "locations");
}

#[test]
fn test_decode_explore_fixture() {
    let out: ExploreOut = decode(Endpoint::Explore, &fixture("explore.json")).unwrap();
    let widgets = out.into_widgets();
    assert_eq!(widgets.len(), 4);
    let kinds: Vec<_> = widgets.iter().map(|w| w.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            Some(WidgetKind::Timeseries),
            Some(WidgetKind::GeoMap),
            Some(WidgetKind::RelatedTopics),
            Some(WidgetKind::RelatedQueries),
        ]
    );
    assert!(widgets.iter().all(|w| w.group().is_none()));

    let source = source_json("explore.json", ")]}'");
    assert_decoded_matches(
        &serde_json::to_value(widgets.into_vec()).unwrap(),
        &source["widgets"],
        "explore",
    );
}

#[test]
fn test_decode_multiline_fixture() {
    let out: MultilineOut = decode(Endpoint::InterestOverTime, &fixture("multiline.json")).unwrap();
    let timeline = out.into_timeline();
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline[1].value, vec![100]);
    assert!(!timeline[0].is_partial);
    assert!(timeline[2].is_partial);

    let source = source_json("multiline.json", ")]}',");
    assert_decoded_matches(
        &serde_json::to_value(&timeline).unwrap(),
        &source["default"]["timelineData"],
        "multiline",
    );
}

#[test]
fn test_decode_comparedgeo_fixture() {
    let out: GeoOut = decode(Endpoint::InterestByLocation, &fixture("comparedgeo.json")).unwrap();
    let geo = out.into_geo_map();
    assert_eq!(geo.len(), 3);
    assert_eq!(geo[0].geo_code, "US-WA");
    assert_eq!(geo[2].has_data, vec![false]);

    let source = source_json("comparedgeo.json", ")]}',");
    assert_decoded_matches(
        &serde_json::to_value(&geo).unwrap(),
        &source["default"]["geoMapData"],
        "comparedgeo",
    );
}

#[test]
fn test_decode_related_fixture_flattens_lists() {
    let out: RelatedOut = decode(Endpoint::Related, &fixture("related.json")).unwrap();
    let keywords = out.into_keywords();
    let queries: Vec<_> = keywords.iter().map(|k| k.query.as_str()).collect();
    assert_eq!(queries, vec!["golang tutorial", "golang generics", "golang 1.22"]);
    assert_eq!(keywords[2].formatted_value, "+4,250%");
    assert!(!keywords[2].has_data);

    let source = source_json("related.json", ")]}',");
    let flat: Vec<Value> = source["default"]["rankedList"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|list| list["rankedKeyword"].as_array().unwrap().clone())
        .collect();
    assert_decoded_matches(
        &serde_json::to_value(&keywords).unwrap(),
        &Value::Array(flat),
        "related",
    );
}

#[test]
fn test_decode_related_topics_fixture() {
    let out: RelatedOut = decode(Endpoint::Related, &fixture("related_topics.json")).unwrap();
    let keywords = out.into_keywords();
    assert_eq!(keywords.len(), 1);
    assert_eq!(keywords[0].topic.mid, "/m/09gbxjr");
    assert_eq!(keywords[0].topic.kind, "Programming language");
    assert!(keywords[0].query.is_empty());
}

#[test]
fn test_decode_autocomplete_fixture() {
    let out: SearchOut = decode(Endpoint::Autocomplete, &fixture("autocomplete.json")).unwrap();
    let topics = out.into_topics();
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].title, "Go");

    let source = source_json("autocomplete.json", ")]}',");
    assert_decoded_matches(
        &serde_json::to_value(&topics).unwrap(),
        &source["default"]["topics"],
        "autocomplete",
    );
}
