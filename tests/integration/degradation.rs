//! Partial-failure behavior
//!
//! A failing or hanging provider shrinks the result set; it only surfaces as
//! an error when the caller asked for that provider alone.

use crate::common::*;
use std::time::{Duration, Instant};

fn three_sources_one_failing() -> Aggregator {
    aggregator(vec![
        catalog(
            "shadcn",
            &["Alert", "Badge", "Button", "Card", "Dialog", "Input", "Select"],
        ),
        FailingProvider::new("flowbite"),
        catalog("hyperui", &["Banner", "Footer", "Hero", "Pricing", "Stats", "Team"]),
    ])
}

#[tokio::test]
async fn test_failing_source_reduces_total() {
    let agg = three_sources_one_failing();
    let resp = agg
        .search(&SearchRequest::default().with_limit(10))
        .await
        .unwrap();

    assert!(resp.len() <= 10);
    assert_eq!(resp.total, 13);
    assert!(resp.has_more());
    assert_eq!(resp.failed_sources, vec!["flowbite"]);
}

#[tokio::test]
async fn test_second_page_continues_first() {
    let agg = three_sources_one_failing();
    let first = agg
        .search(&SearchRequest::default().with_limit(10))
        .await
        .unwrap();
    let second = agg
        .search(&SearchRequest::default().with_limit(10).with_offset(10))
        .await
        .unwrap();

    assert_eq!(second.len(), 3);
    assert!(!second.has_more());
    let mut keys: Vec<String> = first
        .results
        .iter()
        .chain(second.results.iter())
        .map(|r| r.component.key().to_string())
        .collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 13);
}

#[tokio::test]
async fn test_exclusive_failing_source_raises() {
    let agg = three_sources_one_failing();
    let req = SearchRequest::with_filters(FilterSpec::new().with_source("flowbite"));
    match agg.search(&req).await {
        Err(Error::ProviderUnavailable { source_id, .. }) => assert_eq!(source_id, "flowbite"),
        other => panic!("expected ProviderUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_hanging_source_is_bounded_by_timeout() {
    let agg = aggregator(vec![
        catalog("shadcn", &["Button"]),
        Arc::new(HangingProvider {
            id: "slowui".into(),
        }),
    ])
    .with_timeout(Duration::from_millis(100));

    let start = Instant::now();
    let resp = agg.search(&SearchRequest::new("button")).await.unwrap();
    assert!(start.elapsed() < Duration::from_secs(5));
    assert_eq!(resp.total, 1);
    assert_eq!(resp.failed_sources, vec!["slowui"]);

    let err = agg.get_component("slowui", "anything").await.unwrap_err();
    assert!(matches!(err, Error::ProviderUnavailable { .. }));
}

#[tokio::test]
async fn test_missing_component_is_typed() {
    let agg = three_sources_one_failing();
    let err = agg.get_component("shadcn", "carousel").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, Error::ComponentNotFound { ref id, .. } if id == "carousel"));
}

#[tokio::test]
async fn test_degraded_response_json() {
    let agg = three_sources_one_failing();
    let resp = agg
        .search(&SearchRequest::new("button").with_limit(5))
        .await
        .unwrap();

    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["limit"], 5);
    assert_eq!(json["failed_sources"], serde_json::json!(["flowbite"]));
    assert_eq!(json["results"][0]["kind"], "exact");
    assert_eq!(json["results"][0]["component"]["source_id"], "shadcn");

    let back: SearchResponse = serde_json::from_value(json).unwrap();
    assert_eq!(back, resp);
}
