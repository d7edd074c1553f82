//! Reference scenarios
//!
//! Each test walks one user-visible behavior through every layer it touches.

use crate::common::*;

// ============================================================================
// Ranking
// ============================================================================

#[tokio::test]
async fn test_exact_name_ranks_first() {
    let agg = aggregator(vec![catalog("shadcn", &["Button", "IconButton", "ButtonGroup"])]);
    let req = SearchRequest::new("button").with_sort(SortOrder::Relevance);
    let resp = agg.search(&req).await.unwrap();

    assert_eq!(resp.total, 3);
    assert_eq!(resp.results[0].component.name, "Button");
    assert_eq!(resp.results[0].score, EXACT_MATCH_SCORE);
    assert!(resp.results[0].is_exact());
    assert!(resp
        .results
        .windows(2)
        .all(|w| w[0].score >= w[1].score));
    assert!(resp.results[1..].iter().all(|r| r.score < EXACT_MATCH_SCORE));
}

#[tokio::test]
async fn test_ranking_is_repeatable() {
    let agg = aggregator(vec![
        catalog("shadcn", &["Card", "Card Header", "Pricing Card"]),
        catalog("hyperui", &["Card", "Product Card"]),
    ]);
    let req = SearchRequest::new("card").with_sort(SortOrder::Relevance);

    let first = agg.search(&req).await.unwrap();
    let second = agg.search(&req).await.unwrap();
    let keys = |r: &SearchResponse| -> Vec<String> {
        r.results.iter().map(|h| h.component.key().to_string()).collect()
    };
    assert_eq!(keys(&first), keys(&second));
    // two exact matches: source id breaks the tie
    assert_eq!(keys(&first)[0], "hyperui/card");
    assert_eq!(keys(&first)[1], "shadcn/card");
}

// ============================================================================
// Filtering
// ============================================================================

#[tokio::test]
async fn test_cta_synonym_recall() {
    let hero = ComponentRecord::new("hyperui", "hero-1", "Hero Banner")
        .with_description("Bold headline with a Get Started button");
    let plain = ComponentRecord::new("hyperui", "footer", "Footer").with_description("Links");
    let agg = aggregator(vec![Arc::new(StaticProvider::new("hyperui", vec![hero, plain]))]);

    let resp = agg
        .search(&SearchRequest::with_filters(FilterSpec::new().with_query("cta")))
        .await
        .unwrap();

    assert_eq!(resp.total, 1);
    assert_eq!(resp.results[0].component.id, "hero-1");
    assert!(!resp.results[0]
        .component
        .description
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
        .contains("cta"));
}

#[tokio::test]
async fn test_unknown_category_matches_nothing() {
    let agg = aggregator(vec![catalog("shadcn", &["Button", "Card"])]);
    let req = SearchRequest::with_filters(FilterSpec::new().with_category("spaceships"));
    let resp = agg.search(&req).await.unwrap();
    assert_eq!(resp.total, 0);
    assert!(resp.is_empty());
}

// ============================================================================
// Tokenization and Suggestions
// ============================================================================

#[test]
fn test_navbar_tokens() {
    let tokens: Vec<String> = tokenize("Navbar").into_iter().collect();
    assert_eq!(tokens, vec!["nav", "navb", "navba", "navbar"]);
}

#[tokio::test]
async fn test_suggest_after_rebuild() {
    let agg = aggregator(vec![
        catalog("shadcn", &["Navbar", "Navigation Menu"]),
        catalog("hyperui", &["Newsletter"]),
    ]);
    let index = InvertedIndex::new();
    assert!(index.suggest("nav", 10).is_empty());

    assert_eq!(agg.rebuild_index(&index).await, 3);
    let suggestions = index.suggest("nav", 10);
    assert!(suggestions.contains(&"Navbar".to_string()));
    assert!(suggestions.contains(&"Navigation Menu".to_string()));
    assert!(!suggestions.contains(&"Newsletter".to_string()));
}

// ============================================================================
// Recommendations
// ============================================================================

#[test]
fn test_input_button_complements() {
    let graph = RecommendationGraph::from_config(&AtlasConfig::default());
    let recs = graph.recommend_complementary(&["Input", "Button"], DEFAULT_COMPLEMENT_LIMIT);

    let form = recs.iter().find(|r| r.keyword == "form").unwrap();
    assert!(form.confidence > 0.6);
    assert_eq!(recs[0].keyword, "form");
    assert!(recs.iter().all(|r| r.confidence <= 0.9));
    assert!(recs.iter().all(|r| r.keyword != "input" && r.keyword != "button"));
}

#[test]
fn test_empty_selection_recommends_nothing() {
    let graph = RecommendationGraph::default();
    let none: Vec<String> = vec![];
    assert!(graph.recommend_complementary(&none, 8).is_empty());
}

#[test]
fn test_framework_essentials_then_use_case() {
    let graph = RecommendationGraph::default();
    let recs = graph.recommend_for_framework("antd", Some("form"), DEFAULT_FRAMEWORK_LIMIT);

    let keywords: Vec<&str> = recs.iter().map(|r| r.keyword.as_str()).collect();
    assert_eq!(
        keywords,
        vec!["button", "card", "input", "table", "form", "select", "checkbox"]
    );
    assert!(recs[..5].iter().all(|r| r.confidence == 0.8));
    assert!(recs[5..].iter().all(|r| r.confidence == 0.7));
}
