//! Catalogs and configuration loaded from files

use crate::common::*;
use tempfile::TempDir;

const SHADCN: &str = r#"[
    {
        "id": "button",
        "name": "Button",
        "description": "Displays a button or a component that looks like a button.",
        "tags": ["action", "form"],
        "category": "buttons",
        "frameworks": {"react": true, "next": true},
        "popularity_score": 9.5
    },
    {
        "id": "data-table",
        "name": "Data Table",
        "category": "data_display",
        "frameworks": {"react": true},
        "requires_pro_access": true,
        "popularity_score": 7.0
    }
]"#;

const DAISYUI: &str = r#"[
    {
        "id": "btn",
        "name": "Button",
        "tags": ["action"],
        "frameworks": {"html": true, "vue": true},
        "styling": {"version": "v4"},
        "popularity_score": 6.0
    }
]"#;

fn file_aggregator(dir: &TempDir, config: &AtlasConfig) -> Aggregator {
    let registry = [("shadcn", SHADCN), ("daisyui", DAISYUI)]
        .iter()
        .map(|(source, json)| write_catalog(dir.path(), source, json))
        .map(|path| StaticProvider::from_file(&path).unwrap())
        .fold(ProviderRegistry::new(), |r, p| r.with_provider(Arc::new(p)));
    Aggregator::new(registry, config)
}

#[tokio::test]
async fn test_catalog_files_become_sources() {
    let dir = TempDir::new().unwrap();
    let agg = file_aggregator(&dir, &AtlasConfig::default());
    assert_eq!(agg.sources(), vec!["shadcn", "daisyui"]);

    let button = agg.get_component("daisyui", "btn").await.unwrap();
    assert_eq!(button.source_id, "daisyui");
}

#[tokio::test]
async fn test_filters_over_catalog_files() {
    let dir = TempDir::new().unwrap();
    let agg = file_aggregator(&dir, &AtlasConfig::default());

    let vue = FilterSpec::new().with_framework("vue");
    let resp = agg.search(&SearchRequest::with_filters(vue)).await.unwrap();
    assert_eq!(resp.total, 1);
    assert_eq!(resp.results[0].component.key().to_string(), "daisyui/btn");

    let free = FilterSpec::new().free_only();
    let resp = agg.search(&SearchRequest::with_filters(free)).await.unwrap();
    assert_eq!(resp.total, 2);
    assert!(resp.results.iter().all(|r| !r.component.requires_pro_access));

    let v3 = FilterSpec::new().with_styling_version("v3");
    let resp = agg.search(&SearchRequest::with_filters(v3)).await.unwrap();
    // records without styling metadata pass
    assert_eq!(resp.total, 2);
    assert!(resp.results.iter().all(|r| r.component.source_id == "shadcn"));
}

#[tokio::test]
async fn test_popularity_order_across_files() {
    let dir = TempDir::new().unwrap();
    let agg = file_aggregator(&dir, &AtlasConfig::default());
    let resp = agg.search(&SearchRequest::default()).await.unwrap();
    let ids: Vec<&str> = resp.results.iter().map(|r| r.component.id.as_str()).collect();
    assert_eq!(ids, vec!["button", "data-table", "btn"]);
}

#[tokio::test]
async fn test_custom_config_file() {
    let dir = TempDir::new().unwrap();
    let mut config = AtlasConfig::default();
    config.synonyms.insert("clicky".into(), vec!["button".into()]);
    config.aggregator.max_limit = 5;
    config.aggregator.default_limit = 5;
    let path = dir.path().join(CONFIG_FILE_NAME);
    config.write_to_file(&path).unwrap();

    let loaded = AtlasConfig::from_file(&path).unwrap();
    let agg = file_aggregator(&dir, &loaded);

    let resp = agg.search(&SearchRequest::new("clicky").with_limit(5)).await.unwrap();
    assert_eq!(resp.total, 2);

    let err = agg
        .search(&SearchRequest::new("clicky").with_limit(6))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFilter(_)));
}

#[test]
fn test_config_version_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "version = 2\n").unwrap();

    match AtlasConfig::from_file(&path) {
        Err(Error::Config(msg)) => assert!(msg.contains("version")),
        other => panic!("expected config error, got {:?}", other.map(|_| ())),
    }
}
