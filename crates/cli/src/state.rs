//! Session over loaded catalogs.
//!
//! Holds the aggregator, the suggestion index and the recommendation graph
//! for one CLI invocation. Every catalog file becomes one provider.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uiatlas_aggregator::{Aggregator, Provider, ProviderRegistry, StaticProvider};
use uiatlas_core::{AtlasConfig, ComponentRecord, Result, ScoredResult, SearchResponse};
use uiatlas_recommend::{QueryIntent, RecommendationGraph, RecommendedKeyword};
use uiatlas_search::InvertedIndex;

use crate::parse::CliAction;

/// Result of executing one action.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Output {
    Page(SearchResponse),
    Component(Arc<ComponentRecord>),
    Suggestions(Vec<String>),
    Similar(Vec<ScoredResult>),
    Recommendations(Vec<RecommendedKeyword>),
    Intent {
        intent: QueryIntent,
        recommendations: Vec<RecommendedKeyword>,
    },
    Sources(Vec<String>),
    Config(Box<AtlasConfig>),
}

/// Loaded catalogs and derived structures.
pub struct SessionState {
    config: AtlasConfig,
    aggregator: Aggregator,
    index: InvertedIndex,
    graph: RecommendationGraph,
}

impl SessionState {
    /// Load configuration and catalogs.
    ///
    /// Without a config path the built-in tables are used.
    pub fn open(catalogs: &[PathBuf], config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => AtlasConfig::from_file(path)?,
            None => AtlasConfig::default(),
        };

        let mut registry = ProviderRegistry::new();
        for path in catalogs {
            let provider = StaticProvider::from_file(path)?;
            info!(
                target: "uiatlas::cli",
                source_id = provider.id(),
                components = provider.len(),
                "Catalog loaded"
            );
            registry.register(Arc::new(provider));
        }

        Ok(SessionState {
            aggregator: Aggregator::new(registry, &config),
            index: InvertedIndex::new().with_popular_terms(config.popular_terms.iter().cloned()),
            graph: RecommendationGraph::from_config(&config),
            config,
        })
    }

    /// Configured search page size.
    pub fn default_limit(&self) -> usize {
        self.config.aggregator.default_limit
    }

    /// Execute an action.
    pub async fn execute(&self, action: CliAction) -> Result<Output> {
        let output = match action {
            CliAction::Search(req) => Output::Page(self.aggregator.search(&req).await?),
            CliAction::Get { source, id } => {
                Output::Component(self.aggregator.get_component(&source, &id).await?)
            }
            CliAction::Suggest { partial, limit } => {
                if self.index.version() == 0 {
                    self.aggregator.rebuild_index(&self.index).await;
                }
                Output::Suggestions(self.index.suggest(&partial, limit))
            }
            CliAction::Similar { source, id, limit } => {
                Output::Similar(self.aggregator.similar(&source, &id, limit).await?)
            }
            CliAction::Recommend { selected, limit } => Output::Recommendations(
                self.graph
                    .recommend_complementary(selected.as_slice(), limit),
            ),
            CliAction::Intent { query, limit } => Output::Intent {
                intent: self.graph.analyze_intent(&query),
                recommendations: self.graph.recommend_for_query(&query, limit),
            },
            CliAction::Essentials {
                framework,
                use_case,
                limit,
            } => Output::Recommendations(self.graph.recommend_for_framework(
                &framework,
                use_case.as_deref(),
                limit,
            )),
            CliAction::Sources => Output::Sources(self.aggregator.sources()),
            CliAction::Config => Output::Config(Box::new(self.config.clone())),
        };
        Ok(output)
    }
}
