//! UI Atlas - cross-source UI component search, ranking and recommendation
//!
//! UI Atlas aggregates component metadata from independent catalogs
//! ("providers"), answers free-text queries with a ranked, filtered and
//! paginated result set, and suggests components that complement a
//! selection.
//!
//! # Quick Start
//!
//! ```ignore
//! use uiatlas::{Aggregator, AtlasConfig, ProviderRegistry, SearchRequest, StaticProvider};
//!
//! let registry = ProviderRegistry::new()
//!     .with_provider(Arc::new(StaticProvider::from_file("catalogs/shadcn.json".as_ref())?));
//! let aggregator = Aggregator::new(registry, &AtlasConfig::default());
//!
//! let page = aggregator.search(&SearchRequest::new("navbar").with_limit(10)).await?;
//! for hit in &page.results {
//!     println!("{} {:.2}", hit.component.key(), hit.score);
//! }
//! ```
//!
//! # Architecture
//!
//! | Crate | Responsibility |
//! |-------|----------------|
//! | `uiatlas-core` | data model, filters, errors, configuration tables |
//! | `uiatlas-search` | tokenizer, inverted index, scoring, ranking, filtering |
//! | `uiatlas-aggregator` | provider contract, registry, fan-out and merge |
//! | `uiatlas-recommend` | complementary, query-intent and per-source recommendations |
//!
//! This crate re-exports the public API of all four.

pub use uiatlas_core::*;

pub use uiatlas_aggregator::{
    async_trait, compare_popularity, fuser_for, Aggregator, Fuser, PopularityFuser, Provider,
    ProviderRegistry, RelevanceFuser, SourceBatch, StaticProvider,
};
pub use uiatlas_recommend::{
    complement_confidence, QueryIntent, RecommendationGraph, RecommendationReason,
    RecommendedKeyword, DEFAULT_COMPLEMENT_LIMIT, DEFAULT_FRAMEWORK_LIMIT, DEFAULT_QUERY_LIMIT,
};
pub use uiatlas_search::{
    compare_ranked, tokenize, words, FieldScorer, FilterPredicate, IndexSnapshot, InvertedIndex,
    KeywordFieldScorer, QueryTerms, Ranker, SynonymTable, DEFAULT_SUGGESTION_LIMIT,
};
