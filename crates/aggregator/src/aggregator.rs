//! Cross-source search orchestrator
//!
//! This module provides:
//! - Aggregator: fans a search out to every registered provider, filters
//!   each branch, merges with a Fuser and paginates
//! - Per-provider timeouts and failure isolation
//! - Index rebuilds and single-component lookups over the same providers
//!
//! # Flow
//!
//! ```text
//! SearchRequest
//!      │
//!      ▼
//! ┌──────────────────────────────────────────┐
//! │               Aggregator                  │
//! │  validate ── select providers ── compile  │
//! │                                  filters  │
//! │  ┌────────────────────────────────────┐   │
//! │  │  fan out (join_all + timeout)      │   │
//! │  │  ┌──────┐ ┌───────┐ ┌─────────┐    │   │
//! │  │  │shadcn│ │hyperui│ │daisyui …│    │   │
//! │  │  └──┬───┘ └───┬───┘ └────┬────┘    │   │
//! │  └─────┼─────────┼──────────┼─────────┘   │
//! │        └─ filter ┴─ filter ─┘             │
//! │                  │                        │
//! │           ┌──────┴──────┐                 │
//! │           │    Fuser    │                 │
//! │           └──────┬──────┘                 │
//! │             slice page                    │
//! └──────────────────┼────────────────────────┘
//!                    ▼
//!             SearchResponse
//! ```
//!
//! The aggregator holds no per-request state. A provider that fails or
//! times out is logged and left out of the response (its id is reported in
//! `failed_sources`) unless it was the only provider requested, in which
//! case the error propagates.

use crate::fuser::{fuser_for, SourceBatch};
use crate::provider::Provider;
use crate::registry::ProviderRegistry;
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use uiatlas_core::{
    AggregatorConfig, AtlasConfig, ComponentRecord, Error, FilterSpec, Result, ScoredResult,
    SearchRequest, SearchResponse,
};
use uiatlas_search::{FilterPredicate, InvertedIndex, Ranker};

/// Outcome of one provider call
type Branch = (String, Result<Vec<Arc<ComponentRecord>>>);

// ============================================================================
// Aggregator
// ============================================================================

/// Composite search orchestrator over registered providers
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use uiatlas_aggregator::{Aggregator, ProviderRegistry, StaticProvider};
/// use uiatlas_core::{AtlasConfig, ComponentRecord, SearchRequest};
///
/// let registry = ProviderRegistry::new().with_provider(Arc::new(StaticProvider::new(
///     "shadcn",
///     vec![ComponentRecord::new("shadcn", "button", "Button")],
/// )));
/// let aggregator = Aggregator::new(registry, &AtlasConfig::default());
///
/// let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
/// let response = rt.block_on(aggregator.search(&SearchRequest::new("button"))).unwrap();
/// assert_eq!(response.total, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Aggregator {
    registry: ProviderRegistry,
    ranker: Ranker,
    limits: AggregatorConfig,
}

impl Aggregator {
    /// Create an aggregator using the ranking tables and limits of a config
    pub fn new(registry: ProviderRegistry, config: &AtlasConfig) -> Self {
        Aggregator {
            registry,
            ranker: Ranker::from_config(config),
            limits: config.aggregator,
        }
    }

    /// Builder: set per-provider timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.limits = self.limits.with_timeout(timeout);
        self
    }

    /// Builder: set the limit passed to providers during fan-out
    pub fn with_fanout_limit(mut self, limit: usize) -> Self {
        self.limits = self.limits.with_fanout_limit(limit);
        self
    }

    /// Builder: replace the ranker
    pub fn with_ranker(mut self, ranker: Ranker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Ranker used for scoring
    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    /// Registered provider ids in registration order
    pub fn sources(&self) -> Vec<String> {
        self.registry.list()
    }

    // ========================================================================
    // Search Orchestration
    // ========================================================================

    /// Search across all (or one) providers
    ///
    /// # Flow
    ///
    /// 1. Validate the page size
    /// 2. Select providers (`filters.source` narrows to one)
    /// 3. Fetch every provider concurrently, each call bounded by the timeout
    /// 4. Filter each branch
    /// 5. Merge with the fuser for the requested sort order
    /// 6. Slice `[offset, offset + limit)`
    ///
    /// # Errors
    ///
    /// - `InvalidFilter` if `limit` is 0 or above the configured maximum
    /// - `ProviderNotFound` if `filters.source` names no provider
    /// - `ProviderUnavailable` if the exclusively requested provider failed
    pub async fn search(&self, req: &SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();

        // 1. Validate
        self.validate(req)?;

        // 2-3. Select and fetch
        let (batches, failed_sources) = match &req.filters.source {
            Some(source) => {
                let provider = self.registry.get(source)?;
                let components = self.fetch(provider).await.1?;
                (vec![SourceBatch::new(source.clone(), components)], vec![])
            }
            None => self.fetch_all().await,
        };

        // 4. Filter; the provider was already selected by id, so records
        // are not required to carry it
        let filters = FilterSpec {
            source: None,
            ..req.filters.clone()
        };
        let predicate = FilterPredicate::compile(&filters, self.ranker.synonyms());
        let batches: Vec<SourceBatch> = batches
            .into_iter()
            .map(|mut batch| {
                batch.components.retain(|c| predicate.matches(c));
                batch
            })
            .collect();

        // 5. Merge
        let query = req.filters.text_query().unwrap_or("");
        let fuser = fuser_for(req.sort);
        let merged = fuser.fuse(batches, query, &self.ranker);
        let total = merged.len();

        // 6. Paginate
        let results: Vec<ScoredResult> = merged
            .into_iter()
            .skip(req.offset)
            .take(req.limit)
            .collect();

        debug!(
            target: "uiatlas::aggregate",
            fuser = fuser.name(),
            total,
            returned = results.len(),
            failed = failed_sources.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Search complete"
        );

        Ok(SearchResponse {
            results,
            total,
            limit: req.limit,
            offset: req.offset,
            failed_sources,
        })
    }

    /// Fetch one component from one provider
    ///
    /// # Errors
    ///
    /// - `ProviderNotFound` if no provider has `source_id`
    /// - `ComponentNotFound` if the provider has no such component
    /// - `ProviderUnavailable` on provider failure or timeout
    pub async fn get_component(&self, source_id: &str, id: &str) -> Result<Arc<ComponentRecord>> {
        let provider = self.registry.get(source_id)?;
        match tokio::time::timeout(self.limits.provider_timeout(), provider.get_component(id)).await
        {
            Ok(Ok(component)) => Ok(component),
            Ok(Err(e)) if e.is_not_found() => Err(e),
            Ok(Err(e)) => Err(into_unavailable(source_id, e)),
            Err(_) => Err(self.timed_out(source_id)),
        }
    }

    /// Components most similar to the given one, across every provider
    pub async fn similar(
        &self,
        source_id: &str,
        id: &str,
        limit: usize,
    ) -> Result<Vec<ScoredResult>> {
        let component = self.get_component(source_id, id).await?;
        let (batches, _) = self.fetch_all().await;
        let candidates: Vec<Arc<ComponentRecord>> =
            batches.into_iter().flat_map(|b| b.components).collect();
        Ok(self.ranker.similar_to(&component, &candidates, limit))
    }

    /// Rebuild an index from every responding provider
    ///
    /// Returns the number of components indexed.
    pub async fn rebuild_index(&self, index: &InvertedIndex) -> usize {
        let (batches, failed) = self.fetch_all().await;
        if !failed.is_empty() {
            warn!(
                target: "uiatlas::index",
                failed = ?failed,
                "Rebuilding index without failed sources"
            );
        }
        let components: Vec<Arc<ComponentRecord>> =
            batches.into_iter().flat_map(|b| b.components).collect();
        index.rebuild(components.iter().map(Arc::as_ref));
        components.len()
    }

    // ========================================================================
    // Fan-out
    // ========================================================================

    fn validate(&self, req: &SearchRequest) -> Result<()> {
        if req.limit == 0 || req.limit > self.limits.max_limit {
            return Err(Error::InvalidFilter(format!(
                "limit must be between 1 and {}, got {}",
                self.limits.max_limit, req.limit
            )));
        }
        Ok(())
    }

    /// Query every provider concurrently; failures are logged and listed
    async fn fetch_all(&self) -> (Vec<SourceBatch>, Vec<String>) {
        debug!(
            target: "uiatlas::aggregate",
            providers = self.registry.len(),
            fanout_limit = self.limits.fanout_limit,
            "Fanning out"
        );

        let branches: Vec<Branch> =
            join_all(self.registry.iter().map(|p| self.fetch(Arc::clone(p)))).await;

        let mut batches = Vec::with_capacity(branches.len());
        let mut failed = Vec::new();
        for (source_id, outcome) in branches {
            match outcome {
                Ok(components) => batches.push(SourceBatch::new(source_id, components)),
                Err(e) => {
                    warn!(
                        target: "uiatlas::aggregate",
                        source_id = %source_id,
                        error = %e,
                        "Provider excluded from results"
                    );
                    failed.push(source_id);
                }
            }
        }
        (batches, failed)
    }

    /// One bounded provider call
    async fn fetch(&self, provider: Arc<dyn Provider>) -> Branch {
        let source_id = provider.id().to_string();
        let call = provider.list_components(self.limits.fanout_limit, 0);
        let outcome = match tokio::time::timeout(self.limits.provider_timeout(), call).await {
            Ok(Ok(components)) => Ok(components),
            Ok(Err(e)) => Err(into_unavailable(&source_id, e)),
            Err(_) => Err(self.timed_out(&source_id)),
        };
        (source_id, outcome)
    }

    fn timed_out(&self, source_id: &str) -> Error {
        Error::provider_unavailable(
            source_id,
            format!("timed out after {} ms", self.limits.provider_timeout_ms),
        )
    }
}

fn into_unavailable(source_id: &str, e: Error) -> Error {
    match e {
        Error::ProviderUnavailable { .. } => e,
        other => Error::provider_unavailable(source_id, other.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
