//! Merge strategies for combining per-source results
//!
//! This module provides:
//! - Fuser trait for pluggable merge ordering
//! - PopularityFuser: `(-popularity_score, name, source_id, id)` (default)
//! - RelevanceFuser: ranker score, falling back to popularity without a query
//!
//! Fusers receive the already filtered batches of every responding source
//! and return the complete ordered result set. Pagination happens after.

use std::cmp::Ordering;
use std::sync::Arc;
use uiatlas_core::{ComponentRecord, ScoredResult, SortOrder};
use uiatlas_search::{compare_ranked, Ranker};

// ============================================================================
// SourceBatch
// ============================================================================

/// Filtered records from one source
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    /// Source that answered
    pub source_id: String,
    /// Records that passed the filter
    pub components: Vec<Arc<ComponentRecord>>,
}

impl SourceBatch {
    /// Create a new batch
    pub fn new(source_id: impl Into<String>, components: Vec<Arc<ComponentRecord>>) -> Self {
        SourceBatch {
            source_id: source_id.into(),
            components,
        }
    }
}

// ============================================================================
// Fuser Trait
// ============================================================================

/// Pluggable merge interface
///
/// # Thread Safety
///
/// Fusers must be Send + Sync for concurrent searches.
pub trait Fuser: Send + Sync {
    /// Merge batches into one ordered list
    ///
    /// `query` may be blank. Every returned item carries the ranker's score
    /// for the query (0.0 and `MatchKind::None` when unmatched).
    fn fuse(&self, batches: Vec<SourceBatch>, query: &str, ranker: &Ranker) -> Vec<ScoredResult>;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

/// Fuser implementing a sort order
pub fn fuser_for(sort: SortOrder) -> &'static dyn Fuser {
    match sort {
        SortOrder::Popularity => &PopularityFuser,
        SortOrder::Relevance => &RelevanceFuser,
    }
}

/// Popularity ordering: score hint descending, then name, source and id
pub fn compare_popularity(a: &ComponentRecord, b: &ComponentRecord) -> Ordering {
    b.popularity_score
        .total_cmp(&a.popularity_score)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.source_id.cmp(&b.source_id))
        .then_with(|| a.id.cmp(&b.id))
}

// ============================================================================
// PopularityFuser
// ============================================================================

/// Concatenate and sort by popularity hint
#[derive(Debug, Clone, Copy, Default)]
pub struct PopularityFuser;

impl Fuser for PopularityFuser {
    fn fuse(&self, batches: Vec<SourceBatch>, query: &str, ranker: &Ranker) -> Vec<ScoredResult> {
        let mut all: Vec<Arc<ComponentRecord>> =
            batches.into_iter().flat_map(|b| b.components).collect();
        all.sort_by(|a, b| compare_popularity(a, b));

        all.into_iter()
            .map(|c| ranker.score(query, c))
            .collect()
    }

    fn name(&self) -> &str {
        "popularity"
    }
}

// ============================================================================
// RelevanceFuser
// ============================================================================

/// Rank the merged set by relevance
///
/// Every filtered record is kept. Records the ranker scores zero (accepted
/// through synonym recall alone) follow the scored ones in popularity order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceFuser;

impl Fuser for RelevanceFuser {
    fn fuse(&self, batches: Vec<SourceBatch>, query: &str, ranker: &Ranker) -> Vec<ScoredResult> {
        if query.trim().is_empty() {
            return PopularityFuser.fuse(batches, query, ranker);
        }
        let mut all: Vec<Arc<ComponentRecord>> =
            batches.into_iter().flat_map(|b| b.components).collect();
        all.sort_by(|a, b| compare_popularity(a, b));

        let (mut scored, unscored): (Vec<ScoredResult>, Vec<ScoredResult>) = all
            .into_iter()
            .map(|c| ranker.score(query, c))
            .partition(|r| r.score > 0.0);
        scored.sort_by(compare_ranked);
        scored.extend(unscored);
        scored
    }

    fn name(&self) -> &str {
        "relevance"
    }
}

// ============================================================================
// Tests
// ============================================================================
