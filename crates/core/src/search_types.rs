//! Core search types for cross-source retrieval
//!
//! This module defines the request/response types used by every search API:
//! - FilterSpec: optional AND-combined constraints
//! - SearchRequest: filters plus pagination and sort order
//! - ScoredResult: a component with its relevance score and classification
//! - SearchResponse: one page of results plus the full filtered total
//!
//! Enum-valued filter fields (category, framework, styling version) are kept
//! as strings. An unrecognised value is not a request error: it simply
//! rejects every candidate.

use crate::record::ComponentRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Score assigned to an exact name match
pub const EXACT_MATCH_SCORE: f64 = 100.0;

// ============================================================================
// FilterSpec
// ============================================================================

/// Caller-supplied constraints narrowing a search
///
/// All present fields combine with logical AND. The tag field is internally
/// OR: a candidate passes if it carries any of the listed tags.
///
/// # Examples
///
/// ```
/// use uiatlas_core::FilterSpec;
///
/// let filters = FilterSpec::new()
///     .with_query("cta")
///     .with_tags(["marketing", "landing"])
///     .free_only();
///
/// assert_eq!(filters.query.as_deref(), Some("cta"));
/// assert!(filters.free_only);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Only this provider
    pub source: Option<String>,
    /// Category wire name
    pub category: Option<String>,
    /// Match any of these tags
    pub tags: Vec<String>,
    /// Framework name that must be supported
    pub framework: Option<String>,
    /// Styling-system version
    pub styling_version: Option<String>,
    /// Exclude pro-only components
    pub free_only: bool,
    /// Free-text query
    pub query: Option<String>,
}

impl FilterSpec {
    /// Create an empty (match everything) filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: restrict to one provider
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder: set tags (match any)
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set framework
    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = Some(framework.into());
        self
    }

    /// Builder: set styling version
    pub fn with_styling_version(mut self, version: impl Into<String>) -> Self {
        self.styling_version = Some(version.into());
        self
    }

    /// Builder: exclude pro-only components
    pub fn free_only(mut self) -> Self {
        self.free_only = true;
        self
    }

    /// Builder: set free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// The query, trimmed, if it carries any text
    pub fn text_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Copy of these filters without the free-text query
    pub fn without_query(&self) -> Self {
        FilterSpec {
            query: None,
            ..self.clone()
        }
    }
}

// ============================================================================
// SearchRequest
// ============================================================================

/// Ordering of an aggregated result page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// `(-popularity_score, name)` across all sources (default)
    #[default]
    Popularity,
    /// Relevance score from the ranker; falls back to popularity without a query
    Relevance,
}

/// Request for an aggregated search
///
/// Default values:
/// - limit: 50
/// - offset: 0
/// - sort: SortOrder::Popularity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Filters, including the optional free-text query
    pub filters: FilterSpec,
    /// Page size
    pub limit: usize,
    /// Items to skip
    pub offset: usize,
    /// Page ordering
    pub sort: SortOrder,
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest {
            filters: FilterSpec::default(),
            limit: 50,
            offset: 0,
            sort: SortOrder::default(),
        }
    }
}

impl SearchRequest {
    /// Create a request for a free-text query
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            filters: FilterSpec::new().with_query(query),
            ..Self::default()
        }
    }

    /// Create a request from filters alone
    pub fn with_filters(filters: FilterSpec) -> Self {
        SearchRequest {
            filters,
            ..Self::default()
        }
    }

    /// Builder: set page size
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Builder: set offset
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Builder: set sort order
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

// ============================================================================
// ScoredResult
// ============================================================================

/// How a component matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Name equals the query
    Exact,
    /// Some field scored above 0.8
    Strong,
    /// Some field scored above 0.5
    Good,
    /// Any other positive match
    Partial,
    /// No text match (no query, or synonym-only recall)
    None,
}

/// Fields that contribute to relevance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Name,
    Title,
    Description,
    Tags,
}

impl MatchedField {
    /// Scored fields, in weight order
    pub const ALL: [MatchedField; 4] = [
        MatchedField::Name,
        MatchedField::Title,
        MatchedField::Description,
        MatchedField::Tags,
    ];
}

/// A component with its relevance for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    /// Shared component snapshot
    pub component: Arc<ComponentRecord>,
    /// Relevance score, `>= 0`, `EXACT_MATCH_SCORE` for exact name matches
    pub score: f64,
    /// Match classification
    pub kind: MatchKind,
    /// Fields that matched
    pub matched_fields: Vec<MatchedField>,
}

impl ScoredResult {
    /// A result that carries no relevance information
    pub fn unscored(component: Arc<ComponentRecord>) -> Self {
        ScoredResult {
            component,
            score: 0.0,
            kind: MatchKind::None,
            matched_fields: vec![],
        }
    }

    /// Whether this was an exact name match
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}

// ============================================================================
// SearchResponse
// ============================================================================

/// One page of aggregated results
///
/// `total` counts the full filtered set across every provider that
/// responded, so `total >= results.len()` always holds. Providers that
/// failed or timed out are listed in `failed_sources`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Page of results
    pub results: Vec<ScoredResult>,
    /// Size of the full filtered set
    pub total: usize,
    /// Requested page size
    pub limit: usize,
    /// Requested offset
    pub offset: usize,
    /// Providers excluded from this response
    pub failed_sources: Vec<String>,
}

impl SearchResponse {
    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of results on this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if more results exist after this page
    pub fn has_more(&self) -> bool {
        self.offset + self.results.len() < self.total
    }

    /// True if at least one provider was excluded
    pub fn is_degraded(&self) -> bool {
        !self.failed_sources.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
