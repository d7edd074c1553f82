//! Field scoring for keyword relevance
//!
//! This module provides:
//! - QueryTerms: the normalized query and its unique words, computed once
//! - FieldScorer trait for pluggable per-field scoring
//! - KeywordFieldScorer default implementation
//!
//! Field scores are always in `[0, 1]`. Any form of containment (exact,
//! starts-with, substring) beats the best possible word overlap, so a
//! precise match is never outranked by a field that merely shares words.

use crate::tokenizer::{tokenize, words};
use std::collections::BTreeSet;

/// Field equals the query
pub const EXACT_FIELD_SCORE: f64 = 1.0;
/// Field starts with the query
pub const PREFIX_FIELD_SCORE: f64 = 0.9;
/// Field contains the query
pub const CONTAINS_FIELD_SCORE: f64 = 0.7;
/// Upper bound for word-overlap scores
pub const MAX_OVERLAP_SCORE: f64 = 0.6;

// ============================================================================
// QueryTerms
// ============================================================================

/// A query prepared for scoring
///
/// Built once per ranking pass and shared across every candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerms {
    /// Lowercase, trimmed query text
    pub text: String,
    /// Unique query words in order of appearance
    pub words: Vec<String>,
}

impl QueryTerms {
    /// Normalize a raw query
    pub fn new(query: &str) -> Self {
        let text = query.trim().to_lowercase();
        let mut seen = BTreeSet::new();
        let words = words(&text)
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .collect();
        QueryTerms { text, words }
    }

    /// True if the query carries no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ============================================================================
// FieldScorer Trait
// ============================================================================

/// Pluggable per-field scoring interface
///
/// # Thread Safety
///
/// Scorers must be Send + Sync; one instance serves concurrent searches.
pub trait FieldScorer: Send + Sync {
    /// Score one field value against the query, in `[0, 1]`
    ///
    /// An empty field scores 0.0.
    fn score(&self, field: &str, query: &QueryTerms) -> f64;

    /// Score a tag set against the query, in `[0, 1]`
    ///
    /// A tag equal to the query scores 1.0; otherwise the best single-tag
    /// field score wins.
    fn score_tags(&self, tags: &BTreeSet<String>, query: &QueryTerms) -> f64 {
        if tags.iter().any(|t| t.to_lowercase() == query.text) {
            return EXACT_FIELD_SCORE;
        }
        tags.iter()
            .map(|t| self.score(t, query))
            .fold(0.0, f64::max)
    }

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// KeywordFieldScorer
// ============================================================================

/// Containment-first keyword scorer
///
/// Tiers, strongest first:
/// 1. exact case-insensitive match → 1.0
/// 2. field starts with the query → 0.9
/// 3. field contains the query → 0.7
/// 4. share of query words found among the field's tokens, capped at 0.6
/// 5. nothing shared → 0.0
///
/// Field tokens include prefix fragments, so the query word "butt"
/// overlaps with a field containing "button".
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordFieldScorer;

impl KeywordFieldScorer {
    /// Create a new scorer
    pub fn new() -> Self {
        KeywordFieldScorer
    }
}

impl FieldScorer for KeywordFieldScorer {
    fn score(&self, field: &str, query: &QueryTerms) -> f64 {
        if field.is_empty() || query.is_empty() {
            return 0.0;
        }

        let field = field.to_lowercase();
        if field == query.text {
            return EXACT_FIELD_SCORE;
        }
        if field.starts_with(&query.text) {
            return PREFIX_FIELD_SCORE;
        }
        if field.contains(&query.text) {
            return CONTAINS_FIELD_SCORE;
        }

        if query.words.is_empty() {
            return 0.0;
        }
        let field_tokens = tokenize(&field);
        let matched = query
            .words
            .iter()
            .filter(|w| field_tokens.contains(*w))
            .count();
        if matched == 0 {
            return 0.0;
        }
        (matched as f64 / query.words.len() as f64).min(MAX_OVERLAP_SCORE)
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

// ============================================================================
// Tests
// ============================================================================
