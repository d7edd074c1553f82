//! Inverted index for candidate lookup and autocomplete
//!
//! This module provides:
//! - InvertedIndex: token → component-key postings, rebuilt on demand
//! - IndexSnapshot: one immutable, fully built generation of the index
//! - Version watermark incremented on every rebuild
//! - Autocomplete suggestions over names, tags and popular terms
//!
//! # Consistency
//!
//! A rebuild builds a complete new snapshot off to the side and then swaps
//! it in under a short write lock. Readers clone the current `Arc` and work
//! on it lock-free, so they may see a slightly stale index but never a
//! half-built one.
//!
//! The index is an explicit object. Callers that want one create it and pass
//! it to whatever rebuilds or reads it.

use crate::tokenizer::tokenize;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;
use uiatlas_core::{ComponentKey, ComponentRecord};

/// Default number of autocomplete suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Shortest partial input that produces suggestions
pub const MIN_SUGGEST_LEN: usize = 2;

// ============================================================================
// IndexSnapshot
// ============================================================================

/// One immutable generation of the index
#[derive(Debug, Default)]
pub struct IndexSnapshot {
    /// Token -> keys of components containing it
    postings: FxHashMap<String, BTreeSet<ComponentKey>>,
    /// Component names as written, for suggestions
    names: BTreeSet<String>,
    /// Lowercase tags, for suggestions
    tags: BTreeSet<String>,
    /// Components indexed
    components: usize,
    /// Watermark this snapshot was built at
    version: u64,
}

impl IndexSnapshot {
    fn build<'a, I>(components: I, version: u64) -> Self
    where
        I: IntoIterator<Item = &'a ComponentRecord>,
    {
        let mut snapshot = IndexSnapshot {
            version,
            ..IndexSnapshot::default()
        };

        for record in components {
            let key = record.key();
            for token in Self::tokens_for(record) {
                snapshot
                    .postings
                    .entry(token)
                    .or_default()
                    .insert(key.clone());
            }
            if !record.name.trim().is_empty() {
                snapshot.names.insert(record.name.clone());
            }
            snapshot
                .tags
                .extend(record.tags.iter().map(|t| t.to_lowercase()));
            snapshot.components += 1;
        }
        snapshot
    }

    fn tokens_for(record: &ComponentRecord) -> BTreeSet<String> {
        let mut tokens = tokenize(&record.name);
        for text in [&record.title, &record.description].into_iter().flatten() {
            tokens.extend(tokenize(text));
        }
        for tag in &record.tags {
            tokens.extend(tokenize(tag));
        }
        tokens.insert(record.source_id.to_lowercase());
        tokens.insert(record.category.as_str().to_string());
        tokens.retain(|t| !t.is_empty());
        tokens
    }

    /// Keys of components containing the token
    pub fn lookup(&self, token: &str) -> Option<&BTreeSet<ComponentKey>> {
        self.postings.get(&token.to_lowercase())
    }

    /// Number of indexed components
    pub fn len(&self) -> usize {
        self.components
    }

    /// Check if no components are indexed
    pub fn is_empty(&self) -> bool {
        self.components == 0
    }

    /// Number of distinct tokens
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Watermark this snapshot was built at
    pub fn version(&self) -> u64 {
        self.version
    }
}

// ============================================================================
// InvertedIndex
// ============================================================================

/// Inverted index over component records
///
/// # Thread Safety
///
/// `rebuild` and the read methods may be called concurrently from any
/// thread. Each read observes exactly one snapshot.
///
/// # Example
///
/// ```
/// use uiatlas_core::ComponentRecord;
/// use uiatlas_search::InvertedIndex;
///
/// let index = InvertedIndex::new();
/// let records = vec![ComponentRecord::new("shadcn", "navbar", "Navbar")];
/// index.rebuild(&records);
///
/// assert_eq!(index.lookup("nav").len(), 1);
/// assert_eq!(index.version(), 1);
/// ```
#[derive(Debug)]
pub struct InvertedIndex {
    /// Current snapshot
    snapshot: RwLock<Arc<IndexSnapshot>>,
    /// Version watermark
    version: AtomicU64,
    /// Autocomplete fallback terms
    popular_terms: Vec<String>,
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl InvertedIndex {
    /// Create an empty index at version 0
    pub fn new() -> Self {
        InvertedIndex {
            snapshot: RwLock::new(Arc::new(IndexSnapshot::default())),
            version: AtomicU64::new(0),
            popular_terms: vec![],
        }
    }

    /// Builder: set terms offered by `suggest` regardless of catalog content
    pub fn with_popular_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.popular_terms = terms.into_iter().map(|t| t.into().to_lowercase()).collect();
        self
    }

    // ========================================================================
    // Version Watermark
    // ========================================================================

    /// Get current version
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Check if index is at least at given version
    pub fn is_at_version(&self, min_version: u64) -> bool {
        self.version() >= min_version
    }

    // ========================================================================
    // Rebuild
    // ========================================================================

    /// Replace the index content with the given components
    ///
    /// Clears and repopulates in O(total tokens). Rebuilding twice from the
    /// same input yields identical postings. Returns the new version.
    pub fn rebuild<'a, I>(&self, components: I) -> u64
    where
        I: IntoIterator<Item = &'a ComponentRecord>,
    {
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
        let snapshot = Arc::new(IndexSnapshot::build(components, version));

        info!(
            target: "uiatlas::index",
            components = snapshot.len(),
            terms = snapshot.term_count(),
            version,
            "Rebuilt inverted index"
        );

        let mut current = self.snapshot.write();
        // Concurrent rebuilds may finish out of order; keep the newest.
        if current.version < version {
            *current = snapshot;
        }
        version
    }

    /// Consistent view of the current generation
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.snapshot.read().clone()
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Keys of components containing the token (empty if none)
    pub fn lookup(&self, token: &str) -> BTreeSet<ComponentKey> {
        self.snapshot()
            .lookup(token)
            .cloned()
            .unwrap_or_default()
    }

    /// Union of the postings for every token of the query
    pub fn candidates(&self, query: &str) -> BTreeSet<ComponentKey> {
        let snapshot = self.snapshot();
        let mut keys = BTreeSet::new();
        for token in tokenize(query) {
            if let Some(postings) = snapshot.lookup(&token) {
                keys.extend(postings.iter().cloned());
            }
        }
        keys
    }

    /// Autocomplete suggestions for partial input
    ///
    /// Offers component names, tags and popular terms that start with the
    /// partial text (case-insensitive). Input shorter than two characters
    /// yields nothing. Results are sorted and deduplicated.
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<String> {
        let partial = partial.trim().to_lowercase();
        if partial.chars().count() < MIN_SUGGEST_LEN || limit == 0 {
            return vec![];
        }

        let snapshot = self.snapshot();
        let mut suggestions: BTreeSet<String> = snapshot
            .names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&partial))
            .cloned()
            .collect();
        suggestions.extend(
            snapshot
                .tags
                .iter()
                .chain(self.popular_terms.iter())
                .filter(|term| term.starts_with(&partial))
                .cloned(),
        );

        suggestions.into_iter().take(limit).collect()
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of indexed components
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Check if no components are indexed
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Number of distinct tokens
    pub fn term_count(&self) -> usize {
        self.snapshot().term_count()
    }
}

// ============================================================================
// Tests
// ============================================================================
