//! Relevance ranking across component fields
//!
//! This module provides:
//! - Ranker: scores candidates field by field, applies popularity and
//!   source preference boosts, classifies and sorts
//! - compare_ranked: the deterministic result ordering
//!
//! # Scoring
//!
//! A name equal to the query short-circuits to `EXACT_MATCH_SCORE`. Any
//! other candidate gets `Σ field_score × field_weight` over name, title,
//! description and tags. Candidates summing to zero are dropped. The sum is
//! then multiplied by the popularity boost of the first popularity key found
//! in the name (`1 + (w - 1) × 0.1`) and by the source's preference weight.

use crate::filter::{FilterPredicate, SynonymTable};
use crate::scorer::{FieldScorer, KeywordFieldScorer, QueryTerms};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use uiatlas_core::{
    AtlasConfig, ComponentRecord, FieldWeights, FilterSpec, MatchKind, MatchTable, MatchedField,
    ScoredResult, EXACT_MATCH_SCORE,
};

/// Weighted field score above which a match is strong
pub const STRONG_THRESHOLD: f64 = 0.8;
/// Weighted field score above which a match is good
pub const GOOD_THRESHOLD: f64 = 0.5;
/// Share of a popularity weight's excess applied as boost
pub const POPULARITY_SCALE: f64 = 0.1;

/// Result ordering: score descending, then name, source and id ascending
///
/// The secondary keys make equal scores order identically regardless of
/// the order providers answered in.
pub fn compare_ranked(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| {
            a.component
                .name
                .to_lowercase()
                .cmp(&b.component.name.to_lowercase())
        })
        .then_with(|| a.component.source_id.cmp(&b.component.source_id))
        .then_with(|| a.component.id.cmp(&b.component.id))
}

// ============================================================================
// Ranker
// ============================================================================

/// Multi-field relevance ranker
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use uiatlas_core::{ComponentRecord, FilterSpec, MatchKind};
/// use uiatlas_search::Ranker;
///
/// let ranker = Ranker::default();
/// let catalog: Vec<_> = ["Button", "IconButton", "Tooltip"]
///     .iter()
///     .map(|name| Arc::new(ComponentRecord::new("demo", name.to_lowercase(), *name)))
///     .collect();
///
/// let results = ranker.rank("button", &catalog, &FilterSpec::default());
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].kind, MatchKind::Exact);
/// ```
#[derive(Clone)]
pub struct Ranker {
    scorer: Arc<dyn FieldScorer>,
    weights: FieldWeights,
    popularity: MatchTable<f64>,
    source_weights: BTreeMap<String, f64>,
    synonyms: SynonymTable,
}

impl std::fmt::Debug for Ranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ranker")
            .field("scorer", &self.scorer.name())
            .field("weights", &self.weights)
            .field("popularity", &self.popularity.len())
            .field("source_weights", &self.source_weights)
            .finish()
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::from_config(&AtlasConfig::default())
    }
}

impl Ranker {
    /// Ranker using the tables of a config and the keyword scorer
    pub fn from_config(config: &AtlasConfig) -> Self {
        Ranker {
            scorer: Arc::new(KeywordFieldScorer),
            weights: config.weights,
            popularity: config.popularity_table(),
            source_weights: config.source_weights.clone(),
            synonyms: SynonymTable::from_config(config),
        }
    }

    /// Builder: replace the field scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn FieldScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Builder: replace the field weights
    pub fn with_weights(mut self, weights: FieldWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Synonym table shared with filter compilation
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Rank candidates for a query
    ///
    /// Candidates failing the structural filters are skipped; the free-text
    /// query is scored here, never recall-filtered. Zero-score candidates
    /// are dropped. A blank query ranks nothing.
    pub fn rank(
        &self,
        query: &str,
        candidates: &[Arc<ComponentRecord>],
        filters: &FilterSpec,
    ) -> Vec<ScoredResult> {
        let terms = QueryTerms::new(query);
        if terms.is_empty() {
            return vec![];
        }

        let predicate = FilterPredicate::compile(filters, &self.synonyms);
        if predicate.is_unsatisfiable() {
            return vec![];
        }

        let mut results: Vec<ScoredResult> = candidates
            .iter()
            .filter(|c| predicate.matches_structure(c))
            .map(|c| self.score_terms(&terms, Arc::clone(c)))
            .filter(|r| r.score > 0.0)
            .collect();

        results.sort_by(compare_ranked);
        results
    }

    /// Score one record; unmatched records come back with score 0.0
    pub fn score(&self, query: &str, record: Arc<ComponentRecord>) -> ScoredResult {
        self.score_terms(&QueryTerms::new(query), record)
    }

    /// Records most similar to `component`, excluding itself
    ///
    /// Uses the component's name and category keyword as the query.
    pub fn similar_to(
        &self,
        component: &ComponentRecord,
        candidates: &[Arc<ComponentRecord>],
        limit: usize,
    ) -> Vec<ScoredResult> {
        if component.name.trim().is_empty() {
            return vec![];
        }
        let query = format!("{} {}", component.name, component.category.as_str());
        let key = component.key();
        let others: Vec<Arc<ComponentRecord>> = candidates
            .iter()
            .filter(|c| c.source_id != key.source_id || c.id != key.id)
            .cloned()
            .collect();

        let mut results = self.rank(&query, &others, &FilterSpec::default());
        results.truncate(limit);
        results
    }

    /// Multiplier from the popularity table for a component name
    pub fn popularity_boost(&self, name: &str) -> f64 {
        self.popularity
            .first_match(&name.to_lowercase())
            .map(|(_, w)| 1.0 + (w - 1.0) * POPULARITY_SCALE)
            .unwrap_or(1.0)
    }

    /// Preference multiplier for a source
    pub fn source_weight(&self, source_id: &str) -> f64 {
        self.source_weights.get(source_id).copied().unwrap_or(1.0)
    }

    fn score_terms(&self, terms: &QueryTerms, record: Arc<ComponentRecord>) -> ScoredResult {
        if terms.is_empty() {
            return ScoredResult::unscored(record);
        }

        if record.name.trim().to_lowercase() == terms.text {
            return ScoredResult {
                component: record,
                score: EXACT_MATCH_SCORE,
                kind: MatchKind::Exact,
                matched_fields: vec![MatchedField::Name],
            };
        }

        let mut matched_fields = Vec::new();
        let mut weighted = Vec::new();
        for field in MatchedField::ALL {
            let (raw, weight) = match field {
                MatchedField::Name => (self.scorer.score(&record.name, terms), self.weights.name),
                MatchedField::Title => (
                    record
                        .title
                        .as_deref()
                        .map_or(0.0, |t| self.scorer.score(t, terms)),
                    self.weights.title,
                ),
                MatchedField::Description => (
                    record
                        .description
                        .as_deref()
                        .map_or(0.0, |d| self.scorer.score(d, terms)),
                    self.weights.description,
                ),
                MatchedField::Tags => (
                    self.scorer.score_tags(&record.tags, terms),
                    self.weights.tags,
                ),
            };
            if raw > 0.0 {
                matched_fields.push(field);
                weighted.push(raw * weight);
            }
        }

        let sum: f64 = weighted.iter().sum();
        if sum <= 0.0 {
            return ScoredResult::unscored(record);
        }

        let kind = if weighted.iter().any(|s| *s > STRONG_THRESHOLD) {
            MatchKind::Strong
        } else if weighted.iter().any(|s| *s > GOOD_THRESHOLD) {
            MatchKind::Good
        } else {
            MatchKind::Partial
        };

        let score =
            sum * self.popularity_boost(&record.name) * self.source_weight(&record.source_id);

        ScoredResult {
            component: record,
            score,
            kind,
            matched_fields,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uiatlas_core::Category;

    fn rec(source: &str, name: &str) -> Arc<ComponentRecord> {
        Arc::new(ComponentRecord::new(
            source,
            name.to_lowercase().replace(' ', "-"),
            name,
        ))
    }

    fn names(results: &[ScoredResult]) -> Vec<&str> {
        results.iter().map(|r| r.component.name.as_str()).collect()
    }

    #[test]
    fn test_exact_match_first() {
        let ranker = Ranker::default();
        let catalog = vec![rec("s", "ButtonGroup"), rec("s", "IconButton"), rec("s", "Button")];

        let results = ranker.rank("button", &catalog, &FilterSpec::default());
        assert_eq!(names(&results), vec!["Button", "ButtonGroup", "IconButton"]);
        assert_eq!(results[0].score, EXACT_MATCH_SCORE);
        assert!(results[0].is_exact());
        assert_eq!(results[0].matched_fields, vec![MatchedField::Name]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_prefix_outranks_containment() {
        let ranker = Ranker::default();
        let group = ranker.score("button", rec("s", "ButtonGroup"));
        let icon = ranker.score("button", rec("s", "IconButton"));
        // 0.9 × 3.0 × 1.4 vs 0.7 × 3.0 × 1.4
        assert!((group.score - 3.78).abs() < 1e-9);
        assert!((icon.score - 2.94).abs() < 1e-9);
        assert_eq!(group.kind, MatchKind::Strong);
    }

    #[test]
    fn test_zero_score_dropped() {
        let ranker = Ranker::default();
        let results = ranker.rank("carousel", &[rec("s", "Button")], &FilterSpec::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_blank_query_ranks_nothing() {
        let ranker = Ranker::default();
        assert!(ranker.rank("  ", &[rec("s", "Button")], &FilterSpec::default()).is_empty());
        assert_eq!(ranker.score("", rec("s", "Button")).kind, MatchKind::None);
    }

    #[test]
    fn test_structural_filters_applied() {
        let ranker = Ranker::default();
        let catalog = vec![rec("a", "Button"), rec("b", "Button")];
        let results = ranker.rank("button", &catalog, &FilterSpec::new().with_source("b"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].component.source_id, "b");

        let none = ranker.rank("button", &catalog, &FilterSpec::new().with_framework("qwik"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_query_filter_not_applied_by_rank() {
        let ranker = Ranker::default();
        let results = ranker.rank(
            "button",
            &[rec("s", "Button")],
            &FilterSpec::new().with_query("unrelated"),
        );
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_fields_and_classification() {
        let ranker = Ranker::default();
        let record = Arc::new(
            ComponentRecord::new("s", "hero", "Hero")
                .with_description("Landing section with a call to action")
                .with_tags(["marketing"]),
        );
        let result = ranker.score("call to action", record);
        assert_eq!(result.matched_fields, vec![MatchedField::Description]);
        // 0.7 × 2.0 = 1.4 > 0.8
        assert_eq!(result.kind, MatchKind::Strong);
        assert!((result.score - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_partial_classification() {
        let ranker = Ranker::default().with_weights(FieldWeights {
            name: 0.5,
            title: 0.5,
            description: 0.5,
            tags: 0.5,
        });
        let result = ranker.score("modal dialog", rec("s", "Dialog"));
        // overlap 0.5 × 0.5 = 0.25
        assert_eq!(result.kind, MatchKind::Partial);
    }

    #[test]
    fn test_popularity_boost() {
        let ranker = Ranker::default();
        assert!((ranker.popularity_boost("Primary Button") - 1.4).abs() < 1e-9);
        assert!((ranker.popularity_boost("Navbar") - 1.28).abs() < 1e-9);
        assert_eq!(ranker.popularity_boost("Marquee"), 1.0);
    }

    #[test]
    fn test_popularity_boost_follows_table() {
        // weights of at most 2.0 keep the boost within +10%
        let mut config = AtlasConfig::empty();
        config.popularity =
            BTreeMap::from([("button".to_string(), 2.0), ("card".to_string(), 1.5)]);
        let ranker = Ranker::from_config(&config);
        assert!((ranker.popularity_boost("Button") - 1.1).abs() < 1e-9);
        assert!((ranker.popularity_boost("Card") - 1.05).abs() < 1e-9);
        assert_eq!(ranker.popularity_boost("Input"), 1.0);
    }

    #[test]
    fn test_source_weight_applied() {
        let ranker = Ranker::default();
        let plain = ranker.score("hero banner", rec("hyperui", "Hero Banner Dark"));
        let preferred = ranker.score("hero banner", rec("material", "Hero Banner Dark"));
        assert!((preferred.score / plain.score - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let ranker = Ranker::default();
        let a = rec("zeta", "Alert Box");
        let b = rec("alpha", "Alert Box");
        let c = Arc::new(ComponentRecord::new("alpha", "alert-box-2", "alert box"));

        let forward = ranker.rank("alert", &[a.clone(), b.clone(), c.clone()], &FilterSpec::default());
        let backward = ranker.rank("alert", &[c, b, a], &FilterSpec::default());
        let keys = |rs: &[ScoredResult]| -> Vec<String> {
            rs.iter().map(|r| r.component.key().to_string()).collect()
        };
        assert_eq!(keys(&forward), keys(&backward));
        assert_eq!(forward[2].component.source_id, "zeta");
    }

    #[test]
    fn test_similar_to_excludes_self() {
        let ranker = Ranker::default();
        let card = Arc::new(
            ComponentRecord::new("s", "card", "Card").with_category(Category::Cards),
        );
        let catalog = vec![
            Arc::clone(&card),
            Arc::new(ComponentRecord::new("s", "pricing-card", "Pricing Card")),
            Arc::new(ComponentRecord::new("t", "card", "Card")),
            rec("s", "Tooltip"),
        ];

        let similar = ranker.similar_to(&card, &catalog, 5);
        assert!(similar.iter().all(|r| r.component.key() != card.key()));
        assert_eq!(similar.len(), 2);
        assert_eq!(ranker.similar_to(&card, &catalog, 1).len(), 1);
    }

    proptest! {
        #[test]
        fn test_name_query_scores_maximum(name in "[A-Za-z][A-Za-z ]{0,15}", other in "[A-Za-z ]{1,15}") {
            let ranker = Ranker::default();
            let target = rec("s", &name);
            let exact = ranker.score(&name, Arc::clone(&target));
            let rival = ranker.score(&name, rec("s", &other));
            prop_assert_eq!(exact.score, EXACT_MATCH_SCORE);
            prop_assert!(rival.score <= EXACT_MATCH_SCORE);
        }

        #[test]
        fn test_ranking_is_deterministic(names in proptest::collection::vec("[a-c]{1,4}( [a-c]{1,4})?", 0..12), query in "[a-c]{1,3}") {
            let ranker = Ranker::default();
            let catalog: Vec<_> = names
                .iter()
                .enumerate()
                .map(|(i, n)| Arc::new(ComponentRecord::new("s", i.to_string(), n.clone())))
                .collect();
            let first = ranker.rank(&query, &catalog, &FilterSpec::default());
            let mut reversed = catalog.clone();
            reversed.reverse();
            let second = ranker.rank(&query, &reversed, &FilterSpec::default());
            prop_assert_eq!(first, second);
        }
    }
}
