//! Complementary-component recommendations
//!
//! This module provides:
//! - RecommendationGraph: keyword adjacency plus page and category tables
//! - RecommendedKeyword / RecommendationReason: typed suggestions
//! - recommend_complementary: complements for an existing selection
//!
//! A keyword resolves to the first relationship key it contains, longest key
//! first and equal lengths alphabetically, so "icon-button" resolves to
//! "button" and "navbar-sticky" to "navbar".

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use uiatlas_core::{AtlasConfig, MatchTable};

/// Confidence of a complement no selected item relates to
pub const BASE_CONFIDENCE: f64 = 0.6;

/// Confidence added per related selected item
pub const CONFIDENCE_STEP: f64 = 0.1;

/// Upper bound on the related-count boost
pub const MAX_CONFIDENCE_BOOST: f64 = 0.3;

/// Default number of complements returned
pub const DEFAULT_COMPLEMENT_LIMIT: usize = 8;

// ============================================================================
// RecommendedKeyword
// ============================================================================

/// Why a keyword was recommended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RecommendationReason {
    /// Complements these selected keywords
    Complements {
        /// Selected keywords the candidate relates to
        selected: Vec<String>,
    },
    /// Part of a page section's usual components
    PagePattern {
        /// Page kind, e.g. "landing"
        page: String,
        /// Section within the page, e.g. "hero"
        section: String,
    },
    /// Member of a component group named in the query
    Category {
        /// Group name, e.g. "navigation"
        category: String,
    },
    /// One of a source's essential components
    FrameworkEssential {
        /// Source id, e.g. "shadcn"
        framework: String,
    },
    /// Needed by the requested use case
    UseCase {
        /// Use case, e.g. "form"
        use_case: String,
    },
}

/// A suggested component keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedKeyword {
    /// Lowercase component keyword
    pub keyword: String,
    /// Confidence in `[0.6, 0.9]`
    pub confidence: f64,
    /// Why it was suggested
    pub reason: RecommendationReason,
}

/// Confidence for a candidate that `related` selected items relate to
///
/// `0.6 + min(0.3, 0.1 * related)`, rounded to two decimals so equal counts
/// compare equal.
pub fn complement_confidence(related: usize) -> f64 {
    let boost = (CONFIDENCE_STEP * related as f64).min(MAX_CONFIDENCE_BOOST);
    ((BASE_CONFIDENCE + boost) * 100.0).round() / 100.0
}

// ============================================================================
// RecommendationGraph
// ============================================================================

/// Static recommendation tables
///
/// Built once from configuration and read-only afterwards.
#[derive(Debug, Clone)]
pub struct RecommendationGraph {
    relationships: MatchTable<Vec<String>>,
    pub(crate) page_keywords: BTreeMap<String, Vec<String>>,
    pub(crate) page_patterns: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    pub(crate) categories: BTreeMap<String, Vec<String>>,
    pub(crate) framework_priorities: BTreeMap<String, Vec<String>>,
    pub(crate) default_priorities: Vec<String>,
    pub(crate) use_cases: BTreeMap<String, Vec<String>>,
}

impl Default for RecommendationGraph {
    fn default() -> Self {
        Self::from_config(&AtlasConfig::default())
    }
}

impl RecommendationGraph {
    /// Build from the recommendation tables of a config
    pub fn from_config(config: &AtlasConfig) -> Self {
        RecommendationGraph {
            relationships: config.relationship_table(),
            page_keywords: lowercase_lists(&config.page_keywords),
            page_patterns: config
                .page_patterns
                .iter()
                .map(|(page, sections)| (page.to_lowercase(), lowercase_lists(sections)))
                .collect(),
            categories: lowercase_lists(&config.component_categories),
            framework_priorities: lowercase_lists(&config.framework_priorities),
            default_priorities: config
                .default_framework_priorities
                .iter()
                .map(|s| s.trim().to_lowercase())
                .collect(),
            use_cases: lowercase_lists(&config.use_cases),
        }
    }

    /// Number of relationship keys
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    /// True if the graph has no relationships
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    /// Complements of a keyword, in table order
    ///
    /// Empty if the keyword contains no relationship key.
    pub fn complements_of(&self, keyword: &str) -> &[String] {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return &[];
        }
        self.relationships
            .first_match(&keyword)
            .map(|(_, complements)| complements.as_slice())
            .unwrap_or(&[])
    }

    /// Keywords that complement an existing selection
    ///
    /// Complements of every selected keyword are unioned and the selection
    /// itself removed. A candidate's confidence grows with the number of
    /// selected keywords whose complements relate to it. Results are ordered
    /// by confidence descending, then keyword.
    ///
    /// An empty selection yields an empty list.
    ///
    /// # Example
    ///
    /// ```
    /// use uiatlas_recommend::RecommendationGraph;
    ///
    /// let graph = RecommendationGraph::default();
    /// let recs = graph.recommend_complementary(&["Input", "Button"], 8);
    /// assert_eq!(recs[0].keyword, "form");
    /// assert!(recs[0].confidence > 0.6);
    /// ```
    pub fn recommend_complementary<S: AsRef<str>>(
        &self,
        selected: &[S],
        limit: usize,
    ) -> Vec<RecommendedKeyword> {
        let selected: BTreeSet<String> = selected
            .iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if selected.is_empty() || limit == 0 {
            return vec![];
        }

        // candidate -> selected keywords relating to it
        let mut related: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for keyword in &selected {
            for complement in self.complements_of(keyword) {
                if !selected.contains(complement) {
                    related.entry(complement.clone()).or_default();
                }
            }
        }
        for (candidate, sources) in related.iter_mut() {
            sources.extend(
                selected
                    .iter()
                    .filter(|s| {
                        self.complements_of(s)
                            .iter()
                            .any(|c| candidate.contains(c.as_str()))
                    })
                    .cloned(),
            );
        }

        let mut recs: Vec<RecommendedKeyword> = related
            .into_iter()
            .map(|(keyword, sources)| RecommendedKeyword {
                keyword,
                confidence: complement_confidence(sources.len()),
                reason: RecommendationReason::Complements { selected: sources },
            })
            .collect();
        recs.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| a.keyword.cmp(&b.keyword))
        });
        recs.truncate(limit);

        debug!(
            target: "uiatlas::recommend",
            selected = selected.len(),
            returned = recs.len(),
            "Complements computed"
        );
        recs
    }
}

fn lowercase_lists(map: &BTreeMap<String, Vec<String>>) -> BTreeMap<String, Vec<String>> {
    map.iter()
        .map(|(k, v)| {
            (
                k.trim().to_lowercase(),
                v.iter().map(|s| s.trim().to_lowercase()).collect(),
            )
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
