//! Per-source essentials and use-case suggestions
//!
//! Each source has a short list of component kinds its users reach for
//! first. A use case ("form", "navigation") adds the kinds that use case
//! needs. Sources without their own list fall back to the default
//! priorities.
//!
//! | Source | Confidence | Reason |
//! |--------|------------|--------|
//! | Source priorities | 0.8 | `FrameworkEssential { framework }` |
//! | Use-case members | 0.7 | `UseCase { use_case }` |

use crate::graph::{RecommendationGraph, RecommendationReason, RecommendedKeyword};
use std::collections::BTreeSet;
use tracing::debug;

/// Confidence of a source essential
pub const FRAMEWORK_CONFIDENCE: f64 = 0.8;

/// Confidence of a use-case suggestion
pub const USE_CASE_CONFIDENCE: f64 = 0.7;

/// Default number of framework suggestions
pub const DEFAULT_FRAMEWORK_LIMIT: usize = 12;

impl RecommendationGraph {
    /// Essential component keywords for a source
    ///
    /// Falls back to the default priorities for unlisted sources.
    pub fn framework_priorities(&self, framework: &str) -> &[String] {
        let framework = framework.trim().to_lowercase();
        self.framework_priorities
            .get(&framework)
            .map(Vec::as_slice)
            .unwrap_or(&self.default_priorities)
    }

    /// Component keywords a use case needs; empty for unknown use cases
    pub fn use_case_members(&self, use_case: &str) -> &[String] {
        self.use_cases
            .get(&use_case.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keywords to start with when building on one source
    ///
    /// The source's priorities come first, followed by the members of
    /// `use_case` when given. A keyword appears once, with its first reason.
    /// A blank framework yields an empty list.
    ///
    /// # Example
    ///
    /// ```
    /// use uiatlas_recommend::RecommendationGraph;
    ///
    /// let graph = RecommendationGraph::default();
    /// let recs = graph.recommend_for_framework("chakra", Some("form"), 12);
    /// assert_eq!(recs[1].keyword, "box");
    /// assert_eq!(recs.last().map(|r| r.keyword.as_str()), Some("checkbox"));
    /// ```
    pub fn recommend_for_framework(
        &self,
        framework: &str,
        use_case: Option<&str>,
        limit: usize,
    ) -> Vec<RecommendedKeyword> {
        let framework = framework.trim().to_lowercase();
        if framework.is_empty() || limit == 0 {
            return vec![];
        }

        let essentials = self.framework_priorities(&framework).iter().map(|k| {
            (
                k,
                FRAMEWORK_CONFIDENCE,
                RecommendationReason::FrameworkEssential {
                    framework: framework.clone(),
                },
            )
        });

        let use_case = use_case.map(|u| u.trim().to_lowercase());
        let needed = use_case.iter().flat_map(|u| {
            self.use_case_members(u).iter().map(move |k| {
                (
                    k,
                    USE_CASE_CONFIDENCE,
                    RecommendationReason::UseCase {
                        use_case: u.clone(),
                    },
                )
            })
        });

        let mut seen = BTreeSet::new();
        let recs: Vec<RecommendedKeyword> = essentials
            .chain(needed)
            .filter(|(k, _, _)| seen.insert(k.as_str()))
            .take(limit)
            .map(|(k, confidence, reason)| RecommendedKeyword {
                keyword: k.clone(),
                confidence,
                reason,
            })
            .collect();

        debug!(
            target: "uiatlas::recommend",
            framework = %framework,
            use_case = ?use_case,
            returned = recs.len(),
            "Framework essentials computed"
        );
        recs
    }
}
