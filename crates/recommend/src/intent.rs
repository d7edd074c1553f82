//! Query intent analysis
//!
//! A query such as "landing page with hero and pricing cards" reveals what
//! kind of page is being built and which component groups the user cares
//! about. Both come from plain substring checks against the page-keyword and
//! component-category tables.
//!
//! | Source | Confidence | Reason |
//! |--------|------------|--------|
//! | Page pattern sections | 0.7 | `PagePattern { page, section }` |
//! | Component groups named in the query | 0.6 | `Category { category }` |

use crate::graph::{RecommendationGraph, RecommendationReason, RecommendedKeyword};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Confidence of a page-pattern suggestion
pub const PAGE_PATTERN_CONFIDENCE: f64 = 0.7;

/// Confidence of a component-group suggestion
pub const CATEGORY_CONFIDENCE: f64 = 0.6;

/// Default number of query suggestions
pub const DEFAULT_QUERY_LIMIT: usize = 10;

const PAGE_SECTION_MEMBERS: usize = 2;
const PAGE_PATTERN_LIMIT: usize = 4;
const CATEGORY_GROUPS: usize = 2;
const CATEGORY_MEMBERS: usize = 3;

/// What a query says about the page being built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryIntent {
    /// Page kind, if any page keyword occurs in the query
    pub page_type: Option<String>,
    /// Component groups with a member occurring in the query, alphabetical
    pub component_types: Vec<String>,
}

impl QueryIntent {
    /// True if nothing was detected
    pub fn is_empty(&self) -> bool {
        self.page_type.is_none() && self.component_types.is_empty()
    }
}

impl RecommendationGraph {
    /// Detect page kind and component groups in a query
    ///
    /// Page kinds are tried alphabetically; the first with a keyword in the
    /// query wins.
    pub fn analyze_intent(&self, query: &str) -> QueryIntent {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return QueryIntent::default();
        }

        let page_type = self
            .page_keywords
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| query.contains(k.as_str())))
            .map(|(page, _)| page.clone());

        let component_types = self
            .categories
            .iter()
            .filter(|(_, members)| members.iter().any(|m| query.contains(m.as_str())))
            .map(|(category, _)| category.clone())
            .collect();

        QueryIntent {
            page_type,
            component_types,
        }
    }

    /// Component keywords suggested by a query's intent
    ///
    /// The first two members of every section of the detected page kind come
    /// first (at most four), then the first three members of the first two
    /// detected groups. A keyword appears once, with its first reason.
    pub fn recommend_for_query(&self, query: &str, limit: usize) -> Vec<RecommendedKeyword> {
        let intent = self.analyze_intent(query);
        let mut seen = BTreeSet::new();
        let mut recs = Vec::new();

        if let Some(page) = &intent.page_type {
            let sections = self.page_patterns.get(page).into_iter().flatten();
            let from_page = sections
                .flat_map(|(section, members)| {
                    members.iter().take(PAGE_SECTION_MEMBERS).map(move |m| (section, m))
                })
                .filter(|(_, m)| seen.insert(m.to_string()))
                .take(PAGE_PATTERN_LIMIT)
                .map(|(section, m)| RecommendedKeyword {
                    keyword: m.clone(),
                    confidence: PAGE_PATTERN_CONFIDENCE,
                    reason: RecommendationReason::PagePattern {
                        page: page.clone(),
                        section: section.clone(),
                    },
                })
                .collect::<Vec<_>>();
            recs.extend(from_page);
        }

        for category in intent.component_types.iter().take(CATEGORY_GROUPS) {
            let members = self.categories.get(category).into_iter().flatten();
            for member in members.take(CATEGORY_MEMBERS) {
                if seen.insert(member.clone()) {
                    recs.push(RecommendedKeyword {
                        keyword: member.clone(),
                        confidence: CATEGORY_CONFIDENCE,
                        reason: RecommendationReason::Category {
                            category: category.clone(),
                        },
                    });
                }
            }
        }

        recs.truncate(limit);
        recs
    }
}
