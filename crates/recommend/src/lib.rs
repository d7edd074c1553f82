//! Recommendations for UI Atlas
//!
//! This crate provides:
//! - RecommendationGraph: static keyword adjacency loaded from configuration
//! - recommend_complementary: complements for an existing selection
//! - analyze_intent / recommend_for_query: suggestions from a query's
//!   page kind and component groups
//! - recommend_for_framework: a source's essentials plus use-case needs
//!
//! Recommendations work on component keywords ("form", "navbar"), not on
//! catalog records. Callers search for the suggested keywords to get
//! concrete components.
//!
//! # Usage
//!
//! ```ignore
//! use uiatlas_recommend::RecommendationGraph;
//!
//! let graph = RecommendationGraph::from_config(&config);
//! for rec in graph.recommend_complementary(&["input", "button"], 8) {
//!     println!("{} ({:.1})", rec.keyword, rec.confidence);
//! }
//! ```

#![warn(clippy::all)]

pub mod framework;
pub mod graph;
pub mod intent;

// Re-export commonly used types
pub use graph::{
    complement_confidence, RecommendationGraph, RecommendationReason, RecommendedKeyword,
    DEFAULT_COMPLEMENT_LIMIT,
};
pub use framework::{DEFAULT_FRAMEWORK_LIMIT, FRAMEWORK_CONFIDENCE, USE_CASE_CONFIDENCE};
pub use intent::{QueryIntent, DEFAULT_QUERY_LIMIT};
