//! Search infrastructure for UI Atlas
//!
//! This crate provides:
//! - Tokenizer with prefix expansion
//! - InvertedIndex for candidate lookup and autocomplete, rebuilt on demand
//! - FieldScorer trait and the containment-first KeywordFieldScorer
//! - Ranker: weighted multi-field relevance with popularity and source boosts
//! - FilterPredicate: structural filters plus synonym-expanded text recall
//!
//! Everything here is synchronous and operates on in-memory records.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use uiatlas_core::{ComponentRecord, FilterSpec};
//! use uiatlas_search::Ranker;
//!
//! let catalog = vec![Arc::new(ComponentRecord::new("shadcn", "button", "Button"))];
//! let results = Ranker::default().rank("button", &catalog, &FilterSpec::default());
//! assert!(results[0].is_exact());
//! ```

#![warn(clippy::all)]

pub mod filter;
pub mod index;
pub mod ranker;
pub mod scorer;
pub mod tokenizer;

// Re-export commonly used types
pub use filter::{FilterPredicate, SynonymTable};
pub use index::{IndexSnapshot, InvertedIndex, DEFAULT_SUGGESTION_LIMIT};
pub use ranker::{compare_ranked, Ranker};
pub use scorer::{FieldScorer, KeywordFieldScorer, QueryTerms};
pub use tokenizer::{tokenize, words};
