//! Core types for UI Atlas
//!
//! This crate defines the foundational types used throughout the system:
//! - ComponentRecord / ComponentKey: provider-supplied component metadata
//! - Category, Framework, StylingVersion, License: record vocabularies
//! - FilterSpec, SearchRequest, SearchResponse, ScoredResult: search surface
//! - AtlasConfig: weights, synonyms, relationships and limits from TOML
//! - MatchTable: first-match keyword lookup with a fixed priority
//! - Error: error type hierarchy

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod record;
pub mod search_types;
pub mod table;

pub use config::{AggregatorConfig, AtlasConfig, FieldWeights, CONFIG_FILE_NAME, CONFIG_VERSION};
pub use error::{Error, Result};
pub use record::{
    Category, ComponentKey, ComponentRecord, Framework, FrameworkSupport, License, LicenseKind,
    Styling, StylingVersion,
};
pub use search_types::{
    FilterSpec, MatchKind, MatchedField, ScoredResult, SearchRequest, SearchResponse, SortOrder,
    EXACT_MATCH_SCORE,
};
pub use table::MatchTable;
