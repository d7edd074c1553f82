//! Cross-source aggregation for UI Atlas
//!
//! This crate provides:
//! - Provider trait: the async contract every component source implements
//! - StaticProvider: an in-memory provider over records or a JSON catalog
//! - ProviderRegistry: providers keyed by id in registration order
//! - Fuser trait with PopularityFuser and RelevanceFuser merge orders
//! - Aggregator: concurrent fan-out with per-provider timeouts, failure
//!   isolation, filtering, merging and pagination
//!
//! # Usage
//!
//! ```ignore
//! use uiatlas_aggregator::{Aggregator, ProviderRegistry, StaticProvider};
//!
//! let registry = ProviderRegistry::new()
//!     .with_provider(Arc::new(StaticProvider::from_file(path)?));
//! let aggregator = Aggregator::new(registry, &AtlasConfig::default());
//! let page = aggregator.search(&SearchRequest::new("navbar")).await?;
//! ```

#![warn(clippy::all)]

pub mod aggregator;
pub mod fuser;
pub mod provider;
pub mod registry;

// Re-export commonly used types
pub use aggregator::Aggregator;
pub use fuser::{compare_popularity, fuser_for, Fuser, PopularityFuser, RelevanceFuser, SourceBatch};
pub use provider::{Provider, StaticProvider};
pub use registry::ProviderRegistry;

// The trait macro is re-exported so provider implementors need no extra dependency.
pub use async_trait::async_trait;
