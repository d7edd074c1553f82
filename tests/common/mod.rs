//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use std::sync::Arc;
pub use uiatlas::*;

// ============================================================================
// Providers
// ============================================================================

/// Provider whose every call fails
pub struct FailingProvider {
    pub id: String,
}

impl FailingProvider {
    pub fn new(id: &str) -> Arc<dyn Provider> {
        Arc::new(FailingProvider { id: id.to_string() })
    }
}

#[async_trait]
impl Provider for FailingProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn list_components(
        &self,
        _limit: usize,
        _offset: usize,
    ) -> Result<Vec<Arc<ComponentRecord>>> {
        Err(Error::provider_unavailable(&self.id, "upstream returned 503"))
    }

    async fn get_component(&self, _id: &str) -> Result<Arc<ComponentRecord>> {
        Err(Error::provider_unavailable(&self.id, "upstream returned 503"))
    }
}

/// Provider that never answers within any reasonable timeout
pub struct HangingProvider {
    pub id: String,
}

#[async_trait]
impl Provider for HangingProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn list_components(
        &self,
        _limit: usize,
        _offset: usize,
    ) -> Result<Vec<Arc<ComponentRecord>>> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(vec![])
    }

    async fn get_component(&self, id: &str) -> Result<Arc<ComponentRecord>> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(Error::component_not_found(&self.id, id))
    }
}

// ============================================================================
// Catalogs
// ============================================================================

/// In-memory provider over named records
pub fn catalog(source: &str, names: &[&str]) -> Arc<dyn Provider> {
    Arc::new(StaticProvider::new(
        source,
        names
            .iter()
            .map(|name| ComponentRecord::new(source, name.to_lowercase(), *name))
            .collect(),
    ))
}

/// Aggregator over providers with the default configuration
pub fn aggregator(providers: Vec<Arc<dyn Provider>>) -> Aggregator {
    let registry = providers
        .into_iter()
        .fold(ProviderRegistry::new(), |r, p| r.with_provider(p));
    Aggregator::new(registry, &AtlasConfig::default())
}

/// Write a JSON catalog file named `<source>.json`
pub fn write_catalog(dir: &Path, source: &str, json: &str) -> PathBuf {
    let path = dir.join(format!("{}.json", source));
    std::fs::write(&path, json).expect("write catalog");
    path
}
