//! Provider contract and the in-memory provider
//!
//! A provider is an external catalog of component records. The aggregator
//! only reads from providers; providers are the sole writers of records.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use uiatlas_core::{ComponentRecord, Error, Result};

// ============================================================================
// Provider Trait
// ============================================================================

/// A source of component records
///
/// # Thread Safety
///
/// Providers are shared across concurrent searches and must be Send + Sync.
///
/// # Errors
///
/// `get_component` reports a missing id as `Error::ComponentNotFound`.
/// Any other failure is treated by the aggregator as the provider being
/// unavailable.
///
/// Records should carry the provider id as `source_id`; it is part of their
/// key and of the result ordering. Source filtering selects providers by
/// `id()` and does not inspect records.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable source id
    fn id(&self) -> &str;

    /// One page of the catalog
    async fn list_components(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Arc<ComponentRecord>>>;

    /// A single component by id
    async fn get_component(&self, id: &str) -> Result<Arc<ComponentRecord>>;
}

// ============================================================================
// StaticProvider
// ============================================================================

/// Provider over a fixed, in-memory catalog
///
/// Every record's `source_id` is overwritten with the provider id so that
/// records and their provider always agree.
///
/// # Example
///
/// ```
/// use uiatlas_aggregator::{Provider, StaticProvider};
/// use uiatlas_core::ComponentRecord;
///
/// let provider = StaticProvider::new(
///     "shadcn",
///     vec![ComponentRecord::new("ignored", "button", "Button")],
/// );
/// assert_eq!(provider.id(), "shadcn");
/// assert_eq!(provider.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StaticProvider {
    id: String,
    components: Vec<Arc<ComponentRecord>>,
}

impl StaticProvider {
    /// Create a provider from records
    pub fn new(id: impl Into<String>, components: Vec<ComponentRecord>) -> Self {
        let id = id.into();
        let components = components
            .into_iter()
            .map(|mut record| {
                record.source_id = id.clone();
                Arc::new(record)
            })
            .collect();
        StaticProvider { id, components }
    }

    /// Create a provider from a JSON array of records
    ///
    /// Records may omit `source_id`; it is set from `id`.
    pub fn from_json(id: impl Into<String>, json: &str) -> Result<Self> {
        let id = id.into();
        let mut values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        for value in values.iter_mut() {
            if let Some(obj) = value.as_object_mut() {
                obj.insert("source_id".into(), serde_json::Value::String(id.clone()));
            }
        }
        let records: Vec<ComponentRecord> =
            serde_json::from_value(serde_json::Value::Array(values))?;
        Ok(Self::new(id, records))
    }

    /// Load a JSON catalog file; the provider id is the file stem
    pub fn from_file(path: &Path) -> Result<Self> {
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("cannot derive a source id from '{}'", path.display()),
                ))
            })?
            .to_string();
        let content = std::fs::read_to_string(path)?;
        Self::from_json(id, &content)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[async_trait]
impl Provider for StaticProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn list_components(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Arc<ComponentRecord>>> {
        Ok(self
            .components
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_component(&self, id: &str) -> Result<Arc<ComponentRecord>> {
        self.components
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Error::component_not_found(&self.id, id))
    }
}

// ============================================================================
// Tests
// ============================================================================
