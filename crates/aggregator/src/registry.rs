//! Provider registry
//!
//! Holds providers keyed by id, in registration order. Registering an id
//! twice replaces the earlier provider in place.

use crate::provider::Provider;
use std::sync::Arc;
use uiatlas_core::{Error, Result};

/// Registered providers in registration order
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn Provider>>,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.list()).finish()
    }
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider, replacing any provider with the same id
    ///
    /// Returns the replaced provider, if any.
    pub fn register(&mut self, provider: Arc<dyn Provider>) -> Option<Arc<dyn Provider>> {
        if let Some(i) = self.providers.iter().position(|p| p.id() == provider.id()) {
            return Some(std::mem::replace(&mut self.providers[i], provider));
        }
        self.providers.push(provider);
        None
    }

    /// Builder: register a provider
    pub fn with_provider(mut self, provider: Arc<dyn Provider>) -> Self {
        self.register(provider);
        self
    }

    /// Look up a provider by id
    ///
    /// # Errors
    ///
    /// Returns `Error::ProviderNotFound` if no provider has this id.
    pub fn get(&self, id: &str) -> Result<Arc<dyn Provider>> {
        self.providers
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or_else(|| Error::ProviderNotFound(id.to_string()))
    }

    /// Check if a provider id is registered
    pub fn is_registered(&self, id: &str) -> bool {
        self.providers.iter().any(|p| p.id() == id)
    }

    /// Registered ids in registration order
    pub fn list(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.id().to_string()).collect()
    }

    /// Iterate providers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Provider>> {
        self.providers.iter()
    }

    /// Number of providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if no providers are registered
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProvider;
    use uiatlas_core::ComponentRecord;

    fn provider(id: &str, n: usize) -> Arc<dyn Provider> {
        Arc::new(StaticProvider::new(
            id,
            (0..n)
                .map(|i| ComponentRecord::new(id, format!("c{}", i), "C"))
                .collect(),
        ))
    }

    #[test]
    fn test_register_and_get() {
        let registry = ProviderRegistry::new()
            .with_provider(provider("shadcn", 1))
            .with_provider(provider("hyperui", 1));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list(), vec!["shadcn", "hyperui"]);
        assert!(registry.is_registered("hyperui"));
        assert_eq!(registry.get("shadcn").unwrap().id(), "shadcn");
    }

    #[test]
    fn test_get_unknown() {
        let registry = ProviderRegistry::new();
        assert!(registry.is_empty());
        let err = registry.get("nope").err().unwrap();
        assert!(matches!(err, Error::ProviderNotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_register_replaces_in_place() {
        let mut registry = ProviderRegistry::new()
            .with_provider(provider("a", 1))
            .with_provider(provider("b", 1));

        let replaced = registry.register(provider("a", 3));
        assert!(replaced.is_some());
        assert_eq!(registry.list(), vec!["a", "b"]);

        let a = registry.get("a").unwrap();
        assert_eq!(a.list_components(10, 0).await.unwrap().len(), 3);
    }
}
