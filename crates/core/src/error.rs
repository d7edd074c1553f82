//! Error types for UI Atlas
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! An empty query is deliberately absent here: it is a valid request that
//! yields an empty (or unconstrained) result.

use std::io;
use thiserror::Error;

/// Result type alias for UI Atlas operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for UI Atlas
#[derive(Debug, Error)]
pub enum Error {
    /// A provider failed or timed out
    ///
    /// The aggregator recovers from this locally unless the provider
    /// was the only one requested.
    #[error("Provider '{source_id}' unavailable: {reason}")]
    ProviderUnavailable {
        /// Provider that failed
        source_id: String,
        /// Failure description
        reason: String,
    },

    /// No provider registered under the requested id
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// Provider has no component with this id
    #[error("Component not found: {source_id}/{id}")]
    ComponentNotFound {
        /// Provider that was asked
        source_id: String,
        /// Requested component id
        id: String,
    },

    /// Structurally invalid request (bad limit, etc.)
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Configuration could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error (catalog or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Shorthand for a provider failure
    pub fn provider_unavailable(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::ProviderUnavailable {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a typed not-found result
    pub fn component_not_found(source_id: impl Into<String>, id: impl Into<String>) -> Self {
        Error::ComponentNotFound {
            source_id: source_id.into(),
            id: id.into(),
        }
    }

    /// True for the typed not-found variants
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ComponentNotFound { .. } | Error::ProviderNotFound(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_provider_unavailable() {
        let err = Error::provider_unavailable("shadcn", "connection reset");
        let msg = err.to_string();
        assert!(msg.contains("shadcn"));
        assert!(msg.contains("connection reset"));
    }

    #[test]
    fn test_error_display_component_not_found() {
        let err = Error::component_not_found("magicui", "marquee");
        assert_eq!(err.to_string(), "Component not found: magicui/marquee");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_display_invalid_filter() {
        let err = Error::InvalidFilter("limit must be at least 1".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Invalid filter"));
        assert!(msg.contains("limit"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let result: Result<Vec<String>> = serde_json::from_str("{not json").map_err(|e| e.into());
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_error_from_toml() {
        let result: Result<toml::Value> = toml::from_str("= broken").map_err(|e| e.into());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_error_pattern_matching() {
        let err = Error::provider_unavailable("hyperui", "timed out after 10 ms");
        match err {
            Error::ProviderUnavailable { source_id, reason } => {
                assert_eq!(source_id, "hyperui");
                assert!(reason.contains("timed out"));
            }
            _ => panic!("Wrong error variant"),
        }
    }
}
