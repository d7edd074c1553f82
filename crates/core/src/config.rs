//! Search configuration via `uiatlas.toml`
//!
//! Every hand-maintained table the engine consults (field weights,
//! popularity boosts, source preferences, synonym aliases, component
//! relationships, page patterns) lives in one TOML document. The built-in
//! defaults ship as `config/default.toml` and are parsed once on first use.
//! To change behaviour, copy that file, edit it and load it with
//! [`AtlasConfig::from_file`].

use crate::error::{Error, Result};
use crate::table::MatchTable;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Config file name conventionally used by front ends
pub const CONFIG_FILE_NAME: &str = "uiatlas.toml";

/// Layout version this build understands
pub const CONFIG_VERSION: u32 = 1;

/// Maximum complements kept per relationship key
pub const MAX_COMPLEMENTS: usize = 5;

const DEFAULT_TOML: &str = include_str!("../config/default.toml");

static DEFAULT_CONFIG: Lazy<AtlasConfig> = Lazy::new(|| {
    // The embedded file is covered by `test_default_config_parses`.
    AtlasConfig::from_toml_str(DEFAULT_TOML).unwrap_or_else(|_| AtlasConfig::empty())
});

// ============================================================================
// AggregatorConfig
// ============================================================================

/// Fan-out and pagination limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Per-provider call timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub provider_timeout_ms: u64,
    /// Limit passed to each provider during fan-out (default: 1000)
    #[serde(default = "default_fanout_limit")]
    pub fanout_limit: usize,
    /// Largest accepted page size (default: 200)
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    /// Page size used when a front end supplies none (default: 50)
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_fanout_limit() -> usize {
    1000
}

fn default_max_limit() -> usize {
    200
}

fn default_limit() -> usize {
    50
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        AggregatorConfig {
            provider_timeout_ms: default_timeout_ms(),
            fanout_limit: default_fanout_limit(),
            max_limit: default_max_limit(),
            default_limit: default_limit(),
        }
    }
}

impl AggregatorConfig {
    /// Per-provider timeout as a Duration
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }

    /// Builder: set provider timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Builder: set fan-out limit
    pub fn with_fanout_limit(mut self, limit: usize) -> Self {
        self.fanout_limit = limit;
        self
    }
}

// ============================================================================
// FieldWeights
// ============================================================================

/// Multipliers for per-field match scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub name: f64,
    pub title: f64,
    pub description: f64,
    pub tags: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            name: 3.0,
            title: 2.5,
            description: 2.0,
            tags: 1.8,
        }
    }
}

impl FieldWeights {
    fn validate(&self) -> Result<()> {
        for (field, w) in [
            ("name", self.name),
            ("title", self.title),
            ("description", self.description),
            ("tags", self.tags),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::Config(format!(
                    "weight for '{}' must be a non-negative number, got {}",
                    field, w
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// AtlasConfig
// ============================================================================

/// All tables and limits, loaded from TOML
///
/// # Example
///
/// ```toml
/// version = 1
///
/// [aggregator]
/// provider_timeout_ms = 2000
///
/// [popularity]
/// button = 5.0
///
/// [synonyms]
/// cta = ["call to action", "get started"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasConfig {
    /// Layout version, must equal `CONFIG_VERSION`
    pub version: u32,
    /// Autocomplete fallback terms
    #[serde(default)]
    pub popular_terms: Vec<String>,
    /// Essentials for sources without their own priority list
    #[serde(default)]
    pub default_framework_priorities: Vec<String>,
    /// Fan-out and pagination limits
    #[serde(default)]
    pub aggregator: AggregatorConfig,
    /// Field weights
    #[serde(default)]
    pub weights: FieldWeights,
    /// Keyword → popularity weight
    #[serde(default)]
    pub popularity: BTreeMap<String, f64>,
    /// Source id → preference multiplier
    #[serde(default)]
    pub source_weights: BTreeMap<String, f64>,
    /// Query → aliases
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,
    /// Keyword → complementary keywords
    #[serde(default)]
    pub relationships: BTreeMap<String, Vec<String>>,
    /// Source id → essential component keywords, most important first
    #[serde(default)]
    pub framework_priorities: BTreeMap<String, Vec<String>>,
    /// Use case → component keywords it needs
    #[serde(default)]
    pub use_cases: BTreeMap<String, Vec<String>>,
    /// Page kind → words that reveal it
    #[serde(default)]
    pub page_keywords: BTreeMap<String, Vec<String>>,
    /// Page kind → section → component keywords
    #[serde(default)]
    pub page_patterns: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    /// Purpose group → component keywords
    #[serde(default)]
    pub component_categories: BTreeMap<String, Vec<String>>,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl AtlasConfig {
    /// A config with limits but no tables
    pub fn empty() -> Self {
        AtlasConfig {
            version: CONFIG_VERSION,
            popular_terms: vec![],
            default_framework_priorities: vec![],
            aggregator: AggregatorConfig::default(),
            weights: FieldWeights::default(),
            popularity: BTreeMap::new(),
            source_weights: BTreeMap::new(),
            synonyms: BTreeMap::new(),
            relationships: BTreeMap::new(),
            framework_priorities: BTreeMap::new(),
            use_cases: BTreeMap::new(),
            page_keywords: BTreeMap::new(),
            page_patterns: BTreeMap::new(),
            component_categories: BTreeMap::new(),
        }
    }

    /// The shipped default file content, with comments
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` on syntax errors, a version mismatch, or
    /// invalid weights.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: AtlasConfig = toml::from_str(content)?;
        config.validate()?;
        config.normalize();
        Ok(config)
    }

    /// Read and parse config from a file path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Serialize this config to TOML and write it to the given path
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Popularity table in match priority order
    pub fn popularity_table(&self) -> MatchTable<f64> {
        MatchTable::from_map(&self.popularity)
    }

    /// Relationship table in match priority order
    pub fn relationship_table(&self) -> MatchTable<Vec<String>> {
        MatchTable::from_map(&self.relationships)
    }

    /// Preference multiplier for a source (1.0 when unlisted)
    pub fn source_weight(&self, source_id: &str) -> f64 {
        self.source_weights.get(source_id).copied().unwrap_or(1.0)
    }

    fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "unsupported config version {} (expected {})",
                self.version, CONFIG_VERSION
            )));
        }
        self.weights.validate()?;
        for (table, map) in [
            ("popularity", &self.popularity),
            ("source_weights", &self.source_weights),
        ] {
            if let Some((key, w)) = map.iter().find(|(_, w)| !w.is_finite() || **w < 0.0) {
                return Err(Error::Config(format!(
                    "{}.{} must be a non-negative number, got {}",
                    table, key, w
                )));
            }
        }
        if self.aggregator.max_limit == 0 {
            return Err(Error::Config("aggregator.max_limit must be at least 1".into()));
        }
        if self.aggregator.default_limit == 0
            || self.aggregator.default_limit > self.aggregator.max_limit
        {
            return Err(Error::Config(format!(
                "aggregator.default_limit must be between 1 and {}",
                self.aggregator.max_limit
            )));
        }
        Ok(())
    }

    fn normalize(&mut self) {
        for complements in self.relationships.values_mut() {
            complements.truncate(MAX_COMPLEMENTS);
        }
        for aliases in self.synonyms.values_mut() {
            for alias in aliases.iter_mut() {
                *alias = alias.to_lowercase();
            }
        }
        self.synonyms = std::mem::take(&mut self.synonyms)
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
    }
}

// ============================================================================
// Tests
// ============================================================================
