//! Filter predicate over component records
//!
//! This module provides:
//! - SynonymTable: query → alias expansion from configuration
//! - FilterPredicate: a FilterSpec compiled once per request and then
//!   evaluated against each candidate
//!
//! The free-text part of the predicate is recall-oriented: it accepts a
//! record when the query or any of its aliases occurs anywhere in the
//! record's searchable text. It never consults the field scorer.
//!
//! Enum-valued filter fields that fail to parse make the predicate reject
//! every record. They are not request errors.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use uiatlas_core::{
    AtlasConfig, Category, ComponentRecord, FilterSpec, Framework, StylingVersion,
};

// ============================================================================
// SynonymTable
// ============================================================================

/// Query aliases, keyed by lowercase query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    aliases: BTreeMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Build from a query → aliases map (keys and aliases are lowercased)
    pub fn new(aliases: &BTreeMap<String, Vec<String>>) -> Self {
        SynonymTable {
            aliases: aliases
                .iter()
                .map(|(k, v)| {
                    (
                        k.trim().to_lowercase(),
                        v.iter().map(|a| a.to_lowercase()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Table from the `[synonyms]` section of a config
    pub fn from_config(config: &AtlasConfig) -> Self {
        Self::new(&config.synonyms)
    }

    /// The query followed by its aliases, all lowercase
    ///
    /// Only a whole-query match is expanded: "cta" expands, "cta button"
    /// does not. Blank queries expand to nothing.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }
        let mut expanded = vec![query.clone()];
        if let Some(aliases) = self.aliases.get(&query) {
            expanded.extend(aliases.iter().cloned());
        }
        expanded
    }

    /// Number of queries with aliases
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// True if no aliases are configured
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

// ============================================================================
// Constraint
// ============================================================================

/// A parsed enum-valued filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constraint<T> {
    /// Field absent
    Any,
    /// Field must equal this value
    Is(T),
    /// Field held an unrecognised value
    Never,
}

impl<T: FromStr> Constraint<T> {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Constraint::Any,
            Some(v) => v.parse().map(Constraint::Is).unwrap_or(Constraint::Never),
        }
    }
}

// ============================================================================
// FilterPredicate
// ============================================================================

/// A compiled FilterSpec
///
/// All present fields combine with AND; the tag field passes when the
/// record carries any listed tag.
///
/// # Example
///
/// ```
/// use uiatlas_core::{AtlasConfig, ComponentRecord, FilterSpec};
/// use uiatlas_search::{FilterPredicate, SynonymTable};
///
/// let synonyms = SynonymTable::from_config(&AtlasConfig::default());
/// let filters = FilterSpec::new().with_query("cta");
/// let predicate = FilterPredicate::compile(&filters, &synonyms);
///
/// let hero = ComponentRecord::new("hyperui", "hero", "Hero")
///     .with_description("Big headline with a Get Started button");
/// assert!(predicate.matches(&hero));
/// ```
#[derive(Debug, Clone)]
pub struct FilterPredicate {
    source: Option<String>,
    category: Constraint<Category>,
    tags: BTreeSet<String>,
    framework: Constraint<Framework>,
    styling_version: Constraint<StylingVersion>,
    free_only: bool,
    /// Query plus aliases; empty means no text constraint
    needles: Vec<String>,
}

impl FilterPredicate {
    /// Compile filters, expanding the query through the synonym table
    pub fn compile(filters: &FilterSpec, synonyms: &SynonymTable) -> Self {
        FilterPredicate {
            source: filters.source.clone(),
            category: Constraint::parse(filters.category.as_deref()),
            tags: filters.tags.iter().map(|t| t.to_lowercase()).collect(),
            framework: Constraint::parse(filters.framework.as_deref()),
            styling_version: Constraint::parse(filters.styling_version.as_deref()),
            free_only: filters.free_only,
            needles: filters
                .text_query()
                .map(|q| synonyms.expand(q))
                .unwrap_or_default(),
        }
    }

    /// True if some field can never be satisfied
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self.category, Constraint::Never)
            || matches!(self.framework, Constraint::Never)
            || matches!(self.styling_version, Constraint::Never)
    }

    /// Evaluate every field, including the free-text query
    pub fn matches(&self, record: &ComponentRecord) -> bool {
        self.matches_structure(record) && self.matches_query(record)
    }

    /// Evaluate every field except the free-text query
    pub fn matches_structure(&self, record: &ComponentRecord) -> bool {
        if let Some(source) = &self.source {
            if &record.source_id != source {
                return false;
            }
        }

        match self.category {
            Constraint::Any => {}
            Constraint::Is(c) if record.category == c => {}
            _ => return false,
        }

        if !self.tags.is_empty()
            && !record
                .tags
                .iter()
                .any(|t| self.tags.contains(&t.to_lowercase()))
        {
            return false;
        }

        match self.framework {
            Constraint::Any => {}
            Constraint::Is(f) if record.frameworks.supports(f) => {}
            _ => return false,
        }

        match (self.styling_version, &record.styling) {
            (Constraint::Any, _) => {}
            (Constraint::Never, _) => return false,
            // records without styling metadata are not constrained
            (Constraint::Is(_), None) => {}
            (Constraint::Is(v), Some(styling)) if styling.version == v => {}
            _ => return false,
        }

        !(self.free_only && record.requires_pro_access)
    }

    /// Evaluate only the free-text query (with aliases)
    pub fn matches_query(&self, record: &ComponentRecord) -> bool {
        if self.needles.is_empty() {
            return true;
        }
        let haystack = searchable_text(record);
        self.needles.iter().any(|n| haystack.contains(n.as_str()))
    }
}

/// Lowercase concatenation of the fields the query filter searches
fn searchable_text(record: &ComponentRecord) -> String {
    let mut parts: Vec<&str> = vec![record.name.as_str()];
    parts.push(record.description.as_deref().unwrap_or(""));
    parts.extend(record.tags.iter().map(String::as_str));
    parts.extend(record.keywords.iter().map(String::as_str));
    parts.push(&record.slug);
    parts.push(record.category.as_str());
    parts.join(" ").to_lowercase()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uiatlas_core::FrameworkSupport;

    fn synonyms() -> SynonymTable {
        SynonymTable::from_config(&AtlasConfig::default())
    }

    fn check(filters: FilterSpec, record: &ComponentRecord) -> bool {
        FilterPredicate::compile(&filters, &synonyms()).matches(record)
    }

    fn hero() -> ComponentRecord {
        ComponentRecord::new("hyperui", "hero-simple", "Simple Hero")
            .with_description("Headline with a Get Started button")
            .with_category(Category::Templates)
            .with_tags(["Marketing", "landing"])
            .with_frameworks(FrameworkSupport::only(&[Framework::React, Framework::Html]))
            .with_styling(StylingVersion::V4)
    }

    #[test]
    fn test_empty_filter_matches_all() {
        assert!(check(FilterSpec::new(), &hero()));
    }

    #[test]
    fn test_synonym_expansion_cta() {
        let record = hero();
        assert!(!searchable_text(&record).contains("cta"));
        assert!(check(FilterSpec::new().with_query("cta"), &record));
        assert!(check(FilterSpec::new().with_query("  CTA "), &record));
    }

    #[test]
    fn test_query_without_alias_is_substring() {
        assert!(check(FilterSpec::new().with_query("headline"), &hero()));
        assert!(check(FilterSpec::new().with_query("hero-simple"), &hero()));
        assert!(!check(FilterSpec::new().with_query("pricing"), &hero()));
    }

    #[test]
    fn test_query_matches_category_keyword() {
        assert!(check(FilterSpec::new().with_query("templates"), &hero()));
    }

    #[test]
    fn test_source_filter() {
        assert!(check(FilterSpec::new().with_source("hyperui"), &hero()));
        assert!(!check(FilterSpec::new().with_source("shadcn"), &hero()));
    }

    #[test]
    fn test_category_filter() {
        assert!(check(FilterSpec::new().with_category("templates"), &hero()));
        assert!(!check(FilterSpec::new().with_category("buttons"), &hero()));
    }

    #[test]
    fn test_unknown_enum_values_reject() {
        for filters in [
            FilterSpec::new().with_category("holograms"),
            FilterSpec::new().with_framework("qwik"),
            FilterSpec::new().with_styling_version("v9"),
        ] {
            let predicate = FilterPredicate::compile(&filters, &synonyms());
            assert!(predicate.is_unsatisfiable());
            assert!(!predicate.matches(&hero()));
        }
    }

    #[test]
    fn test_tags_any_case_insensitive() {
        assert!(check(FilterSpec::new().with_tags(["marketing", "dashboard"]), &hero()));
        assert!(check(FilterSpec::new().with_tags(["LANDING"]), &hero()));
        assert!(!check(FilterSpec::new().with_tags(["dashboard"]), &hero()));
    }

    #[test]
    fn test_framework_filter() {
        assert!(check(FilterSpec::new().with_framework("react"), &hero()));
        assert!(!check(FilterSpec::new().with_framework("vue"), &hero()));
    }

    #[test]
    fn test_styling_filter_skips_records_without_styling() {
        assert!(check(FilterSpec::new().with_styling_version("v4"), &hero()));
        assert!(!check(FilterSpec::new().with_styling_version("v3"), &hero()));

        let plain = ComponentRecord::new("s", "plain", "Plain");
        assert!(check(FilterSpec::new().with_styling_version("v3"), &plain));
    }

    #[test]
    fn test_free_only() {
        let pro = hero().with_pro_access(true);
        assert!(check(FilterSpec::new(), &pro));
        assert!(!check(FilterSpec::new().free_only(), &pro));
        assert!(check(FilterSpec::new().free_only(), &hero()));
    }

    #[test]
    fn test_fields_are_and_combined() {
        let filters = FilterSpec::new()
            .with_source("hyperui")
            .with_framework("react")
            .with_query("cta");
        assert!(check(filters.clone(), &hero()));
        assert!(!check(filters.with_category("cards"), &hero()));
    }

    #[test]
    fn test_structure_ignores_query() {
        let filters = FilterSpec::new().with_source("hyperui").with_query("pricing");
        let predicate = FilterPredicate::compile(&filters, &synonyms());
        assert!(predicate.matches_structure(&hero()));
        assert!(!predicate.matches_query(&hero()));
    }

    #[test]
    fn test_expand() {
        let table = synonyms();
        let expanded = table.expand("Navbar");
        assert_eq!(expanded[0], "navbar");
        assert!(expanded.contains(&"menu".to_string()));
        assert_eq!(table.expand("cta button"), vec!["cta button"]);
        assert!(table.expand("  ").is_empty());
        assert!(!table.is_empty());
    }
}
