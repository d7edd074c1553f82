//! Component records supplied by providers
//!
//! This module defines the data model shared by every layer:
//! - ComponentRecord: one component's metadata, immutable once built
//! - ComponentKey: (source, id) identity across providers
//! - Category / Framework / StylingVersion: closed enums with an `Unknown`
//!   catch-all so foreign catalogs never fail to load
//! - License and styling metadata
//!
//! Providers are the only writers of records. Everything downstream reads,
//! scores, filters and reorders them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ComponentKey
// ============================================================================

/// Identity of a component across all providers
///
/// Component ids are only unique within their source, so the key pairs
/// both. Ordering is lexicographic on (source_id, id).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentKey {
    /// Provider id
    pub source_id: String,
    /// Component id within the provider
    pub id: String,
}

impl ComponentKey {
    /// Create a new key
    pub fn new(source_id: impl Into<String>, id: impl Into<String>) -> Self {
        ComponentKey {
            source_id: source_id.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.source_id, self.id)
    }
}

// ============================================================================
// Category
// ============================================================================

/// Primary component category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Animated,
    Text,
    Forms,
    Navigation,
    Backgrounds,
    Layouts,
    Templates,
    DataDisplay,
    Feedback,
    Buttons,
    Inputs,
    Modals,
    Cards,
    Tables,
    Overlays,
    Disclosure,
    Layout,
    #[default]
    Other,
    /// Value not recognised when the catalog was loaded
    #[serde(other)]
    Unknown,
}

impl Category {
    /// All known categories (excludes `Unknown`)
    pub const ALL: [Category; 18] = [
        Category::Animated,
        Category::Text,
        Category::Forms,
        Category::Navigation,
        Category::Backgrounds,
        Category::Layouts,
        Category::Templates,
        Category::DataDisplay,
        Category::Feedback,
        Category::Buttons,
        Category::Inputs,
        Category::Modals,
        Category::Cards,
        Category::Tables,
        Category::Overlays,
        Category::Disclosure,
        Category::Layout,
        Category::Other,
    ];

    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Animated => "animated",
            Category::Text => "text",
            Category::Forms => "forms",
            Category::Navigation => "navigation",
            Category::Backgrounds => "backgrounds",
            Category::Layouts => "layouts",
            Category::Templates => "templates",
            Category::DataDisplay => "data_display",
            Category::Feedback => "feedback",
            Category::Buttons => "buttons",
            Category::Inputs => "inputs",
            Category::Modals => "modals",
            Category::Cards => "cards",
            Category::Tables => "tables",
            Category::Overlays => "overlays",
            Category::Disclosure => "disclosure",
            Category::Layout => "layout",
            Category::Other => "other",
            Category::Unknown => "unknown",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parses a known category; `"unknown"` and anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Framework support
// ============================================================================

/// A rendering framework a component can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    Vue,
    Angular,
    Svelte,
    Solid,
    Next,
    Nuxt,
    Html,
}

impl Framework {
    /// All frameworks in flag order
    pub const ALL: [Framework; 8] = [
        Framework::React,
        Framework::Vue,
        Framework::Angular,
        Framework::Svelte,
        Framework::Solid,
        Framework::Next,
        Framework::Nuxt,
        Framework::Html,
    ];

    /// Lowercase name used in filters
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::Svelte => "svelte",
            Framework::Solid => "solid",
            Framework::Next => "next",
            Framework::Nuxt => "nuxt",
            Framework::Html => "html",
        }
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Framework::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == needle)
            .ok_or_else(|| format!("unknown framework '{}'", s))
    }
}

/// Framework support flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkSupport {
    pub react: bool,
    pub vue: bool,
    pub angular: bool,
    pub svelte: bool,
    pub solid: bool,
    pub next: bool,
    pub nuxt: bool,
    pub html: bool,
}

impl FrameworkSupport {
    /// Support flags for exactly the given frameworks
    pub fn only(frameworks: &[Framework]) -> Self {
        let mut support = FrameworkSupport::default();
        for fw in frameworks {
            support.set(*fw, true);
        }
        support
    }

    /// Whether the framework is supported
    pub fn supports(&self, framework: Framework) -> bool {
        match framework {
            Framework::React => self.react,
            Framework::Vue => self.vue,
            Framework::Angular => self.angular,
            Framework::Svelte => self.svelte,
            Framework::Solid => self.solid,
            Framework::Next => self.next,
            Framework::Nuxt => self.nuxt,
            Framework::Html => self.html,
        }
    }

    /// Set one flag
    pub fn set(&mut self, framework: Framework, value: bool) {
        let flag = match framework {
            Framework::React => &mut self.react,
            Framework::Vue => &mut self.vue,
            Framework::Angular => &mut self.angular,
            Framework::Svelte => &mut self.svelte,
            Framework::Solid => &mut self.solid,
            Framework::Next => &mut self.next,
            Framework::Nuxt => &mut self.nuxt,
            Framework::Html => &mut self.html,
        };
        *flag = value;
    }
}

// ============================================================================
// License
// ============================================================================

/// License families seen across providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LicenseKind {
    #[default]
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "MIT+CommonsClause")]
    MitCommonsClause,
    #[serde(rename = "Pro")]
    Pro,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3,
    #[serde(rename = "Custom", other)]
    Custom,
}

/// License information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License family
    #[serde(rename = "type", default)]
    pub kind: LicenseKind,
    /// Commercial use allowed
    #[serde(default = "default_true")]
    pub commercial: bool,
    /// Redistribution allowed
    #[serde(default = "default_true")]
    pub redistribute: bool,
}

fn default_true() -> bool {
    true
}

impl Default for License {
    fn default() -> Self {
        License {
            kind: LicenseKind::Mit,
            commercial: true,
            redistribute: true,
        }
    }
}

// ============================================================================
// Styling
// ============================================================================

/// Styling-system (Tailwind) major version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylingVersion {
    V3,
    V4,
    #[serde(other)]
    Unknown,
}

impl FromStr for StylingVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v3" => Ok(StylingVersion::V3),
            "v4" => Ok(StylingVersion::V4),
            _ => Err(format!("unknown styling version '{}'", s)),
        }
    }
}

/// Styling metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Styling {
    /// Styling-system version the component targets
    pub version: StylingVersion,
    /// Required styling plugins
    #[serde(default)]
    pub plugin_deps: Vec<String>,
}

// ============================================================================
// ComponentRecord
// ============================================================================

/// One component's metadata, as supplied by a provider
///
/// Records are immutable snapshots: the builder methods consume `self` and
/// are meant for providers assembling their catalog, never for the search
/// layers.
///
/// # Examples
///
/// ```
/// use uiatlas_core::{Category, ComponentRecord};
///
/// let button = ComponentRecord::new("shadcn", "button", "Button")
///     .with_category(Category::Buttons)
///     .with_tags(["cta", "action"])
///     .with_popularity(4.5);
///
/// assert_eq!(button.key().to_string(), "shadcn/button");
/// assert!(button.tags.contains("cta"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Component id, unique within its source
    pub id: String,
    /// Provider that supplied the record
    pub source_id: String,
    /// Human-readable name
    pub name: String,
    /// URL-safe slug
    #[serde(default)]
    pub slug: String,
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Search and filter tags
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Extra search keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Primary category
    #[serde(default)]
    pub category: Category,
    /// Supported frameworks
    #[serde(default)]
    pub frameworks: FrameworkSupport,
    /// License information
    #[serde(default)]
    pub license: License,
    /// Gated behind a paid tier
    #[serde(default)]
    pub requires_pro_access: bool,
    /// Popularity hint used for cross-source ordering
    #[serde(default)]
    pub popularity_score: f64,
    /// Styling metadata
    #[serde(default)]
    pub styling: Option<Styling>,
}

impl ComponentRecord {
    /// Create a record with the required identity fields
    ///
    /// The slug defaults to the id.
    pub fn new(
        source_id: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let id = id.into();
        ComponentRecord {
            slug: id.clone(),
            id,
            source_id: source_id.into(),
            name: name.into(),
            title: None,
            description: None,
            tags: BTreeSet::new(),
            keywords: vec![],
            category: Category::Other,
            frameworks: FrameworkSupport::default(),
            license: License::default(),
            requires_pro_access: false,
            popularity_score: 0.0,
            styling: None,
        }
    }

    /// Cross-provider identity
    pub fn key(&self) -> ComponentKey {
        ComponentKey::new(self.source_id.clone(), self.id.clone())
    }

    /// Builder: set slug
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Builder: set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Builder: set framework support
    pub fn with_frameworks(mut self, frameworks: FrameworkSupport) -> Self {
        self.frameworks = frameworks;
        self
    }

    /// Builder: set license
    pub fn with_license(mut self, license: License) -> Self {
        self.license = license;
        self
    }

    /// Builder: mark as pro-only
    pub fn with_pro_access(mut self, required: bool) -> Self {
        self.requires_pro_access = required;
        self
    }

    /// Builder: set popularity hint
    pub fn with_popularity(mut self, score: f64) -> Self {
        self.popularity_score = score;
        self
    }

    /// Builder: set styling metadata
    pub fn with_styling(mut self, version: StylingVersion) -> Self {
        self.styling = Some(Styling {
            version,
            plugin_deps: vec![],
        });
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
