//! Keyword lookup tables with a fixed match priority
//!
//! Popularity boosts and component relationships are both "first key that
//! occurs in the text wins" lookups. A plain map iterates in an order that
//! says nothing about priority, so `MatchTable` pins it down: longer keys
//! are tried first, equal lengths alphabetically. "navbar" therefore beats
//! "nav" for the text "navbar-sticky".

use std::collections::BTreeMap;

/// Ordered keyword table for substring lookups
#[derive(Debug, Clone, PartialEq)]
pub struct MatchTable<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for MatchTable<V> {
    fn default() -> Self {
        MatchTable { entries: vec![] }
    }
}

impl<V: Clone> MatchTable<V> {
    /// Build from a map, lowercasing keys
    pub fn from_map(map: &BTreeMap<String, V>) -> Self {
        let mut entries: Vec<(String, V)> = map
            .iter()
            .map(|(k, v)| (k.trim().to_lowercase(), v.clone()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        entries.sort_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        entries.dedup_by(|(a, _), (b, _)| a == b);
        MatchTable { entries }
    }
}

impl<V> MatchTable<V> {
    /// First entry whose key occurs in `text` (expects lowercase text)
    pub fn first_match(&self, text: &str) -> Option<(&str, &V)> {
        self.entries
            .iter()
            .find(|(k, _)| text.contains(k.as_str()))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Exact key lookup
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Entries in match priority order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
