//! Word-List Data Models
//!
//! Defines the species-keyed name fragment tables that every generator draws
//! from, plus the species catalog derived from them.
//!
//! A word-list file is a JSON object mapping a species key to an ordered
//! array of name fragments:
//!
//! ```text
//! { "Human/Common": ["Dax", "Joran", ...], "Wookiee": ["Chalmun", ...] }
//! ```
//!
//! Species keys are the join key across all tables and match case-sensitively
//! for direct lookups. Keys are not guaranteed to exist in every list, so
//! composition logic checks completeness before attempting complex templates.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared Constants
// ============================================================================

/// Species key used as the cross-species fallback in lookup chains.
pub const FALLBACK_SPECIES: &str = "Human/Common";

/// Sentinel returned when every lookup in a fallback chain comes up empty.
pub const UNKNOWN_NAME: &str = "Unknown";

// ============================================================================
// Gender
// ============================================================================

/// Gender used for first-name list selection and canon compatibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    /// Gender-neutral; draws from the male or female table by coin flip.
    Neutral,
}

impl Gender {
    /// Parse a gender from user or data input. Unrecognized values map to
    /// `Neutral` rather than failing.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Neutral => "neutral",
        }
    }

    /// Canon gender-map compatibility: a declared gender admits a draw when it
    /// is neutral or equals the requested gender.
    pub fn admits(declared: Gender, requested: Gender) -> bool {
        declared == Gender::Neutral || declared == requested
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Word List
// ============================================================================

/// A species-keyed table of name fragments, in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList(pub IndexMap<String, Vec<String>>);

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-key lookup. Returns the entry even when empty.
    pub fn get(&self, species: &str) -> Option<&[String]> {
        self.0.get(species).map(|v| v.as_slice())
    }

    /// Species lookup used by the samplers: the exact key if it has entries,
    /// otherwise a related key. A key is related when it refines the species
    /// (`"Chiss/Ascendancy"` for `"Chiss"`) or embeds it as a later segment
    /// (`"Near-Human/Chiss"`).
    pub fn lookup(&self, species: &str) -> Option<&[String]> {
        if let Some(entries) = self.0.get(species) {
            if !entries.is_empty() {
                return Some(entries.as_slice());
            }
        }
        let prefix = format!("{species}/");
        let segment = format!("/{species}");
        self.0
            .iter()
            .find(|(key, entries)| {
                !entries.is_empty() && (key.starts_with(&prefix) || key.contains(&segment))
            })
            .map(|(_, entries)| entries.as_slice())
    }

    /// Whether the species has at least one fragment under its exact key.
    pub fn has_entries(&self, species: &str) -> bool {
        self.0.get(species).is_some_and(|v| !v.is_empty())
    }

    /// First species key (in file order) with a non-empty fragment list.
    pub fn first_non_empty(&self) -> Option<(&str, &[String])> {
        self.0
            .iter()
            .find(|(_, entries)| !entries.is_empty())
            .map(|(key, entries)| (key.as_str(), entries.as_slice()))
    }

    pub fn species_keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, species: impl Into<String>, entries: Vec<String>) {
        self.0.insert(species.into(), entries);
    }
}

// ============================================================================
// Species Catalog
// ============================================================================

/// Ordered set of valid species keys.
///
/// Loaded from the species catalog file when present; otherwise derived from
/// the keys of the male first-name list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesCatalog(Vec<String>);

impl SpeciesCatalog {
    pub fn new(mut species: Vec<String>) -> Self {
        species.dedup();
        Self(species)
    }

    /// Build a catalog from an authoritative word-list's keys, in file order.
    pub fn from_word_list(list: &WordList) -> Self {
        Self(list.species_keys().map(str::to_string).collect())
    }

    pub fn contains(&self, species: &str) -> bool {
        self.0.iter().any(|s| s == species)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

// ============================================================================
// Tests
// ============================================================================
