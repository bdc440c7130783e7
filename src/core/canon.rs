//! Canon Name Registry
//!
//! Detects collisions between composed names and the canon allow-list, and
//! supplies the filtered pool used for direct canon-name substitution.
//!
//! Registry entries are keyed by species plus three reserved keys:
//! - `"Special"` and `"Human/Common"` are universal fallback lists checked
//!   for every species.
//! - `"FamousFamily"` holds wildcard surname patterns checked separately.
//!
//! A pattern is either a literal full name (matched case-insensitively) or a
//! wildcard of the form `"* Skywalker"` matching any name with that suffix.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Deserialize;

use super::wordlists::Gender;

/// Registry key for names outside any playable species (Yoda, Jabba, ...).
pub const SPECIAL_KEY: &str = "Special";

/// Registry key checked as the universal fallback after the species list.
pub const COMMON_KEY: &str = "Human/Common";

/// Registry key holding famous-family wildcard surnames.
pub const FAMOUS_FAMILY_KEY: &str = "FamousFamily";

// ============================================================================
// Patterns
// ============================================================================

/// A single canon entry: a literal full name or a `"* Suffix"` wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonPattern {
    Literal(String),
    Suffix(String),
}

impl CanonPattern {
    /// Parse a registry entry. `"* X"` becomes a suffix wildcard, anything
    /// else a literal.
    pub fn parse(entry: &str) -> Self {
        match entry.strip_prefix("* ") {
            Some(suffix) => Self::Suffix(suffix.to_string()),
            None => Self::Literal(entry.to_string()),
        }
    }

    /// Case-insensitive match against a full name.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        match self {
            Self::Literal(literal) => name == literal.to_lowercase(),
            Self::Suffix(suffix) => name.ends_with(&suffix.to_lowercase()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Suffix(_))
    }

    /// The literal name text, when this pattern is one.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Literal(literal) => Some(literal),
            Self::Suffix(_) => None,
        }
    }
}

// ============================================================================
// Gender Map
// ============================================================================

/// Declared genders for a subset of canon names. Absence means the name is
/// unconstrained.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct GenderMap(IndexMap<String, Gender>);

impl GenderMap {
    pub fn declared(&self, name: &str) -> Option<Gender> {
        self.0.get(name).copied()
    }

    /// Whether a canon name may be emitted for the requested gender.
    pub fn allows(&self, name: &str, requested: Gender) -> bool {
        match self.declared(name) {
            None => true,
            Some(declared) => Gender::admits(declared, requested),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, gender: Gender) {
        self.0.insert(name.into(), gender);
    }
}

// ============================================================================
// Used-Name Tracking
// ============================================================================

/// Canon names already emitted in the current batch.
///
/// Threaded explicitly through batch-generation calls so duplicate canon
/// substitutions are excluded without any ambient state.
#[derive(Debug, Clone, Default)]
pub struct UsedNames(HashSet<String>);

impl UsedNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.0.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Canon name patterns keyed by species (plus the reserved keys above).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "IndexMap<String, Vec<String>>")]
pub struct CanonRegistry {
    entries: IndexMap<String, Vec<CanonPattern>>,
}

impl From<IndexMap<String, Vec<String>>> for CanonRegistry {
    fn from(raw: IndexMap<String, Vec<String>>) -> Self {
        let entries = raw
            .into_iter()
            .map(|(species, patterns)| {
                let parsed = patterns.iter().map(|p| CanonPattern::parse(p)).collect();
                (species, parsed)
            })
            .collect();
        Self { entries }
    }
}

impl CanonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, species: impl Into<String>, patterns: Vec<&str>) {
        self.entries.insert(
            species.into(),
            patterns.iter().map(|p| CanonPattern::parse(p)).collect(),
        );
    }

    pub fn has_species(&self, species: &str) -> bool {
        self.entries.contains_key(species)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` collides with the canon list for `species`.
    ///
    /// Checks the species list first (each `"/"` segment of a composite
    /// species counts), then `"Special"`, then `"Human/Common"`. Literal
    /// entries match exactly, wildcards by suffix, both case-insensitive.
    pub fn is_canon(&self, name: &str, species: &str) -> bool {
        let mut seen: Vec<&str> = Vec::new();
        let keys = species
            .split('/')
            .chain([species, SPECIAL_KEY, COMMON_KEY]);
        for key in keys {
            if key == FAMOUS_FAMILY_KEY || seen.contains(&key) {
                continue;
            }
            seen.push(key);
            if let Some(patterns) = self.entries.get(key) {
                if patterns.iter().any(|p| p.matches(name)) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether `name` carries a famous-family surname.
    ///
    /// Only wildcard patterns under `"FamousFamily"` are consulted, and only
    /// for Human-compatible species or species with their own canon entries.
    /// Callers check `is_canon` first; a canon name is never also flagged as
    /// famous family.
    pub fn is_famous_family(&self, name: &str, species: &str) -> bool {
        let applicable = species == COMMON_KEY
            || species.contains("Human")
            || self.entries.contains_key(species);
        if !applicable {
            return false;
        }
        self.entries
            .get(FAMOUS_FAMILY_KEY)
            .map(|patterns| {
                patterns
                    .iter()
                    .any(|p| p.is_wildcard() && p.matches(name))
            })
            .unwrap_or(false)
    }

    /// Literal canon names eligible for direct substitution for `species`.
    ///
    /// Gathers the species' own entries plus, for a composite `"A/B"`
    /// species, each segment's entries. Names already used this batch and
    /// names whose declared gender conflicts with the request are excluded.
    /// Wildcards never enter the pool.
    pub fn substitution_pool<'a>(
        &'a self,
        species: &str,
        used: &UsedNames,
        genders: &GenderMap,
        requested: Gender,
    ) -> Vec<&'a str> {
        let mut pool: Vec<&str> = Vec::new();
        let mut keys: Vec<&str> = vec![species];
        if species.contains('/') && species != COMMON_KEY {
            keys.extend(species.split('/'));
        }
        for key in keys {
            if key == FAMOUS_FAMILY_KEY {
                continue;
            }
            let Some(patterns) = self.entries.get(key) else {
                continue;
            };
            for name in patterns.iter().filter_map(CanonPattern::literal) {
                if pool.contains(&name) {
                    continue;
                }
                if used.contains(name) {
                    continue;
                }
                if !genders.allows(name, requested) {
                    continue;
                }
                pool.push(name);
            }
        }
        pool
    }
}

// ============================================================================
// Tests
// ============================================================================
