//! Data Store
//!
//! Loads and holds the JSON data tables that drive generation:
//! - Word lists for male, female, last, and neutral name fragments
//! - The canon name registry and canon gender map
//! - The species catalog used for random species selection
//! - Stat system definitions (classes, base stats, equipment, cascades)
//! - Force system tables (lightsaber colors, abilities per tier)
//! - Flat selection tables (alignments, homeworlds)
//!
//! Every table loads independently and degrades to empty on failure, so a
//! single damaged file never takes the whole store down.

use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::canon::{CanonRegistry, GenderMap};
use crate::core::errors::StoreError;
use crate::core::wordlists::{Gender, SpeciesCatalog, WordList};

// ============================================================================
// Table File Names
// ============================================================================

const MALE_FIRST_FILE: &str = "male_first_names.json";
const FEMALE_FIRST_FILE: &str = "female_first_names.json";
const LAST_FILE: &str = "last_names.json";
const NEUTRAL_FILE: &str = "other_names_neutral.json";
const CANON_FILE: &str = "canon_names.json";
const CANON_GENDERS_FILE: &str = "canon_genders.json";
const SPECIES_FILE: &str = "species.json";
const STAT_SYSTEMS_FILE: &str = "stat_systems.json";
const FORCE_FILE: &str = "force_system.json";
const ALIGNMENTS_FILE: &str = "alignments.json";
const PLANETS_FILE: &str = "planets.json";

// ============================================================================
// Loaders
// ============================================================================

/// Load and parse a JSON table file.
pub fn load_json_file<T: DeserializeOwned>(path: &Path, table: &str) -> Result<T, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StoreError::not_found(path)
        } else {
            StoreError::read_failed(path, e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| StoreError::parse_failed(table, path, e))
}

/// Load a JSON table file, falling back to the type's default on any failure.
///
/// A missing file is logged at debug level; a damaged file is logged as a
/// warning so data problems stay visible without aborting startup.
pub fn load_json_file_or_default<T: DeserializeOwned + Default>(path: &Path, table: &str) -> T {
    match load_json_file(path, table) {
        Ok(value) => value,
        Err(e) if e.is_recoverable() => {
            debug!("Table '{}' not found at {}, using empty table", table, path.display());
            T::default()
        }
        Err(e) => {
            warn!("Failed to load table '{}': {}", table, e);
            T::default()
        }
    }
}

// ============================================================================
// Stat System Models
// ============================================================================

/// A single character class definition.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassDef {
    /// Base stat values, jittered by 0..3 at roll time.
    #[serde(default)]
    pub base_stats: IndexMap<String, i32>,

    /// Starting equipment, cloned onto each generated record.
    #[serde(default)]
    pub equipment: Vec<String>,

    /// Whether the class is inherently force-wielding.
    #[serde(default)]
    pub force_user: bool,

    /// Display glyph, also the portrait fallback.
    #[serde(default)]
    pub icon: String,
}

/// An advanced class reachable from a base class, with its skill trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedClassDef {
    pub name: String,

    /// One-line flavor text shown in class listings.
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub skill_trees: Vec<String>,
}

/// A stat system: the stat names it rolls, the classes it defines, and an
/// optional faction cascade (faction -> base class -> advanced class ->
/// skill tree).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatSystem {
    /// Display label for the system.
    #[serde(default)]
    pub label: String,

    /// Stat names in display order.
    #[serde(default)]
    pub stats: Vec<String>,

    /// Classes defined by this system.
    #[serde(default)]
    pub classes: IndexMap<String, ClassDef>,

    /// Faction -> base class names. Empty for systems without a cascade.
    #[serde(default)]
    pub factions: IndexMap<String, Vec<String>>,

    /// Base class -> advanced classes. Empty for systems without a cascade.
    #[serde(default)]
    pub advanced: IndexMap<String, Vec<AdvancedClassDef>>,

    /// Stat whose rolled value, times ten, yields the record's hitpoints.
    #[serde(default)]
    pub hitpoints_from: Option<String>,
}

impl StatSystem {
    /// Look up a class by name, case-insensitively.
    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name).or_else(|| {
            self.classes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v)
        })
    }

    /// Resolve a class name to its canonical table spelling.
    pub fn class_key(&self, name: &str) -> Option<&str> {
        if self.classes.contains_key(name) {
            return self.classes.get_key_value(name).map(|(k, _)| k.as_str());
        }
        self.classes
            .keys()
            .find(|k| k.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// All class names, in table order.
    pub fn class_names(&self) -> Vec<&str> {
        self.classes.keys().map(String::as_str).collect()
    }

    /// Whether this system selects through a faction cascade.
    pub fn has_cascade(&self) -> bool {
        !self.factions.is_empty()
    }

    /// Faction names, in table order.
    pub fn faction_names(&self) -> Vec<&str> {
        self.factions.keys().map(String::as_str).collect()
    }

    /// Base classes available to a faction.
    pub fn base_classes(&self, faction: &str) -> Option<&[String]> {
        self.factions.get(faction).map(Vec::as_slice)
    }

    /// Advanced classes reachable from a base class.
    pub fn advanced_classes(&self, base_class: &str) -> Option<&[AdvancedClassDef]> {
        self.advanced.get(base_class).map(Vec::as_slice)
    }
}

/// All stat systems, keyed by system id (e.g. "traditional", "swtor").
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatSystems {
    #[serde(default)]
    pub systems: IndexMap<String, StatSystem>,
}

impl StatSystems {
    /// Look up a system by id, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&StatSystem> {
        self.systems.get(name).or_else(|| {
            self.systems
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v)
        })
    }

    /// System ids, in table order.
    pub fn names(&self) -> Vec<&str> {
        self.systems.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

// ============================================================================
// Force System Model
// ============================================================================

/// Force-related selection tables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForceSystem {
    /// Lightsaber blade colors, the palette shared by every wielder.
    #[serde(default)]
    pub lightsaber_colors: Vec<String>,

    /// Optional tier-restricted palettes overriding the shared one, so Sith
    /// stay in reds while Jedi draw the cooler blades.
    #[serde(default)]
    pub tier_colors: IndexMap<String, Vec<String>>,

    /// Force abilities keyed by tier name ("Jedi", "Sith", "Gray Jedi",
    /// "Force Sensitive").
    #[serde(default)]
    pub force_abilities: IndexMap<String, Vec<String>>,
}

impl ForceSystem {
    /// Abilities available to a force tier, empty for non-wielders.
    pub fn abilities_for(&self, tier: &str) -> &[String] {
        self.force_abilities
            .get(tier)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Blade palette for a tier: its restricted palette when one is defined,
    /// else the shared list.
    pub fn colors_for(&self, tier: &str) -> &[String] {
        match self.tier_colors.get(tier) {
            Some(colors) if !colors.is_empty() => colors.as_slice(),
            _ => self.lightsaber_colors.as_slice(),
        }
    }
}

// ============================================================================
// Data Store
// ============================================================================

/// In-memory copy of every data table.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    pub male_first: WordList,
    pub female_first: WordList,
    pub last: WordList,
    pub neutral: WordList,
    pub canon: CanonRegistry,
    pub canon_genders: GenderMap,
    pub species: SpeciesCatalog,
    pub stat_systems: StatSystems,
    pub force: ForceSystem,
    pub alignments: Vec<String>,
    pub planets: Vec<String>,
}

impl DataStore {
    /// Load every table from a data directory.
    ///
    /// Individual tables degrade to empty on failure; only a missing
    /// directory is a hard error.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(StoreError::DataDirMissing {
                path: dir.to_path_buf(),
            });
        }

        let store = Self {
            male_first: load_json_file_or_default(&dir.join(MALE_FIRST_FILE), "male_first_names"),
            female_first: load_json_file_or_default(
                &dir.join(FEMALE_FIRST_FILE),
                "female_first_names",
            ),
            last: load_json_file_or_default(&dir.join(LAST_FILE), "last_names"),
            neutral: load_json_file_or_default(&dir.join(NEUTRAL_FILE), "other_names_neutral"),
            canon: load_json_file_or_default(&dir.join(CANON_FILE), "canon_names"),
            canon_genders: load_json_file_or_default(
                &dir.join(CANON_GENDERS_FILE),
                "canon_genders",
            ),
            species: load_json_file_or_default(&dir.join(SPECIES_FILE), "species"),
            stat_systems: load_json_file_or_default(&dir.join(STAT_SYSTEMS_FILE), "stat_systems"),
            force: load_json_file_or_default(&dir.join(FORCE_FILE), "force_system"),
            alignments: load_json_file_or_default(&dir.join(ALIGNMENTS_FILE), "alignments"),
            planets: load_json_file_or_default(&dir.join(PLANETS_FILE), "planets"),
        };

        info!(
            species = store.species.len(),
            systems = store.stat_systems.systems.len(),
            "Data store loaded from {}",
            dir.display()
        );

        Ok(store)
    }

    /// The first-name word list for a resolved gender.
    ///
    /// Callers resolve `Neutral` to a concrete gender before drawing a first
    /// name, so only male and female lists exist here.
    pub fn first_names(&self, gender: Gender) -> &WordList {
        match gender {
            Gender::Female => &self.female_first,
            _ => &self.male_first,
        }
    }

    /// Whether a species has at least one entry in all four word lists.
    ///
    /// Only complete species are eligible for the weighted template ladder;
    /// incomplete ones always produce a plain "First Last".
    pub fn is_complete(&self, species: &str) -> bool {
        self.male_first.has_entries(species)
            && self.female_first.has_entries(species)
            && self.last.has_entries(species)
            && self.neutral.has_entries(species)
    }

    /// Species eligible for cross-species borrowing against a base species:
    /// complete, and not the base itself.
    pub fn complete_species_except(&self, base: &str) -> Vec<&str> {
        self.species
            .iter()
            .filter(|s| !s.eq_ignore_ascii_case(base) && self.is_complete(s))
            .collect()
    }

    /// True when every word list is empty.
    pub fn is_empty(&self) -> bool {
        self.male_first.is_empty()
            && self.female_first.is_empty()
            && self.last.is_empty()
            && self.neutral.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
