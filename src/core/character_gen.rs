//! Character Generation
//!
//! Builds full character sheets on top of the name composer:
//! - Species selection (locked, random, or crazy-mix composite)
//! - Class selection, flat or through the faction cascade (faction to base
//!   class to advanced class to skill tree)
//! - Stat blocks from class bases with per-stat jitter, plus derived
//!   hitpoints where the system defines them
//! - Force-sensitivity tiers, tier-appropriate lightsaber colors, and
//!   ability lists
//! - Strict partial rerolls for name and stats
//!
//! Character draws share the name composer's random stream, so one seed
//! reproduces a whole sheet batch.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::core::canon::UsedNames;
use crate::core::errors::GenerationError;
use crate::core::name_gen::{NameComposer, NameMode, NameStructure};
use crate::core::sampler::{self, FallbackPolicy};
use crate::core::store::{ClassDef, DataStore, StatSystem};
use crate::core::wordlists::{Gender, UNKNOWN_NAME};

/// Stat system assumed when the caller does not name one.
pub const DEFAULT_SYSTEM: &str = "traditional";

// ============================================================================
// Force Tiers
// ============================================================================

/// Force-sensitivity tier of a generated character.
///
/// Jedi and Sith come deterministically from force-wielding classes; the
/// remaining tiers are rolled for everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceTier {
    Jedi,
    Sith,
    #[serde(rename = "Gray Jedi")]
    GrayJedi,
    #[serde(rename = "Force Sensitive")]
    ForceSensitive,
    #[serde(rename = "Non-Force User")]
    NonForceUser,
}

impl ForceTier {
    /// The tier name as it keys the force tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jedi => "Jedi",
            Self::Sith => "Sith",
            Self::GrayJedi => "Gray Jedi",
            Self::ForceSensitive => "Force Sensitive",
            Self::NonForceUser => "Non-Force User",
        }
    }

    /// Only tiers beyond mere sensitivity carry a lightsaber.
    pub fn wields_saber(&self) -> bool {
        matches!(self, Self::Jedi | Self::Sith | Self::GrayJedi)
    }
}

impl std::fmt::Display for ForceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Options
// ============================================================================

/// How the record's species is decided.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpeciesChoice {
    /// One species drawn uniformly from the catalog per record.
    #[default]
    Random,
    /// Species fixed by the caller; naming never borrows from others.
    Locked(String),
    /// Crazy-mix naming; the record's species becomes the composite the
    /// name composer tracked.
    CrazyMix,
}

/// Caller-facing knobs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub system: String,
    pub species: SpeciesChoice,
    /// Locked gender; `None` draws one per record.
    pub gender: Option<Gender>,
    /// Locked class name; `None` draws one (through the cascade when the
    /// system defines factions).
    pub class: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            system: DEFAULT_SYSTEM.to_string(),
            species: SpeciesChoice::Random,
            gender: None,
            class: None,
        }
    }
}

// ============================================================================
// Character Record
// ============================================================================

/// One generated character sheet.
///
/// Created whole; the only mutation paths are the name and stat rerolls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: Uuid,
    pub name: String,
    /// Possibly a composite like "Wookiee/Rodian" for crazy-mix records.
    pub species: String,
    pub gender: Gender,
    pub structure: NameStructure,
    pub system: String,
    pub faction: Option<String>,
    pub class: String,
    pub advanced_class: Option<String>,
    pub skill_tree: Option<String>,
    pub alignment: String,
    pub homeworld: String,
    pub stats: IndexMap<String, i32>,
    /// Derived total where the system defines one (endurance-based).
    pub hitpoints: Option<i32>,
    pub force_tier: ForceTier,
    pub force_abilities: Vec<String>,
    pub lightsaber_color: Option<String>,
    pub equipment: Vec<String>,
    /// Class glyph, shown where no portrait exists.
    pub icon: String,
    pub is_canon: bool,
    pub is_famous_family: bool,
    pub is_cross_species: bool,
    pub cross_species_parts: usize,
    pub portrait_url: Option<String>,
    pub portrait_error: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Composer
// ============================================================================

/// Generates character records, delegating all naming to a [`NameComposer`]
/// and drawing everything else from the same random stream.
pub struct CharacterComposer<'a> {
    store: &'a DataStore,
    names: NameComposer<'a>,
}

impl<'a> CharacterComposer<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self {
            store,
            names: NameComposer::new(store),
        }
    }

    /// A composer with a fixed seed, for reproducible sheets.
    pub fn with_seed(store: &'a DataStore, seed: u64) -> Self {
        Self {
            store,
            names: NameComposer::with_seed(store, seed),
        }
    }

    /// Generate a single record.
    pub fn generate(
        &mut self,
        options: &GenerationOptions,
    ) -> Result<CharacterRecord, GenerationError> {
        let mut used = UsedNames::new();
        self.generate_inner(options, &mut used, 1)
    }

    /// Generate `count` records, sharing one used-name set across the batch.
    ///
    /// Only configuration problems (unknown system or class) abort the
    /// batch; empty word lists degrade each record to sentinels instead.
    pub fn generate_batch(
        &mut self,
        options: &GenerationOptions,
        count: usize,
    ) -> Result<Vec<CharacterRecord>, GenerationError> {
        let mut used = UsedNames::new();
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(self.generate_inner(options, &mut used, count)?);
        }
        Ok(records)
    }

    fn generate_inner(
        &mut self,
        options: &GenerationOptions,
        used: &mut UsedNames,
        batch_size: usize,
    ) -> Result<CharacterRecord, GenerationError> {
        let system = self
            .store
            .stat_systems
            .get(&options.system)
            .ok_or_else(|| GenerationError::unknown_system(&options.system))?;

        let (faction, class_name) = match &options.class {
            Some(wanted) => {
                let key = system
                    .class_key(wanted)
                    .ok_or_else(|| GenerationError::unknown_class(wanted, &options.system))?
                    .to_string();
                let faction = system
                    .factions
                    .iter()
                    .find(|(_, classes)| classes.iter().any(|c| c == &key))
                    .map(|(f, _)| f.clone());
                (faction, key)
            }
            None => self.pick_base_class(system)?,
        };
        let class = system
            .class(&class_name)
            .ok_or_else(|| GenerationError::unknown_class(&class_name, &options.system))?;
        let (advanced_class, skill_tree) = self.pick_advanced(system, &class_name);

        let gender = options.gender.unwrap_or_else(|| self.draw_gender());
        let named = match &options.species {
            SpeciesChoice::CrazyMix => {
                self.names
                    .compose(&NameMode::CrazyMix, gender, used, batch_size)
            }
            SpeciesChoice::Locked(species) => self.names.compose_for(
                species.clone(),
                gender,
                FallbackPolicy::SpeciesStrict,
                used,
                batch_size,
            ),
            SpeciesChoice::Random => {
                let species = sampler::pick(&mut self.names.rng, self.store.species.as_slice())
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string());
                self.names.compose_for(
                    species,
                    gender,
                    FallbackPolicy::CrossSpecies,
                    used,
                    batch_size,
                )
            }
        };

        let alignment = sampler::pick(&mut self.names.rng, &self.store.alignments)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let homeworld = sampler::pick(&mut self.names.rng, &self.store.planets)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let (stats, hitpoints) = self.roll_stats(system, class);
        let force_tier = self.roll_force_tier(&class_name, class);
        let lightsaber_color = if force_tier.wields_saber() {
            sampler::pick(
                &mut self.names.rng,
                self.store.force.colors_for(force_tier.as_str()),
            )
            .cloned()
        } else {
            None
        };
        let force_abilities = self.store.force.abilities_for(force_tier.as_str()).to_vec();

        debug!(
            name = %named.name,
            species = %named.species,
            class = %class_name,
            tier = %force_tier,
            "Generated character"
        );

        Ok(CharacterRecord {
            id: Uuid::new_v4(),
            name: named.name,
            species: named.species,
            gender: named.gender,
            structure: named.structure,
            system: options.system.clone(),
            faction,
            class: class_name,
            advanced_class,
            skill_tree,
            alignment,
            homeworld,
            stats,
            hitpoints,
            force_tier,
            force_abilities,
            lightsaber_color,
            equipment: class.equipment.clone(),
            icon: class.icon.clone(),
            is_canon: named.is_canon,
            is_famous_family: named.is_famous_family,
            is_cross_species: named.is_cross_species,
            cross_species_parts: named.cross_species_parts,
            portrait_url: None,
            portrait_error: None,
            created_at: Utc::now(),
        })
    }

    /// Uniform draw over the three genders, for records without a locked one.
    fn draw_gender(&mut self) -> Gender {
        match self.names.rng.gen_range(0..3) {
            0 => Gender::Male,
            1 => Gender::Female,
            _ => Gender::Neutral,
        }
    }

    /// Draw a faction and base class through the cascade, or a flat class
    /// for systems without one.
    fn pick_base_class(
        &mut self,
        system: &StatSystem,
    ) -> Result<(Option<String>, String), GenerationError> {
        if system.has_cascade() {
            let factions = system.faction_names();
            if let Some(faction) = sampler::pick(&mut self.names.rng, &factions) {
                let faction = faction.to_string();
                let base = system
                    .base_classes(&faction)
                    .and_then(|bases| sampler::pick(&mut self.names.rng, bases))
                    .cloned();
                if let Some(base) = base {
                    return Ok((Some(faction), base));
                }
            }
        }

        let classes = system.class_names();
        let class = sampler::pick(&mut self.names.rng, &classes)
            .map(|c| c.to_string())
            .ok_or_else(|| GenerationError::EmptyTable {
                table: "classes".to_string(),
            })?;
        Ok((None, class))
    }

    fn pick_advanced(
        &mut self,
        system: &StatSystem,
        base_class: &str,
    ) -> (Option<String>, Option<String>) {
        let Some(advanced) = system.advanced_classes(base_class) else {
            return (None, None);
        };
        let Some(choice) = sampler::pick(&mut self.names.rng, advanced) else {
            return (None, None);
        };
        let tree = sampler::pick(&mut self.names.rng, &choice.skill_trees).cloned();
        (Some(choice.name.clone()), tree)
    }

    /// Class base stats with a 0..3 jitter per stat, and the derived
    /// hitpoints where the system computes them from a rolled stat.
    fn roll_stats(
        &mut self,
        system: &StatSystem,
        class: &ClassDef,
    ) -> (IndexMap<String, i32>, Option<i32>) {
        let mut stats = IndexMap::with_capacity(class.base_stats.len());
        for (stat, base) in &class.base_stats {
            stats.insert(stat.clone(), base + self.names.rng.gen_range(0..3));
        }
        let hitpoints = system
            .hitpoints_from
            .as_deref()
            .and_then(|stat| stats.get(stat))
            .map(|value| value * 10);
        (stats, hitpoints)
    }

    fn roll_force_tier(&mut self, class_name: &str, class: &ClassDef) -> ForceTier {
        if class.force_user {
            return if class_name.contains("Sith") {
                ForceTier::Sith
            } else {
                ForceTier::Jedi
            };
        }
        let roll = self.names.rng.gen::<f32>();
        if roll < 0.05 {
            ForceTier::GrayJedi
        } else if roll < 0.15 {
            ForceTier::ForceSensitive
        } else {
            ForceTier::NonForceUser
        }
    }

    /// Reroll only the name, reusing the record's committed species and
    /// gender. Structure and canon flags follow the new name; every other
    /// field is untouched.
    pub fn reroll_name(&mut self, record: &mut CharacterRecord) {
        let mut used = UsedNames::new();
        let named = self.names.compose_for(
            record.species.clone(),
            record.gender,
            FallbackPolicy::CrossSpecies,
            &mut used,
            1,
        );
        debug!(old = %record.name, new = %named.name, "Rerolled name");
        record.name = named.name;
        record.structure = named.structure;
        record.is_canon = named.is_canon;
        record.is_famous_family = named.is_famous_family;
    }

    /// Reroll only the stat block (and derived hitpoints) for the record's
    /// committed class.
    pub fn reroll_stats(&mut self, record: &mut CharacterRecord) -> Result<(), GenerationError> {
        let system = self
            .store
            .stat_systems
            .get(&record.system)
            .ok_or_else(|| GenerationError::unknown_system(&record.system))?;
        let class = system
            .class(&record.class)
            .ok_or_else(|| GenerationError::unknown_class(&record.class, &record.system))?;
        let (stats, hitpoints) = self.roll_stats(system, class);
        record.stats = stats;
        record.hitpoints = hitpoints;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
