//! Name Generation
//!
//! Composes character names from species word lists:
//! - Three modes: species-locked, random-mix (one random species per name),
//!   and crazy-mix (up to three species per name)
//! - Weighted structural templates (middle names, hyphenated segments)
//! - Canon-name substitution with batch-scaled probability and used-name
//!   tracking threaded through each call
//! - Canon and famous-family detection on every composed name
//! - Structure analysis of the final string for badge labeling
//!
//! All randomness flows through one seedable generator per composer, so a
//! fixed seed reproduces an entire batch.

pub mod templates;

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::canon::UsedNames;
use crate::core::sampler::{self, FallbackPolicy};
use crate::core::store::DataStore;
use crate::core::wordlists::{Gender, WordList, FALLBACK_SPECIES, UNKNOWN_NAME};

use templates::{CrazyParts, CrazyTemplate, NameParts, NameTemplate};

// ============================================================================
// Modes
// ============================================================================

/// How species are chosen during composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMode {
    /// All fragments drawn from one caller-fixed species, no cross-species
    /// fallback.
    Species(String),
    /// One species drawn per name and held fixed across its fragments.
    RandomMix,
    /// Up to three species mixed within a single name.
    CrazyMix,
}

impl fmt::Display for NameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Species(species) => write!(f, "{species}"),
            Self::RandomMix => write!(f, "random mix"),
            Self::CrazyMix => write!(f, "crazy mix"),
        }
    }
}

// ============================================================================
// Name Structure
// ============================================================================

/// Where the foreign half of a hyphenated last name sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HyphenPosition {
    Prefix,
    Suffix,
    Unknown,
}

/// Structural elements detected in a composed name.
///
/// Derived from the final string rather than the chosen template, so canon
/// substitutions and degraded draws are labeled the same way as ladder
/// output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameStructure {
    pub has_middle_name: bool,
    pub has_hyphenated_first: bool,
    pub has_hyphenated_last: bool,
    /// Set only for hyphenated last names.
    pub hyphen_position: Option<HyphenPosition>,
}

impl NameStructure {
    /// Analyze a full name. `base_last` is the last-name fragment the
    /// composer drew, used to tell a hyphen suffix from a prefix; without it
    /// (or with a sentinel) the position is reported as unknown.
    pub fn from_name(full: &str, base_last: Option<&str>) -> Self {
        let mut structure = Self::default();
        let tokens: Vec<&str> = full.split(' ').collect();

        if tokens.len() > 2 {
            structure.has_middle_name = true;
        }

        if let Some(pos) = tokens.iter().position(|t| t.contains('-')) {
            if pos == tokens.len() - 1 {
                structure.has_hyphenated_last = true;
                let leading_half = tokens[pos].split('-').next().unwrap_or("");
                structure.hyphen_position = Some(match base_last {
                    Some(base) if base != UNKNOWN_NAME => {
                        if base.contains(leading_half) {
                            HyphenPosition::Suffix
                        } else {
                            HyphenPosition::Prefix
                        }
                    }
                    _ => HyphenPosition::Unknown,
                });
            } else {
                structure.has_hyphenated_first = true;
            }
        }

        structure
    }
}

// ============================================================================
// Generated Name
// ============================================================================

/// One composed name with its detection flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub name: String,
    /// Species label; a composite like "Wookiee/Rodian" in crazy mode.
    pub species: String,
    /// The gender as requested, not as resolved for list selection.
    pub gender: Gender,
    pub structure: NameStructure,
    pub is_canon: bool,
    pub is_famous_family: bool,
    /// True when fragments came from more than one species.
    pub is_cross_species: bool,
    /// Distinct species borrowed from beyond the first-name species.
    pub cross_species_parts: usize,
    /// Distinct contributing species in draw order.
    pub involved_species: Vec<String>,
}

// ============================================================================
// Composer
// ============================================================================

/// Canon substitution probability for a batch of `batch_size` names.
///
/// 5% for small batches, scaled down to a 1% floor for large ones so canon
/// names stay rare in bulk output.
pub fn canon_override_chance(batch_size: usize) -> f32 {
    let quantity = batch_size.max(20) as f32;
    (0.05 * 20.0 / quantity).clamp(0.01, 0.05)
}

fn exact_draw(rng: &mut StdRng, list: &WordList, species: &str) -> Option<String> {
    let entries = list.get(species)?;
    sampler::pick(rng, entries)
        .cloned()
        .filter(|s| !s.is_empty())
}

/// Composes names against a data store with one owned random stream.
pub struct NameComposer<'a> {
    store: &'a DataStore,
    pub(crate) rng: StdRng,
}

impl<'a> NameComposer<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self {
            store,
            rng: StdRng::from_entropy(),
        }
    }

    /// A composer with a fixed seed, for reproducible batches.
    pub fn with_seed(store: &'a DataStore, seed: u64) -> Self {
        Self {
            store,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Compose one name.
    ///
    /// `used` carries canon names already emitted this batch and is updated
    /// in place when a substitution fires. `batch_size` only scales the
    /// substitution probability.
    pub fn compose(
        &mut self,
        mode: &NameMode,
        gender: Gender,
        used: &mut UsedNames,
        batch_size: usize,
    ) -> GeneratedName {
        match mode {
            NameMode::CrazyMix => self.compose_crazy(gender),
            NameMode::Species(species) => self.compose_for(
                species.clone(),
                gender,
                FallbackPolicy::SpeciesStrict,
                used,
                batch_size,
            ),
            NameMode::RandomMix => {
                let species = sampler::pick(&mut self.rng, self.store.species.as_slice())
                    .cloned()
                    .unwrap_or_else(|| FALLBACK_SPECIES.to_string());
                self.compose_for(species, gender, FallbackPolicy::CrossSpecies, used, batch_size)
            }
        }
    }

    /// Compose `count` names, threading the used-name set across the batch.
    ///
    /// Callers may hold `used` across batches; large batches start from a
    /// cleared set so accumulated entries cannot starve canon substitution.
    pub fn compose_batch(
        &mut self,
        mode: &NameMode,
        gender: Gender,
        count: usize,
        used: &mut UsedNames,
    ) -> Vec<GeneratedName> {
        if count > 50 {
            used.clear();
        }
        let mut names = Vec::with_capacity(count);
        for _ in 0..count {
            names.push(self.compose(mode, gender, used, count));
        }
        names
    }

    /// Neutral requests resolve to a coin-flipped concrete gender for list
    /// selection; male and female pass through.
    fn resolve_gender(&mut self, requested: Gender) -> Gender {
        match requested {
            Gender::Neutral => {
                if self.rng.gen::<bool>() {
                    Gender::Male
                } else {
                    Gender::Female
                }
            }
            concrete => concrete,
        }
    }

    /// Compose one name for a caller-fixed species under an explicit
    /// fallback policy. The character composer uses this directly so a
    /// record's species and its name always agree.
    pub fn compose_for(
        &mut self,
        species: String,
        requested: Gender,
        policy: FallbackPolicy,
        used: &mut UsedNames,
        batch_size: usize,
    ) -> GeneratedName {
        let resolved = self.resolve_gender(requested);
        // Canon substitution happens before any fragment is drawn. The roll
        // is consumed even when the pool turns out empty.
        let canon_roll = self.rng.gen::<f32>();
        if canon_roll < canon_override_chance(batch_size) {
            let pool = self.store.canon.substitution_pool(
                &species,
                used,
                &self.store.canon_genders,
                requested,
            );
            if let Some(name) = sampler::pick(&mut self.rng, &pool).map(|n| n.to_string()) {
                used.insert(name.clone());
                debug!(name = %name, species = %species, "Substituted canon name");
                let structure = NameStructure::from_name(&name, None);
                return GeneratedName {
                    name,
                    species: species.clone(),
                    gender: requested,
                    structure,
                    is_canon: true,
                    is_famous_family: false,
                    is_cross_species: false,
                    cross_species_parts: 0,
                    involved_species: vec![species],
                };
            }
        }

        let first = sampler::name_for(
            &mut self.rng,
            self.store.first_names(resolved),
            &species,
            policy,
        );
        let last = sampler::name_for(&mut self.rng, &self.store.last, &species, policy);

        // Complex structures need the species present in all four lists;
        // anything less always yields the plain form.
        let (full, base_last) = if self.store.is_complete(&species) {
            let roll = self.rng.gen::<f32>();
            let other = exact_draw(&mut self.rng, &self.store.neutral, &species);
            let middle = exact_draw(&mut self.rng, &self.store.neutral, &species);
            let last2 = exact_draw(&mut self.rng, &self.store.last, &species);
            let first2 = exact_draw(&mut self.rng, self.store.first_names(resolved), &species);
            let base_last = last.clone();
            let parts = NameParts {
                first,
                last,
                middle,
                other,
                first2,
                last2,
            };
            let template = templates::select(templates::STANDARD_LADDER, roll, NameTemplate::Plain);
            let full = template.render(&parts).unwrap_or_else(|| parts.plain());
            (full, base_last)
        } else {
            let full = format!("{first} {last}");
            (full, last)
        };

        let is_canon = self.store.canon.is_canon(&full, &species);
        let is_famous_family = !is_canon && self.store.canon.is_famous_family(&full, &species);
        let structure = NameStructure::from_name(&full, Some(&base_last));

        GeneratedName {
            name: full,
            species: species.clone(),
            gender: requested,
            structure,
            is_canon,
            is_famous_family,
            is_cross_species: false,
            cross_species_parts: 0,
            involved_species: vec![species],
        }
    }

    fn compose_crazy(&mut self, requested: Gender) -> GeneratedName {
        let resolved = self.resolve_gender(requested);
        let catalog = self.store.species.as_slice();
        let sp_first = sampler::pick(&mut self.rng, catalog)
            .cloned()
            .unwrap_or_else(|| FALLBACK_SPECIES.to_string());
        let sp_last = sampler::pick(&mut self.rng, catalog)
            .cloned()
            .unwrap_or_else(|| FALLBACK_SPECIES.to_string());
        let sp_third = sampler::pick(&mut self.rng, catalog)
            .cloned()
            .unwrap_or_else(|| FALLBACK_SPECIES.to_string());

        let first = sampler::name_for(
            &mut self.rng,
            self.store.first_names(resolved),
            &sp_first,
            FallbackPolicy::CrossSpecies,
        );
        let last = sampler::name_for(
            &mut self.rng,
            &self.store.last,
            &sp_last,
            FallbackPolicy::CrossSpecies,
        );

        let roll = self.rng.gen::<f32>();
        let third = exact_draw(&mut self.rng, &self.store.neutral, &sp_third);
        let first_other = exact_draw(&mut self.rng, &self.store.neutral, &sp_first);
        let last_other = exact_draw(&mut self.rng, &self.store.neutral, &sp_last);
        let last2 = exact_draw(&mut self.rng, &self.store.last, &sp_last);
        let first2 = exact_draw(&mut self.rng, self.store.first_names(resolved), &sp_first);
        let hyphen_on_last = self.rng.gen::<bool>();

        let base_last = last.clone();
        let parts = CrazyParts {
            first,
            last,
            third,
            first_other,
            last_other,
            first2,
            last2,
        };

        let template = templates::select(templates::CRAZY_LADDER, roll, CrazyTemplate::Plain);
        let rendered = template.render(&parts, hyphen_on_last);
        let third_joined = rendered.is_some() && template.uses_third_species();
        let full = rendered.unwrap_or_else(|| parts.plain());

        let mut involved = vec![sp_first];
        if !involved.contains(&sp_last) {
            involved.push(sp_last);
        }
        if third_joined && !involved.contains(&sp_third) {
            involved.push(sp_third);
        }

        // Borrowed species beyond the one the first name came from.
        let cross_species_parts = involved.len().saturating_sub(1);
        let species = involved.join("/");
        let structure = NameStructure::from_name(&full, Some(&base_last));

        debug!(name = %full, species = %species, "Composed crazy name");

        GeneratedName {
            name: full,
            species,
            gender: requested,
            structure,
            is_canon: false,
            is_famous_family: false,
            is_cross_species: cross_species_parts >= 1,
            cross_species_parts,
            involved_species: involved,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
