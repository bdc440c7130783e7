//! Uniform Sampling With Species Fallback
//!
//! Thin selection layer between the word-list tables and the composers.
//! `pick` is the only primitive; `name_for` layers the species fallback chain
//! on top of it so every fragment kind (first, last, neutral) resolves the
//! same way and composite names never skew toward one species at a single
//! position.

use rand::seq::SliceRandom;
use rand::Rng;

use super::wordlists::{WordList, FALLBACK_SPECIES, UNKNOWN_NAME};

/// How `name_for` behaves when the requested species has no usable entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Species-locked generation: never borrow another species' names.
    /// Exhausted lookups resolve to the `"Unknown"` sentinel.
    SpeciesStrict,
    /// Mixed-mode generation: fall back to `"Human/Common"`, then to the
    /// first non-empty species, then to the sentinel.
    CrossSpecies,
}

/// Uniformly random element of `items`, or `None` when empty.
pub fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Random fragment for `species` from `list`, resolved through the fallback
/// chain dictated by `policy`. Always returns a usable string; the sentinel
/// `"Unknown"` marks an exhausted chain and is never an error.
pub fn name_for(
    rng: &mut impl Rng,
    list: &WordList,
    species: &str,
    policy: FallbackPolicy,
) -> String {
    if let Some(entries) = list.lookup(species) {
        if let Some(name) = pick(rng, entries) {
            return name.clone();
        }
    }

    if policy == FallbackPolicy::SpeciesStrict {
        return UNKNOWN_NAME.to_string();
    }

    if species != FALLBACK_SPECIES {
        if let Some(entries) = list.lookup(FALLBACK_SPECIES) {
            if let Some(name) = pick(rng, entries) {
                return name.clone();
            }
        }
    }

    if let Some((_, entries)) = list.first_non_empty() {
        if let Some(name) = pick(rng, entries) {
            return name.clone();
        }
    }

    UNKNOWN_NAME.to_string()
}
