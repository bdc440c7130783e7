//! Property-based tests for the name composition system
//!
//! Tests invariants:
//! - Output is non-empty and tidy (no double spaces, no stray whitespace)
//! - Batch size is honored exactly
//! - Deterministic given same seed
//! - Structure flags agree with the final string
//! - Species-locked draws never borrow from other species
//! - Crazy-mix third-species borrowing stays rare

use proptest::prelude::*;

use crate::core::canon::UsedNames;
use crate::core::name_gen::{NameComposer, NameMode, NameStructure};
use crate::core::wordlists::Gender;
use crate::tests::common::create_full_store;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate an arbitrary Gender
fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![
        Just(Gender::Male),
        Just(Gender::Female),
        Just(Gender::Neutral),
    ]
}

/// Generate a fixture species, complete or not
fn arb_species() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Human/Common".to_string()),
        Just("Twi'lek".to_string()),
        Just("Rodian".to_string()),
        Just("Wookiee".to_string()),
        Just("Cerean".to_string()),
        Just("Gran".to_string()),
    ]
}

/// Generate an arbitrary NameMode over the fixture species
fn arb_mode() -> impl Strategy<Value = NameMode> {
    prop_oneof![
        Just(NameMode::RandomMix),
        Just(NameMode::CrazyMix),
        arb_species().prop_map(NameMode::Species),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Composed names are non-empty and tidy
    ///
    /// Whatever the mode, the final string never carries leading, trailing,
    /// or doubled whitespace, and only uses name-safe characters.
    #[test]
    fn prop_composed_names_are_tidy(
        seed in any::<u64>(),
        mode in arb_mode(),
        gender in arb_gender()
    ) {
        let store = create_full_store();
        let mut composer = NameComposer::with_seed(&store, seed);
        let mut used = UsedNames::new();
        let generated = composer.compose(&mode, gender, &mut used, 1);

        prop_assert!(!generated.name.is_empty());
        prop_assert_eq!(generated.name.trim(), generated.name.as_str());
        prop_assert!(
            !generated.name.contains("  "),
            "double space in '{}'",
            generated.name
        );
        for c in generated.name.chars() {
            prop_assert!(
                c.is_alphanumeric() || c == ' ' || c == '-' || c == '\'',
                "unexpected character {:?} in '{}'",
                c,
                generated.name
            );
        }
    }

    /// Property: A batch always yields exactly the requested number of names
    #[test]
    fn prop_batch_len_matches_count(
        seed in any::<u64>(),
        mode in arb_mode(),
        gender in arb_gender(),
        count in 0usize..=40
    ) {
        let store = create_full_store();
        let mut composer = NameComposer::with_seed(&store, seed);
        let mut used = UsedNames::new();
        let batch = composer.compose_batch(&mode, gender, count, &mut used);
        prop_assert_eq!(batch.len(), count);
    }

    /// Property: Composition is deterministic given the same seed
    #[test]
    fn prop_same_seed_reproduces_batches(
        seed in any::<u64>(),
        mode in arb_mode(),
        gender in arb_gender()
    ) {
        let store = create_full_store();
        let mut first_run = NameComposer::with_seed(&store, seed);
        let mut second_run = NameComposer::with_seed(&store, seed);
        let mut used_a = UsedNames::new();
        let mut used_b = UsedNames::new();

        let batch_a = first_run.compose_batch(&mode, gender, 10, &mut used_a);
        let batch_b = second_run.compose_batch(&mode, gender, 10, &mut used_b);

        for (left, right) in batch_a.iter().zip(&batch_b) {
            prop_assert_eq!(&left.name, &right.name);
            prop_assert_eq!(&left.species, &right.species);
            prop_assert_eq!(left.is_canon, right.is_canon);
        }
    }

    /// Property: Structure flags agree with the composed string
    ///
    /// Flags come from re-analyzing the final name, so they must be
    /// derivable from it: a middle name means more than two tokens, at most
    /// one hyphen flag is set, and a hyphen position is reported only for
    /// hyphenated last names.
    #[test]
    fn prop_structure_flags_track_final_string(
        seed in any::<u64>(),
        mode in arb_mode(),
        gender in arb_gender()
    ) {
        let store = create_full_store();
        let mut composer = NameComposer::with_seed(&store, seed);
        let mut used = UsedNames::new();
        let generated = composer.compose(&mode, gender, &mut used, 1);
        let structure = generated.structure;

        let tokens = generated.name.split(' ').count();
        prop_assert_eq!(structure.has_middle_name, tokens > 2);
        prop_assert!(!(structure.has_hyphenated_first && structure.has_hyphenated_last));
        prop_assert_eq!(
            structure.has_hyphenated_first || structure.has_hyphenated_last,
            generated.name.contains('-'),
            "flags disagree with '{}'",
            generated.name
        );
        prop_assert_eq!(
            structure.hyphen_position.is_some(),
            structure.has_hyphenated_last
        );
    }

    /// Property: Species-locked draws never borrow from other species
    #[test]
    fn prop_locked_draws_never_cross(
        seed in any::<u64>(),
        species in arb_species(),
        gender in arb_gender()
    ) {
        let store = create_full_store();
        let mut composer = NameComposer::with_seed(&store, seed);
        let mut used = UsedNames::new();
        let mode = NameMode::Species(species.clone());
        let generated = composer.compose(&mode, gender, &mut used, 1);

        prop_assert_eq!(&generated.species, &species);
        prop_assert!(!generated.is_cross_species);
        prop_assert_eq!(generated.cross_species_parts, 0);
        prop_assert_eq!(generated.involved_species, vec![species]);
    }

    /// Property: Incomplete species always keep the plain two-token form
    #[test]
    fn prop_incomplete_species_stay_plain(
        seed in any::<u64>(),
        gender in arb_gender()
    ) {
        let store = create_full_store();
        let mut composer = NameComposer::with_seed(&store, seed);
        let mut used = UsedNames::new();
        let mode = NameMode::Species("Gran".to_string());
        let generated = composer.compose(&mode, gender, &mut used, 1);

        prop_assert_eq!(generated.name.split(' ').count(), 2);
        prop_assert_eq!(generated.structure, NameStructure::default());
    }

    /// Property: Crazy-mix third-species borrowing happens but stays rare
    ///
    /// Only the bottom rungs of the crazy ladder pull in a third species, so
    /// names borrowing from two or more extra species show up in any large
    /// sample yet stay well under half of it.
    #[test]
    fn prop_crazy_third_species_borrowing_is_rare(seed in any::<u64>()) {
        let store = create_full_store();
        let mut composer = NameComposer::with_seed(&store, seed);
        let mut used = UsedNames::new();

        let draws = 300;
        let mut heavy = 0usize;
        for _ in 0..draws {
            let generated = composer.compose(&NameMode::CrazyMix, Gender::Male, &mut used, 1);
            prop_assert!(generated.cross_species_parts <= 2);
            if generated.cross_species_parts >= 2 {
                heavy += 1;
            }
        }
        let fraction = heavy as f64 / draws as f64;
        prop_assert!(heavy > 0, "no third-species borrowing in {} draws", draws);
        prop_assert!(fraction < 0.40, "third-species fraction {fraction}");
    }
}
