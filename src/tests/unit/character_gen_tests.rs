//! Character Sheet Tests
//!
//! Full-sheet generation against the shared fixture store:
//! - Flat systems leave every cascade field empty; cascade systems fill
//!   them all consistently
//! - Records serialize with the display-form tier labels and lowercase
//!   gender labels the export surfaces expect
//! - Partial rerolls respect the committed species of crazy-mix composites

use crate::core::character_gen::{
    CharacterComposer, ForceTier, GenerationOptions, SpeciesChoice, DEFAULT_SYSTEM,
};
use crate::core::wordlists::Gender;
use crate::tests::common::create_full_store;

fn options(system: &str, species: SpeciesChoice, gender: Gender) -> GenerationOptions {
    GenerationOptions {
        system: system.to_string(),
        species,
        gender: Some(gender),
        class: None,
    }
}

// ============================================================================
// Flat Versus Cascade Systems
// ============================================================================

#[test]
fn test_flat_system_leaves_cascade_fields_empty() {
    let store = create_full_store();
    let mut composer = CharacterComposer::with_seed(&store, 41);
    let opts = options(DEFAULT_SYSTEM, SpeciesChoice::Random, Gender::Neutral);

    for _ in 0..30 {
        let record = composer.generate(&opts).unwrap();
        assert!(record.faction.is_none());
        assert!(record.advanced_class.is_none());
        assert!(record.skill_tree.is_none());
        assert!(record.hitpoints.is_none());
        assert!(["Jedi", "Sith", "Smuggler"].contains(&record.class.as_str()));
        assert!(store.alignments.contains(&record.alignment));
        assert!(store.planets.contains(&record.homeworld));
        assert_eq!(record.stats.len(), 3);
        assert!(record.stats.contains_key("dexterity"));
    }
}

#[test]
fn test_cascade_system_fills_every_field() {
    let store = create_full_store();
    let mut composer = CharacterComposer::with_seed(&store, 42);
    let opts = options("swtor", SpeciesChoice::Random, Gender::Neutral);
    let system = store.stat_systems.get("swtor").unwrap();

    for _ in 0..30 {
        let record = composer.generate(&opts).unwrap();

        let faction = record.faction.as_deref().expect("faction");
        assert!(["Galactic Republic", "Sith Empire"].contains(&faction));
        assert!(system.base_classes(faction).unwrap().contains(&record.class));

        let advanced = record.advanced_class.as_deref().expect("advanced class");
        let def = system
            .advanced_classes(&record.class)
            .unwrap()
            .iter()
            .find(|d| d.name == advanced)
            .expect("known advanced class");
        let tree = record.skill_tree.as_deref().expect("skill tree");
        assert!(def.skill_trees.iter().any(|t| t == tree));
        if record.class == "Jedi Knight" {
            assert!(!def.description.is_empty());
        }

        assert_eq!(record.hitpoints, Some(record.stats["endurance"] * 10));
    }
}

// ============================================================================
// Serialization Labels
// ============================================================================

#[test]
fn test_sith_records_serialize_with_display_labels() {
    let store = create_full_store();
    let mut composer = CharacterComposer::with_seed(&store, 43);
    let opts = GenerationOptions {
        system: "swtor".to_string(),
        species: SpeciesChoice::Locked("Wookiee".to_string()),
        gender: Some(Gender::Female),
        class: Some("Sith Warrior".to_string()),
    };

    let record = composer.generate(&opts).unwrap();
    assert_eq!(record.force_tier, ForceTier::Sith);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["force_tier"], "Sith");
    assert_eq!(json["gender"], "female");
    assert_eq!(json["species"], "Wookiee");
    assert_eq!(json["faction"], "Sith Empire");
    assert!(json["structure"]["has_hyphenated_first"].is_boolean());
    assert!(json["id"].is_string());
    assert!(json["created_at"].is_string());
}

#[test]
fn test_renamed_tiers_serialize_with_spaces() {
    let store = create_full_store();
    let mut composer = CharacterComposer::with_seed(&store, 44);
    let opts = GenerationOptions {
        system: "swtor".to_string(),
        species: SpeciesChoice::Random,
        gender: Some(Gender::Male),
        class: Some("Trooper".to_string()),
    };

    let mut saw_plain = false;
    for _ in 0..50 {
        let record = composer.generate(&opts).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        match record.force_tier {
            ForceTier::NonForceUser => {
                assert_eq!(json["force_tier"], "Non-Force User");
                assert!(record.force_abilities.is_empty());
                saw_plain = true;
            }
            ForceTier::GrayJedi => assert_eq!(json["force_tier"], "Gray Jedi"),
            ForceTier::ForceSensitive => assert_eq!(json["force_tier"], "Force Sensitive"),
            tier => panic!("trooper rolled {tier}"),
        }
    }
    assert!(saw_plain, "50 troopers without a plain tier");
}

// ============================================================================
// Rerolls On Composites
// ============================================================================

#[test]
fn test_reroll_name_keeps_composite_species_label() {
    let store = create_full_store();
    let mut composer = CharacterComposer::with_seed(&store, 45);
    let opts = options(DEFAULT_SYSTEM, SpeciesChoice::CrazyMix, Gender::Male);

    let mut record = loop {
        let candidate = composer.generate(&opts).unwrap();
        if candidate.cross_species_parts >= 1 {
            break candidate;
        }
    };
    assert!(record.species.contains('/'), "{}", record.species);
    let before = record.clone();

    composer.reroll_name(&mut record);

    assert_eq!(record.species, before.species);
    assert_eq!(record.gender, before.gender);
    assert_eq!(record.is_cross_species, before.is_cross_species);
    assert_eq!(record.cross_species_parts, before.cross_species_parts);
    assert_eq!(record.class, before.class);
    assert_eq!(record.stats, before.stats);
    assert_eq!(record.id, before.id);
    assert!(!record.name.is_empty());
}

#[test]
fn test_batch_of_zero_is_empty() {
    let store = create_full_store();
    let mut composer = CharacterComposer::with_seed(&store, 46);
    let opts = options(DEFAULT_SYSTEM, SpeciesChoice::Random, Gender::Neutral);
    let records = composer.generate_batch(&opts, 0).unwrap();
    assert!(records.is_empty());
}
