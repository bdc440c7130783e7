//! Record Export
//!
//! Serializes generated output for download and clipboard use:
//! - Lossless pretty-printed JSON, one record or a whole batch
//! - Download filenames derived from the character name
//! - Flattened text sheets and name lists for copying

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::character_gen::CharacterRecord;
use crate::core::errors::ExportError;
use crate::core::name_gen::GeneratedName;

/// Pretty-printed JSON document for one record.
pub fn to_json(record: &CharacterRecord) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Pretty-printed JSON array for a whole batch.
pub fn to_json_many(records: &[CharacterRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Download filename for a record: spaces in the name become underscores.
pub fn json_filename(name: &str) -> String {
    format!("{}.json", name.replace(' ', "_"))
}

/// Write one record into `dir`, named after the character.
pub fn write_json(dir: &Path, record: &CharacterRecord) -> Result<PathBuf, ExportError> {
    let path = dir.join(json_filename(&record.name));
    fs::write(&path, to_json(record)?).map_err(|e| ExportError::write_failed(&path, e))?;
    info!(path = %path.display(), "Wrote character sheet");
    Ok(path)
}

/// Write a whole batch to one JSON file at `path`.
pub fn write_json_many(path: &Path, records: &[CharacterRecord]) -> Result<(), ExportError> {
    fs::write(path, to_json_many(records)?).map_err(|e| ExportError::write_failed(path, e))?;
    info!(path = %path.display(), count = records.len(), "Wrote character batch");
    Ok(())
}

/// Flattened text sheet for clipboard copy.
///
/// Optional fields (faction, hitpoints, lightsaber) only appear when set,
/// so traditional-system sheets stay compact.
pub fn to_text(record: &CharacterRecord) -> String {
    let mut lines = Vec::new();

    let mut title = format!("Name: {}", record.name);
    if record.is_canon {
        title.push_str(" [canon]");
    }
    if record.is_famous_family {
        title.push_str(" [famous family]");
    }
    lines.push(title);

    lines.push(format!("Species: {}", record.species));
    lines.push(format!("Gender: {}", record.gender));
    if let Some(faction) = &record.faction {
        lines.push(format!("Faction: {}", faction));
    }
    lines.push(format!("Class: {}", record.class));
    if let Some(advanced) = &record.advanced_class {
        match &record.skill_tree {
            Some(tree) => lines.push(format!("Advanced Class: {} ({})", advanced, tree)),
            None => lines.push(format!("Advanced Class: {}", advanced)),
        }
    }
    lines.push(format!("Alignment: {}", record.alignment));
    lines.push(format!("Homeworld: {}", record.homeworld));

    lines.push("Stats:".to_string());
    for (stat, value) in &record.stats {
        lines.push(format!("  {}: {}", stat, value));
    }
    if let Some(hitpoints) = record.hitpoints {
        lines.push(format!("Hitpoints: {}", hitpoints));
    }

    lines.push(format!("Force Sensitivity: {}", record.force_tier));
    if let Some(color) = &record.lightsaber_color {
        lines.push(format!("Lightsaber Color: {}", color));
    }
    if !record.force_abilities.is_empty() {
        lines.push(format!(
            "Force Abilities: {}",
            record.force_abilities.join(", ")
        ));
    }
    if !record.equipment.is_empty() {
        lines.push(format!("Equipment: {}", record.equipment.join(", ")));
    }

    lines.join("\n")
}

/// Name list for clipboard copy: a `Name:`/`Gender:`/`Species:` block per
/// entry, blank line between entries.
pub fn names_to_text(names: &[GeneratedName]) -> String {
    names
        .iter()
        .map(|n| {
            let mut title = format!("Name: {}", n.name);
            if n.is_canon {
                title.push_str(" [canon]");
            }
            format!("{title}\nGender: {}\nSpecies: {}", n.gender, n.species)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ============================================================================
// Tests
// ============================================================================
