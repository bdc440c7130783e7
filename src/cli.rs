//! Command-Line Interface
//!
//! Three operations over one loaded data store:
//! - `names`: batches of generated names (species-locked, random mix, or
//!   crazy mix)
//! - `character`: full character sheets with stats, Force tier, and
//!   equipment, optionally written to JSON files
//! - `species`: the species catalog and known stat systems
//!
//! Generated output goes to stdout; warnings and status lines go to
//! stderr so piped output stays clean.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use miette::IntoDiagnostic;

use crate::config::AppConfig;
use crate::core::canon::UsedNames;
use crate::core::character_gen::{CharacterComposer, GenerationOptions, SpeciesChoice};
use crate::core::export;
use crate::core::logging::{self, RichText};
use crate::core::name_gen::{GeneratedName, NameComposer, NameMode};
use crate::core::portrait::PortraitClient;
use crate::core::store::DataStore;
use crate::core::wordlists::Gender;

/// Largest batch one invocation will produce.
pub const MAX_COUNT: usize = 100;

#[derive(Parser, Debug)]
#[command(name = "holocron", version)]
#[command(about = "Star Wars character and name generator for tabletop adventures")]
pub struct Cli {
    /// Directory holding the word-list and table JSON files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Random seed (uses a random seed if not specified)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a batch of names
    Names {
        /// Species to draw from; "random" picks one per name, "crazy"
        /// blends fragments across species
        #[arg(short, long, default_value = "random")]
        species: String,

        /// Gender for first-name selection
        #[arg(short, long, value_enum, default_value_t = GenderArg::Male)]
        gender: GenderArg,

        /// How many names to generate
        #[arg(short, long)]
        count: Option<usize>,

        /// Emit JSON instead of styled text
        #[arg(long)]
        json: bool,
    },

    /// Generate full character sheets
    Character {
        /// Stat system (e.g. traditional, swtor)
        #[arg(long)]
        system: Option<String>,

        /// Species; "random" draws one, "crazy" blends several
        #[arg(short, long, default_value = "random")]
        species: String,

        /// Lock the gender instead of drawing one per sheet
        #[arg(short, long, value_enum)]
        gender: Option<GenderArg>,

        /// Lock the class instead of drawing one
        #[arg(long)]
        class: Option<String>,

        /// How many sheets to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Emit JSON instead of styled sheets
        #[arg(long)]
        json: bool,

        /// Write each sheet as a JSON file into this directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Request an AI portrait for each sheet (service currently disabled)
        #[arg(long)]
        portrait: bool,
    },

    /// List the species catalog and stat systems
    Species,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderArg {
    Male,
    Female,
    /// Coin-flip between the gendered first-name lists per name
    #[value(alias = "other")]
    Neutral,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Neutral => Gender::Neutral,
        }
    }
}

/// Dispatch a parsed invocation.
pub fn run(cli: Cli, config: &AppConfig) -> miette::Result<()> {
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data_dir());
    let store = DataStore::load(&data_dir).into_diagnostic()?;

    match cli.command {
        Command::Names {
            species,
            gender,
            count,
            json,
        } => {
            let count = clamp_count(count.unwrap_or(config.generator.default_count));
            run_names(&store, cli.seed, &species, gender.into(), count, json)
        }
        Command::Character {
            system,
            species,
            gender,
            class,
            count,
            json,
            out,
            portrait,
        } => {
            let options = GenerationOptions {
                system: system.unwrap_or_else(|| config.generator.default_system.clone()),
                species: species_choice(&store, &species),
                gender: gender.map(Into::into),
                class,
            };
            let count = clamp_count(count);
            run_character(&store, cli.seed, &options, count, json, out, portrait)
        }
        Command::Species => run_species(&store),
    }
}

// ============================================================================
// Subcommand Runners
// ============================================================================

fn run_names(
    store: &DataStore,
    seed: Option<u64>,
    species: &str,
    gender: Gender,
    count: usize,
    json: bool,
) -> miette::Result<()> {
    let mode = name_mode(store, species);
    if let NameMode::Species(key) = &mode {
        if !store.male_first.has_entries(key) && !store.female_first.has_entries(key) {
            logging::print_warning(&format!(
                "No name lists for species {key:?}, output degrades to Unknown"
            ));
        }
    }

    let mut composer = match seed {
        Some(seed) => NameComposer::with_seed(store, seed),
        None => NameComposer::new(store),
    };
    let mut used = UsedNames::new();
    let names = composer.compose_batch(&mode, gender, count, &mut used);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&names).into_diagnostic()?
        );
        return Ok(());
    }
    for name in &names {
        println!("{}", render_name_line(name));
    }
    Ok(())
}

fn run_character(
    store: &DataStore,
    seed: Option<u64>,
    options: &GenerationOptions,
    count: usize,
    json: bool,
    out: Option<PathBuf>,
    portrait: bool,
) -> miette::Result<()> {
    let mut composer = match seed {
        Some(seed) => CharacterComposer::with_seed(store, seed),
        None => CharacterComposer::new(store),
    };
    let mut records = composer.generate_batch(options, count).into_diagnostic()?;

    if portrait {
        let client = PortraitClient::new();
        for record in &mut records {
            client.apply(record);
            if let Some(err) = &record.portrait_error {
                logging::print_warning(err);
            }
        }
    }

    if json {
        println!("{}", export::to_json_many(&records).into_diagnostic()?);
    } else {
        for record in &records {
            logging::print_panel(&record.name, &export::to_text(record));
        }
    }

    if let Some(dir) = out {
        std::fs::create_dir_all(&dir).into_diagnostic()?;
        for record in &records {
            let path = export::write_json(&dir, record).into_diagnostic()?;
            logging::print_success(&format!("Wrote {}", path.display()));
        }
    }
    Ok(())
}

fn run_species(store: &DataStore) -> miette::Result<()> {
    // Alphabetical for reading; the catalog itself keeps file order.
    let mut listed: Vec<&String> = store.species.as_slice().iter().collect();
    listed.sort();
    for species in listed {
        if store.is_complete(species) {
            println!("{}", species);
        } else {
            println!("{} {}", species, style("(partial name lists)").dim());
        }
    }
    println!();
    println!("Stat systems: {}", store.stat_systems.names().join(", "));
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn clamp_count(requested: usize) -> usize {
    let clamped = requested.clamp(1, MAX_COUNT);
    if clamped != requested {
        logging::print_warning(&format!(
            "Count {requested} out of range, using {clamped}"
        ));
    }
    clamped
}

fn name_mode(store: &DataStore, raw: &str) -> NameMode {
    match raw.to_ascii_lowercase().as_str() {
        "random" => NameMode::RandomMix,
        "crazy" | "crazy-mix" => NameMode::CrazyMix,
        _ => NameMode::Species(resolve_species_key(store, raw)),
    }
}

fn species_choice(store: &DataStore, raw: &str) -> SpeciesChoice {
    match raw.to_ascii_lowercase().as_str() {
        "random" => SpeciesChoice::Random,
        "crazy" | "crazy-mix" => SpeciesChoice::CrazyMix,
        _ => SpeciesChoice::Locked(resolve_species_key(store, raw)),
    }
}

/// Match a species argument against the catalog without case sensitivity,
/// keeping the caller's spelling when nothing matches.
fn resolve_species_key(store: &DataStore, raw: &str) -> String {
    store
        .species
        .as_slice()
        .iter()
        .find(|s| s.eq_ignore_ascii_case(raw))
        .cloned()
        .unwrap_or_else(|| raw.to_string())
}

fn render_name_line(name: &GeneratedName) -> String {
    let mut line = RichText::new()
        .bold(&name.name)
        .text(" ")
        .muted(&format!("({})", name.species));
    if name.is_canon {
        line = line.text(" ").warning("[canon]");
    } else if name.is_famous_family {
        line = line.text(" ").warning("[famous family]");
    }
    if name.is_cross_species {
        line = line.text(" ").muted("[cross-species]");
    }
    line.build()
}

// ============================================================================
// Tests
// ============================================================================
