//! Property-based tests for the holocron generators
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! Run all property tests:
//! ```sh
//! cargo test property --release
//! ```
//!
//! Run a specific property test module:
//! ```sh
//! cargo test property::name_props --release
//! ```
//!
//! ## Test Modules
//!
//! - `name_props`: Tests for the name composition system
//!   - Output is non-empty and tidy (no double spaces, no stray whitespace)
//!   - Batch size is honored exactly
//!   - Deterministic given same seed
//!   - Structure flags agree with the final string
//!   - Species-locked draws never borrow from other species
//!   - Crazy-mix third-species borrowing stays rare
//!
//! - `character_props`: Tests for character sheet generation
//!   - Generation succeeds for every known system and option combination
//!   - Stat rolls stay within the class jitter window
//!   - Lightsabers appear exactly for saber-wielding tiers
//!   - Faction cascade fields are all-or-nothing per system
//!
//! ## Property Testing Philosophy
//!
//! Property-based testing helps find edge cases that manual test cases might
//! miss. The proptest framework will:
//!
//! 1. Generate random inputs based on defined strategies
//! 2. Test each property with many different inputs
//! 3. If a failure is found, shrink the input to find the minimal failing case
//! 4. Store failing cases in a regression file for future testing
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod character_props;
mod name_props;
