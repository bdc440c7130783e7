//! Unit Tests
//!
//! Behavior tests that cross module boundaries.
//!
//! ## Test Coverage
//!
//! ### Canon registry (`canon_tests`)
//! - Literal and wildcard matching matrices
//! - Species fallback order and composite species
//! - Substitution pool gender and used-name filtering
//!
//! ### Name composition (`name_gen_tests`)
//! - Incomplete species degrading to the plain form and sentinels
//! - Neutral gender resolution drawing from both first-name lists
//! - Canon substitution honoring declared genders
//! - Hyphenated source fragments versus structural hyphens
//!
//! ### Character generation (`character_gen_tests`)
//! - Cascade and flat systems from one fixture store
//! - Record serialization (tier and gender labels)
//! - Reroll contracts on crazy-mix records
//!
//! ### Data store loading (`store_tests`)
//! - Full directory loads and per-table degradation
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test tests::unit
//! cargo test tests::unit::canon_tests
//! ```

mod canon_tests;
mod character_gen_tests;
