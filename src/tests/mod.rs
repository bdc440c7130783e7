//! Test Suite
//!
//! Cross-module tests for the generator, organized the same way the code is:
//!
//! - `common`: shared fixtures (in-memory data stores, seeded data
//!   directories)
//! - `unit`: behavior tests that cross module boundaries (composer against
//!   store, canon matrices, disk loading)
//! - `property`: proptest invariants over seeds and modes
//!
//! Single-module tests live in `#[cfg(test)]` blocks next to the code they
//! cover; everything here needs more than one module to be interesting.
//!
//! ## Running Tests
//!
//! ```sh
//! # Everything
//! cargo test
//!
//! # One layer
//! cargo test tests::unit
//! cargo test tests::property
//! ```

pub mod common;

mod property;
mod unit;
