//! Common Test Utilities
//!
//! Shared test helpers and fixtures used across test modules:
//! - In-memory data store builders (`fixtures`)
//! - Disk-backed data directory seeding for loader tests


pub use fixtures::*;
