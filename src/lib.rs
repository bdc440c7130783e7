/// Holocron - Star Wars character and name generator
///
/// Core library providing word-list storage, weighted name composition,
/// canon-name detection, and character-sheet generation for tabletop
/// adventures.

pub mod cli;
pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
