//! Generator Error Types
//!
//! Defines error types for data loading, generation, export, and the portrait
//! service contract. Uses thiserror for ergonomic error handling with rich
//! context fields.
//!
//! Failures in this domain are contained to the smallest unit possible: a
//! missing species resolves through the fallback chain, an exhausted chain
//! resolves to a sentinel, and a failed record never aborts a batch. The
//! `is_recoverable` predicates encode which variants the composers absorb.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Data Store Errors
// ============================================================================

/// Errors that can occur while loading the JSON data tables.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Table file not found.
    #[error("Data file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read a table file.
    #[error("Failed to read data file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a table file as JSON.
    #[error("Failed to parse table '{table}' from {path}: {source}")]
    ParseFailed {
        table: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The data directory itself is missing.
    #[error("Data directory not found: {path}")]
    DataDirMissing { path: PathBuf },
}

impl StoreError {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a ReadFailed error.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a ParseFailed error.
    pub fn parse_failed(
        table: impl Into<String>,
        path: impl Into<PathBuf>,
        source: serde_json::Error,
    ) -> Self {
        Self::ParseFailed {
            table: table.into(),
            path: path.into(),
            source,
        }
    }

    /// Check if this error is recoverable (loader quietly degrades to an
    /// empty table). A missing data directory aborts loading outright.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ============================================================================
// Generation Errors
// ============================================================================

/// Errors that can occur during name or character generation.
///
/// Most variants are recoverable by design: the composers resolve them to
/// sentinel values and keep the batch going.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Requested species absent from a word-list table.
    #[error("Species '{species}' not present in the {table} table")]
    SpeciesNotFound { species: String, table: String },

    /// A word-list entry exists but holds no fragments.
    #[error("Word list '{table}' has no entries for species '{species}'")]
    EmptyWordList { species: String, table: String },

    /// Requested stat system is not defined in the class tables.
    #[error("Unknown stat system '{system}'")]
    UnknownSystem { system: String },

    /// Requested class is not defined for the stat system.
    #[error("Class '{class}' not defined for stat system '{system}'")]
    UnknownClass { class: String, system: String },

    /// A selection table (alignments, planets, colors) is empty.
    #[error("Selection table '{table}' is empty")]
    EmptyTable { table: String },
}

impl GenerationError {
    /// Create a SpeciesNotFound error.
    pub fn species_not_found(species: impl Into<String>, table: impl Into<String>) -> Self {
        Self::SpeciesNotFound {
            species: species.into(),
            table: table.into(),
        }
    }

    /// Create an UnknownSystem error.
    pub fn unknown_system(system: impl Into<String>) -> Self {
        Self::UnknownSystem {
            system: system.into(),
        }
    }

    /// Create an UnknownClass error.
    pub fn unknown_class(class: impl Into<String>, system: impl Into<String>) -> Self {
        Self::UnknownClass {
            class: class.into(),
            system: system.into(),
        }
    }

    /// Check if this error is recoverable (composer degrades to sentinels).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::SpeciesNotFound { .. } | Self::EmptyWordList { .. } | Self::EmptyTable { .. }
        )
    }
}

// ============================================================================
// Portrait Service Errors
// ============================================================================

/// Errors from the (currently disabled) portrait generation service.
///
/// All variants are recoverable: a failed portrait falls back to the class
/// icon glyph and a copyable error message, never interrupting generation.
#[derive(Error, Debug)]
pub enum PortraitError {
    /// The service is hard-disabled and made no outbound call.
    #[error("AI portrait generation is temporarily disabled")]
    Disabled,

    /// The request exceeded the fixed deadline.
    #[error("Portrait request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The upstream API returned a failure status.
    #[error("Portrait API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The upstream API returned a payload without a usable image.
    #[error("Portrait API returned malformed output: {reason}")]
    MalformedResponse { reason: String },
}

impl PortraitError {
    /// Create an Api error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a MalformedResponse error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Portrait failures never abort record generation.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

// ============================================================================
// Export Errors
// ============================================================================

/// Errors that can occur while exporting generated records.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Record failed to serialize to JSON.
    #[error("Failed to serialize record: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write the export file.
    #[error("Failed to write export to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Create a WriteFailed error.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// Unified Error
// ============================================================================

/// Unified error type for all generator operations.
#[derive(Error, Debug)]
pub enum HolocronError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Portrait(#[from] PortraitError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Type alias for Result with HolocronError.
pub type Result<T> = std::result::Result<T, HolocronError>;

// ============================================================================
// Tests
// ============================================================================
