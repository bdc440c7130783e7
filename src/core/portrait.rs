//! AI Portrait Interface (disabled)
//!
//! Contract for the third-party portrait service. The service is
//! hard-disabled: every request resolves to [`PortraitError::Disabled`]
//! without any outbound call. The wire shapes, prompt builder, deadline,
//! and response validation stay in place so the feature can come back
//! without touching callers.
//!
//! Failures here are always recoverable: callers fall back to the class
//! icon glyph and surface the error text on the record.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::character_gen::CharacterRecord;
use crate::core::errors::PortraitError;

/// Deadline for one portrait request. A slow upstream is treated as a
/// normal failure, not a crash.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(40);

/// Wire request: the service accepts a prompt and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortraitRequest {
    pub prompt: String,
}

/// Wire response on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortraitResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Client handle for the portrait service.
#[derive(Debug, Default)]
pub struct PortraitClient {
    enabled: bool,
}

impl PortraitClient {
    /// A client in the current hard-disabled state. No constructor turns
    /// the service on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request would leave the process.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Request a portrait for `record`.
    pub fn generate(&self, record: &CharacterRecord) -> Result<PortraitResponse, PortraitError> {
        let prompt = build_prompt(record);
        warn!(prompt = %prompt, "Portrait request refused, service is disabled");
        Err(PortraitError::Disabled)
    }

    /// Run a portrait request and record the outcome in place: a URL on
    /// success, a visible error message and no image on failure.
    pub fn apply(&self, record: &mut CharacterRecord) {
        match self.generate(record) {
            Ok(response) => {
                record.portrait_url = Some(response.image_url);
                record.portrait_error = None;
            }
            Err(err) => {
                record.portrait_url = None;
                record.portrait_error = Some(err.to_string());
            }
        }
    }
}

/// The prompt the service receives, built from the record's summary fields.
pub fn build_prompt(record: &CharacterRecord) -> String {
    format!(
        "{} {} {} from Star Wars, portrait style, detailed face, {} alignment, professional character art",
        record.gender, record.species, record.class, record.alignment
    )
}

/// Validate a raw image URL from the response payload. Anything that is
/// not an http(s) URL counts as malformed.
pub fn validate_image_url(url: &str) -> Result<(), PortraitError> {
    if url.starts_with("http") {
        Ok(())
    } else {
        Err(PortraitError::malformed(format!(
            "not an http URL: {url:?}"
        )))
    }
}

/// Franchise wording, matched case-insensitively with any whitespace run
/// (or none) between the words.
static FRANCHISE_TERM: OnceLock<Regex> = OnceLock::new();

/// Whitespace runs left behind once a term is cut out.
static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();

/// Strip franchise wording from a prompt before it would leave the
/// process: case-insensitive "star wars" (with or without whitespace
/// between the words) is removed, leftover whitespace runs collapse to
/// single spaces, and the ends are trimmed.
pub fn scrub_franchise_terms(prompt: &str) -> String {
    let term = FRANCHISE_TERM.get_or_init(|| {
        Regex::new(r"(?i)star\s*wars").expect("Failed to compile franchise term regex")
    });
    let runs = WHITESPACE_RUN
        .get_or_init(|| Regex::new(r"\s{2,}").expect("Failed to compile whitespace run regex"));

    let stripped = term.replace_all(prompt, "");
    runs.replace_all(&stripped, " ").trim().to_string()
}

// ============================================================================
// Tests
// ============================================================================
