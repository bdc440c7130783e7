//! Name Templates
//!
//! Data-driven weighted template ladders for structural name variation.
//! Each ladder is a table of (cumulative threshold, template) rows walked in
//! order against a single uniform roll. A selected template renders only when
//! every fragment it needs is present; otherwise the draw degrades to a plain
//! "First Last", which is the intended behavior rather than an error.

// ============================================================================
// Name Parts
// ============================================================================

/// Fragments drawn up front for one standard-mode composition.
///
/// `middle` and `other` are two independent draws from the neutral list;
/// `first2` and `last2` are second draws from the gendered-first and last
/// lists. Repeats of the base fragment are allowed, matching the source data
/// behavior for single-entry lists.
#[derive(Debug, Clone, Default)]
pub struct NameParts {
    pub first: String,
    pub last: String,
    pub middle: Option<String>,
    pub other: Option<String>,
    pub first2: Option<String>,
    pub last2: Option<String>,
}

impl NameParts {
    /// The plain fallback every skipped template degrades to.
    pub fn plain(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Fragments drawn up front for one crazy-mode composition.
///
/// `first_other` and `last_other` are neutral draws from the first-name and
/// last-name species; `third` is a neutral draw from an independently chosen
/// third species.
#[derive(Debug, Clone, Default)]
pub struct CrazyParts {
    pub first: String,
    pub last: String,
    pub third: Option<String>,
    pub first_other: Option<String>,
    pub last_other: Option<String>,
    pub first2: Option<String>,
    pub last2: Option<String>,
}

impl CrazyParts {
    pub fn plain(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

// ============================================================================
// Standard Ladder
// ============================================================================

/// Structural templates for species-locked and random-mix modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTemplate {
    /// "First Middle Last"
    MiddleName,
    /// "First Middle Last-Other"
    MiddleHyphenLastSuffix,
    /// "First Middle Other-Last"
    MiddleHyphenLastPrefix,
    /// "First Last-Other"
    HyphenLastSuffix,
    /// "First Other-Last"
    HyphenLastPrefix,
    /// "First Last-Last2"
    DoubleLast,
    /// "First Middle Last-Last2"
    MiddleDoubleLast,
    /// "First Other Last"
    OtherMiddle,
    /// "First-First2 Last"
    DoubleFirst,
    /// "First-Other Last"
    HyphenFirst,
    /// "First Last"
    Plain,
}

/// One rung of a weighted ladder: a cumulative threshold and the template
/// chosen when the roll lands below it.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRow<T: Copy> {
    pub threshold: f32,
    pub template: T,
}

/// The reference weighting for standard-mode structural variation.
///
/// Thresholds are cumulative over a single uniform roll in [0, 1); a roll at
/// or past the final rung keeps the plain "First Last".
pub const STANDARD_LADDER: &[TemplateRow<NameTemplate>] = &[
    TemplateRow { threshold: 0.12, template: NameTemplate::MiddleName },
    TemplateRow { threshold: 0.20, template: NameTemplate::MiddleHyphenLastSuffix },
    TemplateRow { threshold: 0.28, template: NameTemplate::MiddleHyphenLastPrefix },
    TemplateRow { threshold: 0.36, template: NameTemplate::HyphenLastSuffix },
    TemplateRow { threshold: 0.44, template: NameTemplate::HyphenLastPrefix },
    TemplateRow { threshold: 0.52, template: NameTemplate::DoubleLast },
    TemplateRow { threshold: 0.60, template: NameTemplate::MiddleDoubleLast },
    TemplateRow { threshold: 0.68, template: NameTemplate::OtherMiddle },
    TemplateRow { threshold: 0.73, template: NameTemplate::DoubleFirst },
    TemplateRow { threshold: 0.78, template: NameTemplate::HyphenFirst },
];

/// Walk a ladder and return the template for a roll, or `fallback` when the
/// roll clears every rung.
pub fn select<T: Copy>(ladder: &[TemplateRow<T>], roll: f32, fallback: T) -> T {
    for row in ladder {
        if roll < row.threshold {
            return row.template;
        }
    }
    fallback
}

impl NameTemplate {
    /// Render this template from the drawn parts.
    ///
    /// Returns `None` when a required fragment is missing; the caller then
    /// falls back to the plain form for this draw.
    pub fn render(&self, parts: &NameParts) -> Option<String> {
        let first = &parts.first;
        let last = &parts.last;
        match self {
            Self::MiddleName => {
                let middle = parts.middle.as_ref()?;
                Some(format!("{first} {middle} {last}"))
            }
            Self::MiddleHyphenLastSuffix => {
                let middle = parts.middle.as_ref()?;
                let other = parts.other.as_ref()?;
                Some(format!("{first} {middle} {last}-{other}"))
            }
            Self::MiddleHyphenLastPrefix => {
                let middle = parts.middle.as_ref()?;
                let other = parts.other.as_ref()?;
                Some(format!("{first} {middle} {other}-{last}"))
            }
            Self::HyphenLastSuffix => {
                let other = parts.other.as_ref()?;
                Some(format!("{first} {last}-{other}"))
            }
            Self::HyphenLastPrefix => {
                let other = parts.other.as_ref()?;
                Some(format!("{first} {other}-{last}"))
            }
            Self::DoubleLast => {
                let last2 = parts.last2.as_ref()?;
                Some(format!("{first} {last}-{last2}"))
            }
            Self::MiddleDoubleLast => {
                let middle = parts.middle.as_ref()?;
                let last2 = parts.last2.as_ref()?;
                Some(format!("{first} {middle} {last}-{last2}"))
            }
            Self::OtherMiddle => {
                let other = parts.other.as_ref()?;
                Some(format!("{first} {other} {last}"))
            }
            Self::DoubleFirst => {
                let first2 = parts.first2.as_ref()?;
                Some(format!("{first}-{first2} {last}"))
            }
            Self::HyphenFirst => {
                let other = parts.other.as_ref()?;
                Some(format!("{first}-{other} {last}"))
            }
            Self::Plain => Some(parts.plain()),
        }
    }
}

// ============================================================================
// Crazy Ladder
// ============================================================================

/// Structural templates for crazy-mix mode.
///
/// The two lowest rungs splice in a fragment from a third species; the rest
/// recombine fragments already drawn from the first-name and last-name
/// species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrazyTemplate {
    /// "First Third Last" with a third-species middle name.
    ThirdSpeciesMiddle,
    /// Third-species fragment hyphenated onto the last or first name,
    /// decided by a coin flip at render time.
    ThirdSpeciesHyphen,
    /// "First Other Last" with the middle from the first-name species.
    FirstSpeciesMiddle,
    /// "First Other Last" with the middle from the last-name species.
    LastSpeciesMiddle,
    /// "First Last-Other" with the suffix from the last-name species.
    HyphenLastSuffix,
    /// "First Other-Last" with the prefix from the first-name species.
    HyphenLastPrefix,
    /// "First Last-Last2", both from the last-name species.
    DoubleLast,
    /// "First-First2 Last", both from the first-name species.
    DoubleFirst,
    /// "First Last"
    Plain,
}

/// Crazy-mode weighting. The third-species rungs sit at the bottom so a
/// three-species name stays a minority outcome.
pub const CRAZY_LADDER: &[TemplateRow<CrazyTemplate>] = &[
    TemplateRow { threshold: 0.15, template: CrazyTemplate::ThirdSpeciesMiddle },
    TemplateRow { threshold: 0.30, template: CrazyTemplate::ThirdSpeciesHyphen },
    TemplateRow { threshold: 0.40, template: CrazyTemplate::FirstSpeciesMiddle },
    TemplateRow { threshold: 0.50, template: CrazyTemplate::LastSpeciesMiddle },
    TemplateRow { threshold: 0.60, template: CrazyTemplate::HyphenLastSuffix },
    TemplateRow { threshold: 0.70, template: CrazyTemplate::HyphenLastPrefix },
    TemplateRow { threshold: 0.80, template: CrazyTemplate::DoubleLast },
    TemplateRow { threshold: 0.90, template: CrazyTemplate::DoubleFirst },
];

impl CrazyTemplate {
    /// Whether rendering this template pulls in the third species.
    pub fn uses_third_species(&self) -> bool {
        matches!(self, Self::ThirdSpeciesMiddle | Self::ThirdSpeciesHyphen)
    }

    /// Render this template from the drawn parts.
    ///
    /// `hyphen_on_last` resolves the coin flip for `ThirdSpeciesHyphen`:
    /// true attaches the third-species fragment to the last name, false to
    /// the first. Returns `None` when a required fragment is missing.
    pub fn render(&self, parts: &CrazyParts, hyphen_on_last: bool) -> Option<String> {
        let first = &parts.first;
        let last = &parts.last;
        match self {
            Self::ThirdSpeciesMiddle => {
                let third = parts.third.as_ref()?;
                Some(format!("{first} {third} {last}"))
            }
            Self::ThirdSpeciesHyphen => {
                let third = parts.third.as_ref()?;
                if hyphen_on_last {
                    Some(format!("{first} {last}-{third}"))
                } else {
                    Some(format!("{first}-{third} {last}"))
                }
            }
            Self::FirstSpeciesMiddle => {
                let other = parts.first_other.as_ref()?;
                Some(format!("{first} {other} {last}"))
            }
            Self::LastSpeciesMiddle => {
                let other = parts.last_other.as_ref()?;
                Some(format!("{first} {other} {last}"))
            }
            Self::HyphenLastSuffix => {
                let other = parts.last_other.as_ref()?;
                Some(format!("{first} {last}-{other}"))
            }
            Self::HyphenLastPrefix => {
                let other = parts.first_other.as_ref()?;
                Some(format!("{first} {other}-{last}"))
            }
            Self::DoubleLast => {
                let last2 = parts.last2.as_ref()?;
                Some(format!("{first} {last}-{last2}"))
            }
            Self::DoubleFirst => {
                let first2 = parts.first2.as_ref()?;
                Some(format!("{first}-{first2} {last}"))
            }
            Self::Plain => Some(parts.plain()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
