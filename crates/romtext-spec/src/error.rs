//! Error types for width tables and layout profiles.

use thiserror::Error;

/// Errors raised while loading or validating a character width table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidthTableError {
    /// The JSON document could not be parsed as an array of widths.
    #[error("invalid width table JSON: {0}")]
    Parse(String),

    /// The table stops before the last required character code.
    #[error("width table has {actual} entries, expected at least {required} (codes 32..=127)")]
    MissingEntries {
        /// Number of entries present.
        actual: usize,
        /// Number of entries required.
        required: usize,
    },

    /// A character is so wide that it cannot share a line with a hyphen,
    /// so no word starting with it could ever be hyphenated.
    #[error(
        "character {character:?} (code {code}) is {width}px wide; with a {hyphen_width}px hyphen it exceeds the {line_max}px line"
    )]
    HyphenationImpossible {
        /// The offending character.
        character: char,
        /// Its character code.
        code: u8,
        /// Its width in pixels.
        width: u32,
        /// Width of the hyphen character.
        hyphen_width: u32,
        /// Maximum line width of the profile.
        line_max: u32,
    },
}

impl WidthTableError {
    /// Returns a stable code for this error (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WidthTableError::Parse(_) => "W001",
            WidthTableError::MissingEntries { .. } => "W002",
            WidthTableError::HyphenationImpossible { .. } => "W003",
        }
    }
}

impl From<serde_json::Error> for WidthTableError {
    fn from(e: serde_json::Error) -> Self {
        WidthTableError::Parse(e.to_string())
    }
}

/// Errors raised while loading or validating a layout profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The JSON document could not be parsed as a profile.
    #[error("invalid layout profile JSON: {0}")]
    Parse(String),

    /// No built-in profile has this name.
    #[error("unknown layout profile: {0} (expected default or wide)")]
    UnknownProfile(String),

    /// A profile field holds a value the packer cannot work with.
    #[error("layout profile field {field} is {value}: {reason}")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: String,
        /// What the field must satisfy.
        reason: &'static str,
    },
}

impl ProfileError {
    /// Returns a stable code for this error (e.g., "P001").
    pub fn code(&self) -> &'static str {
        match self {
            ProfileError::Parse(_) => "P001",
            ProfileError::UnknownProfile(_) => "P002",
            ProfileError::InvalidField { .. } => "P003",
        }
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(e: serde_json::Error) -> Self {
        ProfileError::Parse(e.to_string())
    }
}
