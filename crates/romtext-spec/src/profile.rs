//! Layout profiles for line wrapping and bank packing.
//!
//! A profile fixes the three numbers the cartridge renderer is built around:
//! how wide a line may be in pixels, how many bytes of text fit in one bank,
//! and how many blank lines pad the end of the book.
//!
//! This module provides:
//! - The default constants (20 cells of 8px, 16 KiB banks minus the sentinel)
//! - A serde `LayoutProfile` with named presets and JSON loading
//! - Validation of custom profiles

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Maximum rendered width of one line: 20 character cells of 8 pixels.
pub const LINE_MAX_PIXELS: u32 = 20 * 8;

/// Maximum text content of one bank. One byte of the 0x4000-byte bank is
/// kept free for the overflow sentinel.
pub const BANK_MAX_BYTES: usize = 0x4000 - 1;

/// Number of empty lines appended once after all input.
pub const PADDING_LINES: usize = 20;

/// First bank number used when the caller does not pick one.
pub const DEFAULT_START_BANK: u32 = 2;

/// Largest bank capacity a profile may declare (a 64 KiB address window).
const MAX_BANK_CAPACITY: usize = 0xFFFF;

/// A complete layout profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutProfile {
    /// Profile identifier (e.g., "default", "wide").
    pub name: String,
    /// Maximum pixel width of one line.
    pub line_max_pixels: u32,
    /// Maximum bytes of line content per bank, sentinel excluded.
    pub bank_max_bytes: usize,
    /// Empty lines appended after the last paragraph.
    pub padding_lines: usize,
}

impl Default for LayoutProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            line_max_pixels: LINE_MAX_PIXELS,
            bank_max_bytes: BANK_MAX_BYTES,
            padding_lines: PADDING_LINES,
        }
    }
}

impl LayoutProfile {
    /// Creates a new profile with the given name and default limits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns the wide profile: 24 cells of 8px per line.
    pub fn wide() -> Self {
        Self {
            name: "wide".to_string(),
            line_max_pixels: 24 * 8,
            ..Default::default()
        }
    }

    /// Looks up a built-in profile by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "wide" => Some(Self::wide()),
            _ => None,
        }
    }

    /// Parses and validates a profile from JSON.
    ///
    /// Missing fields fall back to the defaults, so `{"line_max_pixels": 128}`
    /// is a complete profile.
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let partial: PartialProfile = serde_json::from_str(json)?;
        let defaults = Self::default();
        let profile = Self {
            name: partial.name.unwrap_or_else(|| "custom".to_string()),
            line_max_pixels: partial.line_max_pixels.unwrap_or(defaults.line_max_pixels),
            bank_max_bytes: partial.bank_max_bytes.unwrap_or(defaults.bank_max_bytes),
            padding_lines: partial.padding_lines.unwrap_or(defaults.padding_lines),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that the limits describe a layout the packer can produce.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.line_max_pixels == 0 {
            return Err(ProfileError::InvalidField {
                field: "line_max_pixels",
                value: self.line_max_pixels.to_string(),
                reason: "must be greater than zero",
            });
        }
        if self.bank_max_bytes == 0 || self.bank_max_bytes > MAX_BANK_CAPACITY {
            return Err(ProfileError::InvalidField {
                field: "bank_max_bytes",
                value: self.bank_max_bytes.to_string(),
                reason: "must be between 1 and 65535",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialProfile {
    name: Option<String>,
    line_max_pixels: Option<u32>,
    bank_max_bytes: Option<usize>,
    padding_lines: Option<usize>,
}
