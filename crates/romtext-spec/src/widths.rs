//! The per-character pixel width table.
//!
//! Entry `k` is the width of character code `32 + k`. Entry 0 (space) doubles
//! as the width of the separator placed between words.

use serde::{Deserialize, Serialize};

use crate::bytes::{FIRST_PRINTABLE, HYPHEN, INVALID_CHAR, SPACE};
use crate::error::WidthTableError;
use crate::profile::LayoutProfile;

/// Entries needed to cover codes 32..=127 (the invalid-character marker included).
pub const REQUIRED_ENTRIES: usize = (INVALID_CHAR - FIRST_PRINTABLE) as usize + 1;

/// Pixel widths of the font's printable characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct CharacterWidthTable {
    widths: Vec<u32>,
}

impl CharacterWidthTable {
    /// Creates a table, checking that every code up to 127 has a width.
    pub fn new(widths: Vec<u32>) -> Result<Self, WidthTableError> {
        if widths.len() < REQUIRED_ENTRIES {
            return Err(WidthTableError::MissingEntries {
                actual: widths.len(),
                required: REQUIRED_ENTRIES,
            });
        }
        Ok(Self { widths })
    }

    /// Parses a JSON array of widths, first entry being space.
    pub fn from_json_str(json: &str) -> Result<Self, WidthTableError> {
        let widths: Vec<u32> = serde_json::from_str(json)?;
        Self::new(widths)
    }

    /// Width of a single character, or `None` if the table does not cover it.
    pub fn width_of(&self, byte: u8) -> Option<u32> {
        let index = byte.checked_sub(FIRST_PRINTABLE)?;
        self.widths.get(index as usize).copied()
    }

    /// Summed width of a run of characters.
    ///
    /// Returns the first uncovered byte as the error.
    pub fn text_width(&self, text: &[u8]) -> Result<u32, u8> {
        text.iter().try_fold(0u32, |acc, &b| {
            self.width_of(b).map(|w| acc.saturating_add(w)).ok_or(b)
        })
    }

    /// Width of the space character, also used for word separators.
    pub fn space_width(&self) -> u32 {
        self.widths[(SPACE - FIRST_PRINTABLE) as usize]
    }

    /// Width of the hyphen appended to split words.
    pub fn hyphen_width(&self) -> u32 {
        self.widths[(HYPHEN - FIRST_PRINTABLE) as usize]
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Returns true if the table holds no widths.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// The raw widths, index 0 being space.
    pub fn as_slice(&self) -> &[u32] {
        &self.widths
    }

    /// The widest character in 33..=127 together with its width.
    pub fn widest(&self) -> (u8, u32) {
        (FIRST_PRINTABLE + 1..=INVALID_CHAR)
            .map(|code| (code, self.widths[(code - FIRST_PRINTABLE) as usize]))
            .fold((FIRST_PRINTABLE + 1, 0), |best, cur| {
                if cur.1 > best.1 {
                    cur
                } else {
                    best
                }
            })
    }

    /// Checks that every character that can start a word fits on a line
    /// together with a hyphen, which hyphenation needs to make progress.
    pub fn validate_for_profile(&self, profile: &LayoutProfile) -> Result<(), WidthTableError> {
        let hyphen_width = self.hyphen_width();
        for code in FIRST_PRINTABLE + 1..=INVALID_CHAR {
            let width = self.widths[(code - FIRST_PRINTABLE) as usize];
            if width.saturating_add(hyphen_width) > profile.line_max_pixels {
                return Err(WidthTableError::HyphenationImpossible {
                    character: code as char,
                    code,
                    width,
                    hyphen_width,
                    line_max: profile.line_max_pixels,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<u32>> for CharacterWidthTable {
    type Error = WidthTableError;

    fn try_from(widths: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(widths)
    }
}

impl From<CharacterWidthTable> for Vec<u32> {
    fn from(table: CharacterWidthTable) -> Self {
        table.widths
    }
}
