//! romtext Shared Types
//!
//! This crate provides the data model shared by the text backend and the CLI:
//! character width tables, layout profiles, and the reserved byte values that
//! the cartridge-side renderer understands.
//!
//! # Example
//!
//! ```
//! use romtext_spec::{CharacterWidthTable, LayoutProfile};
//!
//! // Every printable character 8 pixels wide.
//! let table = CharacterWidthTable::new(vec![8; 96]).unwrap();
//! let profile = LayoutProfile::default();
//!
//! assert!(table.validate_for_profile(&profile).is_ok());
//! assert_eq!(table.space_width(), 8);
//! assert_eq!(profile.line_max_pixels, 160);
//! ```
//!
//! # Modules
//!
//! - [`bytes`]: Reserved byte values of the output stream
//! - [`error`]: Error types for width tables and profiles
//! - [`profile`]: Layout profiles (line width, bank capacity, padding)
//! - [`widths`]: The per-character pixel width table

pub mod bytes;
pub mod error;
pub mod profile;
pub mod widths;

// Re-export commonly used types at the crate root
pub use bytes::{
    is_text_byte, BANK_SENTINEL, FIRST_PRINTABLE, HYPHEN, INVALID_CHAR, SPACE, TERMINATOR,
};
pub use error::{ProfileError, WidthTableError};
pub use profile::{
    LayoutProfile, BANK_MAX_BYTES, DEFAULT_START_BANK, LINE_MAX_PIXELS, PADDING_LINES,
};
pub use widths::{CharacterWidthTable, REQUIRED_ENTRIES};
