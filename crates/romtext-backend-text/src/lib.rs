//! romtext Text Backend
//!
//! This crate turns plain-text paragraphs into fixed-capacity ROM banks for a
//! variable-width font renderer. Output is byte-identical for the same input,
//! width table, profile and start bank.
//!
//! # Pipeline
//!
//! - **Sanitize**: tabs, typographic punctuation and unprintable bytes are
//!   mapped into `0x20..=0x7F`
//! - **Wrap**: greedy line breaking on true pixel widths, with hyphenation of
//!   words wider than a line
//! - **Pack**: terminated lines are grouped into banks; every bank but the
//!   last is closed with a `0xFF` sentinel
//!
//! Each stage is an iterator, so a whole book is processed with one input
//! line and one open bank in memory.
//!
//! # Example
//!
//! ```
//! use romtext_backend_text::generate_banks;
//! use romtext_spec::{CharacterWidthTable, LayoutProfile, DEFAULT_START_BANK};
//!
//! let table = CharacterWidthTable::new(vec![8; 96]).unwrap();
//! let profile = LayoutProfile::default();
//!
//! let text = ["It was a dark and stormy night.", "", "The end."];
//! let banks = generate_banks(&table, &profile, DEFAULT_START_BANK, text).unwrap();
//!
//! assert_eq!(banks.len(), 1);
//! assert_eq!(banks[0].number, 2);
//! assert!(banks[0].data.starts_with(b"It was a dark and\0stormy night.\0\0The end.\0"));
//! ```

pub mod generate;
pub mod pack;
pub mod sanitize;
pub mod wrap;

// Re-export main types for convenience
pub use generate::{bank_stream, generate_banks, BankStream, GenerateError};
pub use pack::{Bank, BankPacker, PackError};
pub use sanitize::{sanitize_line, sanitize_lines};
pub use wrap::{wrap_lines, LineWrapper, Token, WrapError};
