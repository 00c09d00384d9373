//! Reserved byte values of the output stream.
//!
//! Word and separator bytes are always in `0x20..=0x7F`, so they can never be
//! confused with the terminator or the bank sentinel.

/// Ends one rendered line.
pub const TERMINATOR: u8 = 0x00;

/// Appended to every non-final bank; tells the reader to switch banks.
pub const BANK_SENTINEL: u8 = 0xFF;

/// Stand-in for any input byte the font cannot render.
pub const INVALID_CHAR: u8 = 0x7F;

/// First character code covered by a width table (space).
pub const FIRST_PRINTABLE: u8 = b' ';

/// Separator between words on a line.
pub const SPACE: u8 = b' ';

/// Appended to the first fragment of a hyphenated word.
pub const HYPHEN: u8 = b'-';

/// Returns true if `byte` may appear inside a word or separator.
pub fn is_text_byte(byte: u8) -> bool {
    (FIRST_PRINTABLE..=INVALID_CHAR).contains(&byte)
}
