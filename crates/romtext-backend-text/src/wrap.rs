//! Greedy pixel-width line wrapping.
//!
//! [`LineWrapper`] turns sanitized input lines into a lazy stream of
//! [`Token`]s. Breaks are decided on rendered pixel widths, not character
//! counts. A word wider than a whole line is hyphenated: its longest prefix
//! that still fits together with a hyphen stays on the line and the rest is
//! pushed back to the front of the word queue, so arbitrarily long words are
//! handled by iteration rather than recursion.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use romtext_spec::{CharacterWidthTable, LayoutProfile, HYPHEN, SPACE, TERMINATOR};
use thiserror::Error;
use tracing::{debug, trace};

/// One unit of wrapper output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A word or a hyphenated word fragment.
    Word(Vec<u8>),
    /// A single separator space between two words.
    Space,
    /// End of a rendered line.
    Terminator,
}

impl Token {
    /// Appends the bytes of this token to `buf`.
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        match self {
            Token::Word(bytes) => buf.extend_from_slice(bytes),
            Token::Space => buf.push(SPACE),
            Token::Terminator => buf.push(TERMINATOR),
        }
    }

    /// Number of bytes this token occupies in the output.
    pub fn byte_len(&self) -> usize {
        match self {
            Token::Word(bytes) => bytes.len(),
            Token::Space | Token::Terminator => 1,
        }
    }

    /// Returns true for [`Token::Terminator`].
    pub fn is_terminator(&self) -> bool {
        matches!(self, Token::Terminator)
    }
}

/// Errors that abort wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    /// A byte in the input has no width table entry.
    #[error("character code {byte:#04x} has no entry in the width table")]
    UnknownCharacter {
        /// The offending byte.
        byte: u8,
    },

    /// The first character of an over-long word cannot share a line with a
    /// hyphen, so the word can never be split.
    #[error(
        "cannot hyphenate {word:?}: character {character:?} is {width}px wide, plus a {hyphen_width}px hyphen exceeds the {line_max}px line"
    )]
    HyphenationImpossible {
        /// The word being split (lossy UTF-8).
        word: String,
        /// The character that does not fit.
        character: char,
        /// Its width.
        width: u32,
        /// Width of the hyphen.
        hyphen_width: u32,
        /// Maximum line width.
        line_max: u32,
    },

    /// A word measured wider than the line, but no character position
    /// overflowed it when measured one by one.
    #[error("word {word:?} is wider than the line but has no split point")]
    NoSplitPoint {
        /// The word being split (lossy UTF-8).
        word: String,
    },
}

impl WrapError {
    /// Returns a stable code for this error (e.g., "R001").
    pub fn code(&self) -> &'static str {
        match self {
            WrapError::UnknownCharacter { .. } => "R001",
            WrapError::HyphenationImpossible { .. } => "R002",
            WrapError::NoSplitPoint { .. } => "R003",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WrapState {
    /// Consuming input lines; `line_open` is set while the current input
    /// line still owes its closing terminator.
    Lines { line_open: bool },
    /// Emitting the trailing blank lines.
    Padding(usize),
    Done,
}

/// Lazy greedy line wrapper over sanitized input lines.
///
/// Yields `Err` at most once, after which the iterator is exhausted.
pub struct LineWrapper<'a, I> {
    table: &'a CharacterWidthTable,
    lines: I,
    line_max: u32,
    space_width: u32,
    hyphen_width: u32,
    padding_lines: usize,
    /// Words of the current input line still to be placed.
    words: VecDeque<Vec<u8>>,
    /// Pixel position of the next character on the current output line.
    cursor: u32,
    /// Tokens decided but not yet handed out.
    pending: VecDeque<Token>,
    state: WrapState,
}

impl<'a, I> LineWrapper<'a, I>
where
    I: Iterator<Item = Vec<u8>>,
{
    /// Creates a wrapper over `lines`, which must already be sanitized.
    pub fn new<L>(table: &'a CharacterWidthTable, profile: &LayoutProfile, lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            table,
            lines: lines.into_iter(),
            line_max: profile.line_max_pixels,
            space_width: table.space_width(),
            hyphen_width: table.hyphen_width(),
            padding_lines: profile.padding_lines,
            words: VecDeque::new(),
            cursor: 0,
            pending: VecDeque::new(),
            state: WrapState::Lines { line_open: false },
        }
    }

    fn start_line(&mut self, line: &[u8]) {
        self.words = line
            .split(|&b| b == SPACE)
            .filter(|word| !word.is_empty())
            .map(<[u8]>::to_vec)
            .collect();
        self.cursor = 0;
        trace!(words = self.words.len(), "wrapping input line");
    }

    fn place_word(&mut self, word: Vec<u8>) -> Result<(), WrapError> {
        let length = self
            .table
            .text_width(&word)
            .map_err(|byte| WrapError::UnknownCharacter { byte })?;

        let word_pos = if self.cursor != 0 {
            self.cursor.saturating_add(self.space_width)
        } else {
            0
        };

        if word_pos.saturating_add(length) > self.line_max {
            if self.cursor != 0 {
                self.pending.push_back(Token::Terminator);
                self.cursor = 0;
            }
            if length > self.line_max {
                let split_at = self.split_point(&word)?;
                let mut head = word;
                let remainder = head.split_off(split_at);
                head.push(HYPHEN);
                debug!(
                    head = %String::from_utf8_lossy(&head),
                    remainder = %String::from_utf8_lossy(&remainder),
                    "hyphenated word"
                );
                // The remainder always opens the next line.
                self.pending.push_back(Token::Word(head));
                self.pending.push_back(Token::Terminator);
                self.words.push_front(remainder);
                return Ok(());
            }
        } else if self.cursor != 0 {
            self.pending.push_back(Token::Space);
            self.cursor = self.cursor.saturating_add(self.space_width);
        }

        self.pending.push_back(Token::Word(word));
        self.cursor = self.cursor.saturating_add(length);
        Ok(())
    }

    /// Index of the first character that no longer fits before a hyphen.
    fn split_point(&self, word: &[u8]) -> Result<usize, WrapError> {
        let mut length = 0u32;
        for (i, &byte) in word.iter().enumerate() {
            let width = self
                .table
                .width_of(byte)
                .ok_or(WrapError::UnknownCharacter { byte })?;
            if length
                .saturating_add(width)
                .saturating_add(self.hyphen_width)
                > self.line_max
            {
                if i == 0 {
                    return Err(WrapError::HyphenationImpossible {
                        word: String::from_utf8_lossy(word).into_owned(),
                        character: byte as char,
                        width,
                        hyphen_width: self.hyphen_width,
                        line_max: self.line_max,
                    });
                }
                return Ok(i);
            }
            length = length.saturating_add(width);
        }
        Err(WrapError::NoSplitPoint {
            word: String::from_utf8_lossy(word).into_owned(),
        })
    }
}

impl<I> Iterator for LineWrapper<'_, I>
where
    I: Iterator<Item = Vec<u8>>,
{
    type Item = Result<Token, WrapError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }

            match self.state {
                WrapState::Lines { line_open } => {
                    if let Some(word) = self.words.pop_front() {
                        if let Err(e) = self.place_word(word) {
                            self.pending.clear();
                            self.words.clear();
                            self.state = WrapState::Done;
                            return Some(Err(e));
                        }
                        continue;
                    }
                    if line_open {
                        self.state = WrapState::Lines { line_open: false };
                        return Some(Ok(Token::Terminator));
                    }
                    match self.lines.next() {
                        Some(line) => {
                            self.start_line(&line);
                            self.state = WrapState::Lines { line_open: true };
                        }
                        None => self.state = WrapState::Padding(self.padding_lines),
                    }
                }
                WrapState::Padding(0) => self.state = WrapState::Done,
                WrapState::Padding(remaining) => {
                    self.state = WrapState::Padding(remaining - 1);
                    return Some(Ok(Token::Terminator));
                }
                WrapState::Done => return None,
            }
        }
    }
}

impl<I> FusedIterator for LineWrapper<'_, I> where I: Iterator<Item = Vec<u8>> {}

/// Wrap already sanitized lines with the given table and profile.
pub fn wrap_lines<'a, L>(
    table: &'a CharacterWidthTable,
    profile: &LayoutProfile,
    lines: L,
) -> LineWrapper<'a, L::IntoIter>
where
    L: IntoIterator<Item = Vec<u8>>,
{
    LineWrapper::new(table, profile, lines)
}
