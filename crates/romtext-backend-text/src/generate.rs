//! The sanitize → wrap → pack pipeline.
//!
//! [`bank_stream`] composes the three stages lazily so that memory stays
//! bounded by one input line and one open bank. [`generate_banks`] collects
//! the whole stream for callers that need every bank before emitting.

use std::iter::FusedIterator;

use romtext_spec::{CharacterWidthTable, LayoutProfile, ProfileError};
use thiserror::Error;

use crate::pack::{Bank, BankPacker, PackError};
use crate::sanitize::sanitize_line;
use crate::wrap::{LineWrapper, Token, WrapError};

/// Errors that can occur while generating text banks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The layout profile cannot be packed.
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Line wrapping failed.
    #[error("wrap error: {0}")]
    Wrap(#[from] WrapError),

    /// Bank packing failed.
    #[error("pack error: {0}")]
    Pack(#[from] PackError),
}

impl GenerateError {
    /// Returns the stable code of the underlying error.
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::Profile(e) => e.code(),
            GenerateError::Wrap(e) => e.code(),
            GenerateError::Pack(e) => e.code(),
        }
    }
}

/// Lazy stream of packed banks over a token stream.
///
/// Yields `Err` at most once, after which the stream is exhausted.
pub struct BankStream<T> {
    tokens: T,
    packer: Option<BankPacker>,
    /// Profile rejection, reported as the first item.
    invalid: Option<GenerateError>,
}

impl<T> BankStream<T>
where
    T: Iterator<Item = Result<Token, WrapError>>,
{
    /// Packs `tokens` into banks numbered from `start_bank`.
    ///
    /// An invalid profile yields its error and nothing else.
    pub fn new(tokens: T, start_bank: u32, profile: &LayoutProfile) -> Self {
        match profile.validate() {
            Ok(()) => Self {
                tokens,
                packer: Some(BankPacker::new(start_bank, profile)),
                invalid: None,
            },
            Err(e) => Self {
                tokens,
                packer: None,
                invalid: Some(e.into()),
            },
        }
    }
}

impl<T> Iterator for BankStream<T>
where
    T: Iterator<Item = Result<Token, WrapError>>,
{
    type Item = Result<Bank, GenerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.invalid.take() {
            return Some(Err(e));
        }
        loop {
            let packer = self.packer.as_mut()?;
            match self.tokens.next() {
                Some(Ok(token)) => match packer.push(&token) {
                    Ok(Some(bank)) => return Some(Ok(bank)),
                    Ok(None) => {}
                    Err(e) => {
                        self.packer = None;
                        return Some(Err(e.into()));
                    }
                },
                Some(Err(e)) => {
                    self.packer = None;
                    return Some(Err(e.into()));
                }
                None => {
                    let packer = self.packer.take()?;
                    return Some(packer.finish().map_err(GenerateError::from));
                }
            }
        }
    }
}

impl<T> FusedIterator for BankStream<T> where T: Iterator<Item = Result<Token, WrapError>> {}

/// Builds the full lazy pipeline over raw input lines.
pub fn bank_stream<'a, L>(
    table: &'a CharacterWidthTable,
    profile: &LayoutProfile,
    start_bank: u32,
    lines: L,
) -> BankStream<LineWrapper<'a, impl Iterator<Item = Vec<u8>>>>
where
    L: IntoIterator,
    L::Item: AsRef<[u8]>,
{
    let sanitized = lines.into_iter().map(|line| sanitize_line(line.as_ref()));
    BankStream::new(LineWrapper::new(table, profile, sanitized), start_bank, profile)
}

/// Runs the whole pipeline and collects every bank.
///
/// Fails without partial output if any stage fails.
pub fn generate_banks<L>(
    table: &CharacterWidthTable,
    profile: &LayoutProfile,
    start_bank: u32,
    lines: L,
) -> Result<Vec<Bank>, GenerateError>
where
    L: IntoIterator,
    L::Item: AsRef<[u8]>,
{
    bank_stream(table, profile, start_bank, lines).collect()
}
