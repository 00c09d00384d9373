//! Packing wrapped lines into fixed-capacity banks.
//!
//! Lines are never split across banks. When the next line would push a bank
//! past its capacity, the bank is closed with [`BANK_SENTINEL`] and handed to
//! the caller, and the line opens the next bank. The last bank is returned by
//! [`BankPacker::finish`] without a sentinel.

use romtext_spec::{LayoutProfile, BANK_SENTINEL, TERMINATOR};
use thiserror::Error;
use tracing::debug;

/// Upper bound on the bytes reserved up front for one bank.
const PREALLOC_LIMIT: usize = 0x10000;

use crate::wrap::Token;

/// One packed bank of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    /// Bank number in the cartridge address space.
    pub number: u32,
    /// Line units, followed by the sentinel unless this is the last bank.
    pub data: Vec<u8>,
}

impl Bank {
    /// Returns true if the bank ends with the overflow sentinel.
    ///
    /// Line content always ends with a terminator, so a trailing `0xFF` can
    /// only be the sentinel.
    pub fn has_sentinel(&self) -> bool {
        self.data.last() == Some(&BANK_SENTINEL)
    }

    /// The line units of this bank, sentinel excluded.
    pub fn content(&self) -> &[u8] {
        if self.has_sentinel() {
            &self.data[..self.data.len() - 1]
        } else {
            &self.data
        }
    }

    /// Iterates over the lines of this bank, terminators excluded.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.content()
            .split_inclusive(|&b| b == TERMINATOR)
            .map(|line| line.strip_suffix(&[TERMINATOR]).unwrap_or(line))
    }

    /// Number of lines stored in this bank.
    pub fn line_count(&self) -> usize {
        self.content().iter().filter(|&&b| b == TERMINATOR).count()
    }
}

/// Errors that abort packing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// A single line unit is larger than a whole bank.
    #[error("line of {len} bytes does not fit in a {max}-byte bank")]
    OversizedLine {
        /// Line length including its terminator.
        len: usize,
        /// Bank capacity.
        max: usize,
    },

    /// The token stream ended in the middle of a line. The wrapper always
    /// terminates its lines, so this is an internal error.
    #[error("internal error: token stream ended with {len} unterminated bytes")]
    UnterminatedLine {
        /// Bytes left in the pending line.
        len: usize,
    },

    /// A bank closed while numbered `u32::MAX`, so the next bank has no
    /// number.
    #[error("bank {bank} is full and no higher bank number exists")]
    BankNumberOverflow {
        /// Number of the bank that closed.
        bank: u32,
    },
}

impl PackError {
    /// Returns a stable code for this error (e.g., "K001").
    pub fn code(&self) -> &'static str {
        match self {
            PackError::OversizedLine { .. } => "K001",
            PackError::UnterminatedLine { .. } => "K002",
            PackError::BankNumberOverflow { .. } => "K003",
        }
    }
}

/// Incremental bank packer.
///
/// Feed tokens with [`push`](Self::push); completed banks are moved out as
/// soon as they close. [`finish`](Self::finish) consumes the packer and
/// returns the last bank.
#[derive(Debug)]
pub struct BankPacker {
    bank_max: usize,
    number: u32,
    /// Bytes of the line currently being assembled.
    line: Vec<u8>,
    /// Line units of the open bank.
    bank: Vec<u8>,
}

impl BankPacker {
    /// Creates a packer whose first bank is numbered `start_bank`.
    pub fn new(start_bank: u32, profile: &LayoutProfile) -> Self {
        Self {
            bank_max: profile.bank_max_bytes,
            number: start_bank,
            line: Vec::new(),
            bank: Vec::with_capacity(bank_capacity(profile.bank_max_bytes)),
        }
    }

    /// Number of the bank currently being filled.
    pub fn current_bank(&self) -> u32 {
        self.number
    }

    /// Adds one token. Returns the bank that was closed to make room for the
    /// line this token completed, if any.
    pub fn push(&mut self, token: &Token) -> Result<Option<Bank>, PackError> {
        token.write_to(&mut self.line);
        if !token.is_terminator() {
            return Ok(None);
        }

        if self.line.len() > self.bank_max {
            return Err(PackError::OversizedLine {
                len: self.line.len(),
                max: self.bank_max,
            });
        }

        let closed = if self.bank.len() + self.line.len() > self.bank_max {
            let next = self
                .number
                .checked_add(1)
                .ok_or(PackError::BankNumberOverflow { bank: self.number })?;
            let mut data = std::mem::replace(
                &mut self.bank,
                Vec::with_capacity(bank_capacity(self.bank_max)),
            );
            data.push(BANK_SENTINEL);
            debug!(bank = self.number, len = data.len(), "bank closed");
            let bank = Bank {
                number: self.number,
                data,
            };
            self.number = next;
            Some(bank)
        } else {
            None
        };

        self.bank.extend_from_slice(&self.line);
        self.line.clear();
        Ok(closed)
    }

    /// Closes the last bank. It carries no sentinel.
    pub fn finish(self) -> Result<Bank, PackError> {
        if !self.line.is_empty() {
            return Err(PackError::UnterminatedLine {
                len: self.line.len(),
            });
        }
        debug!(bank = self.number, len = self.bank.len(), "final bank");
        Ok(Bank {
            number: self.number,
            data: self.bank,
        })
    }
}

/// Bytes to reserve for a bank of `bank_max` content bytes plus its sentinel.
fn bank_capacity(bank_max: usize) -> usize {
    bank_max.saturating_add(1).min(PREALLOC_LIMIT)
}
