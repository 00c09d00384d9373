//! JSON report written next to generated banks.
//!
//! The last bank has no end marker in ROM, so the report is where a build
//! script finds each bank's exact length.

use romtext_backend_text::Bank;
use romtext_spec::LayoutProfile;
use serde::{Deserialize, Serialize};

/// Summary of one generate run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateReport {
    /// Name of the layout profile used.
    pub profile: String,
    /// Line width of that profile.
    pub line_max_pixels: u32,
    /// Bank capacity of that profile.
    pub bank_max_bytes: usize,
    /// Number of the first bank.
    pub start_bank: u32,
    /// Total bytes over all banks, sentinels included.
    pub total_bytes: usize,
    /// Total rendered lines, padding included.
    pub total_lines: usize,
    /// Per-bank details, in bank order.
    pub banks: Vec<BankReport>,
}

/// Details of one bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankReport {
    /// Bank number.
    pub bank: u32,
    /// Length in bytes, sentinel included.
    pub len: usize,
    /// Number of lines stored in the bank.
    pub lines: usize,
    /// Whether the bank ends with the overflow sentinel.
    pub has_sentinel: bool,
    /// BLAKE3 hash of the bank bytes.
    pub hash: String,
}

impl BankReport {
    /// Summarizes a bank.
    pub fn from_bank(bank: &Bank) -> Self {
        Self {
            bank: bank.number,
            len: bank.data.len(),
            lines: bank.line_count(),
            has_sentinel: bank.has_sentinel(),
            hash: blake3::hash(&bank.data).to_hex().to_string(),
        }
    }
}

impl GenerateReport {
    /// Builds the report for a finished run.
    pub fn new(profile: &LayoutProfile, start_bank: u32, banks: &[Bank]) -> Self {
        let banks: Vec<BankReport> = banks.iter().map(BankReport::from_bank).collect();
        Self {
            profile: profile.name.clone(),
            line_max_pixels: profile.line_max_pixels,
            bank_max_bytes: profile.bank_max_bytes,
            start_bank,
            total_bytes: banks.iter().map(|b| b.len).sum(),
            total_lines: banks.iter().map(|b| b.lines).sum(),
            banks,
        }
    }
}
