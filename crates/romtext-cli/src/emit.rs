//! Bank emitters.
//!
//! - `asm`: an assembler include with one `SECTION` per bank and one `db`
//!   directive per byte, placed at the switchable ROM window (`$4000`)
//! - `plaintext`: the same sections with terminators shown as line breaks and
//!   sentinels omitted, for checking wrap decisions by eye
//! - `bin`: one raw file per bank

use romtext_backend_text::Bank;
use romtext_spec::TERMINATOR;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output format for generated banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Assembler `db` dump.
    Asm,
    /// Human-readable wrap preview.
    Plaintext,
    /// Raw bank files.
    Bin,
}

impl OutputFormat {
    /// Returns the string representation used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Asm => "asm",
            OutputFormat::Plaintext => "plaintext",
            OutputFormat::Bin => "bin",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asm" => Ok(OutputFormat::Asm),
            "plaintext" => Ok(OutputFormat::Plaintext),
            "bin" => Ok(OutputFormat::Bin),
            other => Err(format!(
                "unknown output format: {} (expected asm, plaintext, or bin)",
                other
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Section directive that places a bank in the switchable ROM window.
pub fn section_header(bank: u32) -> String {
    format!(
        "SECTION \"Text Data Bank {bank}\", ROMX[$4000], BANK[{bank}]",
        bank = bank
    )
}

/// Writes every bank as an assembler section of `db` directives.
pub fn write_asm<W: Write>(out: &mut W, banks: &[Bank]) -> io::Result<()> {
    for bank in banks {
        writeln!(out, "{}", section_header(bank.number))?;
        for byte in &bank.data {
            writeln!(out, "db {}", byte)?;
        }
    }
    Ok(())
}

/// Writes a preview with one output line per rendered line.
pub fn write_plaintext<W: Write>(out: &mut W, banks: &[Bank]) -> io::Result<()> {
    for bank in banks {
        writeln!(out, "{}", section_header(bank.number))?;
        let text: Vec<u8> = bank
            .content()
            .iter()
            .map(|&b| if b == TERMINATOR { b'\n' } else { b })
            .collect();
        out.write_all(&text)?;
    }
    Ok(())
}

/// File name used for a bank in `bin` mode.
pub fn bin_file_name(bank: u32) -> String {
    format!("bank_{:03}.bin", bank)
}

/// Writes each bank to its own file in `dir`, creating `dir` if needed.
pub fn write_bin(dir: &Path, banks: &[Bank]) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    banks
        .iter()
        .map(|bank| {
            let path = dir.join(bin_file_name(bank.number));
            fs::write(&path, &bank.data)?;
            Ok(path)
        })
        .collect()
}
