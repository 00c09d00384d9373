//! romtext End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the full text pipeline:
//!
//! - **Pipeline**: raw text -> sanitized lines -> wrapped lines -> banks
//! - **CLI output**: asm, plaintext and bin emitters, and the JSON report
//! - **Invariants**: property tests for line widths, bank sizes and padding
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p romtext-tests
//! ```

use romtext_backend_text::Bank;
use romtext_spec::{CharacterWidthTable, REQUIRED_ENTRIES, TERMINATOR};
use std::fs;
use std::path::{Path, PathBuf};

/// A table in which every character, space included, has the same width.
pub fn uniform_table(width: u32) -> CharacterWidthTable {
    CharacterWidthTable::new(vec![width; REQUIRED_ENTRIES]).expect("uniform table is complete")
}

/// A uniform table with individual characters overridden.
pub fn table_with(base: u32, overrides: &[(u8, u32)]) -> CharacterWidthTable {
    let mut widths = vec![base; REQUIRED_ENTRIES];
    for &(code, width) in overrides {
        widths[(code - b' ') as usize] = width;
    }
    CharacterWidthTable::new(widths).expect("table is complete")
}

/// All rendered lines of a run, across bank boundaries, terminators removed.
pub fn rendered_lines(banks: &[Bank]) -> Vec<Vec<u8>> {
    let mut stream = Vec::new();
    for bank in banks {
        stream.extend_from_slice(bank.content());
    }
    if stream.is_empty() {
        return Vec::new();
    }
    assert_eq!(
        stream.last(),
        Some(&TERMINATOR),
        "stream must end with a terminator"
    );
    stream.pop();
    stream
        .split(|&b| b == TERMINATOR)
        .map(<[u8]>::to_vec)
        .collect()
}

/// Rendered lines as strings, for readable assertions on ASCII output.
pub fn rendered_text(banks: &[Bank]) -> Vec<String> {
    rendered_lines(banks)
        .into_iter()
        .map(|line| String::from_utf8_lossy(&line).into_owned())
        .collect()
}

/// Drops the trailing padding lines, asserting that they are all empty.
pub fn strip_padding(mut lines: Vec<String>, padding: usize) -> Vec<String> {
    assert!(lines.len() >= padding, "fewer lines than padding");
    let tail = lines.split_off(lines.len() - padding);
    assert!(
        tail.iter().all(String::is_empty),
        "padding lines must be empty: {:?}",
        tail
    );
    lines
}

/// BLAKE3 hash over every bank number and its bytes.
pub fn compute_hash(banks: &[Bank]) -> String {
    let mut hasher = blake3::Hasher::new();
    for bank in banks {
        hasher.update(&bank.number.to_le_bytes());
        hasher.update(&bank.data);
    }
    hasher.finalize().to_hex().to_string()
}

/// Writes a width table file and returns its path.
pub fn write_widths_file(dir: &Path, table: &CharacterWidthTable) -> PathBuf {
    let path = dir.join("widths.json");
    let json = serde_json::to_string(table.as_slice()).expect("widths serialize");
    fs::write(&path, json).expect("write widths file");
    path
}

/// Writes a text file and returns its path.
pub fn write_text_file(dir: &Path, text: &[u8]) -> PathBuf {
    let path = dir.join("book.txt");
    fs::write(&path, text).expect("write text file");
    path
}
