//! Input normalization.
//!
//! Input lines are raw bytes. Tabs become spaces, common typographic
//! punctuation (UTF-8 encoded) becomes its ASCII look-alike, and every other
//! byte the font cannot draw becomes the invalid-character marker.

use romtext_spec::{is_text_byte, INVALID_CHAR};

/// Spaces substituted for one tab.
const TAB_WIDTH: usize = 4;

/// UTF-8 punctuation with an ASCII equivalent.
const TYPOGRAPHIC_REPLACEMENTS: [(&[u8], u8); 6] = [
    (b"\xe2\x80\x93", b'-'),  // en dash
    (b"\xe2\x80\x94", b'-'),  // em dash
    (b"\xe2\x80\x98", b'\''), // left single quote
    (b"\xe2\x80\x99", b'\''), // right single quote
    (b"\xe2\x80\x9c", b'"'),  // left double quote
    (b"\xe2\x80\x9d", b'"'),  // right double quote
];

/// Sanitize one input line (without its line break).
///
/// The output only contains bytes in `0x20..=0x7F`. Sanitizing an already
/// sanitized line returns it unchanged.
pub fn sanitize_line(line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    let mut rest = line;

    while let Some((&byte, tail)) = rest.split_first() {
        if byte == b'\t' {
            out.extend(std::iter::repeat(b' ').take(TAB_WIDTH));
            rest = tail;
            continue;
        }

        if let Some((seq, ascii)) = TYPOGRAPHIC_REPLACEMENTS
            .iter()
            .find(|(seq, _)| rest.starts_with(seq))
        {
            out.push(*ascii);
            rest = &rest[seq.len()..];
            continue;
        }

        out.push(if is_text_byte(byte) {
            byte
        } else {
            INVALID_CHAR
        });
        rest = tail;
    }

    out
}

/// Lazily sanitize a sequence of lines.
pub fn sanitize_lines<I>(lines: I) -> impl Iterator<Item = Vec<u8>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    lines.into_iter().map(|line| sanitize_line(line.as_ref()))
}
