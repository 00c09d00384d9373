//! End-to-end tests for the sanitize → wrap → pack pipeline.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p romtext-tests --test e2e_pipeline
//! ```

use pretty_assertions::assert_eq;

use romtext_backend_text::{bank_stream, generate_banks, GenerateError, WrapError};
use romtext_spec::{LayoutProfile, BANK_SENTINEL, INVALID_CHAR, PADDING_LINES};
use romtext_tests::{
    compute_hash, rendered_lines, rendered_text, strip_padding, table_with, uniform_table,
};

fn text_of(lines: &[&str]) -> Vec<String> {
    let banks = generate_banks(&uniform_table(8), &LayoutProfile::default(), 2, lines).unwrap();
    strip_padding(rendered_text(&banks), PADDING_LINES)
}

fn small_banks(bank_max_bytes: usize) -> LayoutProfile {
    LayoutProfile {
        bank_max_bytes,
        ..LayoutProfile::new("small")
    }
}

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn simple_wrap_breaks_before_overflowing_word() {
    assert_eq!(
        text_of(&["It was a dark and stormy night."]),
        vec!["It was a dark and", "stormy night."]
    );
}

#[test]
fn exact_fit_stays_on_one_line() {
    // 10 + 1 + 9 cells of 8px is exactly 160px.
    assert_eq!(
        text_of(&["abcdefghij klmnopqrs"]),
        vec!["abcdefghij klmnopqrs"]
    );
    assert_eq!(
        text_of(&["abcdefghij klmnopqrst"]),
        vec!["abcdefghij", "klmnopqrst"]
    );
}

#[test]
fn paragraphs_and_blank_lines_are_kept() {
    assert_eq!(
        text_of(&["First.", "", "   ", "Second."]),
        vec!["First.", "", "", "Second."]
    );
}

#[test]
fn runs_of_spaces_collapse() {
    assert_eq!(text_of(&["  a    b  "]), vec!["a b"]);
}

#[test]
fn variable_widths_change_break_points() {
    // Narrow 'i' fits far more per line than wide 'm'.
    let table = table_with(8, &[(b'i', 2), (b'm', 16)]);
    let profile = LayoutProfile::default();

    let narrow = "i".repeat(80);
    let banks = generate_banks(&table, &profile, 2, [narrow.as_str()]).unwrap();
    assert_eq!(strip_padding(rendered_text(&banks), PADDING_LINES), vec![narrow]);

    let banks = generate_banks(&table, &profile, 2, ["mmmmmmmmmm mmmmmmmmmm"]).unwrap();
    assert_eq!(
        strip_padding(rendered_text(&banks), PADDING_LINES),
        vec!["mmmmmmmmmm", "mmmmmmmmmm"]
    );
}

#[test]
fn wide_profile_fits_more_per_line() {
    let line = "abcdefghij klmnopqrst uv";
    let default = text_of(&[line]);
    let banks = generate_banks(&uniform_table(8), &LayoutProfile::wide(), 2, [line]).unwrap();
    let wide = strip_padding(rendered_text(&banks), PADDING_LINES);
    assert_eq!(default.len(), 2);
    assert_eq!(wide, vec![line]);
}

// ============================================================================
// Hyphenation
// ============================================================================

#[test]
fn long_word_is_hyphenated() {
    let table = uniform_table(10);
    let word = "a".repeat(20);
    let banks = generate_banks(&table, &LayoutProfile::default(), 2, [word.as_str()]).unwrap();
    assert_eq!(
        strip_padding(rendered_text(&banks), PADDING_LINES),
        vec![format!("{}-", "a".repeat(15)), "a".repeat(5)]
    );
}

#[test]
fn hyphenated_word_starts_on_fresh_line() {
    let table = uniform_table(10);
    let line = format!("ab {}", "a".repeat(20));
    let banks = generate_banks(&table, &LayoutProfile::default(), 2, [line.as_str()]).unwrap();
    assert_eq!(
        strip_padding(rendered_text(&banks), PADDING_LINES),
        vec![
            "ab".to_string(),
            format!("{}-", "a".repeat(15)),
            "a".repeat(5)
        ]
    );
}

#[test]
fn very_long_word_is_split_repeatedly() {
    let table = uniform_table(10);
    let word = "a".repeat(40);
    let banks = generate_banks(&table, &LayoutProfile::default(), 2, [word.as_str()]).unwrap();
    assert_eq!(
        strip_padding(rendered_text(&banks), PADDING_LINES),
        vec![
            format!("{}-", "a".repeat(15)),
            format!("{}-", "a".repeat(15)),
            "a".repeat(10)
        ]
    );
}

#[test]
fn impossible_hyphenation_fails_without_output() {
    let table = table_with(8, &[(b'W', 155), (b'-', 10)]);
    let err = generate_banks(&table, &LayoutProfile::default(), 2, ["ok", "WW"]).unwrap_err();
    assert_eq!(err.code(), "R002");
    match err {
        GenerateError::Wrap(WrapError::HyphenationImpossible {
            character, width, ..
        }) => {
            assert_eq!(character, 'W');
            assert_eq!(width, 155);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Sanitizing
// ============================================================================

#[test]
fn typographic_punctuation_becomes_ascii() {
    assert_eq!(
        text_of(&["\u{201c}Don\u{2019}t\u{201d} \u{2013} she said"]),
        vec!["\"Don't\" - she said"]
    );
}

#[test]
fn undrawable_bytes_become_invalid_marker() {
    let banks = generate_banks(
        &uniform_table(8),
        &LayoutProfile::default(),
        2,
        [b"Caf\xc3\xa9\tend".as_slice()],
    )
    .unwrap();
    let lines = rendered_lines(&banks);
    let expected: Vec<u8> = [b"Caf".as_slice(), &[INVALID_CHAR, INVALID_CHAR], b" end"].concat();
    assert_eq!(lines[0], expected);
}

// ============================================================================
// Padding and banks
// ============================================================================

#[test]
fn empty_input_is_only_padding() {
    let banks = generate_banks(
        &uniform_table(8),
        &LayoutProfile::default(),
        2,
        Vec::<&str>::new(),
    )
    .unwrap();
    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0].number, 2);
    assert_eq!(banks[0].data, vec![0u8; PADDING_LINES]);
    assert!(!banks[0].has_sentinel());
}

#[test]
fn overflowing_line_closes_bank_with_sentinel() {
    let lines = ["abcd"; 4];
    let banks = generate_banks(&uniform_table(8), &small_banks(16), 2, lines).unwrap();

    let numbers: Vec<u32> = banks.iter().map(|b| b.number).collect();
    assert_eq!(numbers, vec![2, 3, 4]);

    assert_eq!(banks[0].data, b"abcd\0abcd\0abcd\0\xff".to_vec());

    let mut second = b"abcd\0".to_vec();
    second.extend(std::iter::repeat(0u8).take(11));
    second.push(BANK_SENTINEL);
    assert_eq!(banks[1].data, second);

    assert_eq!(banks[2].data, vec![0u8; PADDING_LINES - 11]);
    assert!(!banks[2].has_sentinel());
}

#[test]
fn line_filling_bank_exactly_does_not_overflow() {
    // Three 5-byte lines fill a 15-byte bank; the padding goes to the next.
    let profile = LayoutProfile {
        padding_lines: 1,
        ..small_banks(15)
    };
    let banks = generate_banks(&uniform_table(8), &profile, 2, ["abcd"; 3]).unwrap();
    assert_eq!(banks.len(), 2);
    assert_eq!(banks[0].data.len(), 16);
    assert!(banks[0].has_sentinel());
    assert_eq!(banks[1].data, vec![0u8]);
}

#[test]
fn start_bank_offsets_numbering() {
    let banks = generate_banks(&uniform_table(8), &small_banks(16), 7, ["abcd"; 4]).unwrap();
    let numbers: Vec<u32> = banks.iter().map(|b| b.number).collect();
    assert_eq!(numbers, vec![7, 8, 9]);
}

#[test]
fn default_bank_holds_full_capacity() {
    // 4-byte lines never straddle: the first bank closes once its content
    // cannot take another 5 bytes.
    let lines = vec!["abcd"; 3300];
    let banks = generate_banks(&uniform_table(8), &LayoutProfile::default(), 2, &lines).unwrap();
    assert_eq!(banks.len(), 2);
    assert_eq!(banks[0].data.len(), 3276 * 5 + 1);
    assert!(banks[0].data.len() <= 0x4000);
    assert_eq!(banks[0].data.last(), Some(&BANK_SENTINEL));
    assert_eq!(banks[1].data.len(), 24 * 5 + PADDING_LINES);
    assert_eq!(rendered_lines(&banks).len(), 3300 + PADDING_LINES);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn generation_is_deterministic() {
    let table = table_with(6, &[(b' ', 4), (b'i', 2), (b'l', 3), (b'm', 10), (b'w', 10)]);
    let profile = small_banks(256);
    let lines: Vec<String> = (0..50)
        .map(|i| format!("Line {i}: the quick brown fox jumps over the lazy dog, twice."))
        .collect();

    let first = generate_banks(&table, &profile, 2, &lines).unwrap();
    let second = generate_banks(&table, &profile, 2, &lines).unwrap();
    assert_eq!(compute_hash(&first), compute_hash(&second));

    let streamed: Vec<_> = bank_stream(&table, &profile, 2, &lines)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(first, streamed);
    assert!(first.len() > 1);
}
