#![no_main]

use libfuzzer_sys::fuzz_target;
use romtext_backend_text::generate_banks;
use romtext_spec::{CharacterWidthTable, LayoutProfile, REQUIRED_ENTRIES};

fuzz_target!(|data: &[u8]| {
    // The first byte picks a uniform glyph width, the rest is the text.
    let Some((&width, text)) = data.split_first() else {
        return;
    };
    let width = u32::from(width % 16) + 1;
    let Ok(table) = CharacterWidthTable::new(vec![width; REQUIRED_ENTRIES]) else {
        return;
    };
    let profile = LayoutProfile::default();

    let lines = text.split(|&b| b == b'\n');
    let banks = match generate_banks(&table, &profile, 2, lines) {
        Ok(banks) => banks,
        Err(_) => return,
    };

    let last = banks.len() - 1;
    for (i, bank) in banks.iter().enumerate() {
        assert!(bank.content().len() <= profile.bank_max_bytes);
        assert_eq!(bank.has_sentinel(), i != last);
        for line in bank.lines() {
            let px = table.text_width(line).unwrap_or(u32::MAX);
            assert!(px <= profile.line_max_pixels);
        }
    }
});
