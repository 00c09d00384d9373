#![no_main]

use libfuzzer_sys::fuzz_target;
use romtext_spec::{CharacterWidthTable, LayoutProfile};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must never panic, only return errors.
        if let Ok(profile) = LayoutProfile::from_json_str(s) {
            assert!(profile.validate().is_ok());
        }
        let _ = CharacterWidthTable::from_json_str(s);
        let _ = serde_json::from_str::<LayoutProfile>(s);
    }
});
