#![no_main]

use libfuzzer_sys::fuzz_target;
use summit::forms::{ConferenceForm, ConferenceQueryForm, SessionForm};

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        // Wire-form decoding should never panic on arbitrary JSON
        let _ = serde_json::from_str::<ConferenceForm>(text);
        let _ = serde_json::from_str::<SessionForm>(text);
        let _ = serde_json::from_str::<ConferenceQueryForm>(text);
    }
});
