#![no_main]

use libfuzzer_sys::fuzz_target;
use summit_core::EntityKey;

fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        // Decoding arbitrary websafe input should never panic
        if let Ok(key) = EntityKey::from_websafe(text) {
            // Accepted keys must round-trip through their canonical form
            let websafe = key.websafe();
            let reparsed = EntityKey::from_websafe(&websafe).expect("canonical key reparses");
            assert_eq!(reparsed, key);
        }
    }
});
