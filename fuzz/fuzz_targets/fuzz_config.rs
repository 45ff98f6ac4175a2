#![no_main]

use calculator::CalculatorConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Decoding arbitrary JSON must never panic
        let _ = serde_json::from_str::<CalculatorConfig>(s);
    }
});
