#![no_main]
use libfuzzer_sys::fuzz_target;
use regicide::Square;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(square) = s.parse::<Square>() {
            assert_eq!(square.to_string(), s);
        }
    }
});
