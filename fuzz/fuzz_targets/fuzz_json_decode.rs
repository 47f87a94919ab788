#![no_main]
use libfuzzer_sys::fuzz_target;
use markup_tree::json;
use markup_tree::serial::serialize;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Decode -> serialize should never panic, whatever the input shape
        if let Ok(tree) = json::from_str(s) {
            let _ = serialize(&tree);
        }
    }
});
