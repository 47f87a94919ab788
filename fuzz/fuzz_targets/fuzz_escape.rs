#![no_main]
use libfuzzer_sys::fuzz_target;
use markup_tree::builder::element;
use markup_tree::serial::serialize;
use markup_tree::tree::Props;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let text = serialize(&element("T", Props::new().children(s)));
        if !s.is_empty() {
            let inner = &text["<T>".len()..text.len() - "</T>".len()];
            assert!(!inner.contains('<') && !inner.contains('>'));
        }

        let attr = serialize(&element("T", Props::new().attr("v", s)));
        let value = &attr["<T v=".len()..attr.len() - "/>".len()];
        let quote = value.chars().next().unwrap();
        let body = &value[1..value.len() - 1];
        assert!(!body.contains('<'));
        assert!(!body.contains(quote));
    }
});
