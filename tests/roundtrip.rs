//! Well-formedness checks against an independent XML parser.
//!
//! Serialized output is re-read with `quick-xml`; escaped text and attribute
//! values must unescape back to the authored strings exactly.
//!
//! Tab, newline and carriage return are written verbatim, never as character
//! references. Text content keeps them exactly, so the text property runs
//! over [`TEXT_ALPHABET`]. A conformant parser normalizes them to spaces in
//! attribute values, so the attribute property runs over [`ALPHABET`], which
//! excludes them; `test_attribute_whitespace_is_verbatim` pins the raw output.

#![allow(clippy::unwrap_used)]

use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::Reader;

use markup_tree::builder::element;
use markup_tree::serial::serialize;
use markup_tree::tree::Props;

/// Characters that exercise every escaping rule, plus ordinary text.
const ALPHABET: &[char] = &[
    'a', 'Z', '0', ' ', '<', '>', '&', '"', '\'', ';', '#', '/', '=', '!', '?', '[', ']', '-', 'é', '✓',
];

/// [`ALPHABET`] plus the whitespace controls that survive in text content.
const TEXT_ALPHABET: &[char] = &[
    'a', 'Z', '0', ' ', '<', '>', '&', '"', '\'', ';', '#', '/', '=', '!', '?', '[', ']', '-', 'é', '✓',
    '\t', '\n', '\r',
];

/// Deterministic pseudo-random strings over `alphabet`.
fn sample_strings(alphabet: &[char], count: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..count)
        .map(|_| {
            let len = usize::try_from(next() % 24).unwrap();
            (0..len)
                .map(|_| alphabet[usize::try_from(next() % alphabet.len() as u64).unwrap()])
                .collect()
        })
        .collect()
}

/// Reads every event of `markup`, failing on any parse error.
fn assert_well_formed(markup: &str) {
    let mut reader = Reader::from_str(markup);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("not well-formed: {e}\n{markup}"),
        }
    }
}

/// Returns the raw (still escaped) value of the first attribute of the root.
fn first_attribute_raw(markup: &str) -> String {
    let mut reader = Reader::from_str(markup);
    loop {
        match reader.read_event().unwrap() {
            Event::Empty(e) | Event::Start(e) => {
                let attr = e.attributes().next().unwrap().unwrap();
                return String::from_utf8(attr.value.into_owned()).unwrap();
            }
            Event::Eof => panic!("no element in {markup}"),
            _ => {}
        }
    }
}

#[test]
fn test_text_roundtrip() {
    for s in sample_strings(TEXT_ALPHABET, 500) {
        let markup = serialize(&element("T", Props::new().children(s.as_str())));
        assert_well_formed(&markup);
        if s.is_empty() {
            assert_eq!(markup, "<T/>");
            continue;
        }
        let inner = markup.strip_prefix("<T>").unwrap().strip_suffix("</T>").unwrap();
        assert!(!inner.contains('<') && !inner.contains('>'), "{inner}");
        assert_eq!(unescape(inner).unwrap(), s);
    }
}

#[test]
fn test_attribute_roundtrip() {
    for s in sample_strings(ALPHABET, 500) {
        let markup = serialize(&element("T", Props::new().attr("value", s.as_str())));
        assert_well_formed(&markup);
        let raw = first_attribute_raw(&markup);
        assert_eq!(unescape(&raw).unwrap(), s, "{markup}");

        let delimiter = markup.as_bytes()["<T value=".len()];
        if s.contains('"') && !s.contains('\'') {
            assert_eq!(delimiter, b'\'', "{markup}");
        } else {
            assert_eq!(delimiter, b'"', "{markup}");
        }
    }
}

#[test]
fn test_text_whitespace_roundtrip() {
    let s = "line one\n\tline two\r\nend";
    let markup = serialize(&element("T", Props::new().children(s)));
    assert_eq!(markup, format!("<T>{s}</T>"));
    assert_well_formed(&markup);
}

#[test]
fn test_attribute_whitespace_is_verbatim() {
    let s = "a\tb\nc\rd";
    let markup = serialize(&element("T", Props::new().attr("value", s)));
    assert_eq!(markup, format!("<T value=\"{s}\"/>"));
    assert_well_formed(&markup);
    assert_eq!(first_attribute_raw(&markup), s);
}

#[test]
fn test_nested_document_is_well_formed() {
    let strings = sample_strings(TEXT_ALPHABET, 40);
    let children: Vec<_> = strings
        .iter()
        .enumerate()
        .map(|(i, s)| {
            element(
                "Parameter",
                Props::new().attr("name", s.as_str()).attr("index", i).children(s.as_str()),
            )
        })
        .collect();
    let markup = serialize(&element("Datasource", Props::new().children(children)));
    assert_well_formed(&markup);
}
