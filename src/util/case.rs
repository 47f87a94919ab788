//! Attribute name case conversion.
//!
//! Authored property names are camel-case (`strokeWidth`) while the target
//! markup uses kebab-case (`stroke-width`). The conversion is purely lexical:
//! every ASCII uppercase letter becomes `-` followed by its lowercase form.
//! Acronyms and leading capitals are not special-cased, so `fontURL` becomes
//! `font-u-r-l` and `Name` becomes `-name`.

use std::borrow::Cow;

/// Converts a camel-case name to kebab-case.
///
/// Returns the input unchanged (borrowed) when it has no ASCII uppercase
/// letters.
///
/// # Examples
///
/// ```
/// use markup_tree::util::case::kebab_case;
///
/// assert_eq!(kebab_case("strokeWidth"), "stroke-width");
/// assert_eq!(kebab_case("fill"), "fill");
/// ```
#[must_use]
pub fn kebab_case(name: &str) -> Cow<'_, str> {
    if !name.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }
    let upper = name.bytes().filter(u8::is_ascii_uppercase).count();
    let mut out = String::with_capacity(name.len() + upper);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}
