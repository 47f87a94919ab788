//! Escaping for the two text contexts of the output.
//!
//! Element text escapes `&`, `<` and `>`; quotes are left alone.
//!
//! Attribute values pick their delimiter per value: a value that contains a
//! `"` but no `'` is wrapped in single quotes, anything else in double
//! quotes. Inside either delimiter `&` and `<` are escaped; `"` is escaped
//! only inside double quotes. `>` and `'` are never escaped in attributes.

/// The quote character used to delimit an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// `"`
    Double,
    /// `'`
    Single,
}

impl Quote {
    /// The delimiter character.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }
}

/// Chooses the delimiter for an attribute value.
#[must_use]
pub fn attr_quote(value: &str) -> Quote {
    if value.contains('"') && !value.contains('\'') {
        Quote::Single
    } else {
        Quote::Double
    }
}

/// Appends `text` to `out`, escaped as element content.
pub fn write_escaped_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Appends `value` to `out`, escaped for an attribute delimited by `quote`.
///
/// The delimiters themselves are not written.
pub fn write_escaped_attr(out: &mut String, value: &str, quote: Quote) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' if quote == Quote::Double => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Escapes `text` as element content.
///
/// # Examples
///
/// ```
/// use markup_tree::serial::escape::escape_text;
///
/// assert_eq!(escape_text("<Bar/>"), "&lt;Bar/&gt;");
/// ```
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    write_escaped_text(&mut out, text);
    out
}

/// Escapes `value` as a complete attribute value, delimiters included.
///
/// # Examples
///
/// ```
/// use markup_tree::serial::escape::escape_attr;
///
/// assert_eq!(escape_attr("a & b"), "\"a &amp; b\"");
/// assert_eq!(escape_attr("say \"hi\""), "'say \"hi\"'");
/// ```
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let quote = attr_quote(value);
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote.as_char());
    write_escaped_attr(&mut out, value, quote);
    out.push(quote.as_char());
    out
}
