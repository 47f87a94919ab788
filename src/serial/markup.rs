//! Markup serializer.
//!
//! Serializes a [`TreeValue`] into a compact, single-line markup string. No
//! declaration, doctype or indentation is ever produced.

use std::fmt;

use tracing::debug;

use super::escape::{attr_quote, write_escaped_attr, write_escaped_text};
use crate::builder::RAW_TAG;
use crate::tree::{Node, TreeValue};
use crate::util::case::kebab_case;
use crate::util::number::format_number;

/// Options controlling markup serialization.
///
/// # Examples
///
/// ```
/// use markup_tree::builder::element;
/// use markup_tree::serial::{serialize_with_options, SerializeOptions};
/// use markup_tree::tree::Props;
///
/// let tree = element("Style", Props::new().attr("filterMode", "first"));
/// let opts = SerializeOptions::default().kebab_attributes(false);
/// assert_eq!(serialize_with_options(&tree, &opts), r#"<Style filterMode="first"/>"#);
/// ```
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// Tag name whose children are emitted verbatim with no wrapping element.
    /// Defaults to `"Raw"`; `None` disables the passthrough.
    pub raw_tag: Option<String>,
    /// Whether attribute names are converted from camel-case to kebab-case.
    /// Defaults to `true`.
    pub kebab_attributes: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            raw_tag: Some(RAW_TAG.to_string()),
            kebab_attributes: true,
        }
    }
}

impl SerializeOptions {
    /// Sets the passthrough tag name, or disables passthrough with `None`.
    #[must_use]
    pub fn raw_tag(mut self, tag: Option<&str>) -> Self {
        self.raw_tag = tag.map(str::to_string);
        self
    }

    /// Enables or disables camel-case to kebab-case attribute renaming.
    #[must_use]
    pub fn kebab_attributes(mut self, enabled: bool) -> Self {
        self.kebab_attributes = enabled;
        self
    }

    fn is_raw(&self, tag: &str) -> bool {
        self.raw_tag.as_deref() == Some(tag)
    }
}

/// Serializes a tree value to a markup string.
///
/// # Examples
///
/// ```
/// use markup_tree::builder::element;
/// use markup_tree::serial::serialize;
/// use markup_tree::tree::Props;
///
/// let tree = element("Foo", Props::new().children("<Bar/>"));
/// assert_eq!(serialize(&tree), "<Foo>&lt;Bar/&gt;</Foo>");
/// ```
#[must_use]
pub fn serialize(value: &TreeValue) -> String {
    serialize_with_options(value, &SerializeOptions::default())
}

/// Serializes a tree value to a markup string with the given options.
#[must_use]
pub fn serialize_with_options(value: &TreeValue, options: &SerializeOptions) -> String {
    let mut output = String::new();
    serialize_into(&mut output, value, options);
    debug!(bytes = output.len(), "serialized tree");
    output
}

/// Appends the serialized form of `value` to `out`.
pub fn serialize_into(out: &mut String, value: &TreeValue, options: &SerializeOptions) {
    serialize_value(out, value, options, false);
}

fn serialize_value(out: &mut String, value: &TreeValue, options: &SerializeOptions, raw: bool) {
    if value.is_void() {
        return;
    }
    match value {
        TreeValue::Sequence(items) => {
            for item in items {
                serialize_value(out, item, options, raw);
            }
        }
        TreeValue::Absent | TreeValue::Bool(_) => {}
        TreeValue::Number(n) => write_text(out, &format_number(*n), raw),
        TreeValue::Text(s) => write_text(out, s, raw),
        TreeValue::Node(node) => serialize_node(out, node, options, raw),
    }
}

fn write_text(out: &mut String, text: &str, raw: bool) {
    if raw {
        out.push_str(text);
    } else {
        write_escaped_text(out, text);
    }
}

fn serialize_node(out: &mut String, node: &Node, options: &SerializeOptions, raw: bool) {
    let children = node.props().get_children();
    let Some(tag) = node.tag() else {
        // Fragment: children only, stray attributes ignored
        serialize_value(out, children, options, raw);
        return;
    };
    if options.is_raw(tag) {
        serialize_value(out, children, options, true);
        return;
    }

    out.push('<');
    out.push_str(tag);
    for (name, value) in node.props().attributes() {
        let Some(text) = value.as_text() else {
            continue;
        };
        out.push(' ');
        if options.kebab_attributes {
            out.push_str(&kebab_case(name));
        } else {
            out.push_str(name);
        }
        out.push('=');
        let quote = attr_quote(&text);
        out.push(quote.as_char());
        write_escaped_attr(out, &text, quote);
        out.push(quote.as_char());
    }

    // Render children after a provisional `>`; if they produced nothing the
    // element is rewritten as self-closing.
    let mark = out.len();
    out.push('>');
    serialize_value(out, children, options, raw);
    if out.len() == mark + 1 {
        out.truncate(mark);
        out.push_str("/>");
    } else {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

impl fmt::Display for TreeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        serialize_into(&mut out, self, &SerializeOptions::default());
        f.write_str(&out)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        serialize_node(&mut out, self, &SerializeOptions::default(), false);
        f.write_str(&out)
    }
}
