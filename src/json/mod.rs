//! JSON-encoded tree input.
//!
//! Trees built in Rust are well-typed, but trees that arrive from outside the
//! process are not. This module decodes a JSON document into a
//! [`TreeValue`], routing every node through the [node builder](crate::builder)
//! and rejecting anything that does not have the descriptor shape.
//!
//! # Format
//!
//! | JSON                               | Tree value                     |
//! |------------------------------------|--------------------------------|
//! | `null`                             | absent                         |
//! | `true` / `false`                   | boolean                        |
//! | number                             | number                         |
//! | string                             | text                           |
//! | array                              | sequence                       |
//! | `{"tag": ..., "props": {...}}`     | built node                     |
//!
//! `tag` is a string (element name, or a registered compound component) or
//! `null` (fragment). Inside `props`, `children` holds a nested tree value
//! and every other entry is an attribute whose value must be a string,
//! number, boolean or `null` (unset).
//!
//! ```
//! use markup_tree::json;
//! use markup_tree::serial::serialize;
//!
//! let tree = json::from_str(r#"
//!     {"tag": "Foo", "props": {"children": [
//!         {"tag": "Bar", "props": {"hello": "world"}},
//!         {"tag": "Baz", "props": {}}
//!     ]}}
//! "#).unwrap();
//! assert_eq!(serialize(&tree), r#"<Foo><Bar hello="world"/><Baz/></Foo>"#);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};
use tracing::trace;

use crate::builder::{build, Component, CompoundFn};
use crate::error::DecodeError;
use crate::tree::{AttrValue, Props, TreeValue, CHILDREN_KEY};

const TAG_KEY: &str = "tag";
const PROPS_KEY: &str = "props";

/// Decodes JSON trees, optionally expanding registered compound components.
///
/// # Examples
///
/// ```
/// use markup_tree::builder::element;
/// use markup_tree::json::Decoder;
/// use markup_tree::serial::serialize;
/// use markup_tree::tree::Props;
///
/// let decoder = Decoder::new().with_component("Shout", |props: Props| {
///     let (children, _) = props.into_parts();
///     element("Text", Props::new().attr("size", 20).children(children))
/// });
/// let tree = decoder
///     .decode_str(r#"{"tag": "Shout", "props": {"children": "hi"}}"#)
///     .unwrap();
/// assert_eq!(serialize(&tree), r#"<Text size="20">hi</Text>"#);
/// ```
#[derive(Default, Clone)]
pub struct Decoder {
    components: HashMap<String, CompoundFn>,
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Decoder").field("components", &names).finish()
    }
}

impl Decoder {
    /// Creates a decoder with no registered components.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a compound component under `name`.
    ///
    /// A node whose `tag` equals `name` is expanded through `f` instead of
    /// becoming an element with that tag.
    #[must_use]
    pub fn with_component<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Props) -> TreeValue + Send + Sync + 'static,
    {
        self.components.insert(name.into(), std::sync::Arc::new(f));
        self
    }

    /// Decodes a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] if the input is not JSON, or any error
    /// [`decode_value`](Self::decode_value) can return.
    pub fn decode_str(&self, input: &str) -> Result<TreeValue, DecodeError> {
        let value: Value = serde_json::from_str(input)?;
        self.decode_value(&value)
    }

    /// Decodes an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedNode`] if an object does not have the
    /// node descriptor shape, and [`DecodeError::Build`] if a `tag` is not a
    /// string or `null`.
    pub fn decode_value(&self, value: &Value) -> Result<TreeValue, DecodeError> {
        let mut path = String::new();
        self.decode_tree(value, &mut path)
    }

    fn decode_tree(&self, value: &Value, path: &mut String) -> Result<TreeValue, DecodeError> {
        match value {
            Value::Null => Ok(TreeValue::Absent),
            Value::Bool(b) => Ok(TreeValue::Bool(*b)),
            Value::Number(n) => Ok(TreeValue::Number(number_to_f64(n))),
            Value::String(s) => Ok(TreeValue::Text(s.clone())),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let len = path.len();
                    push_segment(path, &i.to_string());
                    out.push(self.decode_tree(item, path)?);
                    path.truncate(len);
                }
                Ok(TreeValue::Sequence(out))
            }
            Value::Object(object) => self.decode_node(object, path),
        }
    }

    fn decode_node(&self, object: &Map<String, Value>, path: &mut String) -> Result<TreeValue, DecodeError> {
        if let Some(key) = object.keys().find(|k| *k != TAG_KEY && *k != PROPS_KEY) {
            return Err(malformed(path, format!("unexpected key `{key}`")));
        }
        let Some(tag) = object.get(TAG_KEY) else {
            return Err(malformed(path, "missing `tag`"));
        };
        let Some(props) = object.get(PROPS_KEY) else {
            return Err(malformed(path, "missing `props`"));
        };

        let component = {
            let len = path.len();
            push_segment(path, TAG_KEY);
            let component = Component::from_json(tag).map_err(|source| DecodeError::Build {
                path: display_path(path),
                source,
            })?;
            path.truncate(len);
            component
        };

        let len = path.len();
        push_segment(path, PROPS_KEY);
        let props = self.decode_props(props, path)?;
        path.truncate(len);

        let component = match component {
            Component::Tag(name) => match self.components.get(&name) {
                Some(f) => {
                    trace!(component = %name, "expanding registered component");
                    Component::Compound(f.clone())
                }
                None => Component::Tag(name),
            },
            other => other,
        };
        Ok(build(component, props))
    }

    fn decode_props(&self, value: &Value, path: &mut String) -> Result<Props, DecodeError> {
        let Value::Object(entries) = value else {
            return Err(malformed(path, format!("`props` must be an object, found {}", kind(value))));
        };
        let mut props = Props::new();
        for (key, value) in entries {
            let len = path.len();
            push_segment(path, key);
            if key == CHILDREN_KEY {
                props.set_children(self.decode_tree(value, path)?);
            } else {
                props.insert(key.as_str(), decode_attr(value, path)?);
            }
            path.truncate(len);
        }
        Ok(props)
    }
}

/// Decodes a JSON string with a default [`Decoder`].
///
/// # Errors
///
/// See [`Decoder::decode_str`].
pub fn from_str(input: &str) -> Result<TreeValue, DecodeError> {
    Decoder::new().decode_str(input)
}

/// Decodes a parsed JSON value with a default [`Decoder`].
///
/// # Errors
///
/// See [`Decoder::decode_value`].
pub fn from_value(value: &Value) -> Result<TreeValue, DecodeError> {
    Decoder::new().decode_value(value)
}

fn decode_attr(value: &Value, path: &str) -> Result<AttrValue, DecodeError> {
    match value {
        Value::Null => Ok(AttrValue::Unset),
        Value::Bool(b) => Ok(AttrValue::Bool(*b)),
        Value::Number(n) => Ok(AttrValue::Number(number_to_f64(n))),
        Value::String(s) => Ok(AttrValue::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => Err(malformed(
            path,
            format!("attribute values must be scalars, found {}", kind(value)),
        )),
    }
}

#[allow(clippy::cast_precision_loss)]
fn number_to_f64(n: &serde_json::Number) -> f64 {
    n.as_f64()
        .or_else(|| n.as_i64().map(|i| i as f64))
        .or_else(|| n.as_u64().map(|u| u as f64))
        .unwrap_or(f64::NAN)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Appends a JSON-pointer segment, escaping `~` and `/`.
fn push_segment(path: &mut String, segment: &str) {
    path.push('/');
    for ch in segment.chars() {
        match ch {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            _ => path.push(ch),
        }
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

fn malformed(path: &str, message: impl Into<String>) -> DecodeError {
    DecodeError::MalformedNode {
        path: display_path(path),
        message: message.into(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::builder::element;
    use crate::error::BuildError;
    use crate::serial::serialize;
    use serde_json::json;

    #[test]
    fn test_decode_scalars() {
        assert_eq!(from_value(&json!(null)).unwrap(), TreeValue::Absent);
        assert_eq!(from_value(&json!(true)).unwrap(), TreeValue::Bool(true));
        assert_eq!(from_value(&json!(3)).unwrap(), TreeValue::Number(3.0));
        assert_eq!(from_value(&json!("x")).unwrap(), TreeValue::from("x"));
    }

    #[test]
    fn test_decode_node_builds_element() {
        let tree = from_value(&json!({"tag": "Layer", "props": {"name": "roads", "children": "x"}})).unwrap();
        let node = tree.as_node().unwrap();
        assert_eq!(node.tag(), Some("Layer"));
        assert_eq!(node.props().get("name"), Some(&AttrValue::from("roads")));
        assert_eq!(node.props().get_children(), &TreeValue::from("x"));
    }

    #[test]
    fn test_decode_fragment() {
        let tree = from_value(&json!({"tag": null, "props": {"children": ["a", "b"]}})).unwrap();
        assert!(tree.as_node().unwrap().is_fragment());
        assert_eq!(serialize(&tree), "ab");
    }

    #[test]
    fn test_decode_null_attribute_is_unset() {
        let tree = from_value(&json!({"tag": "A", "props": {"x": null, "y": 1}})).unwrap();
        assert_eq!(serialize(&tree), r#"<A y="1"/>"#);
    }

    #[test]
    fn test_decode_keeps_attribute_order() {
        let tree = from_str(r#"{"tag": "A", "props": {"zeta": 1, "alpha": 2}}"#).unwrap();
        assert_eq!(serialize(&tree), r#"<A zeta="1" alpha="2"/>"#);
    }

    #[test]
    fn test_invalid_tag_kind() {
        let err = from_value(&json!({"tag": 7, "props": {}})).unwrap_err();
        match err {
            DecodeError::Build { path, source } => {
                assert_eq!(path, "/tag");
                assert_eq!(source, BuildError::InvalidComponentKind { found: "number" });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_tag_is_malformed() {
        let err = from_value(&json!([1, {"props": {}}])).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedNode { ref path, .. } if path == "/1"));
        assert!(err.to_string().contains("missing `tag`"));
    }

    #[test]
    fn test_missing_props_is_malformed() {
        let err = from_value(&json!({"tag": "A"})).unwrap_err();
        assert_eq!(err.path(), Some("/"));
        assert!(err.to_string().contains("missing `props`"));
    }

    #[test]
    fn test_unexpected_key_is_malformed() {
        let err = from_value(&json!({"tag": "A", "props": {}, "elem": "A"})).unwrap_err();
        assert!(err.to_string().contains("unexpected key `elem`"));
    }

    #[test]
    fn test_non_object_props_is_malformed() {
        let err = from_value(&json!({"tag": "A", "props": [1]})).unwrap_err();
        assert_eq!(err.path(), Some("/props"));
    }

    #[test]
    fn test_compound_attribute_is_malformed() {
        let err = from_value(&json!({"tag": "A", "props": {"children": [
            {"tag": "B", "props": {"a/b": {"nested": true}}}
        ]}}))
        .unwrap_err();
        assert_eq!(err.path(), Some("/props/children/0/props/a~1b"));
    }

    #[test]
    fn test_registered_component_expands() {
        let decoder = Decoder::new().with_component("Pair", |_| {
            TreeValue::from(vec![element("A", Props::new()), element("B", Props::new())])
        });
        let tree = decoder
            .decode_value(&json!({"tag": "Root", "props": {"children": {"tag": "Pair", "props": {}}}}))
            .unwrap();
        assert_eq!(serialize(&tree), "<Root><A/><B/></Root>");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(from_str("{not json"), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_decoder_debug_lists_components() {
        let decoder = Decoder::new()
            .with_component("B", |_| TreeValue::Absent)
            .with_component("A", |_| TreeValue::Absent);
        assert_eq!(format!("{decoder:?}"), r#"Decoder { components: ["A", "B"] }"#);
    }
}
