//! The node builder.
//!
//! Every tree is constructed through [`build`], which takes a [`Component`]
//! and a property bag:
//!
//! - a [`Component::Tag`] wraps the bag into a [`Node`] with that tag name,
//! - [`Component::Fragment`] produces a tagless node whose children are
//!   emitted without a wrapping element,
//! - a [`Component::Compound`] is called once with the full bag (children
//!   included) and its result is returned as-is, so compound components are
//!   fully expanded before serialization.
//!
//! No tag name or property is validated here; the builder accepts any name.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::BuildError;
use crate::tree::{Node, Props, TreeValue};

/// The tag name whose children are emitted verbatim, without escaping.
pub const RAW_TAG: &str = "Raw";

/// A compound component: expands a property bag into a tree value.
pub type CompoundFn = Arc<dyn Fn(Props) -> TreeValue + Send + Sync>;

/// A component reference.
#[derive(Clone)]
pub enum Component {
    /// A callable that renders a sub-tree from its props.
    Compound(CompoundFn),
    /// A plain element name.
    Tag(String),
    /// The fragment sentinel: no wrapping element.
    Fragment,
}

impl Component {
    /// Wraps a closure as a compound component.
    pub fn compound<F>(f: F) -> Self
    where
        F: Fn(Props) -> TreeValue + Send + Sync + 'static,
    {
        Self::Compound(Arc::new(f))
    }

    /// Resolves an untyped component reference.
    ///
    /// Strings become tags and `null` becomes the fragment sentinel. JSON
    /// has no callables, so every other shape is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidComponentKind`] for booleans, numbers,
    /// arrays and objects.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, BuildError> {
        use serde_json::Value;
        match value {
            Value::String(tag) => Ok(Self::Tag(tag.clone())),
            Value::Null => Ok(Self::Fragment),
            Value::Bool(_) => Err(BuildError::InvalidComponentKind { found: "boolean" }),
            Value::Number(_) => Err(BuildError::InvalidComponentKind { found: "number" }),
            Value::Array(_) => Err(BuildError::InvalidComponentKind { found: "array" }),
            Value::Object(_) => Err(BuildError::InvalidComponentKind { found: "object" }),
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(_) => f.write_str("Compound(..)"),
            Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Self::Fragment => f.write_str("Fragment"),
        }
    }
}

impl From<&str> for Component {
    fn from(tag: &str) -> Self {
        Self::Tag(tag.to_string())
    }
}

impl From<String> for Component {
    fn from(tag: String) -> Self {
        Self::Tag(tag)
    }
}

impl From<Option<&str>> for Component {
    fn from(tag: Option<&str>) -> Self {
        tag.map_or(Self::Fragment, Into::into)
    }
}

impl From<CompoundFn> for Component {
    fn from(f: CompoundFn) -> Self {
        Self::Compound(f)
    }
}

/// Builds a tree value from a component and its props.
///
/// # Examples
///
/// ```
/// use markup_tree::builder::build;
/// use markup_tree::serial::serialize;
/// use markup_tree::tree::Props;
///
/// let tree = build(
///     "Foo",
///     Props::new().children(vec![
///         build("Bar", Props::new().attr("hello", "world")),
///         build("Baz", Props::new()),
///     ]),
/// );
/// assert_eq!(serialize(&tree), r#"<Foo><Bar hello="world"/><Baz/></Foo>"#);
/// ```
pub fn build(component: impl Into<Component>, props: Props) -> TreeValue {
    match component.into() {
        Component::Compound(f) => {
            trace!(attributes = props.attributes().count(), "expanding compound component");
            f(props)
        }
        Component::Tag(tag) => TreeValue::Node(Node::new(Some(tag), props)),
        Component::Fragment => TreeValue::Node(Node::new(None, props)),
    }
}

/// Builds a tree value from a component, its props and a list of children.
///
/// The children replace any children already in `props` and are stored as a
/// sequence; otherwise this is identical to [`build`].
pub fn build_with_children<I>(component: impl Into<Component>, mut props: Props, children: I) -> TreeValue
where
    I: IntoIterator,
    I::Item: Into<TreeValue>,
{
    props.set_children(children.into_iter().collect::<TreeValue>());
    build(component, props)
}

/// Builds a plain element.
pub fn element(tag: impl Into<String>, props: Props) -> TreeValue {
    build(Component::Tag(tag.into()), props)
}

/// Builds a fragment grouping `children` without a wrapping element.
pub fn fragment<I>(children: I) -> TreeValue
where
    I: IntoIterator,
    I::Item: Into<TreeValue>,
{
    build_with_children(Component::Fragment, Props::new(), children)
}

/// Builds a [`RAW_TAG`] node whose text is emitted without escaping.
///
/// ```
/// use markup_tree::builder::raw;
/// use markup_tree::serial::serialize;
///
/// assert_eq!(serialize(&raw("<Foo/>")), "<Foo/>");
/// ```
pub fn raw(markup: impl Into<String>) -> TreeValue {
    element(RAW_TAG, Props::new().children(markup.into()))
}
