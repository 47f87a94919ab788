//! Node descriptors and their property bags.
//!
//! A [`Node`] pairs an optional tag name with a [`Props`] bag. The bag keeps
//! attributes in insertion order and stores the reserved `children` entry in
//! a dedicated slot, so children can never leak into the attribute list.

use std::borrow::Cow;

use indexmap::IndexMap;

use super::TreeValue;
use crate::util::number::{format_number, widen_f32};

/// The reserved property key that holds nested content.
pub const CHILDREN_KEY: &str = "children";

/// The value of a single element attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttrValue {
    /// The attribute is omitted from the opening tag entirely.
    #[default]
    Unset,
    /// A boolean, rendered as `true` or `false`.
    Bool(bool),
    /// A number, rendered without a trailing `.0`.
    Number(f64),
    /// A string, rendered as-is (escaped at serialization time).
    Text(String),
}

impl AttrValue {
    /// Returns `true` if this value is [`AttrValue::Unset`].
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the unescaped text this value renders as, or `None` if unset.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Unset => None,
            Self::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Self::Number(n) => Some(Cow::Owned(format_number(*n))),
            Self::Text(s) => Some(Cow::Borrowed(s)),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! attr_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

attr_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f64);

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Number(widen_f32(value))
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}

impl From<AttrValue> for TreeValue {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::Unset => Self::Absent,
            AttrValue::Bool(b) => Self::Bool(b),
            AttrValue::Number(n) => Self::Number(n),
            AttrValue::Text(s) => Self::Text(s),
        }
    }
}

/// A property bag: ordered attributes plus nested children.
///
/// # Examples
///
/// ```
/// use markup_tree::tree::Props;
///
/// let props = Props::new()
///     .attr("strokeWidth", 2)
///     .attr("fill", "red")
///     .children("label");
/// assert_eq!(props.attributes().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Props {
    attributes: IndexMap<String, AttrValue>,
    children: Box<TreeValue>,
}

impl Props {
    /// Creates an empty property bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, keeping its first insertion position if it was
    /// already present.
    ///
    /// The reserved key `children` is routed to the children slot instead.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets the nested content, replacing any previous children.
    #[must_use]
    pub fn children(mut self, children: impl Into<TreeValue>) -> Self {
        self.children = Box::new(children.into());
        self
    }

    /// In-place form of [`attr`](Self::attr).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value: AttrValue = value.into();
        if name == CHILDREN_KEY {
            self.children = Box::new(value.into());
        } else {
            self.attributes.insert(name, value);
        }
    }

    /// In-place form of [`children`](Self::children).
    pub fn set_children(&mut self, children: impl Into<TreeValue>) {
        self.children = Box::new(children.into());
    }

    /// Looks up an attribute by its authored (untransformed) name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Iterates over attributes in insertion order, including unset ones.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the nested content.
    #[must_use]
    pub fn get_children(&self) -> &TreeValue {
        &self.children
    }

    /// Splits the bag into its children and the remaining attributes.
    #[must_use]
    pub fn into_parts(self) -> (TreeValue, IndexMap<String, AttrValue>) {
        (*self.children, self.attributes)
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

/// A node descriptor: one element instance, or a fragment when `tag` is
/// `None`.
///
/// Nodes are created by the [`builder`](crate::builder) and are immutable
/// afterwards. Equality is structural.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    tag: Option<String>,
    props: Props,
}

impl Node {
    pub(crate) fn new(tag: Option<String>, props: Props) -> Self {
        Self { tag, props }
    }

    /// The element name, or `None` for a fragment.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns `true` if this node is a transparent fragment.
    #[must_use]
    pub fn is_fragment(&self) -> bool {
        self.tag.is_none()
    }

    /// The node's property bag.
    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }
}
