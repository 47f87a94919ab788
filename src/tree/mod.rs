//! The tree value model.
//!
//! A [`TreeValue`] is everything the serializer accepts: absent values,
//! booleans, text, numbers, node descriptors, and (arbitrarily nested)
//! sequences of those. Trees are plain owned values with no parent links and
//! no interior mutability, so a finished tree can be shared across threads and
//! serialized from several places at once.
//!
//! Falsy values render as nothing: absent values, booleans, zero, `NaN` and
//! the empty string. This lets authors write conditional children directly:
//!
//! ```
//! use markup_tree::builder::element;
//! use markup_tree::serial::serialize;
//! use markup_tree::tree::{Props, TreeValue};
//!
//! let show_label = false;
//! let tree = element(
//!     "Style",
//!     Props::new().children(vec![
//!         TreeValue::from(show_label.then(|| element("Label", Props::new()))),
//!         element("Rule", Props::new()),
//!     ]),
//! );
//! assert_eq!(serialize(&tree), "<Style><Rule/></Style>");
//! ```

mod node;

use crate::util::number::widen_f32;

pub use node::{AttrValue, Node, Props, CHILDREN_KEY};

/// A value accepted by the serializer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TreeValue {
    /// Nothing; renders as the empty string.
    #[default]
    Absent,
    /// A boolean; renders as the empty string.
    Bool(bool),
    /// A number, rendered as text. Zero and `NaN` render as nothing.
    Number(f64),
    /// A string, rendered as escaped text. The empty string renders as
    /// nothing.
    Text(String),
    /// An element or fragment.
    Node(Node),
    /// An ordered sequence, rendered by concatenating its items.
    Sequence(Vec<TreeValue>),
}

impl TreeValue {
    /// Returns `true` for falsy values, which render as the empty string:
    /// absent, boolean, zero, `NaN` and empty text.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_void(&self) -> bool {
        match self {
            Self::Absent | Self::Bool(_) => true,
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Text(s) => s.is_empty(),
            Self::Node(_) | Self::Sequence(_) => false,
        }
    }

    /// Returns the node descriptor, if this value is one.
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl From<&str> for TreeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TreeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for TreeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! tree_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for TreeValue {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

tree_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f64);

impl From<f32> for TreeValue {
    fn from(value: f32) -> Self {
        Self::Number(widen_f32(value))
    }
}

impl From<Node> for TreeValue {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

impl<T: Into<TreeValue>> From<Vec<T>> for TreeValue {
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TreeValue>> From<Option<T>> for TreeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<TreeValue>> FromIterator<T> for TreeValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
