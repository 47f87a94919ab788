//! Tree serialization.
//!
//! This module flattens a [`TreeValue`](crate::tree::TreeValue) into markup
//! text. The serializer handles text and attribute escaping, attribute
//! renaming, self-closing empty elements, fragments and the raw passthrough
//! tag.

pub mod escape;
pub mod markup;

pub use markup::{serialize, serialize_into, serialize_with_options, SerializeOptions};
