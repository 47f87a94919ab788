//! # markup-tree
//!
//! Build declarative element trees in code and serialize them to compact,
//! well-formed markup, such as the XML configuration documents consumed by
//! map rendering engines.
//!
//! Trees are constructed through a single builder operation,
//! [`builder::build`], which turns a component (a tag name, the fragment
//! sentinel, or a compound component closure) plus a property bag into a
//! [`TreeValue`]. The finished tree is then passed once to
//! [`serial::serialize`].
//!
//! ## Quick Start
//!
//! ```
//! use markup_tree::builder::{build, raw};
//! use markup_tree::serial::serialize;
//! use markup_tree::tree::Props;
//!
//! let map = build(
//!     "Map",
//!     Props::new().attr("backgroundColor", "#b5d0d0").children(vec![
//!         build("Style", Props::new().attr("name", "water")),
//!         raw("<!-- generated -->"),
//!     ]),
//! );
//! assert_eq!(
//!     serialize(&map),
//!     r##"<Map background-color="#b5d0d0"><Style name="water"/><!-- generated --></Map>"##
//! );
//! ```

pub mod builder;
pub mod error;
pub mod json;
pub mod serial;
pub mod tree;
pub mod util;

// Re-export primary types at the crate root for convenience.
pub use builder::{build, build_with_children, Component};
pub use error::{BuildError, DecodeError};
pub use serial::{serialize, SerializeOptions};
pub use tree::{AttrValue, Node, Props, TreeValue};
