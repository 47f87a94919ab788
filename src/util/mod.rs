//! Small text helpers shared by the serializer.
//!
//! Contains attribute name case conversion and number formatting.

pub mod case;
pub mod number;
