//! # cdr-style
//!
//! Style records and inheritance for CorelDRAW documents.
//!
//! Styles form a forest: each record names at most one parent and sets only
//! the attributes it overrides. [`StyleMap::resolve`] flattens a record with
//! its ancestors into one fully specified style.
//!
//! ```text
//!   1: font = Arial, size = 10
//!   ^
//!   2: size = 12, left indent = 3
//!   ^
//!   3: size = 14
//!
//!   resolve(3) = font Arial, size 14, left indent 3
//! ```
//!
//! The resolver is generic over [`Inherit`], so any record type that knows
//! its parent and how to layer overrides can be resolved.
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Style`] and its attribute types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod inherit;
mod style;

pub use inherit::{Inherit, StyleMap};
pub use style::{Align, FillStyle, FontSpec, Gradient, GradientStop, LineStyle, Style};
