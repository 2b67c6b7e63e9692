//! # cdr-core
//!
//! Core types for normalizing document-native colors.
//!
//! A CorelDRAW document stores every color as a pair of a model tag and a
//! packed 32-bit value. This crate provides the foundational types used by
//! the rest of the workspace:
//!
//! - [`CdrColor`] - Raw `(model, value)` pair as delivered by the parser
//! - [`ColorModel`] - Classification of model tags into conversion families
//! - [`Rgb24`] - Canonical packed `0xRRGGBB` output
//! - [`BmpColorModel`] - Legacy bitmap model numbering and its remapping
//!
//! ## Crate Structure
//!
//! ```text
//! cdr-core (this crate)
//!    ^
//!    |
//!    +-- cdr-icc (transform slots, color engines)
//!    +-- cdr-color (palette, model converter)
//!    +-- cdr-style (style records, inheritance)
//!    +-- cdr-doc (per-document state)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`CdrColor`] and [`Rgb24`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bmp;
pub mod color;
pub mod error;
pub mod rgb;

pub use bmp::BmpColorModel;
pub use color::{CdrColor, ColorModel};
pub use error::{Error, Result};
pub use rgb::{channel, Rgb24};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use cdr_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bmp::BmpColorModel;
    pub use crate::color::{CdrColor, ColorModel};
    pub use crate::error::{Error, Result};
    pub use crate::rgb::{channel, Rgb24};
}
