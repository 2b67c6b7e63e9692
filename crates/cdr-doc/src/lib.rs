//! # cdr-doc
//!
//! The color and style layer a CorelDRAW parser talks to.
//!
//! [`DocumentState`] bundles the three pieces of per-document state:
//!
//! - the spot palette ([`Palette`])
//! - the style records ([`StyleMap`] of [`Style`])
//! - the color engine and its transform slots ([`ColorEngine`])
//!
//! One instance is created per parsed document and dropped with it.
//!
//! ```rust
//! use cdr_core::CdrColor;
//! use cdr_doc::DocumentState;
//!
//! let doc = DocumentState::new();
//! // CMY 0,0,0 is white
//! assert_eq!(doc.rgb_color_string(CdrColor::new(0x04, 0)), "#ffffff");
//! ```
//!
//! ## Feature Flags
//!
//! - `lcms` (default) - Little CMS 2 backed transforms
//! - `serde` - Serialization for colors and styles, and `DocumentFile`
//!   palette/style tables

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(feature = "serde")]
mod file;
mod state;

#[cfg(feature = "serde")]
pub use file::DocumentFile;
pub use state::DocumentState;

pub use cdr_color::{ColorConverter, Palette};
pub use cdr_core::{BmpColorModel, CdrColor, ColorModel, Rgb24};
pub use cdr_icc::{ApproxEngine, ColorEngine, DefaultEngine, SlotInput, SlotSource, TransformSlot};
pub use cdr_style::{Inherit, Style, StyleMap};
