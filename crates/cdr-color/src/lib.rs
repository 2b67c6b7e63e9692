//! # cdr-color
//!
//! Converts CorelDRAW tagged colors to canonical 24-bit RGB.
//!
//! Conversion dispatches on the color's model tag:
//!
//! | Family | Tags | Method |
//! |--------|------|--------|
//! | Pantone (CDR1) | 0x00 | built-in swatch table, blended by saturation |
//! | CMYK | 0x01, 0x02, 0x03, 0x11, 0x15 | engine CMYK slot |
//! | RGB | 0x05 | engine RGB slot |
//! | Lab | 0x0c, 0x12 | engine Lab slot |
//! | CMY, HSB, HLS, B/W, gray, YIQ, registration | 0x04, 0x06-0x09, 0x0b, 0x14 | closed form |
//! | Spot | 0x19 | palette lookup, then convert the result |
//! | anything else | - | value is already packed RGB |
//!
//! # Example
//!
//! ```rust
//! use cdr_color::{ColorConverter, Palette};
//! use cdr_core::CdrColor;
//! use cdr_icc::DefaultEngine;
//!
//! let palette = Palette::new();
//! let engine = DefaultEngine::default();
//! let conv = ColorConverter::new(&palette, &engine);
//!
//! assert_eq!(conv.to_hex(CdrColor::new(0x09, 0x80)), "#808080");
//! ```
//!
//! # Limitations
//!
//! Spot colors ignore their tint bytes; only the palette index is used.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;
pub mod models;
mod palette;
mod pantone;

pub use convert::ColorConverter;
pub use palette::Palette;
pub use pantone::{pantone_swatch, PANTONE_SWATCH_COUNT};
