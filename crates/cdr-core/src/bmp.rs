//! Legacy bitmap color-model numbering.
//!
//! Palette entries of embedded bitmaps are tagged with an older model
//! numbering than vector-object colors. [`BmpColorModel::canonical`] maps a
//! legacy code onto the tag understood by the color converter, or `None`
//! when the value is already packed RGB.
//!
//! | Legacy | Canonical tag | Family |
//! |--------|---------------|--------|
//! | 0 | 0x00 | Pantone |
//! | 1 | 0x05 | RGB |
//! | 2 | 0x04 | CMY |
//! | 3 | 0x03 | CMYK 255 |
//! | 4 | 0x06 | HSB |
//! | 5 | 0x09 | Grayscale |
//! | 6 | 0x08 | Black/white |
//! | 7 | 0x07 | HLS |
//! | 8, 9 | - | packed RGB |
//! | 10 | 0x05 | RGB |
//! | 11 | 0x12 | Lab v2 |

use crate::CdrColor;

/// Legacy-to-canonical table, indexed by legacy code.
const LEGACY_TO_TAG: [Option<u16>; 12] = [
    Some(0x00),
    Some(0x05),
    Some(0x04),
    Some(0x03),
    Some(0x06),
    Some(0x09),
    Some(0x08),
    Some(0x07),
    None,
    None,
    Some(0x05),
    Some(0x12),
];

/// A bitmap palette color tagged with a legacy model code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BmpColorModel(pub u16);

impl BmpColorModel {
    /// Canonical model tag for this legacy code.
    ///
    /// Returns `None` for codes whose value is already packed RGB,
    /// including every code outside the table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cdr_core::BmpColorModel;
    ///
    /// assert_eq!(BmpColorModel(11).canonical(), Some(0x12));
    /// assert_eq!(BmpColorModel(8).canonical(), None);
    /// assert_eq!(BmpColorModel(42).canonical(), None);
    /// ```
    pub fn canonical(self) -> Option<u16> {
        LEGACY_TO_TAG.get(usize::from(self.0)).copied().flatten()
    }

    /// Retags a legacy bitmap color for the converter.
    ///
    /// `color.model` is read as a legacy code; the value is left untouched.
    pub fn remap(color: CdrColor) -> Option<CdrColor> {
        Self(color.model)
            .canonical()
            .map(|tag| CdrColor::new(tag, color.value))
    }
}
