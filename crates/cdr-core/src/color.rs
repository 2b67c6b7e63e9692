//! Tagged document colors.
//!
//! Every color in a CorelDRAW document is stored as a model tag plus a
//! packed 32-bit value. The meaning of the four bytes in the value depends
//! entirely on the tag.
//!
//! # Packing
//!
//! ```text
//!  31      24 23      16 15       8 7        0
//! +----------+----------+----------+----------+
//! |   col3   |   col2   |   col1   |   col0   |
//! +----------+----------+----------+----------+
//!             \_______ secondary16 / primary16 _______/
//! ```
//!
//! Models with a wide primary component (HSB/HLS hue, Pantone index) combine
//! `col1:col0` into a 16-bit field; the Pantone saturation combines
//! `col3:col2`.
//!
//! # Example
//!
//! ```rust
//! use cdr_core::{CdrColor, ColorModel};
//!
//! let gray = CdrColor::new(0x09, 0x80);
//! assert_eq!(gray.kind(), ColorModel::Grayscale);
//! assert_eq!(gray.channels(), [0x80, 0, 0, 0]);
//! ```

use crate::{Error, Result};
use std::fmt;

/// Raw tagged color as extracted by the record parser.
///
/// Immutable value type with structural equality. The tag is kept verbatim
/// (rather than only its [`ColorModel`] class) because several tags share a
/// conversion family and unknown tags must round-trip unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CdrColor {
    /// Model tag.
    pub model: u16,
    /// Packed channel bytes, `col0` in the low byte.
    pub value: u32,
}

impl CdrColor {
    /// Creates a color from a raw tag and packed value.
    #[inline]
    pub const fn new(model: u16, value: u32) -> Self {
        Self { model, value }
    }

    /// Builds a color from individual channel bytes (`col0` first).
    #[inline]
    pub const fn from_channels(model: u16, channels: [u8; 4]) -> Self {
        Self {
            model,
            value: u32::from_le_bytes(channels),
        }
    }

    /// Returns the conversion family of this color's tag.
    #[inline]
    pub const fn kind(&self) -> ColorModel {
        ColorModel::from_tag(self.model)
    }

    /// Unpacks the four channel bytes, `col0` (lowest byte) first.
    #[inline]
    pub const fn channels(&self) -> [u8; 4] {
        self.value.to_le_bytes()
    }

    /// The 16-bit field formed by `col1:col0`.
    #[inline]
    pub const fn primary16(&self) -> u16 {
        (self.value & 0xffff) as u16
    }

    /// The 16-bit field formed by `col3:col2`.
    #[inline]
    pub const fn secondary16(&self) -> u16 {
        (self.value >> 16) as u16
    }
}

impl fmt::Display for CdrColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:08x})", self.kind(), self.value)
    }
}

/// Conversion family of a model tag.
///
/// The tag set is closed; everything unrecognized lands in
/// [`ColorModel::Unknown`] and is treated as already-packed RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Pantone swatch reference from CDR version 1 (tag 0x00).
    Pantone,
    /// CMYK with 0..100 channels (tags 0x01, 0x02, 0x15).
    Cmyk100,
    /// CMYK with 0..255 channels (tags 0x03, 0x11).
    Cmyk255,
    /// Subtractive CMY (tag 0x04).
    Cmy,
    /// RGB stored as B,G,R bytes (tag 0x05).
    Rgb,
    /// Hue/saturation/brightness (tag 0x06).
    Hsb,
    /// Hue/lightness/saturation (tag 0x07).
    Hls,
    /// Pure black or white (tag 0x08).
    BlackWhite,
    /// 8-bit gray (tag 0x09).
    Grayscale,
    /// YIQ with 0..255 channels (tag 0x0b).
    Yiq255,
    /// CIE Lab with two's-complement a/b (tag 0x0c).
    LabV1,
    /// CIE Lab with 128-offset a/b (tag 0x12).
    LabV2,
    /// Registration mark tint (tag 0x14).
    Registration,
    /// Spot color referencing the document palette (tag 0x19).
    Spot,
    /// Any other tag.
    Unknown(u16),
}

impl ColorModel {
    /// Tag of a spot (palette) reference.
    pub const SPOT_TAG: u16 = 0x19;

    /// Classifies a raw model tag.
    pub const fn from_tag(tag: u16) -> Self {
        match tag {
            0x00 => Self::Pantone,
            0x01 | 0x02 | 0x15 => Self::Cmyk100,
            0x03 | 0x11 => Self::Cmyk255,
            0x04 => Self::Cmy,
            0x05 => Self::Rgb,
            0x06 => Self::Hsb,
            0x07 => Self::Hls,
            0x08 => Self::BlackWhite,
            0x09 => Self::Grayscale,
            0x0b => Self::Yiq255,
            0x0c => Self::LabV1,
            0x12 => Self::LabV2,
            0x14 => Self::Registration,
            0x19 => Self::Spot,
            other => Self::Unknown(other),
        }
    }

    /// Canonical tag for this family.
    ///
    /// Families with several aliases report the lowest tag.
    pub const fn tag(self) -> u16 {
        match self {
            Self::Pantone => 0x00,
            Self::Cmyk100 => 0x01,
            Self::Cmyk255 => 0x03,
            Self::Cmy => 0x04,
            Self::Rgb => 0x05,
            Self::Hsb => 0x06,
            Self::Hls => 0x07,
            Self::BlackWhite => 0x08,
            Self::Grayscale => 0x09,
            Self::Yiq255 => 0x0b,
            Self::LabV1 => 0x0c,
            Self::LabV2 => 0x12,
            Self::Registration => 0x14,
            Self::Spot => 0x19,
            Self::Unknown(tag) => tag,
        }
    }

    /// Short lowercase name, used in logs and the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pantone => "pantone",
            Self::Cmyk100 => "cmyk100",
            Self::Cmyk255 => "cmyk255",
            Self::Cmy => "cmy",
            Self::Rgb => "rgb",
            Self::Hsb => "hsb",
            Self::Hls => "hls",
            Self::BlackWhite => "bw",
            Self::Grayscale => "gray",
            Self::Yiq255 => "yiq255",
            Self::LabV1 => "lab",
            Self::LabV2 => "lab2",
            Self::Registration => "registration",
            Self::Spot => "spot",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Looks up a family by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        const NAMED: [ColorModel; 14] = [
            ColorModel::Pantone,
            ColorModel::Cmyk100,
            ColorModel::Cmyk255,
            ColorModel::Cmy,
            ColorModel::Rgb,
            ColorModel::Hsb,
            ColorModel::Hls,
            ColorModel::BlackWhite,
            ColorModel::Grayscale,
            ColorModel::Yiq255,
            ColorModel::LabV1,
            ColorModel::LabV2,
            ColorModel::Registration,
            ColorModel::Spot,
        ];
        let name = name.to_ascii_lowercase();
        NAMED.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(tag) => write!(f, "unknown(0x{tag:02x})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
///
/// # Example
///
/// ```rust
/// use cdr_core::color::parse_number;
///
/// assert_eq!(parse_number("0x19", "model").unwrap(), 0x19);
/// assert_eq!(parse_number("25", "model").unwrap(), 25);
/// ```
pub fn parse_number(input: &str, field: &'static str) -> Result<u32> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    let value = parsed.map_err(|e| Error::InvalidNumber {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    u32::try_from(value).map_err(|_| Error::OutOfRange { field, value })
}

/// Parses a model tag given as a number or a family name.
///
/// Names resolve to the family's canonical [`tag`](ColorModel::tag).
pub fn parse_model(input: &str) -> Result<u16> {
    if let Some(model) = ColorModel::from_name(input.trim()) {
        return Ok(model.tag());
    }
    let value = parse_number(input, "model")?;
    u16::try_from(value).map_err(|_| Error::OutOfRange {
        field: "model",
        value: value.into(),
    })
}
