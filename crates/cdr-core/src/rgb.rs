//! Canonical packed RGB output.
//!
//! All color models are normalized to [`Rgb24`], a 24-bit `0xRRGGBB` value.
//! The generator downstream consumes either the packed integer or its
//! `#rrggbb` string form.
//!
//! # Rounding
//!
//! Every closed-form conversion produces an `f64` channel in nominal
//! `[0, 255]` space. [`channel`] rounds half away from zero and saturates at
//! the boundaries, so out-of-range intermediate values never wrap.

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Rounds a floating-point channel value and saturates it to `[0, 255]`.
///
/// NaN maps to 0.
///
/// # Example
///
/// ```rust
/// use cdr_core::channel;
///
/// assert_eq!(channel(127.5), 128);
/// assert_eq!(channel(-3.0), 0);
/// assert_eq!(channel(300.0), 255);
/// ```
#[inline]
pub fn channel(v: f64) -> u8 {
    // `as` saturates for floats and maps NaN to 0
    v.round() as u8
}

/// Packed 24-bit RGB color.
///
/// The upper byte is always zero.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rgb24(u32);

impl Rgb24 {
    /// Pure black.
    pub const BLACK: Self = Self(0x000000);
    /// Pure white.
    pub const WHITE: Self = Self(0xffffff);

    /// Builds a color from individual channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Builds a color from an `[r, g, b]` array.
    #[inline]
    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    /// Reinterprets a packed value as RGB, discarding the top byte.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self(value & 0xffffff)
    }

    /// Same value for all three channels.
    #[inline]
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Returns the packed `0xRRGGBB` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Formats as a 7-character lowercase `#rrggbb` string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cdr_core::Rgb24;
    ///
    /// assert_eq!(Rgb24::new(0xff, 0x80, 0x00).to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl fmt::Debug for Rgb24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb24(#{:06x})", self.0)
    }
}

impl fmt::Display for Rgb24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl From<Rgb24> for u32 {
    fn from(rgb: Rgb24) -> Self {
        rgb.0
    }
}

impl From<[u8; 3]> for Rgb24 {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_array(rgb)
    }
}

impl FromStr for Rgb24 {
    type Err = Error;

    /// Parses `#rrggbb` or `rrggbb` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| Error::InvalidHex(s.to_string()))
    }
}

impl TryFrom<String> for Rgb24 {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb24> for String {
    fn from(rgb: Rgb24) -> Self {
        rgb.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_rounding() {
        assert_eq!(channel(0.49), 0);
        assert_eq!(channel(0.5), 1);
        assert_eq!(channel(254.5), 255);
        assert_eq!(channel(-0.5), 0);
        assert_eq!(channel(f64::NAN), 0);
        assert_eq!(channel(f64::INFINITY), 255);
    }

    #[test]
    fn test_packing() {
        let c = Rgb24::new(0x12, 0x34, 0x56);
        assert_eq!(c.packed(), 0x123456);
        assert_eq!(c.to_array(), [0x12, 0x34, 0x56]);
        assert_eq!(Rgb24::from_packed(0xff12_3456), c);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb24::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb24::gray(0x80).to_string(), "#808080");
        assert_eq!("#A0b1C2".parse::<Rgb24>().unwrap(), Rgb24::new(0xa0, 0xb1, 0xc2));
        assert_eq!("ffffff".parse::<Rgb24>().unwrap(), Rgb24::WHITE);
    }

    #[test]
    fn test_hex_rejects_malformed() {
        for bad in ["", "#", "#fff", "#gggggg", "#1234567", "+12345"] {
            assert_eq!(bad.parse::<Rgb24>(), Err(Error::InvalidHex(bad.to_string())));
        }
    }
}
