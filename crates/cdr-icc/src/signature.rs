//! Profile color-space signatures read straight from the ICC header.
//!
//! Slot selection only needs the data color space, which sits at a fixed
//! offset in the 128-byte header. Reading it directly keeps signature
//! inspection available when no color-management engine is compiled in.

use crate::TransformSlot;
use std::fmt;

/// Size of the fixed ICC header.
const HEADER_LEN: usize = 128;
/// Offset of the data color space signature.
const COLOR_SPACE_OFFSET: usize = 16;
/// Offset of the `acsp` file signature.
const MAGIC_OFFSET: usize = 36;

/// Data color space of an ICC profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileColorSpace {
    /// `RGB `
    Rgb,
    /// `CMYK`
    Cmyk,
    /// `Lab `
    Lab,
    /// `GRAY`
    Gray,
    /// Any other signature, kept verbatim.
    Other([u8; 4]),
}

impl ProfileColorSpace {
    /// Maps a big-endian FourCC signature.
    pub fn from_fourcc(sig: [u8; 4]) -> Self {
        match &sig {
            b"RGB " => Self::Rgb,
            b"CMYK" => Self::Cmyk,
            b"Lab " => Self::Lab,
            b"GRAY" => Self::Gray,
            _ => Self::Other(sig),
        }
    }

    /// Reads the color space from raw profile bytes.
    ///
    /// Returns `None` when the buffer is too short to hold an ICC header or
    /// lacks the `acsp` file signature.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cdr_icc::ProfileColorSpace;
    ///
    /// assert_eq!(ProfileColorSpace::from_header(&[]), None);
    /// ```
    pub fn from_header(bytes: &[u8]) -> Option<Self> {
        let header = bytes.get(..HEADER_LEN)?;
        if &header[MAGIC_OFFSET..MAGIC_OFFSET + 4] != b"acsp" {
            return None;
        }
        let mut sig = [0u8; 4];
        sig.copy_from_slice(&header[COLOR_SPACE_OFFSET..COLOR_SPACE_OFFSET + 4]);
        Some(Self::from_fourcc(sig))
    }

    /// The transform slot a document profile of this color space replaces.
    ///
    /// Only CMYK and RGB profiles are accepted from documents.
    pub fn target_slot(self) -> Option<TransformSlot> {
        match self {
            Self::Cmyk => Some(TransformSlot::Cmyk),
            Self::Rgb => Some(TransformSlot::Rgb),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb => f.write_str("RGB"),
            Self::Cmyk => f.write_str("CMYK"),
            Self::Lab => f.write_str("Lab"),
            Self::Gray => f.write_str("Gray"),
            Self::Other(sig) => write!(f, "{:?}", String::from_utf8_lossy(sig)),
        }
    }
}

#[cfg(feature = "lcms")]
impl From<lcms2::ColorSpaceSignature> for ProfileColorSpace {
    fn from(sig: lcms2::ColorSpaceSignature) -> Self {
        use lcms2::ColorSpaceSignature as Sig;
        match sig {
            Sig::RgbData => Self::Rgb,
            Sig::CmykData => Self::Cmyk,
            Sig::LabData => Self::Lab,
            Sig::GrayData => Self::Gray,
            other => Self::Other((other as u32).to_be_bytes()),
        }
    }
}

#[cfg(test)]
pub(crate) fn fake_header(color_space: &[u8; 4]) -> Vec<u8> {
    let mut bytes = vec![0u8; HEADER_LEN];
    bytes[COLOR_SPACE_OFFSET..COLOR_SPACE_OFFSET + 4].copy_from_slice(color_space);
    bytes[MAGIC_OFFSET..MAGIC_OFFSET + 4].copy_from_slice(b"acsp");
    bytes
}
