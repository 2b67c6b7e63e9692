//! The color-engine capability boundary.

use cdr_core::Rgb24;
use std::fmt;

/// One of the three device-to-RGB transform slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformSlot {
    /// CMYK to RGB.
    Cmyk,
    /// CIE Lab to RGB.
    Lab,
    /// RGB normalization into sRGB.
    Rgb,
}

impl TransformSlot {
    /// All slots, in declaration order.
    pub const ALL: [TransformSlot; 3] = [Self::Cmyk, Self::Lab, Self::Rgb];
}

impl fmt::Display for TransformSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cmyk => "CMYK->RGB",
            Self::Lab => "Lab->RGB",
            Self::Rgb => "RGB->RGB",
        })
    }
}

/// Input to a slot, tagged with the numeric domain it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotInput {
    /// C, M, Y, K, nominally in `0..=100`.
    Cmyk([f64; 4]),
    /// L in `0..=100`, a and b signed.
    Lab([f64; 3]),
    /// 8-bit R, G, B.
    Rgb([u8; 3]),
}

impl SlotInput {
    /// The slot that serves this input.
    pub fn slot(&self) -> TransformSlot {
        match self {
            Self::Cmyk(_) => TransformSlot::Cmyk,
            Self::Lab(_) => TransformSlot::Lab,
            Self::Rgb(_) => TransformSlot::Rgb,
        }
    }
}

/// What currently backs a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    /// Closed-form approximation.
    ///
    /// Under `IccTransforms` this is the CMYK slot's
    /// state until a document supplies a CMYK profile, since no standard CMYK
    /// profile is built in.
    Approximate,
    /// Transform built from a built-in profile.
    BuiltIn,
    /// Transform built from a profile embedded in the document.
    Embedded,
}

/// Numeric color-management capability used by the color converter.
///
/// Implementations must be total: [`transform`](Self::transform) always
/// yields a color and [`load_profile`](Self::load_profile) silently ignores
/// anything it cannot use, keeping the previous transform in place.
pub trait ColorEngine {
    /// Runs `input` through the slot it belongs to.
    fn transform(&self, input: SlotInput) -> Rgb24;

    /// Offers an embedded ICC profile to the engine.
    ///
    /// Returns the slot that was rebuilt, or `None` if the profile was
    /// ignored. The default implementation ignores every profile.
    fn load_profile(&mut self, _profile: &[u8]) -> Option<TransformSlot> {
        None
    }

    /// Reports what backs `slot`.
    fn slot_source(&self, _slot: TransformSlot) -> SlotSource {
        SlotSource::Approximate
    }
}

impl<E: ColorEngine + ?Sized> ColorEngine for Box<E> {
    fn transform(&self, input: SlotInput) -> Rgb24 {
        (**self).transform(input)
    }

    fn load_profile(&mut self, profile: &[u8]) -> Option<TransformSlot> {
        (**self).load_profile(profile)
    }

    fn slot_source(&self, slot: TransformSlot) -> SlotSource {
        (**self).slot_source(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_slot() {
        assert_eq!(SlotInput::Cmyk([0.0; 4]).slot(), TransformSlot::Cmyk);
        assert_eq!(SlotInput::Lab([0.0; 3]).slot(), TransformSlot::Lab);
        assert_eq!(SlotInput::Rgb([0; 3]).slot(), TransformSlot::Rgb);
    }

    #[test]
    fn test_boxed_engine() {
        struct Fixed;
        impl ColorEngine for Fixed {
            fn transform(&self, _input: SlotInput) -> Rgb24 {
                Rgb24::new(1, 2, 3)
            }
        }

        let mut boxed: Box<dyn ColorEngine> = Box::new(Fixed);
        assert_eq!(boxed.transform(SlotInput::Rgb([9; 3])), Rgb24::new(1, 2, 3));
        assert_eq!(boxed.load_profile(&[1, 2, 3]), None);
        assert_eq!(boxed.slot_source(TransformSlot::Lab), SlotSource::Approximate);
    }
}
