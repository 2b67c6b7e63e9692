//! # cdr-icc
//!
//! Device-to-RGB transforms for document color normalization.
//!
//! A document color engine owns three transform slots:
//!
//! | Slot | Input | Default source profile |
//! |------|-------|------------------------|
//! | [`TransformSlot::Cmyk`] | C, M, Y, K in `0..=100` | none, naive formula until a document profile arrives |
//! | [`TransformSlot::Lab`] | L in `0..=100`, signed a, b | CIE Lab v4, D50 |
//! | [`TransformSlot::Rgb`] | 8-bit R, G, B | sRGB |
//!
//! Every slot targets 8-bit sRGB. A document may carry an embedded ICC
//! profile; a CMYK-signature profile replaces the CMYK slot and an
//! RGB-signature profile replaces the RGB slot. Other signatures are ignored.
//!
//! The numeric engine is pluggable through [`ColorEngine`]:
//!
//! - [`IccTransforms`] - Little CMS 2 transforms (feature `lcms`, default)
//! - [`ApproxEngine`] - closed-form approximations, no color management
//!
//! [`DefaultEngine`] names whichever of the two the build provides.
//!
//! # Example
//!
//! ```rust
//! use cdr_icc::{ColorEngine, DefaultEngine, SlotInput};
//!
//! let engine = DefaultEngine::default();
//! let white = engine.transform(SlotInput::Lab([100.0, 0.0, 0.0]));
//! assert!(white.red() > 250);
//! ```
//!
//! # Ownership
//!
//! Engines are plain values owned by one document. Nothing in this crate is
//! process-global, so documents parsed on different threads never share
//! transform state.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod approx;
mod engine;
mod error;
mod signature;

#[cfg(feature = "lcms")]
mod manager;
#[cfg(feature = "lcms")]
mod profile;
#[cfg(feature = "lcms")]
mod transform;

pub use approx::ApproxEngine;
pub use engine::{ColorEngine, SlotInput, SlotSource, TransformSlot};
pub use error::{IccError, IccResult};
pub use signature::ProfileColorSpace;

#[cfg(feature = "lcms")]
pub use manager::IccTransforms;
#[cfg(feature = "lcms")]
pub use profile::Profile;
#[cfg(feature = "lcms")]
pub use transform::Transform;

/// The engine used when a caller does not pick one.
#[cfg(feature = "lcms")]
pub type DefaultEngine = IccTransforms;

/// The engine used when a caller does not pick one.
#[cfg(not(feature = "lcms"))]
pub type DefaultEngine = ApproxEngine;

/// Rendering intent for color transformations.
///
/// Determines how out-of-gamut colors are handled during conversion.
/// Document slots always use [`Intent::Perceptual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    /// Compresses the source gamut to fit within the destination.
    #[default]
    Perceptual,

    /// Clips out-of-gamut colors, maps source white to destination white.
    RelativeColorimetric,

    /// Maintains saturation at the expense of accuracy.
    Saturation,

    /// Clips out-of-gamut colors without white point adaptation.
    AbsoluteColorimetric,
}

#[cfg(feature = "lcms")]
impl From<Intent> for lcms2::Intent {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Perceptual => lcms2::Intent::Perceptual,
            Intent::RelativeColorimetric => lcms2::Intent::RelativeColorimetric,
            Intent::Saturation => lcms2::Intent::Saturation,
            Intent::AbsoluteColorimetric => lcms2::Intent::AbsoluteColorimetric,
        }
    }
}
