//! Typed transforms into 8-bit RGB.

use crate::{IccError, IccResult, Intent, Profile};
use lcms2::{PixelFormat, Pod, Transform as LcmsTransform};

/// A color transform from one input domain to 8-bit RGB.
///
/// The input pixel type fixes the domain:
///
/// - `[f64; 4]` - CMYK, channels in `0..=100`
/// - `[f64; 3]` - CIE Lab, L in `0..=100`
/// - `[u8; 3]` - 8-bit RGB
///
/// Dropping a transform releases its lcms2 handle.
///
/// # Example
///
/// ```rust
/// use cdr_icc::{Intent, Profile, Transform};
///
/// let srgb = Profile::srgb();
/// let t = Transform::rgb(&srgb, &srgb, Intent::Perceptual).unwrap();
/// let out = t.apply([200, 100, 50]);
/// assert!((i32::from(out[0]) - 200).abs() <= 1);
/// ```
pub struct Transform<I: Copy + Pod> {
    inner: LcmsTransform<I, [u8; 3]>,
}

impl Transform<[f64; 4]> {
    /// CMYK (double precision) to 8-bit RGB.
    pub fn cmyk(source: &Profile, dest: &Profile, intent: Intent) -> IccResult<Self> {
        Self::build(source, PixelFormat::CMYK_DBL, dest, intent)
    }
}

impl Transform<[f64; 3]> {
    /// CIE Lab (double precision) to 8-bit RGB.
    pub fn lab(source: &Profile, dest: &Profile, intent: Intent) -> IccResult<Self> {
        Self::build(source, PixelFormat::Lab_DBL, dest, intent)
    }
}

impl Transform<[u8; 3]> {
    /// 8-bit RGB to 8-bit RGB.
    pub fn rgb(source: &Profile, dest: &Profile, intent: Intent) -> IccResult<Self> {
        Self::build(source, PixelFormat::RGB_8, dest, intent)
    }
}

impl<I: Copy + Pod> Transform<I> {
    fn build(source: &Profile, format: PixelFormat, dest: &Profile, intent: Intent) -> IccResult<Self> {
        let inner = LcmsTransform::new(&source.inner, format, &dest.inner, PixelFormat::RGB_8, intent.into())
            .map_err(|e| IccError::TransformFailed(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Transforms a single pixel.
    pub fn apply(&self, input: I) -> [u8; 3] {
        let mut out = [[0u8; 3]];
        self.inner.transform_pixels(std::slice::from_ref(&input), &mut out);
        out[0]
    }
}

impl<I: Copy + Pod> std::fmt::Debug for Transform<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("input", &std::any::type_name::<I>())
            .finish_non_exhaustive()
    }
}
