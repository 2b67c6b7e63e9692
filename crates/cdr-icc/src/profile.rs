//! ICC profile wrapper.

use crate::{IccError, IccResult, ProfileColorSpace};
use lcms2::{CIExyY, GlobalContext, Profile as LcmsProfile};

/// An ICC color profile.
///
/// Profiles are only needed while building a transform; the transform keeps
/// everything it needs once created.
///
/// # Example
///
/// ```rust
/// use cdr_icc::{Profile, ProfileColorSpace};
///
/// let srgb = Profile::srgb();
/// assert_eq!(srgb.color_space(), ProfileColorSpace::Rgb);
/// ```
pub struct Profile {
    /// Internal lcms2 profile handle.
    pub(crate) inner: LcmsProfile,
}

impl Profile {
    /// Parses a profile from raw ICC data.
    ///
    /// # Errors
    ///
    /// Returns [`IccError::Empty`] for an empty buffer and
    /// [`IccError::InvalidProfile`] when lcms2 rejects the data.
    pub fn from_icc(data: &[u8]) -> IccResult<Self> {
        if data.is_empty() {
            return Err(IccError::Empty);
        }
        let inner = LcmsProfile::new_icc(data).map_err(|e| IccError::InvalidProfile(e.to_string()))?;
        Ok(Self { inner })
    }

    /// The IEC 61966-2-1 sRGB profile.
    pub fn srgb() -> Self {
        Self {
            inner: LcmsProfile::new_srgb(),
        }
    }

    /// CIE L*a*b* v4 profile with a D50 white point.
    pub fn lab_d50() -> IccResult<Self> {
        let inner = LcmsProfile::new_lab4_context(GlobalContext::new(), &d50_white())
            .map_err(|e| IccError::CreateFailed(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Returns the profile description, or an empty string.
    pub fn description(&self) -> String {
        self.inner
            .info(lcms2::InfoType::Description, lcms2::Locale::none())
            .unwrap_or_default()
    }

    /// Returns the data color space.
    pub fn color_space(&self) -> ProfileColorSpace {
        self.inner.color_space().into()
    }

    /// Exports the profile as ICC data.
    pub fn to_icc(&self) -> IccResult<Vec<u8>> {
        self.inner
            .icc()
            .map_err(|e| IccError::CreateFailed(e.to_string()))
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("description", &self.description())
            .field("color_space", &self.color_space())
            .finish()
    }
}

/// D50 white point (ICC PCS illuminant).
pub(crate) fn d50_white() -> CIExyY {
    CIExyY {
        x: 0.3457,
        y: 0.3585,
        Y: 1.0,
    }
}

/// sRGB primaries with a gamma 1.0 curve.
#[cfg(test)]
pub(crate) fn linear_srgb() -> Profile {
    let primaries = lcms2::CIExyYTRIPLE {
        Red: CIExyY { x: 0.6400, y: 0.3300, Y: 1.0 },
        Green: CIExyY { x: 0.3000, y: 0.6000, Y: 1.0 },
        Blue: CIExyY { x: 0.1500, y: 0.0600, Y: 1.0 },
    };
    let d65 = CIExyY { x: 0.3127, y: 0.3290, Y: 1.0 };
    let curve = lcms2::ToneCurve::new(1.0);
    let inner = LcmsProfile::new_rgb(&d65, &primaries, &[&curve, &curve, &curve])
        .expect("linear sRGB profile");
    Profile { inner }
}
