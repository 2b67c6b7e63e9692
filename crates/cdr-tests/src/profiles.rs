//! ICC profile fixtures built on the fly.

use lcms2::{CIExyY, CIExyYTRIPLE, Profile, ToneCurve};

/// An RGB profile with sRGB primaries, D65 white and a gamma 1.0 curve.
///
/// Loaded as an embedded document profile it brightens RGB midtones.
pub fn linear_srgb_icc() -> Vec<u8> {
    let primaries = CIExyYTRIPLE {
        Red: CIExyY { x: 0.6400, y: 0.3300, Y: 1.0 },
        Green: CIExyY { x: 0.3000, y: 0.6000, Y: 1.0 },
        Blue: CIExyY { x: 0.1500, y: 0.0600, Y: 1.0 },
    };
    let d65 = CIExyY { x: 0.3127, y: 0.3290, Y: 1.0 };
    let curve = ToneCurve::new(1.0);
    Profile::new_rgb(&d65, &primaries, &[&curve, &curve, &curve])
        .and_then(|p| p.icc())
        .unwrap_or_else(|e| panic!("linear sRGB profile: {e}"))
}
