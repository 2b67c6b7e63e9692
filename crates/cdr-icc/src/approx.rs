//! Closed-form conversions used when no ICC transform backs a slot.
//!
//! # Formulas
//!
//! - CMYK: `R = 255 * (1 - C) * (1 - K)` (likewise G with M, B with Y),
//!   each input clamped to `[0, 1]` after dividing by 100
//! - Lab: CIE Lab (D50) -> XYZ (D50) -> Bradford-adapted linear sRGB -> sRGB
//! - RGB: identity

use crate::{ColorEngine, SlotInput};
use cdr_core::{channel, Rgb24};

/// CIE D50 reference white (ICC PCS).
const D50: [f64; 3] = [0.96422, 1.0, 0.82521];

/// XYZ (D50) to linear sRGB, Bradford-adapted from D65.
const XYZ_D50_TO_SRGB: [[f64; 3]; 3] = [
    [3.1338561, -1.6168667, -0.4906146],
    [-0.9787684, 1.9161415, 0.0334540],
    [0.0719453, -0.2289914, 1.4052427],
];

const LAB_EPSILON: f64 = 6.0 / 29.0;

/// Color engine built only from closed-form math.
///
/// Used wherever a real color-management engine is unavailable. Ignores
/// every embedded profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproxEngine;

impl ApproxEngine {
    /// Creates the engine.
    pub const fn new() -> Self {
        Self
    }

    /// Naive subtractive CMYK (channels in `0..=100`) to RGB.
    pub fn cmyk_to_rgb(cmyk: [f64; 4]) -> Rgb24 {
        let [c, m, y, k] = cmyk.map(|v| (v / 100.0).clamp(0.0, 1.0));
        let ink = |v: f64| channel(255.0 * (1.0 - v) * (1.0 - k));
        Rgb24::new(ink(c), ink(m), ink(y))
    }

    /// CIE Lab (D50) to sRGB.
    pub fn lab_to_rgb(lab: [f64; 3]) -> Rgb24 {
        let xyz = lab_to_xyz(lab);
        let linear = XYZ_D50_TO_SRGB.map(|row| row[0] * xyz[0] + row[1] * xyz[1] + row[2] * xyz[2]);
        let [r, g, b] = linear.map(|v| channel(255.0 * srgb_oetf(v.clamp(0.0, 1.0))));
        Rgb24::new(r, g, b)
    }
}

impl ColorEngine for ApproxEngine {
    fn transform(&self, input: SlotInput) -> Rgb24 {
        match input {
            SlotInput::Cmyk(cmyk) => Self::cmyk_to_rgb(cmyk),
            SlotInput::Lab(lab) => Self::lab_to_rgb(lab),
            SlotInput::Rgb(rgb) => Rgb24::from_array(rgb),
        }
    }
}

/// CIE Lab to XYZ relative to D50.
fn lab_to_xyz([l, a, b]: [f64; 3]) -> [f64; 3] {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;
    let finv = |t: f64| {
        if t > LAB_EPSILON {
            t * t * t
        } else {
            3.0 * LAB_EPSILON * LAB_EPSILON * (t - 4.0 / 29.0)
        }
    };
    [D50[0] * finv(fx), D50[1] * finv(fy), D50[2] * finv(fz)]
}

/// sRGB OETF: encodes linear light to sRGB.
#[inline]
fn srgb_oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}
