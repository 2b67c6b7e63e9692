//! Per-model conversion formulas.
//!
//! Closed-form models produce [`Rgb24`] directly. Device models that go
//! through an ICC slot (CMYK, RGB, Lab) only decode their channels here into
//! a [`SlotInput`]; the engine does the rest.
//!
//! All functions take the full [`CdrColor`] and ignore its tag, so they can
//! be unit tested in isolation from dispatch.

use crate::pantone::pantone_swatch;
use cdr_core::{channel, CdrColor, Rgb24};
use cdr_icc::SlotInput;

/// CDR1 Pantone swatch blended toward white by its saturation.
///
/// `col1:col0` is the swatch index, `col3:col2` the saturation as a
/// percentage. `channel = 255 * (1 - sat) + pure * sat`.
pub fn pantone(color: CdrColor) -> Rgb24 {
    let pure = pantone_swatch(color.primary16());
    let sat = f64::from(color.secondary16()) / 100.0;
    let [r, g, b] = pure.map(|p| channel(255.0 * (1.0 - sat) + f64::from(p) * sat));
    Rgb24::new(r, g, b)
}

/// CMYK with channels already in `0..=100`.
pub fn cmyk100(color: CdrColor) -> SlotInput {
    SlotInput::Cmyk(color.channels().map(f64::from))
}

/// CMYK with `0..=255` channels, rescaled to `0..=100`.
pub fn cmyk255(color: CdrColor) -> SlotInput {
    SlotInput::Cmyk(color.channels().map(|c| f64::from(c) * 100.0 / 255.0))
}

/// Subtractive CMY.
pub fn cmy(color: CdrColor) -> Rgb24 {
    let [c, m, y, _] = color.channels();
    Rgb24::new(255 - c, 255 - m, 255 - y)
}

/// RGB stored as `col0 = B`, `col1 = G`, `col2 = R`.
pub fn rgb(color: CdrColor) -> SlotInput {
    let [b, g, r, _] = color.channels();
    SlotInput::Rgb([r, g, b])
}

/// Per-channel saturation factors for a hue in degrees.
///
/// The hue is wrapped by subtracting 360 while it exceeds 360. Factors are
/// clamped to at most 1.
pub fn hue_factors(hue: u16) -> [f64; 3] {
    let mut hue = hue;
    while hue > 360 {
        hue -= 360;
    }
    let h = f64::from(hue);
    let factors = if hue < 120 {
        [(120.0 - h) / 60.0, h / 60.0, 0.0]
    } else if hue < 240 {
        [0.0, (240.0 - h) / 60.0, (h - 120.0) / 60.0]
    } else {
        [(h - 240.0) / 60.0, 0.0, (360.0 - h) / 60.0]
    };
    factors.map(|f| f.min(1.0))
}

/// Hue (`col1:col0`), saturation (`col2`), brightness (`col3`).
pub fn hsb(color: CdrColor) -> Rgb24 {
    let [_, _, s, v] = color.channels();
    let saturation = f64::from(s) / 255.0;
    let brightness = f64::from(v) / 255.0;
    let [r, g, b] = hue_factors(color.primary16())
        .map(|f| channel(255.0 * (1.0 - saturation + saturation * f) * brightness));
    Rgb24::new(r, g, b)
}

/// Hue (`col1:col0`), lightness (`col2`), saturation (`col3`).
pub fn hls(color: CdrColor) -> Rgb24 {
    let [_, _, l, s] = color.channels();
    let lightness = f64::from(l) / 255.0;
    let saturation = f64::from(s) / 255.0;
    let [r, g, b] = hue_factors(color.primary16()).map(|f| {
        let tmp = 2.0 * saturation * f + 1.0 - saturation;
        if lightness < 0.5 {
            channel(255.0 * lightness * tmp)
        } else {
            channel(255.0 * ((1.0 - lightness) * tmp + 2.0 * lightness - 1.0))
        }
    });
    Rgb24::new(r, g, b)
}

/// Zero `col0` is white, anything else black.
pub fn black_white(color: CdrColor) -> Rgb24 {
    if color.channels()[0] == 0 {
        Rgb24::WHITE
    } else {
        Rgb24::BLACK
    }
}

/// Gray level in `col0`.
pub fn grayscale(color: CdrColor) -> Rgb24 {
    Rgb24::gray(color.channels()[0])
}

/// YIQ with each component centered at 100.
///
/// Below the center a component is divided by 100, above it by 155.
pub fn yiq255(color: CdrColor) -> Rgb24 {
    let [y, i, q, _] = color.channels();
    let centered = |v: u8| {
        let v = f64::from(v) - 100.0;
        if v < 0.0 { v / 100.0 } else { v / 155.0 }
    };
    let y = centered(y) * 0.5 + 0.5;
    let i = centered(i) * 0.5957;
    let q = centered(q) * 0.5226;

    let rr = y + 0.9563 * i + 0.6210 * q;
    let gg = y - 0.2127 * i - 0.6474 * q;
    let bb = y - 1.1070 * i + 1.7046 * q;
    let [r, g, b] = [rr, gg, bb].map(|v| channel(255.0 * v.clamp(0.0, 1.0)));
    Rgb24::new(r, g, b)
}

/// CIE Lab with two's-complement a and b.
pub fn lab_v1(color: CdrColor) -> SlotInput {
    let [l, a, b, _] = color.channels();
    SlotInput::Lab([
        f64::from(l) * 100.0 / 255.0,
        f64::from(a as i8),
        f64::from(b as i8),
    ])
}

/// CIE Lab with a and b stored offset by 128.
pub fn lab_v2(color: CdrColor) -> SlotInput {
    let [l, a, b, _] = color.channels();
    SlotInput::Lab([
        f64::from(l) * 100.0 / 255.0,
        f64::from(a.wrapping_sub(0x80) as i8),
        f64::from(b.wrapping_sub(0x80) as i8),
    ])
}

/// Registration tint in `col0`, percent.
pub fn registration(color: CdrColor) -> Rgb24 {
    Rgb24::gray(channel(255.0 * f64::from(color.channels()[0]) / 100.0))
}
