//! Tagged color to canonical RGB.

use crate::{models, Palette};
use cdr_core::{BmpColorModel, CdrColor, ColorModel, Rgb24};
use cdr_icc::ColorEngine;
use tracing::{debug, trace};

/// Converts document colors to [`Rgb24`].
///
/// Borrows the document palette (for spot indirection) and the document's
/// color engine (for the CMYK, Lab and RGB slots). Conversion is total:
/// every `(model, value)` pair yields a color.
///
/// # Example
///
/// ```rust
/// use cdr_color::{ColorConverter, Palette};
/// use cdr_core::{CdrColor, Rgb24};
/// use cdr_icc::ApproxEngine;
///
/// let mut palette = Palette::new();
/// palette.insert(3, CdrColor::new(0x09, 0x40));
///
/// let conv = ColorConverter::new(&palette, &ApproxEngine);
/// assert_eq!(conv.to_rgb(CdrColor::new(0x04, 0)), Rgb24::WHITE);
/// assert_eq!(conv.to_rgb(CdrColor::new(0x19, 3)), Rgb24::gray(0x40));
/// ```
#[derive(Debug)]
pub struct ColorConverter<'a, E: ColorEngine + ?Sized> {
    palette: &'a Palette,
    engine: &'a E,
}

impl<'a, E: ColorEngine + ?Sized> ColorConverter<'a, E> {
    /// Creates a converter over a palette and engine.
    pub fn new(palette: &'a Palette, engine: &'a E) -> Self {
        Self { palette, engine }
    }

    /// Converts a tagged color.
    ///
    /// Spot colors are first replaced by their palette entry. Unknown tags,
    /// and spot colors that cannot be resolved, pass the low 24 bits of the
    /// value through as packed RGB.
    pub fn to_rgb(&self, color: CdrColor) -> Rgb24 {
        let color = self.resolve_spot(color);
        match color.kind() {
            ColorModel::Pantone => models::pantone(color),
            ColorModel::Cmyk100 => self.engine.transform(models::cmyk100(color)),
            ColorModel::Cmyk255 => self.engine.transform(models::cmyk255(color)),
            ColorModel::Cmy => models::cmy(color),
            ColorModel::Rgb => self.engine.transform(models::rgb(color)),
            ColorModel::Hsb => models::hsb(color),
            ColorModel::Hls => models::hls(color),
            ColorModel::BlackWhite => models::black_white(color),
            ColorModel::Grayscale => models::grayscale(color),
            ColorModel::Yiq255 => models::yiq255(color),
            ColorModel::LabV1 => self.engine.transform(models::lab_v1(color)),
            ColorModel::LabV2 => self.engine.transform(models::lab_v2(color)),
            ColorModel::Registration => models::registration(color),
            ColorModel::Spot | ColorModel::Unknown(_) => Rgb24::from_packed(color.value),
        }
    }

    /// Converts a tagged color to `#rrggbb`.
    pub fn to_hex(&self, color: CdrColor) -> String {
        self.to_rgb(color).to_hex()
    }

    /// Converts a bitmap palette color tagged with a legacy model code.
    ///
    /// Codes with a canonical equivalent are converted as that model;
    /// everything else is already packed RGB.
    pub fn bmp_color(&self, color: CdrColor) -> Rgb24 {
        match BmpColorModel::remap(color) {
            Some(canonical) => self.to_rgb(canonical),
            None => Rgb24::from_packed(color.value),
        }
    }

    /// Follows spot references through the palette.
    ///
    /// Stops at the first non-spot color, at an index the palette does not
    /// hold, or at an index already visited.
    fn resolve_spot(&self, color: CdrColor) -> CdrColor {
        let mut current = color;
        let mut visited: Vec<u16> = Vec::new();
        while current.kind() == ColorModel::Spot {
            let index = current.primary16();
            if visited.contains(&index) {
                debug!(index, "spot color cycle");
                return current;
            }
            visited.push(index);
            match self.palette.resolve(index) {
                Some(next) => current = next,
                None => {
                    trace!(index, "spot index not in palette");
                    return current;
                }
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdr_icc::{ApproxEngine, SlotInput};
    use std::cell::RefCell;

    /// Engine that records inputs and answers with a fixed color per slot.
    #[derive(Default)]
    struct Recording {
        seen: RefCell<Vec<SlotInput>>,
    }

    impl ColorEngine for Recording {
        fn transform(&self, input: SlotInput) -> Rgb24 {
            self.seen.borrow_mut().push(input);
            match input {
                SlotInput::Cmyk(_) => Rgb24::new(1, 0, 0),
                SlotInput::Lab(_) => Rgb24::new(0, 1, 0),
                SlotInput::Rgb(_) => Rgb24::new(0, 0, 1),
            }
        }
    }

    fn approx(palette: &Palette) -> ColorConverter<'_, ApproxEngine> {
        ColorConverter::new(palette, &ApproxEngine)
    }

    #[test]
    fn test_closed_form_models() {
        let palette = Palette::new();
        let conv = approx(&palette);
        assert_eq!(conv.to_rgb(CdrColor::new(0x04, 0)).packed(), 0xffffff);
        assert_eq!(conv.to_rgb(CdrColor::new(0x04, 0x00ff_ffff)).packed(), 0x000000);
        assert_eq!(conv.to_rgb(CdrColor::new(0x09, 0x80)).packed(), 0x808080);
        assert_eq!(conv.to_rgb(CdrColor::new(0x14, 100)).packed(), 0xffffff);
        assert_eq!(conv.to_rgb(CdrColor::new(0x14, 0)).packed(), 0x000000);
        assert_eq!(conv.to_rgb(CdrColor::new(0x08, 0)), Rgb24::WHITE);
    }

    #[test]
    fn test_device_models_use_engine_slots() {
        let palette = Palette::new();
        let engine = Recording::default();
        let conv = ColorConverter::new(&palette, &engine);

        assert_eq!(conv.to_rgb(CdrColor::new(0x01, 0x0a14_1e28)), Rgb24::new(1, 0, 0));
        assert_eq!(conv.to_rgb(CdrColor::new(0x02, 0)), Rgb24::new(1, 0, 0));
        assert_eq!(conv.to_rgb(CdrColor::new(0x15, 0)), Rgb24::new(1, 0, 0));
        assert_eq!(conv.to_rgb(CdrColor::new(0x03, 0xffff_ffff)), Rgb24::new(1, 0, 0));
        assert_eq!(conv.to_rgb(CdrColor::new(0x11, 0)), Rgb24::new(1, 0, 0));
        assert_eq!(conv.to_rgb(CdrColor::new(0x0c, 0)), Rgb24::new(0, 1, 0));
        assert_eq!(conv.to_rgb(CdrColor::new(0x12, 0x0080_8000)), Rgb24::new(0, 1, 0));
        assert_eq!(conv.to_rgb(CdrColor::new(0x05, 0x0011_2233)), Rgb24::new(0, 0, 1));

        let seen = engine.seen.borrow();
        assert_eq!(seen[0], SlotInput::Cmyk([40.0, 30.0, 20.0, 10.0]));
        assert_eq!(seen[3], SlotInput::Cmyk([100.0; 4]));
        assert_eq!(seen[6], SlotInput::Lab([0.0, 0.0, 0.0]));
        assert_eq!(seen[7], SlotInput::Rgb([0x11, 0x22, 0x33]));
    }

    #[test]
    fn test_unknown_model_passes_value_through() {
        let palette = Palette::new();
        let conv = approx(&palette);
        assert_eq!(conv.to_rgb(CdrColor::new(0x0a, 0x12_3456)).packed(), 0x123456);
        assert_eq!(conv.to_rgb(CdrColor::new(0x7fff, 0xff12_3456)).packed(), 0x123456);
    }

    #[test]
    fn test_spot_indirection() {
        let mut palette = Palette::new();
        palette.insert(7, CdrColor::new(0x04, 0x00ff_ffff));
        let conv = approx(&palette);
        assert_eq!(conv.to_rgb(CdrColor::new(0x19, 7)), Rgb24::BLACK);
        // tint bytes above the index are ignored
        assert_eq!(conv.to_rgb(CdrColor::new(0x19, 0x0032_0007)), Rgb24::BLACK);
    }

    #[test]
    fn test_unregistered_spot_is_raw_value() {
        let palette = Palette::new();
        let conv = approx(&palette);
        assert_eq!(conv.to_rgb(CdrColor::new(0x19, 0x00ab_cdef)).packed(), 0xabcdef);
    }

    #[test]
    fn test_spot_chain_and_cycle() {
        let mut palette = Palette::new();
        palette.insert(1, CdrColor::new(0x19, 2));
        palette.insert(2, CdrColor::new(0x09, 0x33));
        palette.insert(10, CdrColor::new(0x19, 11));
        palette.insert(11, CdrColor::new(0x19, 10));
        palette.insert(20, CdrColor::new(0x19, 20));
        let conv = approx(&palette);

        assert_eq!(conv.to_rgb(CdrColor::new(0x19, 1)), Rgb24::gray(0x33));
        // cycles terminate on the last spot reached
        assert_eq!(conv.to_rgb(CdrColor::new(0x19, 10)).packed(), 10);
        assert_eq!(conv.to_rgb(CdrColor::new(0x19, 20)).packed(), 20);
    }

    #[test]
    fn test_later_palette_entry_wins() {
        let mut palette = Palette::new();
        palette.insert(4, CdrColor::new(0x09, 0x10));
        palette.insert(4, CdrColor::new(0x09, 0x20));
        let conv = approx(&palette);
        assert_eq!(conv.to_rgb(CdrColor::new(0x19, 4)), Rgb24::gray(0x20));
    }

    #[test]
    fn test_output_is_24_bit() {
        let palette = Palette::new();
        let conv = approx(&palette);
        for model in 0u16..0x20 {
            for value in [0, 0x7f7f_7f7f, 0xffff_ffff, 0x0064_0064, 0x1234_5678] {
                let rgb = conv.to_rgb(CdrColor::new(model, value));
                assert!(rgb.packed() <= 0xff_ffff, "model {model:#x} value {value:#x}");
            }
        }
    }

    #[test]
    fn test_to_hex() {
        let palette = Palette::new();
        let conv = approx(&palette);
        assert_eq!(conv.to_hex(CdrColor::new(0x09, 0x80)), "#808080");
        assert_eq!(conv.to_hex(CdrColor::new(0x06, 0xffff_0000)), "#ff0000");
    }

    #[test]
    fn test_bmp_color() {
        let palette = Palette::new();
        let conv = approx(&palette);
        // legacy 2 is CMY
        assert_eq!(conv.bmp_color(CdrColor::new(2, 0)), Rgb24::WHITE);
        // legacy 5 is grayscale
        assert_eq!(conv.bmp_color(CdrColor::new(5, 0x40)), Rgb24::gray(0x40));
        // legacy 8, 9 and out-of-table codes are packed RGB
        assert_eq!(conv.bmp_color(CdrColor::new(8, 0x00ab_cdef)).packed(), 0xabcdef);
        assert_eq!(conv.bmp_color(CdrColor::new(9, 0x0001_0203)).packed(), 0x010203);
        assert_eq!(conv.bmp_color(CdrColor::new(99, 0xff01_0203)).packed(), 0x010203);
    }

    #[test]
    fn test_bmp_rgb_goes_through_rgb_slot() {
        let palette = Palette::new();
        let engine = Recording::default();
        let conv = ColorConverter::new(&palette, &engine);
        assert_eq!(conv.bmp_color(CdrColor::new(1, 0x0001_0203)), Rgb24::new(0, 0, 1));
        assert_eq!(conv.bmp_color(CdrColor::new(10, 0)), Rgb24::new(0, 0, 1));
        assert_eq!(conv.bmp_color(CdrColor::new(11, 0x8080)), Rgb24::new(0, 1, 0));
        assert_eq!(engine.seen.borrow()[0], SlotInput::Rgb([1, 2, 3]));
    }
}
