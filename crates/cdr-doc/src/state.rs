//! Per-document color and style state.

use cdr_color::{ColorConverter, Palette};
use cdr_core::{CdrColor, Rgb24};
use cdr_icc::{ColorEngine, DefaultEngine, ProfileColorSpace, TransformSlot};
use cdr_style::{Style, StyleMap};
use std::io::Read;
use tracing::debug;

/// Everything the color and style layer knows about one document.
///
/// The parser feeds palette entries, style records and embedded profiles in
/// parse order; conversions and style lookups may be issued at any point
/// after that and always reflect the state at call time. Nothing is cached.
///
/// Each document owns its state. Two documents never observe each other's
/// palette, styles or profiles.
///
/// # Example
///
/// ```rust
/// use cdr_core::CdrColor;
/// use cdr_doc::DocumentState;
/// use cdr_style::Style;
///
/// let mut doc = DocumentState::new();
/// doc.add_palette_color(5, CdrColor::new(0x09, 0x40));
/// assert_eq!(doc.rgb_color_string(CdrColor::new(0x19, 5)), "#404040");
///
/// doc.add_style(1, Style { font_size: Some(12.0), ..Style::default() });
/// doc.add_style(2, Style { parent_id: 1, ..Style::default() });
/// assert_eq!(doc.recursed_style(2).font_size, Some(12.0));
/// ```
#[derive(Debug)]
pub struct DocumentState<E = DefaultEngine> {
    palette: Palette,
    styles: StyleMap<Style>,
    engine: E,
}

impl DocumentState<DefaultEngine> {
    /// Creates an empty document with default transforms.
    pub fn new() -> Self {
        Self::with_engine(DefaultEngine::default())
    }
}

impl Default for DocumentState<DefaultEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ColorEngine> DocumentState<E> {
    /// Creates an empty document using `engine` for the device slots.
    pub fn with_engine(engine: E) -> Self {
        Self {
            palette: Palette::new(),
            styles: StyleMap::new(),
            engine,
        }
    }

    /// Registers a spot palette entry. A later entry for the same index wins.
    pub fn add_palette_color(&mut self, index: u16, color: CdrColor) {
        if let Some(previous) = self.palette.insert(index, color) {
            debug!(index, %previous, replacement = %color, "palette entry replaced");
        }
    }

    /// Registers a style record. The parent may be added later.
    pub fn add_style(&mut self, id: u32, style: Style) {
        self.styles.insert(id, style);
    }

    /// Converts a vector-object color.
    pub fn rgb_color(&self, color: CdrColor) -> Rgb24 {
        self.converter().to_rgb(color)
    }

    /// Converts a vector-object color to `#rrggbb`.
    pub fn rgb_color_string(&self, color: CdrColor) -> String {
        self.converter().to_hex(color)
    }

    /// Converts a bitmap palette color tagged with a legacy model code.
    pub fn bmp_color(&self, color: CdrColor) -> Rgb24 {
        self.converter().bmp_color(color)
    }

    /// Offers an embedded ICC profile.
    ///
    /// A CMYK profile replaces the CMYK slot and an RGB profile the RGB
    /// slot. Anything else, including empty or unparseable data, is ignored
    /// and the previous transforms stay in effect. Returns the replaced slot.
    pub fn set_color_transform(&mut self, profile: &[u8]) -> Option<TransformSlot> {
        if profile.is_empty() {
            return None;
        }
        let declared = ProfileColorSpace::from_header(profile);
        let slot = self.engine.load_profile(profile);
        match (declared, slot) {
            (_, Some(slot)) => debug!(%slot, "document profile applied"),
            (Some(color_space), None) => {
                debug!(%color_space, len = profile.len(), "document profile not applied")
            }
            (None, None) => debug!(len = profile.len(), "document profile has no ICC header"),
        }
        slot
    }

    /// Reads an ICC profile from a stream and offers it like
    /// [`set_color_transform`](Self::set_color_transform).
    ///
    /// A read error or an empty stream leaves the transforms untouched.
    pub fn set_color_transform_from_reader<R: Read>(&mut self, mut reader: R) -> Option<TransformSlot> {
        let mut profile = Vec::new();
        if let Err(e) = reader.read_to_end(&mut profile) {
            debug!(error = %e, "failed to read profile stream");
            return None;
        }
        self.set_color_transform(&profile)
    }

    /// Resolves a style with all of its ancestors.
    pub fn recursed_style(&self, id: u32) -> Style {
        self.styles.resolve(id)
    }

    /// A converter borrowing this document's palette and engine.
    pub fn converter(&self) -> ColorConverter<'_, E> {
        ColorConverter::new(&self.palette, &self.engine)
    }

    /// The spot palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The unresolved style records.
    pub fn styles(&self) -> &StyleMap<Style> {
        &self.styles
    }

    /// The color engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the color engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdr_icc::{ApproxEngine, SlotInput};
    use cdr_style::{Align, FontSpec};
    use std::io;

    /// Approximate engine whose CMYK slot inverts once a CMYK header arrives.
    #[derive(Default)]
    struct SwitchingEngine {
        cmyk_profile: bool,
    }

    impl ColorEngine for SwitchingEngine {
        fn transform(&self, input: SlotInput) -> Rgb24 {
            let rgb = ApproxEngine.transform(input);
            match input {
                SlotInput::Cmyk(_) if self.cmyk_profile => Rgb24::from_packed(!rgb.packed()),
                _ => rgb,
            }
        }

        fn load_profile(&mut self, profile: &[u8]) -> Option<TransformSlot> {
            let slot = ProfileColorSpace::from_header(profile)?.target_slot()?;
            if slot == TransformSlot::Cmyk {
                self.cmyk_profile = true;
            }
            Some(slot)
        }
    }

    fn header(color_space: &[u8; 4]) -> Vec<u8> {
        let mut bytes = vec![0u8; 128];
        bytes[16..20].copy_from_slice(color_space);
        bytes[36..40].copy_from_slice(b"acsp");
        bytes
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream closed"))
        }
    }

    #[test]
    fn test_spot_matches_direct() {
        let mut doc = DocumentState::with_engine(ApproxEngine);
        let gray = CdrColor::new(0x09, 0x40);
        doc.add_palette_color(5, gray);
        assert_eq!(doc.rgb_color(CdrColor::new(0x19, 5)), doc.rgb_color(gray));
        assert_eq!(doc.rgb_color(CdrColor::new(0x19, 6)).packed(), 6);
    }

    #[test]
    fn test_palette_last_write_wins() {
        let mut doc = DocumentState::with_engine(ApproxEngine);
        doc.add_palette_color(1, CdrColor::new(0x09, 0x10));
        doc.add_palette_color(1, CdrColor::new(0x09, 0x20));
        assert_eq!(doc.palette().len(), 1);
        assert_eq!(doc.rgb_color_string(CdrColor::new(0x19, 1)), "#202020");
    }

    #[test]
    fn test_cmyk_profile_changes_only_cmyk() {
        let mut doc = DocumentState::with_engine(SwitchingEngine::default());
        let cmyk = CdrColor::from_channels(0x01, [0, 0, 0, 0]);
        let lab = CdrColor::from_channels(0x0c, [128, 0, 0, 0]);
        let rgb = CdrColor::from_channels(0x05, [10, 20, 30, 0]);

        let before = [doc.rgb_color(cmyk), doc.rgb_color(lab), doc.rgb_color(rgb)];
        assert_eq!(before[0], Rgb24::WHITE);

        assert_eq!(doc.set_color_transform(&header(b"CMYK")), Some(TransformSlot::Cmyk));

        assert_eq!(doc.rgb_color(cmyk), Rgb24::BLACK);
        assert_eq!(doc.rgb_color(lab), before[1]);
        assert_eq!(doc.rgb_color(rgb), before[2]);
        // values returned earlier are not recomputed
        assert_eq!(before[0], Rgb24::WHITE);
    }

    #[test]
    fn test_ignored_profiles() {
        let mut doc = DocumentState::with_engine(SwitchingEngine::default());
        assert_eq!(doc.set_color_transform(&[]), None);
        assert_eq!(doc.set_color_transform(b"not a profile"), None);
        assert_eq!(doc.set_color_transform(&header(b"Lab ")), None);
        assert!(!doc.engine().cmyk_profile);
    }

    #[test]
    fn test_profile_from_reader() {
        let mut doc = DocumentState::with_engine(SwitchingEngine::default());
        assert_eq!(doc.set_color_transform_from_reader(FailingReader), None);
        assert_eq!(doc.set_color_transform_from_reader(io::empty()), None);
        assert!(!doc.engine().cmyk_profile);

        let bytes = header(b"CMYK");
        assert_eq!(
            doc.set_color_transform_from_reader(bytes.as_slice()),
            Some(TransformSlot::Cmyk)
        );
        assert!(doc.engine().cmyk_profile);
    }

    #[test]
    fn test_documents_are_independent() {
        let mut a = DocumentState::with_engine(SwitchingEngine::default());
        let b = DocumentState::with_engine(SwitchingEngine::default());
        a.add_palette_color(3, CdrColor::new(0x09, 0x99));
        a.add_style(1, Style { font_size: Some(20.0), ..Style::default() });
        a.set_color_transform(&header(b"CMYK"));

        assert!(b.palette().is_empty());
        assert!(b.styles().is_empty());
        assert!(!b.engine().cmyk_profile);
        assert_eq!(b.rgb_color(CdrColor::new(0x01, 0)), Rgb24::WHITE);
    }

    #[test]
    fn test_bmp_color() {
        let doc = DocumentState::with_engine(ApproxEngine);
        assert_eq!(doc.bmp_color(CdrColor::new(5, 0x7f)), Rgb24::gray(0x7f));
        assert_eq!(doc.bmp_color(CdrColor::new(9, 0x00c0_ffee)).packed(), 0xc0ffee);
    }

    #[test]
    fn test_recursed_style_forward_reference() {
        let mut doc = DocumentState::with_engine(ApproxEngine);
        // child arrives before its parent
        doc.add_style(
            2,
            Style {
                parent_id: 1,
                align: Some(Align::Center),
                ..Style::default()
            },
        );
        doc.add_style(
            1,
            Style {
                font: Some(FontSpec::new(0, "Arial")),
                align: Some(Align::Left),
                ..Style::default()
            },
        );
        let resolved = doc.recursed_style(2);
        assert_eq!(resolved.font, Some(FontSpec::new(0, "Arial")));
        assert_eq!(resolved.align, Some(Align::Center));
        assert_eq!(doc.recursed_style(99), Style::default());
    }

    #[test]
    fn test_override_precedence() {
        let mut doc = DocumentState::with_engine(ApproxEngine);
        let red = FontSpec::new(0, "Red");
        doc.add_style(1, Style { font: Some(red.clone()), ..Style::default() });
        doc.add_style(2, Style { parent_id: 1, font_size: Some(7.0), ..Style::default() });
        doc.add_style(
            3,
            Style {
                parent_id: 1,
                font: Some(FontSpec::new(0, "Green")),
                ..Style::default()
            },
        );

        let first = doc.recursed_style(2);
        assert_eq!(first.font, Some(red));
        assert_eq!(first.font_size, Some(7.0));
        assert_eq!(doc.recursed_style(3).font, Some(FontSpec::new(0, "Green")));
    }

    #[cfg(feature = "lcms")]
    #[test]
    fn test_default_engine_rgb_profile() {
        use cdr_icc::{Profile, SlotSource};

        let mut doc = DocumentState::new();
        let other = DocumentState::new();
        let mid = CdrColor::from_channels(0x05, [128, 64, 200, 0]);
        let before = doc.rgb_color(mid);

        let icc = Profile::srgb().to_icc().unwrap();
        assert_eq!(doc.set_color_transform(&icc), Some(TransformSlot::Rgb));
        assert_eq!(doc.engine().slot_source(TransformSlot::Rgb), SlotSource::Embedded);
        assert_eq!(other.engine().slot_source(TransformSlot::Rgb), SlotSource::BuiltIn);

        let after = doc.rgb_color(mid);
        assert!(after.red().abs_diff(before.red()) <= 1, "{after} vs {before}");
        assert!(after.blue().abs_diff(before.blue()) <= 1, "{after} vs {before}");
    }
}
