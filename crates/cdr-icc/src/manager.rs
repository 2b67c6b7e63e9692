//! Per-document ICC transform slots backed by Little CMS 2.

use crate::{
    ApproxEngine, ColorEngine, Intent, Profile, ProfileColorSpace, SlotInput, SlotSource, Transform,
    TransformSlot,
};
use cdr_core::Rgb24;
use lcms2::Pod;
use tracing::{debug, warn};

/// A slot's transform plus where its source profile came from.
#[derive(Debug)]
struct Slot<I: Copy + Pod> {
    transform: Transform<I>,
    source: SlotSource,
}

impl<I: Copy + Pod> Slot<I> {
    fn new(transform: Transform<I>, source: SlotSource) -> Self {
        Self { transform, source }
    }
}

/// The three document transform slots.
///
/// Built with defaults on construction:
///
/// - RGB: sRGB -> sRGB
/// - Lab: CIE Lab v4 (D50) -> sRGB
/// - CMYK: empty, served by [`ApproxEngine::cmyk_to_rgb`] until the document
///   supplies a CMYK profile
///
/// No standard CMYK profile ships with this crate, so until a document
/// profile arrives the CMYK slot reports [`SlotSource::Approximate`] and
/// CMYK colors use the naive `255 * (1 - c) * (1 - k)` formula. Output for
/// those colors will differ from a press-profile rendering.
///
/// Any slot whose transform cannot be built is served by [`ApproxEngine`].
/// Replacing a slot drops the previous transform, so at most one lcms2
/// handle is live per slot.
#[derive(Debug)]
pub struct IccTransforms {
    cmyk: Option<Slot<[f64; 4]>>,
    lab: Option<Slot<[f64; 3]>>,
    rgb: Option<Slot<[u8; 3]>>,
}

impl IccTransforms {
    /// Creates the slots from built-in profiles.
    pub fn new() -> Self {
        let mut slots = Self::empty();
        slots.build_defaults();
        slots
    }

    /// Creates an engine with every slot empty.
    pub fn empty() -> Self {
        Self {
            cmyk: None,
            lab: None,
            rgb: None,
        }
    }

    /// (Re)builds the default transforms from built-in profiles.
    ///
    /// Document-supplied transforms are replaced as well.
    pub fn build_defaults(&mut self) {
        let srgb = Profile::srgb();
        self.cmyk = None;
        self.rgb = match Transform::rgb(&srgb, &srgb, Intent::Perceptual) {
            Ok(t) => Some(Slot::new(t, SlotSource::BuiltIn)),
            Err(e) => {
                warn!(slot = %TransformSlot::Rgb, error = %e, "default transform unavailable");
                None
            }
        };
        self.lab = match Profile::lab_d50().and_then(|lab| Transform::lab(&lab, &srgb, Intent::Perceptual)) {
            Ok(t) => Some(Slot::new(t, SlotSource::BuiltIn)),
            Err(e) => {
                warn!(slot = %TransformSlot::Lab, error = %e, "default transform unavailable");
                None
            }
        };
    }

    /// Empties `slot`, handing it back to the closed-form fallback.
    pub fn clear(&mut self, slot: TransformSlot) {
        match slot {
            TransformSlot::Cmyk => self.cmyk = None,
            TransformSlot::Lab => self.lab = None,
            TransformSlot::Rgb => self.rgb = None,
        }
    }

    /// Rebuilds the slot matching `profile`'s color space.
    fn install(&mut self, profile: &Profile) -> Option<TransformSlot> {
        let srgb = Profile::srgb();
        let color_space = profile.color_space();
        let result = match color_space {
            ProfileColorSpace::Cmyk => Transform::cmyk(profile, &srgb, Intent::Perceptual).map(|t| {
                self.cmyk = Some(Slot::new(t, SlotSource::Embedded));
                TransformSlot::Cmyk
            }),
            ProfileColorSpace::Rgb => Transform::rgb(profile, &srgb, Intent::Perceptual).map(|t| {
                self.rgb = Some(Slot::new(t, SlotSource::Embedded));
                TransformSlot::Rgb
            }),
            other => {
                debug!(color_space = %other, "ignoring embedded profile");
                return None;
            }
        };
        match result {
            Ok(slot) => {
                debug!(%slot, description = %profile.description(), "embedded profile installed");
                Some(slot)
            }
            Err(e) => {
                warn!(%color_space, error = %e, "embedded profile unusable, keeping previous transform");
                None
            }
        }
    }
}

impl Default for IccTransforms {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorEngine for IccTransforms {
    fn transform(&self, input: SlotInput) -> Rgb24 {
        let rgb = match input {
            SlotInput::Cmyk(cmyk) => self.cmyk.as_ref().map(|s| s.transform.apply(cmyk)),
            SlotInput::Lab(lab) => self.lab.as_ref().map(|s| s.transform.apply(lab)),
            SlotInput::Rgb(rgb) => self.rgb.as_ref().map(|s| s.transform.apply(rgb)),
        };
        match rgb {
            Some(rgb) => Rgb24::from_array(rgb),
            None => ApproxEngine.transform(input),
        }
    }

    fn load_profile(&mut self, profile: &[u8]) -> Option<TransformSlot> {
        if profile.is_empty() {
            return None;
        }
        match Profile::from_icc(profile) {
            Ok(parsed) => self.install(&parsed),
            Err(e) => {
                debug!(len = profile.len(), error = %e, "ignoring unparseable embedded profile");
                None
            }
        }
    }

    fn slot_source(&self, slot: TransformSlot) -> SlotSource {
        let source = match slot {
            TransformSlot::Cmyk => self.cmyk.as_ref().map(|s| s.source),
            TransformSlot::Lab => self.lab.as_ref().map(|s| s.source),
            TransformSlot::Rgb => self.rgb.as_ref().map(|s| s.source),
        };
        source.unwrap_or(SlotSource::Approximate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::fake_header;
    use crate::profile::linear_srgb;
    use lcms2_sys as ffi;
    use std::ptr;

    fn linear_rgb_icc() -> Vec<u8> {
        linear_srgb().to_icc().unwrap()
    }

    /// CMYK output profile whose AToB0 maps every ink to neutral gray:
    /// L = 100 - 25 * (c + m + y + k), a = b = 0.
    fn gray_cmyk_icc() -> Vec<u8> {
        // 2-node CLUT over four inputs, v4 16-bit Lab out
        let mut table = Vec::with_capacity(16 * 3);
        for corner in 0u32..16 {
            let inks = corner.count_ones();
            let l = (4 - inks) * 0xffff / 4;
            table.extend_from_slice(&[l as u16, 0x8080, 0x8080]);
        }

        unsafe {
            let profile = ffi::cmsCreateProfilePlaceholder(ptr::null_mut());
            assert!(!profile.is_null());
            ffi::cmsSetProfileVersion(profile, 4.3);
            ffi::cmsSetDeviceClass(profile, ffi::ProfileClassSignature::OutputClass);
            ffi::cmsSetColorSpace(profile, ffi::ColorSpaceSignature::CmykData);
            ffi::cmsSetPCS(profile, ffi::ColorSpaceSignature::LabData);

            let lut = ffi::cmsPipelineAlloc(ptr::null_mut(), 4, 3);
            let a_curves = ffi::cmsStageAllocToneCurves(ptr::null_mut(), 4, ptr::null());
            let clut = ffi::cmsStageAllocCLut16bit(ptr::null_mut(), 2, 4, 3, table.as_ptr());
            let b_curves = ffi::cmsStageAllocToneCurves(ptr::null_mut(), 3, ptr::null());
            for stage in [a_curves, clut, b_curves] {
                assert!(ffi::cmsPipelineInsertStage(lut, ffi::StageLoc::AT_END, stage) != 0);
            }
            assert!(ffi::cmsWriteTag(profile, ffi::TagSignature::AToB0Tag, lut as *const _) != 0);
            ffi::cmsPipelineFree(lut);

            let mut len = 0u32;
            assert!(ffi::cmsSaveProfileToMem(profile, ptr::null_mut(), &mut len) != 0);
            let mut data = vec![0u8; len as usize];
            assert!(ffi::cmsSaveProfileToMem(profile, data.as_mut_ptr().cast(), &mut len) != 0);
            ffi::cmsCloseProfile(profile);
            data
        }
    }

    #[test]
    fn test_default_sources() {
        let t = IccTransforms::new();
        assert_eq!(t.slot_source(TransformSlot::Cmyk), SlotSource::Approximate);
        assert_eq!(t.slot_source(TransformSlot::Lab), SlotSource::BuiltIn);
        assert_eq!(t.slot_source(TransformSlot::Rgb), SlotSource::BuiltIn);
    }

    #[test]
    fn test_default_cmyk_uses_formula() {
        let t = IccTransforms::new();
        let input = [20.0, 40.0, 60.0, 10.0];
        assert_eq!(
            t.transform(SlotInput::Cmyk(input)),
            ApproxEngine::cmyk_to_rgb(input)
        );
    }

    #[test]
    fn test_rgb_profile_replaces_only_rgb_slot() {
        let mut t = IccTransforms::new();
        let lab = SlotInput::Lab([60.0, 20.0, -10.0]);
        let cmyk = SlotInput::Cmyk([10.0, 20.0, 30.0, 0.0]);
        let gray = SlotInput::Rgb([128, 128, 128]);
        let (lab_before, cmyk_before, gray_before) = (t.transform(lab), t.transform(cmyk), t.transform(gray));

        assert_eq!(t.load_profile(&linear_rgb_icc()), Some(TransformSlot::Rgb));
        assert_eq!(t.slot_source(TransformSlot::Rgb), SlotSource::Embedded);

        assert!(t.transform(gray).red() > gray_before.red() + 30);
        assert_eq!(t.transform(lab), lab_before);
        assert_eq!(t.transform(cmyk), cmyk_before);
    }

    #[test]
    fn test_cmyk_profile_replaces_only_cmyk_slot() {
        let mut t = IccTransforms::new();
        let lab = SlotInput::Lab([60.0, 20.0, -10.0]);
        let gray = SlotInput::Rgb([128, 128, 128]);
        let (lab_before, gray_before) = (t.transform(lab), t.transform(gray));
        let cyan = [100.0, 0.0, 0.0, 0.0];
        assert_eq!(t.transform(SlotInput::Cmyk(cyan)), Rgb24::new(0, 255, 255));

        assert_eq!(t.load_profile(&gray_cmyk_icc()), Some(TransformSlot::Cmyk));
        assert_eq!(t.slot_source(TransformSlot::Cmyk), SlotSource::Embedded);

        // the profile renders full cyan as a neutral L* = 75 gray
        let out = t.transform(SlotInput::Cmyk(cyan));
        assert!(out.red().abs_diff(out.blue()) <= 3, "{out:?}");
        assert!(out.red().abs_diff(out.green()) <= 3, "{out:?}");
        assert!((150..=220).contains(&out.red()), "{out:?}");
        let paper = t.transform(SlotInput::Cmyk([0.0; 4]));
        assert!(paper.red() >= 245 && paper.blue() >= 245, "{paper:?}");

        assert_eq!(t.transform(lab), lab_before);
        assert_eq!(t.transform(gray), gray_before);
        assert_eq!(t.slot_source(TransformSlot::Rgb), SlotSource::BuiltIn);
    }

    #[test]
    fn test_empty_and_garbage_are_ignored() {
        let mut t = IccTransforms::new();
        t.load_profile(&linear_rgb_icc());
        let before = t.transform(SlotInput::Rgb([128, 128, 128]));

        assert_eq!(t.load_profile(&[]), None);
        assert_eq!(t.load_profile(&[0xde, 0xad, 0xbe, 0xef]), None);
        assert_eq!(t.load_profile(&fake_header(b"CMYK")), None);

        assert_eq!(t.slot_source(TransformSlot::Rgb), SlotSource::Embedded);
        assert_eq!(t.slot_source(TransformSlot::Cmyk), SlotSource::Approximate);
        assert_eq!(t.transform(SlotInput::Rgb([128, 128, 128])), before);
    }

    #[test]
    fn test_non_device_profiles_are_ignored() {
        let mut t = IccTransforms::new();
        let lab_icc = Profile::lab_d50().unwrap().to_icc().unwrap();
        assert_eq!(t.load_profile(&lab_icc), None);
        assert_eq!(t.slot_source(TransformSlot::Lab), SlotSource::BuiltIn);
    }

    #[test]
    fn test_clear_and_rebuild() {
        let mut t = IccTransforms::new();
        t.load_profile(&linear_rgb_icc());
        t.clear(TransformSlot::Lab);
        assert_eq!(t.slot_source(TransformSlot::Lab), SlotSource::Approximate);
        assert_eq!(
            t.transform(SlotInput::Lab([100.0, 0.0, 0.0])),
            Rgb24::WHITE
        );

        t.build_defaults();
        assert_eq!(t.slot_source(TransformSlot::Lab), SlotSource::BuiltIn);
        assert_eq!(t.slot_source(TransformSlot::Rgb), SlotSource::BuiltIn);
    }

    #[test]
    fn test_engines_are_independent() {
        let mut a = IccTransforms::new();
        let b = IccTransforms::new();
        a.load_profile(&linear_rgb_icc());
        assert_eq!(b.slot_source(TransformSlot::Rgb), SlotSource::BuiltIn);
    }
}
