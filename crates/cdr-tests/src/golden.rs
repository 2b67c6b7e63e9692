//! Golden values for the closed-form color models.
//!
//! `fixtures/closed_form.json` lists `(model, value)` pairs with their
//! expected `#rrggbb` output. None of these go through an ICC slot, so the
//! expected values are exact regardless of the color engine.

use cdr_core::{CdrColor, Rgb24};
use serde::Deserialize;

/// One golden conversion.
#[derive(Debug, Deserialize)]
pub struct GoldenCase {
    /// Model tag.
    pub model: u16,
    /// Packed value.
    pub value: u32,
    /// Expected output.
    pub rgb: Rgb24,
}

impl GoldenCase {
    /// The input color.
    pub fn color(&self) -> CdrColor {
        CdrColor::new(self.model, self.value)
    }
}

/// Loads the bundled golden table.
pub fn closed_form_cases() -> Vec<GoldenCase> {
    serde_json::from_str(include_str!("../fixtures/closed_form.json"))
        .unwrap_or_else(|e| panic!("closed_form.json is malformed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdr_doc::{ApproxEngine, DocumentState};

    #[test]
    fn test_closed_form_golden() {
        let cases = closed_form_cases();
        assert!(!cases.is_empty());

        let icc = DocumentState::new();
        let approx = DocumentState::with_engine(ApproxEngine);
        for case in &cases {
            let color = case.color();
            assert_eq!(icc.rgb_color(color), case.rgb, "{color}");
            assert_eq!(approx.rgb_color(color), case.rgb, "{color}");
        }
    }

    #[test]
    fn test_golden_through_spot() {
        let mut doc = DocumentState::new();
        let cases = closed_form_cases();
        for (index, case) in (100u16..).zip(&cases) {
            doc.add_palette_color(index, case.color());
        }
        for (index, case) in (100u16..).zip(&cases) {
            let spot = CdrColor::new(0x19, u32::from(index));
            assert_eq!(doc.rgb_color(spot), case.rgb, "{}", case.color());
        }
    }
}
