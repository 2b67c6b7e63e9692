//! Serialized palette and style tables.
//!
//! A compact interchange form of what a parser would feed into
//! [`DocumentState`], used by the command line tool and test fixtures.
//!
//! ```json
//! {
//!   "palette": { "5": { "model": 9, "value": 64 } },
//!   "styles": {
//!     "1": { "font_size": 10.0 },
//!     "2": { "parent_id": 1, "align": "center" }
//!   }
//! }
//! ```

use crate::DocumentState;
use cdr_core::CdrColor;
use cdr_icc::ColorEngine;
use cdr_style::Style;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Palette entries and style records of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentFile {
    /// Spot palette, keyed by index.
    pub palette: BTreeMap<u16, CdrColor>,
    /// Style records, keyed by id.
    pub styles: BTreeMap<u32, Style>,
}

impl DocumentFile {
    /// Feeds every entry into `doc`, palette first.
    pub fn apply<E: ColorEngine>(self, doc: &mut DocumentState<E>) {
        for (index, color) in self.palette {
            doc.add_palette_color(index, color);
        }
        for (id, style) in self.styles {
            doc.add_style(id, style);
        }
    }
}

impl<E: ColorEngine> From<&DocumentState<E>> for DocumentFile {
    fn from(doc: &DocumentState<E>) -> Self {
        Self {
            palette: doc.palette().iter().collect(),
            styles: doc.styles().iter().map(|(&id, s)| (id, s.clone())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdr_icc::ApproxEngine;
    use cdr_style::Align;

    const FIXTURE: &str = r#"{
        "palette": { "5": { "model": 9, "value": 64 } },
        "styles": {
            "1": { "font_size": 10.0 },
            "2": { "parent_id": 1, "align": "center" }
        }
    }"#;

    #[test]
    fn test_parse_and_apply() {
        let file: DocumentFile = serde_json::from_str(FIXTURE).unwrap();
        let mut doc = DocumentState::with_engine(ApproxEngine);
        file.apply(&mut doc);

        assert_eq!(doc.rgb_color_string(CdrColor::new(0x19, 5)), "#404040");
        let style = doc.recursed_style(2);
        assert_eq!(style.font_size, Some(10.0));
        assert_eq!(style.align, Some(Align::Center));
    }

    #[test]
    fn test_missing_sections_default() {
        let file: DocumentFile = serde_json::from_str("{}").unwrap();
        assert_eq!(file, DocumentFile::default());
    }

    #[test]
    fn test_capture_state() {
        let file: DocumentFile = serde_json::from_str(FIXTURE).unwrap();
        let mut doc = DocumentState::with_engine(ApproxEngine);
        file.clone().apply(&mut doc);
        assert_eq!(DocumentFile::from(&doc), file);
    }
}
