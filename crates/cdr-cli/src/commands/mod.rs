//! CLI command implementations

pub mod convert;
pub mod profile;
pub mod style;

use anyhow::{Context, Result};
use cdr_doc::{DocumentFile, DocumentState};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::warn;

/// Builds a document from an optional JSON file.
pub fn load_document(path: Option<&Path>) -> Result<DocumentState> {
    let mut doc = DocumentState::new();
    if let Some(path) = path {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        let file: DocumentFile = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse document: {}", path.display()))?;
        file.apply(&mut doc);
    }
    Ok(doc)
}

/// Offers a profile file to the document's color engine.
pub fn apply_profile(doc: &mut DocumentState, path: &Path, verbose: bool) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open profile: {}", path.display()))?;
    match doc.set_color_transform_from_reader(BufReader::new(file)) {
        Some(slot) if verbose => eprintln!("{}: replaces {slot}", path.display()),
        Some(_) => {}
        None => warn!(path = %path.display(), "profile not applied"),
    }
    Ok(())
}
