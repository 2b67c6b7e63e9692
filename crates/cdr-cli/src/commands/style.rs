//! Style resolution command.

use crate::StyleArgs;
use anyhow::{Context, Result};

/// Resolves a style and prints it as pretty JSON.
pub fn run(args: StyleArgs) -> Result<()> {
    let doc = super::load_document(Some(&args.document))?;
    if !doc.styles().contains(args.id) {
        tracing::warn!(id = args.id, "style not in document, printing defaults");
    }
    let style = doc.recursed_style(args.id);
    let json = serde_json::to_string_pretty(&style).context("Failed to serialize style")?;
    println!("{json}");
    Ok(())
}
