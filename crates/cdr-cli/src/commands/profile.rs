//! ICC profile inspection command.

use crate::ProfileArgs;
use anyhow::{bail, Context, Result};
use cdr_icc::{ColorEngine, IccTransforms, Profile, ProfileColorSpace};
use std::fs;

/// Prints a profile's color space and the transform slot it would replace.
pub fn run(args: ProfileArgs, verbose: bool) -> Result<()> {
    let path = &args.input;
    let data = fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;
    let Some(color_space) = ProfileColorSpace::from_header(&data) else {
        bail!("{} is not an ICC profile", path.display());
    };

    println!("{}", path.display());
    println!("  Color space: {color_space}");
    println!("  Size:        {} bytes", data.len());

    match Profile::from_icc(&data) {
        Ok(profile) => {
            let description = profile.description();
            if !description.is_empty() {
                println!("  Description: {description}");
            }
        }
        Err(e) => println!("  Parse error: {e}"),
    }

    // probe with a fresh engine
    let mut engine = IccTransforms::new();
    match engine.load_profile(&data) {
        Some(slot) => println!("  Replaces:    {slot}"),
        None => println!("  Replaces:    nothing (ignored)"),
    }

    if verbose {
        let target = color_space
            .target_slot()
            .map_or_else(|| "none".to_string(), |slot| slot.to_string());
        println!("  Signature slot: {target}");
    }
    Ok(())
}
