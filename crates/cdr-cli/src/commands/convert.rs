//! Color conversion command.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use cdr_core::color::{parse_model, parse_number};
use cdr_core::CdrColor;

/// Converts one tagged color and prints `#rrggbb`.
pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    let model = parse_model(&args.model).context("Invalid model")?;
    let value = parse_number(&args.value, "value").context("Invalid value")?;
    let color = CdrColor::new(model, value);

    let mut doc = super::load_document(args.document.as_deref())?;
    if let Some(path) = &args.profile {
        super::apply_profile(&mut doc, path, verbose)?;
    }

    let rgb = if args.bmp {
        doc.bmp_color(color)
    } else {
        doc.rgb_color(color)
    };

    if verbose {
        if args.bmp {
            eprintln!("bitmap code {model} value 0x{value:08x}");
        } else {
            eprintln!("{color}");
        }
    }
    println!("{rgb}");
    Ok(())
}
