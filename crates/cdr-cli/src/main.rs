//! cdrcolor - CorelDRAW color and style inspection
//!
//! Converts document-native tagged colors to RGB, resolves inherited styles
//! and inspects ICC profiles.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cdrcolor")]
#[command(author, version, about = "CorelDRAW color and style inspection")]
#[command(long_about = "
Converts CorelDRAW tagged colors to canonical RGB, resolves style
inheritance and inspects ICC profiles.

Examples:
  cdrcolor convert gray 0x80                     # #808080
  cdrcolor convert 0x06 0xffff0000               # HSB red
  cdrcolor convert spot 5 --document doc.json    # palette lookup
  cdrcolor convert cmyk100 0x0000ff00 --profile press.icc
  cdrcolor convert 2 0 --bmp                     # legacy bitmap code
  cdrcolor style 12 --document doc.json
  cdrcolor profile press.icc
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a tagged color to #rrggbb
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Print a fully resolved style as JSON
    #[command(visible_alias = "s")]
    Style(StyleArgs),

    /// Show an ICC profile's color space and the slot it would replace
    #[command(visible_alias = "p")]
    Profile(ProfileArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Model tag (decimal, 0x hex, or a name such as cmyk100, gray, spot)
    model: String,

    /// Packed color value (decimal or 0x hex)
    value: String,

    /// Treat MODEL as a legacy bitmap palette code
    #[arg(long)]
    bmp: bool,

    /// JSON document with palette entries and styles
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Embedded ICC profile to apply before converting
    #[arg(short, long)]
    profile: Option<PathBuf>,
}

#[derive(Args)]
struct StyleArgs {
    /// Style id
    id: u32,

    /// JSON document with palette entries and styles
    #[arg(short, long)]
    document: PathBuf,
}

#[derive(Args)]
struct ProfileArgs {
    /// ICC profile file
    input: PathBuf,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Style(args) => commands::style::run(args),
        Commands::Profile(args) => commands::profile::run(args, cli.verbose),
    }
}
