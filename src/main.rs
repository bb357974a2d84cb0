// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use fshg::app::{create_photo_sheet, default_frontend};
use fshg::constant::{DEFAULT_BORDER, DEFAULT_BORDER_COLOR, DEFAULT_DPI, DEFAULT_GAP};
use fshg::domain::color::parse_color;
use fshg::domain::layout::PhotoLayout;
use fshg::SheetConfig;

#[derive(Parser, Debug)]
#[command(
    name = "fshg",
    about = "Crop a photo and tile it onto a 6x4 inch print sheet",
    version
)]
struct Args {
    /// Photo to crop
    input: PathBuf,

    /// Sheet to write; the extension picks the format
    output: PathBuf,

    /// Output resolution in dots per inch
    #[arg(long, default_value_t = DEFAULT_DPI, value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,

    /// ID photo size
    #[arg(long, value_enum, default_value_t = PhotoLayout::OneInch)]
    layout: PhotoLayout,

    /// Pixels between tiles
    #[arg(long, default_value_t = DEFAULT_GAP)]
    gap: u32,

    /// Border width around each photo, in pixels
    #[arg(long, default_value_t = DEFAULT_BORDER)]
    border: u32,

    /// Border color, hex (#RRGGBB, #RGB) or a basic color name
    #[arg(long, default_value = DEFAULT_BORDER_COLOR)]
    color: String,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = SheetConfig {
        dpi: args.dpi,
        layout: args.layout,
        gap: args.gap,
        border: args.border,
        border_color: parse_color(&args.color)?,
        ..SheetConfig::default()
    };
    log::info!("{} photos at {} dpi", config.layout, config.dpi);
    log::debug!("{config:?}");

    let mut frontend = default_frontend();
    let summary = create_photo_sheet(&args.input, &args.output, &config, frontend.as_mut())
        .with_context(|| format!("could not create sheet from {}", args.input.display()))?;

    println!(
        "Saved {} with {} photos",
        args.output.display(),
        summary.tiles_placed
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
