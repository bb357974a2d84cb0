// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/pipeline.rs
//
// Crop, frame and tile one photo onto a print sheet.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use super::frontend::CropFrontend;
use crate::config::SheetConfig;
use crate::document::{RasterDocument, output_format, save_sheet};
use crate::domain::crop::{CropSession, SessionResult};
use crate::domain::sheet::{Sheet, SheetComposer};
use crate::domain::tile::{Tile, crop_region, fit_center};
use crate::error::SheetResult;

/// How the tile's photo was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropSource {
    /// The user confirmed a crop box.
    Interactive,
    /// The session was cancelled (or gave an empty box): centered crop of the source.
    CenterFallback,
}

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSummary {
    pub tiles_placed: usize,
    pub tile_size: (u32, u32),
    pub canvas_size: (u32, u32),
    pub crop_source: CropSource,
}

/// Load `input`, crop it interactively, tile it and write `output`.
///
/// The output format is checked before the crop window opens; the output file
/// is only written once the whole sheet is composed and encoded.
pub fn create_photo_sheet(
    input: &Path,
    output: &Path,
    config: &SheetConfig,
    frontend: &mut dyn CropFrontend,
) -> SheetResult<SheetSummary> {
    let document = RasterDocument::open(input)?;
    let format = output_format(output)?;
    log::debug!("writing {format:?} to {}", output.display());
    let (sheet, summary) = compose_sheet(&document, config, frontend)?;
    save_sheet(&sheet.canvas, output, config.dpi)?;
    log::info!(
        "saved {} ({} tiles of {}x{})",
        output.display(),
        summary.tiles_placed,
        summary.tile_size.0,
        summary.tile_size.1
    );
    Ok(summary)
}

/// Everything between decode and encode.
pub fn compose_sheet(
    document: &RasterDocument,
    config: &SheetConfig,
    frontend: &mut dyn CropFrontend,
) -> SheetResult<(Sheet, SheetSummary)> {
    let working = document.working_copy(config.background);
    let session = CropSession::new(&working, config.photo_aspect())?;
    let outcome = frontend.run(session)?;

    let (photo, crop_source) = select_photo(document.image(), &working, outcome, config);
    let (photo_w, photo_h) = config.photo_size();
    let tile = Tile::from_photo(&photo, photo_w, photo_h, config.border, config.border_color);

    let sheet = SheetComposer::from_config(config).compose(&tile);
    let summary = SheetSummary {
        tiles_placed: sheet.count(),
        tile_size: tile.dimensions(),
        canvas_size: config.canvas_size(),
        crop_source,
    };
    Ok((sheet, summary))
}

/// Pick the photo for the tile, already at the final pixel size.
///
/// A confirmed region is cut from the padded working copy; the fallback
/// crops the unpadded source.
fn select_photo(
    source: &DynamicImage,
    working: &DynamicImage,
    outcome: SessionResult,
    config: &SheetConfig,
) -> (RgbImage, CropSource) {
    let (photo_w, photo_h) = config.photo_size();

    match outcome {
        SessionResult::Confirmed(region) if region.is_valid() => {
            log::info!(
                "cropping {}x{} at ({}, {})",
                region.width,
                region.height,
                region.x,
                region.y
            );
            let cropped = crop_region(working, region, config.background);
            let resized = imageops::resize(&cropped, photo_w, photo_h, FilterType::Lanczos3);
            (resized, CropSource::Interactive)
        }
        SessionResult::Confirmed(region) => {
            log::warn!("confirmed crop {region:?} is empty, using center crop");
            (fit_center(source, photo_w, photo_h), CropSource::CenterFallback)
        }
        SessionResult::Cancelled => {
            log::warn!("window closed without Enter, using center crop");
            (fit_center(source, photo_w, photo_h), CropSource::CenterFallback)
        }
    }
}
