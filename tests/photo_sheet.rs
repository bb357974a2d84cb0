// SPDX-License-Identifier: GPL-3.0-or-later
// tests/photo_sheet.rs
//
// End-to-end runs of the sheet pipeline with scripted crop frontends.

use std::path::{Path, PathBuf};

use fshg::SheetConfig;
use fshg::app::{CropSource, HeadlessFrontend, compose_sheet, create_photo_sheet};
use fshg::document::{RasterDocument, encode_sheet};
use fshg::domain::crop::{CropEvent, CropSession, SessionResult};
use fshg::domain::layout::PhotoLayout;
use fshg::domain::sheet::SheetComposer;
use fshg::domain::tile::{Tile, fit_center};
use fshg::error::{SheetError, SheetResult};
use image::{DynamicImage, Rgb, RgbImage};
use sha2::{Digest, Sha256};
use tempfile::TempDir;

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 128])
    })
}

fn write_input(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("portrait.png");
    gradient(480, 640).save(&path).unwrap();
    path
}

fn digest(bytes: &[u8]) -> Vec<u8> {
    Sha256::digest(bytes).to_vec()
}

fn small_config(layout: PhotoLayout) -> SheetConfig {
    SheetConfig {
        dpi: 100,
        layout,
        ..SheetConfig::default()
    }
}

#[test]
fn one_inch_at_1000_dpi() {
    let document = RasterDocument::from_image(DynamicImage::ImageRgb8(gradient(300, 400)));
    let config = SheetConfig::default();

    let (sheet, summary) = compose_sheet(&document, &config, &mut HeadlessFrontend).unwrap();

    assert_eq!(config.photo_size(), (1102, 1378));
    assert_eq!(summary.tile_size, (1106, 1382));
    assert_eq!(summary.canvas_size, (6000, 4000));
    assert_eq!(sheet.canvas.dimensions(), (6000, 4000));
    // 5 columns x 2 rows
    assert_eq!(summary.tiles_placed, 10);
}

#[test]
fn two_inch_layout_places_fewer_tiles() {
    let document = RasterDocument::from_image(DynamicImage::ImageRgb8(gradient(300, 400)));
    let config = small_config(PhotoLayout::TwoInch);

    let (_, summary) = compose_sheet(&document, &config, &mut HeadlessFrontend).unwrap();

    // 3.5 x 4.5 cm at 100 dpi: 138 x 177, plus border
    assert_eq!(summary.tile_size, (142, 181));
    // 4 columns x 2 rows
    assert_eq!(summary.tiles_placed, 8);
}

#[test]
fn cancelled_run_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let config = small_config(PhotoLayout::OneInch);

    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    let summary = create_photo_sheet(&input, &first, &config, &mut HeadlessFrontend).unwrap();
    create_photo_sheet(&input, &second, &config, &mut HeadlessFrontend).unwrap();

    assert_eq!(summary.crop_source, CropSource::CenterFallback);
    let first_bytes = std::fs::read(&first).unwrap();
    assert_eq!(digest(&first_bytes), digest(&std::fs::read(&second).unwrap()));

    // same as center-crop, border and tiling done by hand
    let (photo_w, photo_h) = config.photo_size();
    let source = DynamicImage::ImageRgb8(gradient(480, 640));
    let photo = fit_center(&source, photo_w, photo_h);
    let tile = Tile::from_photo(&photo, photo_w, photo_h, config.border, config.border_color);
    let sheet = SheetComposer::from_config(&config).compose(&tile);
    let expected = encode_sheet(&sheet.canvas, &first, config.dpi).unwrap();
    assert_eq!(digest(&first_bytes), digest(&expected));
}

#[test]
fn confirmed_crop_is_written_as_jpeg() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("sheet.jpg");
    let config = small_config(PhotoLayout::OneInch);

    let mut frontend = |mut session: CropSession| -> SheetResult<SessionResult> {
        session.replay([
            CropEvent::Scroll(fshg::domain::crop::ScrollDirection::Down),
            CropEvent::Press { x: 100.0, y: 100.0 },
            CropEvent::Drag { x: 110.0, y: 90.0 },
            CropEvent::Confirm,
        ]);
        Ok(session.outcome())
    };
    let summary = create_photo_sheet(&input, &output, &config, &mut frontend).unwrap();

    assert_eq!(summary.crop_source, CropSource::Interactive);
    let written = image::open(&output).unwrap();
    assert_eq!((written.width(), written.height()), (600, 400));
}

#[test]
fn missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.jpg");
    let mut opened = false;
    let mut frontend = |session: CropSession| -> SheetResult<SessionResult> {
        opened = true;
        Ok(session.outcome())
    };

    let err = create_photo_sheet(
        Path::new("/nonexistent/photo.jpg"),
        &output,
        &small_config(PhotoLayout::OneInch),
        &mut frontend,
    )
    .unwrap_err();

    assert!(matches!(err, SheetError::InputNotFound(_)));
    assert!(!opened);
    assert!(!output.exists());
}

#[test]
fn unsupported_output_fails_before_cropping() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("sheet.jpgg");
    let mut opened = false;
    let mut frontend = |session: CropSession| -> SheetResult<SessionResult> {
        opened = true;
        Ok(session.outcome())
    };

    let err = create_photo_sheet(
        &input,
        &output,
        &small_config(PhotoLayout::OneInch),
        &mut frontend,
    )
    .unwrap_err();

    assert!(matches!(err, SheetError::UnsupportedFormat(_)));
    assert!(!opened);
    assert!(!output.exists());
}
