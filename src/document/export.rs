// SPDX-License-Identifier: GPL-3.0-or-later
// src/document/export.rs
//
// Encode the composed sheet and write it to disk.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::{JpegEncoder, PixelDensity};
use image::{DynamicImage, ImageFormat, RgbImage};

use crate::constant::JPEG_QUALITY;
use crate::error::{SheetError, SheetResult};

/// The writable image format implied by `path`'s extension.
pub fn output_format(path: &Path) -> SheetResult<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|f| f.writing_enabled())
        .ok_or_else(|| SheetError::UnsupportedFormat(path.to_path_buf()))
}

/// Encode `canvas` in the format implied by `path`'s extension.
///
/// JPEG gets maximum quality and the print resolution in its JFIF header.
pub fn encode_sheet(canvas: &RgbImage, path: &Path, dpi: u32) -> SheetResult<Vec<u8>> {
    let format = output_format(path)?;

    let encode_err = |source| SheetError::EncodeFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut buf = Vec::new();
    match format {
        ImageFormat::Jpeg => {
            let density = u16::try_from(dpi).unwrap_or(u16::MAX);
            let mut encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
            encoder.set_pixel_density(PixelDensity::dpi(density));
            encoder.encode_image(canvas).map_err(encode_err)?;
        }
        other => {
            log::debug!("{other:?} output carries no DPI metadata");
            DynamicImage::ImageRgb8(canvas.clone())
                .write_to(&mut Cursor::new(&mut buf), other)
                .map_err(encode_err)?;
        }
    }
    Ok(buf)
}

/// Encode and write `canvas` to `path` in a single write.
///
/// Nothing is written when encoding fails.
pub fn save_sheet(canvas: &RgbImage, path: &Path, dpi: u32) -> SheetResult<()> {
    let bytes = encode_sheet(canvas, path, dpi)?;
    std::fs::write(path, &bytes).map_err(|source| SheetError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
