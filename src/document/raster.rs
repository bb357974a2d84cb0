// SPDX-License-Identifier: GPL-3.0-or-later
// src/document/raster.rs
//
// Raster input photo: decode, orientation and the padded working copy.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader, Rgb};

use super::orientation::Orientation;
use crate::domain::tile::working_copy;
use crate::error::{SheetError, SheetResult};

/// The decoded source photo.
pub struct RasterDocument {
    /// Upright source image.
    document: DynamicImage,
}

impl RasterDocument {
    /// Load a raster document from disk.
    ///
    /// Fails with `InputNotFound` before touching the decoder if the path is missing.
    pub fn open(path: &Path) -> SheetResult<Self> {
        if !path.is_file() {
            return Err(SheetError::InputNotFound(path.to_path_buf()));
        }

        let decode_err = |source| SheetError::DecodeFailure {
            path: path.to_path_buf(),
            source,
        };
        let document = ImageReader::open(path)
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?;

        let orientation = Orientation::read(path);
        if orientation != Orientation::Normal {
            log::debug!("applying EXIF orientation {orientation:?}");
        }
        let document = orientation.apply(document);

        let (w, h) = document.dimensions();
        log::info!("loaded {} ({w}x{h})", path.display());

        Ok(Self { document })
    }

    /// Wrap an already decoded image.
    pub fn from_image(document: DynamicImage) -> Self {
        Self { document }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.document
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    /// The source pasted onto a 1.5x `background` canvas for cropping.
    pub fn working_copy(&self, background: Rgb<u8>) -> DynamicImage {
        working_copy(&self.document, background)
    }
}
