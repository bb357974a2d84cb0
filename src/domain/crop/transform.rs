// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/transform.rs
//
// Source <-> display coordinate mapping for the crop preview.

use super::{CropBox, CropRegion};

/// Uniform scale from source pixels to display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    scale: f64,
}

impl DisplayTransform {
    /// Fit a `width` x `height` image into `max_width` x `max_height`.
    ///
    /// Never upscales: small images are previewed at 1:1.
    pub fn fit(width: u32, height: u32, max_width: u32, max_height: u32) -> Self {
        let scale_x = f64::from(max_width) / f64::from(width.max(1));
        let scale_y = f64::from(max_height) / f64::from(height.max(1));
        Self {
            scale: scale_x.min(scale_y).min(1.0),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Preview size of a `width` x `height` source, at least 1x1.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn display_size(&self, width: u32, height: u32) -> (u32, u32) {
        let w = (f64::from(width) * self.scale) as u32;
        let h = (f64::from(height) * self.scale) as u32;
        (w.max(1), h.max(1))
    }

    /// Map a display coordinate to the nearest source pixel.
    ///
    /// Rounds to nearest (half away from zero); this does not truncate toward
    /// zero. At scale 0.5, display 100.3 maps to 201 where truncation would
    /// give 200, and display -0.4 maps to -1 where truncation would give 0.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_source(&self, value: f64) -> i64 {
        (value / self.scale).round() as i64
    }

    /// Map a display crop box to a source crop region.
    pub fn box_to_source(&self, crop: &CropBox) -> CropRegion {
        CropRegion::from_edges(
            self.to_source(crop.x1),
            self.to_source(crop.y1),
            self.to_source(crop.x2),
            self.to_source(crop.y2),
        )
    }
}
