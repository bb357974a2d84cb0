// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Immutable configuration of one sheet composition run.

use image::Rgb;

use crate::constant::{
    CANVAS_HEIGHT_INCH, CANVAS_WIDTH_INCH, DEFAULT_BORDER, DEFAULT_DPI, DEFAULT_GAP,
};
use crate::domain::layout::{PhotoLayout, inch_to_px};

/// Everything the pipeline needs besides the input image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    /// Print resolution used for every cm/inch to pixel conversion.
    pub dpi: u32,
    /// Physical photo size preset.
    pub layout: PhotoLayout,
    /// Spacing between tiles (and from the top/left sheet edge) in pixels.
    pub gap: u32,
    /// Cutting-guide border width in pixels.
    pub border: u32,
    /// Cutting-guide border color.
    pub border_color: Rgb<u8>,
    /// Sheet background.
    pub background: Rgb<u8>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            layout: PhotoLayout::default(),
            gap: DEFAULT_GAP,
            border: DEFAULT_BORDER,
            border_color: Rgb([0xCC, 0xCC, 0xCC]),
            background: Rgb([255, 255, 255]),
        }
    }
}

impl SheetConfig {
    /// Sheet size in pixels (6x4 inches).
    #[must_use]
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            inch_to_px(CANVAS_WIDTH_INCH, self.dpi),
            inch_to_px(CANVAS_HEIGHT_INCH, self.dpi),
        )
    }

    /// Photo size in pixels, before the border.
    #[must_use]
    pub fn photo_size(&self) -> (u32, u32) {
        self.layout.size().to_pixels(self.dpi)
    }

    /// Width / height of the photo in pixels; the crop box is locked to it.
    #[must_use]
    pub fn photo_aspect(&self) -> f64 {
        let (w, h) = self.photo_size();
        f64::from(w) / f64::from(h.max(1))
    }

    /// Photo size plus border on every side.
    #[must_use]
    pub fn tile_size(&self) -> (u32, u32) {
        let (w, h) = self.photo_size();
        let pad = self.border.saturating_mul(2);
        (w.saturating_add(pad), h.saturating_add(pad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::DEFAULT_BORDER_COLOR;
    use crate::domain::color::parse_color;

    #[test]
    fn defaults_match_cli() {
        let config = SheetConfig::default();
        assert_eq!(config.border_color, parse_color(DEFAULT_BORDER_COLOR).unwrap());
        assert_eq!(config.canvas_size(), (6000, 4000));
        assert_eq!(config.photo_size(), (1102, 1378));
        assert_eq!(config.tile_size(), (1106, 1382));
    }

    #[test]
    fn aspect_follows_pixel_size() {
        let config = SheetConfig {
            layout: PhotoLayout::TwoInch,
            dpi: 300,
            ..SheetConfig::default()
        };
        assert!((config.photo_aspect() - 413.0 / 531.0).abs() < 1e-12);
    }
}
