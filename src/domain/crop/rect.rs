// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/rect.rs
//
// Crop box in display coordinates.

/// Crop rectangle in display (preview) coordinates.
///
/// Edges are kept as floats: scroll zoom changes the height by
/// `amount / aspect`, which is rarely a whole pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CropBox {
    /// Box of `width` x `height` centered on (`cx`, `cy`).
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x1: cx - width / 2.0,
            y1: cy - height / 2.0,
            x2: cx + width / 2.0,
            y2: cy + height / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Shift all four edges; size is unchanged.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x1 += dx;
        self.x2 += dx;
        self.y1 += dy;
        self.y2 += dy;
    }

    /// Grow (or shrink, for negative deltas) symmetrically about the center.
    pub fn grow(&mut self, dw: f64, dh: f64) {
        self.x1 -= dw / 2.0;
        self.x2 += dw / 2.0;
        self.y1 -= dh / 2.0;
        self.y2 += dh / 2.0;
    }
}
