// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/sheet.rs
//
// Grid placement of tiles on the print sheet.

use image::{Rgb, RgbImage, imageops};

use super::tile::Tile;
use crate::config::SheetConfig;

/// Top-left corner of one placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

/// A composed print sheet.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub canvas: RgbImage,
    pub placements: Vec<Placement>,
}

impl Sheet {
    pub fn count(&self) -> usize {
        self.placements.len()
    }
}

/// Lays copies of a tile out on a fixed-size canvas.
///
/// Row-major from (gap, gap). A tile is placed only while its far edge stays
/// strictly inside the canvas (`x + w < W`, `y + h < H`); partial tiles are
/// never drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetComposer {
    width: u32,
    height: u32,
    gap: u32,
    background: Rgb<u8>,
}

impl SheetComposer {
    pub fn new(width: u32, height: u32, gap: u32) -> Self {
        Self {
            width,
            height,
            gap,
            background: Rgb([255, 255, 255]),
        }
    }

    pub fn from_config(config: &SheetConfig) -> Self {
        let (width, height) = config.canvas_size();
        Self::new(width, height, config.gap).with_background(config.background)
    }

    #[must_use]
    pub fn with_background(mut self, background: Rgb<u8>) -> Self {
        self.background = background;
        self
    }

    /// Grid positions for a `tile_w` x `tile_h` tile.
    #[allow(clippy::cast_possible_truncation)]
    pub fn layout(&self, tile_w: u32, tile_h: u32) -> Vec<Placement> {
        if tile_w == 0 || tile_h == 0 {
            return Vec::new();
        }

        let (canvas_w, canvas_h) = (u64::from(self.width), u64::from(self.height));
        let (w, h, gap) = (u64::from(tile_w), u64::from(tile_h), u64::from(self.gap));

        let mut placements = Vec::new();
        let mut y = gap;
        while y + h < canvas_h {
            let mut x = gap;
            while x + w < canvas_w {
                // x < W and y < H, both fit in u32
                placements.push(Placement {
                    x: x as u32,
                    y: y as u32,
                });
                x += w + gap;
            }
            y += h + gap;
        }
        placements
    }

    /// Paste `tile` at every grid position on a fresh canvas.
    pub fn compose(&self, tile: &Tile) -> Sheet {
        let (tile_w, tile_h) = tile.dimensions();
        let placements = self.layout(tile_w, tile_h);

        if placements.is_empty() {
            log::warn!(
                "a {tile_w}x{tile_h} tile does not fit on the {}x{} sheet",
                self.width,
                self.height
            );
        } else {
            log::debug!(
                "placing {} tiles of {tile_w}x{tile_h} on {}x{}",
                placements.len(),
                self.width,
                self.height
            );
        }

        let mut canvas = RgbImage::from_pixel(self.width, self.height, self.background);
        for p in &placements {
            imageops::replace(&mut canvas, tile.image(), i64::from(p.x), i64::from(p.y));
        }

        Sheet { canvas, placements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(w: u32, h: u32) -> Tile {
        Tile::from_photo(&RgbImage::from_pixel(w, h, Rgb([0, 0, 255])), w, h, 0, Rgb([0, 0, 0]))
    }

    #[test]
    fn exact_multiple_leaves_last_row_and_column_empty() {
        // 500 + 100 == 600 is not < 600, so only 5 columns and 3 rows
        let placements = SheetComposer::new(600, 400, 0).layout(100, 100);
        assert_eq!(placements.len(), 15);
        let expected: Vec<Placement> = (0..3)
            .flat_map(|j| (0..5).map(move |i| Placement { x: 100 * i, y: 100 * j }))
            .collect();
        assert_eq!(placements, expected);
    }

    #[test]
    fn gap_offsets_and_strict_bounds() {
        let placements = SheetComposer::new(650, 430, 10).layout(100, 100);
        assert_eq!(placements.len(), 15);
        assert_eq!(placements[0], Placement { x: 10, y: 10 });
        assert_eq!(placements[4], Placement { x: 450, y: 10 });
        assert_eq!(placements[14], Placement { x: 450, y: 230 });
    }

    #[test]
    fn one_pixel_slack_admits_the_tile() {
        assert_eq!(SheetComposer::new(601, 401, 0).layout(100, 100).len(), 24);
    }

    #[test]
    fn oversized_tile_places_nothing() {
        assert!(SheetComposer::new(100, 100, 0).layout(100, 50).is_empty());
        assert!(SheetComposer::new(100, 100, 0).layout(0, 10).is_empty());
    }

    #[test]
    fn print_sheet_default_layout() {
        // 1inch @ 1000dpi with a 2px border: 1106x1382 tiles on 6000x4000
        let placements = SheetComposer::new(6000, 4000, 0).layout(1106, 1382);
        assert_eq!(placements.len(), 10);
        assert_eq!(placements[9], Placement { x: 4424, y: 1382 });
    }

    #[test]
    fn compose_pastes_tiles_on_background() {
        let sheet = SheetComposer::new(25, 12, 1).compose(&tile(5, 4));
        // columns at 1, 7, 13, 19; rows at 1 and 6
        assert_eq!(sheet.count(), 8);
        assert_eq!(*sheet.canvas.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*sheet.canvas.get_pixel(1, 1), Rgb([0, 0, 255]));
        assert_eq!(*sheet.canvas.get_pixel(6, 1), Rgb([255, 255, 255]));
        assert_eq!(*sheet.canvas.get_pixel(23, 9), Rgb([0, 0, 255]));
        assert_eq!(*sheet.canvas.get_pixel(24, 11), Rgb([255, 255, 255]));
    }

    #[test]
    fn layout_is_deterministic() {
        let composer = SheetComposer::new(6000, 4000, 7);
        assert_eq!(composer.layout(413, 531), composer.layout(413, 531));
    }
}
