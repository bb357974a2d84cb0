// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/region.rs
//
// Crop region in source pixel coordinates.

/// Crop region in source-image pixel coordinates.
///
/// The origin is signed: a crop box dragged past the top/left edge of the
/// image yields a negative origin. Size is always unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from edge coordinates; inverted edges give an empty region.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_edges(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let width = (x2 - x1).clamp(0, i64::from(u32::MAX)) as u32;
        let height = (y2 - y1).clamp(0, i64::from(u32::MAX)) as u32;
        Self::new(x1, y1, width, height)
    }

    /// Edges as (x1, y1, x2, y2).
    pub fn edges(&self) -> (i64, i64, i64, i64) {
        (
            self.x,
            self.y,
            self.x + i64::from(self.width),
            self.y + i64::from(self.height),
        )
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether the region lies entirely inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let (x1, y1, x2, y2) = self.edges();
        x1 >= 0 && y1 >= 0 && x2 <= i64::from(width) && y2 <= i64::from(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_round_trip() {
        let region = CropRegion::from_edges(-10, 5, 90, 130);
        assert_eq!(region, CropRegion::new(-10, 5, 100, 125));
        assert_eq!(region.edges(), (-10, 5, 90, 130));
    }

    #[test]
    fn inverted_edges_are_empty() {
        let region = CropRegion::from_edges(50, 50, 40, 60);
        assert!(!region.is_valid());
    }

    #[test]
    fn bounds_check() {
        assert!(CropRegion::new(0, 0, 10, 10).fits_within(10, 10));
        assert!(!CropRegion::new(-1, 0, 10, 10).fits_within(20, 20));
        assert!(!CropRegion::new(5, 5, 10, 10).fits_within(14, 20));
    }
}
