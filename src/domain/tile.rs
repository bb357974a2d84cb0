// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/tile.rs
//
// Tile preparation: working copy, crop, fit, resize and cutting border.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage, imageops};

use super::crop::CropRegion;
use crate::constant::{WORKING_EXPAND_FACTOR, WORKING_INSET_FACTOR};

/// One finished photo, border included, ready to be repeated on the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    image: RgbImage,
}

impl Tile {
    /// Resize `photo` to `width` x `height` and add the cutting border.
    pub fn from_photo(
        photo: &RgbImage,
        width: u32,
        height: u32,
        border: u32,
        border_color: Rgb<u8>,
    ) -> Self {
        let resized = if photo.dimensions() == (width, height) {
            photo.clone()
        } else {
            imageops::resize(photo, width, height, FilterType::Lanczos3)
        };
        Self {
            image: add_border(&resized, border, border_color),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Paste `source` onto a larger `background` canvas so the crop box can be
/// dragged past the photo's edges.
///
/// The canvas is 1.5x the source, with the source inset by 25% of its size.
/// Transparent areas of the source end up as `background`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn working_copy(source: &DynamicImage, background: Rgb<u8>) -> DynamicImage {
    let (width, height) = source.dimensions();
    let canvas_w = (f64::from(width) * WORKING_EXPAND_FACTOR) as u32;
    let canvas_h = (f64::from(height) * WORKING_EXPAND_FACTOR) as u32;
    let inset_x = (f64::from(width) * WORKING_INSET_FACTOR) as i64;
    let inset_y = (f64::from(height) * WORKING_INSET_FACTOR) as i64;

    if !source.color().has_alpha() {
        let mut canvas = RgbImage::from_pixel(canvas_w, canvas_h, background);
        imageops::replace(&mut canvas, &source.to_rgb8(), inset_x, inset_y);
        return DynamicImage::ImageRgb8(canvas);
    }

    let [r, g, b] = background.0;
    let mut canvas = RgbaImage::from_pixel(canvas_w, canvas_h, Rgba([r, g, b, 255]));
    imageops::overlay(&mut canvas, &source.to_rgba8(), inset_x, inset_y);
    DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).into_rgb8())
}

/// Cut `region` out of `image`. Area outside the image is filled with `fill`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn crop_region(image: &DynamicImage, region: CropRegion, fill: Rgb<u8>) -> RgbImage {
    let (width, height) = image.dimensions();
    let rgb = image.to_rgb8();

    if region.fits_within(width, height) {
        return imageops::crop_imm(
            &rgb,
            region.x as u32,
            region.y as u32,
            region.width,
            region.height,
        )
        .to_image();
    }

    log::debug!("crop {region:?} extends past the {width}x{height} image, filling outside");
    let mut out = RgbImage::from_pixel(region.width, region.height, fill);
    imageops::replace(&mut out, &rgb, -region.x, -region.y);
    out
}

/// Center-crop `source` to the `width`/`height` aspect ratio and resize.
///
/// Equivalent to fitting with centering (0.5, 0.5).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fit_center(source: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let (src_w, src_h) = source.dimensions();
    let target = f64::from(width) / f64::from(height.max(1));

    let wider = u64::from(src_w) * u64::from(height) > u64::from(width) * u64::from(src_h);
    let (crop_w, crop_h) = if wider {
        // Keep the full height.
        let w = (f64::from(src_h) * target).round() as u32;
        (w.clamp(1, src_w), src_h)
    } else {
        let h = (f64::from(src_w) / target).round() as u32;
        (src_w, h.clamp(1, src_h))
    };

    let x = (src_w - crop_w) / 2;
    let y = (src_h - crop_h) / 2;
    log::debug!("center crop {crop_w}x{crop_h} at ({x}, {y}) from {src_w}x{src_h}");

    let cropped = imageops::crop_imm(&source.to_rgb8(), x, y, crop_w, crop_h).to_image();
    imageops::resize(&cropped, width, height, FilterType::Lanczos3)
}

/// Pad `image` with a solid `border` px frame on all four sides.
pub fn add_border(image: &RgbImage, border: u32, color: Rgb<u8>) -> RgbImage {
    if border == 0 {
        return image.clone();
    }
    let (w, h) = image.dimensions();
    let pad = border.saturating_mul(2);
    let mut out = RgbImage::from_pixel(w.saturating_add(pad), h.saturating_add(pad), color);
    imageops::replace(&mut out, image, i64::from(border), i64::from(border));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    fn solid(w: u32, h: u32, color: Rgb<u8>) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, color))
    }

    #[test]
    fn working_copy_pads_with_inset() {
        let work = working_copy(&solid(100, 60, RED), WHITE).to_rgb8();
        assert_eq!(work.dimensions(), (150, 90));
        assert_eq!(*work.get_pixel(24, 14), WHITE);
        assert_eq!(*work.get_pixel(25, 15), RED);
        assert_eq!(*work.get_pixel(124, 74), RED);
        assert_eq!(*work.get_pixel(125, 75), WHITE);
    }

    #[test]
    fn working_copy_flattens_transparency() {
        let clear = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0])));
        let work = working_copy(&clear, WHITE).to_rgb8();
        assert!(work.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn crop_inside_bounds() {
        let mut img = RgbImage::from_pixel(10, 10, WHITE);
        img.put_pixel(3, 4, RED);
        let out = crop_region(&DynamicImage::ImageRgb8(img), CropRegion::new(3, 4, 2, 2), WHITE);
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(*out.get_pixel(0, 0), RED);
        assert_eq!(*out.get_pixel(1, 1), WHITE);
    }

    #[test]
    fn crop_outside_bounds_fills() {
        let img = solid(10, 10, RED);
        let black = Rgb([0, 0, 0]);
        let out = crop_region(&img, CropRegion::new(-2, -3, 6, 6), black);
        assert_eq!(out.dimensions(), (6, 6));
        assert_eq!(*out.get_pixel(1, 1), black);
        assert_eq!(*out.get_pixel(1, 4), black);
        assert_eq!(*out.get_pixel(2, 3), RED);
        assert_eq!(*out.get_pixel(5, 5), RED);
    }

    #[test]
    fn fit_center_trims_wide_source() {
        // 300x100 source, 1:1 target: keep the middle 100x100
        let mut src = RgbImage::from_pixel(300, 100, WHITE);
        for y in 0..100 {
            for x in 100..200 {
                src.put_pixel(x, y, RED);
            }
        }
        let out = fit_center(&DynamicImage::ImageRgb8(src), 50, 50);
        assert_eq!(out.dimensions(), (50, 50));
        assert!(out.pixels().all(|p| *p == RED));
    }

    #[test]
    fn fit_center_trims_tall_source() {
        let mut src = RgbImage::from_pixel(40, 200, WHITE);
        for y in 60..140 {
            for x in 0..40 {
                src.put_pixel(x, y, RED);
            }
        }
        // 1:2 target keeps 40x80 centered: rows 60..140
        let out = fit_center(&DynamicImage::ImageRgb8(src), 20, 40);
        assert_eq!(out.dimensions(), (20, 40));
        assert!(out.pixels().all(|p| *p == RED));
    }

    #[test]
    fn border_surrounds_photo() {
        let framed = add_border(&RgbImage::from_pixel(4, 3, RED), 2, WHITE);
        assert_eq!(framed.dimensions(), (8, 7));
        assert_eq!(*framed.get_pixel(1, 1), WHITE);
        assert_eq!(*framed.get_pixel(2, 2), RED);
        assert_eq!(*framed.get_pixel(5, 4), RED);
        assert_eq!(*framed.get_pixel(6, 5), WHITE);
    }

    #[test]
    fn tile_resizes_then_frames() {
        let tile = Tile::from_photo(&RgbImage::from_pixel(30, 40, RED), 11, 14, 2, WHITE);
        assert_eq!(tile.dimensions(), (15, 18));
    }
}
