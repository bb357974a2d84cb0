// SPDX-License-Identifier: GPL-3.0-or-later
// src/document/orientation.rs
//
// EXIF orientation handling for camera and phone photos.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::DynamicImage;

/// EXIF orientation tag values (1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    MirrorHorizontal,
    Rotate180,
    MirrorVertical,
    MirrorHorizontalAndRotate270CW,
    Rotate90CW,
    MirrorHorizontalAndRotate90CW,
    Rotate270CW,
}

impl Orientation {
    /// Map the raw tag value; unknown values are treated as upright.
    pub fn from_tag(value: u32) -> Self {
        match value {
            2 => Self::MirrorHorizontal,
            3 => Self::Rotate180,
            4 => Self::MirrorVertical,
            5 => Self::MirrorHorizontalAndRotate270CW,
            6 => Self::Rotate90CW,
            7 => Self::MirrorHorizontalAndRotate90CW,
            8 => Self::Rotate270CW,
            _ => Self::Normal,
        }
    }

    /// Read the orientation of the file at `path`.
    ///
    /// Files without (readable) EXIF data are upright.
    pub fn read(path: &Path) -> Self {
        let Ok(file) = File::open(path) else {
            return Self::Normal;
        };
        let exif = match Reader::new().read_from_container(&mut BufReader::new(&file)) {
            Ok(exif) => exif,
            Err(e) => {
                log::debug!("no EXIF data in {}: {e}", path.display());
                return Self::Normal;
            }
        };

        exif.get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map_or(Self::Normal, Self::from_tag)
    }

    /// Rotate/flip `image` so it displays upright.
    pub fn apply(self, image: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => image,
            Self::MirrorHorizontal => image.fliph(),
            Self::Rotate180 => image.rotate180(),
            Self::MirrorVertical => image.flipv(),
            Self::MirrorHorizontalAndRotate270CW => image.fliph().rotate270(),
            Self::Rotate90CW => image.rotate90(),
            Self::MirrorHorizontalAndRotate90CW => image.fliph().rotate90(),
            Self::Rotate270CW => image.rotate270(),
        }
    }
}
