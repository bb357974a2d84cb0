// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/layout.rs
//
// Physical photo size presets and cm/inch to pixel conversion.

use std::fmt;

use clap::ValueEnum;

use crate::constant::CM_PER_INCH;

/// Physical photo size in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoSize {
    pub width_cm: f64,
    pub height_cm: f64,
}

impl PhotoSize {
    /// Pixel dimensions of the photo at `dpi`.
    #[must_use]
    pub fn to_pixels(self, dpi: u32) -> (u32, u32) {
        (cm_to_px(self.width_cm, dpi), cm_to_px(self.height_cm, dpi))
    }
}

/// Named photo size presets (Taiwanese ID photo sizes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PhotoLayout {
    /// 2.8cm x 3.5cm
    #[default]
    #[value(name = "1inch")]
    OneInch,
    /// 3.5cm x 4.5cm
    #[value(name = "2inch")]
    TwoInch,
}

impl PhotoLayout {
    #[must_use]
    pub const fn size(self) -> PhotoSize {
        match self {
            Self::OneInch => PhotoSize {
                width_cm: 2.8,
                height_cm: 3.5,
            },
            Self::TwoInch => PhotoSize {
                width_cm: 3.5,
                height_cm: 4.5,
            },
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OneInch => "1inch",
            Self::TwoInch => "2inch",
        }
    }
}

impl fmt::Display for PhotoLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert a length in centimeters to whole pixels at `dpi`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cm_to_px(cm: f64, dpi: u32) -> u32 {
    (cm / CM_PER_INCH * f64::from(dpi)).round() as u32
}

/// Convert whole inches to pixels at `dpi`.
#[must_use]
pub fn inch_to_px(inches: u32, dpi: u32) -> u32 {
    inches.saturating_mul(dpi)
}
