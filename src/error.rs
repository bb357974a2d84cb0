// SPDX-License-Identifier: GPL-3.0-or-later
// src/error.rs
//
// Error type shared by the sheet pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of a sheet run.
///
/// A cancelled crop session is not an error; it is reported as
/// `SessionResult::Cancelled` and handled with the centered fallback crop.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to decode '{}': {source}", path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unsupported output format for '{}'", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to encode '{}': {source}", path.display())]
    EncodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write '{}': {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid color '{0}' (expected #RGB, #RRGGBB or a color name)")]
    InvalidColor(String),

    #[error("invalid aspect ratio {0} (must be a positive number)")]
    InvalidAspectRatio(f64),

    #[error("crop window failed: {0}")]
    Session(String),
}

pub type SheetResult<T> = Result<T, SheetError>;
