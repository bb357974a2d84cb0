// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Centimeters per inch (photo preset conversion).
pub const CM_PER_INCH: f64 = 2.54;

/// Print sheet width in inches (landscape 6x4).
pub const CANVAS_WIDTH_INCH: u32 = 6;

/// Print sheet height in inches.
pub const CANVAS_HEIGHT_INCH: u32 = 4;

/// Maximum preview width in display pixels.
pub const PREVIEW_MAX_WIDTH: u32 = 900;

/// Maximum preview height in display pixels.
pub const PREVIEW_MAX_HEIGHT: u32 = 900;

/// Initial crop box height as a fraction of the preview height.
pub const INITIAL_BOX_HEIGHT_RATIO: f64 = 0.5;

/// Shrinking stops once the crop box is narrower than this (display pixels).
pub const MIN_CROP_WIDTH: f64 = 50.0;

/// Growing stops once the crop box spans this many previews in either direction.
pub const MAX_CROP_PREVIEW_FACTOR: f64 = 3.0;

/// Zoom amount applied per scroll wheel notch.
pub const SCROLL_ZOOM_STEP: f64 = 10.0;

/// Working copy size relative to the source (room to drag past the edges).
pub const WORKING_EXPAND_FACTOR: f64 = 1.5;

/// Source inset inside the working copy, relative to the source size.
pub const WORKING_INSET_FACTOR: f64 = 0.25;

/// JPEG quality for the printed sheet.
pub const JPEG_QUALITY: u8 = 100;

/// Default print resolution.
pub const DEFAULT_DPI: u32 = 1000;

/// Default spacing between tiles in pixels.
pub const DEFAULT_GAP: u32 = 0;

/// Default cutting-guide border width in pixels.
pub const DEFAULT_BORDER: u32 = 2;

/// Default cutting-guide border color.
pub const DEFAULT_BORDER_COLOR: &str = "#CCCCCC";

/// Crop window title.
pub const WINDOW_TITLE: &str =
    "Crop Photo: Left-Click to Move, Right-Click/Scroll to Resize, ENTER to Confirm";
