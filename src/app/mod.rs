// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Application flow: crop frontends and the sheet pipeline.

pub mod frontend;
pub mod pipeline;

pub use frontend::{CropFrontend, HeadlessFrontend, default_frontend};
pub use pipeline::{CropSource, SheetSummary, compose_sheet, create_photo_sheet};
