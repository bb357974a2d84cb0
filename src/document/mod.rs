// SPDX-License-Identifier: GPL-3.0-or-later
// src/document/mod.rs
//
// Document I/O: reading the source photo and writing the print sheet.

pub mod export;
pub mod orientation;
pub mod raster;

pub use export::{encode_sheet, output_format, save_sheet};
pub use orientation::Orientation;
pub use raster::RasterDocument;
