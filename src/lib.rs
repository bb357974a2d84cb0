// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Photo sheet generator: crop one photo and tile it onto a 6x4 inch print.

pub mod app;
pub mod config;
pub mod constant;
pub mod document;
pub mod domain;
pub mod error;

#[cfg(feature = "gui")]
pub mod ui;

pub use config::SheetConfig;
pub use error::{SheetError, SheetResult};
