// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Crop domain: display-space crop box, source-space region and the session.

mod rect;
mod region;
mod session;
mod transform;

pub use rect::CropBox;
pub use region::CropRegion;
pub use session::{CropEvent, CropSession, ScrollDirection, SessionResult, SessionState};
pub use transform::DisplayTransform;
