// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/message.rs
//
// Crop window messages.

use crate::domain::crop::CropEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMessage {
    /// Pointer, wheel or keyboard input for the crop session.
    Crop(CropEvent),
}
