// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure image and geometry logic, free of I/O and windowing.

pub mod color;
pub mod crop;
pub mod layout;
pub mod sheet;
pub mod tile;
