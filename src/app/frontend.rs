// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/frontend.rs
//
// Drivers that take a crop session to its end.

use crate::domain::crop::{CropEvent, CropSession, SessionResult};
use crate::error::SheetResult;

/// Runs a crop session until it is confirmed or cancelled.
///
/// Blocks the caller; the session and any window resources are gone when
/// `run` returns.
pub trait CropFrontend {
    fn run(&mut self, session: CropSession) -> SheetResult<SessionResult>;
}

impl<F> CropFrontend for F
where
    F: FnMut(CropSession) -> SheetResult<SessionResult>,
{
    fn run(&mut self, session: CropSession) -> SheetResult<SessionResult> {
        self(session)
    }
}

/// Frontend for builds without a window: every session ends cancelled.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessFrontend;

impl CropFrontend for HeadlessFrontend {
    fn run(&mut self, mut session: CropSession) -> SheetResult<SessionResult> {
        log::info!("no crop window available");
        session.handle(CropEvent::Close);
        Ok(session.outcome())
    }
}

/// The interactive window when built with the `gui` feature, otherwise headless.
#[cfg(feature = "gui")]
pub fn default_frontend() -> Box<dyn CropFrontend> {
    Box::new(crate::ui::WindowFrontend::default())
}

/// The interactive window when built with the `gui` feature, otherwise headless.
#[cfg(not(feature = "gui"))]
pub fn default_frontend() -> Box<dyn CropFrontend> {
    Box::new(HeadlessFrontend)
}
