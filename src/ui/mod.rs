// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// Interactive crop window.

mod app;
mod message;
mod overlay;

use std::sync::{Arc, Mutex};

use app::{CropApp, OutcomeSlot};

use crate::app::frontend::CropFrontend;
use crate::constant::WINDOW_TITLE;
use crate::domain::crop::{CropSession, SessionResult};
use crate::error::{SheetError, SheetResult};

/// Opens a fixed-size window showing the preview with the crop box on top.
///
/// Closing the window any way other than Enter cancels the session.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowFrontend;

impl CropFrontend for WindowFrontend {
    #[allow(clippy::cast_precision_loss)]
    fn run(&mut self, session: CropSession) -> SheetResult<SessionResult> {
        let (w, h) = session.preview_size();
        log::info!("opening crop window ({w}x{h})");

        let outcome: OutcomeSlot = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&outcome);

        iced::application(
            move || CropApp::new(session.clone(), Arc::clone(&slot)),
            CropApp::update,
            CropApp::view,
        )
        .title(WINDOW_TITLE)
        .window_size((w as f32, h as f32))
        .resizable(false)
        .run()
        .map_err(|e| SheetError::Session(e.to_string()))?;

        let result = outcome
            .lock()
            .map_err(|_| SheetError::Session("crop window state poisoned".into()))?
            .take()
            .unwrap_or(SessionResult::Cancelled);
        Ok(result)
    }
}
