// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/app.rs
//
// iced application state for the crop window.

use std::sync::{Arc, Mutex};

use iced::widget::{canvas, image, stack};
use iced::{Element, Length, Task};

use super::message::AppMessage;
use super::overlay::CropOverlay;
use crate::domain::crop::{CropSession, SessionResult};

/// Slot the window writes its outcome into before exiting.
pub type OutcomeSlot = Arc<Mutex<Option<SessionResult>>>;

pub struct CropApp {
    session: CropSession,
    handle: image::Handle,
    outcome: OutcomeSlot,
}

impl CropApp {
    pub fn new(session: CropSession, outcome: OutcomeSlot) -> Self {
        let handle = create_image_handle(&session);
        Self {
            session,
            handle,
            outcome,
        }
    }

    pub fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        match message {
            AppMessage::Crop(event) => {
                if !self.session.handle(event) {
                    return Task::none();
                }
                if self.session.is_active() {
                    return Task::none();
                }
                let result = self.session.outcome();
                log::debug!("crop window finished: {result:?}");
                if let Ok(mut slot) = self.outcome.lock() {
                    *slot = Some(result);
                }
                iced::exit()
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn view(&self) -> Element<'_, AppMessage> {
        let (w, h) = self.session.preview_size();
        let (w, h) = (Length::Fixed(w as f32), Length::Fixed(h as f32));

        stack![
            image(self.handle.clone())
                .width(w)
                .height(h)
                .filter_method(image::FilterMethod::Linear),
            canvas(CropOverlay::new(self.session.crop_box()))
                .width(w)
                .height(h),
        ]
        .into()
    }
}

fn create_image_handle(session: &CropSession) -> image::Handle {
    let rgba = session.preview().to_rgba8();
    let (w, h) = rgba.dimensions();
    image::Handle::from_rgba(w, h, rgba.into_raw())
}
