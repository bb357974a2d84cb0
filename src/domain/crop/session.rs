// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/session.rs
//
// Aspect-locked crop session: preview, crop box and the event state machine.

use image::{DynamicImage, GenericImageView, imageops::FilterType};

use super::{CropBox, CropRegion, DisplayTransform};
use crate::constant::{
    INITIAL_BOX_HEIGHT_RATIO, MAX_CROP_PREVIEW_FACTOR, MIN_CROP_WIDTH, PREVIEW_MAX_HEIGHT,
    PREVIEW_MAX_WIDTH, SCROLL_ZOOM_STEP,
};
use crate::error::{SheetError, SheetResult};

/// Discrete scroll wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Wheel up / away from the user: grow.
    Up,
    /// Wheel down / toward the user: shrink.
    Down,
}

impl ScrollDirection {
    /// Classify a raw platform wheel delta. Only negative deltas shrink.
    pub fn from_delta(delta: f32) -> Self {
        if delta < 0.0 { Self::Down } else { Self::Up }
    }

    fn zoom_amount(self) -> f64 {
        match self {
            Self::Up => SCROLL_ZOOM_STEP,
            Self::Down => -SCROLL_ZOOM_STEP,
        }
    }
}

/// Input to the crop session, in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CropEvent {
    /// A button went down: remember the pointer for the next drag.
    Press { x: f64, y: f64 },
    /// Move-drag: translate the box by the pointer delta.
    Drag { x: f64, y: f64 },
    /// Resize-drag: the vertical pointer delta becomes a zoom amount.
    ResizeDrag { x: f64, y: f64 },
    Scroll(ScrollDirection),
    /// Grow (positive) or shrink (negative) the box width by `amount`.
    Zoom(f64),
    Confirm,
    Close,
}

/// Session lifecycle. Both non-active states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Confirmed(CropRegion),
    Cancelled,
}

/// Final outcome of a crop session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    /// Region in source coordinates.
    Confirmed(CropRegion),
    Cancelled,
}

/// Interactive crop state for one image.
#[derive(Debug, Clone)]
pub struct CropSession {
    preview: DynamicImage,
    transform: DisplayTransform,
    aspect_ratio: f64,
    crop_box: CropBox,
    last_pointer: (f64, f64),
    state: SessionState,
}

impl CropSession {
    /// Start a session with the default 900x900 preview bounds.
    pub fn new(image: &DynamicImage, aspect_ratio: f64) -> SheetResult<Self> {
        Self::with_bounds(image, aspect_ratio, PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT)
    }

    /// Start a session whose preview fits in `max_width` x `max_height`.
    pub fn with_bounds(
        image: &DynamicImage,
        aspect_ratio: f64,
        max_width: u32,
        max_height: u32,
    ) -> SheetResult<Self> {
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(SheetError::InvalidAspectRatio(aspect_ratio));
        }

        let (width, height) = image.dimensions();
        let transform = DisplayTransform::fit(width, height, max_width, max_height);
        let (display_w, display_h) = transform.display_size(width, height);

        let preview = if (display_w, display_h) == (width, height) {
            image.clone()
        } else {
            image.resize_exact(display_w, display_h, FilterType::Lanczos3)
        };

        let box_h = f64::from(display_h) * INITIAL_BOX_HEIGHT_RATIO;
        let box_w = box_h * aspect_ratio;
        let crop_box = CropBox::centered(
            f64::from(display_w) / 2.0,
            f64::from(display_h) / 2.0,
            box_w,
            box_h,
        );

        log::debug!(
            "crop session: source {width}x{height}, preview {display_w}x{display_h}, scale {:.4}, aspect {aspect_ratio:.4}",
            transform.scale()
        );

        Ok(Self {
            preview,
            transform,
            aspect_ratio,
            crop_box,
            last_pointer: (0.0, 0.0),
            state: SessionState::Active,
        })
    }

    pub fn preview(&self) -> &DynamicImage {
        &self.preview
    }

    pub fn preview_size(&self) -> (u32, u32) {
        self.preview.dimensions()
    }

    pub fn transform(&self) -> DisplayTransform {
        self.transform
    }

    pub fn crop_box(&self) -> CropBox {
        self.crop_box
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Apply one event. Returns `true` when the session changed and needs a redraw.
    ///
    /// Events after a terminal state are ignored.
    pub fn handle(&mut self, event: CropEvent) -> bool {
        if !self.is_active() {
            log::debug!("ignoring {event:?} after session ended");
            return false;
        }

        match event {
            CropEvent::Press { x, y } => {
                self.last_pointer = (x, y);
                false
            }
            CropEvent::Drag { x, y } => {
                let (last_x, last_y) = self.last_pointer;
                self.crop_box.translate(x - last_x, y - last_y);
                self.last_pointer = (x, y);
                true
            }
            CropEvent::ResizeDrag { x, y } => {
                let dy = y - self.last_pointer.1;
                self.last_pointer = (x, y);
                self.zoom(dy)
            }
            CropEvent::Scroll(direction) => self.zoom(direction.zoom_amount()),
            CropEvent::Zoom(amount) => self.zoom(amount),
            CropEvent::Confirm => {
                let region = self.transform.box_to_source(&self.crop_box);
                log::debug!("crop confirmed: {:?} -> {region:?}", self.crop_box);
                self.state = SessionState::Confirmed(region);
                true
            }
            CropEvent::Close => {
                log::debug!("crop session closed without confirmation");
                self.state = SessionState::Cancelled;
                true
            }
        }
    }

    /// Feed a sequence of events; stops early once the session ends.
    pub fn replay<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = CropEvent>,
    {
        for event in events {
            self.handle(event);
            if !self.is_active() {
                break;
            }
        }
    }

    /// Outcome so far; a session that never reached a terminal state is cancelled.
    pub fn outcome(&self) -> SessionResult {
        match self.state {
            SessionState::Confirmed(region) => SessionResult::Confirmed(region),
            SessionState::Active | SessionState::Cancelled => SessionResult::Cancelled,
        }
    }

    /// Grow or shrink the box around its center, keeping the aspect ratio.
    ///
    /// A shrink that would collapse the box stops at `MIN_CROP_WIDTH`; growth
    /// stops at `MAX_CROP_PREVIEW_FACTOR` previews in either direction.
    fn zoom(&mut self, amount: f64) -> bool {
        let width = self.crop_box.width();
        let height = self.crop_box.height();

        let amount = if amount < 0.0 {
            if width < MIN_CROP_WIDTH {
                return false;
            }
            if width + amount <= 0.0 {
                MIN_CROP_WIDTH - width
            } else {
                amount
            }
        } else {
            let (preview_w, preview_h) = self.preview_size();
            let max_w = f64::from(preview_w) * MAX_CROP_PREVIEW_FACTOR;
            let max_h = f64::from(preview_h) * MAX_CROP_PREVIEW_FACTOR;
            let room = (max_w - width).min((max_h - height) * self.aspect_ratio);
            if room <= 0.0 {
                return false;
            }
            amount.min(room)
        };

        self.crop_box.grow(amount, amount / self.aspect_ratio);
        true
    }
}
