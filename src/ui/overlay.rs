// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/overlay.rs
//
// Crop box overlay drawn over the preview; turns mouse and keys into crop events.

use iced::keyboard::{self, key::Named};
use iced::mouse::{self, Button, Cursor, ScrollDelta};
use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use super::message::AppMessage;
use crate::domain::crop::{CropBox, CropEvent, ScrollDirection};

const BOX_COLOR: Color = Color::from_rgb(1.0, 0.0, 0.0);
const BORDER_WIDTH: f32 = 2.0;
const GUIDE_WIDTH: f32 = 1.0;
const BORDER_DASH: [f32; 2] = [10.0, 10.0];
const GUIDE_DASH: [f32; 2] = [5.0, 5.0];

/// Which gesture the held mouse button drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    None,
    /// Left button: move the box.
    Move,
    /// Right button: resize by vertical motion.
    Resize,
}

/// Dashed crop box with center guides.
pub struct CropOverlay {
    crop_box: CropBox,
}

impl CropOverlay {
    pub fn new(crop_box: CropBox) -> Self {
        Self { crop_box }
    }
}

fn publish(event: CropEvent) -> Option<canvas::Action<AppMessage>> {
    Some(canvas::Action::publish(AppMessage::Crop(event)).and_capture())
}

/// Cursor position relative to `bounds`, even outside of them.
fn relative(cursor: Cursor, bounds: Rectangle) -> Option<(f64, f64)> {
    cursor
        .position()
        .map(|p| (f64::from(p.x - bounds.x), f64::from(p.y - bounds.y)))
}

/// Enter confirms, Escape cancels.
fn key_event(key: &keyboard::Key) -> Option<CropEvent> {
    match key.as_ref() {
        keyboard::Key::Named(Named::Enter) => Some(CropEvent::Confirm),
        keyboard::Key::Named(Named::Escape) => Some(CropEvent::Close),
        _ => None,
    }
}

impl canvas::Program<AppMessage> for CropOverlay {
    type State = DragMode;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Option<canvas::Action<AppMessage>> {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(button)) => {
                let pos = cursor.position_in(bounds)?;
                *state = match button {
                    Button::Left => DragMode::Move,
                    Button::Right => DragMode::Resize,
                    _ => return None,
                };
                publish(CropEvent::Press {
                    x: f64::from(pos.x),
                    y: f64::from(pos.y),
                })
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let (x, y) = relative(cursor, bounds)?;
                match state {
                    DragMode::Move => publish(CropEvent::Drag { x, y }),
                    DragMode::Resize => publish(CropEvent::ResizeDrag { x, y }),
                    DragMode::None => None,
                }
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(Button::Left | Button::Right)) => {
                if *state == DragMode::None {
                    return None;
                }
                *state = DragMode::None;
                Some(canvas::Action::capture())
            }
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                let dy = match delta {
                    ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => *y,
                };
                publish(CropEvent::Scroll(ScrollDirection::from_delta(dy)))
            }
            canvas::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                key_event(key).and_then(publish)
            }
            _ => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let b = self.crop_box;
        let (x1, y1) = (b.x1 as f32, b.y1 as f32);
        let (x2, y2) = (b.x2 as f32, b.y2 as f32);
        let (cx, cy) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);

        let border = Stroke {
            line_dash: LineDash {
                segments: &BORDER_DASH,
                offset: 0,
            },
            ..Stroke::default().with_color(BOX_COLOR).with_width(BORDER_WIDTH)
        };
        frame.stroke(
            &Path::rectangle(Point::new(x1, y1), Size::new(x2 - x1, y2 - y1)),
            border,
        );

        let guide = Stroke {
            line_dash: LineDash {
                segments: &GUIDE_DASH,
                offset: 0,
            },
            ..Stroke::default().with_color(BOX_COLOR).with_width(GUIDE_WIDTH)
        };
        frame.stroke(&Path::line(Point::new(x1, cy), Point::new(x2, cy)), guide);
        frame.stroke(&Path::line(Point::new(cx, y1), Point::new(cx, y2)), guide);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        match state {
            DragMode::Move => mouse::Interaction::Grabbing,
            DragMode::Resize => mouse::Interaction::ResizingVertically,
            DragMode::None if cursor.is_over(bounds) => mouse::Interaction::Move,
            DragMode::None => mouse::Interaction::default(),
        }
    }
}
