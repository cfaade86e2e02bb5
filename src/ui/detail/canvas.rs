// SPDX-License-Identifier: MPL-2.0
//! Full-window canvas of the detail viewer.
//!
//! Draws the backdrop and the positioned page images, and forwards pointer,
//! wheel and touch input as canvas-local [`Input`] samples.

use super::recognizer::{Input, PIXELS_PER_LINE};
use super::Message;
use iced::widget::canvas;
use iced::widget::image;
use iced::{mouse, touch, Color, Point, Rectangle, Renderer, Theme};

/// One image placed on the canvas.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// `None` while the image is still decoding or failed to decode.
    pub handle: Option<image::Handle>,
    pub frame: Rectangle,
}

/// Canvas program rendering the viewer surface.
#[derive(Debug, Clone)]
pub struct DetailCanvas {
    pub backdrop: Color,
    pub placeholder: Color,
    pub sprites: Vec<Sprite>,
}

/// Whether the left button went down on the canvas.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pressed: bool,
}

impl canvas::Program<Message> for DetailCanvas {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let input = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.pressed = true;
                Input::Press(position)
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if state.pressed => {
                match cursor.position_in(bounds) {
                    Some(position) => Input::Move(position),
                    None => {
                        state.pressed = false;
                        Input::Cancel
                    }
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if state.pressed =>
            {
                state.pressed = false;
                cursor
                    .position_in(bounds)
                    .map_or(Input::Cancel, Input::Release)
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) if state.pressed => {
                state.pressed = false;
                Input::Cancel
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_LINE,
                };
                Input::Wheel(lines)
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => Input::FingerDown {
                id: id.0,
                position: local(*position, bounds),
            },
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => Input::FingerMove {
                id: id.0,
                position: local(*position, bounds),
            },
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => Input::FingerUp { id: id.0 },
            _ => return None,
        };

        Some(Action::publish(Message::Input(input)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if self.backdrop.a > 0.0 {
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.backdrop);
        }

        for sprite in &self.sprites {
            if sprite.frame.width <= 0.0 || sprite.frame.height <= 0.0 {
                continue;
            }
            match &sprite.handle {
                Some(handle) => {
                    frame.draw_image(sprite.frame, canvas::Image::new(handle.clone()));
                }
                None => {
                    frame.fill_rectangle(
                        sprite.frame.position(),
                        sprite.frame.size(),
                        self.placeholder,
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.pressed {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::default()
        }
    }
}

fn local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_positions_are_made_canvas_local() {
        let bounds = Rectangle::new(Point::new(10.0, 20.0), iced::Size::new(100.0, 100.0));
        assert_eq!(local(Point::new(15.0, 25.0), bounds), Point::new(5.0, 5.0));
    }
}
