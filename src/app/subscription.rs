// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are routed according to the current
//! screen. Pointer and touch input reaches the detail viewer through its
//! canvas instead.

use super::{Message, Screen};
use crate::ui::detail;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Subscription};

/// Creates the event subscription for `screen`.
///
/// Resizes are always tracked. Escape and the horizontal arrow keys are only
/// forwarded while the detail viewer is open, and only when no widget
/// captured them.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Gallery => event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        }),
        Screen::Detail => event::listen_with(|event, status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
                if status == event::Status::Ignored =>
            {
                detail_key(&key).map(Message::Detail)
            }
            _ => None,
        }),
    }
}

/// Redraw ticks, only requested while something animates.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(|at| Message::Detail(detail::Message::Tick(at)))
    } else {
        Subscription::none()
    }
}

fn detail_key(key: &Key) -> Option<detail::Message> {
    match key {
        Key::Named(Named::Escape) => Some(detail::Message::Close),
        Key::Named(Named::ArrowRight) => Some(detail::Message::NextPage),
        Key::Named(Named::ArrowLeft) => Some(detail::Message::PreviousPage),
        _ => None,
    }
}
