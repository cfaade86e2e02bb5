// SPDX-License-Identifier: MPL-2.0
//! Shared-element transition between a thumbnail and the full-screen image.

use crate::domain::transform::{fit_extent, Extent, Transform};
use crate::ui::animation::{Easing, FrameTween, Tween};
use iced::{Point, Rectangle, Size};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Thumbnail grows into the viewer.
    Expand,
    /// Viewer shrinks back onto the thumbnail.
    Collapse,
}

/// Running hero transition: the image frame and backdrop opacity over time.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    direction: Direction,
    frame: FrameTween,
    backdrop: Tween<f32>,
}

impl Hero {
    #[must_use]
    pub fn expand(from: Rectangle, to: Rectangle, duration: Duration, now: Instant) -> Self {
        Self {
            direction: Direction::Expand,
            frame: Tween::new(from, to, duration, Easing::EaseInOut, now),
            backdrop: Tween::new(0.0, 1.0, duration, Easing::EaseOut, now),
        }
    }

    /// Collapses from the currently displayed frame, fading the backdrop out
    /// from its current opacity.
    #[must_use]
    pub fn collapse(
        from: Rectangle,
        to: Rectangle,
        from_opacity: f32,
        duration: Duration,
        now: Instant,
    ) -> Self {
        Self {
            direction: Direction::Collapse,
            frame: Tween::new(from, to, duration, Easing::EaseInOut, now),
            backdrop: Tween::new(from_opacity.clamp(0.0, 1.0), 0.0, duration, Easing::EaseOut, now),
        }
    }

    /// Moves the landing frame of an expand, e.g. once the natural size of
    /// the image is known. Collapses keep their thumbnail target.
    pub fn retarget_expand(&mut self, to: Rectangle) {
        if self.direction == Direction::Expand {
            self.frame.retarget(to);
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn frame(&self, now: Instant) -> Rectangle {
        self.frame.sample(now)
    }

    #[must_use]
    pub fn backdrop(&self, now: Instant) -> f32 {
        self.backdrop.sample(now).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.frame.is_complete(now) && self.backdrop.is_complete(now)
    }
}

/// Frame of an image fitted ("contain") and centered in `container`.
#[must_use]
pub fn fitted_frame(container: Size, image: Extent) -> Rectangle {
    let fitted = fit_extent(image, Extent::new(container.width, container.height));
    Rectangle {
        x: (container.width - fitted.width) / 2.0,
        y: (container.height - fitted.height) / 2.0,
        width: fitted.width,
        height: fitted.height,
    }
}

/// Frame of a fitted image after applying `transform` and a horizontal shift.
///
/// Scaling is about the container center, offsets are in container units.
#[must_use]
pub fn transformed_frame(fitted: Rectangle, transform: Transform, shift_x: f32) -> Rectangle {
    let scale = transform.scale.value();
    let center = fitted.center();
    let width = fitted.width * scale;
    let height = fitted.height * scale;
    Rectangle::new(
        Point::new(
            center.x + transform.offset.x + shift_x - width / 2.0,
            center.y + transform.offset.y - height / 2.0,
        ),
        Size::new(width, height),
    )
}
