// SPDX-License-Identifier: MPL-2.0
//! Pointer and touch disambiguation.
//!
//! Raw canvas input is folded into a small gesture vocabulary: one pointer
//! pans, two fingers pinch, short presses tap, and wheel notches become
//! discrete pinches. Translations and pinch factors are cumulative since the
//! gesture started, which is what the transform controller expects.

use crate::domain::transform::Offset;
use iced::Point;
use std::time::{Duration, Instant};

/// Movement below this distance keeps a press a tap.
pub const TAP_SLOP: f32 = 8.0;

/// Maximum delay between two taps of a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(350);

/// Maximum distance between two taps of a double tap.
pub const DOUBLE_TAP_DISTANCE: f32 = 32.0;

/// Zoom factor of one wheel line.
pub const WHEEL_STEP: f32 = 1.1;

/// Lines of a single wheel event beyond which the zoom is capped.
pub const MAX_WHEEL_LINES: f32 = 3.0;

/// Smallest zoom step of a wheel event, so touchpad deltas clear the
/// identity snap applied when a pinch ends.
pub const MIN_WHEEL_LINES: f32 = 0.25;

/// Pixel deltas (touchpads) are converted to lines with this ratio.
pub const PIXELS_PER_LINE: f32 = 50.0;

/// Canvas-local input forwarded by the detail canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Press(Point),
    Move(Point),
    Release(Point),
    /// The pointer left the surface mid-gesture.
    Cancel,
    FingerDown { id: u64, position: Point },
    FingerMove { id: u64, position: Point },
    FingerUp { id: u64 },
    /// Wheel delta in lines, positive away from the user.
    Wheel(f32),
}

/// Recognized gesture event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    PanStart,
    /// Translation since the pan started.
    PanMove(Offset),
    PanEnd {
        translation: Offset,
        elapsed: Duration,
    },
    /// A second finger turned the pan into a pinch.
    PanCancel,
    PinchStart,
    /// Scale factor since the pinch started.
    PinchMove(f32),
    PinchEnd,
    Tap(Point),
    DoubleTap(Point),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tracking {
    Idle,
    Pressed {
        origin: Point,
    },
    Panning {
        origin: Point,
        last: Point,
        started: Instant,
    },
    Pinching {
        initial_distance: f32,
    },
    /// Fingers left over after a pinch; ignored until all are lifted.
    Draining,
}

#[derive(Debug, Clone)]
pub struct Recognizer {
    tracking: Tracking,
    fingers: Vec<(u64, Point)>,
    last_tap: Option<(Instant, Point)>,
}

impl Default for Recognizer {
    fn default() -> Self {
        Self {
            tracking: Tracking::Idle,
            fingers: Vec::with_capacity(2),
            last_tap: None,
        }
    }
}

impl Recognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a press, pan or pinch is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking != Tracking::Idle
    }

    /// Drops any tracked gesture without emitting events.
    pub fn reset(&mut self) {
        self.tracking = Tracking::Idle;
        self.fingers.clear();
        self.last_tap = None;
    }

    /// Feeds one input sample and returns the gestures it completes.
    pub fn handle(&mut self, input: Input, now: Instant) -> Vec<Gesture> {
        match input {
            Input::Press(position) => self.press(position),
            Input::Move(position) => self.moved(position, now),
            Input::Release(position) => self.release(position, now),
            Input::Cancel => self.cancel(now),
            Input::FingerDown { id, position } => self.finger_down(id, position),
            Input::FingerMove { id, position } => self.finger_move(id, position, now),
            Input::FingerUp { id } => self.finger_up(id, now),
            Input::Wheel(lines) => self.wheel(lines),
        }
    }

    fn press(&mut self, position: Point) -> Vec<Gesture> {
        if self.tracking == Tracking::Idle && is_finite(position) {
            self.tracking = Tracking::Pressed { origin: position };
        }
        Vec::new()
    }

    fn moved(&mut self, position: Point, now: Instant) -> Vec<Gesture> {
        if !is_finite(position) {
            return Vec::new();
        }
        match self.tracking {
            Tracking::Pressed { origin } if origin.distance(position) > TAP_SLOP => {
                self.tracking = Tracking::Panning {
                    origin,
                    last: position,
                    started: now,
                };
                vec![Gesture::PanStart, Gesture::PanMove(translation(origin, position))]
            }
            Tracking::Panning {
                origin, started, ..
            } => {
                self.tracking = Tracking::Panning {
                    origin,
                    last: position,
                    started,
                };
                vec![Gesture::PanMove(translation(origin, position))]
            }
            _ => Vec::new(),
        }
    }

    fn release(&mut self, position: Point, now: Instant) -> Vec<Gesture> {
        let tracking = std::mem::replace(&mut self.tracking, Tracking::Idle);
        match tracking {
            Tracking::Pressed { .. } => vec![self.tap(position, now)],
            Tracking::Panning {
                origin,
                last,
                started,
            } => {
                let end = if is_finite(position) { position } else { last };
                vec![Gesture::PanEnd {
                    translation: translation(origin, end),
                    elapsed: now.saturating_duration_since(started),
                }]
            }
            other => {
                self.tracking = other;
                Vec::new()
            }
        }
    }

    fn cancel(&mut self, now: Instant) -> Vec<Gesture> {
        self.fingers.clear();
        match std::mem::replace(&mut self.tracking, Tracking::Idle) {
            Tracking::Panning {
                origin,
                last,
                started,
            } => vec![Gesture::PanEnd {
                translation: translation(origin, last),
                elapsed: now.saturating_duration_since(started),
            }],
            Tracking::Pinching { .. } => vec![Gesture::PinchEnd],
            _ => Vec::new(),
        }
    }

    fn tap(&mut self, position: Point, now: Instant) -> Gesture {
        let is_double = self.last_tap.is_some_and(|(at, previous)| {
            now.saturating_duration_since(at) <= DOUBLE_TAP_WINDOW
                && previous.distance(position) <= DOUBLE_TAP_DISTANCE
        });
        if is_double {
            self.last_tap = None;
            Gesture::DoubleTap(position)
        } else {
            self.last_tap = Some((now, position));
            Gesture::Tap(position)
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // TOUCH
    // ═══════════════════════════════════════════════════════════════════════

    fn finger_down(&mut self, id: u64, position: Point) -> Vec<Gesture> {
        if !is_finite(position) || self.fingers.iter().any(|(finger, _)| *finger == id) {
            return Vec::new();
        }
        self.fingers.push((id, position));

        match self.fingers.len() {
            1 => self.press(position),
            2 => {
                let mut gestures = Vec::new();
                match self.tracking {
                    Tracking::Panning { .. } => gestures.push(Gesture::PanCancel),
                    Tracking::Pressed { .. } | Tracking::Idle => {}
                    // Already pinching or draining: a new pair is not a new pinch.
                    _ => return gestures,
                }
                let initial_distance = self.finger_distance().max(1.0);
                self.tracking = Tracking::Pinching { initial_distance };
                gestures.push(Gesture::PinchStart);
                gestures
            }
            _ => Vec::new(),
        }
    }

    fn finger_move(&mut self, id: u64, position: Point, now: Instant) -> Vec<Gesture> {
        if !is_finite(position) {
            return Vec::new();
        }
        let Some(slot) = self.fingers.iter_mut().find(|(finger, _)| *finger == id) else {
            return Vec::new();
        };
        slot.1 = position;

        match self.tracking {
            Tracking::Pinching { initial_distance } if self.fingers.len() >= 2 => {
                vec![Gesture::PinchMove(self.finger_distance() / initial_distance)]
            }
            Tracking::Pressed { .. } | Tracking::Panning { .. } if self.fingers.len() == 1 => {
                self.moved(position, now)
            }
            _ => Vec::new(),
        }
    }

    fn finger_up(&mut self, id: u64, now: Instant) -> Vec<Gesture> {
        let Some(index) = self.fingers.iter().position(|(finger, _)| *finger == id) else {
            return Vec::new();
        };
        let (_, position) = self.fingers.remove(index);

        match self.tracking {
            Tracking::Pinching { .. } => {
                self.tracking = if self.fingers.is_empty() {
                    Tracking::Idle
                } else {
                    Tracking::Draining
                };
                vec![Gesture::PinchEnd]
            }
            Tracking::Draining => {
                if self.fingers.is_empty() {
                    self.tracking = Tracking::Idle;
                }
                Vec::new()
            }
            Tracking::Pressed { .. } | Tracking::Panning { .. } => self.release(position, now),
            Tracking::Idle => Vec::new(),
        }
    }

    fn finger_distance(&self) -> f32 {
        match self.fingers.as_slice() {
            [(_, a), (_, b), ..] => a.distance(*b),
            _ => 0.0,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // WHEEL
    // ═══════════════════════════════════════════════════════════════════════

    fn wheel(&mut self, lines: f32) -> Vec<Gesture> {
        if self.tracking != Tracking::Idle || !lines.is_finite() || lines == 0.0 {
            return Vec::new();
        }
        let lines = lines
            .abs()
            .clamp(MIN_WHEEL_LINES, MAX_WHEEL_LINES)
            .copysign(lines);
        vec![
            Gesture::PinchStart,
            Gesture::PinchMove(WHEEL_STEP.powf(lines)),
            Gesture::PinchEnd,
        ]
    }
}

fn translation(origin: Point, position: Point) -> Offset {
    Offset::new(position.x - origin.x, position.y - origin.y)
}

fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
