// SPDX-License-Identifier: MPL-2.0
//! Time-based tweens for settle, paging and hero transitions.
//!
//! Tweens never read the clock themselves: callers pass the `Instant` of the
//! current frame, which keeps sampling deterministic and lets every running
//! animation in a frame agree on the same time.

use crate::domain::transform::{Offset, Transform};
use iced::Rectangle;
use std::time::{Duration, Instant};

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic deceleration.
    #[default]
    EaseOut,
    /// Cubic acceleration then deceleration.
    EaseInOut,
    /// Slight overshoot before settling, used as a spring.
    EaseOutBack,
}

impl Easing {
    /// Maps `t` (clamped to `[0, 1]`) through the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutBack => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
        }
    }
}

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    #[must_use]
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Offset {
    fn lerp(self, to: Self, t: f32) -> Self {
        Offset::lerp(self, to, t)
    }
}

impl Lerp for Transform {
    fn lerp(self, to: Self, t: f32) -> Self {
        Transform::lerp(self, to, t)
    }
}

impl Lerp for Rectangle {
    fn lerp(self, to: Self, t: f32) -> Self {
        Rectangle {
            x: Lerp::lerp(self.x, to.x, t),
            y: Lerp::lerp(self.y, to.y, t),
            width: Lerp::lerp(self.width, to.width, t),
            height: Lerp::lerp(self.height, to.height, t),
        }
    }
}

/// Eased interpolation between two values over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

pub type TransformTween = Tween<Transform>;
pub type FrameTween = Tween<Rectangle>;

impl<T: Lerp> Tween<T> {
    #[must_use]
    pub fn new(from: T, to: T, duration: Duration, easing: Easing, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
            easing,
        }
    }

    #[must_use]
    pub fn origin(&self) -> T {
        self.from
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    /// Replaces the target, keeping the start time and easing.
    pub fn retarget(&mut self, to: T) {
        self.to = to;
    }

    /// Linear progress in `[0, 1]`; a zero duration is immediately complete.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Value at `now`; exactly the target once complete.
    #[must_use]
    pub fn sample(&self, now: Instant) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(progress))
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transform::{Scale, ScaleBounds};
    use crate::test_utils::assert_abs_diff_eq;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn easing_curves_hit_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutBack,
        ] {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn ease_out_is_ahead_of_linear() {
        assert!(Easing::EaseOut.apply(0.3) > 0.3);
    }

    #[test]
    fn ease_out_back_overshoots() {
        assert!(Easing::EaseOutBack.apply(0.8) > 1.0);
    }

    #[test]
    fn tween_reaches_target_exactly() {
        let now = Instant::now();
        let tween = Tween::new(0.0_f32, 10.0, MS_100, Easing::EaseOut, now);

        assert_abs_diff_eq!(tween.sample(now), 0.0);
        assert!(!tween.is_complete(now + Duration::from_millis(50)));
        assert_eq!(tween.sample(now + MS_100), 10.0);
        assert!(tween.is_complete(now + MS_100));
    }

    #[test]
    fn linear_tween_midpoint() {
        let now = Instant::now();
        let tween = Tween::new(2.0_f32, 4.0, MS_100, Easing::Linear, now);
        assert_abs_diff_eq!(
            tween.sample(now + Duration::from_millis(50)),
            3.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        let now = Instant::now();
        let tween = Tween::new(1.0_f32, 5.0, Duration::ZERO, Easing::EaseOut, now);
        assert!(tween.is_complete(now));
        assert_eq!(tween.sample(now), 5.0);
    }

    #[test]
    fn sampling_before_start_returns_origin() {
        let later = Instant::now() + MS_100;
        let tween = Tween::new(1.0_f32, 5.0, MS_100, Easing::Linear, later);
        assert_abs_diff_eq!(tween.sample(later - Duration::from_millis(10)), 1.0);
    }

    #[test]
    fn transform_tween_interpolates_offset_and_scale() {
        let now = Instant::now();
        let from = Transform {
            offset: Offset::new(100.0, -40.0),
            scale: Scale::clamped(2.0, ScaleBounds::new(0.5, 3.0)),
        };
        let tween: TransformTween =
            Tween::new(from, Transform::IDENTITY, MS_100, Easing::Linear, now);

        let mid = tween.sample(now + Duration::from_millis(50));
        assert_abs_diff_eq!(mid.offset.x, 50.0, epsilon = 1e-3);
        assert_abs_diff_eq!(mid.offset.y, -20.0, epsilon = 1e-3);
        assert_abs_diff_eq!(mid.scale.value(), 1.5, epsilon = 1e-3);
        assert_eq!(tween.sample(now + MS_100), Transform::IDENTITY);
    }

    #[test]
    fn frame_tween_moves_rectangle() {
        let now = Instant::now();
        let from = Rectangle::new(iced::Point::new(10.0, 10.0), iced::Size::new(50.0, 50.0));
        let to = Rectangle::new(iced::Point::ORIGIN, iced::Size::new(300.0, 200.0));
        let tween: FrameTween = Tween::new(from, to, MS_100, Easing::EaseInOut, now);

        assert_eq!(tween.sample(now), from);
        assert_eq!(tween.sample(now + Duration::from_millis(150)), to);
    }
}
