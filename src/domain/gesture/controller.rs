// SPDX-License-Identifier: MPL-2.0
//! Per-image gesture state machine.
//!
//! The controller owns the logical [`Transform`] of the visible image. Gesture
//! samples mutate it directly; releases snap it to its final value and report
//! the `from -> to` pair so the view can animate the change.
//!
//! ```text
//!            begin_pan                 begin_pinch
//!   Idle ─────────────────▶ Panning ───────────────▶ Pinching
//!    ▲  ◀──── end_pan ────────┘                         │
//!    └──────────────────── end_pinch ───────────────────┘
//!   (any release past a threshold, or dismiss()) ──▶ Dismissing
//! ```
//!
//! `Dismissing` is terminal until [`GestureController::reset`], so a dismiss
//! is reported at most once per appearance.

use super::profile::{GestureProfile, PanPolicy};
use crate::domain::transform::{clamp_offset, Extent, Offset, Scale, Transform};

/// Gesture phase of the visible image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Panning,
    Pinching,
    Dismissing,
}

/// Result of feeding a gesture event to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Nothing to animate; the transform may have changed in place.
    None,
    /// The transform jumped to `to`; animate from `from`.
    Settle { from: Transform, to: Transform },
    /// The viewer should be dismissed.
    Dismiss,
}

/// Container and content sizes captured when the image appears.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Geometry {
    container: Extent,
    content: Extent,
}

/// Gesture transform controller for the currently visible image.
#[derive(Debug, Clone)]
pub struct GestureController {
    profile: GestureProfile,
    geometry: Option<Geometry>,
    transform: Transform,
    phase: Phase,
    pan_start: Offset,
    pan_translation: Offset,
    pinch_start: Scale,
}

impl GestureController {
    #[must_use]
    pub fn new(profile: GestureProfile) -> Self {
        Self {
            profile,
            geometry: None,
            transform: Transform::IDENTITY,
            phase: Phase::Idle,
            pan_start: Offset::ZERO,
            pan_translation: Offset::ZERO,
            pinch_start: Scale::IDENTITY,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &GestureProfile {
        &self.profile
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        self.phase == Phase::Dismissing
    }

    /// Returns whether the image is magnified beyond identity.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.transform.scale.is_zoomed_in()
    }

    /// Records the container and fitted content sizes.
    ///
    /// Called once per appearance and again after a window resize; the
    /// current offset is re-clamped against the new geometry.
    pub fn set_geometry(&mut self, container: Extent, content: Extent) {
        self.geometry = Some(Geometry { container, content });
        if self.phase == Phase::Idle {
            self.transform.offset = self.clamped_offset(self.transform);
        }
    }

    /// Returns to identity and `Idle`, keeping the captured geometry.
    pub fn reset(&mut self) {
        self.transform = Transform::IDENTITY;
        self.phase = Phase::Idle;
        self.pan_start = Offset::ZERO;
        self.pan_translation = Offset::ZERO;
        self.pinch_start = Scale::IDENTITY;
    }

    /// Returns whether a one-finger drag currently moves the image.
    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        match self.profile.pan {
            PanPolicy::Always => true,
            PanPolicy::WhenZoomed => self.is_zoomed(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PAN
    // ═══════════════════════════════════════════════════════════════════════

    /// Starts a pan. Returns false if the drag does not belong to the image.
    pub fn begin_pan(&mut self) -> bool {
        if self.phase != Phase::Idle || !self.pan_enabled() {
            return false;
        }
        self.phase = Phase::Panning;
        self.pan_start = self.transform.offset;
        self.pan_translation = Offset::ZERO;
        true
    }

    /// Applies the cumulative translation since the pan started.
    ///
    /// Samples outside a pan or with non-finite components are dropped.
    pub fn update_pan(&mut self, translation: Offset) {
        if self.phase != Phase::Panning || !translation.is_finite() {
            return;
        }
        self.pan_translation = translation;
        self.transform.offset = self.pan_start + translation;
    }

    /// Ends a pan: dismisses on a long vertical drag at identity scale,
    /// otherwise clamps the offset back into bounds.
    pub fn end_pan(&mut self) -> Outcome {
        if self.phase != Phase::Panning {
            return Outcome::None;
        }
        self.phase = Phase::Idle;

        let past_threshold = self
            .profile
            .drag_dismiss_distance
            .is_some_and(|distance| self.pan_translation.y.abs() > distance);
        if past_threshold && self.transform.scale.is_identity() {
            self.phase = Phase::Dismissing;
            return Outcome::Dismiss;
        }

        self.settle_to(Transform {
            offset: self.clamped_offset(self.transform),
            scale: self.transform.scale,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PINCH
    // ═══════════════════════════════════════════════════════════════════════

    /// Starts a pinch. An active pan is abandoned without settling; the
    /// pinch release settles both.
    pub fn begin_pinch(&mut self) -> bool {
        if matches!(self.phase, Phase::Dismissing | Phase::Pinching) {
            return false;
        }
        self.phase = Phase::Pinching;
        self.pinch_start = self.transform.scale;
        true
    }

    /// Applies the cumulative scale factor since the pinch started.
    pub fn update_pinch(&mut self, factor: f32) {
        if self.phase != Phase::Pinching || !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.transform.scale =
            Scale::clamped(self.pinch_start.value() * factor, self.profile.scale_bounds);
    }

    /// Ends a pinch: dismisses at or below the dismiss scale, snaps back to
    /// identity below 1.0 or within [`Scale::EPSILON`] of it, otherwise keeps
    /// the scale and clamps the offset.
    ///
    /// A kept scale is always zoomed in, so pan is enabled and paging is not.
    pub fn end_pinch(&mut self) -> Outcome {
        if self.phase != Phase::Pinching {
            return Outcome::None;
        }
        self.phase = Phase::Idle;

        let scale = self.transform.scale;
        if scale.value() <= self.profile.pinch_dismiss_scale {
            self.phase = Phase::Dismissing;
            return Outcome::Dismiss;
        }
        if scale.value() < 1.0 || scale.is_identity() {
            return self.settle_to(Transform::IDENTITY);
        }
        self.settle_to(Transform {
            offset: self.clamped_offset(self.transform),
            scale: self.transform.scale,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // TAP / DISMISS
    // ═══════════════════════════════════════════════════════════════════════

    /// Double tap resets to identity when the profile allows it.
    pub fn double_tap(&mut self) -> Outcome {
        if !self.profile.double_tap_resets || self.phase != Phase::Idle {
            return Outcome::None;
        }
        if self.transform.is_identity() {
            return Outcome::None;
        }
        self.settle_to(Transform::IDENTITY)
    }

    /// Requests dismissal outside of a gesture (e.g. Escape).
    pub fn dismiss(&mut self) -> Outcome {
        if self.phase == Phase::Dismissing {
            return Outcome::None;
        }
        self.phase = Phase::Dismissing;
        Outcome::Dismiss
    }

    /// Re-applies bounds after an external change such as a resize.
    pub fn settle(&mut self) -> Outcome {
        if self.phase != Phase::Idle {
            return Outcome::None;
        }
        self.settle_to(Transform {
            offset: self.clamped_offset(self.transform),
            scale: self.transform.scale,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // BACKDROP
    // ═══════════════════════════════════════════════════════════════════════

    /// Opacity of the backdrop behind the image, in `[0, 1]`.
    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        self.profile
            .backdrop_opacity(self.transform, self.phase == Phase::Pinching)
    }

    fn settle_to(&mut self, target: Transform) -> Outcome {
        let from = self.transform;
        self.transform = target;
        if from == target {
            Outcome::None
        } else {
            Outcome::Settle { from, to: target }
        }
    }

    fn clamped_offset(&self, transform: Transform) -> Offset {
        match self.geometry {
            Some(geometry) => clamp_offset(
                transform.offset,
                transform.scale,
                geometry.content,
                geometry.container,
            ),
            // Without geometry nothing can overflow.
            None => Offset::ZERO,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gesture::GestureProfile;
    use crate::test_utils::assert_abs_diff_eq;

    fn square_controller(profile: GestureProfile) -> GestureController {
        let mut controller = GestureController::new(profile);
        let square = Extent::new(300.0, 300.0);
        controller.set_geometry(square, square);
        controller
    }

    fn pinch_to(controller: &mut GestureController, factor: f32) -> Outcome {
        assert!(controller.begin_pinch());
        controller.update_pinch(factor);
        controller.end_pinch()
    }

    #[test]
    fn starts_idle_at_identity() {
        let controller = GestureController::new(GestureProfile::paged());
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.transform().is_identity());
    }

    #[test]
    fn pinch_scale_is_clamped_to_profile_bounds() {
        for profile in [GestureProfile::paged(), GestureProfile::single()] {
            let floor = profile.scale_bounds.min();
            for factor in [0.01_f32, 0.3, 0.69, 1.0, 2.5, 3.0, 10.0, 1000.0] {
                let mut controller = square_controller(profile);
                controller.begin_pinch();
                controller.update_pinch(factor);
                let scale = controller.transform().scale.value();
                assert!(scale >= floor && scale <= 3.0, "scale {scale} out of range");
            }
        }
    }

    #[test]
    fn pinch_multiplies_the_scale_at_gesture_start() {
        let mut controller = square_controller(GestureProfile::paged());
        pinch_to(&mut controller, 2.0);
        controller.begin_pinch();
        controller.update_pinch(1.25);
        assert_abs_diff_eq!(controller.transform().scale.value(), 2.5);
    }

    #[test]
    fn pinch_release_at_or_below_dismiss_scale_dismisses_once() {
        for factor in [0.2_f32, 0.5, 0.6, 0.7] {
            for profile in [GestureProfile::paged(), GestureProfile::single()] {
                let mut controller = square_controller(profile);
                let outcome = pinch_to(&mut controller, factor);
                assert_eq!(outcome, Outcome::Dismiss);
                assert!(controller.is_dismissing());

                // Nothing after the first dismiss can report another one.
                assert!(!controller.begin_pinch());
                assert_eq!(controller.end_pinch(), Outcome::None);
                assert_eq!(controller.dismiss(), Outcome::None);
                assert!(!controller.begin_pan());
            }
        }
    }

    #[test]
    fn pinch_release_between_dismiss_and_identity_snaps_back() {
        for factor in [0.71_f32, 0.8, 0.95, 0.999] {
            let mut controller = square_controller(GestureProfile::paged());
            let outcome = pinch_to(&mut controller, factor);
            assert!(matches!(outcome, Outcome::Settle { to, .. } if to == Transform::IDENTITY));
            assert_eq!(controller.transform(), Transform::IDENTITY);
            assert_eq!(controller.phase(), Phase::Idle);
        }
    }

    #[test]
    fn pinch_release_just_above_identity_snaps_back() {
        for factor in [1.0_f32, 1.003, 1.008, 1.0099] {
            let mut controller = square_controller(GestureProfile::paged());
            assert!(controller.begin_pinch());
            controller.update_pinch(factor);
            controller.end_pinch();

            assert_eq!(controller.transform(), Transform::IDENTITY, "factor {factor}");
            assert_eq!(controller.phase(), Phase::Idle);
        }
    }

    #[test]
    fn any_scale_kept_after_pinch_is_pannable() {
        for factor in [1.011_f32, 1.02, 1.5, 3.0] {
            let mut controller = square_controller(GestureProfile::paged());
            pinch_to(&mut controller, factor);

            assert!(controller.is_zoomed(), "factor {factor}");
            assert!(controller.pan_enabled());
            assert!(controller.begin_pan());
        }
    }

    #[test]
    fn pinch_release_above_identity_keeps_scale_and_clamps_offset() {
        let mut controller = square_controller(GestureProfile::paged());
        pinch_to(&mut controller, 2.0);

        assert!(controller.begin_pan());
        controller.update_pan(Offset::new(200.0, 0.0));
        let outcome = controller.end_pan();
        assert!(matches!(outcome, Outcome::Settle { .. }));
        assert_eq!(controller.transform().offset, Offset::new(150.0, 0.0));

        // Zooming out to 1.5x shrinks the allowed travel to 75.
        controller.begin_pinch();
        controller.update_pinch(0.75);
        controller.end_pinch();
        assert_abs_diff_eq!(controller.transform().scale.value(), 1.5);
        assert_abs_diff_eq!(controller.transform().offset.x, 75.0);
    }

    #[test]
    fn pan_at_identity_clamps_back_to_centre() {
        let mut controller = square_controller(GestureProfile::single());
        assert!(controller.begin_pan());
        controller.update_pan(Offset::new(400.0, 0.0));
        assert_eq!(controller.transform().offset, Offset::new(400.0, 0.0));

        let outcome = controller.end_pan();
        assert_eq!(
            outcome,
            Outcome::Settle {
                from: Transform {
                    offset: Offset::new(400.0, 0.0),
                    scale: Scale::IDENTITY,
                },
                to: Transform::IDENTITY,
            }
        );
    }

    #[test]
    fn pan_is_ignored_at_identity_in_paged_variant() {
        let mut controller = square_controller(GestureProfile::paged());
        assert!(!controller.pan_enabled());
        assert!(!controller.begin_pan());
        controller.update_pan(Offset::new(50.0, 0.0));
        assert!(controller.transform().is_identity());
        assert_eq!(controller.end_pan(), Outcome::None);
    }

    #[test]
    fn vertical_drag_past_threshold_dismisses() {
        let mut controller = square_controller(GestureProfile::single());
        controller.begin_pan();
        controller.update_pan(Offset::new(0.0, 140.0));
        assert_eq!(controller.end_pan(), Outcome::Dismiss);
        assert!(controller.is_dismissing());
    }

    #[test]
    fn vertical_drag_below_threshold_springs_back() {
        let mut controller = square_controller(GestureProfile::single());
        controller.begin_pan();
        controller.update_pan(Offset::new(0.0, -120.0));
        let outcome = controller.end_pan();
        assert!(matches!(outcome, Outcome::Settle { to, .. } if to == Transform::IDENTITY));
        assert!(!controller.is_dismissing());
    }

    #[test]
    fn vertical_drag_while_zoomed_does_not_dismiss() {
        let mut controller = square_controller(GestureProfile::single());
        pinch_to(&mut controller, 2.0);
        controller.begin_pan();
        controller.update_pan(Offset::new(0.0, 200.0));
        let outcome = controller.end_pan();
        assert!(matches!(outcome, Outcome::Settle { .. }));
        assert_eq!(controller.transform().offset, Offset::new(0.0, 150.0));
    }

    #[test]
    fn pan_accumulates_from_offset_at_gesture_start() {
        let mut controller = square_controller(GestureProfile::paged());
        pinch_to(&mut controller, 3.0);
        controller.begin_pan();
        controller.update_pan(Offset::new(50.0, 10.0));
        controller.end_pan();
        controller.begin_pan();
        controller.update_pan(Offset::new(25.0, -5.0));
        assert_eq!(controller.transform().offset, Offset::new(75.0, 5.0));
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let mut controller = square_controller(GestureProfile::single());
        controller.begin_pan();
        controller.update_pan(Offset::new(f32::NAN, 3.0));
        assert_eq!(controller.transform().offset, Offset::ZERO);
        controller.end_pan();

        controller.begin_pinch();
        controller.update_pinch(f32::INFINITY);
        controller.update_pinch(-2.0);
        assert!(controller.transform().scale.is_identity());
    }

    #[test]
    fn double_tap_resets_only_when_profile_allows() {
        let mut paged = square_controller(GestureProfile::paged());
        pinch_to(&mut paged, 2.0);
        let outcome = paged.double_tap();
        assert!(matches!(outcome, Outcome::Settle { to, .. } if to == Transform::IDENTITY));

        let mut single = square_controller(GestureProfile::single());
        pinch_to(&mut single, 2.0);
        assert_eq!(single.double_tap(), Outcome::None);
        assert!(single.is_zoomed());
    }

    #[test]
    fn backdrop_fades_with_vertical_drag() {
        let mut controller = square_controller(GestureProfile::single());
        controller.begin_pan();
        controller.update_pan(Offset::new(0.0, 125.0));
        assert_abs_diff_eq!(controller.backdrop_opacity(), 0.5);
        controller.update_pan(Offset::new(0.0, -400.0));
        assert_abs_diff_eq!(controller.backdrop_opacity(), 0.0);
    }

    #[test]
    fn backdrop_follows_scale_below_identity() {
        let mut controller = square_controller(GestureProfile::paged());
        controller.begin_pinch();
        controller.update_pinch(0.8);
        assert_abs_diff_eq!(controller.backdrop_opacity(), 0.8);
    }

    #[test]
    fn paged_backdrop_ignores_drag_distance() {
        let mut controller = square_controller(GestureProfile::paged());
        pinch_to(&mut controller, 3.0);
        controller.begin_pan();
        controller.update_pan(Offset::new(0.0, 200.0));
        assert_abs_diff_eq!(controller.backdrop_opacity(), 1.0);
    }

    #[test]
    fn resize_reclamps_offset() {
        let mut controller = square_controller(GestureProfile::paged());
        pinch_to(&mut controller, 2.0);
        controller.begin_pan();
        controller.update_pan(Offset::new(150.0, 0.0));
        controller.end_pan();

        // A wider container leaves less overflow to pan across.
        controller.set_geometry(Extent::new(500.0, 300.0), Extent::new(300.0, 300.0));
        assert_abs_diff_eq!(controller.transform().offset.x, 50.0);
    }

    #[test]
    fn reset_returns_to_identity_and_idle() {
        let mut controller = square_controller(GestureProfile::single());
        controller.dismiss();
        controller.reset();
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.transform().is_identity());
        assert!(controller.begin_pan());
    }
}
