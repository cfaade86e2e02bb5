// SPDX-License-Identifier: MPL-2.0
//! Gesture profiles.
//!
//! The viewer ships two interaction variants that differ in their scale
//! floor, in when panning is allowed and in how the user dismisses the
//! image. Each variant is a [`GestureProfile`] value.

use crate::domain::transform::{ScaleBounds, Transform};

// =============================================================================
// Gesture Bounds
// =============================================================================

/// Thresholds shared by every profile.
pub mod gesture_bounds {
    /// Largest zoom factor.
    pub const MAX_SCALE: f32 = 3.0;
    /// Scale floor of the paged variant.
    pub const PAGED_MIN_SCALE: f32 = 0.5;
    /// Scale floor of the single-image variant.
    pub const SINGLE_MIN_SCALE: f32 = 0.7;
    /// A pinch released at or below this scale dismisses the viewer.
    pub const PINCH_DISMISS_SCALE: f32 = 0.7;
    /// Vertical drag distance that dismisses the single-image variant.
    pub const DRAG_DISMISS_DISTANCE: f32 = 130.0;
    /// Vertical drag distance at which the backdrop is fully transparent.
    pub const FADE_DISTANCE: f32 = 250.0;
}

// =============================================================================
// PanPolicy
// =============================================================================

/// When a one-finger drag moves the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPolicy {
    /// Only while zoomed in; at identity the drag belongs to the pager.
    WhenZoomed,
    /// Always, which enables drag-to-dismiss.
    Always,
}

// =============================================================================
// BackdropFade
// =============================================================================

/// How the backdrop behind the image reacts to gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropFade {
    /// Fades only while the image is shrunk below identity.
    ScaleOnly,
    /// Fades with vertical drag distance and while shrunk.
    DragAndScale,
}

// =============================================================================
// GestureProfile
// =============================================================================

/// Interaction parameters of one viewer variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureProfile {
    pub scale_bounds: ScaleBounds,
    pub pan: PanPolicy,
    /// Vertical drag that dismisses at identity scale, if any.
    pub drag_dismiss_distance: Option<f32>,
    pub pinch_dismiss_scale: f32,
    pub double_tap_resets: bool,
    pub backdrop_fade: BackdropFade,
}

impl GestureProfile {
    /// Multi-image pager: pan while zoomed, double tap resets, pinch to dismiss.
    #[must_use]
    pub fn paged() -> Self {
        Self {
            scale_bounds: ScaleBounds::new(
                gesture_bounds::PAGED_MIN_SCALE,
                gesture_bounds::MAX_SCALE,
            ),
            pan: PanPolicy::WhenZoomed,
            drag_dismiss_distance: None,
            pinch_dismiss_scale: gesture_bounds::PINCH_DISMISS_SCALE,
            double_tap_resets: true,
            backdrop_fade: BackdropFade::ScaleOnly,
        }
    }

    /// Single fixed image: drag or pinch to dismiss.
    #[must_use]
    pub fn single() -> Self {
        Self {
            scale_bounds: ScaleBounds::new(
                gesture_bounds::SINGLE_MIN_SCALE,
                gesture_bounds::MAX_SCALE,
            ),
            pan: PanPolicy::Always,
            drag_dismiss_distance: Some(gesture_bounds::DRAG_DISMISS_DISTANCE),
            pinch_dismiss_scale: gesture_bounds::PINCH_DISMISS_SCALE,
            double_tap_resets: false,
            backdrop_fade: BackdropFade::DragAndScale,
        }
    }

    /// Backdrop opacity in `[0, 1]` for a displayed transform.
    ///
    /// Shrinking below identity fades by scale. Otherwise the drag-and-scale
    /// fade follows the vertical offset, except while a pinch is tracked.
    #[must_use]
    pub fn backdrop_opacity(&self, transform: Transform, pinching: bool) -> f32 {
        let scale = transform.scale;
        if scale.is_zoomed_out() {
            return scale.value().clamp(0.0, 1.0);
        }
        match self.backdrop_fade {
            BackdropFade::DragAndScale if !pinching => {
                (1.0 - transform.offset.y.abs() / gesture_bounds::FADE_DISTANCE).max(0.0)
            }
            _ => 1.0,
        }
    }
}

// =============================================================================
// ViewerVariant
// =============================================================================

/// Which presentation the detail view uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerVariant {
    /// Single for one image, paged otherwise.
    #[default]
    Auto,
    Paged,
    Single,
}

impl ViewerVariant {
    /// Resolves `Auto` against the number of images.
    #[must_use]
    pub fn resolve(self, image_count: usize) -> Self {
        match self {
            Self::Auto if image_count <= 1 => Self::Single,
            Self::Auto => Self::Paged,
            other => other,
        }
    }

    /// Gesture profile for this variant (`Auto` resolves as paged).
    #[must_use]
    pub fn profile(self) -> GestureProfile {
        match self {
            Self::Single => GestureProfile::single(),
            Self::Auto | Self::Paged => GestureProfile::paged(),
        }
    }

    /// Parses the CLI / config spelling.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "paged" => Some(Self::Paged),
            "single" => Some(Self::Single),
            _ => None,
        }
    }
}
