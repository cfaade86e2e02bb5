// SPDX-License-Identifier: MPL-2.0
//! Transform newtypes.
//!
//! This module provides small value objects for 2D offsets, extents and
//! zoom scales. They are framework-independent; the UI layer converts
//! them from and to Iced geometry.

// =============================================================================
// Offset
// =============================================================================

/// Translation of the image relative to the centre of its container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    /// No translation.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns whether both components are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Linear interpolation between `self` and `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl std::ops::Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Offset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// =============================================================================
// Extent
// =============================================================================

/// Width and height of a container or of rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns true if either side is zero, negative or not a number.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Multiplies both sides by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

// =============================================================================
// Scale bounds
// =============================================================================

/// Inclusive range a [`Scale`] is clamped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min: f32,
    max: f32,
}

impl ScaleBounds {
    /// Creates scale bounds. Swapped arguments are reordered.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }
}

// =============================================================================
// Scale
// =============================================================================

/// Zoom factor of the displayed image (1.0 = fitted to the container).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    /// Identity scale.
    pub const IDENTITY: Self = Self(1.0);

    /// Tolerance used when comparing a scale against identity.
    pub const EPSILON: f32 = 0.01;

    /// Creates a scale clamped into `bounds`. Non-finite input maps to the
    /// identity scale clamped into `bounds`.
    #[must_use]
    pub fn clamped(value: f32, bounds: ScaleBounds) -> Self {
        let value = if value.is_finite() { value } else { 1.0 };
        Self(value.clamp(bounds.min(), bounds.max()))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is approximately 1.0.
    #[must_use]
    pub fn is_identity(self) -> bool {
        (self.0 - 1.0).abs() < Self::EPSILON
    }

    /// Returns whether the image is magnified beyond identity.
    #[must_use]
    pub fn is_zoomed_in(self) -> bool {
        self.0 > 1.0 + Self::EPSILON
    }

    /// Returns whether the image is shrunk below identity.
    #[must_use]
    pub fn is_zoomed_out(self) -> bool {
        self.0 < 1.0 - Self::EPSILON
    }

    /// Linear interpolation between two already-bounded scales.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self(self.0 + (other.0 - self.0) * t)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// Tests
// =============================================================================
