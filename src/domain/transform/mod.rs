// SPDX-License-Identifier: MPL-2.0
//! Image transform value objects.

pub mod bounds;
pub mod newtypes;

pub use bounds::{clamp_offset, fit_extent, max_offset};
pub use newtypes::{Extent, Offset, Scale, ScaleBounds};

/// Offset and scale applied to the fitted image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub offset: Offset,
    pub scale: Scale,
}

impl Transform {
    /// No translation, scale 1.
    pub const IDENTITY: Self = Self {
        offset: Offset::ZERO,
        scale: Scale::IDENTITY,
    };

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.offset == Offset::ZERO && self.scale.is_identity()
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            offset: self.offset.lerp(other.offset, t),
            scale: self.scale.lerp(other.scale, t),
        }
    }
}
