// SPDX-License-Identifier: MPL-2.0
//! Bounds clamping for a scaled image inside its container.
//!
//! The image is centred in the container at offset zero. Along each axis the
//! scaled image may travel by half the amount it overflows the container;
//! an axis that does not overflow is pinned to the centre.

use super::newtypes::{Extent, Offset, Scale};

/// Largest distance the image can move from the centre along one axis.
#[must_use]
pub fn max_offset(content: f32, scale: f32, container: f32) -> f32 {
    ((content * scale - container) / 2.0).max(0.0)
}

/// Clamps one axis of the offset.
#[must_use]
pub fn clamp_axis(offset: f32, content: f32, scale: f32, container: f32) -> f32 {
    let scaled = content * scale;
    if scaled <= container || !offset.is_finite() {
        return 0.0;
    }
    let limit = max_offset(content, scale, container);
    offset.clamp(-limit, limit)
}

/// Clamps an offset so the scaled content never reveals empty space beyond
/// its edges.
#[must_use]
pub fn clamp_offset(offset: Offset, scale: Scale, content: Extent, container: Extent) -> Offset {
    Offset {
        x: clamp_axis(offset.x, content.width, scale.value(), container.width),
        y: clamp_axis(offset.y, content.height, scale.value(), container.height),
    }
}

/// Size of `image` fitted inside `container` while preserving its aspect
/// ratio. Small images are scaled up.
#[must_use]
pub fn fit_extent(image: Extent, container: Extent) -> Extent {
    if image.is_empty() || container.is_empty() {
        return Extent::default();
    }
    let factor = (container.width / image.width).min(container.height / image.height);
    image.scaled(factor)
}
