// SPDX-License-Identifier: MPL-2.0
//! Geometry of the thumbnail strip.
//!
//! The strip is a single row of square tiles centred vertically in the
//! window, scrolled horizontally. Frames are computed here rather than read
//! back from the widget tree so the hero transition can start from, and
//! return to, a tile's exact on-screen rectangle.

use crate::config::{STRIP_PADDING, THUMBNAIL_SPACING};
use crate::domain::transform::{fit_extent, Extent};
use iced::{Point, Rectangle, Size};

/// Side of the lone tile shown for a single image, relative to the
/// window's shorter edge.
pub const SINGLE_TILE_FRACTION: f32 = 0.6;

/// Height of the strip including its padding.
#[must_use]
pub fn strip_height(tile: f32) -> f32 {
    tile + 2.0 * STRIP_PADDING
}

/// Total scrollable width of a strip of `count` tiles.
#[must_use]
pub fn content_width(count: usize, tile: f32) -> f32 {
    if count == 0 {
        return 2.0 * STRIP_PADDING;
    }
    2.0 * STRIP_PADDING + count as f32 * tile + (count - 1) as f32 * THUMBNAIL_SPACING
}

/// Largest horizontal scroll offset of the strip.
#[must_use]
pub fn max_scroll(count: usize, tile: f32, viewport_width: f32) -> f32 {
    (content_width(count, tile) - viewport_width).max(0.0)
}

/// On-screen frame of tile `index` for a strip scrolled by `scroll_x`.
#[must_use]
pub fn thumbnail_frame(index: usize, tile: f32, window: Size, scroll_x: f32) -> Rectangle {
    let top = (window.height - strip_height(tile)) / 2.0;
    Rectangle::new(
        Point::new(
            STRIP_PADDING + index as f32 * (tile + THUMBNAIL_SPACING) - scroll_x,
            top + STRIP_PADDING,
        ),
        Size::new(tile, tile),
    )
}

/// Frame of the lone tile when the gallery holds exactly one image.
#[must_use]
pub fn single_tile_frame(window: Size) -> Rectangle {
    let side = (window.width.min(window.height) * SINGLE_TILE_FRACTION).max(0.0);
    Rectangle::new(
        Point::new((window.width - side) / 2.0, (window.height - side) / 2.0),
        Size::new(side, side),
    )
}

/// Frame of an image drawn with "contain" fit inside `tile`.
///
/// Falls back to the whole tile while the natural size is unknown.
#[must_use]
pub fn image_frame_in_tile(tile: Rectangle, natural: Option<Extent>) -> Rectangle {
    let Some(natural) = natural.filter(|extent| !extent.is_empty()) else {
        return tile;
    };
    let fitted = fit_extent(natural, Extent::new(tile.width, tile.height));
    Rectangle::new(
        Point::new(
            tile.x + (tile.width - fitted.width) / 2.0,
            tile.y + (tile.height - fitted.height) / 2.0,
        ),
        Size::new(fitted.width, fitted.height),
    )
}

/// Scroll offset that brings tile `index` fully into view, or `None` when it
/// already is.
#[must_use]
pub fn reveal_offset(
    index: usize,
    count: usize,
    tile: f32,
    viewport_width: f32,
    scroll_x: f32,
) -> Option<f32> {
    if index >= count || viewport_width <= 0.0 {
        return None;
    }
    let left = STRIP_PADDING + index as f32 * (tile + THUMBNAIL_SPACING);
    let right = left + tile;

    let target = if left - STRIP_PADDING < scroll_x {
        left - STRIP_PADDING
    } else if right + STRIP_PADDING > scroll_x + viewport_width {
        right + STRIP_PADDING - viewport_width
    } else {
        return None;
    };
    Some(target.clamp(0.0, max_scroll(count, tile, viewport_width)))
}
