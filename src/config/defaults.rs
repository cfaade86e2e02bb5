// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Thumbnail strip sizing
//! - **Transition**: Hero and settle animation durations
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default edge length of a square thumbnail (logical pixels).
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 160;

/// Smallest thumbnail edge length accepted from the config file.
pub const MIN_THUMBNAIL_SIZE: u32 = 48;

/// Largest thumbnail edge length accepted from the config file.
pub const MAX_THUMBNAIL_SIZE: u32 = 512;

/// Gap between two thumbnails in the strip.
pub const THUMBNAIL_SPACING: f32 = 12.0;

/// Padding around the thumbnail strip.
pub const STRIP_PADDING: f32 = 16.0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default duration of the shared-element transition (milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 320;

/// Shortest transition accepted from the config file.
pub const MIN_TRANSITION_MS: u64 = 0;

/// Longest transition accepted from the config file.
pub const MAX_TRANSITION_MS: u64 = 2000;

/// Duration of the spring-back after a gesture is released (milliseconds).
pub const SETTLE_MS: u64 = 260;

/// Duration of a page change animation (milliseconds).
pub const PAGE_MS: u64 = 280;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_THUMBNAIL_SIZE > 0);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);

    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
