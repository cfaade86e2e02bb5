// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Geometry in the viewer is all `f32`, so frame and transform comparisons
//! go through `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for frames produced by chained tween and layout arithmetic.
pub const FRAME_EPSILON: f32 = 1e-3;
