// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `State`, a `Message` enum and a `handle_message` that returns an
//! `Effect` for the application to act on.
//!
//! # Screens
//!
//! - [`gallery`] - Thumbnail strip and single-image tile
//! - [`detail`] - Full-screen viewer with paging, zoom and dismiss gestures
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Easing curves and time-sampled tweens
//! - [`styles`] - Widget style functions
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod animation;
pub mod design_tokens;
pub mod detail;
pub mod gallery;
pub mod styles;
pub mod theming;
