// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is an image gallery with a full-screen detail viewer,
//! built with the Iced GUI framework.
//!
//! Tapping a thumbnail expands it into the viewer with a shared-element
//! transition. The viewer pages between images, zooms with pinch, wheel or
//! double tap, and is dismissed by pinching in, dragging down or Escape.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
