// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gesture logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the whole
//! gesture pipeline can be tested without a window or a renderer.
//!
//! # Modules
//!
//! - [`transform`]: Transform value objects ([`Offset`](transform::Offset),
//!   [`Extent`](transform::Extent), [`Scale`](transform::Scale)) and bounds clamping
//! - [`gesture`]: Gesture profiles and the per-image
//!   [`GestureController`](gesture::GestureController) state machine

pub mod gesture;
pub mod transform;
