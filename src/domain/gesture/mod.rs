// SPDX-License-Identifier: MPL-2.0
//! Gesture domain: interaction profiles and the transform controller.

pub mod controller;
pub mod profile;

pub use controller::{GestureController, Outcome, Phase};
pub use profile::{gesture_bounds, BackdropFade, GestureProfile, PanPolicy, ViewerVariant};
