// SPDX-License-Identifier: MPL-2.0
//! Styles shared by the gallery and the detail viewer.

pub mod button;
pub mod container;
