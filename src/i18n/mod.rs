// SPDX-License-Identifier: MPL-2.0
//! Localized strings for the gallery and the detail viewer.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The locale is
//! picked from the `--lang` flag, then the config file, then the system, and
//! falls back to `en-US` for any missing key.

pub mod fluent;
