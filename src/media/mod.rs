// SPDX-License-Identifier: MPL-2.0
//! Image discovery and decoding.
//!
//! - [`catalog`] finds the images shown in the gallery
//! - [`image`] decodes them into renderable handles
//! - [`store`] keeps the decoded results per gallery index

pub mod catalog;
pub mod image;
pub mod store;

pub use catalog::Catalog;
pub use image::{load_image, load_image_async, load_thumbnail, load_thumbnail_async, ImageData};
pub use store::{ImageStore, Slot};

use std::path::{Path, PathBuf};

/// Lowercase file extensions the catalog accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif", "ico",
];

/// Opaque reference to one gallery image.
///
/// Gallery order is the order of these references in the [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// File name for display, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.display().to_string())
    }
}

/// Returns true if the path has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
