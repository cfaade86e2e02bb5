// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::gesture::ViewerVariant;
use crate::error::Error;
use crate::media::{Catalog, ImageData};
use crate::ui::{detail, gallery};
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Detail(detail::Message),
    /// Result of scanning the startup path.
    CatalogLoaded(Result<Catalog, Error>),
    ThumbnailLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    ImageLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LIGHTBOX_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Viewer variant forced from the command line.
    pub variant: Option<ViewerVariant>,
    /// Image file or directory to open; defaults to the working directory.
    pub path: Option<PathBuf>,
}
