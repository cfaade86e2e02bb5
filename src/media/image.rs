// SPDX-License-Identifier: MPL-2.0
//! Image decoding into Iced handles (PNG, JPEG, GIF, WebP, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    fn from_dynamic(img: &image_rs::DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.to_rgba8().into_vec())
    }
}

/// Decodes the image at `path` at full resolution.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// its content cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img = decode(path.as_ref())?;
    Ok(ImageData::from_dynamic(&img))
}

/// Decodes the image at `path` and downscales it to fit a `max_edge` square.
///
/// Images already smaller than `max_edge` are kept at their size.
///
/// # Errors
///
/// Same as [`load_image`].
pub fn load_thumbnail<P: AsRef<Path>>(path: P, max_edge: u32) -> Result<ImageData> {
    let img = decode(path.as_ref())?;
    let (width, height) = img.dimensions();
    if width <= max_edge && height <= max_edge {
        return Ok(ImageData::from_dynamic(&img));
    }
    Ok(ImageData::from_dynamic(&img.thumbnail(max_edge, max_edge)))
}

/// Runs [`load_image`] on the blocking thread pool.
pub async fn load_image_async(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

/// Runs [`load_thumbnail`] on the blocking thread pool.
pub async fn load_thumbnail_async(path: PathBuf, max_edge: u32) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_thumbnail(&path, max_edge))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

fn decode(path: &Path) -> Result<image_rs::DynamicImage> {
    let bytes = std::fs::read(path)?;
    let img = image_rs::load_from_memory(&bytes)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::Image(format!("{} has empty dimensions", path.display())));
    }
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]))
            .save(&path)
            .expect("failed to write png");
        path
    }

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "sample.png", 4, 2);

        let data = load_image(&path).expect("png should decode");
        assert_eq!((data.width, data.height), (4, 2));
    }

    #[test]
    fn thumbnail_is_downscaled_preserving_aspect_ratio() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "wide.png", 200, 100);

        let data = load_thumbnail(&path, 50).expect("png should decode");
        assert_eq!((data.width, data.height), (50, 25));
    }

    #[test]
    fn small_image_is_not_upscaled_for_thumbnail() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "tiny.png", 8, 8);

        let data = load_thumbnail(&path, 64).expect("png should decode");
        assert_eq!((data.width, data.height), (8, 8));
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_image(temp_dir.path().join("missing.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn load_invalid_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"not a png").expect("failed to write file");

        let result = load_image(&path);
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[tokio::test]
    async fn async_loader_decodes_off_thread() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "async.png", 3, 3);

        let data = load_image_async(path).await.expect("png should decode");
        assert_eq!(data.width, 3);
    }
}
