// SPDX-License-Identifier: MPL-2.0
//! Directory scanning for the gallery.
//!
//! A catalog is built from either a directory (every supported image inside it)
//! or a single file (every supported image next to it, with that file selected).

use crate::config::SortOrder;
use crate::error::{Error, Result};
use crate::media::{is_supported_image, ImageRef};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Ordered list of gallery images plus the initially selected index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    images: Vec<ImageRef>,
    initial_index: Option<usize>,
}

impl Catalog {
    /// Builds a catalog from an explicit list, selecting the first image.
    #[must_use]
    pub fn from_images(images: Vec<ImageRef>) -> Self {
        let initial_index = if images.is_empty() { None } else { Some(0) };
        Self {
            images,
            initial_index,
        }
    }

    /// Scans `path` (a directory or an image file) for supported images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the path does not exist or its directory
    /// cannot be read.
    pub fn scan(path: &Path, sort_order: SortOrder) -> Result<Self> {
        if path.is_dir() {
            let images = scan_images(path, sort_order)?;
            return Ok(Self::from_images(images));
        }

        if !path.is_file() {
            return Err(Error::Io(format!("{} does not exist", path.display())));
        }

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let images = scan_images(&parent, sort_order)?;
        let initial_index = images
            .iter()
            .position(|image| same_file(image.path(), path))
            .or(if images.is_empty() { None } else { Some(0) });

        Ok(Self {
            images,
            initial_index,
        })
    }

    /// Async wrapper around [`Catalog::scan`] that keeps directory I/O off the UI thread.
    pub async fn scan_async(path: PathBuf, sort_order: SortOrder) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::scan(&path, sort_order))
            .await
            .map_err(|e| Error::Io(e.to_string()))?
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Index selected when the gallery opens, `None` for an empty catalog.
    #[must_use]
    pub fn initial_index(&self) -> Option<usize> {
        self.initial_index
    }
}

fn scan_images(directory: &Path, sort_order: SortOrder) -> Result<Vec<ImageRef>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    sort_files(&mut files, sort_order);
    log::debug!("Found {} images in {}", files.len(), directory.display());
    Ok(files.into_iter().map(ImageRef::new).collect())
}

fn sort_files(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            let modified = |path: &Path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            };
            files.sort_by(|a, b| {
                modified(a)
                    .cmp(&modified(b))
                    .then_with(|| a.file_name().cmp(&b.file_name()))
            });
        }
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_keeps_only_images_in_alphabetical_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let c = touch(temp_dir.path(), "c.gif");
        let a = touch(temp_dir.path(), "a.jpg");
        let b = touch(temp_dir.path(), "b.png");
        touch(temp_dir.path(), "notes.txt");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("failed to create dir");

        let catalog =
            Catalog::scan(temp_dir.path(), SortOrder::Alphabetical).expect("scan should succeed");

        let paths: Vec<&Path> = catalog.images().iter().map(ImageRef::path).collect();
        assert_eq!(paths, vec![a.as_path(), b.as_path(), c.as_path()]);
        assert_eq!(catalog.initial_index(), Some(0));
    }

    #[test]
    fn scan_file_selects_that_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "a.jpg");
        let b = touch(temp_dir.path(), "b.jpg");
        touch(temp_dir.path(), "c.jpg");

        let catalog = Catalog::scan(&b, SortOrder::Alphabetical).expect("scan should succeed");

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.initial_index(), Some(1));
    }

    #[test]
    fn empty_directory_has_no_selection() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let catalog =
            Catalog::scan(temp_dir.path(), SortOrder::Alphabetical).expect("scan should succeed");

        assert!(catalog.is_empty());
        assert_eq!(catalog.initial_index(), None);
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = Catalog::scan(&temp_dir.path().join("gone"), SortOrder::Alphabetical);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn modified_date_order_falls_back_to_name_for_ties() {
        let mut files = vec![PathBuf::from("/nonexistent/b.png"), PathBuf::from("/nonexistent/a.png")];
        sort_files(&mut files, SortOrder::ModifiedDate);
        assert_eq!(files[0], PathBuf::from("/nonexistent/a.png"));
    }

    #[tokio::test]
    async fn scan_async_matches_sync_scan() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "one.png");

        let catalog = Catalog::scan_async(temp_dir.path().to_path_buf(), SortOrder::Alphabetical)
            .await
            .expect("scan should succeed");
        assert_eq!(catalog.len(), 1);
    }
}
