// SPDX-License-Identifier: MPL-2.0
//! Decoded images of the current catalog, keyed by gallery index.
//!
//! Thumbnails are kept for every image once decoded. Full-resolution images
//! are only kept around the page being viewed.

use crate::domain::transform::Extent;
use crate::error::Error;
use crate::media::ImageData;
use std::collections::HashMap;

/// Decode state of one image.
#[derive(Debug, Clone)]
pub enum Slot {
    Loading,
    Ready(ImageData),
    Failed,
}

impl Slot {
    #[must_use]
    pub fn ready(&self) -> Option<&ImageData> {
        match self {
            Slot::Ready(data) => Some(data),
            Slot::Loading | Slot::Failed => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    thumbnails: HashMap<usize, Slot>,
    full: HashMap<usize, Slot>,
}

impl ImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.thumbnails.clear();
        self.full.clear();
    }

    #[must_use]
    pub fn thumbnail(&self, index: usize) -> Option<&Slot> {
        self.thumbnails.get(&index)
    }

    #[must_use]
    pub fn full(&self, index: usize) -> Option<&Slot> {
        self.full.get(&index)
    }

    /// Marks a thumbnail as loading. Returns false if it was already requested.
    pub fn request_thumbnail(&mut self, index: usize) -> bool {
        request(&mut self.thumbnails, index)
    }

    /// Marks a full image as loading. Returns false if it was already requested.
    pub fn request_full(&mut self, index: usize) -> bool {
        request(&mut self.full, index)
    }

    pub fn store_thumbnail(&mut self, index: usize, result: Result<ImageData, Error>) {
        store(&mut self.thumbnails, index, result, "thumbnail");
    }

    pub fn store_full(&mut self, index: usize, result: Result<ImageData, Error>) {
        store(&mut self.full, index, result, "image");
    }

    /// Best available rendition: the full image, else the thumbnail.
    #[must_use]
    pub fn best(&self, index: usize) -> Option<&ImageData> {
        self.full
            .get(&index)
            .and_then(Slot::ready)
            .or_else(|| self.thumbnails.get(&index).and_then(Slot::ready))
    }

    /// Aspect-correct size of the image, from whichever rendition is decoded.
    #[must_use]
    pub fn natural_size(&self, index: usize) -> Option<Extent> {
        self.best(index)
            .map(|data| Extent::new(data.width as f32, data.height as f32))
    }

    /// Returns true if neither rendition can be shown.
    #[must_use]
    pub fn is_failed(&self, index: usize) -> bool {
        let failed = |slot: Option<&Slot>| matches!(slot, Some(Slot::Failed));
        failed(self.full.get(&index))
            && !matches!(self.thumbnails.get(&index), Some(Slot::Ready(_)))
    }

    /// Forgets a full image so it can be requested again later.
    pub fn forget_full(&mut self, index: usize) {
        self.full.remove(&index);
    }

    /// Drops full images further than `radius` pages from `center`.
    pub fn retain_full_around(&mut self, center: usize, radius: usize) {
        self.full.retain(|index, _| index.abs_diff(center) <= radius);
    }
}

fn request(slots: &mut HashMap<usize, Slot>, index: usize) -> bool {
    if slots.contains_key(&index) {
        return false;
    }
    slots.insert(index, Slot::Loading);
    true
}

fn store(
    slots: &mut HashMap<usize, Slot>,
    index: usize,
    result: Result<ImageData, Error>,
    kind: &str,
) {
    let slot = match result {
        Ok(data) => Slot::Ready(data),
        Err(err) => {
            log::warn!("Failed to load {kind} #{index}: {err}");
            Slot::Failed
        }
    };
    slots.insert(index, slot);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    #[test]
    fn requests_are_deduplicated() {
        let mut store = ImageStore::new();
        assert!(store.request_thumbnail(3));
        assert!(!store.request_thumbnail(3));
        assert!(matches!(store.thumbnail(3), Some(Slot::Loading)));
    }

    #[test]
    fn best_prefers_full_resolution() {
        let mut store = ImageStore::new();
        store.store_thumbnail(0, Ok(data(4, 2)));
        assert_eq!(store.best(0).map(|d| d.width), Some(4));

        store.store_full(0, Ok(data(40, 20)));
        assert_eq!(store.best(0).map(|d| d.width), Some(40));
        assert_eq!(store.natural_size(0), Some(Extent::new(40.0, 20.0)));
    }

    #[test]
    fn failures_are_recorded() {
        let mut store = ImageStore::new();
        store.store_full(1, Err(Error::Image("corrupt".into())));
        assert!(store.is_failed(1));
        assert!(store.best(1).is_none());

        store.store_thumbnail(1, Ok(data(2, 2)));
        assert!(!store.is_failed(1));
    }

    #[test]
    fn full_images_far_from_current_page_are_dropped() {
        let mut store = ImageStore::new();
        for index in 0..6 {
            store.store_full(index, Ok(data(1, 1)));
        }
        store.retain_full_around(3, 1);

        assert!(store.full(1).is_none());
        assert!(store.full(2).is_some());
        assert!(store.full(4).is_some());
        assert!(store.full(5).is_none());
    }

    #[test]
    fn forgotten_full_image_can_be_requested_again() {
        let mut store = ImageStore::new();
        assert!(store.request_full(7));
        assert!(!store.request_full(7));

        store.forget_full(7);
        assert!(store.full(7).is_none());
        assert!(store.request_full(7));
    }
}
