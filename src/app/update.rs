// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Component effects are turned into loading tasks and screen changes here.

use super::{App, Message, Screen};
use crate::config::MAX_THUMBNAIL_SIZE;
use crate::error::Error;
use crate::media::{self, Catalog, ImageData};
use crate::ui::detail::{self, Effect as DetailEffect};
use crate::ui::gallery::{self, Effect as GalleryEffect};
use iced::{Size, Task};
use std::time::Instant;

/// Full images are kept for the current page and this many on each side.
pub const FULL_IMAGE_RADIUS: usize = 1;

pub fn handle_catalog_loaded(app: &mut App, result: Result<Catalog, Error>) -> Task<Message> {
    let catalog = match result {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Failed to scan {}: {err}", app.start_path.display());
            app.load_error = Some(app.start_path.display().to_string());
            return Task::none();
        }
    };

    log::info!("Found {} image(s) in {}", catalog.len(), app.start_path.display());
    app.images.clear();
    app.gallery = gallery::State::new(catalog.initial_index());

    let tile = app.config.thumbnail_size();
    // The lone tile of a one-image gallery is drawn larger than a thumbnail.
    let decode_edge = if catalog.len() == 1 {
        MAX_THUMBNAIL_SIZE
    } else {
        tile
    };
    let thumbnails: Vec<Task<Message>> = (0..catalog.len())
        .filter_map(|index| request_thumbnail(app, &catalog, index, decode_edge))
        .collect();

    let reveal = match catalog.initial_index() {
        Some(index) => app
            .gallery
            .reveal(index, catalog.len(), tile as f32, app.window_size)
            .map(Message::Gallery),
        None => Task::none(),
    };

    app.catalog = Some(catalog);
    Task::batch(thumbnails.into_iter().chain(std::iter::once(reveal)))
}

pub fn handle_thumbnail_loaded(
    app: &mut App,
    index: usize,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    app.images.store_thumbnail(index, result);
    refresh_detail_content(app, index);
    Task::none()
}

pub fn handle_image_loaded(
    app: &mut App,
    index: usize,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    // Decodes that finish after the viewer moved away were already evicted.
    let wanted = app
        .detail
        .as_ref()
        .is_some_and(|detail| detail.index().abs_diff(index) <= FULL_IMAGE_RADIUS);
    if !wanted {
        log::debug!("Dropping full image #{index} outside the viewed pages");
        app.images.forget_full(index);
        return Task::none();
    }
    app.images.store_full(index, result);
    refresh_detail_content(app, index);
    Task::none()
}

pub fn handle_window_resized(app: &mut App, size: Size) -> Task<Message> {
    app.window_size = size;
    if app.detail.is_none() {
        return Task::none();
    }
    handle_detail_message(app, detail::Message::Resized(size))
}

pub fn handle_gallery_message(app: &mut App, message: gallery::Message) -> Task<Message> {
    // Taps under an open viewer are stale.
    if app.detail.is_some() && matches!(message, gallery::Message::Tap(_)) {
        return Task::none();
    }
    match app.gallery.handle_message(message) {
        GalleryEffect::Open { index } => open_detail(app, index),
        GalleryEffect::None => Task::none(),
    }
}

pub fn handle_detail_message(app: &mut App, message: detail::Message) -> Task<Message> {
    let now = match message {
        detail::Message::Tick(at) => at,
        _ => Instant::now(),
    };
    let Some(detail) = app.detail.as_mut() else {
        return Task::none();
    };
    let (effect, task) = detail.handle_message(message, now);
    Task::batch([task.map(Message::Detail), apply_detail_effect(app, effect, now)])
}

fn apply_detail_effect(app: &mut App, effect: DetailEffect, now: Instant) -> Task<Message> {
    match effect {
        DetailEffect::None => Task::none(),
        DetailEffect::PageChanged(index) => {
            app.gallery.select(index);
            app.images.retain_full_around(index, FULL_IMAGE_RADIUS);
            refresh_detail_content(app, index);
            request_pages_around(app, index)
        }
        DetailEffect::Dismissed { index } => start_collapse(app, index, now),
        DetailEffect::Closed { index } => {
            log::debug!("Detail viewer closed on #{index}");
            app.detail = None;
            app.screen = Screen::Gallery;
            Task::none()
        }
    }
}

fn open_detail(app: &mut App, index: usize) -> Task<Message> {
    let Some(catalog) = app.catalog.as_ref() else {
        return Task::none();
    };
    if index >= catalog.len() {
        return Task::none();
    }

    let now = Instant::now();
    let count = catalog.len();
    let tile = app.config.thumbnail_size() as f32;
    let natural = app.images.natural_size(index);

    let mut detail = detail::State::new(
        app.variant,
        count,
        index,
        app.window_size,
        natural,
        app.config.transition(),
        now,
    );
    let from = app
        .gallery
        .image_frame(index, count, tile, app.window_size, natural);
    detail.start_expand(from, now);

    log::debug!("Opening #{index} of {count} from {from:?}");
    app.detail = Some(detail);
    app.screen = Screen::Detail;
    request_pages_around(app, index)
}

fn start_collapse(app: &mut App, index: usize, now: Instant) -> Task<Message> {
    let Some(count) = app.catalog.as_ref().map(Catalog::len) else {
        return Task::none();
    };
    let tile = app.config.thumbnail_size() as f32;

    app.gallery.select(index);
    let reveal = app
        .gallery
        .reveal(index, count, tile, app.window_size)
        .map(Message::Gallery);
    let natural = app.images.natural_size(index);
    let to = app
        .gallery
        .image_frame(index, count, tile, app.window_size, natural);

    if let Some(detail) = app.detail.as_mut() {
        detail.start_collapse(to, now);
    }
    reveal
}

/// Pushes the natural size of `index` to the viewer if it shows that image.
fn refresh_detail_content(app: &mut App, index: usize) {
    let Some(natural) = app.images.natural_size(index) else {
        return;
    };
    if let Some(detail) = app.detail.as_mut() {
        detail.set_content(index, natural);
    }
}

/// Starts decoding full images for `index` and the pages next to it.
fn request_pages_around(app: &mut App, index: usize) -> Task<Message> {
    let Some(catalog) = app.catalog.as_ref() else {
        return Task::none();
    };
    let images = &mut app.images;
    let first = index.saturating_sub(FULL_IMAGE_RADIUS);
    let last = (index + FULL_IMAGE_RADIUS).min(catalog.len().saturating_sub(1));

    let tasks: Vec<Task<Message>> = (first..=last)
        .filter(|&page| images.request_full(page))
        .filter_map(|page| catalog.get(page).map(|image| (page, image.path().to_path_buf())))
        .map(|(page, path)| {
            Task::perform(media::load_image_async(path), move |result| {
                Message::ImageLoaded {
                    index: page,
                    result,
                }
            })
        })
        .collect();
    Task::batch(tasks)
}

fn request_thumbnail(
    app: &mut App,
    catalog: &Catalog,
    index: usize,
    max_edge: u32,
) -> Option<Task<Message>> {
    if !app.images.request_thumbnail(index) {
        return None;
    }
    let path = catalog.get(index)?.path().to_path_buf();
    Some(Task::perform(
        media::load_thumbnail_async(path, max_edge),
        move |result| Message::ThumbnailLoaded { index, result },
    ))
}
