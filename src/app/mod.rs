// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! detail viewer.
//!
//! The `App` struct wires together the catalog, the decoded image store,
//! localization and the two UI components, and translates their effects into
//! loading tasks and screen changes.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{
    self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::domain::gesture::ViewerVariant;
use crate::i18n::fluent::I18n;
use crate::media::{Catalog, ImageStore};
use crate::ui::theming::AppTheme;
use crate::ui::{detail, gallery};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    screen: Screen,
    /// Variant requested on the command line or in the config.
    variant: ViewerVariant,
    window_size: Size,
    start_path: PathBuf,
    load_error: Option<String>,
    catalog: Option<Catalog>,
    images: ImageStore,
    gallery: gallery::State,
    detail: Option<detail::State>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("images", &self.catalog.as_ref().map(Catalog::len))
            .field("detail_index", &self.detail.as_ref().map(detail::State::index))
            .finish()
    }
}

/// Default window size, also the initial detail container size.
#[must_use]
pub fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the catalog scan.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        if let Some(error) = config_warning {
            log::warn!("{} ({error})", i18n.tr("config-load-warning"));
        }

        let start_path = flags
            .path
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        let variant = flags.variant.unwrap_or_else(|| config.variant());
        log::debug!("Starting in {} with {variant:?} viewer", start_path.display());

        let app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            screen: Screen::Gallery,
            variant,
            window_size: default_window_size(),
            start_path: start_path.clone(),
            load_error: None,
            catalog: None,
            images: ImageStore::new(),
            gallery: gallery::State::default(),
            detail: None,
            config,
        };

        let task = Task::perform(
            Catalog::scan_async(start_path, app.config.sort_order()),
            Message::CatalogLoaded,
        );
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let current = self
            .detail
            .as_ref()
            .and_then(|detail| self.catalog.as_ref()?.get(detail.index()));
        match current {
            Some(image) => format!("{} - {app_name}", image.display_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self.detail.as_ref().is_some_and(detail::State::is_animating);
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_frame_subscription(animating),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => update::handle_gallery_message(self, message),
            Message::Detail(message) => update::handle_detail_message(self, message),
            Message::CatalogLoaded(result) => update::handle_catalog_loaded(self, result),
            Message::ThumbnailLoaded { index, result } => {
                update::handle_thumbnail_loaded(self, index, result)
            }
            Message::ImageLoaded { index, result } => {
                update::handle_image_loaded(self, index, result)
            }
            Message::WindowResized(size) => update::handle_window_resized(self, size),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            images: &self.images,
            gallery: &self.gallery,
            detail: self.detail.as_ref(),
            catalog: self.catalog.as_ref(),
            load_error: self.load_error.as_deref(),
            tile: self.config.thumbnail_size() as f32,
            window: self.window_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{ImageData, ImageRef};

    fn app_with(count: usize) -> App {
        let config = Config::default();
        let mut app = App {
            i18n: I18n::default(),
            theme: AppTheme::default(),
            screen: Screen::Gallery,
            variant: ViewerVariant::Auto,
            window_size: default_window_size(),
            start_path: PathBuf::from("."),
            load_error: None,
            catalog: None,
            images: ImageStore::new(),
            gallery: gallery::State::default(),
            detail: None,
            config,
        };
        let images = (0..count)
            .map(|index| ImageRef::new(format!("/photos/{index:02}.png")))
            .collect();
        let _ = app.update(Message::CatalogLoaded(Ok(Catalog::from_images(images))));
        app
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(2, 1, vec![0; 8])
    }

    #[test]
    fn catalog_failure_is_reported_in_gallery() {
        let mut app = app_with(0);
        app.catalog = None;
        let _ = app.update(Message::CatalogLoaded(Err(crate::error::Error::Io(
            "missing".into(),
        ))));
        assert!(app.load_error.is_some());
    }

    #[test]
    fn thumbnails_are_requested_for_every_image() {
        let app = app_with(4);
        for index in 0..4 {
            assert!(app.images.thumbnail(index).is_some());
        }
    }

    #[test]
    fn tapping_a_tile_opens_the_viewer() {
        let mut app = app_with(5);
        let _ = app.update(Message::Gallery(gallery::Message::Tap(2)));

        assert_eq!(app.screen, Screen::Detail);
        let detail = app.detail.as_ref().map(detail::State::index);
        assert_eq!(detail, Some(2));
        assert!(app.detail.as_ref().is_some_and(detail::State::is_animating));
        // Current page and both neighbours are being decoded.
        for index in 1..=3 {
            assert!(app.images.full(index).is_some());
        }
        assert!(app.images.full(4).is_none());
    }

    #[test]
    fn second_tap_while_open_is_ignored() {
        let mut app = app_with(5);
        let _ = app.update(Message::Gallery(gallery::Message::Tap(2)));
        let _ = app.update(Message::Gallery(gallery::Message::Tap(4)));
        assert_eq!(app.detail.as_ref().map(detail::State::index), Some(2));
    }

    #[test]
    fn dismiss_collapses_then_returns_to_gallery() {
        let mut app = app_with(3);
        let _ = app.update(Message::Gallery(gallery::Message::Tap(1)));

        let _ = app.update(Message::Detail(detail::Message::Dismiss));
        assert!(app.detail.as_ref().is_some_and(detail::State::is_collapsing));
        assert_eq!(app.gallery.selection(), Some(1));

        let later = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let _ = app.update(Message::Detail(detail::Message::Tick(later)));
        assert!(app.detail.is_none());
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn full_decode_finishing_after_paging_away_is_dropped() {
        let mut app = app_with(10);
        let _ = app.update(Message::Gallery(gallery::Message::Tap(2)));
        let expanded = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let _ = app.update(Message::Detail(detail::Message::Tick(expanded)));

        let _ = app.update(Message::Detail(detail::Message::NextPage));
        let _ = app.update(Message::Detail(detail::Message::NextPage));
        assert_eq!(app.detail.as_ref().map(detail::State::index), Some(4));
        assert!(app.images.full(1).is_none());

        let _ = app.update(Message::ImageLoaded {
            index: 1,
            result: Ok(pixel()),
        });
        assert!(app.images.full(1).is_none());

        let _ = app.update(Message::ImageLoaded {
            index: 5,
            result: Ok(pixel()),
        });
        assert!(matches!(app.images.full(5), Some(crate::media::Slot::Ready(_))));
    }

    #[test]
    fn resize_reaches_the_open_viewer() {
        let mut app = app_with(3);
        let _ = app.update(Message::Gallery(gallery::Message::Tap(1)));

        let _ = app.update(Message::WindowResized(Size::new(400.0, 600.0)));
        assert_eq!(app.window_size, Size::new(400.0, 600.0));
        let width = app.detail.as_ref().map(|detail| detail.fitted_frame().width);
        assert!(width.is_some_and(|width| width <= 400.0));
    }

    #[test]
    fn decoded_image_is_stored() {
        let mut app = app_with(2);
        let _ = app.update(Message::ThumbnailLoaded {
            index: 1,
            result: Ok(pixel()),
        });
        assert!(app.images.best(1).is_some());
    }

    #[test]
    fn title_names_the_open_image() {
        let mut app = app_with(3);
        assert_eq!(app.title(), app.i18n.tr("window-title"));

        let _ = app.update(Message::Gallery(gallery::Message::Tap(0)));
        assert!(app.title().starts_with("00.png"));
    }
}
