// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: a horizontally scrollable strip of thumbnails.
//!
//! With exactly one image the strip is replaced by a single larger tile.
//! Tapping a tile selects it and asks the application to open the detail
//! viewer from the tile's on-screen frame.

pub mod layout;

use crate::domain::transform::Extent;
use crate::i18n::fluent::I18n;
use crate::media::{Catalog, ImageStore, Slot};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::operation;
use iced::widget::scrollable::{Direction, RelativeOffset, Scrollbar, Viewport};
use iced::widget::{button, image, Container, Id, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Rectangle, Size, Task};

/// Widget id of the thumbnail strip.
pub const STRIP_ID: &str = "gallery-strip";

#[derive(Debug, Clone)]
pub enum Message {
    Tap(usize),
    Scrolled(Viewport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the detail viewer on `index`.
    Open { index: usize },
}

/// What the gallery is currently able to show.
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Loading,
    Failed(&'a str),
    Ready(&'a Catalog),
}

/// Environment information required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub images: &'a ImageStore,
    pub content: Content<'a>,
    pub tile: f32,
    pub window: Size,
    /// Tile hidden because its image is shown by the detail viewer.
    pub hidden: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    selection: Option<usize>,
    scroll_x: f32,
    viewport_width: Option<f32>,
}

impl State {
    #[must_use]
    pub fn new(selection: Option<usize>) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn select(&mut self, index: usize) {
        self.selection = Some(index);
    }

    #[must_use]
    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Tap(index) => {
                self.selection = Some(index);
                Effect::Open { index }
            }
            Message::Scrolled(viewport) => {
                self.scroll_x = viewport.absolute_offset().x;
                self.viewport_width = Some(viewport.bounds().width);
                Effect::None
            }
        }
    }

    /// On-screen frame of tile `index` for a gallery of `count` images.
    #[must_use]
    pub fn tile_frame(&self, index: usize, count: usize, tile: f32, window: Size) -> Rectangle {
        if count == 1 {
            layout::single_tile_frame(window)
        } else {
            layout::thumbnail_frame(index, tile, window, self.scroll_x)
        }
    }

    /// On-screen frame of the image drawn inside tile `index`.
    #[must_use]
    pub fn image_frame(
        &self,
        index: usize,
        count: usize,
        tile: f32,
        window: Size,
        natural: Option<Extent>,
    ) -> Rectangle {
        layout::image_frame_in_tile(self.tile_frame(index, count, tile, window), natural)
    }

    /// Scrolls the strip so tile `index` is fully visible.
    pub fn reveal(&mut self, index: usize, count: usize, tile: f32, window: Size) -> Task<Message> {
        if count <= 1 {
            return Task::none();
        }
        let viewport_width = self.viewport_width.unwrap_or(window.width);
        let Some(offset) = layout::reveal_offset(index, count, tile, viewport_width, self.scroll_x)
        else {
            return Task::none();
        };
        let max = layout::max_scroll(count, tile, viewport_width);
        if max <= 0.0 {
            return Task::none();
        }
        self.scroll_x = offset;
        operation::snap_to(
            Id::new(STRIP_ID),
            RelativeOffset {
                x: offset / max,
                y: 0.0,
            },
        )
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let body: Element<'a, Message> = match env.content {
            Content::Loading => centered_text(env.i18n.tr("gallery-loading"), env.colors),
            Content::Failed(path) => centered_text(
                env.i18n.tr_with_args("gallery-load-failed", &[("path", path)]),
                env.colors,
            ),
            Content::Ready(catalog) if catalog.is_empty() => {
                centered_text(env.i18n.tr("gallery-empty"), env.colors)
            }
            Content::Ready(catalog) if catalog.len() == 1 => self.single_tile(&env),
            Content::Ready(catalog) => self.strip(catalog.len(), &env),
        };

        let mut layers = Stack::new().push(body);
        if let Content::Ready(catalog) = env.content {
            if !catalog.is_empty() {
                layers = layers.push(self.header(catalog.len(), &env));
            }
        }

        Container::new(layers.width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::surface(env.colors.surface_primary))
            .into()
    }

    fn header<'a>(&self, count: usize, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let title = Text::new(env.i18n.tr("gallery-title"))
            .size(typography::TITLE_MD)
            .color(env.colors.text_primary);
        let subtitle = Text::new(env.i18n.image_count(count))
            .size(typography::BODY)
            .color(env.colors.text_secondary);

        Container::new(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(title)
                .push(subtitle),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .into()
    }

    fn strip<'a>(&self, count: usize, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let tiles = (0..count).fold(
            Row::new()
                .spacing(crate::config::THUMBNAIL_SPACING)
                .padding(crate::config::STRIP_PADDING),
            |row, index| row.push(self.tile(index, env.tile, env)),
        );

        let scrollable = Scrollable::new(tiles)
            .id(Id::new(STRIP_ID))
            .width(Length::Fill)
            .direction(Direction::Horizontal(Scrollbar::new()))
            .on_scroll(Message::Scrolled);

        Container::new(scrollable).center_y(Length::Fill).into()
    }

    fn single_tile<'a>(&self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let side = layout::single_tile_frame(env.window).width;
        let tile = button(self.tile_content(0, Length::Fixed(side), env))
            .padding(0)
            .width(side)
            .height(side)
            .style(styles::button::tile(false))
            .on_press_maybe((env.hidden != Some(0)).then_some(Message::Tap(0)));

        Container::new(tile).center(Length::Fill).into()
    }

    fn tile<'a>(&self, index: usize, side: f32, env: &ViewEnv<'a>) -> Element<'a, Message> {
        if env.hidden == Some(index) {
            return Space::new().width(side).height(side).into();
        }
        button(self.tile_content(index, Length::Fixed(side), env))
            .padding(0)
            .width(side)
            .height(side)
            .style(styles::button::tile(self.selection == Some(index)))
            .on_press(Message::Tap(index))
            .into()
    }

    fn tile_content<'a>(
        &self,
        index: usize,
        side: Length,
        env: &ViewEnv<'a>,
    ) -> Element<'a, Message> {
        if env.hidden == Some(index) {
            return Space::new().width(side).height(side).into();
        }
        match env.images.thumbnail(index) {
            Some(Slot::Ready(data)) => image::Image::new(data.handle.clone())
                .width(side)
                .height(side)
                .content_fit(ContentFit::Contain)
                .into(),
            Some(Slot::Failed) => placeholder(env.i18n.tr("thumbnail-unavailable"), side, env),
            Some(Slot::Loading) | None => placeholder(String::new(), side, env),
        }
    }
}

fn placeholder<'a>(label: String, side: Length, env: &ViewEnv<'a>) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .color(env.colors.text_secondary),
    )
    .width(side)
    .height(side)
    .center(side)
    .style(styles::container::placeholder(env.colors.surface_secondary))
    .into()
}

fn centered_text<'a>(label: String, colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::BODY)
            .color(colors.text_secondary),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center(Length::Fill)
    .into()
}
