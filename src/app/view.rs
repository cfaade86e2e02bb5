// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is always rendered; while the detail viewer is open it is
//! stacked on top so the gallery shows through its fading backdrop.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::{Catalog, ImageStore};
use crate::ui::theming::ColorScheme;
use crate::ui::{detail, gallery};
use iced::widget::Stack;
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub images: &'a ImageStore,
    pub gallery: &'a gallery::State,
    pub detail: Option<&'a detail::State>,
    pub catalog: Option<&'a Catalog>,
    pub load_error: Option<&'a str>,
    pub tile: f32,
    pub window: Size,
}

/// Renders the gallery and, when open, the detail viewer above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = match (ctx.catalog, ctx.load_error) {
        (Some(catalog), _) => gallery::Content::Ready(catalog),
        (None, Some(path)) => gallery::Content::Failed(path),
        (None, None) => gallery::Content::Loading,
    };

    let gallery_view = ctx
        .gallery
        .view(gallery::ViewEnv {
            i18n: ctx.i18n,
            colors: ctx.colors,
            images: ctx.images,
            content,
            tile: ctx.tile,
            window: ctx.window,
            hidden: ctx.detail.map(detail::State::index),
        })
        .map(Message::Gallery);

    let Some(detail) = ctx.detail else {
        return gallery_view;
    };

    let detail_view = detail
        .view(detail::ViewEnv {
            i18n: ctx.i18n,
            colors: ctx.colors,
            images: ctx.images,
        })
        .map(Message::Detail);

    Stack::new()
        .push(gallery_view)
        .push(detail_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
