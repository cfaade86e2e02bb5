// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gallery tile: no chrome at rest, an accent outline when hovered or
/// selected.
pub fn tile(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let outlined = selected || matches!(status, button::Status::Hovered);
        let border = if outlined {
            Border {
                color: palette::PRIMARY_400,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                radius: radius::SM.into(),
                ..Border::default()
            }
        };

        button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: palette::WHITE,
            border,
            shadow: iced::Shadow::default(),
            snap: true,
        }
    }
}
