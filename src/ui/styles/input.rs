// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Theme};

/// Boxed form field on card stock.
pub fn boxed(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = ColorScheme::for_theme(theme);
    let base = text_input::default(theme, status);
    let border_color = match status {
        text_input::Status::Focused { .. } => colors.wash_red,
        _ => colors.ink,
    };

    text_input::Style {
        background: Background::Color(colors.card),
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::NONE.into(),
        },
        value: colors.ink,
        placeholder: colors.ink_muted,
        ..base
    }
}
