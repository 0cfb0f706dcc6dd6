// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Newsprint page behind everything.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(colors.ink),
        background: Some(Background::Color(colors.paper)),
        ..Default::default()
    }
}

/// Framed card with a hard shadow.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(colors.ink),
        background: Some(Background::Color(colors.card)),
        border: Border {
            color: colors.ink,
            width: border::WIDTH_LG,
            radius: radius::NONE.into(),
        },
        shadow: Shadow {
            color: colors.ink,
            ..shadow::SM
        },
        ..Default::default()
    }
}

/// Band painted with a section wash and outlined in ink.
pub fn wash(color: fn(&ColorScheme) -> Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            text_color: Some(palette::INK),
            background: Some(Background::Color(color(&colors))),
            border: Border {
                color: colors.ink,
                width: border::WIDTH_MD,
                radius: radius::NONE.into(),
            },
            ..Default::default()
        }
    }
}

/// Solid ink band with paper text (ticker, footer).
pub fn inverted(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(colors.paper),
        background: Some(Background::Color(colors.ink)),
        ..Default::default()
    }
}

/// Solid ink fill for horizontal rules.
pub fn rule(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.ink)),
        ..Default::default()
    }
}

/// Halftone block standing in for a missing illustration.
pub fn placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(colors.ink_muted),
        background: Some(Background::Color(colors.halftone)),
        border: Border {
            color: colors.ink,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Dimmed layer behind the article modal.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.backdrop)),
        ..Default::default()
    }
}

/// The article modal sheet.
pub fn modal(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(colors.ink),
        background: Some(Background::Color(colors.card)),
        border: Border {
            color: colors.ink,
            width: border::WIDTH_XL,
            radius: radius::NONE.into(),
        },
        shadow: Shadow {
            color: palette::BLACK,
            ..shadow::LG
        },
        ..Default::default()
    }
}

/// Error panel with a red frame.
pub fn error_panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(colors.ink),
        background: Some(Background::Color(colors.card)),
        border: Border {
            color: colors.error,
            width: border::WIDTH_XL,
            radius: radius::NONE.into(),
        },
        shadow: Shadow {
            color: colors.ink,
            ..shadow::MD
        },
        ..Default::default()
    }
}

/// Monospace block for technical error details.
pub fn details(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(colors.ink_muted),
        background: Some(Background::Color(colors.halftone)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
