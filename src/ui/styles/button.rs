// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Buttons look like cut-out comic panels: thick ink border and a hard
//! offset shadow that disappears while pressed.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn panel_style(
    background: Color,
    text_color: Color,
    border_color: Color,
    status: button::Status,
) -> button::Style {
    let shadow = match status {
        button::Status::Hovered => Shadow {
            color: border_color,
            ..shadow::MD
        },
        button::Status::Pressed | button::Status::Disabled => shadow::NONE,
        button::Status::Active => Shadow {
            color: border_color,
            ..shadow::SM
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Bold action painted with a section wash.
pub fn comic(wash: fn(&ColorScheme) -> Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let background = if matches!(status, button::Status::Disabled) {
            colors.halftone
        } else {
            wash(&colors)
        };
        // Washes are light enough that ink always reads on them.
        panel_style(background, palette::INK, colors.ink, status)
    }
}

/// Main call to action (reload, subscribe).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    comic(|c| c.wash_yellow)(theme, status)
}

/// Secondary action on card stock.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    panel_style(colors.card, colors.ink, colors.ink, status)
}

/// Clickable story card.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let mut style = panel_style(colors.card, colors.ink, colors.ink, status);
    style.border.width = border::WIDTH_LG;
    style.border.radius = radius::NONE.into();
    style
}

/// Plain text link, underlined by colour on hover.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.wash_red,
        button::Status::Disabled => colors.ink_muted,
        button::Status::Active => colors.ink,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_panel_has_no_shadow() {
        let style = primary(&Theme::Light, button::Status::Pressed);
        assert_eq!(style.shadow.offset, shadow::NONE.offset);
    }

    #[test]
    fn hovered_panel_lifts() {
        let active = secondary(&Theme::Light, button::Status::Active);
        let hovered = secondary(&Theme::Light, button::Status::Hovered);
        assert!(hovered.shadow.offset.x > active.shadow.offset.x);
    }

    #[test]
    fn link_turns_red_on_hover() {
        let style = link(&Theme::Light, button::Status::Hovered);
        assert_eq!(style.text_color, ColorScheme::day().wash_red);
        assert!(style.background.is_none());
    }

    #[test]
    fn comic_wash_keeps_dark_text_at_night() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color, ColorScheme::day().ink);
    }
}
