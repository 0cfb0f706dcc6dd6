// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Each toast is a small card with a coloured stamp on the left, the
//! translated message, and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Shadow, Theme};

pub struct Toast;

impl Toast {
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let stamp = Container::new(
            Text::new(severity.glyph())
                .size(typography::CAPTION)
                .font(typography::BOLD_FONT),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(move |theme: &Theme| {
            let colors = ColorScheme::for_theme(theme);
            container::Style {
                text_color: Some(palette::INK),
                background: Some(Background::Color(severity.color(&colors))),
                border: Border {
                    color: colors.ink,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                ..Default::default()
            }
        });

        let dismiss_button = button(
            text("x")
                .size(typography::BODY)
                .font(typography::BOLD_FONT),
        )
        .on_press(Message::Dismiss(notification.id()))
        .padding([0.0, spacing::XS])
        .style(styles::button::link);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(stamp)
            .push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| {
                toast_container_style(theme, severity.color(&ColorScheme::for_theme(theme)))
            })
            .into()
    }

    /// All visible toasts stacked in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.card)),
        border: Border {
            color: accent_color,
            width: border::WIDTH_LG,
            radius: radius::NONE.into(),
        },
        shadow: Shadow {
            color: colors.ink,
            ..shadow::SM
        },
        text_color: Some(colors.ink),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn toast_frame_uses_accent_color() {
        let accent = Severity::Warning.color(&ColorScheme::day());
        let style = toast_container_style(&Theme::Light, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }
}
