// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::Datelike;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

const LINKS: &[(&str, fn(&ColorScheme) -> Color)] = &[
    ("footer-about", |c| c.wash_red),
    ("footer-submissions", |c| c.wash_blue),
    ("footer-complaints", |c| c.wash_yellow),
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let links = LINKS.iter().fold(Row::new().spacing(spacing::LG), |row, (key, wash)| {
        let wash = *wash;
        row.push(
            Text::new(i18n.tr(key))
                .size(typography::BODY_LG)
                .style(move |theme: &Theme| text::Style {
                    color: Some(wash(&ColorScheme::for_theme(theme))),
                }),
        )
    });

    let next_language = i18n
        .next_locale()
        .map(|locale| i18n.tr(&format!("language-name-{locale}")))
        .unwrap_or_default();
    let language_switch = button(
        Text::new(i18n.tr_with_args("footer-language", &[("language", next_language.as_str())]))
            .size(typography::BODY),
    )
    .padding([spacing::XXS, spacing::SM])
    .on_press_maybe(i18n.next_locale().map(|_| Message::SwitchLanguage))
    .style(styles::button::comic(|c| c.wash_purple));

    let year = ctx.today.year().to_string();

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("masthead-title"))
                    .size(typography::HEADLINE_XL)
                    .font(typography::HEADLINE_FONT),
            )
            .push(links)
            .push(language_switch)
            .push(
                Text::new(i18n.tr_with_args("footer-copyright", &[("year", year.as_str())]))
                    .size(typography::CAPTION),
            ),
    )
    .width(Length::Fill)
    .padding([spacing::XL, spacing::MD])
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::inverted)
    .into()
}
