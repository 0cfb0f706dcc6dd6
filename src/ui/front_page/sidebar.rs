// SPDX-License-Identifier: MPL-2.0
//! Right-hand column widgets: the editor's scratchpad, the subscription box
//! and the short sketches list.

use super::news_card::{self, Variant};
use super::section_header::{self, Accent};
use super::{Message, ViewContext};
use crate::news::NewsItem;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

const SCRATCHPAD_NOTES: &[&str] = &[
    "scratchpad-note-sources",
    "scratchpad-note-ink",
    "scratchpad-note-crypto",
    "scratchpad-note-hamsters",
];

/// Loose e-mail check: one `@`, a non-empty local part, and a dotted domain
/// without empty labels. No whitespace anywhere.
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

pub fn scratchpad<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let notes = SCRATCHPAD_NOTES.iter().fold(
        Column::new().spacing(spacing::XS),
        |column, key| {
            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(
                        Text::new("\u{2022}")
                            .size(typography::BODY_LG)
                            .style(|theme: &Theme| text::Style {
                                color: Some(ColorScheme::for_theme(theme).wash_red),
                            }),
                    )
                    .push(Text::new(ctx.i18n.tr(key)).size(typography::BODY_LG)),
            )
        },
    );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr("scratchpad-title"))
                    .size(typography::HEADLINE_LG)
                    .font(typography::HEADLINE_FONT),
            )
            .push(Container::new(notes).width(Length::Fill)),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

pub fn subscribe_box<'a>(email: &'a str, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("subscribe-placeholder"), email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Subscribe)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::input::boxed);

    let submit = button(
        Container::new(
            Text::new(ctx.i18n.tr("subscribe-button"))
                .size(typography::HEADLINE_MD)
                .font(typography::HEADLINE_FONT),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .on_press(Message::Subscribe)
    .style(styles::button::comic(|c| c.wash_red));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr("subscribe-title"))
                    .size(typography::HEADLINE_LG)
                    .font(typography::HEADLINE_FONT),
            )
            .push(Text::new(ctx.i18n.tr("subscribe-pitch")).size(typography::BODY_LG))
            .push(input)
            .push(submit)
            .push(
                Text::new(ctx.i18n.tr("subscribe-footnote"))
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(ColorScheme::for_theme(theme).ink_muted),
                    }),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::wash(|c| c.wash_blue))
    .into()
}

/// The three side stories under a yellow header.
pub fn short_sketches<'a>(side: &'a [NewsItem], ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let list = side.iter().fold(Column::new().spacing(spacing::XXS), |column, item| {
        column.push(news_card::view(item, Variant::Sidebar, ctx))
    });

    Column::new()
        .width(Length::Fill)
        .push(section_header::view(
            ctx.i18n.tr("section-short-sketches"),
            Accent::Yellow,
            false,
        ))
        .push(
            Container::new(list)
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::card),
        )
        .into()
}

pub fn view<'a>(
    side: &'a [NewsItem],
    email: &'a str,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .push(scratchpad(ctx))
        .push(subscribe_box(email, ctx));

    if !side.is_empty() {
        column = column.push(short_sketches(side, ctx));
    }
    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("first.last+news@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "reader",
            "@example.com",
            "reader@",
            "reader@example",
            "reader@@example.com",
            "reader@example..com",
            "reader@.com",
            "read er@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }
}
