// SPDX-License-Identifier: MPL-2.0
//! Full article sheet over a dimmed page.
//!
//! Clicking the backdrop, the close button, or pressing Escape closes it.
//! Clicks on the sheet itself never reach the backdrop.

use super::news_card::{byline, illustration_slot};
use super::{Message, ViewContext};
use crate::news::NewsItem;
use crate::ui::components::illustration;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, center, mouse_area, opaque, scrollable, text, Column, Container, Row, Space, Text,
};
use iced::{Element, Length, Theme};

pub fn view<'a>(item: &'a NewsItem, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let close = button(
        Text::new(i18n.tr("modal-close"))
            .size(typography::BODY)
            .font(typography::BOLD_FONT),
    )
    .padding([spacing::XXS, spacing::SM])
    .on_press(Message::CloseArticle)
    .style(styles::button::secondary);

    let header = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(item.category.to_uppercase())
                .size(typography::CAPTION)
                .font(typography::BOLD_FONT)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).wash_red),
                }),
        )
        .push(Space::new().width(Length::Fill))
        .push(close);

    let mut actions = Row::new().spacing(spacing::SM).push(
        button(Text::new(i18n.tr("modal-copy-link")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::CopyLink)
            .style(styles::button::primary),
    );
    if ctx.share_enabled {
        actions = actions.push(
            button(Text::new(i18n.tr("modal-share-telegram")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::ShareTelegram)
                .style(styles::button::comic(|c| c.wash_blue)),
        );
    }

    let body = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(illustration::view(
            illustration_slot(item, ctx.images),
            i18n.tr("card-image-loading"),
            i18n.tr("card-image-missing"),
            sizing::MODAL_IMAGE_HEIGHT,
        ))
        .push(
            Text::new(item.title.as_str())
                .size(typography::HEADLINE_XL)
                .font(typography::HEADLINE_FONT),
        )
        .push(
            Text::new(byline(&item.source, item.published))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).ink_muted),
                }),
        )
        .push(Text::new(item.summary.as_str()).size(typography::BODY_LG))
        .push(
            Text::new(item.url.as_str())
                .size(typography::CAPTION)
                .font(iced::Font::MONOSPACE),
        )
        .push(actions);

    let sheet = Container::new(scrollable(body))
        .width(Length::Fill)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .max_height(sizing::MODAL_MAX_HEIGHT)
        .padding(spacing::LG)
        .style(styles::container::modal);

    opaque(
        mouse_area(
            center(opaque(sheet))
                .padding(spacing::XL)
                .style(styles::container::backdrop),
        )
        .on_press(Message::CloseArticle),
    )
}
