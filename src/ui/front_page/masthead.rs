// SPDX-License-Identifier: MPL-2.0
//! Newspaper masthead: title, tagline, and the date/edition line.

use super::{rule, Message, ViewContext};
use crate::ui::design_tokens::{border, spacing, typography};
use chrono::{Datelike, NaiveDate};
use iced::widget::{Column, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Year of the first edition; volume 1.
pub const FIRST_VOLUME_YEAR: i32 = 2024;

/// Volume number: one per year since the first edition.
#[must_use]
pub fn volume(today: NaiveDate) -> u32 {
    u32::try_from(today.year() - FIRST_VOLUME_YEAR + 1).unwrap_or(1).max(1)
}

/// Issue number: day of the year.
#[must_use]
pub fn issue(today: NaiveDate) -> u32 {
    today.ordinal()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let volume = volume(ctx.today).to_string();
    let issue = issue(ctx.today).to_string();

    let edition_line = Row::new()
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr_with_args(
                "masthead-edition",
                &[("volume", volume.as_str()), ("issue", issue.as_str())],
            ))
            .size(typography::CAPTION)
            .font(typography::BOLD_FONT),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(ctx.today.format("%A, %B %-d, %Y").to_string().to_uppercase())
                .size(typography::CAPTION)
                .font(typography::BOLD_FONT),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(i18n.tr("masthead-price"))
                .size(typography::CAPTION)
                .font(typography::BOLD_FONT),
        );

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .padding([spacing::LG, 0.0])
        .push(
            Text::new(i18n.tr("masthead-title"))
                .size(typography::MASTHEAD)
                .font(typography::HEADLINE_FONT),
        )
        .push(Text::new(i18n.tr("masthead-tagline")).size(typography::BODY_LG))
        .push(rule(border::WIDTH_XL))
        .push(edition_line)
        .push(rule(border::WIDTH_SM))
        .into()
}
