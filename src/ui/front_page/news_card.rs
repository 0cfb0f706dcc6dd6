// SPDX-License-Identifier: MPL-2.0
//! Story cards in their three sizes.

use super::{Message, ViewContext};
use crate::news::images::ImageCache;
use crate::news::{truncate_chars, NewsItem};
use crate::ui::components::illustration::{self, Slot};
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Utc};
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

const HERO_SUMMARY_CHARS: usize = 280;
const STANDARD_SUMMARY_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Lead story with a large illustration.
    Hero,
    /// Grid card used by the daily strip and the archive.
    Standard,
    /// Compact text-only row for the sidebar.
    Sidebar,
}

/// "Source · Mar 3, 2025", or just the source for undated stories.
#[must_use]
pub fn byline(source: &str, published: Option<DateTime<Utc>>) -> String {
    match published {
        Some(date) => format!(
            "{} \u{00b7} {}",
            source.to_uppercase(),
            date.format("%b %-d, %Y")
        ),
        None => source.to_uppercase(),
    }
}

/// Picks what the illustration slot of `item` can show right now.
#[must_use]
pub fn illustration_slot<'a>(item: &NewsItem, images: &'a ImageCache) -> Slot<'a> {
    if !images.is_enabled() || item.image_url.is_none() || images.is_failed(&item.id) {
        return Slot::Missing;
    }
    match images.handle(&item.id) {
        Some(handle) => Slot::Ready(handle),
        None if images.is_loading(&item.id) => Slot::Loading,
        // Past the cache budget: never requested.
        None => Slot::Missing,
    }
}

fn category_badge<'a>(category: &str) -> Element<'a, Message> {
    Container::new(
        Text::new(category.to_uppercase())
            .size(typography::CAPTION)
            .font(typography::BOLD_FONT),
    )
    .padding([2.0, spacing::XS])
    .style(styles::container::wash(|c| c.wash_red))
    .into()
}

fn muted<'a>(content: String, size: f32) -> Text<'a> {
    Text::new(content)
        .size(size)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).ink_muted),
        })
}

pub fn view<'a>(
    item: &'a NewsItem,
    variant: Variant,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let on_press = Message::SelectArticle(item.id.clone());

    match variant {
        Variant::Hero | Variant::Standard => {
            let (image_height, headline_size, summary_chars) = if variant == Variant::Hero {
                (
                    sizing::HERO_IMAGE_HEIGHT,
                    typography::HEADLINE_XL,
                    HERO_SUMMARY_CHARS,
                )
            } else {
                (
                    sizing::CARD_IMAGE_HEIGHT,
                    typography::HEADLINE_MD,
                    STANDARD_SUMMARY_CHARS,
                )
            };

            let picture = illustration::view(
                illustration_slot(item, ctx.images),
                ctx.i18n.tr("card-image-loading"),
                ctx.i18n.tr("card-image-missing"),
                image_height,
            );

            let mut summary = truncate_chars(&item.summary, summary_chars);
            if summary.chars().count() < item.summary.chars().count() {
                summary.push_str("...");
            }

            let mut body = Column::new()
                .spacing(spacing::XS)
                .push(category_badge(&item.category))
                .push(
                    Text::new(item.title.as_str())
                        .size(headline_size)
                        .font(typography::HEADLINE_FONT),
                )
                .push(Text::new(summary).size(typography::BODY))
                .push(muted(byline(&item.source, item.published), typography::CAPTION));

            if variant == Variant::Hero {
                body = body.push(
                    Text::new(ctx.i18n.tr("card-read-more"))
                        .size(typography::BODY)
                        .font(typography::BOLD_FONT)
                        .style(|theme: &Theme| text::Style {
                            color: Some(ColorScheme::for_theme(theme).wash_red),
                        }),
                );
            }

            let card = Column::new()
                .spacing(spacing::SM)
                .push(picture)
                .push(body);

            button(card)
                .width(Length::Fill)
                .padding(spacing::MD)
                .on_press(on_press)
                .style(styles::button::card)
                .into()
        }
        Variant::Sidebar => {
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Top)
                .push(
                    Container::new(
                        Space::new()
                            .width(Length::Fixed(border::WIDTH_XL))
                            .height(Length::Fill),
                    )
                    .height(Length::Fixed(typography::HEADLINE_MD * 2.0))
                    .style(styles::container::wash(|c| c.wash_yellow)),
                )
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .width(Length::Fill)
                        .push(
                            Text::new(item.title.as_str())
                                .size(typography::BODY_LG)
                                .font(typography::BOLD_FONT),
                        )
                        .push(muted(byline(&item.source, item.published), typography::CAPTION)),
                );

            button(row)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .on_press(on_press)
                .style(styles::button::link)
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::test_support::item;
    use chrono::TimeZone;

    #[test]
    fn byline_includes_date_when_known() {
        let date = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
        assert_eq!(byline("mit_news", Some(date)), "MIT_NEWS \u{00b7} Mar 3, 2025");
        assert_eq!(byline("wire", None), "WIRE");
    }

    #[test]
    fn slot_is_missing_without_url() {
        let cache = ImageCache::default();
        assert!(matches!(illustration_slot(&item(1), &cache), Slot::Missing));
    }

    #[test]
    fn slot_is_missing_when_disabled() {
        let cache = ImageCache::disabled();
        let story = item(1).with_image("https://example.com/1.png");
        assert!(matches!(illustration_slot(&story, &cache), Slot::Missing));
    }

    #[test]
    fn slot_follows_cache_state() {
        let mut cache = ImageCache::default();
        let story = item(1).with_image("https://example.com/1.png");
        assert!(matches!(illustration_slot(&story, &cache), Slot::Missing));

        cache.take_pending(std::slice::from_ref(&story));
        assert!(matches!(illustration_slot(&story, &cache), Slot::Loading));

        cache.insert(story.id.clone(), vec![0u8; 4]);
        assert!(matches!(illustration_slot(&story, &cache), Slot::Ready(_)));

        cache.mark_failed(story.id.clone());
        assert!(matches!(illustration_slot(&story, &cache), Slot::Missing));
    }
}
