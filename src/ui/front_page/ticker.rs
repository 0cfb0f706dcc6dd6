// SPDX-License-Identifier: MPL-2.0
//! Breaking-news ticker band.
//!
//! Entries are the configured headlines followed by the edition's trending
//! topics. A timer advances the window by one entry at a time.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Entries visible at once.
pub const WINDOW: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerEntry {
    Headline(String),
    Trending(String),
}

#[derive(Debug, Clone, Default)]
pub struct TickerState {
    headlines: Vec<String>,
    entries: Vec<TickerEntry>,
    position: usize,
}

impl TickerState {
    #[must_use]
    pub fn new(headlines: Vec<String>) -> Self {
        let mut state = Self {
            headlines,
            ..Self::default()
        };
        state.set_topics(&[]);
        state
    }

    /// Rebuilds the entries with fresh trending topics and restarts the band.
    pub fn set_topics(&mut self, topics: &[&str]) {
        self.entries = self
            .headlines
            .iter()
            .cloned()
            .map(TickerEntry::Headline)
            .chain(topics.iter().map(|t| TickerEntry::Trending((*t).to_uppercase())))
            .collect();
        self.position = 0;
    }

    /// Moves the window one entry forward, wrapping around.
    pub fn advance(&mut self) {
        if !self.entries.is_empty() {
            self.position = (self.position + 1) % self.entries.len();
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to [`WINDOW`] entries starting at the current position.
    pub fn visible(&self) -> impl Iterator<Item = &TickerEntry> {
        let count = self.entries.len().min(WINDOW);
        self.entries
            .iter()
            .cycle()
            .skip(self.position)
            .take(count)
    }
}

pub fn view<'a>(state: &'a TickerState, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XL)
        .align_y(alignment::Vertical::Center);

    for entry in state.visible() {
        let (label, body) = match entry {
            TickerEntry::Headline(headline) => (ctx.i18n.tr("ticker-breaking"), headline.clone()),
            TickerEntry::Trending(topic) => (ctx.i18n.tr("ticker-trending"), topic.clone()),
        };
        row = row.push(
            Row::new()
                .spacing(spacing::XS)
                .push(
                    Text::new(format!("\u{00bb} {label}"))
                        .size(typography::BODY_LG)
                        .font(typography::HEADLINE_FONT)
                        .style(|theme: &Theme| text::Style {
                            color: Some(ColorScheme::for_theme(theme).wash_yellow),
                        }),
                )
                .push(
                    Text::new(body)
                        .size(typography::BODY_LG)
                        .font(typography::BOLD_FONT),
                ),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TICKER_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(styles::container::inverted)
        .into()
}
