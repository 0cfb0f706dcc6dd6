// SPDX-License-Identifier: MPL-2.0
//! Story illustration, or a halftone placeholder when none is available.

use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// What the illustration slot can currently show.
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    Ready(&'a Handle),
    Loading,
    /// No image URL, download failed, or images are disabled.
    Missing,
}

/// Renders `slot` at a fixed height, filling the available width.
pub fn view<'a, Message: 'a>(
    slot: Slot<'a>,
    loading_label: String,
    missing_label: String,
    height: f32,
) -> Element<'a, Message> {
    match slot {
        Slot::Ready(handle) => image::Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Slot::Loading => placeholder(loading_label, height),
        Slot::Missing => placeholder(missing_label, height),
    }
}

fn placeholder<'a, Message: 'a>(label: String, height: f32) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}
