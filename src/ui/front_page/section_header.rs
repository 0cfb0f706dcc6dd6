// SPDX-License-Identifier: MPL-2.0
//! Section headers: a washed label box sitting on a heavy rule.

use super::{rule, Message};
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Red,
    Blue,
    Yellow,
    Purple,
}

impl Accent {
    #[must_use]
    pub fn color(self, colors: &ColorScheme) -> Color {
        match self {
            Accent::Red => colors.wash_red,
            Accent::Blue => colors.wash_blue,
            Accent::Yellow => colors.wash_yellow,
            Accent::Purple => colors.wash_purple,
        }
    }

    fn picker(self) -> fn(&ColorScheme) -> Color {
        match self {
            Accent::Red => |c| c.wash_red,
            Accent::Blue => |c| c.wash_blue,
            Accent::Yellow => |c| c.wash_yellow,
            Accent::Purple => |c| c.wash_purple,
        }
    }
}

pub fn view<'a>(title: String, accent: Accent, centered: bool) -> Element<'a, Message> {
    let label = Container::new(
        Text::new(title.to_uppercase())
            .size(typography::HEADLINE_LG)
            .font(typography::HEADLINE_FONT),
    )
    .padding([spacing::XXS, spacing::MD])
    .style(styles::container::wash(accent.picker()));

    let align = if centered {
        alignment::Horizontal::Center
    } else {
        alignment::Horizontal::Left
    };

    Column::new()
        .width(Length::Fill)
        .align_x(align)
        .push(label)
        .push(rule(border::WIDTH_XL))
        .padding([spacing::MD, 0.0])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_map_to_distinct_washes() {
        let colors = ColorScheme::day();
        let all = [Accent::Red, Accent::Blue, Accent::Yellow, Accent::Purple];
        for (i, a) in all.iter().enumerate() {
            assert_eq!(a.picker()(&colors), a.color(&colors));
            for b in &all[i + 1..] {
                assert_ne!(a.color(&colors), b.color(&colors));
            }
        }
    }
}
