// SPDX-License-Identifier: MPL-2.0
//! "Press jammed" panel shown in place of the page when an edition fails.
//!
//! The panel always shows the same friendly title and message whatever went
//! wrong. The underlying error only appears behind the details toggle.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::new()
//!     .title(i18n.tr("error-press-jammed-title"))
//!     .message(i18n.tr("error-press-jammed-message"))
//!     .details(error.to_string())
//!     .details_visible(state.show_details)
//!     .action(i18n.tr("error-reload"), Message::Reload)
//!     .on_toggle_details(Message::ToggleErrorDetails)
//!     .view()
//! ```

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, rule, text, Column, Container, Text};
use iced::{alignment, Element, Font, Length, Theme};

#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    action_label: Option<String>,
    action_message: Option<Message>,
    toggle_details_message: Option<Message>,
    show_details_label: String,
    hide_details_label: String,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            details: None,
            show_details: false,
            action_label: None,
            action_message: None,
            toggle_details_message: None,
            show_details_label: "Show details".to_string(),
            hide_details_label: "Hide details".to_string(),
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Technical text hidden behind the toggle.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    #[must_use]
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    /// Localized labels for the details toggle.
    #[must_use]
    pub fn details_labels(mut self, show: impl Into<String>, hide: impl Into<String>) -> Self {
        self.show_details_label = show.into();
        self.hide_details_label = hide.into();
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let burst = Container::new(
            Text::new("!")
                .size(typography::MASTHEAD)
                .font(typography::HEADLINE_FONT),
        )
        .width(Length::Fixed(sizing::SPINNER))
        .height(Length::Fixed(sizing::SPINNER))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::wash(|c| c.wash_yellow));

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(burst);

        if let Some(title_text) = self.title {
            content = content.push(
                Text::new(title_text)
                    .size(typography::HEADLINE_LG)
                    .font(typography::HEADLINE_FONT)
                    .style(|theme: &Theme| text::Style {
                        color: Some(ColorScheme::for_theme(theme).error),
                    }),
            );
        }

        if let Some(message_text) = self.message {
            content = content.push(
                Container::new(Text::new(message_text).size(typography::BODY_LG))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            content = content.push(
                Container::new(
                    button(Text::new(label).font(typography::HEADLINE_FONT))
                        .on_press(msg)
                        .padding([spacing::XS, spacing::LG])
                        .style(styles::button::primary),
                )
                .padding(spacing::SM),
            );
        }

        if let Some(details_text) = self.details {
            if let Some(toggle_msg) = self.toggle_details_message {
                let toggle_label = if self.show_details {
                    self.hide_details_label
                } else {
                    self.show_details_label
                };
                content = content.push(
                    button(Text::new(toggle_label).size(typography::CAPTION))
                        .on_press(toggle_msg)
                        .style(styles::button::link),
                );
            }

            if self.show_details {
                let details_block = Container::new(
                    Text::new(details_text)
                        .size(typography::CAPTION)
                        .font(Font::MONOSPACE),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::details);

                content = content.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fill)
                        .push(rule::horizontal(1))
                        .push(details_block),
                );
            }
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::ERROR_PANEL_MAX_WIDTH)
            .padding(spacing::LG)
            .style(styles::container::error_panel)
            .into()
    }
}

/// Error panel centred in the available space.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Reload,
        ToggleDetails,
    }

    #[test]
    fn builder_collects_fields() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new()
            .title("THE PRESS IS JAMMED!")
            .message("Our cartoonists spilled ink on the servers.")
            .details("HTTP status 503 from https://example.com/feed")
            .details_visible(true)
            .action("RELOAD", TestMessage::Reload)
            .on_toggle_details(TestMessage::ToggleDetails);

        assert_eq!(display.title.as_deref(), Some("THE PRESS IS JAMMED!"));
        assert!(display.details.as_deref().is_some_and(|d| d.contains("503")));
        assert!(display.show_details);
        assert!(matches!(display.action_message, Some(TestMessage::Reload)));
    }

    #[test]
    fn details_are_hidden_by_default() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new().details("boom");
        assert!(!display.show_details);
    }

    #[test]
    fn details_labels_can_be_customized() {
        let display: ErrorDisplay<TestMessage> =
            ErrorDisplay::new().details_labels("Afficher", "Masquer");

        assert_eq!(display.show_details_label, "Afficher");
        assert_eq!(display.hide_details_label, "Masquer");
    }
}
