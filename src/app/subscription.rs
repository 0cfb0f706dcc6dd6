// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are reduced to the two the page cares about: window
//! resizes for the responsive layout and Escape for closing the article.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tick period while the spinner is turning.
const SPINNER_TICK: Duration = Duration::from_millis(33);

/// Tick period when only toasts need expiring.
const TOAST_TICK: Duration = Duration::from_millis(250);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Periodic tick for the loading spinner and notification auto-dismiss.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_TICK).map(Message::Tick)
    } else if has_notifications {
        time::every(TOAST_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Advances the breaking-news band every `interval`.
pub fn create_ticker_subscription(is_empty: bool, interval: Duration) -> Subscription<Message> {
    if is_empty {
        Subscription::none()
    } else {
        time::every(interval).map(|_| Message::TickerAdvance)
    }
}
