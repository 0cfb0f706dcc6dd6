// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The only preference changed from the page itself is the language.

use super::config::{self, Config};
use super::{notifications, Message};
use crate::i18n::I18n;
use iced::Task;

/// Writes `config` to disk, warning with a toast on failure.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the handlers directly and never touch the user's settings file.
pub fn persist_config(config: &Config, notifications: &mut notifications::Manager) {
    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(config) {
        tracing::warn!(%error, "failed to save config");
        notifications.push(notifications::Notification::warning(
            "notification-config-save-error",
        ));
    }
}

/// Switches to the next bundled locale and persists it as
/// `general.language`.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    notifications: &mut notifications::Manager,
) -> Task<Message> {
    let Some(locale) = i18n.next_locale() else {
        return Task::none();
    };

    tracing::info!(%locale, "switching language");
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
    persist_config(config, notifications);

    Task::none()
}
