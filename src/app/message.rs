// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{FetchError, ShareError};
use crate::news::{NewsId, NewsItem};
use crate::ui::front_page;
use crate::ui::notifications;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    FrontPage(front_page::Message),
    Notification(notifications::NotificationMessage),
    /// The news service answered.
    EditionFetched(Result<Vec<NewsItem>, FetchError>),
    /// One card illustration finished downloading.
    ImageLoaded {
        id: NewsId,
        result: Result<Vec<u8>, FetchError>,
    },
    /// A Telegram post completed.
    Shared(Result<i64, ShareError>),
    /// Periodic tick driving the spinner and toast expiry.
    Tick(Instant),
    /// Move the ticker band one entry forward.
    TickerAdvance,
    WindowResized(Size),
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `COMIC_DAILY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Serve the built-in sample edition instead of fetching feeds.
    pub offline: bool,
}
