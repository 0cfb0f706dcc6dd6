// SPDX-License-Identifier: MPL-2.0
//! Sharing articles to external channels.
//!
//! Only Telegram is supported; the channel is available when both a bot token
//! and a chat id are configured.

pub mod telegram;

pub use telegram::TelegramPublisher;
