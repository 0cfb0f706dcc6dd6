// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Front page events are turned into side effects here: fetches, image
//! downloads, clipboard writes, Telegram posts, and toasts.

use super::config::Config;
use super::{notifications, persistence, Message};
use crate::error::{FetchError, ShareError};
use crate::i18n::I18n;
use crate::news::images::ImageCache;
use crate::news::service::NewsService;
use crate::news::topics::{trending_topics, DEFAULT_TOPIC_LIMIT};
use crate::news::transport::Transport;
use crate::news::{NewsId, NewsItem};
use crate::share::telegram::{compose_message, hashtags_for};
use crate::share::TelegramPublisher;
use crate::ui::front_page::{self, Event as FrontPageEvent};
use iced::Task;
use std::sync::Arc;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub front_page: &'a mut front_page::State,
    pub images: &'a mut ImageCache,
    pub notifications: &'a mut notifications::Manager,
    pub service: &'a Arc<dyn NewsService>,
    pub transport: Option<&'a Arc<dyn Transport>>,
    pub publisher: Option<&'a TelegramPublisher>,
}

/// Runs one fetch on the news service.
pub fn fetch_edition(service: &Arc<dyn NewsService>) -> Task<Message> {
    Task::perform(service.fetch(), Message::EditionFetched)
}

pub fn handle_front_page_message(
    ctx: &mut UpdateContext<'_>,
    message: front_page::Message,
) -> Task<Message> {
    match front_page::update(ctx.front_page, message) {
        FrontPageEvent::None => Task::none(),
        FrontPageEvent::Reload => fetch_edition(ctx.service),
        FrontPageEvent::CopyLink(url) => {
            ctx.notifications
                .push(notifications::Notification::success("notification-link-copied"));
            iced::clipboard::write(url)
        }
        FrontPageEvent::Share(id) => share_article(ctx, &id),
        FrontPageEvent::Subscribed(email) => {
            tracing::info!("newsletter subscription accepted");
            ctx.notifications.push(
                notifications::Notification::success("notification-subscribed")
                    .with_arg("email", email),
            );
            Task::none()
        }
        FrontPageEvent::InvalidEmail => {
            ctx.notifications
                .push(notifications::Notification::warning("notification-invalid-email"));
            Task::none()
        }
        FrontPageEvent::SwitchLanguage => {
            persistence::apply_language_change(ctx.i18n, ctx.config, ctx.notifications)
        }
    }
}

/// Stores the fetch result, refreshes the ticker topics and starts the
/// illustration downloads for the new edition.
pub fn handle_edition_fetched(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<NewsItem>, FetchError>,
) -> Task<Message> {
    ctx.front_page.edition.finish_fetch(result);
    ctx.images.clear();

    let Some(edition) = ctx.front_page.edition.edition() else {
        return Task::none();
    };

    let topics = trending_topics(edition.items(), DEFAULT_TOPIC_LIMIT);
    tracing::debug!(?topics, "trending topics");
    let pending = ctx.images.take_pending(edition.items());
    ctx.front_page.ticker.set_topics(&topics);

    download_images(ctx.transport, ctx.images, pending)
}

fn download_images(
    transport: Option<&Arc<dyn Transport>>,
    images: &mut ImageCache,
    pending: Vec<(NewsId, String)>,
) -> Task<Message> {
    let Some(transport) = transport else {
        // Nothing will ever answer; show placeholders right away.
        for (id, _) in pending {
            images.mark_failed(id);
        }
        return Task::none();
    };

    Task::batch(pending.into_iter().map(|(id, url)| {
        Task::perform(transport.get_bytes(&url), move |result| {
            Message::ImageLoaded { id, result }
        })
    }))
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    id: NewsId,
    result: Result<Vec<u8>, FetchError>,
) {
    let current = ctx
        .front_page
        .edition
        .edition()
        .is_some_and(|edition| edition.contains(&id));
    if !current {
        tracing::debug!(%id, "dropping illustration for a previous edition");
        return;
    }

    match result {
        Ok(bytes) => ctx.images.insert(id, bytes),
        Err(err) => {
            tracing::debug!(%id, error = %err, "illustration download failed");
            ctx.images.mark_failed(id);
        }
    }
}

fn share_article(ctx: &mut UpdateContext<'_>, id: &NewsId) -> Task<Message> {
    let Some(publisher) = ctx.publisher.cloned() else {
        ctx.notifications
            .push(notifications::Notification::warning("notification-share-unavailable"));
        return Task::none();
    };
    let Some(item) = ctx
        .front_page
        .edition
        .edition()
        .and_then(|edition| edition.get(id))
    else {
        return Task::none();
    };

    let text = compose_message(item, &hashtags_for(item));
    tracing::info!(%id, chat_id = publisher.chat_id(), "sharing story");
    Task::perform(publisher.send(text), Message::Shared)
}

pub fn handle_shared(ctx: &mut UpdateContext<'_>, result: Result<i64, ShareError>) {
    match result {
        Ok(message_id) => {
            tracing::info!(message_id, "story shared");
            ctx.notifications
                .push(notifications::Notification::success("notification-share-success"));
        }
        Err(err) => {
            ctx.notifications.push(
                notifications::Notification::error("notification-share-failed")
                    .with_arg("reason", err.to_string()),
            );
        }
    }
}
