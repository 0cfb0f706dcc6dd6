// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the front page.
//!
//! The `App` struct wires together the news service, the front page
//! component, localization, and toasts, and translates component events into
//! side effects like clipboard writes, Telegram posts, image downloads, or
//! config persistence.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::I18n;
use crate::news::images::{ImageCache, DEFAULT_CACHE_CAPACITY};
use crate::news::service::{FeedAggregator, NewsService, StaticEdition};
use crate::news::transport::{ReqwestTransport, Transport};
use crate::share::TelegramPublisher;
use crate::ui::design_tokens::layout;
use crate::ui::front_page;
use crate::ui::notifications;
use crate::ui::widgets::animated_spinner;
use self::config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: Theme,
    front_page: front_page::State,
    service: Arc<dyn NewsService>,
    /// HTTP access for card illustrations; `None` disables downloads.
    transport: Option<Arc<dyn Transport>>,
    publisher: Option<TelegramPublisher>,
    images: ImageCache,
    notifications: notifications::Manager,
    window_width: f32,
    spinner_rotation: f32,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("loading", &self.front_page.edition.is_loading())
            .field("share_enabled", &self.publisher.is_some())
            .field("window_width", &self.window_width)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            theme: Theme::Light,
            front_page: front_page::State::new(config.ticker.headlines()),
            config,
            service: Arc::new(StaticEdition::sample()),
            transport: None,
            publisher: None,
            images: ImageCache::new(DEFAULT_CACHE_CAPACITY, true),
            notifications: notifications::Manager::new(),
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            spinner_rotation: 0.0,
            last_tick: None,
        }
    }
}

/// Picks the news service and the image transport.
///
/// Offline mode, or a transport that cannot be built, falls back to the
/// built-in sample edition.
fn build_services(config: &Config, offline: bool) -> (Arc<dyn NewsService>, Option<Arc<dyn Transport>>) {
    if offline {
        tracing::info!("offline mode, serving the sample edition");
        return (Arc::new(StaticEdition::sample()), None);
    }

    match ReqwestTransport::new() {
        Ok(transport) => {
            let aggregator = FeedAggregator::new(
                transport.clone(),
                config.feeds.sources.clone(),
                config.feeds.max_articles(),
                config.feeds.request_delay(),
            );
            (Arc::new(aggregator), Some(Arc::new(transport)))
        }
        Err(err) => {
            tracing::error!(error = %err, "HTTP client unavailable, serving the sample edition");
            (Arc::new(StaticEdition::sample()), None)
        }
    }
}

fn build_publisher(config: &Config) -> Option<TelegramPublisher> {
    if !config.telegram.is_configured() {
        return None;
    }
    let token = config.telegram.bot_token.as_deref().unwrap_or_default();
    let chat_id = config.telegram.chat_id.as_deref().unwrap_or_default();
    match TelegramPublisher::new(token, chat_id) {
        Ok(publisher) => {
            tracing::info!(chat_id = publisher.chat_id(), "telegram sharing enabled");
            Some(publisher)
        }
        Err(err) => {
            tracing::warn!(error = %err, "telegram sharing disabled");
            None
        }
    }
}

impl App {
    /// Loads the configuration, builds the services, and starts the first
    /// fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();

        let i18n = I18n::new(flags.lang, &config);
        let (service, transport) = build_services(&config, flags.offline);
        let publisher = build_publisher(&config.clone().with_env_overrides());
        let images = ImageCache::new(
            config.images.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY),
            config.images.enabled.unwrap_or(true),
        );

        let mut app = App {
            i18n,
            theme: config.general.theme_mode.theme(),
            front_page: front_page::State::new(config.ticker.headlines()),
            service,
            transport,
            publisher,
            images,
            config,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = if app.front_page.edition.begin_fetch() {
            update::fetch_edition(&app.service)
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.front_page.edition.selected() {
            Some(item) => format!("{} - {app_name}", item.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn is_wide(&self) -> bool {
        self.window_width >= layout::WIDE_BREAKPOINT
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.front_page.edition.is_loading(),
            self.notifications.has_notifications(),
        );
        let ticker_sub = subscription::create_ticker_subscription(
            self.front_page.ticker.is_empty(),
            self.config.ticker.rotate_interval(),
        );

        Subscription::batch([event_sub, tick_sub, ticker_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            front_page: &mut self.front_page,
            images: &mut self.images,
            notifications: &mut self.notifications,
            service: &self.service,
            transport: self.transport.as_ref(),
            publisher: self.publisher.as_ref(),
        };

        match message {
            Message::FrontPage(page_message) => {
                update::handle_front_page_message(&mut ctx, page_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::EditionFetched(result) => update::handle_edition_fetched(&mut ctx, result),
            Message::ImageLoaded { id, result } => {
                update::handle_image_loaded(&mut ctx, id, result);
                Task::none()
            }
            Message::Shared(result) => {
                update::handle_shared(&mut ctx, result);
                Task::none()
            }
            Message::Tick(now) => {
                if let Some(last) = self.last_tick {
                    let delta = now.saturating_duration_since(last).as_secs_f32();
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation, delta);
                }
                self.last_tick = Some(now);
                self.notifications.tick(now);
                Task::none()
            }
            Message::TickerAdvance => {
                self.front_page.ticker.advance();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
            Message::EscapePressed => {
                if self.front_page.edition.selected().is_some() {
                    front_page::update(&mut self.front_page, front_page::Message::CloseArticle);
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            front_page: &self.front_page,
            images: &self.images,
            notifications: &self.notifications,
            wide: self.is_wide(),
            share_enabled: self.publisher.is_some(),
            spinner_rotation: self.spinner_rotation,
        })
    }
}
