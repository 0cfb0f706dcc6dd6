// SPDX-License-Identifier: MPL-2.0
//! The front page component.
//!
//! Renders one edition as a comic newspaper:
//!
//! | Region        | Content                                          |
//! |---------------|--------------------------------------------------|
//! | Ticker        | Breaking headlines and trending topics           |
//! | Masthead      | Title, tagline, edition and date line            |
//! | Main column   | Hero story, divider, the daily strip             |
//! | Sidebar       | Scratchpad, subscription box, short sketches     |
//! | Archive       | Remaining stories, collapsible                   |
//! | Footer        | Links, language switch, copyright                |
//!
//! While loading, a spinner replaces the main area; on failure, the error
//! panel replaces it and no story is rendered.

pub mod article_modal;
pub mod footer;
pub mod masthead;
pub mod news_card;
pub mod section_header;
pub mod sidebar;
pub mod state;
pub mod ticker;

pub use state::{EditionState, LoadState, ScrollLock};
pub use ticker::TickerState;

use crate::i18n::I18n;
use crate::news::images::ImageCache;
use crate::news::{FrontPage, NewsId};
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{border, layout, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{scroll_guard, AnimatedSpinner};
use chrono::NaiveDate;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};
use news_card::Variant;
use section_header::Accent;

#[derive(Debug, Clone)]
pub enum Message {
    SelectArticle(NewsId),
    CloseArticle,
    Reload,
    ToggleArchive,
    ToggleErrorDetails,
    EmailChanged(String),
    Subscribe,
    CopyLink,
    ShareTelegram,
    SwitchLanguage,
}

/// Effects the application has to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Start a new fetch.
    Reload,
    /// Put this URL on the clipboard.
    CopyLink(String),
    /// Publish this story to Telegram.
    Share(NewsId),
    /// A well-formed address was submitted.
    Subscribed(String),
    InvalidEmail,
    SwitchLanguage,
}

#[derive(Debug, Default)]
pub struct State {
    pub edition: EditionState,
    pub ticker: TickerState,
    email: String,
}

impl State {
    #[must_use]
    pub fn new(headlines: Vec<String>) -> Self {
        Self {
            edition: EditionState::new(),
            ticker: TickerState::new(headlines),
            email: String::new(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SelectArticle(id) => {
            if !state.edition.select(&id) {
                tracing::debug!(%id, "ignoring selection of unknown story");
            }
            Event::None
        }
        Message::CloseArticle => {
            state.edition.close();
            Event::None
        }
        Message::Reload => {
            if state.edition.reload() {
                Event::Reload
            } else {
                Event::None
            }
        }
        Message::ToggleArchive => {
            state.edition.toggle_archive();
            Event::None
        }
        Message::ToggleErrorDetails => {
            state.edition.toggle_error_details();
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::Subscribe => {
            let address = state.email.trim();
            if sidebar::is_valid_email(address) {
                let address = address.to_string();
                state.email.clear();
                Event::Subscribed(address)
            } else {
                Event::InvalidEmail
            }
        }
        Message::CopyLink => state
            .edition
            .selected()
            .map_or(Event::None, |item| Event::CopyLink(item.url.clone())),
        Message::ShareTelegram => state
            .edition
            .selected()
            .map_or(Event::None, |item| Event::Share(item.id.clone())),
        Message::SwitchLanguage => Event::SwitchLanguage,
    }
}

/// Everything the view needs beyond the component state.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
    pub today: NaiveDate,
    /// Window is at least [`layout::WIDE_BREAKPOINT`] wide.
    pub wide: bool,
    pub share_enabled: bool,
    pub spinner_rotation: f32,
}

/// Full-width ink rule.
fn rule<'a>(height: f32) -> Element<'a, Message> {
    Container::new(
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(height)),
    )
    .width(Length::Fill)
    .style(styles::container::rule)
    .into()
}

fn loading_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(AnimatedSpinner::new(ctx.spinner_rotation).into_element())
            .push(
                Text::new(ctx.i18n.tr("loading-drawing"))
                    .size(typography::HEADLINE_LG)
                    .font(typography::HEADLINE_FONT),
            ),
    )
    .width(Length::Fill)
    .padding([spacing::XXL * 2.0, spacing::MD])
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn error_view<'a>(
    error: &crate::error::FetchError,
    show_details: bool,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let details = format!("{}\n{}", i18n.tr(error.i18n_key()), error);

    Container::new(centered_error_view(
        ErrorDisplay::new()
            .title(i18n.tr("error-press-jammed-title"))
            .message(i18n.tr("error-press-jammed-message"))
            .details(details)
            .details_visible(show_details)
            .details_labels(i18n.tr("error-details-show"), i18n.tr("error-details-hide"))
            .action(i18n.tr("error-reload"), Message::Reload)
            .on_toggle_details(Message::ToggleErrorDetails),
    ))
    .width(Length::Fill)
    .padding([spacing::XL, 0.0])
    .into()
}

fn divider<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Container::new(
        Text::new(ctx.i18n.tr("divider-meanwhile"))
            .size(typography::HEADLINE_LG)
            .font(typography::HEADLINE_FONT),
    )
    .padding([spacing::XXS, spacing::LG])
    .style(styles::container::card);

    Row::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .padding([spacing::XL, 0.0])
        .push(Container::new(rule(border::WIDTH_SM)).width(Length::Fill))
        .push(label)
        .push(Container::new(rule(border::WIDTH_SM)).width(Length::Fill))
        .into()
}

/// Lays `cards` out in rows of `columns`, padding the last row.
fn card_grid<'a>(cards: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut grid = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
    let mut in_row = 0;

    for card in cards {
        row = row.push(Container::new(card).width(Length::FillPortion(1)));
        in_row += 1;
        if in_row == columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::LG).width(Length::Fill);
            in_row = 0;
        }
    }
    if in_row > 0 {
        for _ in in_row..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }
    grid.into()
}

fn main_column<'a>(page: FrontPage<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().width(Length::Fill).push(section_header::view(
        ctx.i18n.tr("section-front-page"),
        Accent::Red,
        false,
    ));

    if let Some(hero) = page.hero() {
        column = column.push(news_card::view(hero, Variant::Hero, ctx));
    }

    let strip = page.daily_strip();
    if !strip.is_empty() {
        let columns = if ctx.wide { layout::STRIP_COLUMNS } else { 1 };
        column = column
            .push(divider(ctx))
            .push(section_header::view(
                ctx.i18n.tr("section-daily-strip"),
                Accent::Blue,
                false,
            ))
            .push(card_grid(
                strip
                    .iter()
                    .map(|item| news_card::view(item, Variant::Standard, ctx))
                    .collect(),
                columns,
            ));
    }

    column.into()
}

fn archive<'a>(page: FrontPage<'a>, open: bool, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let star = Container::new(
        Text::new("\u{2605}")
            .size(typography::HEADLINE_LG)
            .font(typography::HEADLINE_FONT),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::wash(|c| c.wash_red));

    let count = page.archive().len().to_string();
    let toggle_key = if open {
        "archive-hide"
    } else {
        "archive-show"
    };
    let toggle = button(
        Text::new(ctx.i18n.tr_with_args(toggle_key, &[("count", count.as_str())]))
            .size(typography::BODY)
            .font(typography::BOLD_FONT),
    )
    .padding([spacing::XS, spacing::MD])
    .on_press(Message::ToggleArchive)
    .style(styles::button::secondary);

    let mut column = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .padding([spacing::XXL, 0.0])
        .push(rule(border::WIDTH_XL))
        .push(rule(border::WIDTH_SM))
        .push(star)
        .push(section_header::view(
            ctx.i18n.tr("section-archive"),
            Accent::Purple,
            true,
        ))
        .push(toggle);

    if open {
        let columns = if ctx.wide {
            layout::ARCHIVE_COLUMNS_WIDE
        } else {
            layout::ARCHIVE_COLUMNS_NARROW
        };
        column = column.push(card_grid(
            page.archive()
                .iter()
                .map(|item| news_card::view(item, Variant::Standard, ctx))
                .collect(),
            columns,
        ));
    }

    column.into()
}

fn edition_view<'a>(
    state: &'a State,
    page: FrontPage<'a>,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let main = main_column(page, ctx);
    let side = sidebar::view(page.side(), state.email(), ctx);

    let columns: Element<'a, Message> = if ctx.wide {
        Row::new()
            .spacing(spacing::XL)
            .push(Container::new(main).width(Length::FillPortion(8)))
            .push(Container::new(side).width(Length::FillPortion(4)))
            .into()
    } else {
        Column::new().spacing(spacing::XL).push(main).push(side).into()
    };

    let mut column = Column::new().width(Length::Fill).push(columns);
    if page.has_archive() {
        column = column.push(archive(page, state.edition.archive_open(), ctx));
    }
    column.into()
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match state.edition.load_state() {
        LoadState::Loading => loading_view(&ctx),
        LoadState::Failed(error) => {
            error_view(error, state.edition.error_details_visible(), &ctx)
        }
        LoadState::Ready(edition) => edition_view(state, edition.front_page(), &ctx),
    };

    let content = Container::new(
        Column::new()
            .width(Length::Fill)
            .spacing(spacing::MD)
            .push(masthead::view(&ctx))
            .push(body),
    )
    .width(Length::Fill)
    .max_width(sizing::PAGE_MAX_WIDTH)
    .padding([0.0, spacing::LG]);

    let page = Column::new()
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(rule(spacing::MD))
        .push(ticker::view(&state.ticker, &ctx))
        .push(content)
        .push(Space::new().height(Length::Fixed(spacing::XXL)))
        .push(footer::view(&ctx));

    let scrolling = scroll_guard(
        scrollable(page).width(Length::Fill).height(Length::Fill),
        state.edition.is_scroll_locked(),
    );

    let background = Container::new(scrolling)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    match state.edition.selected() {
        Some(item) => Stack::new()
            .push(background)
            .push(article_modal::view(item, &ctx))
            .into(),
        None => background.into(),
    }
}
