// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: the front page with the toast
//! overlay stacked on top.

use super::Message;
use crate::i18n::I18n;
use crate::news::images::ImageCache;
use crate::ui::front_page;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub front_page: &'a front_page::State,
    pub images: &'a ImageCache,
    pub notifications: &'a Manager,
    pub wide: bool,
    pub share_enabled: bool,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = front_page::view(
        ctx.front_page,
        front_page::ViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
            today: chrono::Local::now().date_naive(),
            wide: ctx.wide,
            share_enabled: ctx.share_enabled,
            spinner_rotation: ctx.spinner_rotation,
        },
    )
    .map(Message::FrontPage);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(page)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
