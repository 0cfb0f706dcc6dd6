// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short-lived messages for actions such as copying a link or sharing a
//! story. Messages are Fluent keys resolved when drawn, so switching
//! language also translates toasts already on screen.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-link-copied"));
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
