// SPDX-License-Identifier: MPL-2.0
//! `comic_daily` renders a satirical AI newspaper front page with the Iced
//! GUI framework.
//!
//! One fetch fills an edition; its order decides which story becomes the
//! hero, which land in the sidebar, and which go to the daily strip or the
//! archive pile. Selecting a story opens it in a modal and locks page
//! scrolling until it is closed.

pub mod app;
pub mod error;
pub mod i18n;
pub mod news;
pub mod share;
pub mod ui;
