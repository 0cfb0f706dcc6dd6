// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: components own
//! their state, render from it, and report [`front_page::Event`]s that the
//! application turns into side effects.
//!
//! # Screens
//!
//! - [`front_page`] - The newspaper page and its article modal
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error panel, illustrations)
//! - [`widgets`] - Custom Iced widgets (press spinner, scroll guard)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Day/night color schemes and Light/Dark/System mode
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod front_page;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
