// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! # Components
//!
//! - [`error_display`] - Failure panel with a reload action and expandable
//!   technical details
//! - [`illustration`] - Story image with loading and missing placeholders

pub mod error_display;
pub mod illustration;
