// SPDX-License-Identifier: MPL-2.0
//! News domain: items, the fetched edition, and how it is laid out.
//!
//! # Modules
//!
//! - [`layout`] - Fixed index partition into hero, side, and grid stories
//! - [`feed`] - RSS 2.0 / Atom parsing
//! - [`topics`] - Keyword-based trending topics for the ticker
//! - [`service`] - The fetch call (`NewsService`) and its implementations
//! - [`transport`] - HTTP access used by the services
//! - [`images`] - LRU cache for card illustrations
//!
//! An [`Edition`] is created wholesale by one fetch and never mutated; the
//! order of its items decides where each story lands on the page.

pub mod feed;
pub mod images;
pub mod layout;
pub mod service;
pub mod topics;
pub mod transport;

pub use layout::FrontPage;
pub use service::{FeedAggregator, NewsService, StaticEdition};

use crate::error::FetchError;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt;

/// Summaries longer than this are cut on a character boundary.
pub const MAX_SUMMARY_CHARS: usize = 500;

/// Category assigned when a feed does not provide one.
pub const DEFAULT_CATEGORY: &str = "AI";

/// Identifier of a news item, unique within one edition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NewsId(String);

impl NewsId {
    /// Creates an identifier, rejecting empty or whitespace-only values.
    pub fn new(value: impl Into<String>) -> Result<Self, FetchError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(FetchError::InvalidItem("empty identifier".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single story as delivered by the news service.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub image_url: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub source: String,
    pub category: String,
}

impl NewsItem {
    /// Creates an item with the default category and no image or date.
    pub fn new(
        id: NewsId,
        title: impl Into<String>,
        summary: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            summary: truncate_chars(&summary.into(), MAX_SUMMARY_CHARS),
            url: url.into(),
            image_url: None,
            published: None,
            source: source.into(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_published(mut self, published: DateTime<Utc>) -> Self {
        self.published = Some(published);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// The immutable sequence produced by one fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Edition {
    items: Vec<NewsItem>,
}

impl Edition {
    /// Builds an edition, keeping the first occurrence of each identifier.
    ///
    /// Order is preserved; later duplicates are dropped.
    pub fn new(items: Vec<NewsItem>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let mut kept = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.id.clone()) {
                kept.push(item);
            } else {
                tracing::warn!(id = %item.id, "dropping duplicate news item");
            }
        }
        Self { items: kept }
    }

    #[must_use]
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &NewsId) -> Option<&NewsItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &NewsId) -> bool {
        self.get(id).is_some()
    }

    /// Borrowed layout view of this edition.
    #[must_use]
    pub fn front_page(&self) -> FrontPage<'_> {
        FrontPage::new(&self.items)
    }
}

/// Truncates `text` to at most `max` characters without splitting a code point.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds an item whose id, title and url all derive from `n`.
    pub fn item(n: usize) -> NewsItem {
        NewsItem::new(
            NewsId::new(format!("story-{n}")).expect("non-empty id"),
            format!("Story {n}"),
            format!("Summary of story {n}"),
            format!("https://example.com/{n}"),
            "test",
        )
    }

    pub fn items(count: usize) -> Vec<NewsItem> {
        (0..count).map(item).collect()
    }
}
