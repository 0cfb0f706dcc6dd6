// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Feeds**: Sources, article count, and politeness delay
//! - **Ticker**: Built-in headlines and rotation speed
//! - **Images**: Illustration cache size

use crate::news::service::FeedSource;

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Built-in feed list as `(name, url)` pairs.
pub const DEFAULT_FEED_SOURCES: &[(&str, &str)] = &[
    (
        "techcrunch_ai",
        "https://techcrunch.com/tag/artificial-intelligence/feed/",
    ),
    ("venturebeat_ai", "https://venturebeat.com/ai/feed/"),
    (
        "mit_news",
        "https://news.mit.edu/rss/topic/artificial-intelligence2",
    ),
    ("ai_news", "https://artificialintelligence-news.com/feed/"),
    (
        "the_verge_ai",
        "https://www.theverge.com/ai-artificial-intelligence/rss/index.xml",
    ),
];

/// Default number of articles in one edition.
pub const DEFAULT_MAX_ARTICLES: usize = 12;

/// Minimum number of articles in one edition.
pub const MIN_MAX_ARTICLES: usize = 1;

/// Maximum number of articles in one edition.
pub const MAX_MAX_ARTICLES: usize = 60;

/// Default pause between two feed requests (milliseconds).
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;

/// Upper bound for the pause between feed requests (milliseconds).
pub const MAX_REQUEST_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Ticker Defaults
// ==========================================================================

/// Headlines shown in the breaking-news ticker before trending topics.
pub const DEFAULT_TICKER_HEADLINES: &[&str] = &[
    "AI REFUSES TO DRAW HANDS CORRECTLY",
    "CHATGPT RUNS FOR MAYOR IN SIMCITY",
    "NEW ALGORITHM PREDICTS MEME TRENDS",
    "SCIENTISTS TEACH ROBOT TO FEEL EXISTENTIAL DREAD",
    "NVIDIA STOCK USED AS GLOBAL CURRENCY",
];

/// Default seconds between two ticker advances.
pub const DEFAULT_TICKER_ROTATE_SECS: u32 = 4;

/// Minimum seconds between two ticker advances.
pub const MIN_TICKER_ROTATE_SECS: u32 = 1;

/// Maximum seconds between two ticker advances.
pub const MAX_TICKER_ROTATE_SECS: u32 = 60;

// ==========================================================================
// Image Defaults
// ==========================================================================

pub use crate::news::images::{
    DEFAULT_CACHE_CAPACITY as DEFAULT_IMAGE_CACHE_CAPACITY,
    MAX_CACHE_CAPACITY as MAX_IMAGE_CACHE_CAPACITY,
    MIN_CACHE_CAPACITY as MIN_IMAGE_CACHE_CAPACITY,
};

/// Returns the built-in feed list.
#[must_use]
pub fn default_feed_sources() -> Vec<FeedSource> {
    DEFAULT_FEED_SOURCES
        .iter()
        .map(|(name, url)| FeedSource::new(*name, *url))
        .collect()
}

/// Returns the built-in ticker headlines.
#[must_use]
pub fn default_ticker_headlines() -> Vec<String> {
    DEFAULT_TICKER_HEADLINES
        .iter()
        .map(|h| (*h).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_bounds_are_consistent() {
        assert!(MIN_MAX_ARTICLES <= DEFAULT_MAX_ARTICLES);
        assert!(DEFAULT_MAX_ARTICLES <= MAX_MAX_ARTICLES);
    }

    #[test]
    fn default_edition_fills_the_archive() {
        // hero + 3 side + 4 strip leaves room for at least one archived story
        assert!(DEFAULT_MAX_ARTICLES > 8);
    }

    #[test]
    fn ticker_bounds_are_consistent() {
        assert!(MIN_TICKER_ROTATE_SECS <= DEFAULT_TICKER_ROTATE_SECS);
        assert!(DEFAULT_TICKER_ROTATE_SECS <= MAX_TICKER_ROTATE_SECS);
    }

    #[test]
    fn default_sources_are_https() {
        assert_eq!(default_feed_sources().len(), DEFAULT_FEED_SOURCES.len());
        assert!(default_feed_sources()
            .iter()
            .all(|s| s.url.starts_with("https://")));
    }
}
