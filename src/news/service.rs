// SPDX-License-Identifier: MPL-2.0
//! The fetch call behind the front page.
//!
//! [`NewsService`] is the single seam the application depends on. Two
//! implementations ship with the crate:
//!
//! - [`FeedAggregator`] pulls RSS/Atom feeds over a [`Transport`]
//! - [`StaticEdition`] serves a built-in edition (`--offline`)

use super::feed::parse_feed;
use super::transport::Transport;
use super::{NewsId, NewsItem};
use crate::error::FetchError;
use chrono::{TimeZone, Utc};
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Returns the day's news items or fails as a whole.
pub trait NewsService: Send + Sync {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<NewsItem>, FetchError>>;
}

/// A named feed URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Fetches every configured feed in turn and merges the results.
pub struct FeedAggregator<T: Transport> {
    transport: Arc<T>,
    sources: Arc<[FeedSource]>,
    max_articles: usize,
    request_delay: Duration,
}

impl<T: Transport + 'static> FeedAggregator<T> {
    pub fn new(
        transport: T,
        sources: Vec<FeedSource>,
        max_articles: usize,
        request_delay: Duration,
    ) -> Self {
        Self {
            transport: Arc::new(transport),
            sources: sources.into(),
            max_articles,
            request_delay,
        }
    }

    /// Number of items requested from each source.
    #[must_use]
    pub fn per_source_quota(&self) -> usize {
        if self.sources.is_empty() {
            return self.max_articles.max(1);
        }
        (self.max_articles / self.sources.len()).max(1)
    }

    #[must_use]
    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }
}

impl<T: Transport + 'static> NewsService for FeedAggregator<T> {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<NewsItem>, FetchError>> {
        let transport = Arc::clone(&self.transport);
        let sources = Arc::clone(&self.sources);
        let quota = self.per_source_quota();
        let max_articles = self.max_articles;
        let delay = self.request_delay;

        Box::pin(async move {
            let mut collected = Vec::new();
            let mut succeeded = 0usize;

            for (index, source) in sources.iter().enumerate() {
                if index > 0 && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }

                let result = match transport.get_text(&source.url).await {
                    Ok(body) => parse_feed(&body, &source.name, quota),
                    Err(err) => Err(err),
                };

                match result {
                    Ok(items) => {
                        tracing::debug!(source = %source.name, count = items.len(), "feed fetched");
                        succeeded += 1;
                        collected.extend(items);
                    }
                    Err(err) => {
                        tracing::warn!(source = %source.name, error = %err, "skipping feed");
                    }
                }
            }

            if succeeded == 0 {
                return Err(FetchError::AllSourcesFailed);
            }

            Ok(merge(collected, max_articles))
        })
    }
}

/// Orders by publication date (newest first, undated last), drops duplicate
/// ids and keeps at most `max_articles` items.
fn merge(mut items: Vec<NewsItem>, max_articles: usize) -> Vec<NewsItem> {
    items.sort_by(|a, b| match (a.published, b.published) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.id.clone()));
    items.truncate(max_articles);
    items
}

/// A fixed edition that needs no network.
#[derive(Debug, Clone)]
pub struct StaticEdition {
    items: Arc<[NewsItem]>,
}

impl StaticEdition {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// The built-in sample edition.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_items())
    }
}

impl NewsService for StaticEdition {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<NewsItem>, FetchError>> {
        let items = self.items.to_vec();
        Box::pin(async move { Ok(items) })
    }
}

const SAMPLE_STORIES: &[(&str, &str, &str, &str)] = &[
    (
        "AI Refuses To Draw Hands Correctly, Cites Artistic Freedom",
        "The latest image model has released a statement defending its six-fingered portraits as a bold new movement.",
        "Generative AI",
        "comic_wire",
    ),
    (
        "ChatGPT Runs For Mayor In SimCity",
        "Campaign promises include infinite zoning permits and a monorail on every block.",
        "LLM",
        "comic_wire",
    ),
    (
        "New Algorithm Predicts Meme Trends Three Days Early",
        "Researchers warn the model is already bored of memes that have not been invented yet.",
        "Machine Learning",
        "lab_notes",
    ),
    (
        "Scientists Teach Robot To Feel Existential Dread",
        "The robotics team reports the unit now stares out of the lab window for hours.",
        "Robotics",
        "lab_notes",
    ),
    (
        "GPU Stock Used As Global Currency",
        "Economists are divided on whether a graphics card counts as a reserve asset.",
        "Markets",
        "market_sketch",
    ),
    (
        "Open Source LLM Writes Its Own Changelog",
        "Maintainers admit the release notes are now more readable than the code.",
        "LLM",
        "dev_digest",
    ),
    (
        "Deep Learning Model Finally Understands Sarcasm. Great.",
        "Early testers are thrilled. Really. Absolutely thrilled.",
        "Deep Learning",
        "lab_notes",
    ),
    (
        "Automation Startup Automates Its Own Pitch Deck",
        "Investors were impressed until the deck asked for a bigger valuation.",
        "AI Startup",
        "market_sketch",
    ),
    (
        "Computer Vision System Mistakes Office Plant For Manager",
        "Staff report the plant gives clearer feedback.",
        "Computer Vision",
        "comic_wire",
    ),
    (
        "AI Regulation Drafted Entirely In Emoji",
        "Lawmakers say the new framework is concise and deeply open to interpretation.",
        "AI Regulation",
        "policy_panel",
    ),
];

fn sample_items() -> Vec<NewsItem> {
    SAMPLE_STORIES
        .iter()
        .enumerate()
        .filter_map(|(index, (title, summary, category, source))| {
            let id = NewsId::new(format!("sample-{}", index + 1)).ok()?;
            let mut item = NewsItem::new(
                id,
                *title,
                *summary,
                format!("https://comicdaily.example/stories/{}", index + 1),
                *source,
            )
            .with_category(*category);
            let day = u32::try_from(SAMPLE_STORIES.len() - index).unwrap_or(1);
            item.published = Utc.with_ymd_and_hms(2025, 3, day, 8, 0, 0).single();
            Some(item)
        })
        .collect()
}
