// SPDX-License-Identifier: MPL-2.0
//! Trending topics extracted from the current edition.

use super::NewsItem;

/// Default number of topics surfaced in the ticker.
pub const DEFAULT_TOPIC_LIMIT: usize = 5;

/// Keywords tracked for trending detection, in canonical spelling.
pub const KEYWORDS: &[&str] = &[
    "GPT",
    "LLM",
    "ChatGPT",
    "OpenAI",
    "Google AI",
    "Microsoft",
    "Meta AI",
    "machine learning",
    "deep learning",
    "neural network",
    "automation",
    "robotics",
    "computer vision",
    "natural language processing",
    "AI ethics",
    "generative AI",
    "AI regulation",
    "AI startup",
    "AI investment",
];

/// Returns up to `limit` keywords ordered by the number of items mentioning them.
///
/// Each item counts at most once per keyword. Ties keep the order in which the
/// keyword was first encountered while scanning the edition.
#[must_use]
pub fn trending_topics(items: &[NewsItem], limit: usize) -> Vec<&'static str> {
    // (keyword, count) in first-seen order
    let mut counts: Vec<(&'static str, usize)> = Vec::new();

    for item in items {
        let haystack = format!("{} {}", item.title, item.summary).to_lowercase();
        for &keyword in KEYWORDS {
            if haystack.contains(&keyword.to_lowercase()) {
                match counts.iter_mut().find(|(k, _)| *k == keyword) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((keyword, 1)),
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(k, _)| k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::NewsId;

    fn story(id: &str, title: &str, summary: &str) -> NewsItem {
        NewsItem::new(NewsId::new(id).unwrap(), title, summary, "", "test")
    }

    #[test]
    fn empty_edition_has_no_topics() {
        assert!(trending_topics(&[], DEFAULT_TOPIC_LIMIT).is_empty());
    }

    #[test]
    fn counts_are_case_insensitive() {
        let items = vec![
            story("1", "ROBOTICS boom", ""),
            story("2", "", "new robotics lab"),
            story("3", "OpenAI ships", ""),
        ];
        assert_eq!(trending_topics(&items, 5), ["robotics", "OpenAI"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let items = vec![
            story("1", "Microsoft and automation", ""),
            story("2", "LLM news", ""),
        ];
        assert_eq!(
            trending_topics(&items, 5),
            ["Microsoft", "automation", "LLM"]
        );
    }

    #[test]
    fn overlapping_keywords_both_count() {
        // "ChatGPT" also contains "GPT".
        let items = vec![story("1", "ChatGPT runs for mayor", "")];
        assert_eq!(trending_topics(&items, 5), ["GPT", "ChatGPT"]);
    }

    #[test]
    fn limit_is_respected() {
        let items = vec![story(
            "1",
            "GPT LLM OpenAI Microsoft automation robotics",
            "",
        )];
        assert_eq!(trending_topics(&items, 2).len(), 2);
    }
}
