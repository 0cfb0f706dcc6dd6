// SPDX-License-Identifier: MPL-2.0
//! Telegram Bot API publisher.
//!
//! Messages are posted with `sendMessage` and formatted as
//! `title`, `summary`, `url` and hashtags separated by blank lines.

use crate::error::ShareError;
use crate::news::NewsItem;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://api.telegram.org";

/// Hashtags appended to every shared story.
pub const DEFAULT_HASHTAGS: &[&str] = &["#AI", "#TechNews"];

/// Posts articles to a single Telegram chat.
#[derive(Debug, Clone)]
pub struct TelegramPublisher {
    client: reqwest::Client,
    api_url: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    result: Option<SentMessage>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    message_id: i64,
}

impl TelegramPublisher {
    /// Creates a publisher, or [`ShareError::NotConfigured`] when either value
    /// is blank.
    pub fn new(bot_token: &str, chat_id: &str) -> Result<Self, ShareError> {
        let (bot_token, chat_id) = (bot_token.trim(), chat_id.trim());
        if bot_token.is_empty() || chat_id.is_empty() {
            return Err(ShareError::NotConfigured);
        }

        let client = reqwest::Client::builder()
            .user_agent(crate::news::transport::USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_url: format!("{API_BASE}/bot{bot_token}/sendMessage"),
            chat_id: chat_id.to_string(),
        })
    }

    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Sends `text` and returns the id of the created message.
    pub async fn send(self, text: String) -> Result<i64, ShareError> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text: &text,
        };
        let response = self.client.post(&self.api_url).json(&payload).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        parse_response(status, &body)
    }
}

/// Formats a story for posting.
#[must_use]
pub fn compose_message(item: &NewsItem, hashtags: &[String]) -> String {
    format!(
        "{}\n\n{}\n\n{}\n\n{}",
        item.title,
        item.summary,
        item.url,
        hashtags.join(" ")
    )
}

/// Default hashtags plus one derived from the story's category.
#[must_use]
pub fn hashtags_for(item: &NewsItem) -> Vec<String> {
    let mut tags: Vec<String> = DEFAULT_HASHTAGS.iter().map(|t| (*t).to_string()).collect();
    let category: String = item
        .category
        .split_whitespace()
        .collect::<String>()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    if !category.is_empty() {
        let tag = format!("#{category}");
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            tags.push(tag);
        }
    }
    tags
}

fn parse_response(status: u16, body: &str) -> Result<i64, ShareError> {
    match serde_json::from_str::<ApiResponse>(body).ok() {
        Some(ApiResponse {
            ok: true,
            result: Some(message),
            ..
        }) if status == 200 => Ok(message.message_id),
        Some(response) => Err(ShareError::Rejected {
            status,
            description: response
                .description
                .unwrap_or_else(|| "no description".to_string()),
        }),
        None => Err(ShareError::Rejected {
            status,
            description: body.chars().take(200).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::test_support::item;

    #[test]
    fn blank_credentials_are_not_configured() {
        assert_eq!(
            TelegramPublisher::new("", "42").unwrap_err(),
            ShareError::NotConfigured
        );
        assert_eq!(
            TelegramPublisher::new("token", "  ").unwrap_err(),
            ShareError::NotConfigured
        );
    }

    #[test]
    fn publisher_targets_send_message() {
        let publisher = TelegramPublisher::new("123:abc", "@daily").unwrap();
        assert_eq!(
            publisher.api_url,
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
        assert_eq!(publisher.chat_id(), "@daily");
    }

    #[test]
    fn message_layout() {
        let story = item(3);
        let text = compose_message(&story, &["#AI".to_string(), "#TechNews".to_string()]);
        assert_eq!(
            text,
            "Story 3\n\nSummary of story 3\n\nhttps://example.com/3\n\n#AI #TechNews"
        );
    }

    #[test]
    fn hashtags_include_category_once() {
        let story = item(0).with_category("Computer Vision");
        assert_eq!(hashtags_for(&story), ["#AI", "#TechNews", "#ComputerVision"]);

        // default category "AI" is already a default tag
        assert_eq!(hashtags_for(&item(0)), ["#AI", "#TechNews"]);
    }

    #[test]
    fn successful_response_yields_message_id() {
        let body = r#"{"ok":true,"result":{"message_id":77,"chat":{"id":1}}}"#;
        assert_eq!(parse_response(200, body), Ok(77));
    }

    #[test]
    fn api_error_is_rejected_with_description() {
        let body = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
        assert_eq!(
            parse_response(400, body),
            Err(ShareError::Rejected {
                status: 400,
                description: "Bad Request: chat not found".into()
            })
        );
    }

    #[test]
    fn non_json_body_is_rejected() {
        assert!(matches!(
            parse_response(502, "<html>Bad gateway</html>"),
            Err(ShareError::Rejected { status: 502, .. })
        ));
    }
}
