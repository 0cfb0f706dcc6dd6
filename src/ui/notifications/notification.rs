// SPDX-License-Identifier: MPL-2.0
//! Toast payloads and their severities.

use crate::ui::theming::ColorScheme;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity picks the stamp colour and how long the toast stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Stamp colour taken from the active edition.
    #[must_use]
    pub fn color(self, colors: &ColorScheme) -> Color {
        match self {
            Severity::Success => colors.success,
            Severity::Info => colors.info,
            Severity::Warning => colors.warning,
            Severity::Error => colors.error,
        }
    }

    /// Short marker printed in the toast stamp.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "OK",
            Severity::Info => "i",
            Severity::Warning => "!",
            Severity::Error => "X",
        }
    }

    #[must_use]
    pub fn display_duration(self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
            Severity::Error => Duration::from_secs(8),
        }
    }
}

/// A toast waiting to be shown or currently on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Fluent key resolved at render time so a language switch applies.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the toast has been visible for its full duration at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.severity.display_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = ColorScheme::day();
        let all = [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.color(&colors), b.color(&colors));
            }
        }
    }

    #[test]
    fn errors_stay_longest() {
        assert!(Severity::Error.display_duration() > Severity::Warning.display_duration());
        assert!(Severity::Warning.display_duration() > Severity::Success.display_duration());
    }

    #[test]
    fn expiry_follows_severity_duration() {
        let toast = Notification::success("notification-link-copied");
        let shown = toast.created_at;
        assert!(!toast.is_expired(shown + Duration::from_secs(1)));
        assert!(toast.is_expired(shown + Duration::from_secs(3)));
    }

    #[test]
    fn builder_collects_arguments() {
        let notification = Notification::error("notification-share-failed")
            .with_arg("reason", "chat not found");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "notification-share-failed");
        assert_eq!(
            notification.message_args(),
            &[("reason".to_string(), "chat not found".to_string())]
        );
    }
}
