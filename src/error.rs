// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchError),
    Share(ShareError),
}

/// Reasons the daily edition could not be fetched.
///
/// The front page only ever shows one static message for any of these; the
/// variants exist for logging and for the technical details toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    Network(String),

    /// The server answered with a non-success status code.
    HttpStatus { url: String, status: u16 },

    /// The feed body could not be parsed.
    Parse(String),

    /// An item violated the edition invariants (e.g. empty identifier).
    InvalidItem(String),

    /// Every configured source failed.
    AllSourcesFailed,
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "error-fetch-network",
            FetchError::HttpStatus { .. } => "error-fetch-http-status",
            FetchError::Parse(_) => "error-fetch-parse",
            FetchError::InvalidItem(_) => "error-fetch-invalid-item",
            FetchError::AllSourcesFailed => "error-fetch-all-sources",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::HttpStatus { url, status } => {
                write!(f, "HTTP status {} from {}", status, url)
            }
            FetchError::Parse(msg) => write!(f, "Feed parse error: {}", msg),
            FetchError::InvalidItem(msg) => write!(f, "Invalid news item: {}", msg),
            FetchError::AllSourcesFailed => write!(f, "All news sources failed"),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<quick_xml::Error> for FetchError {
    fn from(err: quick_xml::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Failures while sharing an article to an external channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// Sharing was requested but no channel is configured.
    NotConfigured,

    /// Transport-level failure.
    Network(String),

    /// The remote API rejected the message.
    Rejected { status: u16, description: String },
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::NotConfigured => write!(f, "Sharing is not configured"),
            ShareError::Network(msg) => write!(f, "Network error: {}", msg),
            ShareError::Rejected {
                status,
                description,
            } => write!(f, "Rejected with status {}: {}", status, description),
        }
    }
}

impl From<reqwest::Error> for ShareError {
    fn from(err: reqwest::Error) -> Self {
        ShareError::Network(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Share(e) => write!(f, "Share Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<ShareError> for Error {
    fn from(err: ShareError) -> Self {
        Error::Share(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
