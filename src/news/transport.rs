// SPDX-License-Identifier: MPL-2.0
//! HTTP access used by the news services.
//!
//! The [`Transport`] trait keeps the services independent of `reqwest` so that
//! tests can serve canned feeds.

use crate::error::FetchError;
use futures_util::future::BoxFuture;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("ComicDaily/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed per request.
const MAX_REDIRECTS: usize = 10;

/// Minimal HTTP GET interface.
pub trait Transport: Send + Sync {
    /// Fetches a text body (feeds).
    fn get_text(&self, url: &str) -> BoxFuture<'static, Result<String, FetchError>>;

    /// Fetches a binary body (images).
    fn get_bytes(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client with an explicit redirect policy and user agent.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    async fn get(client: reqwest::Client, url: String) -> Result<reqwest::Response, FetchError> {
        let response = client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

impl Transport for ReqwestTransport {
    fn get_text(&self, url: &str) -> BoxFuture<'static, Result<String, FetchError>> {
        let client = self.client.clone();
        let url = url.to_string();
        Box::pin(async move {
            let response = Self::get(client, url).await?;
            Ok(response.text().await?)
        })
    }

    fn get_bytes(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
        let client = self.client.clone();
        let url = url.to_string();
        Box::pin(async move {
            let response = Self::get(client, url).await?;
            Ok(response.bytes().await?.to_vec())
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// In-memory transport: URL → canned response, with a request log.
    #[derive(Debug, Clone, Default)]
    pub struct FakeTransport {
        responses: Arc<HashMap<String, Result<Vec<u8>, FetchError>>>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl FakeTransport {
        pub fn new(responses: Vec<(&str, Result<&str, FetchError>)>) -> Self {
            let responses = responses
                .into_iter()
                .map(|(url, body)| (url.to_string(), body.map(|b| b.as_bytes().to_vec())))
                .collect();
            Self {
                responses: Arc::new(responses),
                requests: Arc::default(),
            }
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn respond(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(FetchError::HttpStatus {
                    url: url.to_string(),
                    status: 404,
                }))
        }
    }

    impl Transport for FakeTransport {
        fn get_text(&self, url: &str) -> BoxFuture<'static, Result<String, FetchError>> {
            let result = self
                .respond(url)
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
            Box::pin(async move { result })
        }

        fn get_bytes(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
            let result = self.respond(url);
            Box::pin(async move { result })
        }
    }
}
