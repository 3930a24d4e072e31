//! HTTP-backed [`TopicSource`] for a key-value style topic registry.
//!
//! The registry exposes a single enumeration endpoint returning the full
//! title-to-identifier mapping as JSON. The client is deliberately plain: one
//! GET, JSON decoding, and typed error conversion. Bounding the wait is the
//! matcher's job, though the client carries its own transport timeout as a
//! second line of defence.
#![forbid(unsafe_code)]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::source::{TopicEntry, TopicSource, TopicSourceError};

/// Default user agent for registry requests.
pub const DEFAULT_USER_AGENT: &str = "kerbside-registry/0.1";

/// Default transport timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Error raised when the HTTP client cannot be built.
#[derive(Debug, Error)]
pub enum SourceBuildError {
    /// Failed to build the underlying HTTP client.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Configuration for [`HttpTopicSource`].
#[derive(Debug, Clone)]
pub struct HttpTopicSourceConfig {
    /// Base URL for the registry (e.g. `"http://localhost:8085"`).
    pub base_url: String,
    /// Transport timeout for each request.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpTopicSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8085".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpTopicSourceConfig {
    /// Create a configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the transport timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Wire shape of the registry enumeration endpoint.
#[derive(Debug, Deserialize)]
struct TopicsResponse {
    topics: Vec<TopicEntry>,
}

/// [`TopicSource`] reading the registry over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTopicSource {
    client: Client,
    config: HttpTopicSourceConfig,
}

impl HttpTopicSource {
    /// Create a source with default configuration.
    ///
    /// # Errors
    /// Returns [`SourceBuildError`] when the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceBuildError> {
        Self::with_config(HttpTopicSourceConfig::new(base_url))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    /// Returns [`SourceBuildError`] when the HTTP client fails to build.
    pub fn with_config(config: HttpTopicSourceConfig) -> Result<Self, SourceBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(SourceBuildError::HttpClient)?;
        Ok(Self { client, config })
    }

    /// The enumeration endpoint URL.
    fn topics_url(&self) -> String {
        format!(
            "{}/topics/v1/all",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn convert_reqwest_error(error: &reqwest::Error, url: &str) -> TopicSourceError {
        error.status().map_or_else(
            || TopicSourceError::Network {
                url: url.to_owned(),
                message: error.to_string(),
            },
            |status| TopicSourceError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
            },
        )
    }
}

#[async_trait]
impl TopicSource for HttpTopicSource {
    async fn fetch_topics(&self) -> Result<Vec<TopicEntry>, TopicSourceError> {
        let url = self.topics_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| Self::convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| Self::convert_reqwest_error(&err, &url))?;

        let payload: TopicsResponse =
            response
                .json()
                .await
                .map_err(|err| TopicSourceError::Parse {
                    message: err.to_string(),
                })?;
        Ok(payload.topics)
    }
}
