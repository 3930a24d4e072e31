//! The seam between the topic matcher and the external registry.
//!
//! The `TopicSource` trait abstracts the enumeration read the matcher uses
//! to build its cache. The registry is eventually consistent and may return
//! partial or empty results on any given read; the matcher treats both as a
//! signal to fall back, never as an error to surface.
#![forbid(unsafe_code)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One canonical topic owned by the external registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    /// Stable registry identifier.
    pub id: String,
    /// Canonical display title.
    pub title: String,
    /// URL-safe slug.
    pub slug: String,
}

impl TopicEntry {
    /// Construct an entry from its parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
        }
    }
}

/// Errors from [`TopicSource::fetch_topics`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicSourceError {
    /// The registry could not be reached.
    #[error("failed to reach the topic registry at {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport-level detail.
        message: String,
    },
    /// The registry answered with a non-success status.
    #[error("topic registry at {url} answered {status}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The registry payload could not be decoded.
    #[error("topic registry response could not be parsed: {message}")]
    Parse {
        /// Decoder detail.
        message: String,
    },
}

/// Fetch the full topic enumeration from the external registry.
///
/// Implementations should apply their own transport timeouts; the matcher
/// additionally bounds every fetch so a slow registry degrades to the
/// fallback set rather than blocking matching.
#[async_trait]
pub trait TopicSource: Send + Sync {
    /// Return every topic the registry currently knows about.
    async fn fetch_topics(&self) -> Result<Vec<TopicEntry>, TopicSourceError>;
}
