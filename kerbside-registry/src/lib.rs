//! Canonical topic matching for the Kerbside relevance engine.
//!
//! Ingestion-time processing extracts free-text keywords from content and
//! needs them resolved to stable identifiers in an external topic registry.
//! This crate provides:
//! - [`TopicSource`], the async seam to the registry, with an HTTP
//!   implementation in [`HttpTopicSource`];
//! - [`TopicMatcher`], a read-through cache over the registry's
//!   title-to-identifier enumeration with exact, synonym, containment, and
//!   edit-distance resolution stages.
//!
//! Matching never raises registry failures to the caller: a fetch that
//! fails, stalls, or returns nothing degrades to the last good snapshot or a
//! fixed default topic set.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod http;
mod matcher;
mod source;

pub use http::{DEFAULT_USER_AGENT, HttpTopicSource, HttpTopicSourceConfig, SourceBuildError};
pub use matcher::{MatchResult, TopicMatcher};
pub use source::{TopicEntry, TopicSource, TopicSourceError};
