//! Core domain types for the Kerbside relevance engine.
//!
//! The crate defines the data model shared by every other member of the
//! workspace: candidate [`ContentItem`]s, the [`UserProfile`] they are ranked
//! against, the [`ScoreBreakdown`] attached to each result, and the
//! [`RelevanceRanker`] trait implemented by scorers. It also hosts the small
//! pure utilities the scorers build on: great-circle distance, corpus
//! statistics, and string-similarity primitives.
//!
//! Everything here is synchronous and performs no I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod corpus;
pub mod geo;
mod item;
mod profile;
mod score;
pub mod text;

pub use corpus::CorpusStatistics;
pub use geo::haversine_km;
pub use item::ContentItem;
pub use profile::{BehaviorProfile, UserLocation, UserProfile};
pub use score::{RelevanceRanker, ScoreBreakdown, ScoredItem, sanitise};
