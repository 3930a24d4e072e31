//! Facade crate for the Kerbside relevance engine.
//!
//! This crate re-exports the core domain types, the composite scorer, and,
//! behind the default-on `registry` feature, the canonical topic matcher.

#![forbid(unsafe_code)]

pub use kerbside_core::{
    BehaviorProfile, ContentItem, CorpusStatistics, RelevanceRanker, ScoreBreakdown, ScoredItem,
    UserLocation, UserProfile, haversine_km, sanitise,
};
pub use kerbside_scorer::{
    CompositeScorer, ExpansionEngine, InterestExpansion, SignalWeights, WeightsError,
};

#[cfg(feature = "registry")]
pub use kerbside_registry::{
    HttpTopicSource, HttpTopicSourceConfig, MatchResult, SourceBuildError, TopicEntry,
    TopicMatcher, TopicSource, TopicSourceError,
};
