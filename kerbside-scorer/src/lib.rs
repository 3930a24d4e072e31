//! Scoring for the Kerbside relevance engine.
//!
//! The crate provides two complementary capabilities:
//! - **Semantic interest expansion** turns raw user keywords into broader
//!   term sets using a static multi-language knowledge base plus generated
//!   lexical variants, and measures similarity between keywords.
//! - **Composite scoring** ranks candidate items against a user profile by
//!   weighting six independent signals (lexical, categorical, recency,
//!   quality, geographic, and behavioural) and applying a distance-tier
//!   proximity boost. It implements the
//!   [`RelevanceRanker`](kerbside_core::RelevanceRanker) trait so callers can
//!   plug the scorer into their discovery pipeline.
//!
//! # Examples
//!
//! ```
//! use kerbside_core::{ContentItem, UserProfile};
//! use kerbside_scorer::CompositeScorer;
//!
//! let scorer = CompositeScorer::new();
//! let items = vec![
//!     ContentItem::new("a", "Robotics fair", "Chatbots on show", 0, "citydesk")
//!         .with_topics(["tech"]),
//! ];
//! let ranked = scorer.rank(&items, &UserProfile::new(["ai"]), 0);
//! assert_eq!(ranked.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod composite;
mod expansion;
mod knowledge;
mod weights;

pub use composite::CompositeScorer;
pub use expansion::{ExpansionEngine, InterestExpansion};
pub use weights::{SignalWeights, WeightsError};
