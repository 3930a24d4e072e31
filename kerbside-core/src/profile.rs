//! User profiles: declared interests, an optional location, and optional
//! learned behaviour.
//!
//! Interests are raw keywords; the scorer expands them semantically before
//! matching. Behaviour weights are clamped into `[0.0, 1.0]` on insertion so
//! downstream arithmetic never sees out-of-range affinities.

use std::collections::{HashMap, HashSet};

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the engine knows about one user for one ranking call.
///
/// # Examples
/// ```
/// use kerbside_core::UserProfile;
///
/// let profile = UserProfile::new(["food", "music"]);
/// assert_eq!(profile.interests.len(), 2);
/// assert!(profile.location.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserProfile {
    /// Raw interest keywords; duplicates are permitted.
    pub interests: Vec<String>,
    /// Where the user is, when known.
    pub location: Option<UserLocation>,
    /// Learned affinities, when available.
    pub behavior: Option<BehaviorProfile>,
}

impl UserProfile {
    /// Construct a profile from raw interest keywords.
    pub fn new<I, S>(interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interests: interests.into_iter().map(Into::into).collect(),
            location: None,
            behavior: None,
        }
    }

    /// Attach a location while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_location(mut self, location: UserLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach a behaviour profile.
    #[must_use]
    pub fn with_behavior(mut self, behavior: BehaviorProfile) -> Self {
        self.behavior = Some(behavior);
        self
    }
}

/// A user position with the radius inside which geographic relevance decays.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserLocation {
    /// WGS84 position, `x = longitude`, `y = latitude`.
    pub coord: Coord<f64>,
    /// Radius in kilometres; items farther than this score zero
    /// geographically.
    pub radius_km: f64,
}

impl UserLocation {
    /// Construct a location from a coordinate and a radius in kilometres.
    pub const fn new(coord: Coord<f64>, radius_km: f64) -> Self {
        Self { coord, radius_km }
    }
}

/// Learned topic and source affinities plus the user's bookmarks.
///
/// # Examples
/// ```
/// use kerbside_core::BehaviorProfile;
///
/// let behavior = BehaviorProfile::new()
///     .with_topic_weight("food", 0.9)
///     .with_source_weight("citydesk", 0.4)
///     .with_bookmark("a1");
/// assert_eq!(behavior.topic_weight("food"), Some(0.9));
/// assert!(behavior.is_bookmarked("a1"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BehaviorProfile {
    topic_weights: HashMap<String, f64>,
    source_weights: HashMap<String, f64>,
    bookmarks: HashSet<String>,
}

impl BehaviorProfile {
    /// Construct an empty behaviour profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the learned weight for a topic, if present.
    pub fn topic_weight(&self, topic: &str) -> Option<f64> {
        self.topic_weights.get(topic).copied()
    }

    /// Return the learned weight for a source, if present.
    pub fn source_weight(&self, source: &str) -> Option<f64> {
        self.source_weights.get(source).copied()
    }

    /// Report whether the item id is bookmarked.
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.contains(id)
    }

    /// Insert or update a topic weight, clamped into `0.0..=1.0`.
    pub fn set_topic_weight(&mut self, topic: impl Into<String>, weight: f64) {
        self.topic_weights
            .insert(topic.into(), weight.clamp(0.0, 1.0));
    }

    /// Insert or update a source weight, clamped into `0.0..=1.0`.
    pub fn set_source_weight(&mut self, source: impl Into<String>, weight: f64) {
        self.source_weights
            .insert(source.into(), weight.clamp(0.0, 1.0));
    }

    /// Record a bookmarked item id.
    pub fn add_bookmark(&mut self, id: impl Into<String>) {
        self.bookmarks.insert(id.into());
    }

    /// Add a topic weight while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_topic_weight(mut self, topic: impl Into<String>, weight: f64) -> Self {
        self.set_topic_weight(topic, weight);
        self
    }

    /// Add a source weight while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_source_weight(mut self, source: impl Into<String>, weight: f64) -> Self {
        self.set_source_weight(source, weight);
        self
    }

    /// Add a bookmark while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_bookmark(mut self, id: impl Into<String>) -> Self {
        self.add_bookmark(id);
        self
    }
}
