//! Score breakdowns and the ranking trait seam.
//!
//! The `RelevanceRanker` trait assigns scored, sorted results to a candidate
//! collection given a [`UserProfile`]. Implementations must be thread-safe
//! (`Send` + `Sync`) so ranking can run across threads, and must report every
//! subscore already clamped into `0.0..=1.0`. Use [`sanitise`] to apply the
//! guard.

use crate::{ContentItem, UserProfile};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clamp and validate a raw subscore.
///
/// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
///
/// # Examples
/// ```
/// use kerbside_core::sanitise;
///
/// assert_eq!(sanitise(1.4), 1.0);
/// assert_eq!(sanitise(-0.1), 0.0);
/// assert_eq!(sanitise(f64::NAN), 0.0);
/// ```
#[must_use]
pub fn sanitise(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Named subscores for one item, each in `[0, 1]` before weighting.
///
/// `total` is the weighted sum of the subscores and deliberately excludes the
/// proximity boost; `proximity_multiplier` is reported separately so callers
/// can distinguish inherently relevant items from ones boosted by proximity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreBreakdown {
    /// TF-IDF relevance of the expanded interests against the item text.
    pub lexical: f64,
    /// Fuzzy match of expanded interests against topic labels.
    pub topics: f64,
    /// Fuzzy match of expanded interests against free-text tags.
    pub tags: f64,
    /// Exponential publication-age decay, with the breaking-news bonus.
    pub recency: f64,
    /// Structural richness bonuses.
    pub quality: f64,
    /// Linear distance decay inside the user's radius.
    pub geographic: f64,
    /// Learned topic/source affinity and bookmark signal.
    pub behavioral: f64,
    /// Weighted sum of the subscores, before the proximity boost.
    pub total: f64,
    /// Distance-tier boost applied to `total`; one of 1, 2, 5, or 10.
    pub proximity_multiplier: f64,
    /// Up to five expanded terms that contributed to the lexical subscore,
    /// strongest first.
    pub matched_terms: Vec<String>,
}

impl ScoreBreakdown {
    /// A zeroed breakdown with a neutral proximity multiplier.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            lexical: 0.0,
            topics: 0.0,
            tags: 0.0,
            recency: 0.0,
            quality: 0.0,
            geographic: 0.0,
            behavioral: 0.0,
            total: 0.0,
            proximity_multiplier: 1.0,
            matched_terms: Vec::new(),
        }
    }
}

impl Default for ScoreBreakdown {
    fn default() -> Self {
        Self::zero()
    }
}

/// One ranked result: the item, its final score, and the breakdown behind it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredItem {
    /// The candidate item, unchanged.
    pub item: ContentItem,
    /// `breakdown.total` multiplied by the proximity multiplier.
    pub score: f64,
    /// Per-signal subscores.
    pub breakdown: ScoreBreakdown,
}

impl ScoredItem {
    /// Render a short human-readable explanation for UI display.
    ///
    /// # Examples
    /// ```
    /// use kerbside_core::{ContentItem, ScoreBreakdown, ScoredItem};
    ///
    /// let scored = ScoredItem {
    ///     item: ContentItem::new("a", "t", "s", 0, "src"),
    ///     score: 0.4,
    ///     breakdown: ScoreBreakdown {
    ///         matched_terms: vec!["jazz".into()],
    ///         ..ScoreBreakdown::zero()
    ///     },
    /// };
    /// assert_eq!(scored.reason(), "matches your interest in jazz");
    /// ```
    #[must_use]
    pub fn reason(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.breakdown.matched_terms.is_empty() {
            parts.push(format!(
                "matches your interest in {}",
                self.breakdown.matched_terms.join(", ")
            ));
        }
        if self.breakdown.recency > 0.8 {
            parts.push("just published".to_owned());
        }
        if self.breakdown.proximity_multiplier > 1.0 {
            parts.push("right where you are".to_owned());
        } else if self.breakdown.geographic > 0.0 {
            parts.push("near you".to_owned());
        }
        if parts.is_empty() {
            return "may be relevant to you".to_owned();
        }
        parts.join("; ")
    }
}

/// Rank a candidate collection for a user profile.
///
/// Implementations must return results sorted by descending score with ties
/// preserving input order, and must be deterministic: identical inputs
/// (including `now_ms`) produce identical output.
pub trait RelevanceRanker: Send + Sync {
    /// Score and sort `items` for `profile` at the given clock reading.
    fn rank(&self, items: &[ContentItem], profile: &UserProfile, now_ms: i64) -> Vec<ScoredItem>;
}
