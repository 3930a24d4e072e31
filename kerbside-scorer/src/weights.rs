//! Tunable signal weights for the composite scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Relative weighting of the six composite signals.
///
/// The defaults are the hand-tuned production constants; they sum to 1.0 so
/// an item that maxes every subscore totals 1.0 before any proximity boost.
///
/// # Examples
/// ```
/// use kerbside_scorer::SignalWeights;
///
/// let weights = SignalWeights::default().validate().unwrap();
/// assert_eq!(weights.lexical, 0.40);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SignalWeights {
    /// Multiplier for the TF-IDF lexical subscore.
    pub lexical: f64,
    /// Multiplier for the topic-label match subscore.
    pub topics: f64,
    /// Multiplier for the free-text tag match subscore.
    pub tags: f64,
    /// Multiplier for the publication-age subscore.
    pub recency: f64,
    /// Multiplier for the structural quality subscore.
    pub quality: f64,
    /// Multiplier for the distance-decay subscore.
    pub geographic: f64,
    /// Multiplier for the learned-affinity subscore.
    pub behavioral: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            lexical: 0.40,
            topics: 0.15,
            tags: 0.10,
            recency: 0.15,
            quality: 0.10,
            geographic: 0.05,
            behavioral: 0.05,
        }
    }
}

/// Errors raised when configuring the composite scorer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightsError {
    /// A weight was non-finite or negative, or every weight was zero.
    #[error("signal weights must be finite, non-negative, and sum to a positive value")]
    Invalid,
}

impl SignalWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::Invalid`] when any value is non-finite or
    /// negative, or when the total weight is zero.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(WeightsError::Invalid)
        }
    }

    fn is_valid(self) -> bool {
        self.values().iter().all(|w| w.is_finite() && *w >= 0.0) && self.total() > 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    fn total(self) -> f64 {
        self.values().iter().fold(0.0, |total, weight| total + weight)
    }

    const fn values(self) -> [f64; 7] {
        [
            self.lexical,
            self.topics,
            self.tags,
            self.recency,
            self.quality,
            self.geographic,
            self.behavioral,
        ]
    }
}
