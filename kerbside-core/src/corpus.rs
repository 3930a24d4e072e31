//! Corpus statistics for inverse-document-frequency weighting.
//!
//! Statistics are built fresh from the exact candidate set being scored in a
//! call and discarded afterwards. Sharing a table across calls with different
//! candidate sets would corrupt the IDF weighting, so no memoisation happens
//! here.

use std::collections::{HashMap, HashSet};

use crate::ContentItem;

/// Minimum token length kept by [`tokenize`]; shorter tokens carry too
/// little signal.
const MIN_TOKEN_LEN: usize = 3;

/// Document-frequency table over one candidate collection.
///
/// # Examples
/// ```
/// use kerbside_core::{ContentItem, CorpusStatistics};
///
/// let items = vec![
///     ContentItem::new("a", "Jazz festival", "Live music weekend", 0, "s"),
///     ContentItem::new("b", "Transit strike", "Buses cancelled", 0, "s"),
/// ];
/// let stats = CorpusStatistics::build(&items);
/// assert_eq!(stats.corpus_size(), 2);
/// assert_eq!(stats.document_frequency("jazz"), 1);
/// assert!(stats.inverse_document_frequency("jazz") > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CorpusStatistics {
    corpus_size: usize,
    document_frequency: HashMap<String, usize>,
}

impl CorpusStatistics {
    /// Build statistics over `items`.
    ///
    /// Each item contributes its title, summary, topics, tags, and free-text
    /// locations; a term is counted once per item no matter how often it
    /// repeats within it. An empty collection is valid and yields a zero-size
    /// corpus.
    #[must_use]
    pub fn build(items: &[ContentItem]) -> Self {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for item in items {
            let unique: HashSet<String> = item_tokens(item).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }
        Self {
            corpus_size: items.len(),
            document_frequency,
        }
    }

    /// Number of items the statistics were built over.
    #[must_use]
    pub const fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of items containing `term` at least once.
    #[must_use]
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Smoothed inverse document frequency: `ln((N + 1) / (df + 1))`.
    ///
    /// Finite for every input and near zero for small corpora, so tiny
    /// candidate sets degrade gracefully rather than blowing up rare terms.
    #[must_use]
    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        let n = self.corpus_size as f64;
        let df = self.document_frequency(term) as f64;
        ((n + 1.0) / (df + 1.0)).ln()
    }
}

/// Lowercase `text`, map punctuation to whitespace, and keep tokens of at
/// least three characters.
///
/// # Examples
/// ```
/// use kerbside_core::corpus::tokenize;
///
/// let tokens = tokenize("Pop-up: café re-opens!");
/// assert_eq!(tokens, vec!["pop", "café", "opens"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(ToOwned::to_owned)
        .collect()
}

/// Tokenise the text an item exposes to lexical matching: title, summary,
/// topics, tags, and free-text locations, in that order.
///
/// The scorer matches expanded interest terms against exactly these tokens,
/// so the statistics table and the per-item matching always agree.
#[must_use]
pub fn item_tokens(item: &ContentItem) -> Vec<String> {
    tokenize(&item_blob(item))
}

fn item_blob(item: &ContentItem) -> String {
    let mut parts: Vec<&str> = vec![item.title.as_str(), item.summary.as_str()];
    parts.extend(item.topics.iter().map(String::as_str));
    parts.extend(item.tags.iter().map(String::as_str));
    parts.extend(item.locations.iter().map(String::as_str));
    parts.join(" ")
}
