//! Canonical topic matching against a cached registry snapshot.
//!
//! The matcher resolves free-text keywords to registry identifiers in four
//! stages: exact title match, synonym lookup, substring containment, and
//! edit-distance similarity. The title index is an immutable snapshot behind
//! a mutex-guarded `Arc`, replaced wholesale when it goes stale; readers
//! clone the `Arc` and never hold the lock across the network fetch.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use kerbside_core::text::edit_similarity;
use log::{debug, warn};

use crate::source::{TopicEntry, TopicSource};

/// How long a snapshot stays fresh.
const REFRESH_INTERVAL: Duration = Duration::from_secs(300);
/// Bound on each registry fetch; the store behind the registry answers in
/// about a second when healthy.
const FETCH_TIMEOUT: Duration = Duration::from_secs(1);
/// Minimum edit-distance similarity for the fuzzy stage.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Common spellings mapped to the canonical label they should resolve as.
static SYNONYM_TABLE: &[(&str, &str)] = &[
    ("ml", "ai"),
    ("machine learning", "ai"),
    ("artificial intelligence", "ai"),
    ("tech", "technology"),
    ("football", "sports"),
    ("soccer", "sports"),
    ("gigs", "music"),
    ("concerts", "music"),
    ("films", "cinema"),
    ("movies", "cinema"),
    ("wellness", "health"),
    ("fitness", "health"),
    ("dining", "food"),
    ("restaurants", "food"),
    ("finance", "business"),
    ("economy", "business"),
    ("tourism", "travel"),
];

/// Installed when the registry yields nothing and no snapshot exists yet, so
/// the index is never empty after first use.
static DEFAULT_TOPICS: &[(&str, &str, &str)] = &[
    ("topic-ai", "AI", "ai"),
    ("topic-technology", "Technology", "technology"),
    ("topic-sports", "Sports", "sports"),
    ("topic-music", "Music", "music"),
    ("topic-food", "Food", "food"),
    ("topic-travel", "Travel", "travel"),
    ("topic-politics", "Politics", "politics"),
    ("topic-science", "Science", "science"),
    ("topic-health", "Health", "health"),
    ("topic-art", "Art", "art"),
];

/// Outcome of matching a batch of extracted entities.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Distinct registry identifiers that were resolved, in match order.
    pub identifiers: Vec<String>,
    /// Entities that resolved to nothing.
    pub unmatched: Vec<String>,
    /// Matched count over attempted count; 0 when nothing was attempted.
    pub confidence: f64,
}

/// One immutable generation of the title index.
#[derive(Debug)]
struct TopicIndex {
    /// Lowercased title to registry identifier, ordered for deterministic
    /// containment and fuzzy scans.
    by_title: BTreeMap<String, String>,
    refreshed_at: Option<Instant>,
}

impl TopicIndex {
    const fn empty() -> Self {
        Self {
            by_title: BTreeMap::new(),
            refreshed_at: None,
        }
    }

    fn from_entries(entries: &[TopicEntry]) -> Self {
        Self {
            by_title: entries
                .iter()
                .map(|entry| (entry.title.to_lowercase(), entry.id.clone()))
                .collect(),
            refreshed_at: Some(Instant::now()),
        }
    }

    fn defaults() -> Self {
        Self {
            by_title: DEFAULT_TOPICS
                .iter()
                .map(|(id, title, _)| (title.to_lowercase(), (*id).to_owned()))
                .collect(),
            refreshed_at: Some(Instant::now()),
        }
    }

    fn restamped(&self) -> Self {
        Self {
            by_title: self.by_title.clone(),
            refreshed_at: Some(Instant::now()),
        }
    }
}

/// Resolves free-text keywords to canonical topic identifiers.
///
/// # Examples
/// ```
/// use kerbside_registry::{TopicEntry, TopicMatcher, TopicSource, TopicSourceError};
///
/// struct StaticSource;
///
/// #[async_trait::async_trait]
/// impl TopicSource for StaticSource {
///     async fn fetch_topics(&self) -> Result<Vec<TopicEntry>, TopicSourceError> {
///         Ok(vec![TopicEntry::new("t1", "Technology", "technology")])
///     }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let matcher = TopicMatcher::new(StaticSource);
/// assert_eq!(matcher.match_keyword("technology").await.as_deref(), Some("t1"));
/// # });
/// ```
#[derive(Debug)]
pub struct TopicMatcher<S> {
    source: S,
    refresh_interval: Duration,
    fetch_timeout: Duration,
    index: Mutex<Arc<TopicIndex>>,
}

impl<S: TopicSource> TopicMatcher<S> {
    /// Construct a matcher over `source` with production intervals.
    pub fn new(source: S) -> Self {
        Self {
            source,
            refresh_interval: REFRESH_INTERVAL,
            fetch_timeout: FETCH_TIMEOUT,
            index: Mutex::new(Arc::new(TopicIndex::empty())),
        }
    }

    /// Override the refresh interval.
    #[must_use]
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Override the per-fetch bound.
    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Resolve a keyword to a registry identifier, or `None`.
    ///
    /// Resolution order: exact case-insensitive title match, synonym lookup,
    /// substring containment against every cached title (either direction),
    /// then edit-distance similarity above 0.7. The first stage that matches
    /// wins.
    pub async fn match_keyword(&self, keyword: &str) -> Option<String> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        let index = self.fresh_index().await;

        if let Some(id) = index.by_title.get(&needle) {
            return Some(id.clone());
        }
        if let Some(id) = lookup_synonym(&index, &needle) {
            return Some(id);
        }
        if let Some(id) = lookup_containment(&index, &needle) {
            return Some(id);
        }
        lookup_fuzzy(&index, &needle)
    }

    /// Resolve a batch of extracted entities.
    ///
    /// `confidence` is the matched share of attempted entities, 0 when the
    /// batch is empty. Identifiers are deduplicated; unmatched entities are
    /// reported verbatim.
    pub async fn match_batch(&self, entities: &[String]) -> MatchResult {
        let mut identifiers: Vec<String> = Vec::new();
        let mut unmatched = Vec::new();
        let mut matched = 0_usize;
        for entity in entities {
            match self.match_keyword(entity).await {
                Some(id) => {
                    matched += 1;
                    if !identifiers.contains(&id) {
                        identifiers.push(id);
                    }
                }
                None => unmatched.push(entity.clone()),
            }
        }
        let confidence = if entities.is_empty() {
            0.0
        } else {
            (matched as f64) / (entities.len() as f64)
        };
        MatchResult {
            identifiers,
            unmatched,
            confidence,
        }
    }

    /// Return a fresh snapshot, refreshing from the source when stale.
    ///
    /// A fetch failure or an empty enumeration keeps the last good snapshot,
    /// or installs the fixed defaults when none exists. Either way the
    /// snapshot is re-stamped so an unhealthy registry is retried once per
    /// interval rather than on every call.
    async fn fresh_index(&self) -> Arc<TopicIndex> {
        let current = self.snapshot();
        let stale = current
            .refreshed_at
            .is_none_or(|at| at.elapsed() >= self.refresh_interval);
        if !stale {
            return current;
        }

        let entries = match tokio::time::timeout(self.fetch_timeout, self.source.fetch_topics())
            .await
        {
            Ok(Ok(entries)) => entries,
            Ok(Err(err)) => {
                warn!("topic registry fetch failed, falling back: {err}");
                Vec::new()
            }
            Err(_) => {
                warn!(
                    "topic registry fetch exceeded {:?}, falling back",
                    self.fetch_timeout
                );
                Vec::new()
            }
        };

        let next = if entries.is_empty() {
            if current.by_title.is_empty() {
                debug!("installing default topic set");
                Arc::new(TopicIndex::defaults())
            } else {
                Arc::new(current.restamped())
            }
        } else {
            debug!("refreshed topic index with {} entries", entries.len());
            Arc::new(TopicIndex::from_entries(&entries))
        };
        self.swap(Arc::clone(&next));
        next
    }

    fn snapshot(&self) -> Arc<TopicIndex> {
        match self.index.lock() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    fn swap(&self, next: Arc<TopicIndex>) {
        match self.index.lock() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

fn lookup_synonym(index: &TopicIndex, needle: &str) -> Option<String> {
    let canonical = SYNONYM_TABLE
        .iter()
        .find(|(spelling, _)| *spelling == needle)
        .map(|(_, canonical)| *canonical)?;
    index.by_title.get(canonical).cloned()
}

fn lookup_containment(index: &TopicIndex, needle: &str) -> Option<String> {
    index
        .by_title
        .iter()
        .find(|(title, _)| title.contains(needle) || needle.contains(title.as_str()))
        .map(|(_, id)| id.clone())
}

fn lookup_fuzzy(index: &TopicIndex, needle: &str) -> Option<String> {
    let mut best: Option<(f64, &String)> = None;
    for (title, id) in &index.by_title {
        let similarity = edit_similarity(needle, title);
        if similarity > FUZZY_THRESHOLD
            && best.is_none_or(|(best_similarity, _)| similarity > best_similarity)
        {
            best = Some((similarity, id));
        }
    }
    best.map(|(_, id)| id.clone())
}
