//! Composite multi-signal scoring.
//!
//! For each candidate item the scorer computes six independent subscores
//! (lexical, categorical over topics and tags, recency, quality, geographic,
//! and behavioural), each clamped into `[0, 1]`, weights and sums them, and
//! finally applies the multiplicative proximity boost. Results come back
//! sorted by descending score with ties preserving input order.
//!
//! Corpus statistics and interest expansions are computed once per call and
//! shared read-only across items, so per-item scoring has no shared mutable
//! state.
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use kerbside_core::corpus::{CorpusStatistics, item_tokens};
use kerbside_core::text::label_similarity;
use kerbside_core::{
    BehaviorProfile, ContentItem, RelevanceRanker, ScoreBreakdown, ScoredItem, UserLocation,
    UserProfile, haversine_km, sanitise,
};
use log::debug;

use crate::expansion::ExpansionEngine;
use crate::knowledge;
use crate::weights::{SignalWeights, WeightsError};

/// Sources whose structural quality earns the allow-list bonus.
const REPUTABLE_SOURCES: &[&str] = &[
    "reuters",
    "associated press",
    "bbc",
    "the guardian",
    "financial times",
    "bloomberg",
    "afp",
    "local democracy reporting service",
];

/// Tag that marks an item as breaking news.
const BREAKING_TAG: &str = "breaking";
/// Flat recency bonus for breaking items, applied before the clamp.
const BREAKING_BONUS: f64 = 0.3;
/// Flat behavioural bonus for bookmarked items, applied before the clamp.
const BOOKMARK_BONUS: f64 = 0.25;
/// Hours for the recency decay to fall to `1/e`.
const RECENCY_DECAY_HOURS: f64 = 24.0;
/// Body length past which an item counts as substantial.
const LONG_BODY_CHARS: usize = 500;
/// Summary length past which an item counts as well-summarised.
const LONG_SUMMARY_CHARS: usize = 150;
/// Maximum number of matched terms reported per item.
const MATCHED_TERM_LIMIT: usize = 5;

/// Distance tiers (kilometres) and the total-score boost each earns.
const PROXIMITY_TIERS: &[(f64, f64)] = &[(0.1, 10.0), (0.25, 5.0), (0.5, 2.0)];

/// Scores candidate items against a user profile.
///
/// # Examples
/// ```
/// use kerbside_core::{ContentItem, UserProfile};
/// use kerbside_scorer::CompositeScorer;
///
/// let scorer = CompositeScorer::new();
/// let items = vec![
///     ContentItem::new("a", "Jazz on the canal", "Open-air jazz this weekend", 0, "citydesk")
///         .with_topics(["music"]),
///     ContentItem::new("b", "Council budget row", "Meeting runs late", 0, "citydesk"),
/// ];
/// let profile = UserProfile::new(["jazz"]);
///
/// let ranked = scorer.rank(&items, &profile, 0);
/// assert_eq!(ranked.first().map(|s| s.item.id.as_str()), Some("a"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeScorer {
    weights: SignalWeights,
    engine: ExpansionEngine,
}

/// Read-only per-call state shared by every item.
struct RankContext<'a> {
    expanded: Vec<String>,
    interest_count: f64,
    food_interested: bool,
    stats: CorpusStatistics,
    location: Option<&'a UserLocation>,
    behavior: Option<&'a BehaviorProfile>,
    now_ms: i64,
}

impl CompositeScorer {
    /// Construct a scorer with the default production weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scorer with explicit weights.
    ///
    /// # Errors
    /// Returns [`WeightsError::Invalid`] when the weights are non-finite,
    /// negative, or sum to zero.
    pub fn with_weights(weights: SignalWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
            engine: ExpansionEngine::new(),
        })
    }

    /// Score and sort `items` for `profile` at the given clock reading.
    ///
    /// `now_ms` is epoch milliseconds; passing it explicitly keeps repeated
    /// calls bit-identical for identical inputs. Corpus statistics are built
    /// from exactly this candidate set and discarded afterwards.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "interest counts are far below the 2^52 precision limit"
    )]
    pub fn rank(
        &self,
        items: &[ContentItem],
        profile: &UserProfile,
        now_ms: i64,
    ) -> Vec<ScoredItem> {
        let stats = CorpusStatistics::build(items);
        debug!(
            "scoring {} items against {} interests",
            stats.corpus_size(),
            profile.interests.len()
        );
        let expanded = self.engine.expand_all(&profile.interests);
        let context = RankContext {
            food_interested: expanded.iter().any(|term| knowledge::is_food_term(term)),
            expanded,
            interest_count: profile.interests.len().max(1) as f64,
            stats,
            location: profile.location.as_ref(),
            behavior: profile.behavior.as_ref(),
            now_ms,
        };

        let mut scored: Vec<ScoredItem> = items
            .iter()
            .map(|item| self.score_item(item, &context))
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// [`rank`](Self::rank) against the system clock, for callers that do not
    /// need reproducibility.
    #[must_use]
    pub fn rank_now(&self, items: &[ContentItem], profile: &UserProfile) -> Vec<ScoredItem> {
        self.rank(items, profile, epoch_millis_now())
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the weighted total is the scoring definition"
    )]
    fn score_item(&self, item: &ContentItem, context: &RankContext<'_>) -> ScoredItem {
        let (lexical, matched_terms) = lexical_subscore(item, context);
        let topics = category_subscore(&context.expanded, &item.topics, context.interest_count, true);
        let tags = category_subscore(&context.expanded, &item.tags, context.interest_count, false);
        let recency = recency_subscore(item, context.now_ms);
        let quality = quality_subscore(item, context.food_interested);
        let distance = distance_km(item, context.location);
        let geographic = geographic_subscore(distance, context.location);
        let behavioral = behavior_subscore(item, context.behavior);

        let w = self.weights;
        let total = w.lexical * lexical
            + w.topics * topics
            + w.tags * tags
            + w.recency * recency
            + w.quality * quality
            + w.geographic * geographic
            + w.behavioral * behavioral;
        let proximity_multiplier = proximity_multiplier(distance);

        ScoredItem {
            item: item.clone(),
            score: total * proximity_multiplier,
            breakdown: ScoreBreakdown {
                lexical,
                topics,
                tags,
                recency,
                quality,
                geographic,
                behavioral,
                total,
                proximity_multiplier,
                matched_terms,
            },
        }
    }
}

impl RelevanceRanker for CompositeScorer {
    fn rank(&self, items: &[ContentItem], profile: &UserProfile, now_ms: i64) -> Vec<ScoredItem> {
        Self::rank(self, items, profile, now_ms)
    }
}

/// TF-IDF of the expanded interest set against the item's own tokens,
/// averaged by raw interest count, plus the strongest contributing terms.
#[expect(
    clippy::float_arithmetic,
    reason = "TF-IDF accumulation is float by definition"
)]
fn lexical_subscore(item: &ContentItem, context: &RankContext<'_>) -> (f64, Vec<String>) {
    let tokens = item_tokens(item);
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for token in &tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }

    let mut sum = 0.0;
    let mut contributions: Vec<(String, f64)> = Vec::new();
    for term in &context.expanded {
        let Some(tf) = counts.get(term.as_str()) else {
            continue;
        };
        let contribution = tf * context.stats.inverse_document_frequency(term);
        if contribution > 0.0 {
            sum += contribution;
            contributions.push((term.clone(), contribution));
        }
    }

    contributions.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    contributions.truncate(MATCHED_TERM_LIMIT);
    let matched = contributions.into_iter().map(|(term, _)| term).collect();
    (sanitise(sum / context.interest_count), matched)
}

/// Fuzzy match points of expanded terms against a label list, averaged by raw
/// interest count. The weak 0.25 tier applies to topic labels only.
#[expect(
    clippy::float_arithmetic,
    reason = "tiered point accumulation is float by definition"
)]
fn category_subscore(
    expanded: &[String],
    labels: &[String],
    interest_count: f64,
    with_weak_tier: bool,
) -> f64 {
    let mut points = 0.0;
    for term in expanded {
        for label in labels {
            let similarity = label_similarity(term, label);
            if similarity > 0.8 {
                points += 1.0;
            } else if similarity > 0.5 {
                points += 0.5;
            } else if with_weak_tier && similarity > 0.3 {
                points += 0.25;
            }
        }
    }
    sanitise(points / interest_count)
}

/// Exponential publication-age decay with the breaking-news bonus.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "age in hours is well inside f64 precision; decay is float"
)]
fn recency_subscore(item: &ContentItem, now_ms: i64) -> f64 {
    let age_ms = now_ms.saturating_sub(item.published_at).max(0);
    let age_hours = (age_ms as f64) / 3_600_000.0;
    let mut score = (-age_hours / RECENCY_DECAY_HOURS).exp();
    if item.has_tag(BREAKING_TAG) {
        score += BREAKING_BONUS;
    }
    sanitise(score)
}

/// Structural richness bonuses, including the food-oriented ladder when the
/// profile's interests reach the food corner of the knowledge base.
#[expect(
    clippy::float_arithmetic,
    reason = "fixed bonus accumulation is float by definition"
)]
fn quality_subscore(item: &ContentItem, food_interested: bool) -> f64 {
    let mut score = 0.0;
    if item.image_url.is_some() {
        score += 0.2;
    }
    if item.location.is_some() {
        score += 0.15;
    }
    if item
        .body
        .as_ref()
        .is_some_and(|body| body.chars().count() > LONG_BODY_CHARS)
    {
        score += 0.15;
    }
    if !item.tags.is_empty() {
        score += 0.1;
    }
    if item.topics.len() > 1 {
        score += 0.15;
    }
    if item.summary.chars().count() > LONG_SUMMARY_CHARS {
        score += 0.15;
    }
    if REPUTABLE_SOURCES.contains(&item.source.to_lowercase().as_str()) {
        score += 0.1;
    }
    if food_interested {
        score += food_ladder_bonus(item);
    }
    sanitise(score)
}

/// The food ladder: one matching label earns 0.1, two or more earn 0.15.
fn food_ladder_bonus(item: &ContentItem) -> f64 {
    let matches = item
        .topics
        .iter()
        .chain(&item.tags)
        .filter(|label| knowledge::is_food_term(&label.trim().to_lowercase()))
        .count();
    match matches {
        0 => 0.0,
        1 => 0.1,
        _ => 0.15,
    }
}

/// Great-circle distance between the user and the item, when both exist.
fn distance_km(item: &ContentItem, location: Option<&UserLocation>) -> Option<f64> {
    let user = location?;
    let coord = item.location?;
    Some(haversine_km(user.coord, coord))
}

/// Linear decay inside the user's radius; zero beyond it or when either
/// coordinate is missing.
#[expect(
    clippy::float_arithmetic,
    reason = "linear distance decay is float by definition"
)]
fn geographic_subscore(distance: Option<f64>, location: Option<&UserLocation>) -> f64 {
    let (Some(d), Some(user)) = (distance, location) else {
        return 0.0;
    };
    if user.radius_km <= 0.0 || d > user.radius_km {
        return 0.0;
    }
    sanitise(1.0 - d / user.radius_km)
}

/// Learned topic and source affinity plus the bookmark bonus.
#[expect(
    clippy::float_arithmetic,
    reason = "affinity accumulation is float by definition"
)]
fn behavior_subscore(item: &ContentItem, behavior: Option<&BehaviorProfile>) -> f64 {
    let Some(profile) = behavior else {
        return 0.0;
    };
    let mut score = 0.0;
    for topic in &item.topics {
        if let Some(weight) = profile.topic_weight(topic) {
            score += weight;
        }
    }
    if let Some(weight) = profile.source_weight(&item.source) {
        score += weight;
    }
    if profile.is_bookmarked(&item.id) {
        score += BOOKMARK_BONUS;
    }
    sanitise(score)
}

/// The total-score boost for the distance tier the item falls in; 1 when the
/// distance is unknown.
fn proximity_multiplier(distance: Option<f64>) -> f64 {
    let Some(d) = distance else {
        return 1.0;
    };
    for (limit, multiplier) in PROXIMITY_TIERS {
        if d < *limit {
            return *multiplier;
        }
    }
    1.0
}

/// Current time as epoch milliseconds, saturating on clock weirdness.
fn epoch_millis_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};

    const HOUR_MS: i64 = 3_600_000;

    #[fixture]
    fn scorer() -> CompositeScorer {
        CompositeScorer::new()
    }

    fn plain_item(id: &str) -> ContentItem {
        ContentItem::new(id, "Quiet week ahead", "Nothing much on", 0, "citydesk")
    }

    #[rstest]
    fn empty_candidate_collection_yields_empty_result(scorer: CompositeScorer) {
        let ranked = scorer.rank(&[], &UserProfile::new(["tech"]), 0);
        assert!(ranked.is_empty());
    }

    #[rstest]
    fn results_are_sorted_descending(scorer: CompositeScorer) {
        let items = vec![
            plain_item("a"),
            ContentItem::new("b", "Street food market", "New stalls open", 0, "citydesk")
                .with_topics(["food"]),
            plain_item("c"),
        ];
        let ranked = scorer.rank(&items, &UserProfile::new(["food"]), 0);
        for (earlier, later) in ranked.iter().zip(ranked.iter().skip(1)) {
            assert!(earlier.score >= later.score);
        }
        assert_eq!(ranked.first().map(|s| s.item.id.as_str()), Some("b"));
    }

    #[rstest]
    fn ties_preserve_input_order(scorer: CompositeScorer) {
        let items = vec![plain_item("first"), plain_item("second")];
        let ranked = scorer.rank(&items, &UserProfile::new(["food"]), 0);
        let ids: Vec<&str> = ranked.iter().map(|s| s.item.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[rstest]
    fn ranking_is_deterministic(scorer: CompositeScorer) {
        let items = vec![
            ContentItem::new("a", "Gallery late opening", "Street art show", 0, "citydesk")
                .with_topics(["art"])
                .with_tags(["exhibitions"]),
            ContentItem::new("b", "Transit strike", "Buses cancelled", 0, "wire")
                .with_topics(["politics"]),
        ];
        let profile = UserProfile::new(["art", "music"]);
        let first = scorer.rank(&items, &profile, 1_000);
        let second = scorer.rank(&items, &profile, 1_000);
        assert_eq!(first, second);
    }

    #[rstest]
    fn subscores_and_multiplier_respect_their_ranges(scorer: CompositeScorer) {
        let items = vec![
            ContentItem::new(
                "a",
                "Street food market food stalls",
                "food food food cuisine dining",
                0,
                "bbc",
            )
            .with_topics(["food", "markets"])
            .with_tags(["breaking", "street food"])
            .with_body("b".repeat(600))
            .with_image_url("https://example.com/a.jpg")
            .with_location(Coord { x: 0.0, y: 0.0 }),
            plain_item("b"),
        ];
        let profile = UserProfile::new(["food"])
            .with_location(UserLocation::new(Coord { x: 0.0, y: 0.0 }, 5.0))
            .with_behavior(
                BehaviorProfile::new()
                    .with_topic_weight("food", 0.9)
                    .with_source_weight("bbc", 0.8)
                    .with_bookmark("a"),
            );
        for scored in scorer.rank(&items, &profile, 0) {
            let b = &scored.breakdown;
            for subscore in [
                b.lexical,
                b.topics,
                b.tags,
                b.recency,
                b.quality,
                b.geographic,
                b.behavioral,
            ] {
                assert!((0.0..=1.0).contains(&subscore), "subscore {subscore} out of range");
            }
            assert!([1.0, 2.0, 5.0, 10.0].contains(&b.proximity_multiplier));
        }
    }

    #[rstest]
    fn older_items_decay(scorer: CompositeScorer) {
        let fresh = ContentItem::new("fresh", "Jazz night", "Live jazz", 48 * HOUR_MS, "citydesk");
        let stale = ContentItem::new("stale", "Jazz night", "Live jazz", 0, "citydesk");
        let ranked = scorer.rank(&[stale, fresh], &UserProfile::new(["jazz"]), 48 * HOUR_MS);
        let by_id = |id: &str| {
            ranked
                .iter()
                .find(|s| s.item.id == id)
                .expect("item present")
                .breakdown
                .recency
        };
        assert!(by_id("stale") < by_id("fresh"));
        assert_eq!(ranked.first().map(|s| s.item.id.as_str()), Some("fresh"));
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn breaking_bonus_keeps_a_floor_under_old_news(scorer: CompositeScorer) {
        let thirty_days = 30 * 24 * HOUR_MS;
        let old_breaking = ContentItem::new("a", "Road closed", "Burst main", 0, "citydesk")
            .with_tags(["Breaking"]);
        let ranked = scorer.rank(&[old_breaking], &UserProfile::new(["travel"]), thirty_days);
        let recency = ranked.first().expect("item present").breakdown.recency;
        assert!((recency - 0.3).abs() < 1e-9, "breaking floor, got {recency}");
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn fresh_breaking_match_outranks_its_aged_self(scorer: CompositeScorer) {
        let item = |id: &str, published_at: i64| {
            ContentItem::new(id, "AI lab opens downtown", "Robotics and chatbots", published_at, "bbc")
                .with_topics(["tech", "ai"])
                .with_tags(["breaking"])
        };
        let filler = vec![
            plain_item("x"),
            ContentItem::new("y", "River cleanup", "Volunteers wanted", 0, "wire"),
        ];
        let now = 30 * 24 * HOUR_MS;
        let profile = UserProfile::new(["tech", "ai"]);

        let mut fresh_pool = filler.clone();
        fresh_pool.push(item("fresh", now));
        let fresh_ranked = scorer.rank(&fresh_pool, &profile, now);
        let top = fresh_ranked.first().expect("pool is non-empty");
        assert_eq!(top.item.id, "fresh");
        let fresh_total = top.breakdown.total;
        assert!(fresh_total > 0.7, "lexical, categorical, recency, and the breaking bonus all contribute, got {fresh_total}");

        let mut aged_pool = filler;
        aged_pool.push(item("aged", 0));
        let aged_ranked = scorer.rank(&aged_pool, &profile, now);
        let aged = aged_ranked
            .iter()
            .find(|s| s.item.id == "aged")
            .expect("aged item present");

        assert!((aged.breakdown.recency - 0.3).abs() < 1e-9, "recency decays to the breaking floor");
        assert!(
            fresh_total - aged.breakdown.total >= 0.10,
            "fresh {fresh_total} should beat aged {} by the recency drop",
            aged.breakdown.total
        );
    }

    #[rstest]
    fn geographic_decay_is_monotonic_and_bounded(scorer: CompositeScorer) {
        let at = |id: &str, lng: f64| {
            ContentItem::new(id, "Pop-up", "Pop-up", 0, "citydesk")
                .with_location(Coord { x: lng, y: 0.0 })
        };
        // ~1.11 km per 0.01 degrees of longitude at the equator.
        let items = vec![at("near", 0.01), at("far", 0.03), at("outside", 0.1)];
        let profile = UserProfile::new(["anything"])
            .with_location(UserLocation::new(Coord { x: 0.0, y: 0.0 }, 5.0));
        let ranked = scorer.rank(&items, &profile, 0);
        let geo = |id: &str| {
            ranked
                .iter()
                .find(|s| s.item.id == id)
                .expect("item present")
                .breakdown
                .geographic
        };
        assert!(geo("near") > geo("far"));
        assert!(geo("far") > 0.0);
        assert_eq!(geo("outside"), 0.0);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn proximity_tiers_scale_totals_exactly(scorer: CompositeScorer) {
        // Radius far below every tier distance: the geographic subscore is
        // identically zero, the image bonus keeps the total non-zero, and the
        // only difference between items is the multiplier.
        let at = |id: &str, lng: f64| {
            ContentItem::new(id, "Pop-up", "Pop-up", 0, "citydesk")
                .with_image_url("https://example.com/a.jpg")
                .with_location(Coord { x: lng, y: 0.0 })
        };
        let deg_per_km = 1.0 / 111.194_926_644_558_74;
        let items = vec![
            at("tier10", 0.05 * deg_per_km),
            at("tier5", 0.2 * deg_per_km),
            at("tier2", 0.4 * deg_per_km),
            at("baseline", 0.6 * deg_per_km),
        ];
        let profile = UserProfile::new(Vec::<String>::new())
            .with_location(UserLocation::new(Coord { x: 0.0, y: 0.0 }, 0.01));
        let ranked = scorer.rank(&items, &profile, i64::MAX / 2);
        let score = |id: &str| {
            ranked
                .iter()
                .find(|s| s.item.id == id)
                .expect("item present")
                .score
        };
        let baseline = score("baseline");
        assert!(baseline > 0.0);
        assert!((score("tier10") / baseline - 10.0).abs() < 1e-9);
        assert!((score("tier5") / baseline - 5.0).abs() < 1e-9);
        assert!((score("tier2") / baseline - 2.0).abs() < 1e-9);
    }

    #[rstest]
    fn missing_location_defaults_to_neutral_multiplier(scorer: CompositeScorer) {
        let ranked = scorer.rank(&[plain_item("a")], &UserProfile::new(["tech"]), 0);
        let top = ranked.first().expect("item present");
        assert_eq!(top.breakdown.proximity_multiplier, 1.0);
        assert_eq!(top.breakdown.geographic, 0.0);
    }

    #[rstest]
    fn empty_interest_list_still_ranks_by_other_signals(scorer: CompositeScorer) {
        let rich = ContentItem::new("rich", "t", "s", 0, "bbc")
            .with_image_url("https://example.com/a.jpg")
            .with_tags(["breaking"]);
        let ranked = scorer.rank(&[plain_item("plain"), rich], &UserProfile::default(), 0);
        let top = ranked.first().expect("item present");
        assert_eq!(top.item.id, "rich");
        assert_eq!(top.breakdown.lexical, 0.0);
        assert_eq!(top.breakdown.topics, 0.0);
        assert!(top.breakdown.quality > 0.0);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn behavioural_signals_reward_bookmarks_and_affinities(scorer: CompositeScorer) {
        let items = vec![
            plain_item("bookmarked"),
            ContentItem::new("affine", "t", "s", 0, "favourite-source").with_topics(["cycling"]),
            plain_item("neither"),
        ];
        let behavior = BehaviorProfile::new()
            .with_bookmark("bookmarked")
            .with_topic_weight("cycling", 0.6)
            .with_source_weight("favourite-source", 0.2);
        let profile = UserProfile::new(Vec::<String>::new()).with_behavior(behavior);
        let ranked = scorer.rank(&items, &profile, 0);
        let behavioral = |id: &str| {
            ranked
                .iter()
                .find(|s| s.item.id == id)
                .expect("item present")
                .breakdown
                .behavioral
        };
        assert!((behavioral("bookmarked") - BOOKMARK_BONUS).abs() < 1e-9);
        assert!((behavioral("affine") - 0.8).abs() < 1e-9);
        assert_eq!(behavioral("neither"), 0.0);
    }

    #[rstest]
    fn quality_bonuses_accumulate_and_clamp(scorer: CompositeScorer) {
        let maximal = ContentItem::new("max", "t", "s".repeat(200), 0, "bbc")
            .with_image_url("https://example.com/a.jpg")
            .with_location(Coord { x: 0.0, y: 0.0 })
            .with_body("b".repeat(600))
            .with_tags(["street food", "markets"])
            .with_topics(["food", "markets"]);
        let ranked = scorer.rank(&[maximal], &UserProfile::new(["food"]), 0);
        let top = ranked.first().expect("item present");
        assert_eq!(top.breakdown.quality, 1.0);
    }

    #[rstest]
    fn matched_terms_surface_the_lexical_evidence(scorer: CompositeScorer) {
        let items = vec![
            ContentItem::new("a", "Robotics fair", "Chatbots and robotics demos", 0, "citydesk"),
            plain_item("b"),
            plain_item("c"),
        ];
        let ranked = scorer.rank(&items, &UserProfile::new(["ai"]), 0);
        let top = ranked.iter().find(|s| s.item.id == "a").expect("item present");
        assert!(top.breakdown.matched_terms.contains(&"robotics".to_owned()));
        assert!(top.breakdown.matched_terms.len() <= MATCHED_TERM_LIMIT);
        assert!(top.reason().contains("robotics"));
    }

    #[rstest]
    fn weights_gate_construction() {
        let invalid = SignalWeights {
            lexical: f64::NAN,
            ..SignalWeights::default()
        };
        assert!(CompositeScorer::with_weights(invalid).is_err());
        assert!(CompositeScorer::with_weights(SignalWeights::default()).is_ok());
    }
}
