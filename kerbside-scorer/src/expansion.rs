//! Semantic interest expansion.
//!
//! Expands one raw interest keyword into a broader term set using the static
//! knowledge base plus generated lexical variants, and computes a similarity
//! score between two raw keywords. Deterministic and free of I/O; expansion
//! sets are ordered so iteration order never depends on hash state.
#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use crate::knowledge::{self, InterestNode};

/// Diacritic substitution pairs applied when generating folded variants.
const DIACRITIC_PAIRS: &[(char, char)] = &[
    ('á', 'a'),
    ('à', 'a'),
    ('â', 'a'),
    ('ä', 'a'),
    ('ã', 'a'),
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('í', 'i'),
    ('ì', 'i'),
    ('î', 'i'),
    ('ï', 'i'),
    ('ó', 'o'),
    ('ò', 'o'),
    ('ô', 'o'),
    ('ö', 'o'),
    ('õ', 'o'),
    ('ú', 'u'),
    ('ù', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
    ('ñ', 'n'),
    ('ç', 'c'),
];

/// Graph bonus for a direct relation between two terms.
const DIRECT_RELATION_BONUS: f64 = 0.30;
/// Graph bonus for an indirect relation between two terms.
const INDIRECT_RELATION_BONUS: f64 = 0.15;

/// The term set derived from one raw interest keyword.
///
/// Ephemeral: recomputed per call and never persisted. `expanded` holds the
/// original term, its multi-language synonyms, known typo variants, and
/// generated lexical variants; graph neighbours and subcategories are kept as
/// separate subsets so callers can distinguish synonym-level equivalence from
/// graph adjacency.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestExpansion {
    /// The normalised (trimmed, lowercased) original term.
    pub term: String,
    /// Synonyms, typo variants, and lexical variants, original included.
    pub expanded: BTreeSet<String>,
    /// Synonyms grouped by ISO 639-1 language code.
    pub by_language: BTreeMap<String, Vec<String>>,
    /// Narrower terms inside this interest.
    pub subcategories: BTreeSet<String>,
    /// Strongly related terms from the interest graph.
    pub related_direct: BTreeSet<String>,
    /// Loosely related terms from the interest graph.
    pub related_indirect: BTreeSet<String>,
    /// Weight of the knowledge-base node, when the term is known.
    pub node_weight: Option<f64>,
}

/// Expands interest keywords against the static knowledge base.
///
/// # Examples
/// ```
/// use kerbside_scorer::ExpansionEngine;
///
/// let engine = ExpansionEngine::new();
/// let expansion = engine.expand("Tech");
/// assert!(expansion.expanded.contains("technology"));
/// assert!(expansion.subcategories.contains("software"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpansionEngine;

impl ExpansionEngine {
    /// Construct an engine over the built-in knowledge base.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Expand a raw keyword into its full term set.
    ///
    /// Unknown terms still expand, minimally, to the term plus its pluralised
    /// variant. An empty term expands to a singleton set containing only the
    /// empty string, which downstream scoring treats as non-matching.
    #[must_use]
    pub fn expand(&self, term: &str) -> InterestExpansion {
        let normalised = term.trim().to_lowercase();
        if normalised.is_empty() {
            return InterestExpansion {
                term: String::new(),
                expanded: BTreeSet::from([String::new()]),
                by_language: BTreeMap::new(),
                subcategories: BTreeSet::new(),
                related_direct: BTreeSet::new(),
                related_indirect: BTreeSet::new(),
                node_weight: None,
            };
        }

        let mut expanded = BTreeSet::new();
        expanded.insert(normalised.clone());
        if let Some(plural) = pluralise(&normalised) {
            expanded.insert(plural);
        }
        let folded = fold_diacritics(&normalised);
        if let Some(variant) = folded.clone() {
            expanded.insert(variant);
        }

        let lookup = knowledge::node_for(&normalised)
            .or_else(|| folded.as_deref().and_then(knowledge::node_for));
        let Some(node) = lookup else {
            return InterestExpansion {
                term: normalised,
                expanded,
                by_language: BTreeMap::new(),
                subcategories: BTreeSet::new(),
                related_direct: BTreeSet::new(),
                related_indirect: BTreeSet::new(),
                node_weight: None,
            };
        };

        absorb_node(&mut expanded, node);
        InterestExpansion {
            term: normalised,
            expanded,
            by_language: node
                .synonyms
                .iter()
                .map(|(lang, terms)| {
                    (
                        (*lang).to_owned(),
                        terms.iter().map(|t| (*t).to_owned()).collect(),
                    )
                })
                .collect(),
            subcategories: node.subcategories.iter().map(|t| (*t).to_owned()).collect(),
            related_direct: node.related_direct.iter().map(|t| (*t).to_owned()).collect(),
            related_indirect: node
                .related_indirect
                .iter()
                .map(|t| (*t).to_owned())
                .collect(),
            node_weight: Some(node.weight),
        }
    }

    /// Similarity between two raw keywords, in `[0, 1]`.
    ///
    /// Exact (case-insensitive) equality scores 1.0 and synonym-level
    /// equivalence (one expansion set containing the other's raw term)
    /// scores 0.9. Everything else scores the Jaccard similarity of the two
    /// expansion sets plus a graph bonus for the strongest relation found in
    /// either direction, capped at 1.0. The relation check is symmetric, so
    /// `similarity(a, b)` always equals `similarity(b, a)`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "similarity combines Jaccard overlap with the graph bonus"
    )]
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let ea = self.expand(a);
        let eb = self.expand(b);
        if ea.term == eb.term {
            return 1.0;
        }
        if ea.expanded.contains(&eb.term) || eb.expanded.contains(&ea.term) {
            return 0.9;
        }

        let overlap = jaccard(&ea.expanded, &eb.expanded);
        let bonus = relation_bonus(&ea, &eb).max(relation_bonus(&eb, &ea));
        (overlap + bonus).min(1.0)
    }

    /// Union of every term's expansion set and subcategories, sorted.
    ///
    /// This is the lexical query the composite scorer matches against item
    /// text.
    #[must_use]
    pub fn expand_all(&self, terms: &[String]) -> Vec<String> {
        let mut union = BTreeSet::new();
        for term in terms {
            let expansion = self.expand(term);
            union.extend(expansion.expanded);
            union.extend(expansion.subcategories);
        }
        union.into_iter().collect()
    }
}

fn absorb_node(expanded: &mut BTreeSet<String>, node: &InterestNode) {
    expanded.insert(node.canonical.to_owned());
    for (_, terms) in node.synonyms {
        for term in *terms {
            expanded.insert((*term).to_owned());
        }
    }
    for typo in node.typo_variants {
        expanded.insert((*typo).to_owned());
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "set sizes are tiny; the ratio is the similarity definition"
)]
fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    (intersection as f64) / (union as f64)
}

/// The bonus earned by `b` appearing in `a`'s relation sets.
fn relation_bonus(a: &InterestExpansion, b: &InterestExpansion) -> f64 {
    if a.related_direct.contains(&b.term) {
        return DIRECT_RELATION_BONUS;
    }
    if a.related_indirect.contains(&b.term) {
        return INDIRECT_RELATION_BONUS;
    }
    0.0
}

fn pluralise(term: &str) -> Option<String> {
    if term.is_empty() || term.ends_with('s') {
        return None;
    }
    if term.ends_with('x') || term.ends_with('z') || term.ends_with("ch") || term.ends_with("sh") {
        return Some(format!("{term}es"));
    }
    if let Some(stem) = term.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
            return Some(format!("{stem}ies"));
        }
    }
    Some(format!("{term}s"))
}

fn fold_diacritics(term: &str) -> Option<String> {
    let folded: String = term
        .chars()
        .map(|c| {
            DIACRITIC_PAIRS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect();
    (folded != term).then_some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn known_term_expands_to_synonyms_and_variants() {
        let engine = ExpansionEngine::new();
        let expansion = engine.expand("technology");
        assert!(expansion.expanded.contains("technology"));
        assert!(expansion.expanded.contains("tech"));
        assert!(expansion.expanded.contains("tecnología"));
        assert!(expansion.expanded.contains("technologies"));
        assert!(expansion.expanded.contains("technolgy"));
        assert_eq!(expansion.node_weight, Some(1.0));
    }

    #[rstest]
    fn per_language_lists_are_populated() {
        let engine = ExpansionEngine::new();
        let expansion = engine.expand("food");
        let spanish = expansion.by_language.get("es").cloned().unwrap_or_default();
        assert!(spanish.contains(&"comida".to_owned()));
    }

    #[rstest]
    fn unknown_term_expands_minimally() {
        let engine = ExpansionEngine::new();
        let expansion = engine.expand("quixotic");
        assert_eq!(
            expansion.expanded,
            BTreeSet::from(["quixotic".to_owned(), "quixotics".to_owned()])
        );
        assert!(expansion.subcategories.is_empty());
        assert_eq!(expansion.node_weight, None);
    }

    #[rstest]
    fn empty_term_expands_to_the_empty_singleton() {
        let engine = ExpansionEngine::new();
        let expansion = engine.expand("   ");
        assert_eq!(expansion.term, "");
        assert_eq!(expansion.expanded, BTreeSet::from([String::new()]));
    }

    #[rstest]
    fn diacritic_spelling_reaches_the_node() {
        let engine = ExpansionEngine::new();
        // Folded form of a Spanish synonym resolves through the fold rule.
        let expansion = engine.expand("música");
        assert!(expansion.expanded.contains("music"));
    }

    #[rstest]
    #[case("city", "cities")]
    #[case("gadget", "gadgets")]
    #[case("box", "boxes")]
    #[case("day", "days")]
    fn pluralise_applies_english_rules(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(pluralise(input).as_deref(), Some(expected));
    }

    #[rstest]
    fn pluralise_skips_terms_already_plural() {
        assert_eq!(pluralise("sports"), None);
    }

    #[rstest]
    fn similarity_exact_match_is_one() {
        let engine = ExpansionEngine::new();
        assert_eq!(engine.similarity("Food", "food"), 1.0);
    }

    #[rstest]
    fn similarity_synonym_containment_is_high() {
        let engine = ExpansionEngine::new();
        assert_eq!(engine.similarity("tech", "technology"), 0.9);
        assert_eq!(engine.similarity("comida", "food"), 0.9);
    }

    #[rstest]
    fn similarity_rewards_direct_relations() {
        let engine = ExpansionEngine::new();
        let score = engine.similarity("technology", "ai");
        assert!(score >= 0.30, "direct relation should earn the bonus, got {score}");
        assert!(score < 0.9);
    }

    #[rstest]
    #[case("technology", "ai")]
    #[case("ai", "business")]
    #[case("food", "health")]
    #[case("music", "politics")]
    #[case("unknownish", "food")]
    fn similarity_is_symmetric(#[case] a: &str, #[case] b: &str) {
        let engine = ExpansionEngine::new();
        assert_eq!(engine.similarity(a, b), engine.similarity(b, a));
    }

    #[rstest]
    fn similarity_of_unrelated_terms_is_low() {
        let engine = ExpansionEngine::new();
        assert!(engine.similarity("music", "politics") < 0.2);
    }

    #[rstest]
    fn expand_all_unions_expansions_and_subcategories() {
        let engine = ExpansionEngine::new();
        let terms = vec!["tech".to_owned(), "ai".to_owned()];
        let all = engine.expand_all(&terms);
        assert!(all.contains(&"technology".to_owned()));
        assert!(all.contains(&"software".to_owned()));
        assert!(all.contains(&"robotics".to_owned()));
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted, "expansion order is deterministic and sorted");
    }
}
