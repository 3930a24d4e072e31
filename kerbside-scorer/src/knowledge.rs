//! Static interest knowledge base.
//!
//! A hand-curated table of interest nodes covering the content-discovery
//! domain: per-language synonym lists, a relation graph (direct and indirect
//! neighbours), subcategories, and a per-node weight. The table is immutable
//! and indexed once, lazily, by every spelling it contains: canonical term,
//! synonyms in every language, and known typo variants.
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::LazyLock;

/// One node of the interest graph.
#[derive(Debug)]
pub(crate) struct InterestNode {
    /// Canonical lowercase term.
    pub(crate) canonical: &'static str,
    /// Relative importance of the node, in `0.0..=1.0`.
    pub(crate) weight: f64,
    /// Synonyms per ISO 639-1 language code.
    pub(crate) synonyms: &'static [(&'static str, &'static [&'static str])],
    /// Strongly related canonical terms.
    pub(crate) related_direct: &'static [&'static str],
    /// Loosely related canonical terms.
    pub(crate) related_indirect: &'static [&'static str],
    /// Narrower terms inside this interest.
    pub(crate) subcategories: &'static [&'static str],
    /// Misspellings seen often enough to be worth matching.
    pub(crate) typo_variants: &'static [&'static str],
}

pub(crate) static NODES: &[InterestNode] = &[
    InterestNode {
        canonical: "technology",
        weight: 1.0,
        synonyms: &[
            ("en", &["tech", "digital", "innovation"]),
            ("es", &["tecnología", "tecnologia"]),
            ("de", &["technologie", "technik"]),
            ("fr", &["technologie", "numérique"]),
        ],
        related_direct: &["ai", "science", "business"],
        related_indirect: &["cinema", "politics"],
        subcategories: &["software", "hardware", "gadgets", "cybersecurity", "startups"],
        typo_variants: &["technolgy", "tecnology", "techonology"],
    },
    InterestNode {
        canonical: "ai",
        weight: 1.0,
        synonyms: &[
            ("en", &["artificial intelligence", "machine learning"]),
            ("es", &["inteligencia artificial"]),
            ("de", &["künstliche intelligenz", "ki"]),
            ("fr", &["intelligence artificielle"]),
        ],
        related_direct: &["technology", "science"],
        related_indirect: &["business"],
        subcategories: &["chatbots", "robotics", "neural networks", "computer vision"],
        typo_variants: &["artifical intelligence", "machine learing"],
    },
    InterestNode {
        canonical: "food",
        weight: 0.9,
        synonyms: &[
            ("en", &["cuisine", "dining", "gastronomy"]),
            ("es", &["comida", "gastronomía", "cocina"]),
            ("de", &["essen", "küche"]),
            ("fr", &["cuisine", "gastronomie"]),
        ],
        related_direct: &["restaurants", "travel"],
        related_indirect: &["health", "markets"],
        subcategories: &["street food", "baking", "vegan", "coffee", "brunch"],
        typo_variants: &["cusine", "restaraunts"],
    },
    InterestNode {
        canonical: "restaurants",
        weight: 0.8,
        synonyms: &[
            ("en", &["eateries", "bistros"]),
            ("es", &["restaurantes"]),
            ("de", &["restaurants", "lokale"]),
            ("fr", &["restaurants", "brasseries"]),
        ],
        related_direct: &["food"],
        related_indirect: &["travel", "markets"],
        subcategories: &["fine dining", "takeaway", "pop-ups"],
        typo_variants: &["restuarants", "resturants"],
    },
    InterestNode {
        canonical: "sports",
        weight: 0.9,
        synonyms: &[
            ("en", &["sport", "athletics"]),
            ("es", &["deportes", "deporte"]),
            ("de", &["sport"]),
            ("fr", &["sports", "sport"]),
        ],
        related_direct: &["health"],
        related_indirect: &["travel"],
        subcategories: &["football", "cycling", "running", "tennis", "basketball"],
        typo_variants: &["sprots"],
    },
    InterestNode {
        canonical: "music",
        weight: 0.9,
        synonyms: &[
            ("en", &["concerts", "gigs"]),
            ("es", &["música", "musica", "conciertos"]),
            ("de", &["musik", "konzerte"]),
            ("fr", &["musique", "concerts"]),
        ],
        related_direct: &["art", "nightlife"],
        related_indirect: &["cinema"],
        subcategories: &["jazz", "classical", "electronic", "indie", "hip hop"],
        typo_variants: &["muisc"],
    },
    InterestNode {
        canonical: "art",
        weight: 0.8,
        synonyms: &[
            ("en", &["arts", "galleries", "exhibitions"]),
            ("es", &["arte", "exposiciones"]),
            ("de", &["kunst", "ausstellungen"]),
            ("fr", &["art", "expositions"]),
        ],
        related_direct: &["music", "cinema"],
        related_indirect: &["travel"],
        subcategories: &["street art", "photography", "sculpture", "design"],
        typo_variants: &["galeries"],
    },
    InterestNode {
        canonical: "travel",
        weight: 0.8,
        synonyms: &[
            ("en", &["tourism", "trips"]),
            ("es", &["viajes", "turismo"]),
            ("de", &["reisen", "tourismus"]),
            ("fr", &["voyages", "tourisme"]),
        ],
        related_direct: &["food", "nature"],
        related_indirect: &["art", "sports"],
        subcategories: &["city breaks", "hiking", "museums", "day trips"],
        typo_variants: &["travell", "tourisim"],
    },
    InterestNode {
        canonical: "politics",
        weight: 0.7,
        synonyms: &[
            ("en", &["government", "policy"]),
            ("es", &["política", "politica", "gobierno"]),
            ("de", &["politik", "regierung"]),
            ("fr", &["politique", "gouvernement"]),
        ],
        related_direct: &["business"],
        related_indirect: &["technology", "health"],
        subcategories: &["elections", "council", "legislation"],
        typo_variants: &["goverment", "politcs"],
    },
    InterestNode {
        canonical: "science",
        weight: 0.8,
        synonyms: &[
            ("en", &["research", "discovery"]),
            ("es", &["ciencia", "investigación"]),
            ("de", &["wissenschaft", "forschung"]),
            ("fr", &["science", "recherche"]),
        ],
        related_direct: &["technology", "ai", "health"],
        related_indirect: &["nature"],
        subcategories: &["space", "climate", "physics", "biology"],
        typo_variants: &["sceince"],
    },
    InterestNode {
        canonical: "health",
        weight: 0.8,
        synonyms: &[
            ("en", &["wellness", "fitness", "wellbeing"]),
            ("es", &["salud", "bienestar"]),
            ("de", &["gesundheit", "fitness"]),
            ("fr", &["santé", "bien-être"]),
        ],
        related_direct: &["sports", "science"],
        related_indirect: &["food"],
        subcategories: &["nutrition", "yoga", "mental health", "running"],
        typo_variants: &["helath"],
    },
    InterestNode {
        canonical: "cinema",
        weight: 0.7,
        synonyms: &[
            ("en", &["film", "movies", "films"]),
            ("es", &["cine", "películas", "peliculas"]),
            ("de", &["kino", "filme"]),
            ("fr", &["cinéma", "cinema", "films"]),
        ],
        related_direct: &["art"],
        related_indirect: &["music", "technology"],
        subcategories: &["premieres", "documentaries", "festivals"],
        typo_variants: &["moveis"],
    },
    InterestNode {
        canonical: "business",
        weight: 0.7,
        synonyms: &[
            ("en", &["economy", "finance", "commerce"]),
            ("es", &["negocios", "economía", "economia"]),
            ("de", &["wirtschaft", "finanzen"]),
            ("fr", &["affaires", "économie", "economie"]),
        ],
        related_direct: &["technology", "politics"],
        related_indirect: &["ai"],
        subcategories: &["startups", "markets", "retail", "property"],
        typo_variants: &["bussiness", "busines"],
    },
    InterestNode {
        canonical: "nature",
        weight: 0.7,
        synonyms: &[
            ("en", &["outdoors", "wildlife", "parks"]),
            ("es", &["naturaleza", "parques"]),
            ("de", &["natur", "parks"]),
            ("fr", &["nature", "parcs"]),
        ],
        related_direct: &["travel"],
        related_indirect: &["science", "health"],
        subcategories: &["gardens", "birdwatching", "rivers"],
        typo_variants: &["natrue"],
    },
    InterestNode {
        canonical: "nightlife",
        weight: 0.6,
        synonyms: &[
            ("en", &["bars", "clubs", "pubs"]),
            ("es", &["vida nocturna", "bares"]),
            ("de", &["nachtleben", "bars"]),
            ("fr", &["vie nocturne", "bars"]),
        ],
        related_direct: &["music"],
        related_indirect: &["food"],
        subcategories: &["cocktails", "live music", "comedy"],
        typo_variants: &["nightlfe"],
    },
    InterestNode {
        canonical: "markets",
        weight: 0.6,
        synonyms: &[
            ("en", &["street markets", "fairs"]),
            ("es", &["mercados", "ferias"]),
            ("de", &["märkte", "flohmärkte"]),
            ("fr", &["marchés", "brocantes"]),
        ],
        related_direct: &["food"],
        related_indirect: &["business", "restaurants"],
        subcategories: &["farmers market", "flea market", "antiques"],
        typo_variants: &["makets"],
    },
];

/// Every spelling in the table, lowercased, pointing at its node.
static INDEX: LazyLock<HashMap<&'static str, &'static InterestNode>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for node in NODES {
        map.insert(node.canonical, node);
        for (_, terms) in node.synonyms {
            for term in *terms {
                map.entry(*term).or_insert(node);
            }
        }
        for typo in node.typo_variants {
            map.entry(*typo).or_insert(node);
        }
    }
    map
});

/// Look up the node for a spelling; the lookup key must already be
/// lowercase and trimmed.
pub(crate) fn node_for(term: &str) -> Option<&'static InterestNode> {
    INDEX.get(term).copied()
}

/// Report whether a lowercase label belongs to the food corner of the graph.
pub(crate) fn is_food_term(term: &str) -> bool {
    node_for(term).is_some_and(|node| matches!(node.canonical, "food" | "restaurants" | "markets"))
        || node_for("food").is_some_and(|node| node.subcategories.contains(&term))
}
