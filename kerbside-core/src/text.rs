//! String-similarity primitives shared by the composite scorer's categorical
//! matching and the canonical topic matcher.
//!
//! All comparisons are case-insensitive and operate on Unicode scalar values,
//! so multi-byte labels compare by character rather than byte.

/// Levenshtein edit distance between two strings, by character.
///
/// # Examples
/// ```
/// use kerbside_core::text::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, a_ch) in a_chars.iter().enumerate() {
        if let Some(first) = current.first_mut() {
            *first = i + 1;
        }
        for (j, b_ch) in b_chars.iter().enumerate() {
            let substitution_cost = usize::from(a_ch != b_ch);
            let deletion = previous.get(j + 1).copied().unwrap_or(usize::MAX) + 1;
            let insertion = current.get(j).copied().unwrap_or(usize::MAX) + 1;
            let substitution = previous.get(j).copied().unwrap_or(usize::MAX) + substitution_cost;
            if let Some(cell) = current.get_mut(j + 1) {
                *cell = deletion.min(insertion).min(substitution);
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous.last().copied().unwrap_or(0)
}

/// Similarity in `[0, 1]` as one minus the length-normalised edit distance.
///
/// Two empty strings are identical (1.0); one empty string against a
/// non-empty one scores 0.0.
#[must_use]
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - (levenshtein(a, b) as f64) / (longest as f64)
}

/// Similarity between two free-text labels.
///
/// Exact case-insensitive equality scores 1.0; substring containment in
/// either direction scores 0.9; anything else falls back to
/// [`edit_similarity`] over the lowercased labels.
///
/// # Examples
/// ```
/// use kerbside_core::text::label_similarity;
///
/// assert_eq!(label_similarity("Tech", "tech"), 1.0);
/// assert_eq!(label_similarity("tech", "technology"), 0.9);
/// assert!(label_similarity("jazz", "politics") < 0.3);
/// ```
#[must_use]
pub fn label_similarity(a: &str, b: &str) -> f64 {
    let a_lower = a.trim().to_lowercase();
    let b_lower = b.trim().to_lowercase();
    if a_lower == b_lower {
        return 1.0;
    }
    if a_lower.is_empty() || b_lower.is_empty() {
        return 0.0;
    }
    if a_lower.contains(&b_lower) || b_lower.contains(&a_lower) {
        return 0.9;
    }
    edit_similarity(&a_lower, &b_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", 0)]
    #[case("abc", "abc", 0)]
    #[case("abc", "abd", 1)]
    #[case("flaw", "lawn", 2)]
    #[case("café", "cafe", 1)]
    fn levenshtein_cases(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(levenshtein(a, b), expected);
        assert_eq!(levenshtein(b, a), expected);
    }

    #[rstest]
    fn edit_similarity_of_equal_strings_is_one() {
        assert_eq!(edit_similarity("music", "music"), 1.0);
        assert_eq!(edit_similarity("", ""), 1.0);
    }

    #[rstest]
    fn edit_similarity_of_disjoint_strings_is_zero() {
        assert_eq!(edit_similarity("abc", "xyz"), 0.0);
    }

    #[rstest]
    fn label_similarity_rewards_containment() {
        assert_eq!(label_similarity("art", "street art"), 0.9);
        assert_eq!(label_similarity("STREET ART", "art"), 0.9);
    }

    #[rstest]
    fn label_similarity_ignores_surrounding_whitespace() {
        assert_eq!(label_similarity("  tech ", "tech"), 1.0);
    }

    #[rstest]
    fn empty_label_never_matches_a_real_one() {
        assert_eq!(label_similarity("", "tech"), 0.0);
    }
}
