//! Best-match lookup of a free-text phrase against a menu.
//!
//! Candidates are scored by an explicit priority chain:
//!
//! 1. **Exact** - phrase equals the item name, directly or after stripping a
//!    trailing `s` from both. Returns immediately with confidence 1.0.
//! 2. **Word subset** - every phrase word matches some item word (identical,
//!    identical after normalization, or similar above `token_threshold`).
//!    Scores `coverage * subset_weight`, so it always ranks below exact.
//! 3. **Similarity** - whole-string similarity of the normalized forms, kept
//!    only above `similarity_threshold`.
//!
//! Rule 3 is only tried for candidates that fail rule 2.

use crate::fuzzy::{normalize_word, similarity};
use ordertaker_menu::MenuItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tunable thresholds for the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Minimum word-to-word similarity for a fuzzy word match (exclusive)
    pub token_threshold: f64,
    /// Multiplier applied to word-subset coverage
    pub subset_weight: f64,
    /// Minimum whole-string similarity for a fallback match (exclusive)
    pub similarity_threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            token_threshold: 0.85,
            subset_weight: 0.9,
            similarity_threshold: 0.7,
        }
    }
}

/// Which rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Direct or normalized name equality
    Exact,
    /// All phrase words found among the item's words
    WordSubset,
    /// Whole-string edit-distance similarity
    Similarity,
}

/// The menu item chosen for a phrase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOutcome<'m> {
    /// Matched menu item
    pub item: &'m MenuItem,
    /// Certainty in `[0, 1]`
    pub confidence: f64,
    /// Rule that produced the match
    pub rule: MatchRule,
}

/// Find the menu item that best matches `phrase` using default thresholds.
///
/// # Example
/// ```
/// use ordertaker_menu::MenuItem;
/// use ordertaker_search::{find_best_match, MatchRule};
/// use rust_decimal::Decimal;
///
/// let menu = vec![
///     MenuItem::new("crunchy taco", Decimal::new(149, 2)),
///     MenuItem::new("soft taco", Decimal::new(149, 2)),
/// ];
///
/// let outcome = find_best_match("crunchy tacos", &menu).unwrap();
/// assert_eq!(outcome.item.name, "crunchy taco");
/// assert_eq!(outcome.confidence, 1.0);
/// assert_eq!(outcome.rule, MatchRule::Exact);
/// ```
pub fn find_best_match<'m>(phrase: &str, menu: &'m [MenuItem]) -> Option<MatchOutcome<'m>> {
    find_best_match_with(phrase, menu, &MatchOptions::default())
}

/// Find the menu item that best matches `phrase`.
///
/// Returns `None` when no candidate qualifies under any rule. Ties keep the
/// earlier menu item.
pub fn find_best_match_with<'m>(
    phrase: &str,
    menu: &'m [MenuItem],
    options: &MatchOptions,
) -> Option<MatchOutcome<'m>> {
    let input = phrase.trim().to_lowercase();
    let normalized_input = normalize_word(&input);
    let input_words: Vec<&str> = input.split_whitespace().collect();
    let names: Vec<String> = menu.iter().map(|item| item.name.to_lowercase()).collect();

    let mut cache = SimilarityCache::default();
    let mut best: Option<MatchOutcome<'m>> = None;
    let mut best_score = 0.0;

    for (item, name) in menu.iter().zip(&names) {
        let normalized_name = normalize_word(name);

        if input == *name || normalized_input == normalized_name {
            tracing::trace!(phrase = %input, item = %item.name, "Exact match");
            return Some(MatchOutcome {
                item,
                confidence: 1.0,
                rule: MatchRule::Exact,
            });
        }

        let item_words: Vec<&str> = name.split_whitespace().collect();

        if let Some(matched) = word_subset_match(&input_words, &item_words, options, &mut cache) {
            let coverage = (matched as f64 / item_words.len() as f64).min(1.0);
            let score = coverage * options.subset_weight;
            if score > best_score {
                best = Some(MatchOutcome {
                    item,
                    confidence: score,
                    rule: MatchRule::WordSubset,
                });
                best_score = score;
            }
            continue;
        }

        let score = similarity(normalized_input, normalized_name);
        if score > best_score && score > options.similarity_threshold {
            best = Some(MatchOutcome {
                item,
                confidence: score,
                rule: MatchRule::Similarity,
            });
            best_score = score;
        }
    }

    best
}

/// Match several phrases against the same menu, preserving input order.
///
/// Runs in parallel with the `parallel` feature (enabled by default).
pub fn match_phrases<'m, S>(
    phrases: &[S],
    menu: &'m [MenuItem],
    options: &MatchOptions,
) -> Vec<Option<MatchOutcome<'m>>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        phrases
            .par_iter()
            .map(|phrase| find_best_match_with(phrase.as_ref(), menu, options))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        phrases
            .iter()
            .map(|phrase| find_best_match_with(phrase.as_ref(), menu, options))
            .collect()
    }
}

/// Returns the number of matched phrase words when every phrase word finds a
/// counterpart among the item words, `None` otherwise.
fn word_subset_match<'a>(
    input_words: &[&'a str],
    item_words: &[&'a str],
    options: &MatchOptions,
    cache: &mut SimilarityCache<'a>,
) -> Option<usize> {
    if input_words.is_empty() {
        return None;
    }

    for &input_word in input_words {
        let normalized_input = normalize_word(input_word);
        let found = item_words.iter().any(|&item_word| {
            let normalized_item = normalize_word(item_word);
            item_word == input_word
                || normalized_item == normalized_input
                || cache.similarity(normalized_input, normalized_item) > options.token_threshold
        });
        if !found {
            return None;
        }
    }

    Some(input_words.len())
}

/// Per-call memo of word-pair similarities.
#[derive(Default)]
struct SimilarityCache<'a> {
    scores: HashMap<(&'a str, &'a str), f64>,
}

impl<'a> SimilarityCache<'a> {
    fn similarity(&mut self, a: &'a str, b: &'a str) -> f64 {
        *self.scores.entry((a, b)).or_insert_with(|| similarity(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(name: &str, cents: i64) -> MenuItem {
        MenuItem::new(name, Decimal::new(cents, 2))
    }

    fn taco_menu() -> Vec<MenuItem> {
        vec![item("crunchy taco", 149), item("soft taco", 149)]
    }

    #[test]
    fn test_exact_match() {
        let menu = taco_menu();
        let outcome = find_best_match("soft taco", &menu).unwrap();
        assert_eq!(outcome.item.name, "soft taco");
        assert_eq!(outcome.confidence, 1.0);
        assert_eq!(outcome.rule, MatchRule::Exact);
    }

    #[test]
    fn test_exact_match_after_plural_strip() {
        let menu = taco_menu();
        let outcome = find_best_match("crunchy tacos", &menu).unwrap();
        assert_eq!(outcome.item.name, "crunchy taco");
        assert_eq!(outcome.confidence, 1.0);
    }

    #[test]
    fn test_exact_match_ignores_case_and_padding() {
        let menu = taco_menu();
        let outcome = find_best_match("  Crunchy Taco ", &menu).unwrap();
        assert_eq!(outcome.item.name, "crunchy taco");
        assert_eq!(outcome.rule, MatchRule::Exact);
    }

    #[test]
    fn test_word_subset_any_order() {
        let menu = vec![item("beef burrito supreme", 449)];
        let outcome = find_best_match("supreme beef burrito", &menu).unwrap();
        assert_eq!(outcome.rule, MatchRule::WordSubset);
        assert!((outcome.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_word_subset_beats_similarity() {
        let menu = vec![item("supreme veggie burrito", 399), item("beef burrito supreme", 449)];

        let veggie = find_best_match("supreme beef burrito", &menu[..1]).unwrap();
        assert_eq!(veggie.rule, MatchRule::Similarity);
        assert!(veggie.confidence < 0.9);

        let outcome = find_best_match("supreme beef burrito", &menu).unwrap();
        assert_eq!(outcome.item.name, "beef burrito supreme");
        assert_eq!(outcome.rule, MatchRule::WordSubset);
    }

    #[test]
    fn test_word_subset_partial_coverage() {
        let menu = vec![item("cheesy gordita crunch", 399)];
        let outcome = find_best_match("gordita", &menu).unwrap();
        assert_eq!(outcome.rule, MatchRule::WordSubset);
        assert!((outcome.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_word_subset_tolerates_typos() {
        let menu = vec![item("nachos bellgrande", 549)];
        let outcome = find_best_match("nacho bellgrand", &menu).unwrap();
        assert_eq!(outcome.item.name, "nachos bellgrande");
        assert_eq!(outcome.rule, MatchRule::WordSubset);
    }

    #[test]
    fn test_word_subset_confidence_capped() {
        let menu = vec![item("taco", 149)];
        let outcome = find_best_match("taco taco", &menu).unwrap();
        assert_eq!(outcome.rule, MatchRule::WordSubset);
        assert!((outcome.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_single_word_typo() {
        let menu = vec![item("quesadilla", 449)];
        let outcome = find_best_match("quesadila", &menu).unwrap();
        assert_eq!(outcome.rule, MatchRule::WordSubset);
        assert!((outcome.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_fallback() {
        let menu = vec![item("chalupa supreme", 399)];
        let outcome = find_best_match("chalupasupreme", &menu).unwrap();
        assert_eq!(outcome.rule, MatchRule::Similarity);
        assert!((outcome.confidence - 14.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_match() {
        let menu = taco_menu();
        assert!(find_best_match("flying saucer", &menu).is_none());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(find_best_match("taco", &[]).is_none());
        assert!(find_best_match("", &taco_menu()).is_none());
        assert!(find_best_match("   ", &taco_menu()).is_none());
    }

    #[test]
    fn test_exact_short_circuits_earlier_best() {
        let menu = vec![item("bean burrito", 189), item("burrito", 229)];
        let outcome = find_best_match("burrito", &menu).unwrap();
        assert_eq!(outcome.item.name, "burrito");
        assert_eq!(outcome.rule, MatchRule::Exact);
    }

    #[test]
    fn test_tie_keeps_first_item() {
        let menu = vec![item("chicken taco", 199), item("chicken burrito", 299)];
        let outcome = find_best_match("chicken", &menu).unwrap();
        assert_eq!(outcome.item.name, "chicken taco");
    }

    #[test]
    fn test_custom_thresholds() {
        let menu = vec![item("chalupa supreme", 399)];
        let strict = MatchOptions {
            similarity_threshold: 0.99,
            ..MatchOptions::default()
        };
        assert!(find_best_match_with("chalupasupreme", &menu, &strict).is_none());
    }

    #[test]
    fn test_match_phrases_preserves_order() {
        let menu = taco_menu();
        let phrases = ["soft tacos", "flying saucer", "crunchy taco"];
        let outcomes = match_phrases(&phrases, &menu, &MatchOptions::default());

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].unwrap().item.name, "soft taco");
        assert!(outcomes[1].is_none());
        assert_eq!(outcomes[2].unwrap().item.name, "crunchy taco");
    }
}
