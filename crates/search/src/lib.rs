//! Fuzzy menu matching for order-taker.
//!
//! This crate provides:
//! - Levenshtein edit distance and normalized similarity
//! - Naive plural normalization
//! - Best-match lookup of a phrase against a menu (exact, word subset,
//!   whole-string similarity)
//! - Batch matching with optional parallelism

mod fuzzy;
mod matcher;

pub use fuzzy::{levenshtein_distance, normalize_word, similarity};
pub use matcher::{
    find_best_match, find_best_match_with, match_phrases, MatchOptions, MatchOutcome, MatchRule,
};
