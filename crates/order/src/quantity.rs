//! Quantity extraction from free-form order text.
//!
//! Text is lowercased and split into clauses on commas and the word "and".
//! Each clause is tried against these prefixes, first match wins:
//!
//! | Prefix                 | Quantity        |
//! |------------------------|-----------------|
//! | `a dozen` / `an dozen` | 12              |
//! | digits                 | parsed value    |
//! | number word            | table value     |
//! | `a` / `an`             | 1               |
//!
//! A clause matching none of them contributes nothing.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Spelled-out quantities understood at the start of a clause.
static NUMBER_WORDS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("one", 1),
        ("single", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("dozen", 12),
    ])
});

const ARTICLES: [&str; 2] = ["a", "an"];

/// A quantity and the item phrase it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityMatch {
    /// Number of units requested (always at least 1)
    pub quantity: u32,
    /// Lowercase, trimmed item phrase
    pub item: String,
}

impl QuantityMatch {
    fn new(quantity: u32, item: &str) -> Self {
        Self {
            quantity,
            item: item.to_string(),
        }
    }
}

/// Extract one `(quantity, phrase)` pair per recognized clause, in text order.
///
/// # Example
/// ```
/// use ordertaker_order::extract_quantities;
///
/// let matches = extract_quantities("Three tacos and two burritos");
/// assert_eq!(matches.len(), 2);
/// assert_eq!((matches[0].quantity, matches[0].item.as_str()), (3, "tacos"));
/// assert_eq!((matches[1].quantity, matches[1].item.as_str()), (2, "burritos"));
/// ```
pub fn extract_quantities(text: &str) -> Vec<QuantityMatch> {
    let lower = text.to_lowercase();

    split_clauses(&lower)
        .into_iter()
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .filter_map(match_clause)
        .collect()
}

/// Split on `,\s*and\s+`, `,\s*` or `\s+and\s+`, leftmost match first.
fn split_clauses(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut clauses = Vec::new();
    let mut start = 0;
    let mut i = 0;

    // Delimiters are pure ASCII, so every split point is a char boundary.
    while i < bytes.len() {
        match delimiter_len(&bytes[i..]) {
            Some(len) => {
                clauses.push(&text[start..i]);
                i += len;
                start = i;
            }
            None => i += 1,
        }
    }
    clauses.push(&text[start..]);

    clauses
}

/// Length of the clause delimiter starting at `rest[0]`, if any.
fn delimiter_len(rest: &[u8]) -> Option<usize> {
    match *rest.first()? {
        b',' => {
            let after_ws = 1 + whitespace_len(&rest[1..]);
            Some(after_ws + and_keyword_len(&rest[after_ws..]).unwrap_or(0))
        }
        c if c.is_ascii_whitespace() => {
            let ws = whitespace_len(rest);
            and_keyword_len(&rest[ws..]).map(|len| ws + len)
        }
        _ => None,
    }
}

/// `and` followed by at least one whitespace character.
fn and_keyword_len(rest: &[u8]) -> Option<usize> {
    let tail = rest.strip_prefix(b"and")?;
    match whitespace_len(tail) {
        0 => None,
        ws => Some(3 + ws),
    }
}

fn whitespace_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_whitespace()).count()
}

fn match_clause(clause: &str) -> Option<QuantityMatch> {
    if let Some(item) = strip_article(clause).and_then(|rest| strip_word(rest, "dozen")) {
        return Some(QuantityMatch::new(12, item));
    }

    if let Some((digits, item)) = split_leading_digits(clause) {
        // Zero and out-of-range counts are not quantities; the clause is dropped.
        return digits
            .parse::<u32>()
            .ok()
            .filter(|&quantity| quantity > 0)
            .map(|quantity| QuantityMatch::new(quantity, item));
    }

    let end = clause.find(|c: char| c.is_ascii_whitespace()).unwrap_or(clause.len());
    let (word, tail) = clause.split_at(end);
    if let Some(&quantity) = NUMBER_WORDS.get(word) {
        if let Some(item) = strip_separator(tail) {
            return Some(QuantityMatch::new(quantity, item));
        }
    }

    strip_article(clause)
        .filter(|item| !item.starts_with("dozen"))
        .map(|item| QuantityMatch::new(1, item))
}

/// `a <rest>` or `an <rest>`.
fn strip_article(clause: &str) -> Option<&str> {
    ARTICLES.iter().find_map(|article| strip_word(clause, article))
}

/// `<word><whitespace><rest>` with a non-empty rest.
fn strip_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    strip_separator(text.strip_prefix(word)?)
}

/// `<digits><whitespace><rest>` with a non-empty rest.
fn split_leading_digits(clause: &str) -> Option<(&str, &str)> {
    let end = clause.find(|c: char| !c.is_ascii_digit()).unwrap_or(clause.len());
    if end == 0 {
        return None;
    }
    let (digits, tail) = clause.split_at(end);
    strip_separator(tail).map(|item| (digits, item))
}

/// Requires at least one leading whitespace character followed by some text,
/// returning that text up to the end of its line, trimmed.
fn strip_separator(tail: &str) -> Option<&str> {
    let rest = tail.trim_start_matches(|c: char| c.is_ascii_whitespace());
    if rest.len() == tail.len() || rest.is_empty() {
        return None;
    }
    let line = rest.split('\n').next().unwrap_or(rest);
    Some(line.trim())
}
