//! Edit-distance similarity.

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized similarity between two strings in `[0, 1]`.
///
/// Computed as `(len(longer) - distance) / len(longer)`, where lengths count
/// characters. Two empty strings are identical (1.0).
///
/// # Example
/// ```
/// use ordertaker_search::similarity;
///
/// assert_eq!(similarity("taco", "taco"), 1.0);
/// assert!(similarity("cat", "cats") > 0.7);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (longer, shorter, longer_len) = if b_len > a_len {
        (b, a, b_len)
    } else {
        (a, b, a_len)
    };

    if longer_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(longer, shorter);
    (longer_len - distance) as f64 / longer_len as f64
}

/// Naive singularization: strips one trailing `s`.
///
/// `"tacos"` becomes `"taco"`, `"glass"` becomes `"glas"`. Both sides of a
/// comparison are normalized the same way, so the crude rule still pairs
/// singular and plural forms.
#[inline]
pub fn normalize_word(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}
