//! Order assembly: extraction + matching per clause.

use crate::quantity::extract_quantities;
use crate::{OrderItem, OrderResult};
use ordertaker_menu::MenuItem;
use ordertaker_search::{find_best_match_with, match_phrases, MatchOptions, MatchOutcome};

/// Parse free-form order text against a menu using default match thresholds.
///
/// Never fails: clauses that match nothing become entries in
/// [`OrderResult::errors`]. When no clause carries a recognizable quantity,
/// the whole text is matched as a single item.
///
/// # Example
/// ```
/// use ordertaker_menu::MenuItem;
/// use ordertaker_order::parse_order;
/// use rust_decimal::Decimal;
///
/// let menu = vec![
///     MenuItem::new("crunchy taco", Decimal::new(149, 2)),
///     MenuItem::new("burrito", Decimal::new(229, 2)),
/// ];
///
/// let result = parse_order("two crunchy tacos and a burrito", &menu);
/// assert_eq!(result.items.len(), 2);
/// assert_eq!(result.total, Decimal::new(527, 2));
/// assert!(result.errors.is_empty());
/// ```
pub fn parse_order(text: &str, menu: &[MenuItem]) -> OrderResult {
    parse_order_with(text, menu, &MatchOptions::default())
}

/// Parse free-form order text against a menu with explicit match thresholds.
pub fn parse_order_with(text: &str, menu: &[MenuItem], options: &MatchOptions) -> OrderResult {
    let clauses = extract_quantities(text);
    let mut result = OrderResult::default();

    if clauses.is_empty() {
        tracing::debug!(text, "No quantity recognized, matching whole text");
        match find_best_match_with(text, menu, options) {
            Some(outcome) => push_match(&mut result, text, &outcome, 1),
            None => result.push_unmatched(text),
        }
    } else {
        let phrases: Vec<&str> = clauses.iter().map(|clause| clause.item.as_str()).collect();
        let outcomes = match_phrases(&phrases, menu, options);

        for (clause, outcome) in clauses.iter().zip(outcomes) {
            match outcome {
                Some(outcome) => push_match(&mut result, &clause.item, &outcome, clause.quantity),
                None => {
                    tracing::debug!(phrase = %clause.item, "No menu match");
                    result.push_unmatched(&clause.item);
                }
            }
        }
    }

    tracing::info!(
        items = result.items.len(),
        errors = result.errors.len(),
        total = %result.total,
        "Order parsed"
    );

    result
}

// A match whose subtotal or running total overflows becomes an error entry.
fn push_match(
    result: &mut OrderResult,
    phrase: &str,
    outcome: &MatchOutcome<'_>,
    quantity: u32,
) {
    tracing::debug!(
        phrase,
        item = %outcome.item.name,
        rule = ?outcome.rule,
        confidence = outcome.confidence,
        "Menu match"
    );

    let added =
        OrderItem::from_match(outcome, quantity).is_some_and(|item| result.push_item(item));
    if !added {
        tracing::warn!(phrase, quantity, price = %outcome.item.price, "Order amount overflows");
        result.push_unpriceable(phrase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(name: &str, cents: i64) -> MenuItem {
        MenuItem::new(name, Decimal::new(cents, 2))
    }

    fn menu() -> Vec<MenuItem> {
        vec![item("crunchy taco", 149), item("soft taco", 149), item("burrito", 229)]
    }

    #[test]
    fn test_two_clauses() {
        let result = parse_order("two crunchy tacos and a burrito", &menu());

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].name, "crunchy taco");
        assert_eq!(result.items[0].quantity, 2);
        assert_eq!(result.items[0].subtotal, Decimal::new(298, 2));
        assert_eq!(result.items[1].name, "burrito");
        assert_eq!(result.items[1].quantity, 1);
        assert_eq!(result.items[1].subtotal, Decimal::new(229, 2));
        assert_eq!(result.total, Decimal::new(527, 2));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_unmatched_clause() {
        let result = parse_order("a flying saucer", &menu());

        assert!(result.items.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("\"flying saucer\""));
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_mixed_clauses_keep_order() {
        let result = parse_order("2 soft tacos, a flying saucer, and 3 burritos", &menu());

        let names: Vec<&str> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["soft taco", "burrito"]);
        assert_eq!(
            result.errors,
            vec!["Could not find a match for \"flying saucer\".".to_string()]
        );
        assert_eq!(result.total, Decimal::new(298 + 687, 2));
    }

    #[test]
    fn test_whole_text_fallback() {
        let result = parse_order("Crunchy Taco", &menu());

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].quantity, 1);
        assert_eq!(result.items[0].confidence, 1.0);
        assert_eq!(result.total, Decimal::new(149, 2));
    }

    #[test]
    fn test_whole_text_fallback_no_match() {
        let result = parse_order("surprise me", &menu());

        assert!(result.items.is_empty());
        assert_eq!(result.errors, vec!["Could not find a match for \"surprise me\".".to_string()]);
    }

    #[test]
    fn test_empty_text() {
        let result = parse_order("", &menu());

        assert!(result.items.is_empty());
        assert_eq!(result.errors, vec!["Could not find a match for \"\".".to_string()]);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_empty_menu() {
        let result = parse_order("two tacos and a burrito", &[]);

        assert!(result.items.is_empty());
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_unrecognized_clause_silently_dropped() {
        let result = parse_order("tacos and 2 burritos", &menu());

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "burrito");
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_total_is_sum_of_subtotals() {
        let text = "a dozen crunchy tacos, 3 soft tacos and eleven burritos";
        let result = parse_order(text, &menu());

        let sum: Decimal = result.items.iter().map(|i| i.subtotal).sum();
        assert_eq!(result.total, sum);
        assert_eq!(result.total, Decimal::new(12 * 149 + 3 * 149 + 11 * 229, 2));
    }

    #[test]
    fn test_subtotal_overflow_becomes_error() {
        let price = Decimal::from_i128_with_scale(10_i128.pow(20), 0);
        let result = parse_order("4294967295 tacos", &[MenuItem::new("taco", price)]);

        assert!(result.items.is_empty());
        assert_eq!(result.errors, vec!["Order amount for \"tacos\" is too large.".to_string()]);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_large_price_overflow_becomes_error() {
        let price = Decimal::from_i128_with_scale(4 * 10_i128.pow(28), 0);
        let result = parse_order("2 tacos", &[MenuItem::new("taco", price)]);

        assert!(result.items.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_total_overflow_keeps_sum_invariant() {
        let price = Decimal::from_i128_with_scale(4 * 10_i128.pow(28), 0);
        let menu = vec![MenuItem::new("taco", price), MenuItem::new("burrito", price)];
        let result = parse_order("a taco and a burrito", &menu);

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "taco");
        assert_eq!(result.errors, vec!["Order amount for \"burrito\" is too large.".to_string()]);
        let sum: Decimal = result.items.iter().map(|i| i.subtotal).sum();
        assert_eq!(result.total, sum);
    }

    #[test]
    fn test_custom_options() {
        let halved = MatchOptions {
            subset_weight: 0.5,
            ..MatchOptions::default()
        };
        let result = parse_order_with("a crunchy", &menu(), &halved);
        assert!((result.items[0].confidence - 0.25).abs() < 1e-9);
    }
}
