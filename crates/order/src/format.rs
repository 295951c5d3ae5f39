//! Human-readable rendering of an [`OrderResult`].

use crate::OrderResult;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Items matched with confidence below this get a warning line.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.8;

const LOW_CONFIDENCE_WARNING: &str = "(⚠️ Low confidence match - is this correct?)";

/// Renders order results as plain text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderFormatter {
    /// Confidence below which an item is flagged
    pub low_confidence: f64,
}

impl Default for OrderFormatter {
    fn default() -> Self {
        Self {
            low_confidence: LOW_CONFIDENCE_THRESHOLD,
        }
    }
}

impl OrderFormatter {
    /// Creates a formatter with a custom low-confidence threshold.
    pub fn new(low_confidence: f64) -> Self {
        Self { low_confidence }
    }

    /// Render `result` as text.
    ///
    /// ```text
    /// === YOUR ORDER ===
    /// 2x crunchy taco - $2.98
    /// ---
    /// TOTAL: $2.98
    ///
    /// === ERRORS ===
    /// ❌ Could not find a match for "flying saucer".
    /// ```
    ///
    /// The order block is omitted when there are no items, the error block
    /// when there are no errors.
    pub fn format(&self, result: &OrderResult) -> String {
        Rendered {
            result,
            low_confidence: self.low_confidence,
        }
        .to_string()
    }
}

/// Render `result` with the default low-confidence threshold.
pub fn format_order(result: &OrderResult) -> String {
    OrderFormatter::default().format(result)
}

struct Rendered<'a> {
    result: &'a OrderResult,
    low_confidence: f64,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.result.items.is_empty() {
            writeln!(f, "=== YOUR ORDER ===")?;
            for item in &self.result.items {
                writeln!(f, "{}x {} - ${}", item.quantity, item.name, money(item.subtotal))?;
                if item.confidence < self.low_confidence {
                    writeln!(f, "{LOW_CONFIDENCE_WARNING}")?;
                }
            }
            writeln!(f, "---")?;
            writeln!(f, "TOTAL: ${}", money(self.result.total))?;
        }

        if !self.result.errors.is_empty() {
            writeln!(f)?;
            writeln!(f, "=== ERRORS ===")?;
            for error in &self.result.errors {
                writeln!(f, "❌ {error}")?;
            }
        }

        Ok(())
    }
}

/// Render an amount the way the order receipt does: `12.5` becomes `12.50`.
pub fn format_money(amount: Decimal) -> String {
    money(amount).to_string()
}

/// Round half away from zero and always show two decimal places.
fn money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
