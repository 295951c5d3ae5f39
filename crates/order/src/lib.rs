//! Natural-language order parsing for order-taker.
//!
//! Turns text like "two crunchy tacos and a burrito" into priced line items
//! against a supplied menu:
//!
//! 1. [`extract_quantities`] splits the text into clauses and reads a quantity
//!    prefix from each.
//! 2. Each phrase is matched against the menu with `ordertaker_search`.
//! 3. [`parse_order`] collects items, per-clause errors and the total.
//! 4. [`format_order`] renders the result for a terminal.

mod assemble;
mod format;
mod quantity;

pub use assemble::{parse_order, parse_order_with};
pub use format::{format_money, format_order, OrderFormatter, LOW_CONFIDENCE_THRESHOLD};
pub use quantity::{extract_quantities, QuantityMatch};

use ordertaker_search::MatchOutcome;
use rust_decimal::Decimal;
use serde::Serialize;

/// A priced line of a parsed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    /// Menu item name
    pub name: String,
    /// Price of one unit
    pub unit_price: Decimal,
    /// Units ordered (at least 1)
    pub quantity: u32,
    /// `unit_price * quantity`
    pub subtotal: Decimal,
    /// Matcher certainty that `name` is what the customer meant
    pub confidence: f64,
}

impl OrderItem {
    /// Creates a line item, computing the subtotal.
    ///
    /// Returns `None` when the subtotal does not fit in a `Decimal`.
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
        confidence: f64,
    ) -> Option<Self> {
        let subtotal = unit_price.checked_mul(Decimal::from(quantity))?;
        Some(Self {
            name: name.into(),
            unit_price,
            quantity,
            subtotal,
            confidence,
        })
    }

    fn from_match(outcome: &MatchOutcome<'_>, quantity: u32) -> Option<Self> {
        Self::new(&outcome.item.name, outcome.item.price, quantity, outcome.confidence)
    }
}

/// Outcome of parsing one order.
///
/// `total` always equals the sum of the item subtotals; unmatched clauses
/// only ever appear in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderResult {
    /// Matched items in clause order
    pub items: Vec<OrderItem>,
    /// One message per unmatched clause, in clause order
    pub errors: Vec<String>,
    /// Sum of item subtotals
    pub total: Decimal,
}

impl OrderResult {
    /// Appends a line item and adds its subtotal to the total.
    ///
    /// Returns `false` and leaves the result unchanged when the total would
    /// overflow.
    #[must_use]
    pub fn push_item(&mut self, item: OrderItem) -> bool {
        match self.total.checked_add(item.subtotal) {
            Some(total) => {
                self.total = total;
                self.items.push(item);
                true
            }
            None => false,
        }
    }

    /// Records a phrase that matched no menu item.
    pub fn push_unmatched(&mut self, phrase: &str) {
        self.errors.push(format!("Could not find a match for {phrase:?}."));
    }

    /// Records a matched phrase whose amount is too large to price.
    pub fn push_unpriceable(&mut self, phrase: &str) {
        self.errors.push(format!("Order amount for {phrase:?} is too large."));
    }
}
