//! Checkout summary calculations.

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryLine {
    pub product: Product,
    pub quantity: i64,
    /// `None` when the product has no parseable price ("price on request").
    pub unit_price: Option<Money>,
    pub line_total: Option<Money>,
    /// Savings against the original price across the whole line.
    pub line_savings: Option<Money>,
}

/// Complete pricing breakdown shown on the checkout page.
///
/// Lines without a parseable price are listed but excluded from the totals;
/// `has_unpriced` tells the UI to show a "quote to follow" note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    pub lines: Vec<SummaryLine>,
    /// Sum of priced lines.
    pub subtotal: Money,
    /// Sum of original-price savings.
    pub savings: Money,
    /// What the customer pays.
    pub total: Money,
    pub item_count: i64,
    pub has_unpriced: bool,
}

impl CheckoutSummary {
    /// Price `cart` in `currency`. Products priced in another currency
    /// count as unpriced.
    pub fn calculate(cart: &Cart, catalog: &Catalog, currency: Currency) -> Self {
        let mut subtotal = Money::zero(currency);
        let mut savings = Money::zero(currency);
        let mut has_unpriced = false;
        let mut lines = Vec::with_capacity(cart.lines().len());

        for line in cart.lines() {
            let Some(product) = catalog.product(line.product_id) else {
                tracing::warn!(product = %line.product_id, "cart line for unknown product skipped");
                continue;
            };

            let unit_price = product.price_value().filter(|p| p.currency == currency);
            let line_total = unit_price.map(|p| p * line.quantity);
            let line_savings = product
                .savings()
                .filter(|s| s.currency == currency)
                .map(|s| s * line.quantity);

            match line_total {
                Some(total) => subtotal = subtotal + total,
                None => has_unpriced = true,
            }
            if let Some(saved) = line_savings {
                savings = savings + saved;
            }

            lines.push(SummaryLine {
                product: product.clone(),
                quantity: line.quantity,
                unit_price,
                line_total,
                line_savings,
            });
        }

        let item_count = lines.iter().map(|l| l.quantity).sum();

        Self {
            lines,
            subtotal,
            savings,
            total: subtotal,
            item_count,
            has_unpriced,
        }
    }

    /// Subtotal at original prices (what the customer would have paid).
    pub fn original_total(&self) -> Money {
        self.subtotal + self.savings
    }

    pub fn has_savings(&self) -> bool {
        self.savings.is_positive()
    }
}
