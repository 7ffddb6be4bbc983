//! Cart module.
//!
//! Contains the cart held in page state and the checkout summary priced
//! from the catalog's display prices.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};
pub use pricing::{CheckoutSummary, SummaryLine};
