//! Money type for representing monetary values.
//!
//! Catalog prices are display strings (`"₹45,000"`). Everything that needs a
//! number, from sorting to the checkout summary, goes through
//! [`Money::parse_display`], which strips the currency symbol and thousands
//! separators. Amounts are kept in minor units to avoid floating-point
//! drift when totals are summed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }

    /// Detect the currency from a display string by its symbol.
    fn detect(display: &str) -> Option<Self> {
        if display.contains('\u{20b9}') || display.trim_start().starts_with("Rs") {
            Some(Currency::INR)
        } else if display.contains('$') {
            Some(Currency::USD)
        } else if display.contains('\u{20ac}') {
            Some(Currency::EUR)
        } else if display.contains('\u{00a3}') {
            Some(Currency::GBP)
        } else {
            None
        }
    }

    /// INR groups digits as 12,34,567; the rest use 1,234,567.
    fn uses_indian_grouping(&self) -> bool {
        matches!(self, Currency::INR)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (paise, cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units.
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount * 100, currency)
    }

    /// Create a Money value from a decimal amount.
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a display-formatted price such as `"₹1,25,000"` or `"$49.99"`.
    ///
    /// The currency symbol and thousands separators are stripped; a string
    /// without a recognisable symbol is read in `fallback`. Returns `None`
    /// when nothing numeric is left.
    ///
    /// ```
    /// use bliss_commerce::money::{Currency, Money};
    /// let price = Money::parse_display("₹1,25,000", Currency::INR).unwrap();
    /// assert_eq!(price.amount_minor, 12_500_000);
    /// assert!(Money::parse_display("Price on request", Currency::INR).is_none());
    /// ```
    pub fn parse_display(display: &str, fallback: Currency) -> Option<Money> {
        let currency = Currency::detect(display).unwrap_or(fallback);

        let trimmed = display.trim();
        let without_prefix = trimmed
            .strip_prefix("Rs.")
            .or_else(|| trimmed.strip_prefix("Rs"))
            .unwrap_or(trimmed);

        let numeric: String = without_prefix
            .chars()
            .filter(|c| !matches!(c, ',' | ' ' | '_' | '\u{20b9}' | '$' | '\u{20ac}' | '\u{00a3}'))
            .collect();

        if numeric.is_empty()
            || !numeric.chars().any(|c| c.is_ascii_digit())
            || !numeric.chars().all(|c| c.is_ascii_digit() || c == '.')
            || numeric.matches('.').count() > 1
        {
            return None;
        }

        let value: f64 = numeric.parse().ok()?;
        Some(Money::from_decimal(value, currency))
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / 100.0
    }

    /// Format as a display string (e.g., "₹1,25,000" or "$49.99").
    ///
    /// Whole amounts are shown without a fractional part, matching how the
    /// catalog writes its prices.
    pub fn display(&self) -> String {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let whole = group_digits(abs / 100, self.currency.uses_indian_grouping());
        let fraction = abs % 100;

        if fraction == 0 {
            format!("{}{}{}", sign, self.currency.symbol(), whole)
        } else {
            format!("{}{}{}.{:02}", sign, self.currency.symbol(), whole, fraction)
        }
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor.checked_add(other.amount_minor)?,
            self.currency,
        ))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor.checked_sub(other.amount_minor)?,
            self.currency,
        ))
    }

    /// Multiply by a scalar.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_minor * factor, self.currency)
    }

    /// Percentage of `self` that `part` represents, rounded down.
    pub fn percent_of(&self, part: &Money) -> u32 {
        if self.amount_minor <= 0 || part.currency != self.currency {
            return 0;
        }
        ((part.amount_minor.max(0) as f64 / self.amount_minor as f64) * 100.0).floor() as u32
    }
}

fn group_digits(value: u64, indian: bool) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let group = if indian { 2 } else { 3 };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.try_add(&other)
            .unwrap_or_else(|| panic!("Currency mismatch in addition: {} vs {}", self.currency, other.currency))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .unwrap_or_else(|| panic!("Currency mismatch in subtraction: {} vs {}", self.currency, other.currency))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inr_with_indian_grouping() {
        let m = Money::parse_display("\u{20b9}1,25,000", Currency::USD).unwrap();
        assert_eq!(m.currency, Currency::INR);
        assert_eq!(m.amount_minor, 12_500_000);
    }

    #[test]
    fn test_parse_rs_prefix() {
        let m = Money::parse_display("Rs. 4,999", Currency::USD).unwrap();
        assert_eq!(m.currency, Currency::INR);
        assert_eq!(m.amount_minor, 499_900);
    }

    #[test]
    fn test_parse_usd_decimal() {
        let m = Money::parse_display("$49.99", Currency::INR).unwrap();
        assert_eq!(m.currency, Currency::USD);
        assert_eq!(m.amount_minor, 4999);
    }

    #[test]
    fn test_parse_plain_number_uses_fallback() {
        let m = Money::parse_display("12000", Currency::INR).unwrap();
        assert_eq!(m, Money::from_major(12_000, Currency::INR));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse_display("", Currency::INR).is_none());
        assert!(Money::parse_display("\u{20b9}", Currency::INR).is_none());
        assert!(Money::parse_display("On request", Currency::INR).is_none());
        assert!(Money::parse_display("1.2.3", Currency::INR).is_none());
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Money::from_major(125_000, Currency::INR).display(), "\u{20b9}1,25,000");
        assert_eq!(Money::from_major(12_345_678, Currency::INR).display(), "\u{20b9}1,23,45,678");
        assert_eq!(Money::from_major(999, Currency::INR).display(), "\u{20b9}999");
    }

    #[test]
    fn test_display_western_grouping_and_fraction() {
        assert_eq!(Money::new(123_456_789, Currency::USD).display(), "$1,234,567.89");
        assert_eq!(Money::new(-2500, Currency::GBP).display(), "-\u{00a3}25");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_major(1000, Currency::INR);
        let b = Money::from_major(300, Currency::INR);
        assert_eq!((a + b).amount_minor, 130_000);
        assert_eq!((a - b).amount_minor, 70_000);
        assert_eq!((b * 3).amount_minor, 90_000);
    }

    #[test]
    fn test_percent_of() {
        let original = Money::from_major(50_000, Currency::INR);
        let saving = Money::from_major(5_000, Currency::INR);
        assert_eq!(original.percent_of(&saving), 10);
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let inr = Money::from_major(10, Currency::INR);
        let usd = Money::from_major(10, Currency::USD);
        let _ = inr + usd;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
