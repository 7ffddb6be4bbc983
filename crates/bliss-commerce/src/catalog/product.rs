//! Product records.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable seed data: they are never created or destroyed at
/// runtime. Prices are kept exactly as they are displayed; use
/// [`Product::price_value`] for arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category slug (e.g. "bridal-wear").
    pub category: String,
    /// Subcategory slug within the category (e.g. "lehengas").
    pub subcategory: String,
    /// Display-formatted price (e.g. "₹45,000").
    pub price: String,
    /// Display-formatted price before discount, if discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    /// Average rating out of 5.
    pub rating: f32,
    /// Number of reviews.
    pub reviews: u32,
    /// Image URLs, first one is the primary image.
    pub images: Vec<String>,
    /// Long description.
    pub description: String,
    /// Feature tags (also searched).
    pub features: Vec<String>,
    /// Currently trending.
    #[serde(default)]
    pub trending: bool,
    /// Recently added to the catalog.
    #[serde(default)]
    pub new_arrival: bool,
    /// One of the best sellers.
    #[serde(default)]
    pub best_seller: bool,
}

impl Product {
    /// Numeric price, or `None` if the display string can't be parsed.
    pub fn price_value(&self) -> Option<Money> {
        Money::parse_display(&self.price, Currency::default())
    }

    /// Numeric original price, if present and parseable.
    pub fn original_price_value(&self) -> Option<Money> {
        self.original_price
            .as_deref()
            .and_then(|p| Money::parse_display(p, Currency::default()))
    }

    /// Amount saved against the original price, if the product is discounted.
    pub fn savings(&self) -> Option<Money> {
        let price = self.price_value()?;
        let original = self.original_price_value()?;
        let saving = original.try_subtract(&price)?;
        saving.is_positive().then_some(saving)
    }

    /// Discount as a whole percentage of the original price.
    pub fn discount_percent(&self) -> Option<u32> {
        let saving = self.savings()?;
        let original = self.original_price_value()?;
        Some(original.percent_of(&saving))
    }

    /// The primary (first) image.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive substring match against name, description or any
    /// feature tag.
    ///
    /// `needle` must already be lowercased; an empty needle matches.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .features
                .iter()
                .any(|f| f.to_lowercase().contains(needle))
    }

    /// Rating rounded to the nearest half star, for display.
    pub fn rating_stars(&self) -> f32 {
        (self.rating * 2.0).round() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId(1),
            name: "Crimson Silk Lehenga".to_string(),
            category: "bridal-wear".to_string(),
            subcategory: "lehengas".to_string(),
            price: "\u{20b9}45,000".to_string(),
            original_price: Some("\u{20b9}50,000".to_string()),
            rating: 4.7,
            reviews: 120,
            images: vec!["/a.jpg".to_string(), "/b.jpg".to_string()],
            description: "Hand embroidered with zari work".to_string(),
            features: vec!["Pure Silk".to_string(), "Gold Zari".to_string()],
            trending: true,
            new_arrival: false,
            best_seller: false,
        }
    }

    #[test]
    fn test_price_value() {
        let p = sample();
        assert_eq!(p.price_value(), Some(Money::from_major(45_000, Currency::INR)));
    }

    #[test]
    fn test_discount() {
        let p = sample();
        assert_eq!(p.savings(), Some(Money::from_major(5_000, Currency::INR)));
        assert_eq!(p.discount_percent(), Some(10));
    }

    #[test]
    fn test_no_discount_without_original_price() {
        let mut p = sample();
        p.original_price = None;
        assert_eq!(p.savings(), None);
        assert_eq!(p.discount_percent(), None);
    }

    #[test]
    fn test_matches_search_fields() {
        let p = sample();
        assert!(p.matches_search("crimson"));
        assert!(p.matches_search("zari work"));
        assert!(p.matches_search("gold"));
        assert!(p.matches_search(""));
        assert!(!p.matches_search("velvet"));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("originalPrice").is_some());
        assert!(json.get("newArrival").is_some());
        assert!(json.get("bestSeller").is_some());
    }
}
