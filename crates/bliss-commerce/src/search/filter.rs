//! Category and subcategory filters.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Category selection. `"all"` (or an empty value) disables the filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact match on `Product::category`.
    Slug(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => CategoryFilter::All,
            slug => CategoryFilter::Slug(slug.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Slug(slug) => slug,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Slug(slug) => product.category == *slug,
        }
    }
}

/// Subcategory selection.
///
/// Three reserved values select by product flag rather than by subcategory
/// equality: `"trending"`, `"new-arrivals"` and `"best-sellers"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SubcategoryFilter {
    #[default]
    All,
    Trending,
    NewArrivals,
    BestSellers,
    /// Exact match on `Product::subcategory`.
    Slug(String),
}

impl SubcategoryFilter {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => SubcategoryFilter::All,
            "trending" => SubcategoryFilter::Trending,
            "new-arrivals" => SubcategoryFilter::NewArrivals,
            "best-sellers" => SubcategoryFilter::BestSellers,
            slug => SubcategoryFilter::Slug(slug.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SubcategoryFilter::All => "all",
            SubcategoryFilter::Trending => "trending",
            SubcategoryFilter::NewArrivals => "new-arrivals",
            SubcategoryFilter::BestSellers => "best-sellers",
            SubcategoryFilter::Slug(slug) => slug,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SubcategoryFilter::All => "All",
            SubcategoryFilter::Trending => "Trending",
            SubcategoryFilter::NewArrivals => "New Arrivals",
            SubcategoryFilter::BestSellers => "Best Sellers",
            SubcategoryFilter::Slug(slug) => slug,
        }
    }

    /// The flag-based collections, in the order they are offered in the UI.
    pub fn collections() -> [SubcategoryFilter; 3] {
        [
            SubcategoryFilter::Trending,
            SubcategoryFilter::NewArrivals,
            SubcategoryFilter::BestSellers,
        ]
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            SubcategoryFilter::All => true,
            SubcategoryFilter::Trending => product.trending,
            SubcategoryFilter::NewArrivals => product.new_arrival,
            SubcategoryFilter::BestSellers => product.best_seller,
            SubcategoryFilter::Slug(slug) => product.subcategory == *slug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    #[test]
    fn test_parse_category() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("jewelry"),
            CategoryFilter::Slug("jewelry".to_string())
        );
    }

    #[test]
    fn test_parse_reserved_subcategories() {
        assert_eq!(SubcategoryFilter::parse("trending"), SubcategoryFilter::Trending);
        assert_eq!(SubcategoryFilter::parse("new-arrivals"), SubcategoryFilter::NewArrivals);
        assert_eq!(SubcategoryFilter::parse("best-sellers"), SubcategoryFilter::BestSellers);
        assert_eq!(
            SubcategoryFilter::parse("lehengas"),
            SubcategoryFilter::Slug("lehengas".to_string())
        );
        for filter in SubcategoryFilter::collections() {
            assert_eq!(SubcategoryFilter::parse(filter.as_str()), filter);
        }
    }

    #[test]
    fn test_flag_subcategory_ignores_subcategory_field() {
        let catalog = Catalog::seeded();
        let lehenga = catalog.product(ProductId(1)).unwrap();
        assert!(lehenga.trending);
        assert!(SubcategoryFilter::Trending.matches(lehenga));
        assert!(!SubcategoryFilter::NewArrivals.matches(lehenga));
        assert!(SubcategoryFilter::Slug("lehengas".to_string()).matches(lehenga));
        assert!(!SubcategoryFilter::Slug("sarees".to_string()).matches(lehenga));
    }
}
