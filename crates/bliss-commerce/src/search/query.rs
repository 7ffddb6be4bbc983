//! Product query: filter then sort the catalog.

use std::cmp::Ordering;

use crate::catalog::{Catalog, Product};
use crate::search::{CategoryFilter, SearchResults, SubcategoryFilter};
use serde::{Deserialize, Serialize};

/// Sort options for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Trending first, then best sellers, otherwise catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// New arrivals first.
    Newest,
    /// Highest rated first.
    Rating,
    /// Most reviewed first.
    Popular,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Featured,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Newest,
        SortOption::Rating,
        SortOption::Popular,
    ];

    /// Parse a sort key. Unknown keys fall back to `Featured`.
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => SortOption::PriceLow,
            "price-high" => SortOption::PriceHigh,
            "newest" => SortOption::Newest,
            "rating" => SortOption::Rating,
            "popular" => SortOption::Popular,
            _ => SortOption::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Newest => "newest",
            SortOption::Rating => "rating",
            SortOption::Popular => "popular",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Newest => "Newest Arrivals",
            SortOption::Rating => "Highest Rated",
            SortOption::Popular => "Most Popular",
        }
    }

    /// Compare two products under this option.
    ///
    /// Always a total order: products with unparseable prices sort after
    /// every priced product in both price directions, and ratings compare
    /// with `total_cmp`.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => b
                .trending
                .cmp(&a.trending)
                .then_with(|| b.best_seller.cmp(&a.best_seller)),
            SortOption::PriceLow => compare_prices(a, b, false),
            SortOption::PriceHigh => compare_prices(a, b, true),
            SortOption::Newest => b.new_arrival.cmp(&a.new_arrival),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
            SortOption::Popular => b.reviews.cmp(&a.reviews),
        }
    }
}

fn compare_prices(a: &Product, b: &Product, descending: bool) -> Ordering {
    let pa = a.price_value().map(|m| m.amount_minor);
    let pb = b.price_value().map(|m| m.amount_minor);
    match (pa, pb) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A product query: category, subcategory, free-text search and sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProductQuery {
    pub category: CategoryFilter,
    pub subcategory: SubcategoryFilter,
    /// Raw search text as typed.
    pub search: String,
    pub sort: SortOption,
}

impl ProductQuery {
    /// Create a query that matches everything in featured order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a URL query string such as
    /// `category=jewelry&subcategory=earrings&q=gold&sort=price-low`.
    pub fn from_query_string(qs: &str) -> Self {
        let mut query = ProductQuery::new();

        for pair in qs.trim_start_matches('?').split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = url_decode(parts.next().unwrap_or(""));

            match key {
                "category" => query.category = CategoryFilter::parse(&value),
                "subcategory" => query.subcategory = SubcategoryFilter::parse(&value),
                "q" | "search" => query.search = value,
                "sort" => query.sort = SortOption::parse(&value),
                _ => {}
            }
        }

        query
    }

    /// Render back to a query string, omitting defaults.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if self.category != CategoryFilter::All {
            parts.push(format!("category={}", url_encode(self.category.as_str())));
        }
        if self.subcategory != SubcategoryFilter::All {
            parts.push(format!("subcategory={}", url_encode(self.subcategory.as_str())));
        }
        if !self.search.trim().is_empty() {
            parts.push(format!("q={}", url_encode(self.search.trim())));
        }
        if self.sort != SortOption::Featured {
            parts.push(format!("sort={}", self.sort.as_str()));
        }
        parts.join("&")
    }

    pub fn with_category(mut self, category: impl AsRef<str>) -> Self {
        self.category = CategoryFilter::parse(category.as_ref());
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl AsRef<str>) -> Self {
        self.subcategory = SubcategoryFilter::parse(subcategory.as_ref());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether a product passes every filter (ignores sort).
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        self.category.matches(product)
            && self.subcategory.matches(product)
            && product.matches_search(&needle)
    }

    /// Filter and sort `products`, returning references in result order.
    ///
    /// The sort is stable, so ties keep catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let needle = self.search.trim().to_lowercase();

        let mut results: Vec<&Product> = products
            .iter()
            .filter(|p| self.category.matches(p))
            .filter(|p| self.subcategory.matches(p))
            .filter(|p| p.matches_search(&needle))
            .collect();

        results.sort_by(|a, b| self.sort.compare(a, b));

        tracing::debug!(
            category = self.category.as_str(),
            subcategory = self.subcategory.as_str(),
            search = %needle,
            sort = self.sort.as_str(),
            matched = results.len(),
            "product query applied"
        );

        results
    }

    /// Run against a catalog, producing owned results.
    pub fn run(&self, catalog: &Catalog) -> SearchResults {
        let items = self.apply(catalog.products()).into_iter().cloned().collect();
        SearchResults::new(items, self.clone())
    }
}

fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn ids(results: &[&Product]) -> Vec<u32> {
        results.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_sort_parse_roundtrip_and_fallback() {
        for option in SortOption::ALL {
            assert_eq!(SortOption::parse(option.as_str()), option);
        }
        assert_eq!(SortOption::parse("bogus"), SortOption::Featured);
    }

    #[test]
    fn test_featured_puts_trending_then_best_sellers_first() {
        let catalog = Catalog::seeded();
        let results = ProductQuery::new().apply(catalog.products());

        let first_non_trending = results.iter().position(|p| !p.trending).unwrap();
        assert!(results[..first_non_trending].iter().all(|p| p.trending));
        assert!(results[first_non_trending..].iter().all(|p| !p.trending));

        let rest = &results[first_non_trending..];
        let first_plain = rest.iter().position(|p| !p.best_seller).unwrap();
        assert!(rest[first_plain..].iter().all(|p| !p.best_seller));
    }

    #[test]
    fn test_featured_is_stable_within_groups() {
        let catalog = Catalog::seeded();
        let results = ProductQuery::new().apply(catalog.products());
        let trending: Vec<u32> = ids(&results)
            .into_iter()
            .filter(|id| catalog.product(ProductId(*id)).map(|p| p.trending && p.best_seller).unwrap_or(false))
            .collect();
        let mut sorted = trending.clone();
        sorted.sort();
        assert_eq!(trending, sorted);
    }

    #[test]
    fn test_price_high_puts_unparseable_last() {
        let catalog = Catalog::seeded();
        let results = ProductQuery::new()
            .with_sort(SortOption::PriceHigh)
            .apply(catalog.products());

        let last = results.last().unwrap();
        assert!(last.price_value().is_none());

        let prices: Vec<i64> = results
            .iter()
            .filter_map(|p| p.price_value())
            .map(|m| m.amount_minor)
            .collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_rating_and_popular_descending() {
        let catalog = Catalog::seeded();
        let by_rating = ProductQuery::new().with_sort(SortOption::Rating).apply(catalog.products());
        assert!(by_rating.windows(2).all(|w| w[0].rating >= w[1].rating));

        let by_reviews = ProductQuery::new().with_sort(SortOption::Popular).apply(catalog.products());
        assert!(by_reviews.windows(2).all(|w| w[0].reviews >= w[1].reviews));
    }

    #[test]
    fn test_newest_puts_new_arrivals_first() {
        let catalog = Catalog::seeded();
        let results = ProductQuery::new().with_sort(SortOption::Newest).apply(catalog.products());
        let split = results.iter().position(|p| !p.new_arrival).unwrap();
        assert!(results[split..].iter().all(|p| !p.new_arrival));
    }

    #[test]
    fn test_category_and_collection_combined() {
        let catalog = Catalog::seeded();
        let results = ProductQuery::new()
            .with_category("jewelry")
            .with_subcategory("best-sellers")
            .apply(catalog.products());
        assert_eq!(ids(&results), vec![7, 8]);
    }

    #[test]
    fn test_blank_search_matches_all() {
        let catalog = Catalog::seeded();
        let results = ProductQuery::new().with_search("   ").apply(catalog.products());
        assert_eq!(results.len(), catalog.products().len());
    }

    #[test]
    fn test_from_query_string() {
        let query = ProductQuery::from_query_string("?category=decor&subcategory=trending&q=fresh+flowers&sort=rating&utm=x");
        assert_eq!(query.category, CategoryFilter::Slug("decor".to_string()));
        assert_eq!(query.subcategory, SubcategoryFilter::Trending);
        assert_eq!(query.search, "fresh flowers");
        assert_eq!(query.sort, SortOption::Rating);
    }

    #[test]
    fn test_query_string_roundtrip() {
        let query = ProductQuery::new()
            .with_category("bridal-wear")
            .with_search("pure silk & gold")
            .with_sort(SortOption::PriceLow);
        let qs = query.to_query_string();
        assert_eq!(ProductQuery::from_query_string(&qs), query);
        assert_eq!(ProductQuery::new().to_query_string(), "");
    }

    #[test]
    fn test_url_decode_handles_percent_and_bad_escapes() {
        assert_eq!(url_decode("gold%20zari"), "gold zari");
        assert_eq!(url_decode("100%"), "100%");
        assert_eq!(url_decode("%zz"), "%zz");
    }
}
