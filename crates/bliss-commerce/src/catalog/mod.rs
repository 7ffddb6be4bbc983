//! Catalog module.
//!
//! The catalog is static seed data built once per process and shared by
//! reference.

mod category;
mod product;
mod seed;

pub use category::{Category, Subcategory};
pub use product::Product;

use std::sync::OnceLock;

use crate::ids::ProductId;

/// The product catalog: every product and category the storefront knows.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from explicit data.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The built-in seed catalog.
    pub fn seeded() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(seed::products(), seed::categories()))
    }

    /// All products in seed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a category by slug.
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Other products in `product`'s category, for "you may also like".
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id != product.id && p.category == product.category)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = Catalog::seeded();
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.products().len());
    }

    #[test]
    fn test_every_product_belongs_to_known_category() {
        let catalog = Catalog::seeded();
        for product in catalog.products() {
            let category = catalog
                .category(&product.category)
                .unwrap_or_else(|| panic!("unknown category {}", product.category));
            assert!(
                category.has_subcategory(&product.subcategory),
                "{} has unknown subcategory {}",
                product.name,
                product.subcategory
            );
            assert!(!product.images.is_empty());
        }
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.product(ProductId(1)).map(|p| p.id), Some(ProductId(1)));
        assert!(catalog.product(ProductId(9999)).is_none());
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::seeded();
        let product = catalog.product(ProductId(7)).unwrap();
        let related = catalog.related(product, 10);
        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.id != product.id && p.category == "jewelry"));
    }
}
