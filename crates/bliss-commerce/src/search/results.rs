//! Search results.

use crate::catalog::{Catalog, Product};
use crate::search::{CategoryFilter, ProductQuery, SubcategoryFilter};
use serde::{Deserialize, Serialize};

/// The full filtered and sorted result set. There is no pagination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    /// The result items, in sort order.
    pub items: Vec<Product>,
    /// The query that produced them.
    pub query: ProductQuery,
}

impl SearchResults {
    pub fn new(items: Vec<Product>, query: ProductQuery) -> Self {
        Self { items, query }
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One-line summary for the grid header, e.g.
    /// `4 products in Jewelry › Best Sellers matching "gold"`.
    pub fn summary(&self, catalog: &Catalog) -> String {
        let noun = if self.total() == 1 { "product" } else { "products" };
        let mut summary = format!("{} {}", self.total(), noun);

        if let CategoryFilter::Slug(slug) = &self.query.category {
            let name = catalog.category(slug).map(|c| c.name.as_str()).unwrap_or(slug);
            summary.push_str(&format!(" in {}", name));

            match &self.query.subcategory {
                SubcategoryFilter::All => {}
                SubcategoryFilter::Slug(sub) => {
                    let sub_name = catalog
                        .category(slug)
                        .and_then(|c| c.subcategory(sub))
                        .map(|s| s.name.as_str())
                        .unwrap_or(sub);
                    summary.push_str(&format!(" \u{203a} {}", sub_name));
                }
                collection => summary.push_str(&format!(" \u{203a} {}", collection.display_name())),
            }
        } else if self.query.subcategory != SubcategoryFilter::All {
            summary.push_str(&format!(" in {}", self.query.subcategory.display_name()));
        }

        let search = self.query.search.trim();
        if !search.is_empty() {
            summary.push_str(&format!(" matching \"{}\"", search));
        }

        summary
    }
}
