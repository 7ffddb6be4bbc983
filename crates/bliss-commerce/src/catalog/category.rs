//! Category types for product organization.

use serde::{Deserialize, Serialize};

/// A subcategory within a [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subcategory {
    /// URL-friendly slug, matched against `Product::subcategory`.
    pub slug: String,
    /// Display name.
    pub name: String,
}

/// A top-level product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// URL-friendly slug, matched against `Product::category`.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Short blurb for category tiles.
    pub description: String,
    /// Ordered subcategories.
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    pub fn new(slug: &str, name: &str, description: &str, subcategories: &[(&str, &str)]) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            subcategories: subcategories
                .iter()
                .map(|(slug, name)| Subcategory {
                    slug: slug.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    /// Find a subcategory by slug.
    pub fn subcategory(&self, slug: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.slug == slug)
    }

    /// Check whether `slug` names one of this category's subcategories.
    pub fn has_subcategory(&self, slug: &str) -> bool {
        self.subcategory(slug).is_some()
    }
}
