//! A single named wishlist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::{ProductId, WishlistId};

/// A named, user-created collection of products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    pub id: WishlistId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Products in insertion order; never holds two products with the same id.
    pub products: Vec<Product>,
    pub created_at: DateTime<Utc>,
    /// Cover image, taken from the first product added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Wishlist {
    /// Create a list holding `initial` as its only product.
    pub fn new(name: impl Into<String>, description: Option<String>, initial: Product) -> Self {
        let cover_image = initial.primary_image().map(str::to_string);
        Self {
            id: WishlistId::generate(),
            name: name.into(),
            description: description.filter(|d| !d.trim().is_empty()),
            products: vec![initial],
            created_at: Utc::now(),
            cover_image,
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append unless already present. Returns whether the product was added.
    pub(crate) fn push(&mut self, product: Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        if self.cover_image.is_none() {
            self.cover_image = product.primary_image().map(str::to_string);
        }
        self.products.push(product);
        true
    }

    /// Remove a product. Returns whether anything was removed.
    pub(crate) fn remove(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        before != self.products.len()
    }
}
