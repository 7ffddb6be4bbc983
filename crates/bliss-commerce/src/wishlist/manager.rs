//! Wishlist manager: every list the shopper has created.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ProductId, WishlistId};
use crate::wishlist::Wishlist;

/// Storage key for persisted wishlists.
pub const WISHLISTS_KEY: &str = "bliss.wishlists";

/// Result of adding a product to an existing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Nothing changed; the UI shows a notice instead.
    AlreadyPresent,
}

impl AddOutcome {
    /// User-facing notice for this outcome.
    pub fn notice(&self, product_name: &str, list_name: &str) -> String {
        match self {
            AddOutcome::Added => format!("Added {} to {}", product_name, list_name),
            AddOutcome::AlreadyPresent => {
                format!("{} is already in {}", product_name, list_name)
            }
        }
    }
}

/// All wishlists, keyed by list id, in creation order.
///
/// Lists cannot be deleted or renamed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WishlistManager {
    lists: Vec<Wishlist>,
}

impl WishlistManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lists(&self) -> &[Wishlist] {
        &self.lists
    }

    pub fn get(&self, id: &WishlistId) -> Option<&Wishlist> {
        self.lists.iter().find(|l| &l.id == id)
    }

    /// Create a new list seeded with `initial`, returning its id.
    pub fn create(
        &mut self,
        name: &str,
        description: Option<String>,
        initial: Product,
    ) -> Result<WishlistId, CommerceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommerceError::ValidationError(
                "wishlist name is required".to_string(),
            ));
        }

        let list = Wishlist::new(name, description, initial);
        let id = list.id.clone();
        tracing::info!(wishlist = %id, name, "wishlist created");
        self.lists.push(list);
        Ok(id)
    }

    /// Add a product to an existing list.
    ///
    /// Adding a product that is already there is a no-op reported as
    /// [`AddOutcome::AlreadyPresent`].
    pub fn add_to(&mut self, id: &WishlistId, product: Product) -> Result<AddOutcome, CommerceError> {
        let list = self
            .lists
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| CommerceError::WishlistNotFound(id.to_string()))?;

        let product_id = product.id;
        if list.push(product) {
            tracing::debug!(wishlist = %id, product = %product_id, "added to wishlist");
            Ok(AddOutcome::Added)
        } else {
            Ok(AddOutcome::AlreadyPresent)
        }
    }

    /// Strip a product from every list. Returns how many lists changed.
    pub fn remove_everywhere(&mut self, product_id: ProductId) -> usize {
        let changed = self
            .lists
            .iter_mut()
            .map(|l| l.remove(product_id))
            .filter(|removed| *removed)
            .count();
        tracing::debug!(product = %product_id, lists = changed, "removed from wishlists");
        changed
    }

    /// Whether any list holds the product.
    pub fn is_product_in_wishlist(&self, product_id: ProductId) -> bool {
        self.lists.iter().any(|l| l.contains(product_id))
    }

    /// Lists that hold the product.
    pub fn lists_containing(&self, product_id: ProductId) -> Vec<&Wishlist> {
        self.lists.iter().filter(|l| l.contains(product_id)).collect()
    }

    /// Total number of saved products across all lists.
    pub fn total_items(&self) -> usize {
        self.lists.iter().map(Wishlist::len).sum()
    }
}

#[cfg(feature = "storage")]
impl WishlistManager {
    /// Load persisted wishlists, or an empty manager if none were saved.
    pub fn load(cache: &bliss_cache::Cache) -> Result<Self, CommerceError> {
        Ok(cache.get_or_default(WISHLISTS_KEY)?)
    }

    /// Persist all wishlists.
    pub fn save(&self, cache: &bliss_cache::Cache) -> Result<(), CommerceError> {
        cache.set(WISHLISTS_KEY, self)?;
        Ok(())
    }
}
