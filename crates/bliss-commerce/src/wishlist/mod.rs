//! Wishlist module.
//!
//! Named product collections created from the product grid's wishlist modal.

mod list;
mod manager;

pub use list::Wishlist;
pub use manager::{AddOutcome, WishlistManager, WISHLISTS_KEY};
