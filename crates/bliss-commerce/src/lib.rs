//! Marketplace domain types and logic for the Bliss storefront.
//!
//! - **Catalog**: Static products and categories
//! - **Search**: Category/subcategory filters, text search and sort modes
//! - **Wishlist**: Named product collections
//! - **Cart**: Cart lines and the checkout summary
//! - **Booking**: Consultation drafts, bookings and the contact-form payload
//!
//! With the default `storage` feature, wishlists, bookings and one-shot form
//! payloads can be saved to and restored from a [`bliss_cache::Cache`].
//!
//! # Example
//!
//! ```rust
//! use bliss_commerce::prelude::*;
//!
//! let catalog = Catalog::seeded();
//! let results = ProductQuery::new()
//!     .with_category("jewelry")
//!     .with_sort(SortOption::PriceLow)
//!     .run(catalog);
//!
//! let mut wishlists = WishlistManager::new();
//! let first = results.items[0].clone();
//! let id = wishlists.create("Reception", None, first.clone()).unwrap();
//! assert_eq!(wishlists.add_to(&id, first).unwrap(), AddOutcome::AlreadyPresent);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod booking;
pub mod cart;
pub mod catalog;
pub mod search;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, Subcategory};

    // Search
    pub use crate::search::{
        CategoryFilter, ProductQuery, SearchResults, SortOption, SubcategoryFilter,
    };

    // Wishlist
    pub use crate::wishlist::{AddOutcome, Wishlist, WishlistManager};

    // Cart
    pub use crate::cart::{Cart, CartLine, CheckoutSummary, SummaryLine};

    // Booking
    pub use crate::booking::{
        Booking, BookingDraft, Consultant, ConsultationType, ContactForm, CustomerSnapshot,
    };
}
