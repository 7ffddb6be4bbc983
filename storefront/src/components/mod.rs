//! Shared layout and product components.

mod footer;
mod header;
mod product_card;
mod product_grid;
mod product_modal;
mod wishlist_modal;

pub use footer::Footer;
pub use header::Header;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use product_modal::ProductModal;
pub use wishlist_modal::WishlistModal;
