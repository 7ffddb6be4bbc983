//! Search module.
//!
//! The product grid pipeline: category → subcategory → text search → sort,
//! recomputed synchronously over the whole catalog on every change.

mod filter;
mod query;
mod results;

pub use filter::{CategoryFilter, SubcategoryFilter};
pub use query::{ProductQuery, SortOption};
pub use results::SearchResults;
