//! Type-safe key-value storage layer for the Bliss storefront.
//!
//! Everything the storefront remembers between page loads (the session
//! record, wishlists, bookings, one-shot form payloads) is a JSON value under a
//! fixed key. [`Cache`] gives those values a typed API over any
//! [`StorageBackend`]: browser local storage in the app, [`MemoryStore`] in
//! tests and native tooling.
//!
//! # Example
//!
//! ```rust
//! use bliss_cache::Cache;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Draft {
//!     note: String,
//! }
//!
//! let cache = Cache::in_memory();
//! cache.set("bliss.draft", &Draft { note: "hello".into() }).unwrap();
//!
//! let draft: Option<Draft> = cache.take("bliss.draft").unwrap();
//! assert_eq!(draft.unwrap().note, "hello");
//! assert!(!cache.exists("bliss.draft").unwrap());
//! ```

mod error;
mod kv;
mod memory;

pub use error::CacheError;
pub use kv::{Cache, StorageBackend};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, MemoryStore, StorageBackend};
}
