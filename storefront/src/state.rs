//! App-wide state shared through the Leptos context.

use bliss_auth::{AuthStore, UserRecord};
use bliss_cache::Cache;
use bliss_commerce::cart::Cart;
use bliss_commerce::catalog::Catalog;
use bliss_commerce::wishlist::WishlistManager;
use leptos::prelude::*;

use crate::config::StorefrontConfig;

/// Everything pages need beyond their own local signals.
///
/// Signals mirror the stores so views re-render; the stores remain the
/// source of truth for what is persisted.
#[derive(Clone)]
pub struct AppState {
    pub config: StorefrontConfig,
    pub cache: Cache,
    pub auth: AuthStore,
    pub catalog: &'static Catalog,
    pub user: RwSignal<Option<UserRecord>>,
    pub wishlists: RwSignal<WishlistManager>,
    pub cart: RwSignal<Cart>,
    /// Transient banner text, e.g. "already in this wishlist".
    pub notice: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new(config: StorefrontConfig, cache: Cache, auth: AuthStore) -> Self {
        let wishlists = WishlistManager::load(&cache).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not restore wishlists");
            WishlistManager::default()
        });

        Self {
            user: RwSignal::new(auth.current_user()),
            wishlists: RwSignal::new(wishlists),
            cart: RwSignal::new(Cart::new()),
            notice: RwSignal::new(None),
            catalog: Catalog::seeded(),
            config,
            cache,
            auth,
        }
    }

    /// Copy the store's session into the `user` signal.
    pub fn sync_user(&self) {
        self.user.set(self.auth.current_user());
    }

    /// Change wishlists and persist the result.
    ///
    /// Returns `None` only if the signal has been disposed.
    pub fn update_wishlists<R>(&self, f: impl FnOnce(&mut WishlistManager) -> R) -> Option<R> {
        let mut out = None;
        self.wishlists.update(|lists| {
            out = Some(f(lists));
            if let Err(e) = lists.save(&self.cache) {
                tracing::warn!(error = %e, "could not save wishlists");
            }
        });
        out
    }

    pub fn notify(&self, message: impl Into<String>) {
        self.notice.set(Some(message.into()));
    }
}

/// Fetch the app state from context.
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
