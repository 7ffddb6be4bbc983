//! Bliss storefront
//!
//! Client-side rendered Leptos app for the wedding marketplace:
//! - Catalog browsing with URL-driven filters and sorting
//! - Wishlists and a cart kept in the browser
//! - Simulated sign-in with phone verification
//! - A signup wizard that ends in a booked consultation

mod app;
mod components;
mod config;
mod delay;
mod logging;
mod pages;
mod state;
mod storage;

use bliss_auth::AuthStore;
use leptos::prelude::*;

use crate::app::App;
use crate::config::StorefrontConfig;
use crate::delay::TimeoutDelay;
use crate::state::AppState;

/// Boot the app: config, logging, storage, session restore, then mount.
pub fn run() {
    let (config, config_error) = match StorefrontConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (StorefrontConfig::default(), Some(e)),
    };

    logging::init(&config.logging.level);
    if let Some(e) = config_error {
        let message = format!("{e:#}");
        tracing::error!(error = %message, "using default config");
    }
    tracing::info!(
        site = %config.site.name,
        currency = config.site.currency().code(),
        "starting storefront"
    );

    let cache = storage::open_cache();
    let auth = AuthStore::restore(cache.clone(), config.auth.clone(), TimeoutDelay).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not restore session");
        AuthStore::new(cache.clone(), config.auth.clone(), TimeoutDelay)
    });

    let state = AppState::new(config, cache, auth);
    mount_to_body(move || {
        provide_context(state);
        view! { <App/> }
    });
}
