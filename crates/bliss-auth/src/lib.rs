//! Authentication for the Bliss storefront.
//!
//! There is no auth server. [`AuthStore`] simulates one: each call waits a
//! configurable delay and succeeds, except a wrong one-time code. The
//! signed-in user is a single [`UserRecord`] persisted to storage, and its
//! presence is the only authentication signal.
//!
//! [`SignupWizard`] drives the `auth → verification → booking → success`
//! flow on top of the store.
//!
//! # Example
//!
//! ```rust
//! use bliss_auth::{AuthConfig, AuthStore, NoDelay};
//! use bliss_cache::Cache;
//!
//! # block_on(async {
//! let store = AuthStore::new(Cache::in_memory(), AuthConfig::instant(), NoDelay);
//! store.send_phone_otp("+91 98765 43210").await.unwrap();
//!
//! assert!(store.verify_phone_otp("000000").await.is_err());
//! let user = store.verify_phone_otp("123456").await.unwrap();
//! assert!(user.phone_verified);
//! # });
//! # fn block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

mod config;
mod delay;
mod error;
mod store;
mod user;
pub mod validation;
mod wizard;

pub use config::AuthConfig;
pub use delay::{Delay, NoDelay};
pub use error::AuthError;
pub use store::{AuthStore, SESSION_KEY};
pub use user::{AuthProvider, ProfileUpdate, UserRecord};
pub use validation::{FieldError, SignupForm};
pub use wizard::{AuthMode, EntrySource, SignupWizard, WizardStep};

#[cfg(feature = "tokio")]
pub use delay::TokioDelay;
