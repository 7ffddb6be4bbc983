//! Routed pages.

mod account;
mod auth;
mod blog;
mod cart;
mod contact;
mod home;
mod not_found;
mod policy;
mod products;
mod vendor;

pub use account::{AccountPage, BookingsPage};
pub use auth::AuthPage;
pub use blog::BlogPage;
pub use cart::CartPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use policy::{PrivacyPage, TermsPage};
pub use products::ProductsPage;
pub use vendor::VendorPage;
