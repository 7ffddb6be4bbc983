//! Simulated auth/session store.
//!
//! Holds the single current-user slot and mirrors it to storage under
//! [`SESSION_KEY`]. Every call waits on the configured [`Delay`] and then
//! succeeds; credentials are never checked. The only failing branch is a
//! wrong one-time code.

use std::sync::{Arc, PoisonError, RwLock};

use bliss_cache::{Cache, CacheError};

use crate::config::AuthConfig;
use crate::delay::Delay;
use crate::user::{name_from_email, AuthProvider, ProfileUpdate, UserRecord};
use crate::validation::normalize_phone;
use crate::AuthError;

/// Storage key for the session record.
pub const SESSION_KEY: &str = "bliss.user";

/// Display name and photo used for simulated Google accounts.
const GOOGLE_DISPLAY_NAME: &str = "Google User";
const GOOGLE_EMAIL: &str = "google.user@gmail.com";
const GOOGLE_PHOTO_URL: &str = "https://lh3.googleusercontent.com/a/default-user";

#[derive(Debug, Default)]
struct SessionState {
    user: Option<UserRecord>,
    /// Phone number awaiting a one-time code.
    pending_phone: Option<String>,
}

/// Shared handle to the session. Clones see the same state.
#[derive(Clone)]
pub struct AuthStore {
    cache: Cache,
    config: AuthConfig,
    delay: Arc<dyn Delay>,
    state: Arc<RwLock<SessionState>>,
}

impl AuthStore {
    /// Create a signed-out store.
    pub fn new(cache: Cache, config: AuthConfig, delay: impl Delay + 'static) -> Self {
        Self {
            cache,
            config,
            delay: Arc::new(delay),
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Create a store and restore any session saved in `cache`.
    ///
    /// A record that no longer deserializes is discarded and the store
    /// starts signed out.
    pub fn restore(cache: Cache, config: AuthConfig, delay: impl Delay + 'static) -> Result<Self, AuthError> {
        let user = match cache.get::<UserRecord>(SESSION_KEY) {
            Ok(user) => user,
            Err(CacheError::SerializeError(e)) => {
                tracing::warn!(error = %e, "discarding unreadable session record");
                cache.delete(SESSION_KEY)?;
                None
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(user) = &user {
            tracing::info!(uid = %user.uid, provider = user.provider.as_str(), "session restored");
        }

        let store = Self::new(cache, config, delay);
        store.write_state(|state| state.user = user);
        Ok(store)
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<UserRecord> {
        self.read_state(|state| state.user.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.read_state(|state| state.user.is_some())
    }

    /// Phone number waiting for a one-time code.
    pub fn pending_phone(&self) -> Option<String> {
        self.read_state(|state| state.pending_phone.clone())
    }

    /// Create an account. The password is accepted as-is.
    ///
    /// A non-blank `phone` is kept on the record, unverified.
    pub async fn sign_up_with_email(
        &self,
        email: &str,
        _password: &str,
        display_name: &str,
        phone: &str,
    ) -> Result<UserRecord, AuthError> {
        self.delay.sleep(self.config.latency()).await;

        let display_name = match display_name.trim() {
            "" => name_from_email(email),
            name => name.to_string(),
        };
        let mut user = UserRecord::new(email.trim(), display_name, AuthProvider::Email);
        let phone = normalize_phone(phone);
        if !phone.is_empty() {
            user = user.with_phone(phone);
        }
        self.establish(user, "sign-up")
    }

    /// Sign in with email. The password is accepted as-is.
    pub async fn sign_in_with_email(&self, email: &str, _password: &str) -> Result<UserRecord, AuthError> {
        self.delay.sleep(self.config.latency()).await;

        let email = email.trim();
        let user = UserRecord::new(email, name_from_email(email), AuthProvider::Email);
        self.establish(user, "email sign-in")
    }

    /// Sign in with a simulated Google account. Google vouches for the
    /// email, so it is marked verified.
    pub async fn sign_in_with_google(&self) -> Result<UserRecord, AuthError> {
        self.delay.sleep(self.config.latency()).await;

        let mut user = UserRecord::new(GOOGLE_EMAIL, GOOGLE_DISPLAY_NAME, AuthProvider::Google)
            .with_photo(GOOGLE_PHOTO_URL);
        user.email_verified = true;
        self.establish(user, "google sign-in")
    }

    /// Sign in with a phone number and send it a one-time code.
    ///
    /// The session exists immediately with the phone unverified;
    /// [`verify_phone_otp`](Self::verify_phone_otp) completes it.
    pub async fn sign_in_with_phone(&self, phone: &str) -> Result<UserRecord, AuthError> {
        self.delay.sleep(self.config.latency()).await;

        let phone = normalize_phone(phone);
        let user = UserRecord::new("", "", AuthProvider::Phone).with_phone(phone.clone());
        let user = self.establish(user, "phone sign-in")?;
        self.write_state(|state| state.pending_phone = Some(phone));
        Ok(user)
    }

    /// Send a one-time code to `phone` for the current or upcoming session.
    pub async fn send_phone_otp(&self, phone: &str) -> Result<(), AuthError> {
        self.delay.sleep(self.config.latency()).await;

        let phone = normalize_phone(phone);
        tracing::info!(phone = %mask_phone(&phone), "one-time code sent");
        self.write_state(|state| state.pending_phone = Some(phone));
        Ok(())
    }

    /// Check a one-time code.
    ///
    /// On success the current session's phone is marked verified, or a new
    /// phone session is created when nobody is signed in but a code was sent.
    /// A session with no phone and no code sent fails with
    /// [`AuthError::NoPhonePending`].
    pub async fn verify_phone_otp(&self, code: &str) -> Result<UserRecord, AuthError> {
        self.delay.sleep(self.config.latency()).await;

        if code.trim() != self.config.accepted_otp {
            tracing::warn!("one-time code rejected");
            return Err(AuthError::InvalidOtp);
        }

        let (current, pending) = self.read_state(|s| (s.user.clone(), s.pending_phone.clone()));
        let user = match (current, pending) {
            (Some(mut user), pending) => {
                let phone = pending
                    .or_else(|| user.phone_number.clone())
                    .ok_or(AuthError::NoPhonePending)?;
                user.phone_number = Some(phone);
                user.phone_verified = true;
                user
            }
            (None, Some(phone)) => {
                let mut user = UserRecord::new("", "", AuthProvider::Phone).with_phone(phone);
                user.phone_verified = true;
                user
            }
            (None, None) => return Err(AuthError::NotSignedIn),
        };

        self.persist(&user)?;
        self.write_state(|state| {
            state.user = Some(user.clone());
            state.pending_phone = None;
        });
        tracing::info!(uid = %user.uid, "phone verified");
        Ok(user)
    }

    /// Overwrite profile fields of the current user.
    ///
    /// Changing the phone number clears its verified flag.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserRecord, AuthError> {
        self.delay.sleep(self.config.latency()).await;

        let mut user = self.current_user().ok_or(AuthError::NotSignedIn)?;

        if let Some(name) = update.display_name {
            user.display_name = name.trim().to_string();
        }
        if let Some(url) = update.photo_url {
            user.photo_url = Some(url).filter(|u| !u.trim().is_empty());
        }
        if let Some(phone) = update.phone_number {
            let phone = normalize_phone(&phone);
            if user.phone_number.as_deref() != Some(phone.as_str()) {
                user.phone_verified = false;
            }
            user.phone_number = Some(phone).filter(|p| !p.is_empty());
        }

        self.persist(&user)?;
        self.write_state(|state| state.user = Some(user.clone()));
        tracing::info!(uid = %user.uid, "profile updated");
        Ok(user)
    }

    /// Clear the session.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.delay.sleep(self.config.latency()).await;

        self.cache.delete(SESSION_KEY)?;
        let previous = self.write_state(|state| {
            state.pending_phone = None;
            state.user.take()
        });
        if let Some(user) = previous {
            tracing::info!(uid = %user.uid, "signed out");
        }
        Ok(())
    }

    fn establish(&self, user: UserRecord, how: &str) -> Result<UserRecord, AuthError> {
        self.persist(&user)?;
        self.write_state(|state| {
            state.user = Some(user.clone());
            state.pending_phone = None;
        });
        tracing::info!(uid = %user.uid, provider = user.provider.as_str(), "session started via {how}");
        Ok(user)
    }

    fn persist(&self, user: &UserRecord) -> Result<(), AuthError> {
        self.cache.set(SESSION_KEY, user).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist session");
            AuthError::from(e)
        })
    }

    fn read_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("config", &self.config)
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}

/// Keep the country code and last two digits: `+91******10`.
fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 5 {
        return "*".repeat(chars.len());
    }
    let keep_head = 3;
    let keep_tail = 2;
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i < keep_head || i >= chars.len() - keep_tail {
                *c
            } else {
                '*'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::NoDelay;

    fn store() -> AuthStore {
        AuthStore::new(Cache::in_memory(), AuthConfig::instant(), NoDelay)
    }

    #[tokio::test]
    async fn test_sign_in_with_email_derives_name() {
        let store = store();
        let user = store.sign_in_with_email("asha.rao@example.com", "x").await.unwrap();
        assert_eq!(user.display_name, "Asha Rao");
        assert_eq!(user.provider, AuthProvider::Email);
        assert!(store.is_signed_in());
    }

    #[tokio::test]
    async fn test_google_sign_in_is_email_verified() {
        let store = store();
        let user = store.sign_in_with_google().await.unwrap();
        assert!(user.email_verified);
        assert!(user.photo_url.is_some());
        assert!(user.provider.skips_verification());
    }

    #[tokio::test]
    async fn test_phone_sign_in_then_verify() {
        let store = store();
        let user = store.sign_in_with_phone("+91 98765 43210").await.unwrap();
        assert_eq!(user.phone_number.as_deref(), Some("+919876543210"));
        assert!(!user.phone_verified);
        assert_eq!(store.pending_phone().as_deref(), Some("+919876543210"));

        let verified = store.verify_phone_otp("123456").await.unwrap();
        assert_eq!(verified.uid, user.uid);
        assert!(verified.phone_verified);
        assert_eq!(store.pending_phone(), None);
    }

    #[tokio::test]
    async fn test_otp_without_session_creates_phone_session() {
        let store = store();
        store.send_phone_otp("+14155550100").await.unwrap();
        assert!(!store.is_signed_in());

        let user = store.verify_phone_otp("123456").await.unwrap();
        assert_eq!(user.provider, AuthProvider::Phone);
        assert!(user.phone_verified);
        assert!(store.is_signed_in());
    }

    #[tokio::test]
    async fn test_otp_with_nothing_pending_is_not_signed_in() {
        let store = store();
        assert!(matches!(
            store.verify_phone_otp("123456").await,
            Err(AuthError::NotSignedIn)
        ));
    }

    #[tokio::test]
    async fn test_otp_for_email_user_without_phone_is_rejected() {
        let store = store();
        store.sign_in_with_email("asha@example.com", "x").await.unwrap();

        assert!(matches!(
            store.verify_phone_otp("123456").await,
            Err(AuthError::NoPhonePending)
        ));
        let user = store.current_user().unwrap();
        assert_eq!(user.phone_number, None);
        assert!(!user.phone_verified);
    }

    #[tokio::test]
    async fn test_otp_verifies_phone_already_on_record() {
        let store = store();
        store
            .sign_up_with_email("asha@example.com", "secret1", "Asha", "+91 98765 43210")
            .await
            .unwrap();

        let user = store.verify_phone_otp("123456").await.unwrap();
        assert_eq!(user.phone_number.as_deref(), Some("+919876543210"));
        assert!(user.phone_verified);
    }

    #[tokio::test]
    async fn test_configured_otp_is_honoured() {
        let config = AuthConfig {
            accepted_otp: "000000".to_string(),
            ..AuthConfig::instant()
        };
        let store = AuthStore::new(Cache::in_memory(), config, NoDelay);
        store.send_phone_otp("+14155550100").await.unwrap();

        assert!(matches!(store.verify_phone_otp("123456").await, Err(AuthError::InvalidOtp)));
        assert!(store.verify_phone_otp("000000").await.is_ok());
    }

    #[tokio::test]
    async fn test_update_profile() {
        let store = store();
        assert!(matches!(
            store.update_profile(ProfileUpdate::default()).await,
            Err(AuthError::NotSignedIn)
        ));

        store.sign_in_with_phone("+919876543210").await.unwrap();
        store.verify_phone_otp("123456").await.unwrap();

        let user = store
            .update_profile(ProfileUpdate {
                display_name: Some(" Meera ".to_string()),
                phone_number: Some("+91 99999 00000".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(user.display_name, "Meera");
        assert_eq!(user.phone_number.as_deref(), Some("+919999900000"));
        assert!(!user.phone_verified);
        assert_eq!(store.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_clones_share_session() {
        let store = store();
        let other = store.clone();
        store.sign_in_with_google().await.unwrap();
        assert!(other.is_signed_in());
        other.sign_out().await.unwrap();
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_corrupt_record_is_discarded() {
        let cache = Cache::in_memory();
        cache.set(SESSION_KEY, &"not a user").unwrap();

        let store = AuthStore::restore(cache.clone(), AuthConfig::instant(), NoDelay).unwrap();
        assert!(!store.is_signed_in());
        assert!(!cache.exists(SESSION_KEY).unwrap());
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+919876543210"), "+91********10");
        assert_eq!(mask_phone("+123"), "****");
    }
}
