/// End-to-end session behaviour of the simulated auth store: sign-up,
/// one-time codes, restore from storage and sign-out.
use bliss_auth::{
    AuthConfig, AuthError, AuthMode, AuthProvider, AuthStore, EntrySource, NoDelay, SignupWizard, UserRecord,
    WizardStep, SESSION_KEY,
};
use bliss_cache::Cache;

fn store_over(cache: &Cache) -> AuthStore {
    AuthStore::new(cache.clone(), AuthConfig::instant(), NoDelay)
}

#[tokio::test]
async fn accepted_code_verifies_phone() {
    let store = store_over(&Cache::in_memory());
    store.sign_in_with_phone("+919876543210").await.unwrap();

    let user = store.verify_phone_otp("123456").await.unwrap();
    assert!(user.phone_verified);
}

#[tokio::test]
async fn any_other_code_is_invalid_otp() {
    let store = store_over(&Cache::in_memory());
    store.sign_in_with_phone("+919876543210").await.unwrap();

    for code in ["000000", "123457", "654321", "999999"] {
        let err = store.verify_phone_otp(code).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidOtp));
        assert_eq!(err.to_string(), "Invalid OTP");
    }
    assert!(!store.current_user().unwrap().phone_verified);
}

#[tokio::test]
async fn sign_up_generates_fresh_uid_and_keeps_name() {
    let store = store_over(&Cache::in_memory());

    let first = store
        .sign_up_with_email("asha@example.com", "secret1", "Asha Rao", "")
        .await
        .unwrap();
    let second = store
        .sign_up_with_email("asha@example.com", "secret1", "Asha Rao", "")
        .await
        .unwrap();

    assert_eq!(first.display_name, "Asha Rao");
    assert_eq!(first.provider, AuthProvider::Email);
    assert!(!first.uid.as_str().is_empty());
    assert_ne!(first.uid, second.uid);
    assert_eq!(store.current_user().unwrap().uid, second.uid);
}

#[tokio::test]
async fn session_survives_restore() {
    let cache = Cache::in_memory();
    let user = store_over(&cache)
        .sign_up_with_email("meera@example.com", "secret1", "Meera", "+91 98765 43210")
        .await
        .unwrap();

    let stored: UserRecord = cache.get(SESSION_KEY).unwrap().unwrap();
    assert_eq!(stored, user);

    let restored = AuthStore::restore(cache, AuthConfig::instant(), NoDelay).unwrap();
    assert_eq!(restored.current_user(), Some(user));
}

#[tokio::test]
async fn sign_out_clears_storage() {
    let cache = Cache::in_memory();
    let store = store_over(&cache);
    store.sign_in_with_google().await.unwrap();
    assert!(cache.exists(SESSION_KEY).unwrap());

    store.sign_out().await.unwrap();
    assert!(!store.is_signed_in());
    assert!(!cache.exists(SESSION_KEY).unwrap());

    let restored = AuthStore::restore(cache, AuthConfig::instant(), NoDelay).unwrap();
    assert_eq!(restored.current_user(), None);
}

#[tokio::test]
async fn every_mutation_is_persisted() {
    let cache = Cache::in_memory();
    let store = store_over(&cache);
    store.sign_in_with_email("asha@example.com", "pw").await.unwrap();
    store.send_phone_otp("+14155550100").await.unwrap();
    store.verify_phone_otp("123456").await.unwrap();

    let stored: UserRecord = cache.get(SESSION_KEY).unwrap().unwrap();
    assert_eq!(stored.phone_number.as_deref(), Some("+14155550100"));
    assert!(stored.phone_verified);
}

#[tokio::test]
async fn sign_up_keeps_phone_unverified_through_skipped_verification() {
    let cache = Cache::in_memory();
    let store = store_over(&cache);
    let user = store
        .sign_up_with_email("asha@example.com", "secret1", "Asha Rao", "+91 98765 43210")
        .await
        .unwrap();
    assert_eq!(user.phone_number.as_deref(), Some("+919876543210"));
    assert!(!user.phone_verified);

    let mut wizard = SignupWizard::new(AuthMode::SignUp, EntrySource::Direct);
    assert_eq!(wizard.authenticated(&user).unwrap(), WizardStep::Verification);
    assert_eq!(wizard.next(Some(&user)).unwrap(), WizardStep::Booking);

    let current = store.current_user().unwrap();
    assert_eq!(current.snapshot().phone_number.as_deref(), Some("+919876543210"));
    let stored: UserRecord = cache.get(SESSION_KEY).unwrap().unwrap();
    assert_eq!(stored.phone_number.as_deref(), Some("+919876543210"));
}

#[tokio::test]
async fn code_for_session_without_phone_is_rejected() {
    let store = store_over(&Cache::in_memory());
    store.sign_in_with_email("asha@example.com", "pw").await.unwrap();

    let err = store.verify_phone_otp("123456").await.unwrap_err();
    assert!(matches!(err, AuthError::NoPhonePending));
    let user = store.current_user().unwrap();
    assert!(user.phone_number.is_none() && !user.phone_verified);
}
