//! Signup and booking wizard state machine.
//!
//! `auth → verification → booking → success`, one step at a time. Sessions
//! from providers that already vouch for the account jump from auth straight
//! to booking and cannot step back into verification. Success is terminal.
//!
//! The wizard lives in page state only; a reload starts it over while the
//! session survives in [`AuthStore`](crate::AuthStore).

use bliss_cache::Cache;
use bliss_commerce::booking::{save_booking, Booking, BookingDraft, ContactForm};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::user::UserRecord;
use crate::validation::{validate_email, validate_password, FieldError, SignupForm};
use crate::AuthError;

/// Steps in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Auth,
    Verification,
    Booking,
    Success,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Auth,
        WizardStep::Verification,
        WizardStep::Booking,
        WizardStep::Success,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Auth => "auth",
            WizardStep::Verification => "verification",
            WizardStep::Booking => "booking",
            WizardStep::Success => "success",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Auth => "Account",
            WizardStep::Verification => "Verify Phone",
            WizardStep::Booking => "Book Consultation",
            WizardStep::Success => "Confirmed",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Auth => 1,
            WizardStep::Verification => 2,
            WizardStep::Booking => 3,
            WizardStep::Success => 4,
        }
    }
}

/// Which auth form the first step shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    SignIn,
    #[default]
    SignUp,
}

impl AuthMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "signin" | "sign-in" | "login" => AuthMode::SignIn,
            _ => AuthMode::SignUp,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "signin",
            AuthMode::SignUp => "signup",
        }
    }
}

/// Where the visitor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntrySource {
    #[default]
    Direct,
    /// The contact page; its stashed payload pre-fills the forms.
    Contact,
}

/// Wizard position and the forms it carries between steps.
#[derive(Debug, Clone)]
pub struct SignupWizard {
    step: WizardStep,
    completed_steps: Vec<WizardStep>,
    skipped_verification: bool,
    mode: AuthMode,
    source: EntrySource,
    pub form: SignupForm,
    pub draft: BookingDraft,
    booking: Option<Booking>,
}

impl SignupWizard {
    pub fn new(mode: AuthMode, source: EntrySource) -> Self {
        Self {
            step: WizardStep::Auth,
            completed_steps: Vec::new(),
            skipped_verification: false,
            mode,
            source,
            form: SignupForm::default(),
            draft: BookingDraft::default(),
            booking: None,
        }
    }

    /// Build from the page's query string, e.g. `mode=signin&source=contact`.
    pub fn from_query_string(qs: &str) -> Self {
        let mut mode = AuthMode::default();
        let mut source = EntrySource::default();
        for pair in qs.trim_start_matches('?').split('&') {
            match pair.split_once('=') {
                Some(("mode", value)) => mode = AuthMode::parse(value),
                Some(("source", "contact")) => source = EntrySource::Contact,
                _ => {}
            }
        }
        Self::new(mode, source)
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn completed_steps(&self) -> &[WizardStep] {
        &self.completed_steps
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    pub fn source(&self) -> EntrySource {
        self.source
    }

    /// The booking made in this run, once on the success step.
    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    /// Whether the step was jumped over rather than completed.
    pub fn skipped(&self, step: WizardStep) -> bool {
        step == WizardStep::Verification && self.skipped_verification
    }

    /// Share of the flow behind the visitor: 0, 33, 66 or 100.
    pub fn progress_percent(&self) -> u8 {
        (u16::from(self.step.number() - 1) * 100 / 3) as u8
    }

    /// Load one-shot payloads when the page mounts.
    ///
    /// Coming from the contact page pre-fills name, email, phone and the
    /// special request. A booking draft stashed while signed out is resumed.
    pub fn mount(&mut self, cache: &Cache) -> Result<(), AuthError> {
        if self.source == EntrySource::Contact {
            if let Some(contact) = ContactForm::load(cache)? {
                self.prefill(&contact);
            }
        }
        if let Some(draft) = BookingDraft::take_pending(cache)? {
            tracing::debug!("resuming stashed booking draft");
            let special_request = std::mem::take(&mut self.draft.special_request);
            self.draft = draft;
            if self.draft.special_request.trim().is_empty() {
                self.draft.special_request = special_request;
            }
        }
        Ok(())
    }

    /// Drop the contact payload when the page unmounts.
    pub fn unmount(&self, cache: &Cache) -> Result<(), AuthError> {
        ContactForm::clear(cache)?;
        Ok(())
    }

    fn prefill(&mut self, contact: &ContactForm) {
        let contact = contact.trimmed();
        if self.form.name.is_empty() {
            self.form.name = contact.name;
        }
        if self.form.email.is_empty() {
            self.form.email = contact.email;
        }
        if self.form.phone.is_empty() {
            self.form.phone = contact.phone;
        }
        if self.draft.special_request.is_empty() {
            self.draft.special_request = contact.message;
        }
    }

    /// Check the auth form for the current mode before calling the store.
    ///
    /// Sign-up checks every field; sign-in only needs a well-formed email
    /// and a password.
    pub fn validate_auth_form(&self) -> Result<(), AuthError> {
        match self.mode {
            AuthMode::SignUp => self.form.validate(),
            AuthMode::SignIn => {
                let errors: Vec<FieldError> = [
                    validate_email(&self.form.email).err(),
                    validate_password(&self.form.password).err(),
                ]
                .into_iter()
                .flatten()
                .collect();
                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(AuthError::Validation(errors))
                }
            }
        }
    }

    /// Record a successful sign-in or sign-up and move past the auth step.
    pub fn authenticated(&mut self, user: &UserRecord) -> Result<WizardStep, AuthError> {
        self.expect_step(WizardStep::Auth, WizardStep::Verification)?;
        let next = self.after_auth(user);
        self.complete_and_move(next);
        tracing::debug!(step = next.as_str(), provider = user.provider.as_str(), "wizard authenticated");
        Ok(next)
    }

    /// Record a verified phone and move to booking.
    pub fn verified(&mut self, user: &UserRecord) -> Result<WizardStep, AuthError> {
        self.expect_step(WizardStep::Verification, WizardStep::Booking)?;
        if !user.phone_verified {
            return Err(AuthError::InvalidOtp);
        }
        self.complete_and_move(WizardStep::Booking);
        Ok(WizardStep::Booking)
    }

    /// Advance one step. Leaving auth needs a session; booking only
    /// completes through [`submit_booking`](Self::submit_booking).
    pub fn next(&mut self, user: Option<&UserRecord>) -> Result<WizardStep, AuthError> {
        let next = match self.step {
            WizardStep::Auth => {
                let user = user.ok_or(AuthError::NotSignedIn)?;
                self.after_auth(user)
            }
            WizardStep::Verification => {
                if user.is_none() {
                    return Err(AuthError::NotSignedIn);
                }
                WizardStep::Booking
            }
            WizardStep::Booking | WizardStep::Success => {
                return Err(self.transition_error(WizardStep::Success));
            }
        };
        self.complete_and_move(next);
        Ok(next)
    }

    /// Step back one step.
    pub fn prev(&mut self) -> Result<WizardStep, AuthError> {
        let prev = match self.step {
            WizardStep::Verification => WizardStep::Auth,
            WizardStep::Booking if !self.skipped_verification => WizardStep::Verification,
            WizardStep::Booking => return Err(self.transition_error(WizardStep::Verification)),
            WizardStep::Auth | WizardStep::Success => {
                return Err(self.transition_error(WizardStep::Auth));
            }
        };
        self.step = prev;
        Ok(prev)
    }

    /// Submit the booking draft for `user`, store it and finish the wizard.
    pub fn submit_booking(
        &mut self,
        user: &UserRecord,
        cache: &Cache,
        today: NaiveDate,
    ) -> Result<Booking, AuthError> {
        self.expect_step(WizardStep::Booking, WizardStep::Success)?;

        let booking = self.draft.submit(user.snapshot(), today)?;
        save_booking(cache, &booking)?;

        self.complete_and_move(WizardStep::Success);
        self.booking = Some(booking.clone());
        tracing::info!(booking = %booking.id, uid = %user.uid, "wizard finished");
        Ok(booking)
    }

    fn after_auth(&mut self, user: &UserRecord) -> WizardStep {
        if user.provider.skips_verification() {
            self.skipped_verification = true;
            WizardStep::Booking
        } else {
            self.skipped_verification = false;
            WizardStep::Verification
        }
    }

    fn complete_and_move(&mut self, next: WizardStep) {
        if !self.completed_steps.contains(&self.step) {
            self.completed_steps.push(self.step);
        }
        self.step = next;
    }

    fn expect_step(&self, expected: WizardStep, to: WizardStep) -> Result<(), AuthError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(self.transition_error(to))
        }
    }

    fn transition_error(&self, to: WizardStep) -> AuthError {
        AuthError::InvalidTransition {
            from: self.step.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

impl Default for SignupWizard {
    fn default() -> Self {
        Self::new(AuthMode::default(), EntrySource::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::AuthProvider;
    use bliss_commerce::booking::{load_bookings, ConsultationType};
    use bliss_commerce::ids::ConsultantId;

    fn email_user() -> UserRecord {
        UserRecord::new("asha@example.com", "Asha", AuthProvider::Email)
    }

    fn google_user() -> UserRecord {
        UserRecord::new("g@gmail.com", "G", AuthProvider::Google)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn fill_draft(wizard: &mut SignupWizard) {
        wizard.draft.consultation_type = ConsultationType::Virtual;
        wizard.draft.date = NaiveDate::from_ymd_opt(2026, 3, 5);
        wizard.draft.time_slot = Some("02:00 PM".to_string());
        wizard.draft.consultant_id = Some(ConsultantId::new("cs_arjun"));
    }

    #[test]
    fn test_query_string() {
        let wizard = SignupWizard::from_query_string("?mode=signin&source=contact");
        assert_eq!(wizard.mode(), AuthMode::SignIn);
        assert_eq!(wizard.source(), EntrySource::Contact);

        let wizard = SignupWizard::from_query_string("");
        assert_eq!(wizard.mode(), AuthMode::SignUp);
        assert_eq!(wizard.source(), EntrySource::Direct);
    }

    #[test]
    fn test_linear_flow_with_back_navigation() {
        let cache = Cache::in_memory();
        let mut wizard = SignupWizard::default();
        let mut user = email_user();

        assert!(matches!(wizard.next(None), Err(AuthError::NotSignedIn)));
        assert_eq!(wizard.authenticated(&user).unwrap(), WizardStep::Verification);
        assert_eq!(wizard.progress_percent(), 33);

        assert_eq!(wizard.prev().unwrap(), WizardStep::Auth);
        assert_eq!(wizard.next(Some(&user)).unwrap(), WizardStep::Verification);

        assert!(matches!(wizard.verified(&user), Err(AuthError::InvalidOtp)));
        user.phone_verified = true;
        assert_eq!(wizard.verified(&user).unwrap(), WizardStep::Booking);
        assert_eq!(wizard.prev().unwrap(), WizardStep::Verification);
        assert_eq!(wizard.next(Some(&user)).unwrap(), WizardStep::Booking);

        fill_draft(&mut wizard);
        let booking = wizard.submit_booking(&user, &cache, today()).unwrap();
        assert_eq!(wizard.step(), WizardStep::Success);
        assert_eq!(wizard.progress_percent(), 100);
        assert_eq!(wizard.booking(), Some(&booking));
        assert_eq!(load_bookings(&cache).unwrap(), vec![booking]);
        assert_eq!(
            wizard.completed_steps(),
            &[WizardStep::Auth, WizardStep::Verification, WizardStep::Booking]
        );
    }

    #[test]
    fn test_google_skips_verification_one_way() {
        let mut wizard = SignupWizard::default();
        assert_eq!(wizard.authenticated(&google_user()).unwrap(), WizardStep::Booking);
        assert!(wizard.skipped(WizardStep::Verification));
        assert!(matches!(wizard.prev(), Err(AuthError::InvalidTransition { .. })));
        assert_eq!(wizard.step(), WizardStep::Booking);
    }

    #[test]
    fn test_success_is_dead_end() {
        let cache = Cache::in_memory();
        let mut wizard = SignupWizard::default();
        let user = google_user();
        wizard.authenticated(&user).unwrap();
        fill_draft(&mut wizard);
        wizard.submit_booking(&user, &cache, today()).unwrap();

        assert!(wizard.prev().is_err());
        assert!(wizard.next(Some(&user)).is_err());
        assert!(wizard.submit_booking(&user, &cache, today()).is_err());
        assert_eq!(load_bookings(&cache).unwrap().len(), 1);
    }

    #[test]
    fn test_incomplete_booking_stays_on_step() {
        let cache = Cache::in_memory();
        let mut wizard = SignupWizard::default();
        let user = google_user();
        wizard.authenticated(&user).unwrap();

        let err = wizard.submit_booking(&user, &cache, today()).unwrap_err();
        assert!(matches!(err, AuthError::Booking(_)));
        assert_eq!(wizard.step(), WizardStep::Booking);
        assert!(load_bookings(&cache).unwrap().is_empty());
    }

    #[test]
    fn test_contact_prefill_read_at_mount_and_cleared_at_unmount() {
        let cache = Cache::in_memory();
        ContactForm {
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            phone: "+919876543210".to_string(),
            message: "Winter wedding in Jaipur".to_string(),
        }
        .stash(&cache)
        .unwrap();

        let mut direct = SignupWizard::default();
        direct.mount(&cache).unwrap();
        assert!(direct.form.name.is_empty());

        let mut wizard = SignupWizard::from_query_string("source=contact");
        wizard.mount(&cache).unwrap();
        assert_eq!(wizard.form.name, "Meera");
        assert_eq!(wizard.form.phone, "+919876543210");
        assert_eq!(wizard.draft.special_request, "Winter wedding in Jaipur");

        wizard.unmount(&cache).unwrap();
        assert_eq!(ContactForm::load(&cache).unwrap(), None);
    }

    #[test]
    fn test_pending_draft_resumed_on_mount() {
        let cache = Cache::in_memory();
        let mut draft = BookingDraft::new();
        draft.consultation_type = ConsultationType::HomeVisit;
        draft.stash_pending(&cache).unwrap();

        let mut wizard = SignupWizard::default();
        wizard.mount(&cache).unwrap();
        assert_eq!(wizard.draft.consultation_type, ConsultationType::HomeVisit);
        assert_eq!(BookingDraft::take_pending(&cache).unwrap(), None);
    }

    #[test]
    fn test_sign_in_form_checks_fewer_fields() {
        let mut wizard = SignupWizard::from_query_string("mode=signin");
        wizard.form.email = "asha@example.com".to_string();
        wizard.form.password = "secret1".to_string();
        assert!(wizard.validate_auth_form().is_ok());

        wizard.set_mode(AuthMode::SignUp);
        let err = wizard.validate_auth_form().unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "phone", "confirm_password"]);
    }
}
