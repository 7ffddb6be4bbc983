//! Authentication errors.

use crate::validation::FieldError;
use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The one-time code did not match.
    #[error("Invalid OTP")]
    InvalidOtp,

    /// A code was checked but there is no phone number to verify.
    #[error("no phone number to verify")]
    NoPhonePending,

    /// The operation needs a session and there is none.
    #[error("not signed in")]
    NotSignedIn,

    /// One or more form fields failed validation.
    #[error("validation failed: {}", describe(.0))]
    Validation(Vec<FieldError>),

    /// The wizard cannot move between these steps.
    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Booking could not be submitted or stored.
    #[error("booking error: {0}")]
    Booking(#[from] bliss_commerce::CommerceError),

    /// Cache error.
    #[error("cache error: {0}")]
    Cache(#[from] bliss_cache::CacheError),
}

impl AuthError {
    /// Field errors carried by a validation failure, empty otherwise.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            AuthError::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// Errors the visitor can fix by correcting input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidOtp
                | AuthError::NoPhonePending
                | AuthError::Validation(_)
                | AuthError::Booking(_)
        )
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_otp_message() {
        assert_eq!(AuthError::InvalidOtp.to_string(), "Invalid OTP");
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let err = AuthError::Validation(vec![
            FieldError::new("email", "Enter a valid email address"),
            FieldError::new("password", "Password must be at least 6 characters"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: email: Enter a valid email address; password: Password must be at least 6 characters"
        );
        assert_eq!(err.field_errors().len(), 2);
        assert!(err.is_user_error());
        assert!(!AuthError::NotSignedIn.is_user_error());
    }
}
