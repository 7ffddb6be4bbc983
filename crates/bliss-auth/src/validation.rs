//! Signup form validation.
//!
//! Checks run in form order and every failing field is reported, so the
//! page can show all inline messages at once.

use crate::AuthError;

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A validation failure tied to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// What the visitor typed into the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Check every field, collecting all failures.
    pub fn validate(&self) -> Result<(), AuthError> {
        let errors: Vec<FieldError> = [
            validate_name(&self.name).err(),
            validate_email(&self.email).err(),
            validate_phone(&self.phone).err(),
            validate_password(&self.password).err(),
            validate_password_match(&self.password, &self.confirm_password).err(),
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

    /// Error for one field, if any. Used for inline messages.
    pub fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
        errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.clone())
    }
}

/// Name must not be blank.
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::new("name", "Name is required"));
    }
    Ok(())
}

/// Email must look like `local@domain.tld` with no whitespace.
///
/// ```rust
/// use bliss_auth::validation::validate_email;
///
/// assert!(validate_email("asha@example.com").is_ok());
/// assert!(validate_email("asha@example").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::new("email", "Email is required"));
    }

    let invalid = || FieldError::new("email", "Enter a valid email address");

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid());
    };
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    // domain needs a dot with something on both sides
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Phone must start with `+` and a country code.
///
/// Spaces and hyphens are ignored. After the `+` come 8 to 15 digits, the
/// first of which is not zero.
pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    let phone = normalize_phone(phone);
    if phone.is_empty() {
        return Err(FieldError::new("phone", "Phone number is required"));
    }

    let Some(digits) = phone.strip_prefix('+') else {
        return Err(FieldError::new(
            "phone",
            "Include your country code, e.g. +91 98765 43210",
        ));
    };

    let well_formed = digits.chars().all(|c| c.is_ascii_digit())
        && (8..=15).contains(&digits.len())
        && !digits.starts_with('0');

    if well_formed {
        Ok(())
    } else {
        Err(FieldError::new("phone", "Enter a valid phone number"))
    }
}

/// Password must be at least [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FieldError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

pub fn validate_password_match(password: &str, confirm: &str) -> Result<(), FieldError> {
    if password != confirm {
        return Err(FieldError::new("confirm_password", "Passwords do not match"));
    }
    Ok(())
}

/// Strip spaces and hyphens from a phone number.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765-43210".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_email_rules() {
        for ok in ["a@b.co", "first.last@mail.example.in"] {
            assert!(validate_email(ok).is_ok(), "{ok}");
        }
        for bad in ["", "plain", "@example.com", "a@.com", "a@com.", "a b@example.com", "a@b@c.com"] {
            assert!(validate_email(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_phone_rules() {
        assert!(validate_phone("+1 415 555 0100").is_ok());
        assert!(validate_phone("+919876543210").is_ok());

        let missing_plus = validate_phone("9876543210").unwrap_err();
        assert!(missing_plus.message.contains("country code"));
        assert!(validate_phone("+0123456789").is_err());
        assert!(validate_phone("+12345").is_err());
        assert!(validate_phone("+91abc4567890").is_err());
        assert_eq!(validate_phone("  ").unwrap_err().message, "Phone number is required");
    }

    #[test]
    fn test_all_failures_reported() {
        let form = SignupForm {
            name: " ".to_string(),
            email: "nope".to_string(),
            phone: "12345".to_string(),
            password: "abc".to_string(),
            confirm_password: "abd".to_string(),
        };
        let err = form.validate().unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "phone", "password", "confirm_password"]);
        assert_eq!(
            SignupForm::error_for(err.field_errors(), "confirm_password").as_deref(),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_password_length_counts_chars() {
        assert!(validate_password("ज्ञानी").is_ok());
        assert!(validate_password("12345").is_err());
    }
}
