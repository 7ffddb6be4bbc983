//! The session record.

use bliss_commerce::booking::CustomerSnapshot;
use bliss_commerce::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the current session was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    #[default]
    Email,
    Google,
    Phone,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Email => "email",
            AuthProvider::Google => "google",
            AuthProvider::Phone => "phone",
        }
    }

    /// Providers that already vouch for the account, so the wizard skips
    /// phone verification.
    pub fn skips_verification(&self) -> bool {
        matches!(self, AuthProvider::Google)
    }
}

/// The signed-in user. Its presence in storage is what "signed in" means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub uid: UserId,
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub phone_verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub provider: AuthProvider,
}

impl UserRecord {
    /// A fresh record with a newly generated uid.
    pub fn new(email: impl Into<String>, display_name: impl Into<String>, provider: AuthProvider) -> Self {
        Self {
            uid: generate_uid(),
            email: email.into(),
            display_name: display_name.into(),
            photo_url: None,
            phone_number: None,
            email_verified: false,
            phone_verified: false,
            created_at: Utc::now(),
            provider,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    pub fn with_photo(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    /// Name to greet the user by: display name, else the email's local part.
    pub fn greeting_name(&self) -> &str {
        let name = self.display_name.trim();
        if !name.is_empty() {
            return name.split_whitespace().next().unwrap_or(name);
        }
        self.email.split('@').next().unwrap_or(&self.email)
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.email.chars().take(1).flat_map(char::to_uppercase).collect()
        } else {
            initials
        }
    }

    /// Copy of the fields a booking keeps about its customer.
    pub fn snapshot(&self) -> CustomerSnapshot {
        CustomerSnapshot {
            uid: self.uid.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

/// Fields `update_profile` may overwrite. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub phone_number: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.photo_url.is_none() && self.phone_number.is_none()
    }
}

/// Generate a random 28-character uid.
fn generate_uid() -> UserId {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 21] = rand::thread_rng().gen();
    UserId::new(URL_SAFE_NO_PAD.encode(bytes))
}

/// Derive a display name from an email's local part: `asha.rao@x` → `Asha Rao`.
pub(crate) fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-', '+'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uids_are_unique_and_url_safe() {
        let a = UserRecord::new("a@example.com", "A", AuthProvider::Email);
        let b = UserRecord::new("a@example.com", "A", AuthProvider::Email);
        assert_ne!(a.uid, b.uid);
        assert_eq!(a.uid.as_str().len(), 28);
        assert!(a
            .uid
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_serialized_field_names() {
        let user = UserRecord::new("asha@example.com", "Asha Rao", AuthProvider::Google)
            .with_photo("https://example.com/a.png");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["displayName"], "Asha Rao");
        assert_eq!(json["photoURL"], "https://example.com/a.png");
        assert_eq!(json["provider"], "google");
        assert_eq!(json["emailVerified"], false);
        assert!(json.get("phoneNumber").is_none());
    }

    #[test]
    fn test_greeting_and_initials() {
        let user = UserRecord::new("asha@example.com", "asha rao", AuthProvider::Email);
        assert_eq!(user.greeting_name(), "asha");
        assert_eq!(user.initials(), "AR");

        let anonymous = UserRecord::new("meera@example.com", "", AuthProvider::Phone);
        assert_eq!(anonymous.greeting_name(), "meera");
        assert_eq!(anonymous.initials(), "M");
    }

    #[test]
    fn test_snapshot_copies_contact_fields() {
        let user = UserRecord::new("asha@example.com", "Asha", AuthProvider::Email)
            .with_phone("+919876543210");
        let snapshot = user.snapshot();
        assert_eq!(snapshot.uid, user.uid);
        assert_eq!(snapshot.phone_number.as_deref(), Some("+919876543210"));
    }

    #[test]
    fn test_name_from_email() {
        assert_eq!(name_from_email("asha.rao@example.com"), "Asha Rao");
        assert_eq!(name_from_email("dev_ops+test@x.io"), "Dev Ops Test");
    }
}
