//! Contact-form payload handed from the contact page to the signup wizard.

use serde::{Deserialize, Serialize};

/// Storage key for the one-shot contact-form payload.
pub const CONTACT_FORM_KEY: &str = "bliss.contact_form";

/// What a visitor typed into the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Every field blank after trimming.
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.message]
            .iter()
            .all(|f| f.trim().is_empty())
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[cfg(feature = "storage")]
mod storage {
    use super::*;
    use crate::error::CommerceError;
    use bliss_cache::Cache;

    impl ContactForm {
        /// Stash the payload for the wizard. Blank forms are not stored.
        pub fn stash(&self, cache: &Cache) -> Result<bool, CommerceError> {
            if self.is_blank() {
                return Ok(false);
            }
            cache.set(CONTACT_FORM_KEY, &self.trimmed())?;
            tracing::debug!("contact form stashed for signup");
            Ok(true)
        }

        /// Read the stashed payload without removing it.
        pub fn load(cache: &Cache) -> Result<Option<ContactForm>, CommerceError> {
            Ok(cache.get(CONTACT_FORM_KEY)?)
        }

        pub fn clear(cache: &Cache) -> Result<(), CommerceError> {
            Ok(cache.delete(CONTACT_FORM_KEY)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: " Meera ".to_string(),
            email: "meera@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            message: "Looking for a December venue".to_string(),
        }
    }

    #[test]
    fn test_blank_detection() {
        assert!(ContactForm::default().is_blank());
        assert!(ContactForm { name: "   ".to_string(), ..Default::default() }.is_blank());
        assert!(!filled().is_blank());
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let form: ContactForm = serde_json::from_str(r#"{"name":"Meera"}"#).unwrap();
        assert_eq!(form.name, "Meera");
        assert!(form.message.is_empty());
    }

    #[cfg(feature = "storage")]
    #[test]
    fn test_stash_load_clear() {
        let cache = bliss_cache::Cache::in_memory();
        assert!(!ContactForm::default().stash(&cache).unwrap());
        assert_eq!(ContactForm::load(&cache).unwrap(), None);

        assert!(filled().stash(&cache).unwrap());
        let loaded = ContactForm::load(&cache).unwrap().unwrap();
        assert_eq!(loaded.name, "Meera");
        // load does not consume
        assert!(ContactForm::load(&cache).unwrap().is_some());

        ContactForm::clear(&cache).unwrap();
        assert_eq!(ContactForm::load(&cache).unwrap(), None);
    }
}
