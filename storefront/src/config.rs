//! Storefront configuration, embedded from `storefront.toml`.

use anyhow::{Context, Result};
use bliss_auth::AuthConfig;
use bliss_commerce::Currency;
use serde::{Deserialize, Serialize};

const EMBEDDED: &str = include_str!("../storefront.toml");

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub site: SiteConfig,

    /// Simulated auth backend.
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Parse the config compiled into the bundle.
    pub fn load() -> Result<Self> {
        Self::from_toml(EMBEDDED).context("Failed to parse embedded storefront.toml")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid storefront config")?;
        if Currency::from_code(&config.site.currency).is_none() {
            anyhow::bail!("Unknown currency code: {}", config.site.currency);
        }
        Ok(config)
    }
}

/// Branding shown in the header and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    /// ISO currency code for prices.
    pub currency: String,
    pub support_email: String,
}

impl SiteConfig {
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.currency).unwrap_or_default()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Bliss".to_string(),
            tagline: "Everything for your wedding, in one place".to_string(),
            currency: "INR".to_string(),
            support_email: "hello@bliss.example".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = StorefrontConfig::load().unwrap();
        assert_eq!(config.site.currency(), Currency::INR);
        assert_eq!(config.auth.accepted_otp, "123456");
        assert_eq!(config.auth.latency_ms, 800);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = StorefrontConfig::from_toml("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.site.name, "Bliss");
        assert_eq!(config.auth, AuthConfig::default());
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let err = StorefrontConfig::from_toml("[site]\ncurrency = \"XYZ\"\n").unwrap_err();
        assert!(err.to_string().contains("XYZ"));
    }
}
