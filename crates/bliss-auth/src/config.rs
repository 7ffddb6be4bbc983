//! Auth store configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the simulated auth backend.
///
/// Maps onto the `[auth]` section of the storefront config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Artificial delay applied to every auth call, in milliseconds.
    pub latency_ms: u64,
    /// The only one-time code `verify_phone_otp` accepts.
    pub accepted_otp: String,
}

impl AuthConfig {
    /// Default artificial latency.
    pub const DEFAULT_LATENCY_MS: u64 = 800;
    /// Default accepted one-time code.
    pub const DEFAULT_OTP: &'static str = "123456";

    /// Zero-latency config for tests.
    pub fn instant() -> Self {
        Self {
            latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: Self::DEFAULT_LATENCY_MS,
            accepted_otp: Self::DEFAULT_OTP.to_string(),
        }
    }
}
