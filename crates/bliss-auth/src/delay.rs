//! Artificial latency for the simulated auth backend.
//!
//! [`AuthStore`](crate::AuthStore) waits on a [`Delay`] before every call
//! resolves. The storefront supplies a browser-timer implementation; tests
//! use [`NoDelay`].

use std::time::Duration;

use async_trait::async_trait;

/// Something that can wait for a duration.
#[async_trait(?Send)]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Delay for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

/// Sleeps on the tokio timer.
#[cfg(feature = "tokio")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[cfg(feature = "tokio")]
#[async_trait(?Send)]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
