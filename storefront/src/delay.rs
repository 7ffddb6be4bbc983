//! Browser timer implementation of the auth latency.

use std::time::Duration;

use async_trait::async_trait;
use bliss_auth::Delay;
use futures::channel::oneshot;
use leptos::prelude::set_timeout;

/// Waits on `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutDelay;

#[async_trait(?Send)]
impl Delay for TimeoutDelay {
    async fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        let (done, wait) = oneshot::channel::<()>();
        set_timeout(
            move || {
                let _ = done.send(());
            },
            duration,
        );
        // a dropped sender only means the timer never fired; carry on
        let _ = wait.await;
    }
}
