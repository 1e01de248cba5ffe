//! Tokio-based clock implementation.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::Clock;

/// Production clock backed by Tokio's async sleep.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl TokioClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
