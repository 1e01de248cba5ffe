//! Attestation polling
//!
//! After a burn confirms, Circle's attestation service has to observe the
//! emitted message and sign off on it before the destination chain will
//! mint. This module polls the service for a given message hash with
//! exponential backoff until the attestation is complete or the attempt
//! budget runs out.

use alloy_primitives::{hex, FixedBytes};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{BridgeError, Result};
use crate::protocol::AttestationBytes;
use crate::spans;
use crate::traits::{AttestationProvider, Clock};

/// Multiplier applied to the delay after each unsuccessful attempt.
const BACKOFF_FACTOR: f64 = 1.5;

/// Configuration for attestation polling behavior.
///
/// The defaults suit CCTP v1 testnet attestations, which usually land
/// within a few minutes but can take considerably longer.
///
/// # Example
///
/// ```rust
/// use cctp_bridge::PollingConfig;
/// use std::time::Duration;
///
/// let config = PollingConfig::default()
///     .with_max_attempts(10)
///     .with_initial_delay(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    /// Maximum number of status queries before giving up.
    pub max_attempts: u32,
    /// Delay before the second query; grows by 1.5x per attempt.
    pub initial_delay: Duration,
    /// Upper bound on the backoff delay.
    pub max_delay: Duration,
}

impl Default for PollingConfig {
    /// 60 attempts, 5 second initial delay, 30 second cap.
    ///
    /// Worst case this polls for roughly 29 minutes, which covers the
    /// typical v1 attestation window with margin.
    fn default() -> Self {
        Self {
            max_attempts: 60,
            initial_delay: Duration::from_millis(5000),
            max_delay: Duration::from_millis(30_000),
        }
    }
}

impl PollingConfig {
    /// Sets the maximum number of polling attempts.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the delay before the second attempt.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the backoff cap.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }
}

/// Polls an [`AttestationProvider`] until a terminal attestation appears.
///
/// The poller owns no state between calls beyond its configuration; the
/// backoff delay is local to each [`poll`](AttestationPoller::poll).
#[derive(Debug, Clone)]
pub struct AttestationPoller<A, C> {
    provider: A,
    clock: C,
    config: PollingConfig,
}

impl<A: AttestationProvider, C: Clock> AttestationPoller<A, C> {
    pub fn new(provider: A, clock: C, config: PollingConfig) -> Self {
        Self {
            provider,
            clock,
            config,
        }
    }

    /// Returns the provider used for status queries.
    pub fn provider(&self) -> &A {
        &self.provider
    }

    /// Polls until the attestation for `message_hash` is complete.
    ///
    /// Queries the provider up to `max_attempts` times. A complete status
    /// with attestation bytes returns immediately. Anything else waits
    /// `delay` and multiplies the delay by 1.5, capped at `max_delay`. A
    /// complete status without bytes is treated like pending; the service is
    /// expected to fill the field in on a later query.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::PollTimeout`] when the attempt budget is exhausted.
    /// - [`BridgeError::AttestationFetch`] (or other hard provider errors)
    ///   abort the poll on the attempt that produced them.
    pub async fn poll(&self, message_hash: FixedBytes<32>) -> Result<AttestationBytes> {
        let span = spans::poll_attestation(&message_hash, self.config.max_attempts);
        let _guard = span.enter();

        // Record failures while the span guard is still live so the span
        // closes with its error fields filled in.
        match self.poll_until_complete(message_hash).await {
            Ok(attestation) => Ok(attestation),
            Err(err) => {
                spans::record_error(&err);
                Err(err)
            }
        }
    }

    async fn poll_until_complete(&self, message_hash: FixedBytes<32>) -> Result<AttestationBytes> {
        let mut delay = self.config.initial_delay;

        for attempt in 1..=self.config.max_attempts {
            debug!(
                attempt = attempt,
                max_attempts = self.config.max_attempts,
                event = "attestation_status_query"
            );

            let record = self.provider.fetch_status(message_hash).await?;

            if let Some(attestation) = record.into_complete() {
                info!(
                    message_hash = %hex::encode(message_hash),
                    attestation_length_bytes = attestation.len(),
                    attempts_used = attempt,
                    event = "attestation_complete"
                );
                return Ok(attestation);
            }

            if attempt < self.config.max_attempts {
                debug!(
                    delay_ms = delay.as_millis() as u64,
                    event = "attestation_pending"
                );
                self.clock.sleep(delay).await;
                delay = delay.mul_f64(BACKOFF_FACTOR).min(self.config.max_delay);
            }
        }

        Err(BridgeError::PollTimeout {
            attempts: self.config.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeAttestationProvider, FakeClock};
    use alloy_primitives::Bytes;

    fn poller(
        provider: &FakeAttestationProvider,
        clock: &FakeClock,
        config: PollingConfig,
    ) -> AttestationPoller<FakeAttestationProvider, FakeClock> {
        AttestationPoller::new(provider.clone(), clock.clone(), config)
    }

    #[test]
    fn default_config() {
        let config = PollingConfig::default();
        assert_eq!(config.max_attempts, 60);
        assert_eq!(config.initial_delay, Duration::from_millis(5000));
        assert_eq!(config.max_delay, Duration::from_millis(30_000));
    }

    #[tokio::test]
    async fn returns_after_third_query_when_attestation_lands() {
        let provider = FakeAttestationProvider::new();
        let clock = FakeClock::new();
        let message_hash = FixedBytes::from([1u8; 32]);
        provider.add_pending_then_complete(message_hash, 2, Bytes::from_static(b"att"));

        let config = PollingConfig::default().with_max_attempts(5);
        let result = poller(&provider, &clock, config).poll(message_hash).await;

        assert_eq!(result.unwrap(), Bytes::from_static(b"att"));
        assert_eq!(provider.call_count(message_hash), 3);
        assert_eq!(clock.sleep_count(), 2);
    }

    #[tokio::test]
    async fn times_out_with_backoff_schedule() {
        let provider = FakeAttestationProvider::new();
        let clock = FakeClock::new();
        let message_hash = FixedBytes::from([2u8; 32]);
        provider.add_always_pending(message_hash);

        let config = PollingConfig::default().with_max_attempts(3);
        let result = poller(&provider, &clock, config).poll(message_hash).await;

        assert!(matches!(
            result.unwrap_err(),
            BridgeError::PollTimeout { attempts: 3 }
        ));
        assert_eq!(provider.call_count(message_hash), 3);
        // No sleep after the final attempt; delays follow 5000ms * 1.5.
        assert_eq!(
            clock.delays(),
            vec![Duration::from_millis(5000), Duration::from_millis(7500)]
        );
    }

    #[tokio::test]
    async fn backoff_is_capped_at_max_delay() {
        let provider = FakeAttestationProvider::new();
        let clock = FakeClock::new();
        let message_hash = FixedBytes::from([3u8; 32]);
        provider.add_always_pending(message_hash);

        let config = PollingConfig::default()
            .with_max_attempts(4)
            .with_initial_delay(Duration::from_secs(25))
            .with_max_delay(Duration::from_secs(30));
        let _ = poller(&provider, &clock, config).poll(message_hash).await;

        assert_eq!(
            clock.delays(),
            vec![
                Duration::from_secs(25),
                Duration::from_secs(30),
                Duration::from_secs(30),
            ]
        );
    }

    #[tokio::test]
    async fn complete_on_first_query_never_sleeps() {
        let provider = FakeAttestationProvider::new();
        let clock = FakeClock::new();
        let message_hash = FixedBytes::from([4u8; 32]);
        provider.add_complete(message_hash, Bytes::from_static(b"\xde\xad\xbe\xef"));

        let result = poller(&provider, &clock, PollingConfig::default())
            .poll(message_hash)
            .await;

        assert!(result.is_ok());
        assert_eq!(provider.call_count(message_hash), 1);
        assert_eq!(clock.sleep_count(), 0);
    }

    #[tokio::test]
    async fn complete_without_bytes_keeps_polling() {
        let provider = FakeAttestationProvider::new();
        let clock = FakeClock::new();
        let message_hash = FixedBytes::from([5u8; 32]);
        provider.add_complete_without_bytes_then_complete(
            message_hash,
            Bytes::from_static(b"att"),
        );

        let config = PollingConfig::default().with_max_attempts(3);
        let result = poller(&provider, &clock, config).poll(message_hash).await;

        assert_eq!(result.unwrap(), Bytes::from_static(b"att"));
        assert_eq!(provider.call_count(message_hash), 2);
    }

    #[tokio::test]
    async fn timeout_records_error_on_the_poll_span() {
        use crate::testing::SpanFieldRecorder;
        use tracing::instrument::WithSubscriber;
        use tracing_subscriber::layer::SubscriberExt;

        let recorder = SpanFieldRecorder::new();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());

        let provider = FakeAttestationProvider::new();
        let clock = FakeClock::new();
        let message_hash = FixedBytes::from([9u8; 32]);
        provider.add_always_pending(message_hash);

        let config = PollingConfig::default().with_max_attempts(2);
        let result = poller(&provider, &clock, config)
            .poll(message_hash)
            .with_subscriber(subscriber)
            .await;

        assert!(matches!(
            result.unwrap_err(),
            BridgeError::PollTimeout { attempts: 2 }
        ));
        assert_eq!(
            recorder.value_of("otel.status_code").as_deref(),
            Some("ERROR")
        );
        let message = recorder.value_of("error.message").unwrap();
        assert!(message.contains("timed out after 2 attempts"));
    }

    #[tokio::test]
    async fn hard_fetch_error_aborts_the_poll() {
        let provider = FakeAttestationProvider::new();
        let clock = FakeClock::new();
        let message_hash = FixedBytes::from([6u8; 32]);
        provider.add_fetch_failure(message_hash, "connection reset");

        let result = poller(&provider, &clock, PollingConfig::default())
            .poll(message_hash)
            .await;

        assert!(matches!(
            result.unwrap_err(),
            BridgeError::AttestationFetch { .. }
        ));
        assert_eq!(provider.call_count(message_hash), 1);
        assert_eq!(clock.sleep_count(), 0);
    }
}
