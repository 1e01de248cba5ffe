//! Fake implementations of the bridge trait seams.
//!
//! These fakes script the external world (on-chain state, the attestation
//! service, and time) so the orchestrator and poller can be tested against
//! failure modes (reverts, timeouts, flaky APIs) without touching a network.
//! They record every call they receive, which lets tests assert not just on
//! outcomes but on which on-chain actions were (or were not) issued.

use alloy_primitives::{keccak256, Address, Bytes, FixedBytes, TxHash, U256};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{BridgeError, Result};
use crate::protocol::{AttestationRecord, AttestationStatus};
use crate::traits::{AttestationProvider, BurnReceipt, ChainClient, Clock};

// ============================================================================
// Fake chain client
// ============================================================================

/// A recorded `approve` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveCall {
    pub token: Address,
    pub spender: Address,
    pub amount: U256,
}

/// A recorded `depositForBurn` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnCall {
    pub token_messenger: Address,
    pub amount: U256,
    pub destination_domain: u32,
    pub mint_recipient: FixedBytes<32>,
    pub burn_token: Address,
}

/// A recorded `receiveMessage` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveCall {
    pub message_transmitter: Address,
    pub message: Bytes,
    pub attestation: Bytes,
}

/// Fake on-chain client with scripted balances and recorded writes.
#[derive(Debug, Clone)]
pub struct FakeChainClient {
    balances: Arc<Mutex<HashMap<Address, U256>>>,
    burn_message: Arc<Mutex<Bytes>>,
    approve_calls: Arc<Mutex<Vec<ApproveCall>>>,
    burn_calls: Arc<Mutex<Vec<BurnCall>>>,
    receive_calls: Arc<Mutex<Vec<ReceiveCall>>>,
    approve_failure: Arc<Mutex<Option<String>>>,
    burn_failure: Arc<Mutex<Option<String>>>,
    receive_failure: Arc<Mutex<Option<String>>>,
}

impl Default for FakeChainClient {
    fn default() -> Self {
        Self {
            balances: Arc::default(),
            burn_message: Arc::new(Mutex::new(Bytes::from_static(b"fake cctp message"))),
            approve_calls: Arc::default(),
            burn_calls: Arc::default(),
            receive_calls: Arc::default(),
            approve_failure: Arc::default(),
            burn_failure: Arc::default(),
            receive_failure: Arc::default(),
        }
    }
}

impl FakeChainClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the USDC balance returned for `owner`.
    pub fn set_balance(&self, owner: Address, amount: U256) {
        self.balances.lock().unwrap().insert(owner, amount);
    }

    /// Overrides the message bytes emitted by the next burns.
    pub fn set_burn_message(&self, message: Bytes) {
        *self.burn_message.lock().unwrap() = message;
    }

    /// Returns the scripted burn message.
    pub fn burn_message(&self) -> Bytes {
        self.burn_message.lock().unwrap().clone()
    }

    /// Returns the hash the scripted burn message will carry.
    pub fn message_hash(&self) -> FixedBytes<32> {
        keccak256(self.burn_message())
    }

    /// Makes the next `approve` calls fail with the given reason.
    pub fn fail_approve(&self, reason: &str) {
        *self.approve_failure.lock().unwrap() = Some(reason.to_string());
    }

    /// Makes the next `depositForBurn` calls fail with the given reason.
    pub fn fail_burn(&self, reason: &str) {
        *self.burn_failure.lock().unwrap() = Some(reason.to_string());
    }

    /// Makes the next `receiveMessage` calls fail with the given reason.
    pub fn fail_receive(&self, reason: &str) {
        *self.receive_failure.lock().unwrap() = Some(reason.to_string());
    }

    pub fn approve_calls(&self) -> Vec<ApproveCall> {
        self.approve_calls.lock().unwrap().clone()
    }

    pub fn burn_calls(&self) -> Vec<BurnCall> {
        self.burn_calls.lock().unwrap().clone()
    }

    pub fn receive_calls(&self) -> Vec<ReceiveCall> {
        self.receive_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChainClient for FakeChainClient {
    async fn usdc_balance(&self, _token: Address, owner: Address) -> Result<U256> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(&owner)
            .copied()
            .unwrap_or(U256::ZERO))
    }

    async fn approve(&self, token: Address, spender: Address, amount: U256) -> Result<TxHash> {
        if let Some(reason) = self.approve_failure.lock().unwrap().clone() {
            return Err(BridgeError::TransactionFailed { reason });
        }
        self.approve_calls.lock().unwrap().push(ApproveCall {
            token,
            spender,
            amount,
        });
        Ok(TxHash::from([0xAA; 32]))
    }

    async fn deposit_for_burn(
        &self,
        token_messenger: Address,
        amount: U256,
        destination_domain: u32,
        mint_recipient: FixedBytes<32>,
        burn_token: Address,
    ) -> Result<BurnReceipt> {
        if let Some(reason) = self.burn_failure.lock().unwrap().clone() {
            return Err(BridgeError::TransactionFailed { reason });
        }
        self.burn_calls.lock().unwrap().push(BurnCall {
            token_messenger,
            amount,
            destination_domain,
            mint_recipient,
            burn_token,
        });
        let message = self.burn_message();
        let message_hash = keccak256(&message);
        Ok(BurnReceipt {
            tx_hash: TxHash::from([0xBB; 32]),
            message,
            message_hash,
        })
    }

    async fn receive_message(
        &self,
        message_transmitter: Address,
        message: Bytes,
        attestation: Bytes,
    ) -> Result<TxHash> {
        if let Some(reason) = self.receive_failure.lock().unwrap().clone() {
            return Err(BridgeError::TransactionFailed { reason });
        }
        self.receive_calls.lock().unwrap().push(ReceiveCall {
            message_transmitter,
            message,
            attestation,
        });
        Ok(TxHash::from([0xCC; 32]))
    }
}

// ============================================================================
// Fake attestation provider
// ============================================================================

/// Fake attestation status source with scripted per-hash response sequences.
///
/// Each `fetch_status` call consumes the next record in the sequence; once
/// exhausted, the last record repeats. This supports progressions like
/// pending → pending → complete as well as never-completing timeouts.
#[derive(Debug, Clone, Default)]
pub struct FakeAttestationProvider {
    responses: Arc<Mutex<HashMap<FixedBytes<32>, Vec<AttestationRecord>>>>,
    failures: Arc<Mutex<HashMap<FixedBytes<32>, String>>>,
    call_counts: Arc<Mutex<HashMap<FixedBytes<32>, usize>>>,
}

impl FakeAttestationProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts an explicit sequence of records for a message hash.
    pub fn add_response_sequence(
        &self,
        message_hash: FixedBytes<32>,
        records: Vec<AttestationRecord>,
    ) {
        self.responses.lock().unwrap().insert(message_hash, records);
    }

    /// Scripts an immediately complete attestation.
    pub fn add_complete(&self, message_hash: FixedBytes<32>, attestation: Bytes) {
        self.add_response_sequence(
            message_hash,
            vec![AttestationRecord {
                status: AttestationStatus::Complete,
                attestation: Some(attestation),
            }],
        );
    }

    /// Scripts `pending_count` pending records followed by a completion.
    pub fn add_pending_then_complete(
        &self,
        message_hash: FixedBytes<32>,
        pending_count: usize,
        attestation: Bytes,
    ) {
        let mut records = vec![AttestationRecord::pending(); pending_count];
        records.push(AttestationRecord {
            status: AttestationStatus::Complete,
            attestation: Some(attestation),
        });
        self.add_response_sequence(message_hash, records);
    }

    /// Scripts a pending record that repeats forever.
    pub fn add_always_pending(&self, message_hash: FixedBytes<32>) {
        self.add_response_sequence(message_hash, vec![AttestationRecord::pending()]);
    }

    /// Scripts a complete-with-null-attestation record, then a real one.
    pub fn add_complete_without_bytes_then_complete(
        &self,
        message_hash: FixedBytes<32>,
        attestation: Bytes,
    ) {
        self.add_response_sequence(
            message_hash,
            vec![
                AttestationRecord {
                    status: AttestationStatus::Complete,
                    attestation: None,
                },
                AttestationRecord {
                    status: AttestationStatus::Complete,
                    attestation: Some(attestation),
                },
            ],
        );
    }

    /// Makes every query for `message_hash` fail hard.
    pub fn add_fetch_failure(&self, message_hash: FixedBytes<32>, reason: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(message_hash, reason.to_string());
    }

    /// Number of status queries observed for `message_hash`.
    pub fn call_count(&self, message_hash: FixedBytes<32>) -> usize {
        self.call_counts
            .lock()
            .unwrap()
            .get(&message_hash)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl AttestationProvider for FakeAttestationProvider {
    async fn fetch_status(&self, message_hash: FixedBytes<32>) -> Result<AttestationRecord> {
        let index = {
            let mut counts = self.call_counts.lock().unwrap();
            let count = counts.entry(message_hash).or_insert(0);
            let index = *count;
            *count += 1;
            index
        };

        if let Some(reason) = self.failures.lock().unwrap().get(&message_hash) {
            return Err(BridgeError::AttestationFetch {
                reason: reason.clone(),
            });
        }

        let responses = self.responses.lock().unwrap();
        let sequence = responses
            .get(&message_hash)
            .ok_or_else(|| BridgeError::AttestationFetch {
                reason: "no scripted response".to_string(),
            })?;
        Ok(sequence
            .get(index)
            .or_else(|| sequence.last())
            .cloned()
            .unwrap_or_else(AttestationRecord::pending))
    }
}

// ============================================================================
// Span field recorder
// ============================================================================

/// Tracing layer capturing span field records for instrumentation asserts.
///
/// Collects every `Span::record` call observed while installed, so tests can
/// verify that error attributes actually land on a span before it closes.
/// Install it on a future with `tracing::instrument::WithSubscriber`:
///
/// ```rust,no_run
/// use cctp_bridge::testing::SpanFieldRecorder;
/// use tracing::instrument::WithSubscriber;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// # async fn example() {
/// let recorder = SpanFieldRecorder::new();
/// let subscriber = tracing_subscriber::registry().with(recorder.clone());
/// async { /* instrumented work */ }
///     .with_subscriber(subscriber)
///     .await;
/// assert_eq!(recorder.value_of("otel.status_code"), None);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpanFieldRecorder {
    fields: Arc<Mutex<Vec<(String, String)>>>,
}

impl SpanFieldRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded `(field, value)` pairs, in record order.
    pub fn recorded(&self) -> Vec<(String, String)> {
        self.fields.lock().unwrap().clone()
    }

    /// The most recently recorded value for `field`, if any.
    pub fn value_of(&self, field: &str) -> Option<String> {
        self.recorded()
            .iter()
            .rev()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.clone())
    }
}

struct SpanFieldVisitor<'a>(&'a Mutex<Vec<(String, String)>>);

impl tracing::field::Visit for SpanFieldVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0
            .lock()
            .unwrap()
            .push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .lock()
            .unwrap()
            .push((field.name().to_string(), format!("{value:?}")));
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::layer::Layer<S> for SpanFieldRecorder {
    fn on_record(
        &self,
        _id: &tracing::span::Id,
        values: &tracing::span::Record<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        values.record(&mut SpanFieldVisitor(&self.fields));
    }
}

// ============================================================================
// Fake clock
// ============================================================================

/// Fake clock that records requested sleeps instead of waiting.
#[derive(Debug, Clone, Default)]
pub struct FakeClock {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sleeps requested.
    pub fn sleep_count(&self) -> usize {
        self.sleeps.lock().unwrap().len()
    }

    /// The requested delays, in order.
    pub fn delays(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    /// Total time the caller asked to wait.
    pub fn total_sleep_time(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Clock for FakeClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fake_clock_records_sleeps() {
        let clock = FakeClock::new();
        clock.sleep(Duration::from_secs(5)).await;
        clock.sleep(Duration::from_secs(10)).await;

        assert_eq!(clock.sleep_count(), 2);
        assert_eq!(clock.total_sleep_time(), Duration::from_secs(15));
    }

    #[tokio::test]
    async fn fake_attestation_provider_walks_the_sequence() {
        let provider = FakeAttestationProvider::new();
        let message_hash = FixedBytes::from([7u8; 32]);
        provider.add_pending_then_complete(message_hash, 1, Bytes::from_static(b"sig"));

        let first = provider.fetch_status(message_hash).await.unwrap();
        assert_eq!(first.status, AttestationStatus::Pending);

        let second = provider.fetch_status(message_hash).await.unwrap();
        assert_eq!(second.status, AttestationStatus::Complete);

        // Exhausted sequences repeat their last record.
        let third = provider.fetch_status(message_hash).await.unwrap();
        assert_eq!(third.status, AttestationStatus::Complete);
        assert_eq!(provider.call_count(message_hash), 3);
    }

    #[tokio::test]
    async fn fake_attestation_provider_unscripted_hash_is_an_error() {
        let provider = FakeAttestationProvider::new();
        let result = provider.fetch_status(FixedBytes::from([8u8; 32])).await;
        assert!(matches!(
            result.unwrap_err(),
            BridgeError::AttestationFetch { .. }
        ));
    }

    #[tokio::test]
    async fn fake_chain_client_reports_zero_for_unknown_owner() {
        let client = FakeChainClient::new();
        let balance = client
            .usdc_balance(Address::ZERO, Address::from([9u8; 20]))
            .await
            .unwrap();
        assert_eq!(balance, U256::ZERO);
    }

    #[tokio::test]
    async fn fake_chain_client_burn_failure() {
        let client = FakeChainClient::new();
        client.fail_burn("simulated revert");

        let result = client
            .deposit_for_burn(
                Address::ZERO,
                U256::from(1u64),
                0,
                FixedBytes::ZERO,
                Address::ZERO,
            )
            .await;
        assert!(matches!(
            result.unwrap_err(),
            BridgeError::TransactionFailed { .. }
        ));
        assert!(client.burn_calls().is_empty());
    }
}
