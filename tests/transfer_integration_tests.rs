//! End-to-end transfer pipeline tests against scripted fakes.
//!
//! These exercise the full orchestration (balance check through mint) and
//! assert on which on-chain actions were issued, not just on the outcome.

use std::time::Duration;

use alloy_primitives::{Address, Bytes, TxHash, U256};

use cctp_bridge::testing::{FakeAttestationProvider, FakeChainClient, FakeClock};
use cctp_bridge::{
    AttestationPoller, Bridge, BridgeError, ChainRegistry, PollingConfig, TransferOutcome,
};

fn sender() -> Address {
    Address::from([0x11; 20])
}

fn recipient() -> Address {
    "0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d"
        .parse()
        .unwrap()
}

struct Harness {
    source_client: FakeChainClient,
    destination_client: FakeChainClient,
    attestations: FakeAttestationProvider,
    clock: FakeClock,
    bridge: Bridge<FakeChainClient, FakeChainClient, FakeAttestationProvider, FakeClock>,
}

/// Builds a base-sepolia → eth-sepolia bridge over fakes.
fn harness(config: PollingConfig) -> Harness {
    let registry = ChainRegistry::testnet();
    let source_client = FakeChainClient::new();
    let destination_client = FakeChainClient::new();
    let attestations = FakeAttestationProvider::new();
    let clock = FakeClock::new();

    let bridge = Bridge::builder()
        .source(registry.resolve("base-sepolia").unwrap().clone())
        .destination(registry.resolve("eth-sepolia").unwrap().clone())
        .source_client(source_client.clone())
        .destination_client(destination_client.clone())
        .poller(AttestationPoller::new(
            attestations.clone(),
            clock.clone(),
            config,
        ))
        .sender(sender())
        .recipient(recipient())
        .build();

    Harness {
        source_client,
        destination_client,
        attestations,
        clock,
        bridge,
    }
}

#[tokio::test]
async fn successful_transfer_runs_all_five_stages() {
    let h = harness(PollingConfig::default());
    h.source_client.set_balance(sender(), U256::from(20_000_000u64));
    h.attestations
        .add_complete(h.source_client.message_hash(), Bytes::from_static(b"signed"));

    let outcome = h.bridge.transfer("10.5").await;

    let TransferOutcome::Success {
        message_hash,
        burn_tx_hash,
        mint_tx_hash,
        attestation,
    } = outcome
    else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(message_hash, h.source_client.message_hash());
    assert_eq!(burn_tx_hash, TxHash::from([0xBB; 32]));
    assert_eq!(mint_tx_hash, TxHash::from([0xCC; 32]));
    assert_eq!(attestation, Bytes::from_static(b"signed"));

    let source = h.bridge.source().clone();
    let approvals = h.source_client.approve_calls();
    assert_eq!(approvals.len(), 1);
    assert_eq!(approvals[0].token, source.usdc);
    assert_eq!(approvals[0].spender, source.token_messenger);
    assert_eq!(approvals[0].amount, U256::from(10_500_000u64));

    let burns = h.source_client.burn_calls();
    assert_eq!(burns.len(), 1);
    assert_eq!(burns[0].token_messenger, source.token_messenger);
    assert_eq!(burns[0].amount, U256::from(10_500_000u64));
    // eth-sepolia is CCTP domain 0, not its chain id.
    assert_eq!(burns[0].destination_domain, 0);
    assert_eq!(burns[0].mint_recipient, recipient().into_word());
    assert_eq!(burns[0].burn_token, source.usdc);

    let receives = h.destination_client.receive_calls();
    assert_eq!(receives.len(), 1);
    assert_eq!(
        receives[0].message_transmitter,
        h.bridge.destination().message_transmitter
    );
    assert_eq!(receives[0].message, h.source_client.burn_message());
    assert_eq!(receives[0].attestation, Bytes::from_static(b"signed"));

    // Nothing was issued on the wrong side.
    assert!(h.destination_client.approve_calls().is_empty());
    assert!(h.destination_client.burn_calls().is_empty());
    assert!(h.source_client.receive_calls().is_empty());
}

#[tokio::test]
async fn insufficient_balance_halts_before_any_write() {
    let h = harness(PollingConfig::default());
    h.source_client.set_balance(sender(), U256::from(5_000_000u64));

    let outcome = h.bridge.transfer("10").await;

    match outcome.error() {
        Some(BridgeError::InsufficientBalance { have, need }) => {
            assert_eq!(*have, U256::from(5_000_000u64));
            assert_eq!(*need, U256::from(10_000_000u64));
        }
        other => panic!("expected InsufficientBalance, got {other:?}"),
    }
    assert!(h.source_client.approve_calls().is_empty());
    assert!(h.source_client.burn_calls().is_empty());
    assert!(h.destination_client.receive_calls().is_empty());
}

#[tokio::test]
async fn malformed_amount_halts_before_any_read_or_write() {
    let h = harness(PollingConfig::default());

    let outcome = h.bridge.transfer("10.1234567").await;

    assert!(matches!(
        outcome.error(),
        Some(BridgeError::InvalidAmount { .. })
    ));
    assert!(h.source_client.approve_calls().is_empty());
    assert!(h.source_client.burn_calls().is_empty());
}

#[tokio::test]
async fn approve_failure_stops_the_pipeline_before_the_burn() {
    let h = harness(PollingConfig::default());
    h.source_client.set_balance(sender(), U256::from(20_000_000u64));
    h.source_client.fail_approve("nonce too low");

    let outcome = h.bridge.transfer("10").await;

    assert!(matches!(
        outcome.error(),
        Some(BridgeError::TransactionFailed { reason }) if reason == "nonce too low"
    ));
    assert!(h.source_client.burn_calls().is_empty());
    assert!(h.destination_client.receive_calls().is_empty());
}

#[tokio::test]
async fn poll_timeout_after_burn_leaves_the_mint_unissued() {
    let config = PollingConfig::default().with_max_attempts(4);
    let h = harness(config);
    h.source_client.set_balance(sender(), U256::from(20_000_000u64));
    h.attestations
        .add_always_pending(h.source_client.message_hash());

    let outcome = h.bridge.transfer("10").await;

    assert!(matches!(
        outcome.error(),
        Some(BridgeError::PollTimeout { attempts: 4 })
    ));
    // The burn happened; the funds are gone from the source chain and the
    // mint was never attempted.
    assert_eq!(h.source_client.burn_calls().len(), 1);
    assert!(h.destination_client.receive_calls().is_empty());
    assert_eq!(h.attestations.call_count(h.source_client.message_hash()), 4);
}

#[tokio::test]
async fn hard_attestation_fault_aborts_the_poll_immediately() {
    let h = harness(PollingConfig::default());
    h.source_client.set_balance(sender(), U256::from(20_000_000u64));
    h.attestations
        .add_fetch_failure(h.source_client.message_hash(), "503 from the service");

    let outcome = h.bridge.transfer("10").await;

    assert!(matches!(
        outcome.error(),
        Some(BridgeError::AttestationFetch { .. })
    ));
    assert_eq!(h.attestations.call_count(h.source_client.message_hash()), 1);
    assert!(h.destination_client.receive_calls().is_empty());
}

#[tokio::test]
async fn pending_attestation_backs_off_between_queries() {
    let h = harness(PollingConfig::default());
    h.source_client.set_balance(sender(), U256::from(20_000_000u64));
    h.attestations.add_pending_then_complete(
        h.source_client.message_hash(),
        2,
        Bytes::from_static(b"signed"),
    );

    let outcome = h.bridge.transfer("10").await;

    assert!(outcome.is_success());
    assert_eq!(
        h.clock.delays(),
        vec![Duration::from_millis(5000), Duration::from_millis(7500)]
    );
    assert_eq!(h.destination_client.receive_calls().len(), 1);
}

#[tokio::test]
async fn mint_submission_failure_is_reported_after_the_burn() {
    let h = harness(PollingConfig::default());
    h.source_client.set_balance(sender(), U256::from(20_000_000u64));
    h.attestations
        .add_complete(h.source_client.message_hash(), Bytes::from_static(b"signed"));
    h.destination_client.fail_receive("gas estimation failed");

    let outcome = h.bridge.transfer("10").await;

    assert!(matches!(
        outcome.error(),
        Some(BridgeError::TransactionFailed { reason }) if reason == "gas estimation failed"
    ));
    assert_eq!(h.source_client.burn_calls().len(), 1);
}
