//! Trait seams for the bridge pipeline.
//!
//! Every external collaborator (on-chain contract calls, the attestation
//! service, and time itself) sits behind one of these traits. Production
//! implementations live in [`crate::providers`]; fakes for tests live in
//! [`crate::testing`]. This keeps the orchestration and polling logic free
//! of network I/O so it can be exercised in isolation, including failure
//! modes that are impractical to reproduce against live networks.

use alloy_primitives::{Address, Bytes, FixedBytes, TxHash, U256};
use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;
use crate::protocol::AttestationRecord;

/// Result of a confirmed deposit-for-burn transaction.
///
/// The message is the `MessageSent(bytes)` event payload emitted by the
/// burn; its keccak256 hash is the identifier the attestation service keys
/// on. Both come from the transaction logs, never from the transaction hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnReceipt {
    /// Hash of the burn transaction on the source chain.
    pub tx_hash: TxHash,
    /// Raw cross-chain message bytes from the `MessageSent` event.
    pub message: Bytes,
    /// keccak256 of the message bytes.
    pub message_hash: FixedBytes<32>,
}

/// On-chain operations the orchestrator needs on one chain.
///
/// Each method wraps exactly one external interaction and converts any fault
/// into the typed error taxonomy before it crosses back into the
/// orchestrator. Write operations wait for one confirmation, except
/// [`receive_message`](ChainClient::receive_message) which only submits.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Reads the USDC balance of `owner`.
    async fn usdc_balance(&self, token: Address, owner: Address) -> Result<U256>;

    /// Approves `spender` to move `amount` token units and waits for the
    /// approval to confirm.
    async fn approve(&self, token: Address, spender: Address, amount: U256) -> Result<TxHash>;

    /// Submits `depositForBurn`, waits for confirmation, and extracts the
    /// emitted cross-chain message from the transaction logs.
    async fn deposit_for_burn(
        &self,
        token_messenger: Address,
        amount: U256,
        destination_domain: u32,
        mint_recipient: FixedBytes<32>,
        burn_token: Address,
    ) -> Result<BurnReceipt>;

    /// Submits `receiveMessage` with the message and its attestation.
    ///
    /// Returns as soon as the transaction is accepted by the node; overall
    /// transfer success does not wait for the mint to confirm.
    async fn receive_message(
        &self,
        message_transmitter: Address,
        message: Bytes,
        attestation: Bytes,
    ) -> Result<TxHash>;
}

/// A single attestation status query.
///
/// One bounded-timeout request per call. A 404 means the message has not
/// been indexed yet and yields a pending record; any other failure is a hard
/// error and is never retried here; retry scheduling belongs solely to the
/// polling loop.
#[async_trait]
pub trait AttestationProvider: Send + Sync {
    async fn fetch_status(&self, message_hash: FixedBytes<32>) -> Result<AttestationRecord>;
}

/// Time source for the polling loop's backoff waits.
///
/// One timer per wait, so tests can observe the exact delay schedule and
/// fast-forward through it without actually sleeping.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
