//! Alloy-backed chain client.

use alloy_network::Ethereum;
use alloy_primitives::{hex, keccak256, Address, Bytes, FixedBytes, TxHash, U256};
use alloy_provider::Provider;
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use tracing::{debug, info};

use crate::contracts::erc20::Usdc;
use crate::contracts::message_transmitter::MessageTransmitter;
use crate::contracts::token_messenger::TokenMessenger;
use crate::error::{BridgeError, Result};
use crate::spans;
use crate::traits::{BurnReceipt, ChainClient};

/// Production [`ChainClient`] over an Alloy provider.
///
/// The provider is expected to carry a wallet filler so write calls are
/// signed and submitted directly. One client is built per chain; source and
/// destination never share a provider.
///
/// Every RPC and contract fault is converted into the typed error taxonomy
/// here, before it reaches the orchestrator: submission and confirmation
/// faults become [`BridgeError::TransactionFailed`], and a malformed
/// `MessageSent` payload surfaces as [`BridgeError::Abi`].
#[derive(Debug, Clone)]
pub struct AlloyChainClient<P: Provider<Ethereum> + Clone> {
    provider: P,
}

impl<P: Provider<Ethereum> + Clone> AlloyChainClient<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the underlying provider.
    pub fn inner(&self) -> &P {
        &self.provider
    }
}

fn tx_failed(reason: impl Into<String>) -> BridgeError {
    BridgeError::TransactionFailed {
        reason: reason.into(),
    }
}

#[async_trait]
impl<P: Provider<Ethereum> + Clone> ChainClient for AlloyChainClient<P> {
    async fn usdc_balance(&self, token: Address, owner: Address) -> Result<U256> {
        let balance = Usdc::new(token, self.provider.clone())
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| tx_failed(format!("balanceOf call failed: {e}")))?;

        debug!(
            owner = %owner,
            balance = %balance,
            event = "usdc_balance_read"
        );
        Ok(balance)
    }

    async fn approve(&self, token: Address, spender: Address, amount: U256) -> Result<TxHash> {
        let pending = Usdc::new(token, self.provider.clone())
            .approve(spender, amount)
            .send()
            .await
            .map_err(|e| tx_failed(format!("approve submission failed: {e}")))?;

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| tx_failed(format!("approve confirmation failed: {e}")))?;
        if !receipt.status() {
            return Err(tx_failed("approve transaction reverted"));
        }

        info!(
            tx_hash = %receipt.transaction_hash,
            spender = %spender,
            amount = %amount,
            event = "usdc_approved"
        );
        Ok(receipt.transaction_hash)
    }

    async fn deposit_for_burn(
        &self,
        token_messenger: Address,
        amount: U256,
        destination_domain: u32,
        mint_recipient: FixedBytes<32>,
        burn_token: Address,
    ) -> Result<BurnReceipt> {
        let span = spans::deposit_for_burn(destination_domain, &amount);
        let _guard = span.enter();

        let pending = TokenMessenger::new(token_messenger, self.provider.clone())
            .depositForBurn(amount, destination_domain, mint_recipient, burn_token)
            .send()
            .await
            .map_err(|e| tx_failed(format!("depositForBurn submission failed: {e}")))?;

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| tx_failed(format!("depositForBurn confirmation failed: {e}")))?;
        if !receipt.status() {
            return Err(tx_failed("depositForBurn transaction reverted"));
        }

        // The cross-chain message lives in the MessageSent event emitted by
        // the MessageTransmitter during the burn; its hash keys the
        // attestation lookup. The transaction hash is not a substitute.
        let message_sent_topic = MessageTransmitter::MessageSent::SIGNATURE_HASH;
        let message_sent_log = receipt
            .inner
            .logs()
            .iter()
            .find(|log| {
                log.topics()
                    .first()
                    .is_some_and(|topic| *topic == message_sent_topic)
            })
            .ok_or_else(|| tx_failed("MessageSent event not found in transaction logs"))?;

        let decoded = MessageTransmitter::MessageSent::abi_decode_data(
            &message_sent_log.data().data,
        )?;
        let message: Bytes = decoded.0;
        let message_hash = keccak256(&message);

        info!(
            tx_hash = %receipt.transaction_hash,
            message_hash = %hex::encode(message_hash),
            message_length_bytes = message.len(),
            event = "deposit_for_burn_confirmed"
        );

        Ok(BurnReceipt {
            tx_hash: receipt.transaction_hash,
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
        let span = spans::receive_message(&keccak256(&message), attestation.len());
        let _guard = span.enter();

        let pending = MessageTransmitter::new(message_transmitter, self.provider.clone())
            .receiveMessage(message, attestation)
            .send()
            .await
            .map_err(|e| tx_failed(format!("receiveMessage submission failed: {e}")))?;

        let tx_hash = *pending.tx_hash();
        info!(tx_hash = %tx_hash, event = "receive_message_submitted");
        Ok(tx_hash)
    }
}
