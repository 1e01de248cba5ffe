use alloy_network::EthereumWallet;
use alloy_primitives::{Address, FixedBytes};
use alloy_provider::ProviderBuilder;
use alloy_signer_local::PrivateKeySigner;
use bon::Builder;
use tracing::{error, info};

use super::outcome::{BridgeStatus, TransferOutcome};
use super::params::TransferRequest;
use crate::attestation::{AttestationPoller, PollingConfig};
use crate::chain::{ChainConfig, ChainRegistry};
use crate::error::{BridgeError, Result};
use crate::protocol::parse_usdc;
use crate::providers::{AlloyChainClient, IrisAttestationProvider, TokioClock};
use crate::spans;
use crate::traits::{AttestationProvider, ChainClient, Clock};

/// Orchestrates one outbound USDC transfer.
///
/// Owns the resolved chain configs, one chain client per side, and the
/// attestation poller. Stages run strictly in order and each is attempted
/// exactly once per call; only the attestation wait retries, under the
/// poller's own bounded policy.
///
/// # Example
///
/// ```rust,no_run
/// use cctp_bridge::{
///     AlloyChainClient, AttestationPoller, Bridge, ChainRegistry,
///     IrisAttestationProvider, PollingConfig, TokioClock,
/// };
/// use alloy_primitives::Address;
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), cctp_bridge::BridgeError> {
/// let registry = ChainRegistry::testnet();
/// let source = registry.resolve("base-sepolia")?.clone();
/// let destination = registry.resolve("eth-sepolia")?.clone();
///
/// let source_provider = ProviderBuilder::new().connect_http(source.rpc_url.clone());
/// let destination_provider = ProviderBuilder::new().connect_http(destination.rpc_url.clone());
///
/// let bridge = Bridge::builder()
///     .source(source)
///     .destination(destination)
///     .source_client(AlloyChainClient::new(source_provider))
///     .destination_client(AlloyChainClient::new(destination_provider))
///     .poller(AttestationPoller::new(
///         IrisAttestationProvider::sandbox()?,
///         TokioClock::new(),
///         PollingConfig::default(),
///     ))
///     .sender("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".parse().unwrap())
///     .recipient("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".parse().unwrap())
///     .build();
///
/// let outcome = bridge.transfer("10.5").await;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Debug)]
pub struct Bridge<S, D, A, C> {
    source: ChainConfig,
    destination: ChainConfig,
    source_client: S,
    destination_client: D,
    poller: AttestationPoller<A, C>,
    /// Address whose USDC is burned; must match the signer behind the
    /// source client.
    sender: Address,
    /// Address receiving minted USDC on the destination chain.
    recipient: Address,
}

impl<S, D, A, C> Bridge<S, D, A, C>
where
    S: ChainClient,
    D: ChainClient,
    A: AttestationProvider,
    C: Clock,
{
    /// Returns the source chain config.
    pub fn source(&self) -> &ChainConfig {
        &self.source
    }

    /// Returns the destination chain config.
    pub fn destination(&self) -> &ChainConfig {
        &self.destination
    }

    /// Returns the recipient address.
    pub fn recipient(&self) -> &Address {
        &self.recipient
    }

    /// Runs the transfer pipeline for a human-decimal USDC amount.
    ///
    /// Never returns an error to the caller: every failure path is funneled
    /// into [`TransferOutcome::Failure`]. A failure after the burn stage
    /// leaves the burn on-chain; nothing is rolled back.
    pub async fn transfer(&self, amount: &str) -> TransferOutcome {
        match self.execute(amount).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, event = "transfer_failed");
                TransferOutcome::Failure { error: err }
            }
        }
    }

    async fn execute(&self, amount: &str) -> Result<TransferOutcome> {
        let span = spans::transfer(self.source.name, self.destination.name, &self.recipient);
        let _guard = span.enter();

        // Errors must be recorded while the span guard is still live;
        // Span::current() after the guard drops is no longer this span.
        match self.run_stages(amount).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                spans::record_error(&err);
                Err(err)
            }
        }
    }

    async fn run_stages(&self, amount: &str) -> Result<TransferOutcome> {
        let amount_units = parse_usdc(amount)?;
        info!(
            amount = amount,
            amount_units = %amount_units,
            source_chain = self.source.name,
            destination_chain = self.destination.name,
            event = "transfer_started"
        );

        // No state-mutating call is issued before the balance check passes.
        let balance = self
            .source_client
            .usdc_balance(self.source.usdc, self.sender)
            .await?;
        if balance < amount_units {
            return Err(BridgeError::InsufficientBalance {
                have: balance,
                need: amount_units,
            });
        }
        info!(balance = %balance, event = "balance_check_passed");

        let approval_tx = self
            .source_client
            .approve(self.source.usdc, self.source.token_messenger, amount_units)
            .await?;
        info!(tx_hash = %approval_tx, event = "approval_confirmed");

        let burn = self
            .source_client
            .deposit_for_burn(
                self.source.token_messenger,
                amount_units,
                self.destination.domain.as_u32(),
                self.recipient.into_word(),
                self.source.usdc,
            )
            .await?;

        // The burn is on-chain from here on; a poll timeout below is an
        // accepted irrecoverable partial state.
        let attestation = self.poller.poll(burn.message_hash).await?;

        let mint_tx = self
            .destination_client
            .receive_message(
                self.destination.message_transmitter,
                burn.message.clone(),
                attestation.clone(),
            )
            .await?;

        info!(
            burn_tx_hash = %burn.tx_hash,
            mint_tx_hash = %mint_tx,
            event = "transfer_complete"
        );

        Ok(TransferOutcome::Success {
            message_hash: burn.message_hash,
            burn_tx_hash: burn.tx_hash,
            mint_tx_hash: mint_tx,
            attestation,
        })
    }

    /// Read-only status lookup for a previously started transfer.
    ///
    /// Scaffolding only: reports nothing ready without querying anything.
    /// TODO: check the destination MessageTransmitter's usedNonces and the
    /// attestation service so this reflects actual transfer state.
    pub fn status(&self, _message_hash: FixedBytes<32>) -> BridgeStatus {
        BridgeStatus::default()
    }
}

/// Runs one transfer end-to-end against live networks.
///
/// Resolves both chain slugs, builds wallet-backed HTTP providers from the
/// request's signing key, and drives [`Bridge::transfer`]. Like `transfer`,
/// this never returns an error: lookup and key faults are funneled into
/// [`TransferOutcome::Failure`] too.
pub async fn bridge_usdc(request: &TransferRequest, registry: &ChainRegistry) -> TransferOutcome {
    match connect_and_transfer(request, registry).await {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(error = %err, event = "transfer_setup_failed");
            TransferOutcome::Failure { error: err }
        }
    }
}

async fn connect_and_transfer(
    request: &TransferRequest,
    registry: &ChainRegistry,
) -> Result<TransferOutcome> {
    let source = registry.resolve(request.source_chain())?.clone();
    let destination = registry.resolve(request.destination_chain())?.clone();

    let signer: PrivateKeySigner = request
        .signing_key()
        .parse()
        .map_err(|e| BridgeError::Signer(format!("{e}")))?;
    let sender = signer.address();
    let wallet = EthereumWallet::from(signer);

    let source_provider = ProviderBuilder::new()
        .wallet(wallet.clone())
        .connect_http(source.rpc_url.clone());
    let destination_provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(destination.rpc_url.clone());

    let poller = AttestationPoller::new(
        IrisAttestationProvider::sandbox()?,
        TokioClock::new(),
        PollingConfig::default(),
    );

    let bridge = Bridge::builder()
        .source(source)
        .destination(destination)
        .source_client(AlloyChainClient::new(source_provider))
        .destination_client(AlloyChainClient::new(destination_provider))
        .poller(poller)
        .sender(sender)
        .recipient(*request.recipient())
        .build();

    Ok(bridge.transfer(request.amount()).await)
}
