//! # cctp-bridge
//!
//! USDC bridging between EVM test networks over Circle's Cross-Chain
//! Transfer Protocol (CCTP): burn on a source chain, poll Circle's
//! attestation service, mint on the destination chain.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use cctp_bridge::{bridge_usdc, ChainRegistry, TransferOutcome, TransferRequest};
//!
//! # async fn example() {
//! let registry = ChainRegistry::testnet();
//! let request = TransferRequest::builder()
//!     .amount("10.5")
//!     .source_chain("base-sepolia")
//!     .destination_chain("eth-sepolia")
//!     .recipient("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".parse().unwrap())
//!     .signing_key(std::env::var("PRIVATE_KEY").unwrap())
//!     .build();
//!
//! match bridge_usdc(&request, &registry).await {
//!     TransferOutcome::Success { burn_tx_hash, mint_tx_hash, .. } => {
//!         println!("burned in {burn_tx_hash}, minted in {mint_tx_hash}");
//!     }
//!     TransferOutcome::Failure { error } => eprintln!("transfer failed: {error}"),
//! }
//! # }
//! ```
//!
//! ## Architecture
//!
//! A transfer is a strictly sequential five-stage pipeline driven by
//! [`Bridge`]: balance check, allowance grant, deposit-for-burn,
//! attestation wait, receive-message. The cross-chain message and its hash
//! are parsed from the burn transaction's `MessageSent` event log: the
//! hash keys the attestation lookup and the raw bytes feed the mint.
//!
//! External collaborators sit behind traits ([`ChainClient`],
//! [`AttestationProvider`], [`Clock`]) with production implementations in
//! [`providers`](crate::AlloyChainClient) and scripted fakes in
//! [`testing`], so the orchestration and the [`AttestationPoller`]'s
//! backoff policy are testable without a network.

mod attestation;
mod bridge;
mod chain;
mod contracts;
mod error;
mod protocol;
mod providers;
mod traits;

// Public modules for custom instrumentation and for writing tests against
// the trait seams.
pub mod spans;
pub mod testing;

pub use attestation::{AttestationPoller, PollingConfig};
pub use bridge::{bridge_usdc, Bridge, BridgeStatus, TransferOutcome, TransferRequest};
pub use chain::{ChainConfig, ChainRegistry};
pub use contracts::{erc20::Usdc, message_transmitter::MessageTransmitter, token_messenger::TokenMessenger};
pub use error::{BridgeError, Result};
pub use protocol::{
    format_usdc, parse_usdc, AttestationBytes, AttestationRecord, AttestationStatus, DomainId,
    USDC_DECIMALS,
};
pub use providers::{
    AlloyChainClient, IrisAttestationProvider, TokioClock, IRIS_API, IRIS_API_SANDBOX,
};
pub use traits::{AttestationProvider, BurnReceipt, ChainClient, Clock};
