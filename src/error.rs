use alloy_primitives::U256;
use thiserror::Error;

/// Error taxonomy for the bridge pipeline.
///
/// Every fault from an external collaborator (RPC node, contract call,
/// attestation API) is converted into one of these variants at the call
/// site, so the orchestrator only ever deals with typed errors.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Unknown chain: {chain}. Supported: {supported}")]
    UnknownChain { chain: String, supported: String },

    #[error("Insufficient USDC balance: have {have} units, need {need} units")]
    InsufficientBalance { have: U256, need: U256 },

    #[error("Invalid USDC amount {amount:?}: {reason}")]
    InvalidAmount { amount: String, reason: String },

    #[error("Transaction failed: {reason}")]
    TransactionFailed { reason: String },

    #[error("Attestation request failed: {reason}")]
    AttestationFetch { reason: String },

    #[error("Attestation polling timed out after {attempts} attempts")]
    PollTimeout { attempts: u32 },

    #[error("Invalid signing key: {0}")]
    Signer(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("ABI encoding/decoding error: {0}")]
    Abi(#[from] alloy_sol_types::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
