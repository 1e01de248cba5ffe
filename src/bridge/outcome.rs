use alloy_primitives::{FixedBytes, TxHash};

use crate::error::BridgeError;
use crate::protocol::AttestationBytes;

/// Result of one transfer attempt.
///
/// A transfer either runs all five stages to completion or fails at exactly
/// one of them; no partial-success variant is modeled. Note that a failure
/// after the burn stage still leaves funds burned on the source chain; the
/// error names the stage, but the outcome cannot express "burned but not
/// minted" as a distinct state.
#[derive(Debug)]
pub enum TransferOutcome {
    Success {
        /// keccak256 of the cross-chain message; keys the attestation lookup.
        message_hash: FixedBytes<32>,
        burn_tx_hash: TxHash,
        mint_tx_hash: TxHash,
        attestation: AttestationBytes,
    },
    Failure {
        error: BridgeError,
    },
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure, if the transfer did not complete.
    pub fn error(&self) -> Option<&BridgeError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

impl From<BridgeError> for TransferOutcome {
    fn from(error: BridgeError) -> Self {
        Self::Failure { error }
    }
}

/// Read-only status of a previously started transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BridgeStatus {
    /// Whether the attestation service has signed off on the message.
    pub attestation_ready: bool,
    /// Whether the mint has already been executed on the destination chain.
    pub minted: bool,
}
