use alloy_primitives::Address;
use bon::Builder;
use std::fmt;

/// Caller-supplied parameters for one USDC transfer.
///
/// The amount is a human-decimal string ("10.5") and is scaled to USDC's 6
/// fractional digits before any on-chain call. Chain fields are registry
/// slugs, resolved case-insensitively.
#[derive(Builder, Clone)]
#[builder(on(String, into))]
pub struct TransferRequest {
    amount: String,
    source_chain: String,
    destination_chain: String,
    recipient: Address,
    signing_key: String,
}

impl TransferRequest {
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn source_chain(&self) -> &str {
        &self.source_chain
    }

    pub fn destination_chain(&self) -> &str {
        &self.destination_chain
    }

    pub fn recipient(&self) -> &Address {
        &self.recipient
    }

    pub fn signing_key(&self) -> &str {
        &self.signing_key
    }
}

// Manual Debug so the signing key never lands in logs.
impl fmt::Debug for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferRequest")
            .field("amount", &self.amount)
            .field("source_chain", &self.source_chain)
            .field("destination_chain", &self.destination_chain)
            .field("recipient", &self.recipient)
            .field("signing_key", &"<redacted>")
            .finish()
    }
}
