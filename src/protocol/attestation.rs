use alloy_primitives::Bytes;
use serde::Deserialize;

/// The bytes of a signed attestation, ready to submit to the destination
/// chain's `MessageTransmitter`.
pub type AttestationBytes = Bytes;

/// One attestation status observation for a message hash.
///
/// This is what a single query against the attestation service yields. The
/// `attestation` field is a hex-encoded string in the JSON body and is
/// deserialized straight into bytes. The record is ephemeral: it lives for
/// the duration of one poll attempt and is never persisted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttestationRecord {
    pub status: AttestationStatus,
    #[serde(default)]
    pub attestation: Option<Bytes>,
}

impl AttestationRecord {
    /// A record for a message the attestation service has not indexed yet.
    ///
    /// A 404 from the service maps to this; it is indistinguishable from an
    /// explicit `pending` JSON body.
    pub fn pending() -> Self {
        Self {
            status: AttestationStatus::Pending,
            attestation: None,
        }
    }

    /// Returns the attestation bytes if the record is terminal.
    ///
    /// A `complete` status with a missing attestation field is not terminal;
    /// the service is still expected to fill it in on a later query.
    pub fn into_complete(self) -> Option<AttestationBytes> {
        match self.status {
            AttestationStatus::Complete => self.attestation,
            AttestationStatus::Pending => None,
        }
    }
}

/// Status of an attestation as reported by the attestation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttestationStatus {
    Pending,
    Complete,
}
