//! CCTP protocol-level types
//!
//! Wire formats and units used by Circle's Cross-Chain Transfer Protocol:
//! attestation records from the Iris API, domain identifiers, and USDC
//! amount scaling.

mod amount;
mod attestation;
mod domain_id;

pub use amount::{format_usdc, parse_usdc, USDC_DECIMALS};
pub use attestation::{AttestationBytes, AttestationRecord, AttestationStatus};
pub use domain_id::DomainId;
