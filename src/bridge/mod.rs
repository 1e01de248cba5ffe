//! Bridge orchestration
//!
//! The five-stage transfer pipeline: balance check, approval, burn,
//! attestation wait, mint. Strictly sequential, each stage gated on the
//! confirmed success of the one before it.

mod orchestrator;
mod outcome;
mod params;

pub use orchestrator::{bridge_usdc, Bridge};
pub use outcome::{BridgeStatus, TransferOutcome};
pub use params::TransferRequest;
