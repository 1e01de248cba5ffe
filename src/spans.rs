//! Tracing span helpers for bridge operations
//!
//! Instrumentation is kept orthogonal to the pipeline logic: static span
//! names, structured attributes, and error recording that follows
//! OpenTelemetry semantic conventions. The orchestrator and poller create
//! spans through these helpers instead of interleaving logging with control
//! flow.

use alloy_primitives::{hex, Address, FixedBytes, U256};
use tracing::Span;

/// Span for one end-to-end transfer.
#[inline]
pub fn transfer(source: &str, destination: &str, recipient: &Address) -> Span {
    tracing::info_span!(
        "cctp_bridge.transfer",
        source_chain = source,
        destination_chain = destination,
        recipient = %recipient,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Span for the attestation polling loop.
#[inline]
pub fn poll_attestation(message_hash: &FixedBytes<32>, max_attempts: u32) -> Span {
    tracing::info_span!(
        "cctp_bridge.poll_attestation",
        message_hash = %hex::encode(message_hash),
        max_attempts = max_attempts,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Span for the deposit-for-burn submission.
#[inline]
pub fn deposit_for_burn(destination_domain: u32, amount: &U256) -> Span {
    tracing::info_span!(
        "cctp_bridge.deposit_for_burn",
        destination_domain = destination_domain,
        amount = %amount,
    )
}

/// Span for the receive-message submission on the destination chain.
#[inline]
pub fn receive_message(message_hash: &FixedBytes<32>, attestation_length: usize) -> Span {
    tracing::info_span!(
        "cctp_bridge.receive_message",
        message_hash = %hex::encode(message_hash),
        attestation_length_bytes = attestation_length,
    )
}

/// Records error attributes on the current span.
pub fn record_error<E: std::error::Error>(error: &E) {
    let current_span = Span::current();
    current_span.record(
        "error.type",
        error.to_string().split(':').next().unwrap_or("Unknown"),
    );
    current_span.record("error.message", error.to_string());
    current_span.record("otel.status_code", "ERROR");
}
