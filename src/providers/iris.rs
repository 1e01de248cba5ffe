//! Circle Iris API attestation provider.

use alloy_primitives::FixedBytes;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

use crate::error::{BridgeError, Result};
use crate::protocol::AttestationRecord;
use crate::traits::AttestationProvider;

/// Circle Iris API environment URLs
///
/// See <https://developers.circle.com/stablecoins/cctp-apis>
pub const IRIS_API: &str = "https://iris-api.circle.com";
pub const IRIS_API_SANDBOX: &str = "https://iris-api-sandbox.circle.com";

/// CCTP v1 attestation API path
const ATTESTATION_PATH: &str = "/v1/attestations/";

/// Per-request timeout for one status query.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Attestation status source backed by Circle's Iris API.
///
/// Performs one bounded-timeout `GET {base}/v1/attestations/{messageHash}`
/// per [`fetch_status`](AttestationProvider::fetch_status) call. A 404 means
/// the message has not been indexed yet and yields a pending record; any
/// other failure is a hard [`BridgeError::AttestationFetch`]. Retrying is
/// the polling loop's job, not this provider's.
#[derive(Debug, Clone)]
pub struct IrisAttestationProvider {
    base_url: Url,
    client: Client,
}

impl IrisAttestationProvider {
    /// Creates a provider against an arbitrary Iris-compatible base URL.
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(BridgeError::Network)?;
        Ok(Self { base_url, client })
    }

    /// Provider for Circle's production environment.
    pub fn production() -> Result<Self> {
        Self::new(Url::parse(IRIS_API)?)
    }

    /// Provider for Circle's sandbox (testnet) environment.
    pub fn sandbox() -> Result<Self> {
        Self::new(Url::parse(IRIS_API_SANDBOX)?)
    }

    /// Constructs the attestation endpoint URL for a message hash.
    ///
    /// The hash is formatted with the `0x` prefix as Circle's API expects;
    /// the `Display` impl of `FixedBytes<32>` includes it.
    pub fn attestation_url(&self, message_hash: FixedBytes<32>) -> Result<Url> {
        Ok(self
            .base_url
            .join(&format!("{ATTESTATION_PATH}{message_hash}"))?)
    }
}

#[async_trait]
impl AttestationProvider for IrisAttestationProvider {
    async fn fetch_status(&self, message_hash: FixedBytes<32>) -> Result<AttestationRecord> {
        let url = self.attestation_url(message_hash)?;
        trace!(url = %url, event = "attestation_request");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| BridgeError::AttestationFetch {
                reason: format!("request failed: {e}"),
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!(event = "attestation_not_indexed_yet");
            return Ok(AttestationRecord::pending());
        }

        if !response.status().is_success() {
            return Err(BridgeError::AttestationFetch {
                reason: format!("unexpected HTTP status {}", response.status()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| BridgeError::AttestationFetch {
                reason: format!("failed to read response body: {e}"),
            })?;

        let record: AttestationRecord =
            serde_json::from_str(&body).map_err(|e| BridgeError::AttestationFetch {
                reason: format!("invalid response body: {e}"),
            })?;

        debug!(status = ?record.status, event = "attestation_status_received");
        Ok(record)
    }
}
