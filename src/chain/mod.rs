//! Chain configuration and registry
//!
//! Network parameters for every chain the bridge can burn on or mint on:
//! chain ID, RPC endpoint, CCTP contract addresses, USDC token address, and
//! the CCTP domain. The registry is an explicit immutable structure built
//! once at startup and passed by reference into the orchestrator; there is
//! no process-wide singleton.

pub mod addresses;

use alloy_primitives::Address;
use url::Url;

use crate::error::{BridgeError, Result};
use crate::protocol::DomainId;

/// Static network parameters for one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Human-readable chain name ("Base Sepolia").
    pub name: &'static str,
    /// Native EVM chain ID.
    pub chain_id: u64,
    /// Default public RPC endpoint.
    pub rpc_url: Url,
    /// CCTP `TokenMessenger` contract handling deposit-for-burn.
    pub token_messenger: Address,
    /// CCTP `MessageTransmitter` contract handling message receipt.
    pub message_transmitter: Address,
    /// USDC token contract.
    pub usdc: Address,
    /// CCTP domain identifier, distinct from the chain ID.
    pub domain: DomainId,
}

/// Registry of supported chains, keyed by lower-cased slug.
///
/// Every slug maps to exactly one config; an unknown slug is a lookup error,
/// never a silent default.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    entries: Vec<(&'static str, ChainConfig)>,
}

impl ChainRegistry {
    /// Builds the registry of CCTP-enabled test networks.
    pub fn testnet() -> Self {
        let entries = vec![
            (
                "base-sepolia",
                ChainConfig {
                    name: "Base Sepolia",
                    chain_id: 84532,
                    rpc_url: parse_static_url("https://sepolia.base.org"),
                    token_messenger: addresses::BASE_SEPOLIA_TOKEN_MESSENGER,
                    message_transmitter: addresses::BASE_SEPOLIA_MESSAGE_TRANSMITTER,
                    usdc: addresses::BASE_SEPOLIA_USDC,
                    domain: DomainId::Base,
                },
            ),
            (
                "eth-sepolia",
                ChainConfig {
                    name: "Ethereum Sepolia",
                    chain_id: 11155111,
                    rpc_url: parse_static_url("https://rpc.sepolia.org"),
                    token_messenger: addresses::ETH_SEPOLIA_TOKEN_MESSENGER,
                    message_transmitter: addresses::ETH_SEPOLIA_MESSAGE_TRANSMITTER,
                    usdc: addresses::ETH_SEPOLIA_USDC,
                    domain: DomainId::Ethereum,
                },
            ),
            (
                "arb-sepolia",
                ChainConfig {
                    name: "Arbitrum Sepolia",
                    chain_id: 421614,
                    rpc_url: parse_static_url("https://sepolia-rollup.arbitrum.io/rpc"),
                    token_messenger: addresses::ARB_SEPOLIA_TOKEN_MESSENGER,
                    message_transmitter: addresses::ARB_SEPOLIA_MESSAGE_TRANSMITTER,
                    usdc: addresses::ARB_SEPOLIA_USDC,
                    domain: DomainId::Arbitrum,
                },
            ),
        ];
        Self { entries }
    }

    /// Looks up a chain by slug, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::UnknownChain`] naming the offending slug and
    /// listing the supported ones.
    pub fn resolve(&self, slug: &str) -> Result<&ChainConfig> {
        let wanted = slug.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| *key == wanted)
            .map(|(_, config)| config)
            .ok_or_else(|| BridgeError::UnknownChain {
                chain: slug.to_string(),
                supported: self.slugs().join(", "),
            })
    }

    /// Returns the registered slugs, in registration order.
    pub fn slugs(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    /// Iterates over registered `(slug, config)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ChainConfig)> {
        self.entries.iter().map(|(key, config)| (*key, config))
    }
}

fn parse_static_url(url: &'static str) -> Url {
    // The registry ships only compile-time constants.
    Url::parse(url).expect("static RPC URL is well-formed")
}
