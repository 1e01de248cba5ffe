//! CCTP contract addresses for the supported test networks
//!
//! Source: <https://developers.circle.com/stablecoins/evm-smart-contracts>

use alloy_primitives::{address, Address};

// TokenMessenger addresses (identical across the v1 testnets)

/// <https://base-sepolia.blockscout.com/address/0x9f3B8679c73C2Fef8b59B4f3444d4e156fb70AA5>
pub const BASE_SEPOLIA_TOKEN_MESSENGER: Address =
    address!("9f3B8679c73C2Fef8b59B4f3444d4e156fb70AA5");

/// <https://sepolia.etherscan.io/address/0x9f3B8679c73C2Fef8b59B4f3444d4e156fb70AA5>
pub const ETH_SEPOLIA_TOKEN_MESSENGER: Address =
    address!("9f3B8679c73C2Fef8b59B4f3444d4e156fb70AA5");

/// <https://sepolia.arbiscan.io/address/0x9f3B8679c73C2Fef8b59B4f3444d4e156fb70AA5>
pub const ARB_SEPOLIA_TOKEN_MESSENGER: Address =
    address!("9f3B8679c73C2Fef8b59B4f3444d4e156fb70AA5");

// MessageTransmitter addresses

/// <https://base-sepolia.blockscout.com/address/0x7865fAfC2db2093669d92c0F33AeEF291086BEFD>
pub const BASE_SEPOLIA_MESSAGE_TRANSMITTER: Address =
    address!("7865fAfC2db2093669d92c0F33AeEF291086BEFD");

/// <https://sepolia.etherscan.io/address/0x7865fAfC2db2093669d92c0F33AeEF291086BEFD>
pub const ETH_SEPOLIA_MESSAGE_TRANSMITTER: Address =
    address!("7865fAfC2db2093669d92c0F33AeEF291086BEFD");

/// <https://sepolia.arbiscan.io/address/0x7865fAfC2db2093669d92c0F33AeEF291086BEFD>
pub const ARB_SEPOLIA_MESSAGE_TRANSMITTER: Address =
    address!("7865fAfC2db2093669d92c0F33AeEF291086BEFD");

// USDC token addresses

/// <https://developers.circle.com/stablecoins/usdc-on-test-networks>
pub const BASE_SEPOLIA_USDC: Address = address!("036CbD53842c5426634e7929541eC2318f3dCF7e");

/// <https://developers.circle.com/stablecoins/usdc-on-test-networks>
pub const ETH_SEPOLIA_USDC: Address = address!("1c7D4B196Cb0C7B01d743Fbc6116a902379C7238");

/// <https://developers.circle.com/stablecoins/usdc-on-test-networks>
pub const ARB_SEPOLIA_USDC: Address = address!("75faf114eafb1BDbe2F0316DF893fd58CE46AA4d");
