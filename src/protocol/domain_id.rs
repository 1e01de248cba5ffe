//! CCTP domain identifiers
//!
//! Circle assigns every supported network a numeric domain ID, distinct from
//! the chain's native chain ID. Only the domains reachable from the shipped
//! testnet registry are modeled here.
//!
//! Reference: <https://developers.circle.com/stablecoins/evm-smart-contracts>

use std::fmt;

/// CCTP domain identifier for a blockchain network.
///
/// The domain ID is what `depositForBurn` takes to name the destination
/// chain; it is shared between a mainnet and its test network (Ethereum and
/// Sepolia are both domain 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DomainId {
    /// Ethereum mainnet and Sepolia (Domain ID: 0)
    Ethereum = 0,
    /// Arbitrum One and Arbitrum Sepolia (Domain ID: 3)
    Arbitrum = 3,
    /// Base and Base Sepolia (Domain ID: 6)
    Base = 6,
}

impl DomainId {
    /// Returns the numeric domain ID value.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Attempts to map a raw domain ID onto a supported domain.
    #[inline]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Ethereum),
            3 => Some(Self::Arbitrum),
            6 => Some(Self::Base),
            _ => None,
        }
    }

    /// Returns the network family name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Arbitrum => "Arbitrum",
            Self::Base => "Base",
        }
    }
}

impl From<DomainId> for u32 {
    #[inline]
    fn from(domain: DomainId) -> Self {
        domain.as_u32()
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_id_values() {
        assert_eq!(DomainId::Ethereum.as_u32(), 0);
        assert_eq!(DomainId::Arbitrum.as_u32(), 3);
        assert_eq!(DomainId::Base.as_u32(), 6);
    }

    #[test]
    fn from_u32_roundtrip() {
        for domain in [DomainId::Ethereum, DomainId::Arbitrum, DomainId::Base] {
            assert_eq!(DomainId::from_u32(domain.as_u32()), Some(domain));
        }
    }

    #[test]
    fn from_u32_rejects_unregistered_domains() {
        assert_eq!(DomainId::from_u32(1), None); // Avalanche, not shipped
        assert_eq!(DomainId::from_u32(2), None); // Optimism, not shipped
        assert_eq!(DomainId::from_u32(999), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", DomainId::Ethereum), "Ethereum (0)");
        assert_eq!(format!("{}", DomainId::Base), "Base (6)");
    }
}
