//! TokenMessenger contract bindings
//!
//! The `TokenMessenger` manages the burn side of a CCTP transfer:
//! `depositForBurn` escrows and burns USDC, naming the destination domain
//! and the 32-byte left-padded recipient.

use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract TokenMessenger {
        function depositForBurn(
            uint256 amount,
            uint32 destinationDomain,
            bytes32 mintRecipient,
            address burnToken
        ) external returns (uint64 nonce);
    }
);
