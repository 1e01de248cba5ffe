//! MessageTransmitter contract bindings
//!
//! The `MessageTransmitter` emits the cross-chain message during a burn
//! (`MessageSent`) and verifies attestations to mint on the destination
//! chain (`receiveMessage`).

use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract MessageTransmitter {
        event MessageSent(bytes message);

        function receiveMessage(
            bytes message,
            bytes attestation
        ) external returns (bool success);
    }
);
