//! USDC token bindings for balance and approval operations
//!
//! A CCTP burn moves tokens out of the caller's account via the
//! `TokenMessenger`, so the messenger must be approved as a spender first.

use alloy_sol_types::sol;

// Minimal ERC20 interface for balance and approval operations
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract Usdc {
        function balanceOf(address account) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
);
