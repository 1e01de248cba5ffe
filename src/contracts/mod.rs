//! CCTP contract bindings
//!
//! Alloy-generated bindings for the three contracts a transfer touches: the
//! USDC token (balance and approval), the `TokenMessenger` (burn side), and
//! the `MessageTransmitter` (message emission and mint side). Only the
//! functions and events the bridge actually calls are bound.

pub mod erc20;
pub mod message_transmitter;
pub mod token_messenger;
