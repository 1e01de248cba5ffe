//! USDC amount scaling
//!
//! USDC carries 6 fractional digits on every chain it ships on. Caller-facing
//! amounts are human-decimal strings ("10.5") and must be scaled to integer
//! token units before any on-chain call.

use alloy_primitives::U256;

use crate::error::{BridgeError, Result};

/// Number of fractional digits in USDC's on-chain representation.
pub const USDC_DECIMALS: u32 = 6;

const UNITS_PER_USDC: u64 = 1_000_000;

/// Scales a human-decimal USDC amount to integer token units.
///
/// "10.5" becomes 10_500_000 and "10" becomes 10_000_000. More than
/// [`USDC_DECIMALS`] fractional digits cannot be represented and is rejected
/// rather than truncated.
pub fn parse_usdc(amount: &str) -> Result<U256> {
    let invalid = |reason: &str| BridgeError::InvalidAmount {
        amount: amount.to_string(),
        reason: reason.to_string(),
    };

    let (whole, frac) = match amount.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("no digits"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("expected a non-negative decimal number"));
    }
    if frac.len() > USDC_DECIMALS as usize {
        return Err(invalid("more than 6 fractional digits"));
    }

    let whole_units = if whole.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(whole, 10).map_err(|_| invalid("whole part out of range"))?
    };

    let mut frac_padded = frac.to_string();
    while frac_padded.len() < USDC_DECIMALS as usize {
        frac_padded.push('0');
    }
    let frac_units = if frac.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(&frac_padded, 10).map_err(|_| invalid("fractional part invalid"))?
    };

    whole_units
        .checked_mul(U256::from(UNITS_PER_USDC))
        .and_then(|scaled| scaled.checked_add(frac_units))
        .ok_or_else(|| invalid("amount out of range"))
}

/// Formats integer token units back into a human-decimal USDC string.
pub fn format_usdc(units: U256) -> String {
    let divisor = U256::from(UNITS_PER_USDC);
    let whole = units / divisor;
    let frac = units % divisor;
    if frac.is_zero() {
        whole.to_string()
    } else {
        let frac_digits = format!("{frac:06}");
        format!("{whole}.{}", frac_digits.trim_end_matches('0'))
    }
}
