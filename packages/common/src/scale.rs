//! Inflation-multiplier scaling helpers.
//!
//! Two unit systems exist in this bridge and both are derived with the same
//! two operations:
//!
//! - token accounting: `reported = base x multiplier` ([`scale_up`] on base
//!   balances, [`scale_down`] when crediting a reported amount),
//! - the wire: every cross-domain amount is `reported x sender multiplier`
//!   ([`scale_up`] outbound, [`scale_down`] inbound).

use cosmwasm_std::{StdError, StdResult, Uint128};

/// Multiply an amount by the inflation multiplier, checked.
pub fn scale_up(amount: Uint128, multiplier: Uint128) -> StdResult<Uint128> {
    amount.checked_mul(multiplier).map_err(StdError::overflow)
}

/// Divide an amount by the inflation multiplier.
///
/// Integer division truncates toward zero: dust below one multiplier unit is
/// dropped, never redistributed. Amounts that are exact multiples of the
/// multiplier (everything produced by [`scale_up`]) round-trip losslessly.
pub fn scale_down(amount: Uint128, multiplier: Uint128) -> StdResult<Uint128> {
    amount
        .checked_div(multiplier)
        .map_err(StdError::divide_by_zero)
}

/// Divide an amount by the inflation multiplier, rounding up.
///
/// Debit paths use this: spending a reported amount must never cost less base
/// value than the amount is worth, or sub-multiplier remainders could be spent
/// for free. A remainder costs a full base unit.
pub fn scale_down_ceil(amount: Uint128, multiplier: Uint128) -> StdResult<Uint128> {
    if amount.is_zero() {
        return scale_down(amount, multiplier);
    }
    // (amount - 1) / multiplier + 1, which cannot overflow
    let floor = scale_down(amount - Uint128::one(), multiplier)?;
    Ok(floor + Uint128::one())
}
