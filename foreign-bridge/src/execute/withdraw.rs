//! User-initiated withdrawals back to the home chain.
//!
//! Phase 1 commits locally (burn) and emits the outbound envelope; phase 2
//! (escrow release on the home chain) is delivered by the messenger at an
//! indeterminate delay, possibly gated by a challenge window. Nothing here
//! retries - a stuck message is the messenger's problem, and a failed
//! release comes back as a compensating deposit-finalization.

use cosmwasm_std::{to_json_binary, Binary, DepsMut, MessageInfo, Response, Uint128, WasmMsg};

use common::home_bridge as home_msg;
use common::messenger::MessengerExecuteMsg;
use common::scale::scale_up;
use common::token as token_msg;

use crate::error::ContractError;
use crate::state::{CONFIG, INFLATION_MULTIPLIER, TOKEN};

/// Burn `amount` from the caller and message the home bridge to release
/// escrow to `recipient`. The wire carries `amount x multiplier` so the home
/// side always speaks in home-chain absolute units.
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    foreign_token: String,
    recipient: String,
    amount: Uint128,
    min_gas_limit: u32,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let token = TOKEN
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized)?;

    if foreign_token != token.as_str() {
        return Err(ContractError::InvalidForeignToken {
            token: foreign_token,
        });
    }

    let multiplier = INFLATION_MULTIPLIER.load(deps.storage)?;
    let wire_amount = scale_up(amount, multiplier)?;

    let burn = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&token_msg::ExecuteMsg::Burn {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    let finalize = home_msg::ExecuteMsg::FinalizeWithdrawal {
        home_token: config.home_token.clone(),
        foreign_token: token.to_string(),
        from: info.sender.to_string(),
        to: recipient.clone(),
        amount: wire_amount,
        extra_data: extra_data.clone(),
    };
    let send = WasmMsg::Execute {
        contract_addr: config.messenger.to_string(),
        msg: to_json_binary(&MessengerExecuteMsg::SendMessage {
            target: config.home_bridge,
            message: to_json_binary(&finalize)?,
            gas_limit: min_gas_limit,
        })?,
        funds: vec![],
    };

    let mut res = Response::new()
        .add_message(burn)
        .add_message(send)
        .add_attribute("method", "withdraw")
        .add_attribute("home_token", config.home_token)
        .add_attribute("foreign_token", foreign_token)
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount);
    if !extra_data.is_empty() {
        res = res.add_attribute("extra_data", extra_data.to_base64());
    }
    Ok(res)
}
