//! User-initiated deposits toward the foreign chain.

use cosmwasm_std::{to_json_binary, Binary, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use common::foreign_bridge::ExecuteMsg as ForeignBridgeExecuteMsg;
use common::messenger::MessengerExecuteMsg;
use common::scale::scale_up;

use crate::error::ContractError;
use crate::state::{CONFIG, INFLATION_MULTIPLIER};

/// Escrow `amount` of the home token and message the foreign bridge to mint
/// the equivalent to `recipient`.
///
/// Contract accounts are rejected: a contract's address has no meaning on the
/// other chain and misdirected funds there would be unrecoverable.
#[allow(clippy::too_many_arguments)]
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    foreign_token: String,
    recipient: String,
    amount: Uint128,
    min_gas_limit: u32,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    if deps
        .querier
        .query_wasm_contract_info(info.sender.to_string())
        .is_ok()
    {
        return Err(ContractError::AccountNotEOA);
    }

    let config = CONFIG.load(deps.storage)?;
    if token != config.token.as_str() {
        return Err(ContractError::InvalidHomeToken { token });
    }
    if foreign_token != config.foreign_token {
        return Err(ContractError::InvalidForeignToken {
            token: foreign_token,
        });
    }

    // pull the deposit into escrow; requires a prior allowance on the token
    let escrow_msg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    let multiplier = INFLATION_MULTIPLIER.load(deps.storage)?;
    let wire_amount = scale_up(amount, multiplier)?;

    let finalize = ForeignBridgeExecuteMsg::FinalizeDeposit {
        home_token: config.token.to_string(),
        foreign_token: config.foreign_token.clone(),
        from: info.sender.to_string(),
        to: recipient.clone(),
        amount: wire_amount,
        extra_data: extra_data.clone(),
    };
    let send_msg = WasmMsg::Execute {
        contract_addr: config.messenger.to_string(),
        msg: to_json_binary(&MessengerExecuteMsg::SendMessage {
            target: config.foreign_bridge,
            message: to_json_binary(&finalize)?,
            gas_limit: min_gas_limit,
        })?,
        funds: vec![],
    };

    let mut res = Response::new()
        .add_message(escrow_msg)
        .add_message(send_msg)
        .add_attribute("method", "deposit")
        .add_attribute("home_token", config.token)
        .add_attribute("foreign_token", config.foreign_token)
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_attribute("wire_amount", wire_amount);
    if !extra_data.is_empty() {
        res = res.add_attribute("extra_data", extra_data.to_base64());
    }
    Ok(res)
}
