//! Cross-domain-gated handlers: deliveries authored by the home bridge.
//!
//! Authentication runs before any state mutation on every entry point here -
//! it is the sole replay/spoofing defense (idempotency of delivery is the
//! messenger's job).

use cosmwasm_std::{
    to_json_binary, Addr, Binary, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};

use common::messenger::authenticate_cross_domain;
use common::scale::scale_down;
use common::token as token_msg;
use common::upgrade::assert_upgrade_authority;
use common::foreign_bridge::MigrateMsg;

use crate::error::ContractError;
use crate::state::{Config, CONFIG, INFLATION_MULTIPLIER, TOKEN};

/// Mint the bridged representation for a deposit escrowed on the home chain.
///
/// `amount` arrives in wire units; the mint is issued in reported units at
/// the current local multiplier, so the credited base value is independent of
/// when the message is delivered relative to rebases on this chain.
#[allow(clippy::too_many_arguments)]
pub fn execute_finalize_deposit(
    deps: DepsMut,
    info: MessageInfo,
    home_token: String,
    foreign_token: String,
    from: String,
    to: String,
    amount: Uint128,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    let (config, token) = authenticate_from_home(&deps, &info)?;

    if foreign_token != token.as_str() {
        return Err(ContractError::InvalidForeignToken {
            token: foreign_token,
        });
    }
    if home_token != config.home_token {
        return Err(ContractError::InvalidHomeToken { token: home_token });
    }

    let multiplier = INFLATION_MULTIPLIER.load(deps.storage)?;
    let minted = scale_down(amount, multiplier)?;
    let to = deps.api.addr_validate(&to)?;

    let mint = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&token_msg::ExecuteMsg::Mint {
            recipient: to.to_string(),
            amount: minted,
        })?,
        funds: vec![],
    };

    let mut res = Response::new()
        .add_message(mint)
        .add_attribute("method", "finalize_deposit")
        .add_attribute("home_token", home_token)
        .add_attribute("foreign_token", foreign_token)
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("amount", minted);
    if !extra_data.is_empty() {
        res = res.add_attribute("extra_data", extra_data.to_base64());
    }
    Ok(res)
}

/// Adopt the home chain's new multiplier and forward it to the token.
///
/// The token enforces the rebaser role; if this bridge has lost it the whole
/// delivery rejects with the token's `UnauthorizedRebaser`.
pub fn execute_rebase(
    deps: DepsMut,
    info: MessageInfo,
    inflation_multiplier: Uint128,
) -> Result<Response, ContractError> {
    let (_, token) = authenticate_from_home(&deps, &info)?;

    if inflation_multiplier.is_zero() {
        return Err(ContractError::InvalidMultiplier);
    }

    INFLATION_MULTIPLIER.save(deps.storage, &inflation_multiplier)?;

    let rebase = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&token_msg::ExecuteMsg::Rebase {
            inflation_multiplier,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(rebase)
        .add_attribute("method", "rebase")
        .add_attribute("inflation_multiplier", inflation_multiplier))
}

/// Swap the token's implementation, as directed by the home chain.
pub fn execute_upgrade_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    code_id: u64,
) -> Result<Response, ContractError> {
    let (_, token) = authenticate_from_home(&deps, &info)?;
    assert_upgrade_authority(&deps.querier, &env.contract.address, &token)?;

    let migrate = WasmMsg::Migrate {
        contract_addr: token.to_string(),
        new_code_id: code_id,
        msg: to_json_binary(&token_msg::MigrateMsg {})?,
    };

    Ok(Response::new()
        .add_message(migrate)
        .add_attribute("method", "upgrade_token")
        .add_attribute("code_id", code_id.to_string()))
}

/// Swap this bridge's own implementation, as directed by the home chain.
pub fn execute_upgrade_self(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    code_id: u64,
) -> Result<Response, ContractError> {
    authenticate_from_home(&deps, &info)?;
    assert_upgrade_authority(&deps.querier, &env.contract.address, &env.contract.address)?;

    let migrate = WasmMsg::Migrate {
        contract_addr: env.contract.address.to_string(),
        new_code_id: code_id,
        msg: to_json_binary(&MigrateMsg {})?,
    };

    Ok(Response::new()
        .add_message(migrate)
        .add_attribute("method", "upgrade_self")
        .add_attribute("code_id", code_id.to_string()))
}

/// Gate shared by every inbound entry point: messenger first, x-domain
/// sender second, active bridge third.
fn authenticate_from_home(
    deps: &DepsMut,
    info: &MessageInfo,
) -> Result<(Config, Addr), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    authenticate_cross_domain(&deps.querier, info, &config.messenger, &config.home_bridge)?;
    let token = TOKEN
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized)?;
    Ok((config, token))
}
