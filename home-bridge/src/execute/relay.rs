//! Rebase relay and upgrade directives.

use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, WasmMsg};

use common::foreign_bridge::ExecuteMsg as ForeignBridgeExecuteMsg;
use common::home_bridge::MigrateMsg;
use common::home_token::HomeTokenQueryMsg;
use common::messenger::MessengerExecuteMsg;
use common::token::InflationMultiplierResponse;
use common::upgrade::assert_upgrade_authority;

use crate::error::ContractError;
use crate::state::{Config, CONFIG, INFLATION_MULTIPLIER};

/// Relay the home token's current inflation multiplier to the foreign
/// bridge. Permissionless: the multiplier is read from the token, not the
/// caller.
pub fn execute_rebase(deps: DepsMut, min_gas_limit: u32) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let res: InflationMultiplierResponse = deps.querier.query_wasm_smart(
        config.token.to_string(),
        &HomeTokenQueryMsg::InflationMultiplier {},
    )?;
    INFLATION_MULTIPLIER.save(deps.storage, &res.inflation_multiplier)?;

    let send_msg = send_to_foreign_bridge(
        &config,
        &ForeignBridgeExecuteMsg::Rebase {
            inflation_multiplier: res.inflation_multiplier,
        },
        min_gas_limit,
    )?;

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("method", "rebase")
        .add_attribute("inflation_multiplier", res.inflation_multiplier))
}

/// Direct the foreign bridge to migrate the bridged token. Upgrader only.
pub fn execute_upgrade_foreign_token(
    deps: DepsMut,
    info: MessageInfo,
    code_id: u64,
    min_gas_limit: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_upgrader(&config, &info)?;

    let send_msg = send_to_foreign_bridge(
        &config,
        &ForeignBridgeExecuteMsg::UpgradeToken { code_id },
        min_gas_limit,
    )?;

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("method", "upgrade_foreign_token")
        .add_attribute("code_id", code_id.to_string()))
}

/// Direct the foreign bridge to migrate itself. Upgrader only.
pub fn execute_upgrade_foreign_bridge(
    deps: DepsMut,
    info: MessageInfo,
    code_id: u64,
    min_gas_limit: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_upgrader(&config, &info)?;

    let send_msg = send_to_foreign_bridge(
        &config,
        &ForeignBridgeExecuteMsg::UpgradeSelf { code_id },
        min_gas_limit,
    )?;

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("method", "upgrade_foreign_bridge")
        .add_attribute("code_id", code_id.to_string()))
}

/// Swap this bridge's own implementation. Upgrader only, and the bridge must
/// hold the upgrade authority over itself.
pub fn execute_upgrade_self(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    code_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_upgrader(&config, &info)?;
    assert_upgrade_authority(&deps.querier, &env.contract.address, &env.contract.address)?;

    let migrate_msg = WasmMsg::Migrate {
        contract_addr: env.contract.address.to_string(),
        new_code_id: code_id,
        msg: to_json_binary(&MigrateMsg {})?,
    };

    Ok(Response::new()
        .add_message(migrate_msg)
        .add_attribute("method", "upgrade_self")
        .add_attribute("code_id", code_id.to_string()))
}

fn assert_upgrader(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.upgrader {
        return Err(ContractError::UnauthorizedUpgrader);
    }
    Ok(())
}

fn send_to_foreign_bridge(
    config: &Config,
    msg: &ForeignBridgeExecuteMsg,
    gas_limit: u32,
) -> Result<WasmMsg, ContractError> {
    Ok(WasmMsg::Execute {
        contract_addr: config.messenger.to_string(),
        msg: to_json_binary(&MessengerExecuteMsg::SendMessage {
            target: config.foreign_bridge.clone(),
            message: to_json_binary(msg)?,
            gas_limit,
        })?,
        funds: vec![],
    })
}
