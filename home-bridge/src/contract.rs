//! Entry points for the home-chain bridge.
//!
//! Handlers live in `execute/`:
//! - `deposit` - user-initiated deposits toward the foreign chain
//! - `withdrawal` - cross-domain finalization with the u-turn fallback
//! - `relay` - rebase oracle/relay and upgrade directives

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
};
use cw2::set_contract_version;

use common::home_bridge::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use common::home_token::HomeTokenQueryMsg;
use common::token::InflationMultiplierResponse;

use crate::error::ContractError;
use crate::execute::{
    execute_deposit, execute_finalize_withdrawal, execute_rebase, execute_upgrade_foreign_bridge,
    execute_upgrade_foreign_token, execute_upgrade_self, reply_release,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, INFLATION_MULTIPLIER, RELEASE_REPLY_ID,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        messenger: deps.api.addr_validate(&msg.messenger)?,
        foreign_bridge: msg.foreign_bridge,
        token: deps.api.addr_validate(&msg.token)?,
        foreign_token: msg.foreign_token,
        upgrader: deps.api.addr_validate(&msg.upgrader)?,
    };
    CONFIG.save(deps.storage, &config)?;

    // seed the multiplier cache from the home token
    let res: InflationMultiplierResponse = deps.querier.query_wasm_smart(
        config.token.to_string(),
        &HomeTokenQueryMsg::InflationMultiplier {},
    )?;
    INFLATION_MULTIPLIER.save(deps.storage, &res.inflation_multiplier)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("messenger", config.messenger)
        .add_attribute("foreign_bridge", config.foreign_bridge)
        .add_attribute("inflation_multiplier", res.inflation_multiplier))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {
            token,
            foreign_token,
            amount,
            min_gas_limit,
            extra_data,
        } => {
            let recipient = info.sender.to_string();
            execute_deposit(
                deps,
                env,
                info,
                token,
                foreign_token,
                recipient,
                amount,
                min_gas_limit,
                extra_data,
            )
        }
        ExecuteMsg::DepositTo {
            token,
            foreign_token,
            recipient,
            amount,
            min_gas_limit,
            extra_data,
        } => execute_deposit(
            deps,
            env,
            info,
            token,
            foreign_token,
            recipient,
            amount,
            min_gas_limit,
            extra_data,
        ),
        ExecuteMsg::FinalizeWithdrawal {
            home_token,
            foreign_token,
            from,
            to,
            amount,
            extra_data,
        } => execute_finalize_withdrawal(
            deps,
            info,
            home_token,
            foreign_token,
            from,
            to,
            amount,
            extra_data,
        ),
        ExecuteMsg::Rebase { min_gas_limit } => execute_rebase(deps, min_gas_limit),
        ExecuteMsg::UpgradeForeignToken {
            code_id,
            min_gas_limit,
        } => execute_upgrade_foreign_token(deps, info, code_id, min_gas_limit),
        ExecuteMsg::UpgradeForeignBridge {
            code_id,
            min_gas_limit,
        } => execute_upgrade_foreign_bridge(deps, info, code_id, min_gas_limit),
        ExecuteMsg::UpgradeSelf { code_id } => execute_upgrade_self(deps, env, info, code_id),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        RELEASE_REPLY_ID => reply_release(deps, msg.result),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                messenger: config.messenger.into_string(),
                foreign_bridge: config.foreign_bridge,
                token: config.token.into_string(),
                foreign_token: config.foreign_token,
                upgrader: config.upgrader.into_string(),
            })
        }
        QueryMsg::InflationMultiplier {} => to_json_binary(&InflationMultiplierResponse {
            inflation_multiplier: INFLATION_MULTIPLIER.load(deps.storage)?,
        }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
