//! Entry points for the foreign-chain bridge.
//!
//! Handlers live in `execute/`:
//! - `incoming` - cross-domain-gated deliveries from the home bridge
//! - `withdraw` - user-initiated withdrawals back to the home chain
//! - `admin` - one-shot bootstrap

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use common::foreign_bridge::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use common::token::InflationMultiplierResponse;

use crate::error::ContractError;
use crate::execute::{
    execute_finalize_deposit, execute_rebase, execute_set_token, execute_upgrade_self,
    execute_upgrade_token, execute_withdraw,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, INFLATION_MULTIPLIER, TOKEN};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        messenger: deps.api.addr_validate(&msg.messenger)?,
        home_bridge: msg.home_bridge,
        home_token: msg.home_token,
        owner: info.sender,
    };
    CONFIG.save(deps.storage, &config)?;
    INFLATION_MULTIPLIER.save(deps.storage, &Uint128::one())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("messenger", config.messenger)
        .add_attribute("home_bridge", config.home_bridge))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetToken { token } => execute_set_token(deps, info, token),
        ExecuteMsg::FinalizeDeposit {
            home_token,
            foreign_token,
            from,
            to,
            amount,
            extra_data,
        } => execute_finalize_deposit(
            deps,
            info,
            home_token,
            foreign_token,
            from,
            to,
            amount,
            extra_data,
        ),
        ExecuteMsg::Withdraw {
            foreign_token,
            amount,
            min_gas_limit,
            extra_data,
        } => {
            let recipient = info.sender.to_string();
            execute_withdraw(
                deps,
                info,
                foreign_token,
                recipient,
                amount,
                min_gas_limit,
                extra_data,
            )
        }
        ExecuteMsg::WithdrawTo {
            foreign_token,
            recipient,
            amount,
            min_gas_limit,
            extra_data,
        } => execute_withdraw(
            deps,
            info,
            foreign_token,
            recipient,
            amount,
            min_gas_limit,
            extra_data,
        ),
        ExecuteMsg::Rebase {
            inflation_multiplier,
        } => execute_rebase(deps, info, inflation_multiplier),
        ExecuteMsg::UpgradeToken { code_id } => execute_upgrade_token(deps, env, info, code_id),
        ExecuteMsg::UpgradeSelf { code_id } => execute_upgrade_self(deps, env, info, code_id),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                messenger: config.messenger.into_string(),
                home_bridge: config.home_bridge,
                home_token: config.home_token,
                token: TOKEN.may_load(deps.storage)?.map(Into::into),
                owner: config.owner.into_string(),
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
