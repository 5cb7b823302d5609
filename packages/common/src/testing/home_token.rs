//! Mock home-chain token.
//!
//! A cw20-shaped fake with two test controls: a pause switch so release
//! failures can be forced (the u-turn path), and a settable inflation
//! multiplier so the oracle/relay path can be driven. `TransferFrom` skips
//! allowance bookkeeping - this is a fake, not a token.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    Uint128,
};
use cw20::{BalanceResponse, Cw20Coin};
use cw_storage_plus::{Item, Map};

use crate::token::InflationMultiplierResponse;

pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
pub const PAUSED: Item<bool> = Item::new("paused");
pub const INFLATION_MULTIPLIER: Item<Uint128> = Item::new("inflation_multiplier");

#[cw_serde]
pub struct InstantiateMsg {
    pub initial_balances: Vec<Cw20Coin>,
    pub inflation_multiplier: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Serde-compatible with `cw20::Cw20ExecuteMsg::Transfer`.
    Transfer { recipient: String, amount: Uint128 },
    /// Serde-compatible with `cw20::Cw20ExecuteMsg::TransferFrom`.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Test control: make every transfer fail.
    SetPaused { paused: bool },
    /// Test control: simulate home-chain inflation.
    SetInflationMultiplier { inflation_multiplier: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(InflationMultiplierResponse)]
    InflationMultiplier {},
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    PAUSED.save(deps.storage, &false)?;
    INFLATION_MULTIPLIER.save(deps.storage, &msg.inflation_multiplier)?;
    for coin in msg.initial_balances {
        let addr = Addr::unchecked(coin.address);
        BALANCES.save(deps.storage, &addr, &coin.amount)?;
    }
    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            move_balance(deps, &info.sender, &recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => move_balance(deps, &Addr::unchecked(owner), &recipient, amount),
        ExecuteMsg::SetPaused { paused } => {
            PAUSED.save(deps.storage, &paused)?;
            Ok(Response::new())
        }
        ExecuteMsg::SetInflationMultiplier {
            inflation_multiplier,
        } => {
            INFLATION_MULTIPLIER.save(deps.storage, &inflation_multiplier)?;
            Ok(Response::new())
        }
    }
}

fn move_balance(
    deps: DepsMut,
    owner: &Addr,
    recipient: &str,
    amount: Uint128,
) -> StdResult<Response> {
    if PAUSED.load(deps.storage)? {
        return Err(StdError::generic_err("token paused"));
    }

    let balance = BALANCES.may_load(deps.storage, owner)?.unwrap_or_default();
    let remaining = balance
        .checked_sub(amount)
        .map_err(|_| StdError::generic_err("insufficient balance"))?;
    BALANCES.save(deps.storage, owner, &remaining)?;

    let recipient = Addr::unchecked(recipient);
    let credited = BALANCES
        .may_load(deps.storage, &recipient)?
        .unwrap_or_default()
        .checked_add(amount)
        .map_err(StdError::overflow)?;
    BALANCES.save(deps.storage, &recipient, &credited)?;

    Ok(Response::new())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => {
            let balance = BALANCES
                .may_load(deps.storage, &Addr::unchecked(address))?
                .unwrap_or_default();
            to_json_binary(&BalanceResponse { balance })
        }
        QueryMsg::InflationMultiplier {} => {
            let inflation_multiplier = INFLATION_MULTIPLIER.load(deps.storage)?;
            to_json_binary(&InflationMultiplierResponse {
                inflation_multiplier,
            })
        }
    }
}
