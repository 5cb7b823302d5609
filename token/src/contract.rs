//! Entry points and handlers for the rebasing token.

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20::BalanceResponse;

use common::scale::{scale_down, scale_down_ceil, scale_up};
use common::token::{
    BaseBalanceResponse, ExecuteMsg, HasRoleResponse, InflationMultiplierResponse, InstantiateMsg,
    MigrateMsg, QueryMsg, Role, RoleAdminResponse, TokenInfoResponse,
};

use crate::error::ContractError;
use crate::state::{
    has_role, TokenInfo, BASE_BALANCES, BURNERS, CONTRACT_NAME, CONTRACT_VERSION,
    INFLATION_MULTIPLIER, MINTERS, REBASERS, ROLE_ADMIN, TOKEN_INFO, TOTAL_BASE,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let bridge = deps.api.addr_validate(&msg.bridge)?;

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            home_token: msg.home_token,
        },
    )?;
    INFLATION_MULTIPLIER.save(deps.storage, &Uint128::one())?;
    TOTAL_BASE.save(deps.storage, &Uint128::zero())?;

    // Bootstrap: the bridge holds every capability and administers the sets.
    MINTERS.save(deps.storage, &bridge, &true)?;
    BURNERS.save(deps.storage, &bridge, &true)?;
    REBASERS.save(deps.storage, &bridge, &true)?;
    ROLE_ADMIN.save(deps.storage, &bridge)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("bridge", bridge))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::Burn { owner, amount } => execute_burn(deps, info, owner, amount),
        ExecuteMsg::Rebase {
            inflation_multiplier,
        } => execute_rebase(deps, info, inflation_multiplier),
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::UpdateMinters { address, enabled } => {
            execute_update_role(deps, info, Role::Minter, address, enabled)
        }
        ExecuteMsg::UpdateBurners { address, enabled } => {
            execute_update_role(deps, info, Role::Burner, address, enabled)
        }
        ExecuteMsg::UpdateRebasers { address, enabled } => {
            execute_update_role(deps, info, Role::Rebaser, address, enabled)
        }
        ExecuteMsg::UpdateRoleAdmin { address } => execute_update_role_admin(deps, info, address),
    }
}

/// Credit `amount` reported units. The credited base value is
/// `amount / multiplier`, truncating: dust below one multiplier unit is
/// dropped, never redistributed.
fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if !has_role(deps.storage, Role::Minter, &info.sender)? {
        return Err(ContractError::UnauthorizedMinter);
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    let multiplier = INFLATION_MULTIPLIER.load(deps.storage)?;
    let base = scale_down(amount, multiplier)?;

    BASE_BALANCES.update(deps.storage, &recipient, |b| -> StdResult<_> {
        Ok(b.unwrap_or_default().checked_add(base)?)
    })?;
    TOTAL_BASE.update(deps.storage, |t| -> StdResult<_> {
        Ok(t.checked_add(base)?)
    })?;

    // transfer-style event from the zero address
    Ok(Response::new()
        .add_attribute("method", "mint")
        .add_attribute("from", "0")
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_attribute("base_amount", base))
}

fn execute_burn(
    mut deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;

    // self-burn is always permitted
    if info.sender != owner && !has_role(deps.storage, Role::Burner, &info.sender)? {
        return Err(ContractError::UnauthorizedBurner);
    }

    let multiplier = INFLATION_MULTIPLIER.load(deps.storage)?;
    let base = debit_reported(deps.branch(), &owner, amount, multiplier)?;
    TOTAL_BASE.update(deps.storage, |t| -> StdResult<_> {
        Ok(t.checked_sub(base)?)
    })?;

    Ok(Response::new()
        .add_attribute("method", "burn")
        .add_attribute("from", owner)
        .add_attribute("to", "0")
        .add_attribute("amount", amount)
        .add_attribute("base_amount", base))
}

/// O(1) rebase: only the multiplier changes; every reported balance moves
/// uniformly while all base values stay untouched.
fn execute_rebase(
    deps: DepsMut,
    info: MessageInfo,
    inflation_multiplier: Uint128,
) -> Result<Response, ContractError> {
    if !has_role(deps.storage, Role::Rebaser, &info.sender)? {
        return Err(ContractError::UnauthorizedRebaser);
    }
    if inflation_multiplier.is_zero() {
        return Err(ContractError::InvalidMultiplier);
    }

    INFLATION_MULTIPLIER.save(deps.storage, &inflation_multiplier)?;

    Ok(Response::new()
        .add_attribute("method", "rebase")
        .add_attribute("inflation_multiplier", inflation_multiplier))
}

fn execute_transfer(
    mut deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let multiplier = INFLATION_MULTIPLIER.load(deps.storage)?;

    let base = debit_reported(deps.branch(), &info.sender, amount, multiplier)?;
    BASE_BALANCES.update(deps.storage, &recipient, |b| -> StdResult<_> {
        Ok(b.unwrap_or_default().checked_add(base)?)
    })?;

    // both units are observable: external consumers may expect either
    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_attribute("base_amount", base))
}

/// Remove `amount` reported units from `owner`, returning the base value
/// moved. Fails if `amount` exceeds the current reported balance.
///
/// The base debit rounds UP: a debit may never move less value than `amount`,
/// or sub-multiplier remainders would be spendable for free. The reported
/// balance check guarantees the ceiling never exceeds the stored base value.
fn debit_reported(
    deps: DepsMut,
    owner: &Addr,
    amount: Uint128,
    multiplier: Uint128,
) -> Result<Uint128, ContractError> {
    let base_balance = BASE_BALANCES
        .may_load(deps.storage, owner)?
        .unwrap_or_default();
    let reported = scale_up(base_balance, multiplier)?;
    if amount > reported {
        return Err(ContractError::InsufficientBalance {
            balance: reported,
            required: amount,
        });
    }

    let base = scale_down_ceil(amount, multiplier)?;
    BASE_BALANCES.save(deps.storage, owner, &(base_balance - base))?;
    Ok(base)
}

fn execute_update_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    address: String,
    enabled: bool,
) -> Result<Response, ContractError> {
    assert_role_admin(deps.as_ref(), &info)?;

    let address = deps.api.addr_validate(&address)?;
    let (set, method) = match role {
        Role::Minter => (&MINTERS, "update_minters"),
        Role::Burner => (&BURNERS, "update_burners"),
        Role::Rebaser => (&REBASERS, "update_rebasers"),
    };
    set.save(deps.storage, &address, &enabled)?;

    Ok(Response::new()
        .add_attribute("method", method)
        .add_attribute("address", address)
        .add_attribute("enabled", enabled.to_string()))
}

fn execute_update_role_admin(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    assert_role_admin(deps.as_ref(), &info)?;

    let address = deps.api.addr_validate(&address)?;
    ROLE_ADMIN.save(deps.storage, &address)?;

    Ok(Response::new()
        .add_attribute("method", "update_role_admin")
        .add_attribute("role_admin", address))
}

fn assert_role_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != ROLE_ADMIN.load(deps.storage)? {
        return Err(ContractError::UnauthorizedRoleAdmin);
    }
    Ok(())
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenInfo {} => {
            let info = TOKEN_INFO.load(deps.storage)?;
            let multiplier = INFLATION_MULTIPLIER.load(deps.storage)?;
            let total_supply = scale_up(TOTAL_BASE.load(deps.storage)?, multiplier)?;
            to_json_binary(&TokenInfoResponse {
                name: info.name,
                symbol: info.symbol,
                decimals: info.decimals,
                total_supply,
                home_token: info.home_token,
            })
        }
        QueryMsg::Balance { address } => {
            let address = deps.api.addr_validate(&address)?;
            let base = BASE_BALANCES
                .may_load(deps.storage, &address)?
                .unwrap_or_default();
            let multiplier = INFLATION_MULTIPLIER.load(deps.storage)?;
            to_json_binary(&BalanceResponse {
                balance: scale_up(base, multiplier)?,
            })
        }
        QueryMsg::BaseBalance { address } => {
            let address = deps.api.addr_validate(&address)?;
            let balance = BASE_BALANCES
                .may_load(deps.storage, &address)?
                .unwrap_or_default();
            to_json_binary(&BaseBalanceResponse { balance })
        }
        QueryMsg::InflationMultiplier {} => to_json_binary(&InflationMultiplierResponse {
            inflation_multiplier: INFLATION_MULTIPLIER.load(deps.storage)?,
        }),
        QueryMsg::RoleAdmin {} => to_json_binary(&RoleAdminResponse {
            role_admin: ROLE_ADMIN.load(deps.storage)?.into_string(),
        }),
        QueryMsg::HasRole { role, address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&HasRoleResponse {
                has_role: has_role(deps.storage, role, &address)?,
            })
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
