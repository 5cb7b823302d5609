//! One-shot bootstrap handler.
//!
//! The bridge and the token reference each other, so the bridge is
//! instantiated first (Uninitialized) and activated once the token exists.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, TOKEN};

/// Register the token contract and activate the bridge. Owner only; fails
/// with `AlreadyInitialized` once set.
pub fn execute_set_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    if TOKEN.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let token = deps.api.addr_validate(&token)?;
    TOKEN.save(deps.storage, &token)?;

    Ok(Response::new()
        .add_attribute("method", "set_token")
        .add_attribute("token", token))
}
