//! State definitions for the rebasing token.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use common::token::Role;

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Backing token on the home chain (opaque remote address)
    pub home_token: String,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:rebase-token";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Global inflation multiplier. Invariant: always > 0.
pub const INFLATION_MULTIPLIER: Item<Uint128> = Item::new("inflation_multiplier");

/// Per-account base value - the only persisted per-account quantity.
/// Reported balance = base x multiplier. Never deleted, only zeroed.
pub const BASE_BALANCES: Map<&Addr, Uint128> = Map::new("base_balances");

/// Total supply in base units.
pub const TOTAL_BASE: Item<Uint128> = Item::new("total_base");

/// The single account allowed to mutate role sets (and replace itself).
pub const ROLE_ADMIN: Item<Addr> = Item::new("role_admin");

pub const MINTERS: Map<&Addr, bool> = Map::new("minters");
pub const BURNERS: Map<&Addr, bool> = Map::new("burners");
pub const REBASERS: Map<&Addr, bool> = Map::new("rebasers");

/// Capability check: pure function of (role, address) over the role sets.
pub fn has_role(storage: &dyn Storage, role: Role, addr: &Addr) -> StdResult<bool> {
    let set = match role {
        Role::Minter => &MINTERS,
        Role::Burner => &BURNERS,
        Role::Rebaser => &REBASERS,
    };
    Ok(set.may_load(storage, addr)?.unwrap_or(false))
}
