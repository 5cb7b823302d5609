//! State definitions for the foreign-chain bridge.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// Cross-domain messenger on this chain
    pub messenger: Addr,
    /// Home-chain bridge counterpart (opaque remote address)
    pub home_bridge: String,
    /// Home-chain token backing the bridged representation
    pub home_token: String,
    /// Deployer account allowed to run the one-shot bootstrap
    pub owner: Addr,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:foreign-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// The rebasing token this bridge mints and burns. Unset while the bridge is
/// still uninitialized; set exactly once.
pub const TOKEN: Item<Addr> = Item::new("token");

/// Local copy of the inflation multiplier, synchronized from the home chain
/// through `Rebase`. Used for every wire-unit conversion.
pub const INFLATION_MULTIPLIER: Item<Uint128> = Item::new("inflation_multiplier");
