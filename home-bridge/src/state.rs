//! State definitions for the home-chain bridge.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// Cross-domain messenger on this chain
    pub messenger: Addr,
    /// Foreign-chain bridge counterpart (opaque remote address)
    pub foreign_bridge: String,
    /// Home token held in escrow by this bridge
    pub token: Addr,
    /// Bridged representation on the foreign chain (opaque remote address)
    pub foreign_token: String,
    /// The only account allowed to issue upgrade directives
    pub upgrader: Addr,
}

/// An escrow release dispatched as a submessage, kept until its reply
/// arrives. On failure the reply handler rebuilds the compensating
/// deposit-finalization from this record.
#[cw_serde]
pub struct PendingRelease {
    pub home_token: String,
    pub foreign_token: String,
    pub from: String,
    pub to: String,
    /// Original wire-unit amount, re-sent unchanged on the u-turn
    pub wire_amount: Uint128,
    /// Reported-unit amount the release attempted to transfer
    pub released: Uint128,
    pub extra_data: Binary,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:home-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id of the escrow-release submessage
pub const RELEASE_REPLY_ID: u64 = 1;

pub const CONFIG: Item<Config> = Item::new("config");

/// Cached inflation multiplier of the home token. Fetched at instantiation
/// and refreshed only by `Rebase`.
pub const INFLATION_MULTIPLIER: Item<Uint128> = Item::new("inflation_multiplier");

/// In-flight escrow release. Chains execute transactions serially, so a
/// single slot is sufficient: the reply consuming it runs in the same
/// transaction that stored it.
pub const PENDING_RELEASE: Item<PendingRelease> = Item::new("pending_release");
