//! Message types for the foreign-chain bridge contract.
//!
//! `FinalizeDeposit`, `Rebase`, `UpgradeToken` and `UpgradeSelf` are the
//! cross-domain entry points: they may only arrive through the messenger with
//! the home bridge as the authenticated x-domain sender. Their serialized
//! form is the wire format the home bridge emits - field names and types are
//! a versioned contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::token::InflationMultiplierResponse;

#[cw_serde]
pub struct InstantiateMsg {
    /// Cross-domain messenger on this chain
    pub messenger: String,
    /// Home-chain bridge counterpart (opaque remote address)
    pub home_bridge: String,
    /// Home-chain token backing the bridged representation
    pub home_token: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// One-shot bootstrap: register the token contract and activate the
    /// bridge. Owner only; fails once set.
    SetToken { token: String },

    /// Finalize a deposit escrowed on the home chain by minting here.
    /// Cross-domain gated to the home bridge. `amount` is in wire units
    /// (home reported amount x home multiplier).
    FinalizeDeposit {
        home_token: String,
        foreign_token: String,
        from: String,
        to: String,
        amount: Uint128,
        extra_data: Binary,
    },

    /// Burn from the caller and message home to release escrow to the caller.
    Withdraw {
        foreign_token: String,
        amount: Uint128,
        min_gas_limit: u32,
        extra_data: Binary,
    },

    /// Burn from the caller and message home to release escrow to `recipient`.
    WithdrawTo {
        foreign_token: String,
        recipient: String,
        amount: Uint128,
        min_gas_limit: u32,
        extra_data: Binary,
    },

    /// Adopt a new inflation multiplier and forward it to the token.
    /// Cross-domain gated to the home bridge.
    Rebase { inflation_multiplier: Uint128 },

    /// Migrate the token contract to a new implementation (code id).
    /// Cross-domain gated to the home bridge; requires upgrade authority.
    UpgradeToken { code_id: u64 },

    /// Migrate this bridge to a new implementation (code id).
    /// Cross-domain gated to the home bridge; requires upgrade authority.
    UpgradeSelf { code_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// Local copy of the inflation multiplier used for wire conversions
    #[returns(InflationMultiplierResponse)]
    InflationMultiplier {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub messenger: String,
    pub home_bridge: String,
    pub home_token: String,
    /// None while the bridge is still uninitialized
    pub token: Option<String>,
    pub owner: String,
}

#[cw_serde]
pub struct MigrateMsg {}
