//! Message types for the home-chain bridge contract.
//!
//! `FinalizeWithdrawal` is the cross-domain entry point emitted by the
//! foreign bridge; its serialized form is the wire format.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::token::InflationMultiplierResponse;

#[cw_serde]
pub struct InstantiateMsg {
    /// Cross-domain messenger on this chain
    pub messenger: String,
    /// Foreign-chain bridge counterpart (opaque remote address)
    pub foreign_bridge: String,
    /// Home token held in escrow by this bridge
    pub token: String,
    /// Bridged token representation on the foreign chain (opaque remote
    /// address)
    pub foreign_token: String,
    /// The only account allowed to issue upgrade directives
    pub upgrader: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Escrow `amount` of the home token and message the foreign bridge to
    /// mint to the caller. Rejected for contract callers.
    Deposit {
        token: String,
        foreign_token: String,
        amount: Uint128,
        min_gas_limit: u32,
        extra_data: Binary,
    },

    /// Escrow `amount` and message the foreign bridge to mint to `recipient`.
    DepositTo {
        token: String,
        foreign_token: String,
        recipient: String,
        amount: Uint128,
        min_gas_limit: u32,
        extra_data: Binary,
    },

    /// Release escrow for a withdrawal burned on the foreign chain.
    /// Cross-domain gated to the foreign bridge. `amount` is in wire units.
    /// A failed release does not reject the message: it degrades to the
    /// u-turn compensation (re-mint on the foreign chain).
    FinalizeWithdrawal {
        home_token: String,
        foreign_token: String,
        from: String,
        to: String,
        amount: Uint128,
        extra_data: Binary,
    },

    /// Permissionless: read the home token's current inflation multiplier and
    /// relay it to the foreign bridge.
    Rebase { min_gas_limit: u32 },

    /// Relay a token implementation upgrade to the foreign bridge.
    /// Upgrader only.
    UpgradeForeignToken { code_id: u64, min_gas_limit: u32 },

    /// Relay a bridge implementation upgrade to the foreign bridge.
    /// Upgrader only.
    UpgradeForeignBridge { code_id: u64, min_gas_limit: u32 },

    /// Swap this bridge's own implementation locally. Upgrader only, and the
    /// bridge must hold the upgrade authority over itself.
    UpgradeSelf { code_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// Cached home-token multiplier used for wire conversions
    #[returns(InflationMultiplierResponse)]
    InflationMultiplier {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub messenger: String,
    pub foreign_bridge: String,
    pub token: String,
    pub foreign_token: String,
    pub upgrader: String,
}

#[cw_serde]
pub struct MigrateMsg {}
