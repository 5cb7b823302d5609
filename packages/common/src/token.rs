//! Message types for the rebasing token contract (foreign chain).

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

/// Capability roles on the token. Membership is checked as a pure function of
/// (role, address) over independent mappings.
#[cw_serde]
#[derive(Copy)]
pub enum Role {
    Minter,
    Burner,
    Rebaser,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Address of the backing token on the home chain (opaque remote address)
    pub home_token: String,
    /// Foreign-chain bridge: granted all three roles and role admin at
    /// bootstrap
    pub bridge: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Credit `amount` reported units to `recipient`. Minter role required.
    Mint { recipient: String, amount: Uint128 },
    /// Debit `amount` reported units from `owner`. Burner role required,
    /// except self-burn which is always permitted.
    Burn { owner: String, amount: Uint128 },
    /// Replace the global inflation multiplier. Rebaser role required.
    /// O(1): no account storage is touched.
    Rebase { inflation_multiplier: Uint128 },
    /// Move `amount` reported units from the sender to `recipient`.
    Transfer { recipient: String, amount: Uint128 },
    /// Flip `address`'s minter membership. Role admin only.
    UpdateMinters { address: String, enabled: bool },
    /// Flip `address`'s burner membership. Role admin only.
    UpdateBurners { address: String, enabled: bool },
    /// Flip `address`'s rebaser membership. Role admin only.
    UpdateRebasers { address: String, enabled: bool },
    /// Replace the role admin. Role admin only.
    UpdateRoleAdmin { address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    /// Reported balance: base x current multiplier
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },
    /// Multiplier-invariant base balance
    #[returns(BaseBalanceResponse)]
    BaseBalance { address: String },
    #[returns(InflationMultiplierResponse)]
    InflationMultiplier {},
    #[returns(RoleAdminResponse)]
    RoleAdmin {},
    #[returns(HasRoleResponse)]
    HasRole { role: Role, address: String },
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Reported total supply
    pub total_supply: Uint128,
    pub home_token: String,
}

#[cw_serde]
pub struct BaseBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct InflationMultiplierResponse {
    pub inflation_multiplier: Uint128,
}

#[cw_serde]
pub struct RoleAdminResponse {
    pub role_admin: String,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct MigrateMsg {}
