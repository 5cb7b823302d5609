//! Minimal interface of the home-chain rebasing token.
//!
//! The home token is an external collaborator: the bridge escrows it with
//! standard `cw20::Cw20ExecuteMsg` transfers and reads its inflation
//! multiplier through this query. Nothing else about the token is assumed.

use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::token::InflationMultiplierResponse;

#[cw_serde]
#[derive(QueryResponses)]
pub enum HomeTokenQueryMsg {
    #[returns(InflationMultiplierResponse)]
    InflationMultiplier {},
}
