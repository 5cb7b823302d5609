//! Error types for the foreign-chain bridge.

use cosmwasm_std::StdError;
use thiserror::Error;

use common::messenger::CrossDomainError;
use common::upgrade::UpgradeError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    CrossDomain(#[from] CrossDomainError),

    #[error(transparent)]
    Upgrade(#[from] UpgradeError),

    #[error("unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("token already set")]
    AlreadyInitialized,

    #[error("token not set, bridge is not active")]
    NotInitialized,

    #[error("invalid foreign token address: {token}")]
    InvalidForeignToken { token: String },

    #[error("invalid home token address: {token}")]
    InvalidHomeToken { token: String },

    #[error("invalid inflation multiplier")]
    InvalidMultiplier,
}
