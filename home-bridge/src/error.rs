//! Error types for the home-chain bridge.

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

    #[error("account not EOA: contracts cannot deposit")]
    AccountNotEOA,

    #[error("caller not authorized to upgrade")]
    UnauthorizedUpgrader,

    #[error("invalid home token address: {token}")]
    InvalidHomeToken { token: String },

    #[error("invalid foreign token address: {token}")]
    InvalidForeignToken { token: String },

    #[error("unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("no pending release for reply")]
    MissingPendingRelease,
}
