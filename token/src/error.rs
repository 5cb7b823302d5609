//! Error types for the rebasing token.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("not authorized to mint")]
    UnauthorizedMinter,

    #[error("not authorized to burn")]
    UnauthorizedBurner,

    #[error("not authorized to rebase")]
    UnauthorizedRebaser,

    #[error("not authorized to edit roles")]
    UnauthorizedRoleAdmin,

    #[error("invalid inflation multiplier")]
    InvalidMultiplier,

    #[error("insufficient balance: have {balance}, need {required}")]
    InsufficientBalance {
        balance: Uint128,
        required: Uint128,
    },
}
