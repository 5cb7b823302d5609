//! Rebasing Token Contract
//!
//! An ERC20-style ledger whose reported balance is a multiplier-scaled view
//! over an internally tracked base value: `reported = base x multiplier`.
//! Rebase replaces the multiplier only, so every reported balance changes
//! uniformly in O(1) regardless of how many accounts exist.
//!
//! Mint, burn and rebase are gated by independent role sets managed by a
//! single role admin; the foreign bridge receives all roles at bootstrap.

pub mod contract;
pub mod error;
pub mod state;

pub use crate::error::ContractError;
