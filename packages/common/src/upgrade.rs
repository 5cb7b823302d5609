//! Upgrade authority checks.
//!
//! An "implementation" here is a stored wasm code id and an upgrade is a
//! `WasmMsg::Migrate` - an atomic swap of the versioned implementation
//! record. The capability to perform that swap is wasm admin rights over the
//! target contract. A bridge may hold that capability over the token, over
//! itself (self-upgrade), or not at all.

use cosmwasm_std::{Addr, QuerierWrapper, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum UpgradeError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("caller is not the owner of the upgrade authority")]
    NotOwner,
}

/// Verify that `holder` is the wasm admin of `target` before issuing a
/// migration. Checked up front so authorization failures reject atomically
/// instead of surfacing as a failed submessage.
pub fn assert_upgrade_authority(
    querier: &QuerierWrapper,
    holder: &Addr,
    target: &Addr,
) -> Result<(), UpgradeError> {
    let info = querier.query_wasm_contract_info(target.to_string())?;
    match info.admin {
        Some(admin) if admin == holder.as_str() => Ok(()),
        _ => Err(UpgradeError::NotOwner),
    }
}
