//! Cross-domain messenger interface.
//!
//! The messenger is an external collaborator: an authenticated one-way
//! message channel with one instance per chain. The bridges only construct
//! and send envelopes, or authenticate inbound deliveries - they never
//! implement relay or proof logic themselves.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, MessageInfo, QuerierWrapper, StdError};
use thiserror::Error;

/// Outbound surface of the messenger.
#[cw_serde]
pub enum MessengerExecuteMsg {
    /// Send an encoded call to `target` on the other domain.
    SendMessage {
        /// Counterpart contract address on the other chain
        target: String,
        /// JSON-encoded `ExecuteMsg` the counterpart expects
        message: Binary,
        /// Gas limit reserved for delivery on the other chain
        gas_limit: u32,
    },
}

/// Introspection surface of the messenger on the receiving chain.
#[cw_serde]
#[derive(QueryResponses)]
pub enum MessengerQueryMsg {
    /// Which other-domain address authored the call currently being delivered
    #[returns(XDomainMessageSenderResponse)]
    XDomainMessageSender {},
}

#[cw_serde]
pub struct XDomainMessageSenderResponse {
    pub sender: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum CrossDomainError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("messenger contract unauthenticated")]
    InvalidMessenger,

    #[error("wrong sender of cross-domain message: {sender}")]
    InvalidXDomainSender { sender: String },
}

/// Authenticate an inbound cross-domain call.
///
/// Checks run in a fixed order, before any state mutation in the caller:
/// 1. the immediate caller must be the registered messenger,
/// 2. the messenger's reported x-domain sender must be `counterpart`.
///
/// This is the sole replay/spoofing defense; idempotency of delivery is the
/// messenger's job.
pub fn authenticate_cross_domain(
    querier: &QuerierWrapper,
    info: &MessageInfo,
    messenger: &Addr,
    counterpart: &str,
) -> Result<(), CrossDomainError> {
    if info.sender != *messenger {
        return Err(CrossDomainError::InvalidMessenger);
    }

    let res: XDomainMessageSenderResponse = querier.query_wasm_smart(
        messenger.to_string(),
        &MessengerQueryMsg::XDomainMessageSender {},
    )?;
    if res.sender != counterpart {
        return Err(CrossDomainError::InvalidXDomainSender { sender: res.sender });
    }

    Ok(())
}
