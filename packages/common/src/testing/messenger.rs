//! Mock cross-domain messenger.
//!
//! Records every outbound envelope for assertion, and delivers inbound calls
//! through `Relay` with an explicitly chosen x-domain sender so tests can
//! spoof origins at will. Delivery timing is entirely under test control: a
//! recorded message can be relayed never, once, or after arbitrary delay.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, WasmMsg,
};
use cw_storage_plus::Item;

use crate::messenger::XDomainMessageSenderResponse;

pub const SENT_MESSAGES: Item<Vec<SentMessage>> = Item::new("sent_messages");
pub const X_DOMAIN_SENDER: Item<String> = Item::new("x_domain_sender");

#[cw_serde]
pub struct SentMessage {
    pub target: String,
    pub message: Binary,
    pub gas_limit: u32,
}

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Production interface: serde-compatible with
    /// `MessengerExecuteMsg::SendMessage`.
    SendMessage {
        target: String,
        message: Binary,
        gas_limit: u32,
    },
    /// Test control: pin the reported x-domain sender.
    SetXDomainMessageSender { sender: String },
    /// Test control: deliver `message` to `target` as if `sender` authored it
    /// on the other domain.
    Relay {
        sender: String,
        target: String,
        message: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(XDomainMessageSenderResponse)]
    XDomainMessageSender {},
    #[returns(SentMessagesResponse)]
    SentMessages {},
}

#[cw_serde]
pub struct SentMessagesResponse {
    pub messages: Vec<SentMessage>,
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    SENT_MESSAGES.save(deps.storage, &vec![])?;
    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::SendMessage {
            target,
            message,
            gas_limit,
        } => {
            let mut sent = SENT_MESSAGES.load(deps.storage)?;
            sent.push(SentMessage {
                target,
                message,
                gas_limit,
            });
            SENT_MESSAGES.save(deps.storage, &sent)?;
            Ok(Response::new())
        }
        ExecuteMsg::SetXDomainMessageSender { sender } => {
            X_DOMAIN_SENDER.save(deps.storage, &sender)?;
            Ok(Response::new())
        }
        ExecuteMsg::Relay {
            sender,
            target,
            message,
        } => {
            X_DOMAIN_SENDER.save(deps.storage, &sender)?;
            Ok(Response::new().add_message(WasmMsg::Execute {
                contract_addr: target,
                msg: message,
                funds: vec![],
            }))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::XDomainMessageSender {} => {
            let sender = X_DOMAIN_SENDER.may_load(deps.storage)?.unwrap_or_default();
            to_json_binary(&XDomainMessageSenderResponse { sender })
        }
        QueryMsg::SentMessages {} => {
            let messages = SENT_MESSAGES.load(deps.storage)?;
            to_json_binary(&SentMessagesResponse { messages })
        }
    }
}
