//! Withdrawal finalization and the u-turn fallback.
//!
//! The escrow release is dispatched as a submessage with `reply_always`. A
//! successful reply finalizes the withdrawal; a failed reply swallows the
//! error and instead messages the foreign bridge to re-mint to the original
//! sender, so a frozen or paused escrow never strands value.

use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, MessageInfo, Response, SubMsg, SubMsgResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::foreign_bridge::ExecuteMsg as ForeignBridgeExecuteMsg;
use common::messenger::{authenticate_cross_domain, MessengerExecuteMsg};
use common::scale::scale_down;

use crate::error::ContractError;
use crate::state::{PendingRelease, CONFIG, INFLATION_MULTIPLIER, PENDING_RELEASE, RELEASE_REPLY_ID};

/// Release escrow for a withdrawal burned on the foreign chain.
///
/// `amount` arrives in wire units and is scaled down by the cached
/// multiplier before the transfer.
#[allow(clippy::too_many_arguments)]
pub fn execute_finalize_withdrawal(
    deps: DepsMut,
    info: MessageInfo,
    home_token: String,
    foreign_token: String,
    from: String,
    to: String,
    amount: Uint128,
    extra_data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    authenticate_cross_domain(
        &deps.querier,
        &info,
        &config.messenger,
        &config.foreign_bridge,
    )?;

    if home_token != config.token.as_str() {
        return Err(ContractError::InvalidHomeToken { token: home_token });
    }
    if foreign_token != config.foreign_token {
        return Err(ContractError::InvalidForeignToken {
            token: foreign_token,
        });
    }

    let multiplier = INFLATION_MULTIPLIER.load(deps.storage)?;
    let released = scale_down(amount, multiplier)?;
    let recipient = deps.api.addr_validate(&to)?;

    let pending = PendingRelease {
        home_token,
        foreign_token,
        from,
        to,
        wire_amount: amount,
        released,
        extra_data,
    };
    PENDING_RELEASE.save(deps.storage, &pending)?;

    let release = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.into_string(),
            amount: released,
        })?,
        funds: vec![],
    };

    let mut res = Response::new()
        .add_submessage(SubMsg::reply_always(release, RELEASE_REPLY_ID))
        .add_attribute("method", "finalize_withdrawal")
        .add_attribute("home_token", pending.home_token)
        .add_attribute("foreign_token", pending.foreign_token)
        .add_attribute("from", pending.from)
        .add_attribute("to", pending.to)
        .add_attribute("amount", amount);
    if !pending.extra_data.is_empty() {
        res = res.add_attribute("extra_data", pending.extra_data.to_base64());
    }
    Ok(res)
}

/// Handle the reply of the escrow-release submessage.
///
/// On failure the compensating message carries the original wire amount
/// unchanged, addressed to the original sender, with a zero gas limit (the
/// relayer tops it up out of band).
pub fn reply_release(deps: DepsMut, result: SubMsgResult) -> Result<Response, ContractError> {
    let pending = PENDING_RELEASE
        .may_load(deps.storage)?
        .ok_or(ContractError::MissingPendingRelease)?;
    PENDING_RELEASE.remove(deps.storage);

    match result {
        SubMsgResult::Ok(_) => {
            let mut res = Response::new()
                .add_attribute("method", "withdrawal_finalized")
                .add_attribute("home_token", pending.home_token)
                .add_attribute("foreign_token", pending.foreign_token)
                .add_attribute("from", pending.from)
                .add_attribute("to", pending.to)
                .add_attribute("amount", pending.released);
            if !pending.extra_data.is_empty() {
                res = res.add_attribute("extra_data", pending.extra_data.to_base64());
            }
            Ok(res)
        }
        SubMsgResult::Err(err) => {
            let config = CONFIG.load(deps.storage)?;

            let finalize = ForeignBridgeExecuteMsg::FinalizeDeposit {
                home_token: pending.home_token.clone(),
                foreign_token: pending.foreign_token.clone(),
                from: pending.from.clone(),
                to: pending.from.clone(),
                amount: pending.wire_amount,
                extra_data: pending.extra_data.clone(),
            };
            let send_msg = WasmMsg::Execute {
                contract_addr: config.messenger.to_string(),
                msg: to_json_binary(&MessengerExecuteMsg::SendMessage {
                    target: config.foreign_bridge,
                    message: to_json_binary(&finalize)?,
                    gas_limit: 0,
                })?,
                funds: vec![],
            };

            let mut res = Response::new()
                .add_message(send_msg)
                .add_attribute("method", "withdrawal_failed")
                .add_attribute("home_token", pending.home_token)
                .add_attribute("foreign_token", pending.foreign_token)
                .add_attribute("from", pending.from)
                .add_attribute("to", pending.to)
                .add_attribute("amount", pending.wire_amount)
                .add_attribute("error", err);
            if !pending.extra_data.is_empty() {
                res = res.add_attribute("extra_data", pending.extra_data.to_base64());
            }
            Ok(res)
        }
    }
}
