use cosmwasm_std::{to_binary, Addr, DepsMut, Event, MessageInfo, StdResult, Uint128, WasmMsg};
use cw_utils::may_pay;
use rose_gold_collection::{ExecuteMsg as CollectionExecuteMsg, MintMsg};
use sg_std::{Response, NATIVE_DENOM};

use crate::access::is_on_allow_list;
use crate::error::ContractError;
use crate::state::{COLLECTION, MINT_WINDOWS, PAUSED, SUDO_PARAMS, TOTAL_COLLECTED};
use crate::supply::issue_next;

pub fn execute_public_mint(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    if PAUSED.load(deps.storage)? {
        return Err(ContractError::Paused {});
    }
    if !MINT_WINDOWS.load(deps.storage)?.public_mint_open {
        return Err(ContractError::public_mint_closed());
    }

    let params = SUDO_PARAMS.load(deps.storage)?;
    let payment = check_payment(&info, params.public_mint_price)?;

    mint(deps, info.sender, payment, "public_mint")
}

pub fn execute_allow_list_mint(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    if PAUSED.load(deps.storage)? {
        return Err(ContractError::Paused {});
    }
    if !MINT_WINDOWS.load(deps.storage)?.allow_list_mint_open {
        return Err(ContractError::allow_list_mint_closed());
    }
    if !is_on_allow_list(deps.storage, &info.sender) {
        return Err(ContractError::NotAllowListed {});
    }

    let params = SUDO_PARAMS.load(deps.storage)?;
    let payment = check_payment(&info, params.allow_list_mint_price)?;

    mint(deps, info.sender, payment, "allow_list_mint")
}

/// Payment must be in the native denom and at least the price.
/// Anything above the price is kept.
fn check_payment(info: &MessageInfo, price: Uint128) -> Result<Uint128, ContractError> {
    let payment = may_pay(info, NATIVE_DENOM)?;
    if payment < price {
        return Err(ContractError::InsufficientPayment {
            got: payment,
            expected: price,
        });
    }
    Ok(payment)
}

fn mint(
    deps: DepsMut,
    recipient: Addr,
    payment: Uint128,
    action: &str,
) -> Result<Response, ContractError> {
    let collection = COLLECTION.load(deps.storage)?;
    let token_id = issue_next(deps.storage)?.to_string();

    TOTAL_COLLECTED.update(deps.storage, |total| -> StdResult<_> {
        Ok(total.checked_add(payment)?)
    })?;

    let mint_msg = CollectionExecuteMsg::Mint(MintMsg {
        token_id: token_id.clone(),
        owner: recipient.to_string(),
        token_uri: None,
        extension: None,
    });
    let msg = WasmMsg::Execute {
        contract_addr: collection.to_string(),
        msg: to_binary(&mint_msg)?,
        funds: vec![],
    };

    let event = Event::new(action)
        .add_attribute("collection", collection)
        .add_attribute("token_id", token_id)
        .add_attribute("recipient", recipient)
        .add_attribute("payment", payment.to_string());

    Ok(Response::new().add_message(msg).add_event(event))
}
